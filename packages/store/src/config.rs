//! # Client configuration: `Synapse.toml`
//!
//! Defines the TOML file the frontends are built with (filename:
//! [`ClientConfig::filename`] = `"Synapse.toml"`). It tells the client where the
//! API lives and tunes a few UI timings and page sizes.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api/v1"
//!
//! [ui]
//! success_reset_ms = 3000   # how long a success state stays on screen
//! focus_tick_ms = 1000      # focus timer refresh period
//! feed_limit = 10
//! match_limit = 20
//! default_rings = 2         # 1-3, H3 rings searched for matches
//!
//! [log]
//! level = "info"            # trace, debug, info, warn or error
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Builder helper (`with_base_url`), TOML (de)serialisation, lenient [`load`](ClientConfig::load), and the canonical filename. |
//! | [`ApiConfig`] | API section: the `base_url`, API prefix included. |
//! | [`UiConfig`] | UI section: success reset delay, focus tick, feed and match limits, default ring count. |
//! | [`LogConfig`] | Log section: the most verbose level emitted. |
//!
//! Every field has a default, so a missing section or an empty file is the
//! default configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the API prefix. A trailing `/` is tolerated.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_success_reset_ms")]
    pub success_reset_ms: u64,
    #[serde(default = "default_focus_tick_ms")]
    pub focus_tick_ms: u64,
    #[serde(default = "default_feed_limit")]
    pub feed_limit: u32,
    #[serde(default = "default_match_limit")]
    pub match_limit: u32,
    #[serde(default = "default_rings")]
    pub default_rings: u8,
}

fn default_success_reset_ms() -> u64 {
    3000
}

fn default_focus_tick_ms() -> u64 {
    1000
}

fn default_feed_limit() -> u32 {
    10
}

fn default_match_limit() -> u32 {
    20
}

fn default_rings() -> u8 {
    2
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_reset_ms: default_success_reset_ms(),
            focus_tick_ms: default_focus_tick_ms(),
            feed_limit: default_feed_limit(),
            match_limit: default_match_limit(),
            default_rings: default_rings(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    /// The configured level, or `INFO` if it is not a level name.
    pub fn level(&self) -> Level {
        Level::from_str(self.level.trim()).unwrap_or_else(|_| {
            tracing::warn!(level = %self.level, "unknown log level, using info");
            Level::INFO
        })
    }
}

impl UiConfig {
    /// `default_rings` clamped to the 1-3 range the radar offers.
    pub fn rings(&self) -> u8 {
        self.default_rings.clamp(1, 3)
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "Synapse.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse, falling back to the defaults if the file is malformed.
    pub fn load(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid {}, using defaults", Self::filename());
            Self::default()
        })
    }
}
