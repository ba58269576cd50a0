use api::UserStats;
use dioxus::prelude::*;

#[component]
pub fn StatsGrid(stats: UserStats) -> Element {
    let cells = [
        ("Impact", stats.impact_score),
        ("Connections", stats.connections_count),
        ("Posts", stats.posts_count),
        ("Focus sessions", stats.focus_sessions_count),
        ("Focus minutes", stats.total_focus_minutes),
    ];
    rsx! {
        dl {
            class: "stats-grid",
            for (label, value) in cells {
                div {
                    key: "{label}",
                    class: "stats-grid__cell",
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
