use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier of a cached read.
///
/// Parameters are kept sorted so that the same logical request always maps to the
/// same key, whatever order the caller added them in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    resource: &'static str,
    params: BTreeMap<&'static str, String>,
}

impl QueryKey {
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            params: BTreeMap::new(),
        }
    }

    /// Builder method to add a parameter.
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.insert(name, value.to_string());
        self
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Whether this key is one of the given resources, regardless of parameters.
    pub fn belongs_to(&self, resources: &[&str]) -> bool {
        resources.iter().any(|r| *r == self.resource)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_order_does_not_matter() {
        let a = QueryKey::new("matches").with("rings", 2).with("limit", 20);
        let b = QueryKey::new("matches").with("limit", 20).with("rings", 2);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "matches?limit=20&rings=2");
    }

    #[test]
    fn test_belongs_to_ignores_params() {
        let key = QueryKey::new("matches").with("rings", 3);
        assert!(key.belongs_to(&["me", "matches"]));
        assert!(!key.belongs_to(&["feed"]));
        assert_eq!(key.param("rings"), Some("3"));
        assert_eq!(QueryKey::new("me").to_string(), "me");
    }
}
