use serde::Deserialize;
use std::str::FromStr;

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

const ENV_DEFAULT_PAGE_SIZE: &str = "FILTER_DEFAULT_PAGE_SIZE";
const ENV_MAX_PAGE_SIZE: &str = "FILTER_MAX_PAGE_SIZE";
const ENV_STRICT: &str = "FILTER_STRICT";

/// Settings read when a [`crate::FilterOption`] is normalized.
///
/// Pass it to [`crate::FilterOption::apply_defaults`] directly, or keep it in
/// the Axum router state so the [`crate::NormalizedFilter`] extractor can find
/// it through `FromRef`.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/customers", get(list_customers))
///     .with_state(FilterConfig::default().with_default_page_size(25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Rows per page when `pageSize` is absent or zero.
    pub default_page_size: i64,
    /// Upper bound for `pageSize`, enforced in strict mode only.
    pub max_page_size: Option<i64>,
    /// Reject out-of-range and unrecognized parameters instead of
    /// normalizing them silently.
    pub strict: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
            strict: false,
        }
    }
}

impl FilterConfig {
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_max_page_size(mut self, page_size: i64) -> Self {
        self.max_page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build a config from `FILTER_DEFAULT_PAGE_SIZE`, `FILTER_MAX_PAGE_SIZE`
    /// and `FILTER_STRICT`. Missing or unparsable variables keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = parse_var::<i64>(&lookup, ENV_DEFAULT_PAGE_SIZE) {
            config.default_page_size = size;
        }
        if let Some(size) = parse_var::<i64>(&lookup, ENV_MAX_PAGE_SIZE) {
            config.max_page_size = Some(size);
        }
        if let Some(strict) = parse_var::<bool>(&lookup, ENV_STRICT) {
            config.strict = strict;
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = key, value = %raw, "Ignoring unparsable filter setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, None);
        assert!(!config.strict);
    }

    #[test]
    fn test_builder_methods() {
        let config = FilterConfig::default()
            .with_default_page_size(50)
            .with_max_page_size(200)
            .strict(true);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.max_page_size, Some(200));
        assert!(config.strict);
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = FilterConfig::from_lookup(lookup_from(&[
            ("FILTER_DEFAULT_PAGE_SIZE", "25"),
            ("FILTER_MAX_PAGE_SIZE", " 100 "),
            ("FILTER_STRICT", "true"),
        ]));
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_page_size, Some(100));
        assert!(config.strict);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = FilterConfig::from_lookup(lookup_from(&[
            ("FILTER_DEFAULT_PAGE_SIZE", "lots"),
            ("FILTER_STRICT", "yes please"),
        ]));
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FilterConfig =
            serde_json::from_value(serde_json::json!({ "default_page_size": 30 })).unwrap();
        assert_eq!(config.default_page_size, 30);
        assert!(!config.strict);
    }
}
