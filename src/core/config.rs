//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, bundle paths and reload port come from
//! `[package.metadata.leptos]` instead.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses (brotli + gzip). `VERDANT_COMPRESSION`, default on.
    pub compression: bool,

    /// Serve pre-built `.br`/`.gz` bundle files when present.
    /// `VERDANT_PRECOMPRESSED`, default on.
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str, default: bool| match lookup(key) {
            None => default,
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                tracing::warn!(key, %value, "unrecognised boolean value, using default");
                default
            }),
        };

        Self {
            compression: flag("VERDANT_COMPRESSION", true),
            precompressed_assets: flag("VERDANT_PRECOMPRESSED", true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Lookups are driven from a map so tests never touch process env

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_flags_disabled() {
        let config = Config::from_lookup(lookup_from(&[
            ("VERDANT_COMPRESSION", "false"),
            ("VERDANT_PRECOMPRESSED", "0"),
        ]));
        assert!(!config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_flag_parsing_is_lenient_about_case() {
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("VERDANT_COMPRESSION", "sometimes")]));
        assert!(config.compression);
    }
}
