//! Viewer configuration, read from the environment.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the question API.
    pub api_url: String,
    /// Initial viewport width in pixels.
    pub viewport_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl Config {
    /// Load from environment variables.
    ///
    /// - QUESTION_API_URL: API base URL
    /// - VIEWPORT_WIDTH: viewport width in pixels
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("QUESTION_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let viewport_width = match lookup("VIEWPORT_WIDTH") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "VIEWPORT_WIDTH",
                value,
            })?,
            None => DEFAULT_VIEWPORT_WIDTH,
        };

        Ok(Self {
            api_url,
            viewport_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("QUESTION_API_URL", "http://quiz.local:8080"),
            ("VIEWPORT_WIDTH", " 600 "),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://quiz.local:8080");
        assert_eq!(config.viewport_width, 600);
    }

    #[test]
    fn test_bad_width() {
        let err = Config::from_lookup(lookup(&[("VIEWPORT_WIDTH", "wide")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid VIEWPORT_WIDTH: wide");
    }
}
