//! Sink configuration

use crate::error::{SinkError, SinkResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every sink writing to the same log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// The shared append-only log file
    pub log_path: PathBuf,
    /// Prefix turning a page title into its resource URI
    pub resource_namespace: String,
    /// Language tag given to plain-string literals that carry none
    pub default_language: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            resource_namespace: "http://dbpedia.org/resource/".to_string(),
            default_language: "en".to_string(),
        }
    }
}

impl SinkConfig {
    /// Load a YAML config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> SinkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SinkError::io(path, e))?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> SinkResult<Self> {
        serde_yaml::from_str(text).map_err(|e| SinkError::Config(e.to_string()))
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Resource URI for a page title: namespace + title, spaces as underscores.
    pub fn resource_uri(&self, page_title: &str) -> String {
        format!("{}{}", self.resource_namespace, page_title.trim().replace(' ', "_"))
    }
}

/// `<data dir>/quadsink/triples.log` (e.g. `~/.local/share/quadsink/triples.log`)
///
/// Creates the `quadsink` directory if needed. An explicitly configured path
/// gets no such treatment: its parent must already exist.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    let quadsink_dir = data_dir.join("quadsink");
    std::fs::create_dir_all(&quadsink_dir).ok();
    quadsink_dir.join("triples.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_dbpedia_english() {
        let config = SinkConfig::default();
        assert_eq!(config.resource_namespace, "http://dbpedia.org/resource/");
        assert_eq!(config.default_language, "en");
        assert!(config.log_path.ends_with("quadsink/triples.log"));
    }

    #[test]
    fn yaml_overrides_only_given_keys() {
        let config = SinkConfig::from_yaml("log_path: /var/log/triples.log\ndefault_language: de\n").unwrap();
        assert_eq!(config.log_path, PathBuf::from("/var/log/triples.log"));
        assert_eq!(config.default_language, "de");
        assert_eq!(config.resource_namespace, "http://dbpedia.org/resource/");
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let err = SinkConfig::from_yaml("log_path: [unclosed").unwrap_err();
        assert!(matches!(err, SinkError::Config(_)));
    }

    #[test]
    fn resource_uri_underscores_spaces() {
        let config = SinkConfig::default();
        assert_eq!(
            config.resource_uri("Albert Einstein"),
            "http://dbpedia.org/resource/Albert_Einstein"
        );
    }
}
