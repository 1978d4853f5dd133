use std::path::PathBuf;

use docsite_core::Language;
use serde::Deserialize;

/// The `[changelog]` section of `docsite.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChangelogConfig {
    pub data_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub deprecations: Option<PathBuf>,
    #[serde(default)]
    pub default_language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChangelogConfig::default();
        assert!(config.data_dir.is_none());
        assert!(config.base_url.is_none());
        assert!(config.deprecations.is_none());
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn deserialize_config() {
        let toml = r#"
            data-dir = "site/data"
            base-url = "https://docs.example.com/data"
            deprecations = "bug-versions.json"
            default-language = "cn"
        "#;

        let config: ChangelogConfig = toml::from_str(toml).expect("should deserialize");
        assert_eq!(config.data_dir, Some(PathBuf::from("site/data")));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://docs.example.com/data")
        );
        assert_eq!(config.deprecations, Some(PathBuf::from("bug-versions.json")));
        assert_eq!(config.default_language, Language::Cn);
    }

    #[test]
    fn deserialize_partial_config() {
        let config: ChangelogConfig =
            toml::from_str(r#"data-dir = "data""#).expect("should deserialize");
        assert_eq!(config.data_dir, Some(PathBuf::from("data")));
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn deserialize_invalid_language_fails() {
        let result: Result<ChangelogConfig, _> = toml::from_str(r#"default-language = "fr""#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<ChangelogConfig, _> = toml::from_str(r#"data-directory = "x""#);
        assert!(result.is_err());
    }
}
