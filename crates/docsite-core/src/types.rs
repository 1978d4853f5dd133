use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Cn,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cn => "cn",
        }
    }

    /// Localized documentation pages carry a `-cn` suffix on their last path
    /// segment, e.g. `/components/button-cn/`.
    #[must_use]
    pub fn from_pathname(pathname: &str) -> Self {
        let path = pathname.split(['?', '#']).next().unwrap_or_default();
        let last = path.split('/').rev().find(|s| !s.is_empty());
        match last {
            Some(segment) if segment.ends_with("-cn") => Self::Cn,
            _ => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "cn" | "zh" | "zh-cn" => Ok(Self::Cn),
            _ => Err(CoreError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub version: String,
    pub changelog: String,
    #[serde(default)]
    pub refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(version: impl Into<String>, changelog: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            changelog: changelog.into(),
            refs: Vec::new(),
            release_date: None,
        }
    }

    #[must_use]
    pub fn with_refs<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.refs = refs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogGroup {
    pub version: String,
    pub entries: Vec<ChangelogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub matched_pattern: Option<String>,
    pub reasons: Vec<String>,
}

impl MatchResult {
    #[must_use]
    pub fn no_match() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn matched(pattern: impl Into<String>, reasons: Vec<String>) -> Self {
        Self {
            matched_pattern: Some(pattern.into()),
            reasons,
        }
    }

    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.matched_pattern.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    Text(String),
    Code(String),
}

impl Segment {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Text(value) | Self::Code(value) => value,
        }
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!("EN".parse::<Language>().expect("valid"), Language::En);
        assert_eq!("cn".parse::<Language>().expect("valid"), Language::Cn);
        assert_eq!("zh-CN".parse::<Language>().expect("valid"), Language::Cn);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = "fr".parse::<Language>().expect_err("should fail");
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn language_from_localized_pathname() {
        assert_eq!(
            Language::from_pathname("/components/button-cn/"),
            Language::Cn
        );
        assert_eq!(
            Language::from_pathname("/components/button-cn"),
            Language::Cn
        );
        assert_eq!(
            Language::from_pathname("/components/date-picker-cn?tab=api"),
            Language::Cn
        );
        assert_eq!(
            Language::from_pathname("/components/date-picker-cn/#api"),
            Language::Cn
        );
        assert_eq!(
            Language::from_pathname("/components/date-picker/?ref=x-cn"),
            Language::En
        );
    }

    #[test]
    fn language_defaults_to_english() {
        assert_eq!(Language::from_pathname("/components/button/"), Language::En);
        assert_eq!(Language::from_pathname(""), Language::En);
    }

    #[test]
    fn entry_deserializes_with_missing_refs() {
        let json = r#"{"version": "5.0.0", "changelog": "Initial"}"#;

        let entry: ChangelogEntry = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(entry.version, "5.0.0");
        assert!(entry.refs.is_empty());
        assert!(entry.release_date.is_none());
    }

    #[test]
    fn entry_deserializes_release_date_and_ignores_unknown_fields() {
        let json = r#"{
            "version": "5.1.0",
            "changelog": "Fix",
            "refs": ["https://github.com/org/repo/pull/1"],
            "releaseDate": "2023-01-01",
            "contributors": ["someone"]
        }"#;

        let entry: ChangelogEntry = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(entry.release_date.as_deref(), Some("2023-01-01"));
        assert_eq!(entry.refs.len(), 1);
    }

    #[test]
    fn segment_serializes_as_tagged_value() {
        let json = serde_json::to_string(&Segment::Code("x".into())).expect("serialize");
        assert_eq!(json, r#"{"kind":"code","value":"x"}"#);
    }

    #[test]
    fn no_match_is_not_deprecated() {
        let result = MatchResult::no_match();
        assert!(!result.is_deprecated());
        assert!(result.reasons.is_empty());
    }
}
