use std::path::Path;

use docsite_core::MatchResult;
use indexmap::IndexMap;
use semver::Version;
use serde::Deserialize;
use tracing::debug;

use crate::error::VersionError;
use crate::range::VersionRange;

#[derive(Deserialize)]
#[serde(untagged)]
enum Reasons {
    One(String),
    Many(Vec<String>),
}

impl From<Reasons> for Vec<String> {
    fn from(reasons: Reasons) -> Self {
        match reasons {
            Reasons::One(reason) => vec![reason],
            Reasons::Many(reasons) => reasons,
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    range: VersionRange,
    reasons: Vec<String>,
}

/// Version ranges known to ship a serious bug, each with the issue links or
/// notes explaining why.
///
/// Rules are kept in declaration order and the first matching rule wins, so
/// overlapping ranges resolve by position in the source document.
#[derive(Debug, Clone, Default)]
pub struct DeprecationTable {
    rules: Vec<Rule>,
}

impl DeprecationTable {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `VersionError::InvalidPattern` if a key is not a valid range.
    pub fn from_entries<I, P>(entries: I) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = (P, Vec<String>)>,
        P: AsRef<str>,
    {
        let rules = entries
            .into_iter()
            .map(|(pattern, reasons)| {
                let pattern = pattern.as_ref();
                let range =
                    VersionRange::parse(pattern).map_err(|source| VersionError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source: Box::new(source),
                    })?;
                Ok(Rule { range, reasons })
            })
            .collect::<Result<Vec<_>, VersionError>>()?;

        Ok(Self { rules })
    }

    /// Parses a JSON object mapping range expressions to a reason string or a
    /// list of reason strings.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::Parse` for malformed JSON and
    /// `VersionError::InvalidPattern` for keys that are not valid ranges.
    pub fn from_json(content: &str) -> Result<Self, VersionError> {
        let raw: IndexMap<String, Reasons> =
            serde_json::from_str(content).map_err(VersionError::Parse)?;

        Self::from_entries(raw.into_iter().map(|(k, v)| (k, v.into())))
    }

    /// # Errors
    ///
    /// Returns `VersionError::Read` if the file cannot be read, otherwise the
    /// errors of [`DeprecationTable::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, VersionError> {
        let content = std::fs::read_to_string(path).map_err(|source| VersionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.range.as_str())
    }

    /// Finds the first rule whose range contains `version`.
    ///
    /// Version labels that are not valid semantic versions never match.
    #[must_use]
    pub fn match_version(&self, version: &str) -> MatchResult {
        let Some(parsed) = parse_version(version) else {
            debug!(version, "skipping deprecation check for non-semver version");
            return MatchResult::no_match();
        };

        self.rules
            .iter()
            .find(|rule| rule.range.matches(&parsed))
            .map_or_else(MatchResult::no_match, |rule| {
                MatchResult::matched(rule.range.as_str(), rule.reasons.clone())
            })
    }
}

/// Parses a changelog version label, tolerating surrounding whitespace and a
/// leading `v`.
#[must_use]
pub fn parse_version(label: &str) -> Option<Version> {
    let trimmed = label.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);
    Version::parse(trimmed).ok()
}
