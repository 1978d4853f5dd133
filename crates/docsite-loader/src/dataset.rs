use docsite_core::{ChangelogEntry, Language};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::LoaderError;
use crate::path::normalize_component_key;

/// File name of the published dataset for `language`.
#[must_use]
pub fn dataset_file_name(language: Language) -> String {
    format!("components-changelog-{}.json", language.code())
}

/// Changelog entries of every component, for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChangelogDataset {
    components: IndexMap<String, Vec<ChangelogEntry>>,
}

/// The entries of a single component, under the key the dataset uses for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentChangelog {
    pub key: String,
    pub entries: Vec<ChangelogEntry>,
}

impl ChangelogDataset {
    /// # Errors
    ///
    /// Returns `LoaderError::Parse` if `content` is not a JSON object of entry
    /// lists.
    pub fn from_json(content: &str, origin: &str) -> Result<Self, LoaderError> {
        serde_json::from_str(content).map_err(|source| LoaderError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Looks up a component by name, ignoring case and hyphens on both sides.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ComponentChangelog> {
        let wanted = normalize_component_key(name);

        self.components
            .iter()
            .find(|(key, _)| normalize_component_key(key) == wanted)
            .map(|(key, entries)| ComponentChangelog {
                key: key.clone(),
                entries: entries.clone(),
            })
    }
}

impl FromIterator<(String, Vec<ChangelogEntry>)> for ChangelogDataset {
    fn from_iter<T: IntoIterator<Item = (String, Vec<ChangelogEntry>)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}
