use std::collections::HashMap;

use docsite_core::Language;
use tracing::{debug, warn};

use crate::dataset::{ChangelogDataset, ComponentChangelog};
use crate::path::resolve_component_name;
use crate::source::ChangelogSource;

/// Resolves documentation pages to component changelogs.
///
/// Datasets are fetched lazily and cached per language. Failures never reach
/// the caller: they are logged and the page simply has no changelog.
pub struct ChangelogLoader<S> {
    source: S,
    cache: HashMap<Language, ChangelogDataset>,
}

impl<S> ChangelogLoader<S>
where
    S: ChangelogSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Returns the cached dataset for `language`, fetching it on first use.
    pub fn dataset(&mut self, language: Language) -> Option<&ChangelogDataset> {
        if !self.cache.contains_key(&language) {
            match self.source.fetch(language) {
                Ok(dataset) => {
                    debug!(%language, components = dataset.len(), "cached changelog dataset");
                    self.cache.insert(language, dataset);
                }
                Err(error) => {
                    warn!(%language, error = %error_chain(&error), "changelog dataset unavailable");
                    return None;
                }
            }
        }

        self.cache.get(&language)
    }

    /// Drops the cached dataset so the next lookup fetches it again. The newest
    /// fetch replaces whatever was cached before.
    pub fn invalidate(&mut self, language: Language) {
        self.cache.remove(&language);
    }

    /// Finds the changelog for the component page at `pathname`.
    ///
    /// Returns `None` when the path is not a component page, the dataset cannot
    /// be loaded, or the component has no entries.
    pub fn load(&mut self, pathname: &str, language: Language) -> Option<ComponentChangelog> {
        let Some(name) = resolve_component_name(pathname) else {
            debug!(pathname, "not a component page");
            return None;
        };

        let found = self.dataset(language)?.find(&name);
        match found {
            Some(changelog) if !changelog.entries.is_empty() => Some(changelog),
            _ => {
                debug!(component = %name, %language, "no changelog entries for component");
                None
            }
        }
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
