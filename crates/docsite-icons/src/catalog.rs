use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::IconError;
use crate::theme::IconTheme;

#[derive(Deserialize)]
struct RawCatalog {
    categories: IndexMap<String, Vec<String>>,
    #[serde(default)]
    available: Option<Vec<String>>,
}

/// Icons grouped into gallery categories.
///
/// Categories list base names (`Smile`); a base name is shown for a theme
/// when the catalog knows the themed component (`SmileFilled`). Without an
/// explicit list of available components every theme is assumed to exist.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    categories: IndexMap<String, Vec<String>>,
    available: Option<HashSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatches {
    pub category: String,
    pub icons: Vec<String>,
}

impl IconCatalog {
    #[must_use]
    pub fn new(
        categories: IndexMap<String, Vec<String>>,
        available: Option<HashSet<String>>,
    ) -> Self {
        Self {
            categories,
            available,
        }
    }

    /// # Errors
    ///
    /// Returns `IconError::Parse` if the JSON does not describe a catalog.
    pub fn from_json(content: &str) -> Result<Self, IconError> {
        let raw: RawCatalog = serde_json::from_str(content).map_err(IconError::Parse)?;
        Ok(Self::new(
            raw.categories,
            raw.available.map(|names| names.into_iter().collect()),
        ))
    }

    /// # Errors
    ///
    /// Returns `IconError::Read` if the file cannot be read, otherwise the
    /// errors of [`IconCatalog::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, IconError> {
        let content = std::fs::read_to_string(path).map_err(|source| IconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, component: &str) -> bool {
        match &self.available {
            Some(available) => available.contains(component),
            None => IconTheme::split_component(component)
                .is_some_and(|(base, _)| self.contains_base(base)),
        }
    }

    fn contains_base(&self, base: &str) -> bool {
        self.categories
            .values()
            .any(|names| names.iter().any(|name| name == base))
    }

    /// Resolves a user-typed component name to the catalog's spelling,
    /// ignoring ASCII case.
    #[must_use]
    pub fn find_component(&self, name: &str) -> Option<String> {
        let name = name.trim();
        self.categories
            .values()
            .flatten()
            .flat_map(|base| IconTheme::ALL.map(|theme| theme.component_name(base)))
            .find(|component| component.eq_ignore_ascii_case(name) && self.contains(component))
    }

    /// Lists, per category, the `theme` components whose base name contains
    /// `query`. Categories without hits are left out; an empty query matches
    /// everything.
    #[must_use]
    pub fn search(&self, query: &str, theme: IconTheme) -> Vec<CategoryMatches> {
        let needle = query.trim().to_lowercase();

        self.categories
            .iter()
            .filter_map(|(category, names)| {
                let mut seen = HashSet::new();
                let icons: Vec<String> = names
                    .iter()
                    .filter(|base| base.to_lowercase().contains(&needle))
                    .map(|base| theme.component_name(base))
                    .filter(|component| self.contains(component))
                    .filter(|component| seen.insert(component.clone()))
                    .collect();

                (!icons.is_empty()).then(|| CategoryMatches {
                    category: category.clone(),
                    icons,
                })
            })
            .collect()
    }
}
