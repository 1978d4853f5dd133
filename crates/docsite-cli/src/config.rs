use std::path::{Path, PathBuf};

use docsite_icons::IconsConfig;
use docsite_loader::ChangelogConfig;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

pub(crate) const CONFIG_FILE_NAME: &str = "docsite.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct DocsiteConfig {
    #[serde(default)]
    pub(crate) changelog: ChangelogConfig,
    #[serde(default)]
    pub(crate) icons: IconsConfig,
}

impl DocsiteConfig {
    /// Makes every relative path in the file relative to `base` instead of
    /// the working directory.
    fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |path: Option<PathBuf>| path.map(|p| base.join(p));
        self.changelog.data_dir = resolve(self.changelog.data_dir.take());
        self.changelog.deprecations = resolve(self.changelog.deprecations.take());
        self.icons.catalog = resolve(self.icons.catalog.take());
        self
    }
}

/// Loads `explicit` if given, otherwise `docsite.toml` in `start_dir` when
/// present, otherwise the defaults.
pub(crate) fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<DocsiteConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = start_dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                debug!(dir = %start_dir.display(), "no config file, using defaults");
                return Ok(DocsiteConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    let config: DocsiteConfig =
        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), "loaded config");

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.resolve_paths(base))
}
