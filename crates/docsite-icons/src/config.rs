use std::path::PathBuf;

use serde::Deserialize;

use crate::theme::IconTheme;

/// The `[icons]` section of `docsite.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct IconsConfig {
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub default_theme: IconTheme,
}
