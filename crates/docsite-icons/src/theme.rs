use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    #[default]
    Outlined,
    Filled,
    #[value(name = "twotone")]
    TwoTone,
}

impl IconTheme {
    pub const ALL: [Self; 3] = [Self::Outlined, Self::Filled, Self::TwoTone];

    /// Suffix appended to a base icon name to form its component name.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Outlined => "Outlined",
            Self::Filled => "Filled",
            Self::TwoTone => "TwoTone",
        }
    }

    #[must_use]
    pub fn component_name(self, base: &str) -> String {
        format!("{base}{}", self.suffix())
    }

    /// Splits a component name such as `SmileTwoTone` into its base name and
    /// theme.
    #[must_use]
    pub fn split_component(component: &str) -> Option<(&str, Self)> {
        Self::ALL.into_iter().find_map(|theme| {
            component
                .strip_suffix(theme.suffix())
                .filter(|base| !base.is_empty())
                .map(|base| (base, theme))
        })
    }
}

impl fmt::Display for IconTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
