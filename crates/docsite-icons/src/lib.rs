mod catalog;
mod clipboard;
mod config;
mod debounce;
mod error;
mod search;
mod snippet;
mod theme;

pub use catalog::{CategoryMatches, IconCatalog};
pub use clipboard::{Clipboard, ClipboardError, Notice, copy_icon};
pub use config::IconsConfig;
pub use debounce::Debouncer;
pub use error::IconError;
pub use search::{IconSearch, SEARCH_DEBOUNCE};
pub use snippet::{import_snippet, usage_snippet};
pub use theme::IconTheme;

pub type Result<T> = std::result::Result<T, IconError>;
