mod config;
mod dataset;
mod error;
mod loader;
mod path;
mod source;

pub use config::ChangelogConfig;
pub use dataset::{ChangelogDataset, ComponentChangelog, dataset_file_name};
pub use error::LoaderError;
pub use loader::ChangelogLoader;
pub use path::{normalize_component_key, resolve_component_name};
pub use source::{ChangelogSource, FileSystemChangelogSource, HttpChangelogSource};

pub type Result<T> = std::result::Result<T, LoaderError>;
