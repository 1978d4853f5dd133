use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to read config at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to load deprecation table")]
    Deprecations(#[from] docsite_version::VersionError),

    #[error("failed to set up changelog source")]
    Loader(#[from] docsite_loader::LoaderError),

    #[error("failed to load icon catalog")]
    Icons(#[from] docsite_icons::IconError),

    #[error(
        "no changelog data source configured; pass --data-dir or --base-url, or set them under [changelog] in docsite.toml"
    )]
    NoDataSource,

    #[error("no icon catalog configured; pass --catalog or set catalog under [icons] in docsite.toml")]
    NoCatalog,

    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    #[error("failed to serialize output")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
