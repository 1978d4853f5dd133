use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read changelog dataset at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse changelog dataset from '{origin}'")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to fetch changelog dataset from '{url}'")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
