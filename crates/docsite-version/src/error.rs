use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid version range '{range}'")]
    InvalidRange {
        range: String,
        #[source]
        source: semver::Error,
    },

    #[error("malformed hyphen range '{range}': expected '<lower> - <upper>'")]
    MalformedHyphenRange { range: String },

    #[error("failed to read deprecation table at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deprecation table")]
    Parse(#[source] serde_json::Error),

    #[error("invalid pattern '{pattern}' in deprecation table")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<VersionError>,
    },
}
