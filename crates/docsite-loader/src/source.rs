use std::path::{Path, PathBuf};
use std::time::Duration;

use docsite_core::Language;
use tracing::debug;

use crate::dataset::{ChangelogDataset, dataset_file_name};
use crate::error::LoaderError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

pub trait ChangelogSource: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be retrieved or parsed.
    fn fetch(&self, language: Language) -> Result<ChangelogDataset, LoaderError>;
}

impl<T> ChangelogSource for Box<T>
where
    T: ChangelogSource + ?Sized,
{
    fn fetch(&self, language: Language) -> Result<ChangelogDataset, LoaderError> {
        (**self).fetch(language)
    }
}

/// Reads `components-changelog-<lang>.json` from a directory.
pub struct FileSystemChangelogSource {
    dir: PathBuf,
}

impl FileSystemChangelogSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dataset_path(&self, language: Language) -> PathBuf {
        self.dir.join(dataset_file_name(language))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChangelogSource for FileSystemChangelogSource {
    fn fetch(&self, language: Language) -> Result<ChangelogDataset, LoaderError> {
        let path = self.dataset_path(language);
        debug!(path = %path.display(), "reading changelog dataset");

        let content = std::fs::read_to_string(&path).map_err(|source| LoaderError::Read {
            path: path.clone(),
            source,
        })?;

        ChangelogDataset::from_json(&content, &path.display().to_string())
    }
}

/// Downloads `<base-url>/components-changelog-<lang>.json`.
pub struct HttpChangelogSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpChangelogSource {
    /// # Errors
    ///
    /// Returns `LoaderError::Http` if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoaderError> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|source| LoaderError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { base_url, client })
    }

    #[must_use]
    pub fn dataset_url(&self, language: Language) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            dataset_file_name(language)
        )
    }
}

impl ChangelogSource for HttpChangelogSource {
    fn fetch(&self, language: Language) -> Result<ChangelogDataset, LoaderError> {
        let url = self.dataset_url(language);
        debug!(%url, "fetching changelog dataset");

        let http_error = |source: reqwest::Error| LoaderError::Http {
            url: url.clone(),
            source,
        };

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(http_error)?;

        ChangelogDataset::from_json(&body, &url)
    }
}
