use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown language '{0}' (expected 'en' or 'cn')")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
