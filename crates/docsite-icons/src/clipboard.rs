use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::snippet::usage_snippet;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available: {0}")]
    Unavailable(String),

    #[error("failed to write to clipboard")]
    Write(#[source] std::io::Error),
}

pub trait Clipboard {
    /// # Errors
    ///
    /// Returns an error if the text could not be placed on the clipboard.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Short-lived message shown to the user after a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Copies the usage snippet of `component`. Failures are reported through the
/// returned notice, never as an error.
pub fn copy_icon(clipboard: &impl Clipboard, component: &str) -> Notice {
    let snippet = usage_snippet(component);
    match clipboard.copy(&snippet) {
        Ok(()) => Notice::Success(format!("{snippet} copied")),
        Err(error) => {
            warn!(component, %error, "copying icon snippet failed");
            Notice::Failure(format!("Could not copy {snippet}: {error}"))
        }
    }
}
