use serde::Serialize;

/// An issue or pull request reference attached to a changelog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefLink {
    pub url: String,
    pub label: String,
}

impl RefLink {
    /// Labels links ending in a number as `#<number>`; anything else is
    /// labelled with the URL itself.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let label = issue_number(&url).map_or_else(|| url.clone(), |n| format!("#{n}"));
        Self { url, label }
    }
}

fn issue_number(url: &str) -> Option<&str> {
    let (_, last) = url.trim_end_matches('/').rsplit_once('/')?;
    (!last.is_empty() && last.bytes().all(|b| b.is_ascii_digit())).then_some(last)
}
