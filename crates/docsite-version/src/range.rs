use std::fmt;

use semver::{Version, VersionReq};

use crate::error::VersionError;

const OPERATOR_CHARS: &[char] = &['<', '>', '=', '^', '~'];
const UNSATISFIABLE: &str = "<0.0.0";

/// A range expression in npm syntax compiled to `semver` requirements.
///
/// npm and Cargo disagree on a few points, so expressions are rewritten before
/// handing them to [`VersionReq`]:
///
/// * comparators are separated by whitespace instead of commas,
/// * `||` separates alternatives,
/// * a bare version is an exact match rather than a caret requirement,
/// * `1.2.3 - 2.3.4` is an inclusive hyphen range,
/// * `x`, `X` and `*` wildcards may appear in any component.
#[derive(Debug, Clone)]
pub struct VersionRange {
    source: String,
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// # Errors
    ///
    /// Returns `VersionError::InvalidRange` if a comparator set cannot be parsed,
    /// or `VersionError::MalformedHyphenRange` for a dangling `-`.
    pub fn parse(expr: &str) -> Result<Self, VersionError> {
        let alternatives = expr
            .split("||")
            .map(|set| compile_comparator_set(set, expr))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: expr.to_string(),
            alternatives,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn compile_comparator_set(set: &str, expr: &str) -> Result<VersionReq, VersionError> {
    let tokens = join_operators(set);

    let comparators: Vec<String> = if tokens.iter().any(|t| t == "-") {
        match tokens.as_slice() {
            [lower, dash, upper] if dash == "-" => [
                comparator(&format!(">={lower}")),
                comparator(&format!("<={upper}")),
            ]
            .into_iter()
            .flatten()
            .collect(),
            _ => {
                return Err(VersionError::MalformedHyphenRange {
                    range: expr.to_string(),
                });
            }
        }
    } else {
        tokens.iter().filter_map(|t| comparator(t)).collect()
    };

    if comparators.is_empty() {
        return Ok(VersionReq::STAR);
    }

    let cargo_syntax = comparators.join(", ");
    VersionReq::parse(&cargo_syntax).map_err(|source| VersionError::InvalidRange {
        range: expr.to_string(),
        source,
    })
}

/// Splits on whitespace, gluing a free-standing operator (`>= 1.0.0`) onto the
/// version that follows it.
fn join_operators(set: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in set.split_whitespace() {
        if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
            pending_op = Some(token);
            continue;
        }
        match pending_op.take() {
            Some(op) => tokens.push(format!("{op}{token}")),
            None => tokens.push(token.to_string()),
        }
    }

    if let Some(op) = pending_op {
        tokens.push(op.to_string());
    }

    tokens
}

/// Rewrites one npm comparator into Cargo syntax. `None` means "matches
/// everything" and is dropped from the set; `<*` and `>*` match nothing.
fn comparator(token: &str) -> Option<String> {
    let split = token
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(token.len());
    let (op, rest) = token.split_at(split);

    if rest.is_empty() {
        // A lone operator; let the semver parser report it.
        return Some(op.to_string());
    }

    let rest = rest
        .strip_prefix('v')
        .or_else(|| rest.strip_prefix('V'))
        .unwrap_or(rest);
    let rest = strip_wildcards(rest);

    if rest.is_empty() {
        return matches!(op, "<" | ">").then(|| UNSATISFIABLE.to_string());
    }

    let op = match op {
        "" => "=",
        "~>" => "~",
        other => other,
    };

    Some(format!("{op}{rest}"))
}

/// `4.5.x` becomes `4.5`, `4.x.x` becomes `4` and `*` becomes empty. Versions
/// carrying a pre-release or build suffix are left untouched.
fn strip_wildcards(version: &str) -> String {
    if version.contains(['-', '+']) {
        return version.to_string();
    }

    version
        .split('.')
        .take_while(|part| !matches!(*part, "x" | "X" | "*"))
        .collect::<Vec<_>>()
        .join(".")
}
