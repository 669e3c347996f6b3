//! Path Policy
//!
//! Decides whether a user-supplied `--source`/`--target` value is shaped like a
//! filesystem path. Existence is not checked here.

use crate::error::{SkeletonError, SkeletonResult};

/// Characters that are never accepted in a path argument.
const FORBIDDEN: &[char] = &[
    '\u{2018}', '\u{201c}', '!', '#', '$', '%', '&', '+', '^', '<', '=', '>', '`',
];

/// Which command-line option a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOption {
    Source,
    Target,
}

impl PathOption {
    pub fn name(&self) -> &'static str {
        match self {
            PathOption::Source => "source",
            PathOption::Target => "target",
        }
    }

    /// Example of an accepted value, shown in the diagnostic
    pub fn example(&self) -> &'static str {
        match self {
            PathOption::Source => "./xxx.vue",
            PathOption::Target => "./xxx.html",
        }
    }
}

/// Policy for validating path-shaped arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathPolicy;

impl PathPolicy {
    /// Check whether `value` is a structurally valid path.
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && !value.contains('\0')
            && !value.contains(FORBIDDEN)
            && !looks_like_glob(value)
    }

    /// Validate an optional option value, producing the user-facing error on failure.
    pub fn validate<'a>(option: PathOption, value: Option<&'a str>) -> SkeletonResult<&'a str> {
        match value {
            Some(v) if Self::is_valid(v) => Ok(v),
            other => Err(SkeletonError::InvalidPath {
                option: option.name(),
                value: other.unwrap_or("undefined").to_string(),
                example: option.example(),
            }),
        }
    }
}

fn looks_like_glob(value: &str) -> bool {
    if value.contains(['*', '?']) {
        return true;
    }

    let closes_after = |open: char, close: char| {
        value
            .find(open)
            .map(|start| value[start + 1..].contains(close))
            .unwrap_or(false)
    };

    if closes_after('[', ']') || closes_after('{', '}') {
        return true;
    }

    // extglob / alternation group: (a|b)
    value
        .find('(')
        .map(|start| {
            let rest = &value[start + 1..];
            match (rest.find('|'), rest.find(')')) {
                (Some(bar), Some(close)) => bar < close,
                _ => false,
            }
        })
        .unwrap_or(false)
}
