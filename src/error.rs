//! Error types for character validation.
//!
//! Lookups in this crate signal "not found" with `Option::None`. The only
//! structured errors are the ones produced by the [`validation`](crate::validation)
//! layer, represented by `ValidationError` and collected in `ValidationErrors`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format a field path as a readable string.
fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        return String::from("(root)");
    }
    path.join(".")
}

/// Format a list of errors as a single line.
fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single failed check, carrying the path of the offending field.
///
/// # Examples
///
/// ```rust
/// use charstat::ValidationError;
///
/// let err = ValidationError::new(["strength", "dice_count"], "must be positive");
/// assert_eq!(err.to_string(), "strength.dice_count: must be positive");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}: {}", format_path(.path), .message)]
pub struct ValidationError {
    /// Field segments leading to the failing value.
    pub path: Vec<String>,

    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Create a new error for the given field path.
    pub fn new<I, S>(path: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Return a copy of this error with `segment` prepended to its path.
    pub fn nested(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }
}

/// All failures found while validating one value.
///
/// Validators collect every failing field instead of stopping at the first,
/// so this list is never empty when returned as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", format_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

// No `is_empty`: a returned error always holds at least one failure
#[allow(clippy::len_without_is_empty)]
impl ValidationErrors {
    /// Wrap a single error.
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Turn a collected list into a `Result`, failing when it is non-empty.
    pub fn into_result<T>(errors: Vec<ValidationError>, value: T) -> Result<T, Self> {
        if errors.is_empty() {
            Ok(value)
        } else {
            Err(Self { errors })
        }
    }

    /// Whether any error points at exactly `path`.
    pub fn has_path(&self, path: &[&str]) -> bool {
        self.errors
            .iter()
            .any(|e| e.path.iter().map(String::as_str).eq(path.iter().copied()))
    }

    /// Number of collected failures; never zero for a returned error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}
