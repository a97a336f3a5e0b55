//! The validated suffix token distinguishing one receiving type's stamp
//! fields from another's.

use crate::stamping::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A simple name token such as `by` or `by_id`, used to derive the
/// `created_<suffix>` / `updated_<suffix>` field names.
///
/// Valid tokens start with an ASCII letter or underscore and continue with
/// ASCII letters, digits, or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suffix(String);

impl Suffix {
    /// Parses a suffix token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedSuffix`] when the token is empty or
    /// contains characters outside `[A-Za-z0-9_]` (or starts with a digit).
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        let mut chars = token.chars();
        let valid_start = chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
        let valid_rest = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if valid_start && valid_rest {
            Ok(Self(token.to_owned()))
        } else {
            Err(ConfigError::MalformedSuffix(token.to_owned()))
        }
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
