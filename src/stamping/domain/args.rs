//! Declaration arguments for stamp binding, as written in a model
//! definition.
//!
//! The source plugin accepted loosely-shaped arguments and rejected the
//! common misuses at declaration time: an associative structure where a
//! suffix token was expected, or a bare name / text string where a model
//! type reference was expected. [`StampArg`] preserves those shapes so the
//! binder can validate them and report precise shape errors.

use crate::model::EntityTypeName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stamp-binding declaration argument, by shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StampArg {
    /// A bare name token, e.g. `by`. The valid shape for the suffix.
    Token(String),
    /// A quoted text string, e.g. `"User"`. Never valid.
    Text(String),
    /// An associative structure, e.g. `model => user`. Never valid.
    Map(Vec<(String, String)>),
    /// A reference to a model type by name, e.g. `User`. The valid shape
    /// for the actor type.
    TypeRef(EntityTypeName),
}

impl StampArg {
    /// Creates a bare token argument.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Creates a text-string argument.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates an associative-structure argument.
    #[must_use]
    pub fn map(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Creates a model type reference argument.
    #[must_use]
    pub fn type_ref(name: impl Into<EntityTypeName>) -> Self {
        Self::TypeRef(name.into())
    }

    /// Returns the argument's shape, for diagnostics.
    #[must_use]
    pub const fn shape(&self) -> ArgShape {
        match self {
            Self::Token(_) => ArgShape::Token,
            Self::Text(_) => ArgShape::Text,
            Self::Map(_) => ArgShape::Map,
            Self::TypeRef(_) => ArgShape::TypeRef,
        }
    }
}

/// Shape of a [`StampArg`], used in configuration-error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgShape {
    /// A bare name token.
    Token,
    /// A quoted text string.
    Text,
    /// An associative structure.
    Map,
    /// A model type reference.
    TypeRef,
}

impl fmt::Display for ArgShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Token => "a bare token",
            Self::Text => "a text string",
            Self::Map => "an associative value",
            Self::TypeRef => "a type reference",
        };
        f.write_str(label)
    }
}

/// The `(suffix, actor type)` argument pair of a stamp-binding declaration.
///
/// # Examples
///
/// ```
/// use actionstamps::stamping::domain::{StampArg, StampArgs};
///
/// // Equivalent to the source's bare `actionstamps` with no arguments.
/// let defaults = StampArgs::default();
/// assert_eq!(defaults.suffix, StampArg::token("by"));
/// assert_eq!(defaults.actor, StampArg::type_ref("User"));
///
/// let custom = StampArgs::new(StampArg::token("by_id"), StampArg::type_ref("Author"));
/// assert_eq!(custom.suffix, StampArg::token("by_id"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampArgs {
    /// The suffix argument; must be a bare token.
    pub suffix: StampArg,
    /// The actor type argument; must be a model type reference.
    pub actor: StampArg,
}

impl StampArgs {
    /// Creates an argument pair.
    #[must_use]
    pub const fn new(suffix: StampArg, actor: StampArg) -> Self {
        Self { suffix, actor }
    }
}

/// Defaults to `(by, User)`, matching the source plugin's bare declaration.
impl Default for StampArgs {
    fn default() -> Self {
        Self {
            suffix: StampArg::token("by"),
            actor: StampArg::type_ref("User"),
        }
    }
}
