//! Field definitions and runtime field values.

use super::ids::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Auto-assigned integer primary key. Exactly one per entity type.
    Serial,
    /// Nullable integer; the kind used for stamp fields.
    Integer,
    /// Nullable text.
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Serial => "serial",
            Self::Integer => "integer",
            Self::Text => "text",
        };
        f.write_str(label)
    }
}

/// A named, typed field on an entity type.
///
/// Serial fields are non-nullable; every other kind is nullable, matching
/// the source model where ordinary properties accept absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    name: FieldName,
    kind: FieldKind,
    nullable: bool,
}

impl FieldDef {
    /// Creates a field definition; nullability follows the kind.
    #[must_use]
    pub fn new(name: impl Into<FieldName>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: !matches!(kind, FieldKind::Serial),
        }
    }

    /// Returns the field's name.
    #[must_use]
    pub const fn name(&self) -> &FieldName {
        &self.name
    }

    /// Returns the field's storage kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` when the field accepts a null value.
    #[must_use]
    pub const fn nullable(&self) -> bool {
        self.nullable
    }

    /// Returns `true` when `value` is storable in this field.
    #[must_use]
    pub const fn accepts(&self, value: &FieldValue) -> bool {
        match (value, self.kind) {
            (FieldValue::Null, _) => self.nullable,
            (FieldValue::Integer(_), FieldKind::Integer | FieldKind::Serial) => true,
            (FieldValue::Text(_), FieldKind::Text) => true,
            _ => false,
        }
    }
}

/// Runtime value held by a field on a record instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Absent value.
    Null,
    /// Integer value (serial keys, stamp fields).
    Integer(i64),
    /// Text value.
    Text(String),
}

impl FieldValue {
    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates an integer value.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Returns `true` for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the integer value, or `None` for other variants.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value, or `None` for other variants.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Short label for the variant, used in kind-mismatch diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}
