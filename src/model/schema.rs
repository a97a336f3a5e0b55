//! Assembled entity schemas and their validation errors.

use super::field::{FieldDef, FieldKind};
use super::ids::{EntityTypeName, FieldName};
use thiserror::Error;

/// Errors raised while assembling an entity schema from its field list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields share the same name.
    #[error("duplicate field `{field}` on entity type `{type_name}`")]
    DuplicateField {
        /// The entity type being assembled.
        type_name: EntityTypeName,
        /// The repeated field name.
        field: FieldName,
    },

    /// The type declares no serial primary-key field.
    #[error("entity type `{0}` declares no serial field")]
    MissingSerialField(EntityTypeName),

    /// The type declares more than one serial field.
    #[error("entity type `{0}` declares more than one serial field")]
    MultipleSerialFields(EntityTypeName),
}

/// An immutable, validated entity schema: a name plus an ordered field list
/// with exactly one serial primary-key field.
///
/// Schemas are produced once at declaration time — stamp fields are composed
/// in *before* assembly, never injected into a live schema afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    name: EntityTypeName,
    fields: Vec<FieldDef>,
    key_field: FieldName,
}

impl EntitySchema {
    /// Assembles a schema from a complete field list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] when a field name repeats,
    /// and [`SchemaError::MissingSerialField`] /
    /// [`SchemaError::MultipleSerialFields`] when the serial-key arity is
    /// wrong.
    pub fn new(name: EntityTypeName, fields: Vec<FieldDef>) -> Result<Self, SchemaError> {
        let mut key_field = None;
        for (position, field) in fields.iter().enumerate() {
            let is_repeat = fields
                .iter()
                .take(position)
                .any(|earlier| earlier.name() == field.name());
            if is_repeat {
                return Err(SchemaError::DuplicateField {
                    type_name: name,
                    field: field.name().clone(),
                });
            }
            if field.kind() == FieldKind::Serial {
                if key_field.is_some() {
                    return Err(SchemaError::MultipleSerialFields(name));
                }
                key_field = Some(field.name().clone());
            }
        }
        let Some(key_field) = key_field else {
            return Err(SchemaError::MissingSerialField(name));
        };
        Ok(Self {
            name,
            fields,
            key_field,
        })
    }

    /// Returns the entity type's name.
    #[must_use]
    pub const fn name(&self) -> &EntityTypeName {
        &self.name
    }

    /// Returns the ordered field definitions.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the name of the serial primary-key field.
    #[must_use]
    pub const fn key_field(&self) -> &FieldName {
        &self.key_field
    }

    /// Looks up a field definition by name.
    #[must_use]
    pub fn field(&self, name: &FieldName) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns `true` when the schema declares a field with this name.
    #[must_use]
    pub fn has_field(&self, name: &FieldName) -> bool {
        self.field(name).is_some()
    }
}
