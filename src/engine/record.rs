//! In-memory record instances.

use super::error::EngineError;
use crate::actor::ActorRef;
use crate::model::{ActorKey, EntitySchema, EntityTypeName, FieldName, FieldValue};
use crate::stamping::ports::Stamped;
use std::collections::HashMap;
use std::sync::Arc;

/// A record instance of a declared entity type.
///
/// Holds the in-memory field values plus the two engine-owned flags the
/// stamping hook reads: the new-record flag (never persisted) and the dirty
/// flag (values changed since load). Assigning a field the value it already
/// holds does not mark the record dirty.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<EntitySchema>,
    values: HashMap<FieldName, FieldValue>,
    key: Option<ActorKey>,
    new_record: bool,
    changed: bool,
}

impl Record {
    /// Creates a fresh, unpersisted record with every field null.
    pub(crate) fn fresh(schema: Arc<EntitySchema>) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|field| (field.name().clone(), FieldValue::Null))
            .collect();
        Self {
            schema,
            values,
            key: None,
            new_record: true,
            changed: false,
        }
    }

    /// Recreates a record from persisted row state: clean and not new.
    pub(crate) fn persisted(
        schema: Arc<EntitySchema>,
        key: ActorKey,
        values: HashMap<FieldName, FieldValue>,
    ) -> Self {
        Self {
            schema,
            values,
            key: Some(key),
            new_record: false,
            changed: false,
        }
    }

    /// Returns the record's entity type name.
    #[must_use]
    pub fn type_name(&self) -> &EntityTypeName {
        self.schema.name()
    }

    /// Returns the record's primary key, assigned on first save.
    #[must_use]
    pub const fn key(&self) -> Option<ActorKey> {
        self.key
    }

    /// Returns `true` while the record has never been persisted.
    #[must_use]
    pub const fn is_new_record(&self) -> bool {
        self.new_record
    }

    /// Returns `true` when field values have changed since load. New
    /// records count as dirty, matching the source engine's behaviour.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.changed || self.new_record
    }

    /// Reads a field's current value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] when the field is not declared
    /// on the record's type.
    pub fn get(&self, field: &FieldName) -> Result<&FieldValue, EngineError> {
        self.values.get(field).ok_or_else(|| EngineError::UnknownField {
            type_name: self.schema.name().clone(),
            field: field.clone(),
        })
    }

    /// Reads an integer field, `None` when null.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] when the field is not declared
    /// on the record's type.
    pub fn integer(&self, field: &FieldName) -> Result<Option<i64>, EngineError> {
        Ok(self.get(field)?.as_integer())
    }

    /// Reads a text field, `None` when null.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] when the field is not declared
    /// on the record's type.
    pub fn text(&self, field: &FieldName) -> Result<Option<&str>, EngineError> {
        Ok(self.get(field)?.as_text())
    }

    /// Assigns a field value, marking the record dirty when the value
    /// actually changes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] for undeclared fields and
    /// [`EngineError::KindMismatch`] when the value is not storable in the
    /// field (including null into a non-nullable field).
    pub fn set(&mut self, field: &FieldName, value: FieldValue) -> Result<(), EngineError> {
        let def = self
            .schema
            .field(field)
            .ok_or_else(|| EngineError::UnknownField {
                type_name: self.schema.name().clone(),
                field: field.clone(),
            })?;
        if !def.accepts(&value) {
            return Err(EngineError::KindMismatch {
                field: field.clone(),
                expected: def.kind(),
                found: value.kind_label(),
            });
        }
        if self.values.get(field) != Some(&value) {
            self.values.insert(field.clone(), value);
            self.changed = true;
        }
        Ok(())
    }

    /// Derives an actor reference from the record's type and key.
    ///
    /// Meaningful for instances of actor-providing types; an unsaved record
    /// yields a keyless reference.
    #[must_use]
    pub fn actor_ref(&self) -> ActorRef {
        ActorRef::new(self.schema.name().clone(), self.key)
    }

    /// Snapshot of the current field values, taken by the save path.
    pub(crate) fn values_snapshot(&self) -> HashMap<FieldName, FieldValue> {
        self.values.clone()
    }

    /// Reads the serial key field as set by the caller, if any.
    pub(crate) fn explicit_key(&self) -> Option<ActorKey> {
        self.values
            .get(self.schema.key_field())
            .and_then(FieldValue::as_integer)
            .map(ActorKey::new)
    }

    /// Writes the assigned key into the record and its key field.
    pub(crate) fn assign_key(&mut self, key: ActorKey) {
        self.key = Some(key);
        self.values
            .insert(self.schema.key_field().clone(), FieldValue::Integer(key.get()));
    }

    /// Clears the dirty flag and flips the new-record flag after a
    /// successful save.
    pub(crate) const fn mark_persisted(&mut self) {
        self.new_record = false;
        self.changed = false;
    }
}

impl Stamped for Record {
    fn is_new_record(&self) -> bool {
        self.new_record
    }

    fn is_dirty(&self) -> bool {
        self.changed || self.new_record
    }

    fn stamp(&self, field: &FieldName) -> Option<ActorKey> {
        self.values
            .get(field)
            .and_then(FieldValue::as_integer)
            .map(ActorKey::new)
    }

    fn write_stamp(&mut self, field: &FieldName, key: ActorKey) {
        // Stamp fields always exist on bound types; anything else is left
        // alone rather than invented on the fly.
        if self.values.contains_key(field) {
            let value = FieldValue::Integer(key.get());
            if self.values.get(field) != Some(&value) {
                self.values.insert(field.clone(), value);
                self.changed = true;
            }
        }
    }
}
