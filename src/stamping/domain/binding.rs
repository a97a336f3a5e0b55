//! The configured stamp binding and its pre-persist hook.

use super::args::{StampArg, StampArgs};
use super::suffix::Suffix;
use crate::actor::ActorRegistry;
use crate::model::{EntityTypeName, FieldDef, FieldKind, FieldName};
use crate::stamping::error::ConfigError;
use crate::stamping::ports::{Stamped, TypeResolver};

/// A validated stamp binding on a receiving entity type.
///
/// Produced once at declaration time by [`StampBinding::configure`]; carries
/// the resolved actor type, the suffix, and the two derived field names. The
/// binding also produces the stamp-fields fragment ([`stamp_fields`]) the
/// engine composes into the receiving type's schema, and implements the
/// pre-persist hook ([`apply_before_save`]) plus its unconditional form
/// ([`set_actionstamps`]).
///
/// [`stamp_fields`]: StampBinding::stamp_fields
/// [`apply_before_save`]: StampBinding::apply_before_save
/// [`set_actionstamps`]: StampBinding::set_actionstamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampBinding {
    actor_type: EntityTypeName,
    suffix: Suffix,
    created_field: FieldName,
    updated_field: FieldName,
}

impl StampBinding {
    /// Validates a stamp-binding declaration for the receiving type
    /// `type_name`, whose own fields are `declared_fields`.
    ///
    /// Configuration is all or nothing: any failure leaves the receiving
    /// type unconfigured and its existing fields untouched.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::SuffixNotToken`] / [`ConfigError::MalformedSuffix`]
    ///   when the suffix argument is not a simple name token.
    /// - [`ConfigError::ActorTypeNotModel`] when the actor argument is an
    ///   associative value, bare token, or text string instead of a model
    ///   type reference.
    /// - [`ConfigError::UnknownActorModel`] when the referenced type does
    ///   not resolve against the registry. Distinct from the shape errors.
    /// - [`ConfigError::StampFieldCollision`] when the receiving type
    ///   already declares `created_<suffix>` or `updated_<suffix>`.
    pub fn configure(
        type_name: &EntityTypeName,
        declared_fields: &[FieldDef],
        args: &StampArgs,
        resolver: &dyn TypeResolver,
    ) -> Result<Self, ConfigError> {
        let suffix = match &args.suffix {
            StampArg::Token(token) => Suffix::parse(token)?,
            other => {
                return Err(ConfigError::SuffixNotToken {
                    found: other.shape(),
                });
            }
        };
        let actor_type = match &args.actor {
            StampArg::TypeRef(name) => name.clone(),
            other => {
                return Err(ConfigError::ActorTypeNotModel {
                    found: other.shape(),
                });
            }
        };
        if !resolver.is_declared(&actor_type) {
            return Err(ConfigError::UnknownActorModel(actor_type));
        }

        let created_field = FieldName::new(format!("created_{suffix}"));
        let updated_field = FieldName::new(format!("updated_{suffix}"));
        let collision = declared_fields
            .iter()
            .map(FieldDef::name)
            .find(|name| **name == created_field || **name == updated_field);
        if let Some(field) = collision {
            return Err(ConfigError::StampFieldCollision {
                type_name: type_name.clone(),
                field: field.clone(),
            });
        }

        Ok(Self {
            actor_type,
            suffix,
            created_field,
            updated_field,
        })
    }

    /// Returns the resolved actor type this binding reads from the registry.
    #[must_use]
    pub const fn actor_type(&self) -> &EntityTypeName {
        &self.actor_type
    }

    /// Returns the configured suffix token.
    #[must_use]
    pub const fn suffix(&self) -> &Suffix {
        &self.suffix
    }

    /// Returns the `created_<suffix>` field name.
    #[must_use]
    pub const fn created_field(&self) -> &FieldName {
        &self.created_field
    }

    /// Returns the `updated_<suffix>` field name.
    #[must_use]
    pub const fn updated_field(&self) -> &FieldName {
        &self.updated_field
    }

    /// Returns the stamp-fields fragment: two nullable integer fields the
    /// engine composes into the receiving type's schema.
    #[must_use]
    pub fn stamp_fields(&self) -> [FieldDef; 2] {
        [
            FieldDef::new(self.created_field.clone(), FieldKind::Integer),
            FieldDef::new(self.updated_field.clone(), FieldKind::Integer),
        ]
    }

    /// Applies the stamping rules to the record's in-memory fields,
    /// unconditionally.
    ///
    /// Reads the calling thread's current actor for the configured type.
    /// When an actor with a primary key is present, `created_<suffix>` is
    /// written only if the record is new and the field is still null (a
    /// caller-supplied value is respected and never overwritten), while
    /// `updated_<suffix>` is rewritten regardless of its previous value.
    /// When no actor is present, or the current actor has no primary key
    /// yet, neither field is touched.
    pub fn set_actionstamps(&self, record: &mut dyn Stamped) {
        let Some(key) = ActorRegistry::current(&self.actor_type)
            .and_then(|actor| actor.primary_key())
        else {
            return;
        };
        if record.is_new_record() && record.stamp(&self.created_field).is_none() {
            record.write_stamp(&self.created_field, key);
        }
        record.write_stamp(&self.updated_field, key);
    }

    /// The automatic pre-persist form of the hook: only fires when the
    /// record is dirty. Saves of clean, unchanged records do not re-stamp;
    /// the unconditional form backing a `touch` operation does.
    pub fn apply_before_save(&self, record: &mut dyn Stamped) {
        if record.is_dirty() {
            self.set_actionstamps(record);
        }
    }
}
