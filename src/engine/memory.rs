//! Thread-safe in-memory persistence engine.

use super::error::{DeclareError, EngineError};
use super::record::Record;
use crate::model::{
    ActorKey, EntityDeclaration, EntitySchema, EntityTypeName, FieldName, FieldValue,
};
use crate::stamping::domain::StampBinding;
use crate::stamping::ports::TypeResolver;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

type Row = HashMap<FieldName, FieldValue>;

/// A registered entity type: its assembled schema, its stamp binding (for
/// receiving types), and its actionstamps class (self for providers, the
/// resolved actor type for receivers).
#[derive(Debug)]
struct EntityModel {
    schema: Arc<EntitySchema>,
    binding: Option<StampBinding>,
    actionstamps_class: Option<EntityTypeName>,
}

#[derive(Debug, Default)]
struct EngineState {
    models: HashMap<EntityTypeName, EntityModel>,
    rows: HashMap<EntityTypeName, BTreeMap<ActorKey, Row>>,
    next_keys: HashMap<EntityTypeName, i64>,
}

impl TypeResolver for EngineState {
    fn is_declared(&self, name: &EntityTypeName) -> bool {
        self.models.contains_key(name)
    }
}

/// Resolver view used while a declaration is being registered: the type
/// being declared may reference itself as its own actor type.
struct DeclarationResolver<'a> {
    state: &'a EngineState,
    in_flight: &'a EntityTypeName,
}

impl TypeResolver for DeclarationResolver<'_> {
    fn is_declared(&self, name: &EntityTypeName) -> bool {
        name == self.in_flight || self.state.is_declared(name)
    }
}

/// Thread-safe in-memory persistence engine.
///
/// Implements the full collaborator contract: declaration-time model
/// registration (running the stamp binder's configuration and composing its
/// stamp fields into the schema), a save path that invokes the automatic
/// pre-persist hook, serial key assignment, row storage, and reload.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEngine {
    state: Arc<RwLock<EngineState>>,
}

impl InMemoryEngine {
    /// Creates an empty engine with no declared types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity declaration.
    ///
    /// When the declaration requests actionstamps, the binder configuration
    /// runs here — shape validation, actor type resolution, collision check
    /// — and the derived stamp fields are appended to the type's schema.
    /// Configuration is all or nothing: on any error the type is left
    /// undeclared.
    ///
    /// # Errors
    ///
    /// Returns [`DeclareError::DuplicateType`] for a repeated type name,
    /// [`DeclareError::Config`] when the stamping request is rejected, and
    /// [`DeclareError::Schema`] when the field list fails assembly.
    pub fn declare(&self, declaration: EntityDeclaration) -> Result<(), DeclareError> {
        let parts = declaration.into_parts();
        let mut state = self
            .state
            .write()
            .map_err(|err| DeclareError::persistence(std::io::Error::other(err.to_string())))?;

        if state.models.contains_key(&parts.name) {
            return Err(DeclareError::DuplicateType(parts.name));
        }

        let mut fields = parts.fields;
        let mut binding = None;
        let mut actionstamps_class = parts.provides_actionstamps.then(|| parts.name.clone());

        if let Some(args) = &parts.stamp_request {
            let resolver = DeclarationResolver {
                state: &*state,
                in_flight: &parts.name,
            };
            let configured = StampBinding::configure(&parts.name, &fields, args, &resolver)?;
            fields.extend(configured.stamp_fields());
            actionstamps_class = Some(configured.actor_type().clone());
            binding = Some(configured);
        }

        let schema = Arc::new(EntitySchema::new(parts.name.clone(), fields)?);
        state.models.insert(
            parts.name,
            EntityModel {
                schema,
                binding,
                actionstamps_class,
            },
        );
        Ok(())
    }

    /// Creates a fresh, unpersisted record of the given type with every
    /// field null.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownType`] when the type is not declared.
    pub fn new_record(&self, type_name: &EntityTypeName) -> Result<Record, EngineError> {
        let state = self.read_state()?;
        let model = state
            .models
            .get(type_name)
            .ok_or_else(|| EngineError::UnknownType(type_name.clone()))?;
        Ok(Record::fresh(Arc::clone(&model.schema)))
    }

    /// Persists the record through the normal save path.
    ///
    /// A clean, already-persisted record is a no-op. Otherwise the type's
    /// automatic pre-persist hook runs (stamping only dirty records), the
    /// serial key is assigned when absent (an explicit caller-set key is
    /// respected), row state is written, and the record's dirty and
    /// new-record flags are reset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownType`] when the record's type is not
    /// declared on this engine.
    pub fn save(&self, record: &mut Record) -> Result<(), EngineError> {
        if !record.is_dirty() {
            return Ok(());
        }
        let binding = self.binding_for(record.type_name())?;
        if let Some(binding) = &binding {
            binding.apply_before_save(record);
        }
        self.write_row(record)
    }

    /// Re-stamps the record unconditionally, then saves it through the
    /// normal save path.
    ///
    /// Guarantees `updated_<suffix>` reflects the current actor (if any)
    /// even when no other field changed. With no actor present and no other
    /// changes, the save path finds the record clean and performs no
    /// persistence side effect.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownType`] when the record's type is not
    /// declared on this engine.
    pub fn touch(&self, record: &mut Record) -> Result<(), EngineError> {
        let binding = self.binding_for(record.type_name())?;
        if let Some(binding) = &binding {
            binding.set_actionstamps(record);
        }
        self.save(record)
    }

    /// Reloads a persisted record by key; clean and not new.
    ///
    /// Returns `None` when no row exists for the key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownType`] when the type is not declared.
    pub fn find(
        &self,
        type_name: &EntityTypeName,
        key: ActorKey,
    ) -> Result<Option<Record>, EngineError> {
        let state = self.read_state()?;
        let model = state
            .models
            .get(type_name)
            .ok_or_else(|| EngineError::UnknownType(type_name.clone()))?;
        let row = state
            .rows
            .get(type_name)
            .and_then(|rows| rows.get(&key))
            .cloned();
        Ok(row.map(|values| Record::persisted(Arc::clone(&model.schema), key, values)))
    }

    /// Returns the type configured as the actor provider for `type_name`:
    /// the type itself for providers, the resolved actor type for receiving
    /// types, `None` for unconfigured types.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownType`] when the type is not declared.
    pub fn actionstamps_class(
        &self,
        type_name: &EntityTypeName,
    ) -> Result<Option<EntityTypeName>, EngineError> {
        let state = self.read_state()?;
        let model = state
            .models
            .get(type_name)
            .ok_or_else(|| EngineError::UnknownType(type_name.clone()))?;
        Ok(model.actionstamps_class.clone())
    }

    /// Returns the assembled schema for a declared type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownType`] when the type is not declared.
    pub fn schema(&self, type_name: &EntityTypeName) -> Result<Arc<EntitySchema>, EngineError> {
        let state = self.read_state()?;
        let model = state
            .models
            .get(type_name)
            .ok_or_else(|| EngineError::UnknownType(type_name.clone()))?;
        Ok(Arc::clone(&model.schema))
    }

    fn binding_for(
        &self,
        type_name: &EntityTypeName,
    ) -> Result<Option<StampBinding>, EngineError> {
        let state = self.read_state()?;
        let model = state
            .models
            .get(type_name)
            .ok_or_else(|| EngineError::UnknownType(type_name.clone()))?;
        Ok(model.binding.clone())
    }

    fn write_row(&self, record: &mut Record) -> Result<(), EngineError> {
        let type_name = record.type_name().clone();
        let mut state = self
            .state
            .write()
            .map_err(|err| EngineError::persistence(std::io::Error::other(err.to_string())))?;
        if !state.models.contains_key(&type_name) {
            return Err(EngineError::UnknownType(type_name));
        }

        let key = match record.key() {
            Some(key) => key,
            None => record.explicit_key().unwrap_or_else(|| {
                ActorKey::new(*state.next_keys.entry(type_name.clone()).or_insert(1))
            }),
        };
        // Keep the allocator ahead of explicitly assigned keys.
        let next = state.next_keys.entry(type_name.clone()).or_insert(1);
        *next = (*next).max(key.get().saturating_add(1));

        record.assign_key(key);
        state
            .rows
            .entry(type_name)
            .or_default()
            .insert(key, record.values_snapshot());
        record.mark_persisted();
        Ok(())
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, EngineState>, EngineError> {
        self.state
            .read()
            .map_err(|err| EngineError::persistence(std::io::Error::other(err.to_string())))
    }
}
