//! Declaration builder for entity types.

use super::field::{FieldDef, FieldKind};
use super::ids::{EntityTypeName, FieldName};
use crate::stamping::domain::StampArgs;

/// Builder describing an entity type before it is registered with an engine.
///
/// A declaration carries the type's own fields plus the two actionstamps
/// roles it may take on: `provides_actionstamps` marks the type as an actor
/// provider, and `actionstamps` requests stamp binding with the given
/// arguments. Validation of the stamping request happens when the engine
/// registers the declaration, not here — the builder itself never fails.
///
/// # Examples
///
/// ```
/// use actionstamps::model::{EntityDeclaration, FieldKind};
/// use actionstamps::stamping::domain::StampArgs;
///
/// let article = EntityDeclaration::named("Article")
///     .field("id", FieldKind::Serial)
///     .field("title", FieldKind::Text)
///     .actionstamps(StampArgs::default());
///
/// assert_eq!(article.fields().len(), 2);
/// assert!(article.stamp_request().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct EntityDeclaration {
    name: EntityTypeName,
    fields: Vec<FieldDef>,
    provides_actionstamps: bool,
    stamp_request: Option<StampArgs>,
}

impl EntityDeclaration {
    /// Starts a declaration for the named entity type.
    #[must_use]
    pub fn named(name: impl Into<EntityTypeName>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            provides_actionstamps: false,
            stamp_request: None,
        }
    }

    /// Declares a field on the type.
    #[must_use]
    pub fn field(mut self, name: impl Into<FieldName>, kind: FieldKind) -> Self {
        self.fields.push(FieldDef::new(name.into(), kind));
        self
    }

    /// Marks the type as an actor provider: it gains a thread-scoped
    /// current-actor slot and reports itself as its own actionstamps class.
    #[must_use]
    pub const fn provides_actionstamps(mut self) -> Self {
        self.provides_actionstamps = true;
        self
    }

    /// Requests stamp binding for the type with the given arguments.
    ///
    /// The engine validates the arguments at registration time and composes
    /// the derived `created_<suffix>` / `updated_<suffix>` fields into the
    /// type's schema.
    #[must_use]
    pub fn actionstamps(mut self, args: StampArgs) -> Self {
        self.stamp_request = Some(args);
        self
    }

    /// Returns the declared type name.
    #[must_use]
    pub const fn name(&self) -> &EntityTypeName {
        &self.name
    }

    /// Returns the fields declared so far.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns `true` when the type was marked as an actor provider.
    #[must_use]
    pub const fn is_actor_provider(&self) -> bool {
        self.provides_actionstamps
    }

    /// Returns the stamping request, if one was made.
    #[must_use]
    pub const fn stamp_request(&self) -> Option<&StampArgs> {
        self.stamp_request.as_ref()
    }

    /// Splits the declaration into its parts for registration.
    #[must_use]
    pub(crate) fn into_parts(self) -> DeclarationParts {
        DeclarationParts {
            name: self.name,
            fields: self.fields,
            provides_actionstamps: self.provides_actionstamps,
            stamp_request: self.stamp_request,
        }
    }
}

/// Owned pieces of a declaration, consumed by engine registration.
#[derive(Debug)]
pub(crate) struct DeclarationParts {
    pub(crate) name: EntityTypeName,
    pub(crate) fields: Vec<FieldDef>,
    pub(crate) provides_actionstamps: bool,
    pub(crate) stamp_request: Option<StampArgs>,
}
