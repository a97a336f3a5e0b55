//! Actionstamps: actor-context propagation and record stamping for a
//! persistence layer.
//!
//! This crate stamps records with "who created this" and "who last updated
//! this" identifiers, sourced from a thread-local notion of the current
//! actor, at save time. It provides two cooperating roles:
//!
//! - **Actor Registry** ([`actor`]): thread-scoped storage of the current
//!   instance of an actor-providing type (a User, a Client), keyed by the
//!   type's identity. A value set on one thread is never visible to another.
//! - **Stamp Binder** ([`stamping`]): configured once per receiving type,
//!   it derives the `created_<suffix>` / `updated_<suffix>` field names,
//!   composes the two nullable integer fields into the receiving type's
//!   schema after a collision check, and supplies the pre-persist hook that
//!   conditionally writes them.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: schema vocabulary and stamping rules with no engine
//!   dependencies ([`model`], [`stamping::domain`])
//! - **Ports**: the narrow contract the binder consumes from the surrounding
//!   persistence engine ([`stamping::ports`])
//! - **Adapters**: a complete in-memory persistence engine implementing the
//!   ports ([`engine`])
//!
//! # Example
//!
//! ```
//! use actionstamps::actor::{ActorRef, ActorRegistry};
//! use actionstamps::engine::InMemoryEngine;
//! use actionstamps::model::{
//!     ActorKey, EntityDeclaration, EntityTypeName, FieldKind, FieldName, FieldValue,
//! };
//! use actionstamps::stamping::domain::StampArgs;
//!
//! let engine = InMemoryEngine::new();
//!
//! engine
//!     .declare(
//!         EntityDeclaration::named("User")
//!             .field("id", FieldKind::Serial)
//!             .field("name", FieldKind::Text)
//!             .provides_actionstamps(),
//!     )
//!     .expect("User declaration is valid");
//!
//! // Default arguments bind `created_by` / `updated_by` to the User type.
//! engine
//!     .declare(
//!         EntityDeclaration::named("Article")
//!             .field("id", FieldKind::Serial)
//!             .field("title", FieldKind::Text)
//!             .actionstamps(StampArgs::default()),
//!     )
//!     .expect("Article declaration is valid");
//!
//! let user = EntityTypeName::new("User");
//! ActorRegistry::set_current(ActorRef::new(user.clone(), Some(ActorKey::new(99))));
//!
//! let article_type = EntityTypeName::new("Article");
//! let mut article = engine.new_record(&article_type).expect("Article is declared");
//! article
//!     .set(&FieldName::new("title"), FieldValue::text("Stamped on save"))
//!     .expect("title is a text field");
//! engine.save(&mut article).expect("save succeeds");
//!
//! let created_by = FieldName::new("created_by");
//! assert_eq!(article.integer(&created_by).expect("field exists"), Some(99));
//!
//! ActorRegistry::clear_all();
//! ```

pub mod actor;
pub mod engine;
pub mod model;
pub mod stamping;
