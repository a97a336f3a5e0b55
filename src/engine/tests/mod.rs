//! Unit tests for the in-memory engine.


use crate::engine::InMemoryEngine;
use crate::model::{EntityDeclaration, FieldKind};

/// Declares a plain `Widget` type with a serial key and a text label.
fn declare_widget(engine: &InMemoryEngine, type_name: &str) {
    engine
        .declare(
            EntityDeclaration::named(type_name)
                .field("id", FieldKind::Serial)
                .field("label", FieldKind::Text),
        )
        .expect("widget declaration is valid");
}
