//! Record-access port, used by the pre-persist hook.

use crate::model::{ActorKey, FieldName};

/// What the stamping hook needs from the record being persisted.
///
/// The new-record and dirty flags are owned by the engine and merely read
/// here; the stamp accessors read and write the two generated fields by
/// name. Implementations must treat a write as an ordinary field assignment
/// (dirty tracking included) so that a stamp written by [`touch`]-style
/// flows is picked up by the following save.
///
/// [`touch`]: crate::engine::InMemoryEngine::touch
pub trait Stamped {
    /// Returns `true` while the record has never been persisted.
    fn is_new_record(&self) -> bool;

    /// Returns `true` when the record's field values have changed since it
    /// was loaded (new records count as dirty).
    fn is_dirty(&self) -> bool;

    /// Reads a stamp field's current value, `None` when null.
    fn stamp(&self, field: &FieldName) -> Option<ActorKey>;

    /// Writes an actor key into a stamp field.
    fn write_stamp(&mut self, field: &FieldName, key: ActorKey);
}
