//! Domain types of the stamp binder: declaration arguments, the validated
//! suffix token, and the configured binding with its pre-persist hook.

mod args;
mod binding;
mod suffix;

pub use args::{ArgShape, StampArg, StampArgs};
pub use binding::StampBinding;
pub use suffix::Suffix;
