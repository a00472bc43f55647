//! Validator combinators
//!
//! Combinators build new validators out of existing ones:
//!
//! - [`Or`] / [`or`] - try one validator, fall back to another
//! - [`Optional`] / [`optional`] / [`nullable`] - answer absent input with a default
//!
//! Object and array traversal live in [`validators`](crate::validators)
//! next to the primitives they are usually combined with.

pub mod optional;
pub mod or;

pub use optional::{Optional, nullable, optional};
pub use or::{Or, or};
