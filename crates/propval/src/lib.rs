//! # propval
//!
//! A closed, partially ordered property value.
//!
//! A [`PropertyValue`] holds exactly one of a fixed set of kinds: a boolean,
//! an integer, a double, a list of property values, or a shared reference to
//! an [`EngineObject`]. Two values compare with a four-way [`Verdict`]:
//! values of different kinds are always [`Verdict::Unordered`], never coerced.
//!
//! ## Architecture
//!
//! - **Object**: the external identity behind the reference kind
//! - **Value**: the tagged value, its accessors and the comparison
//! - **Error**: the typed failure returned by mismatched extraction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod object;
pub mod value;

// Re-export main types
pub use error::{PropertyError, Result};
pub use object::EngineObject;
pub use value::{compare, Kind, PropertyValue, Verdict};

/// propval version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
