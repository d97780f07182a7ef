//! Property value representation

mod compare;
mod display;
mod impls;

pub use compare::{compare, Verdict};

use std::fmt;
use std::sync::Arc;

use crate::object::EngineObject;

/// A property value holding exactly one kind of payload.
///
/// Scalars are stored inline. Lists own their elements (cloning a list
/// clones every element), while objects are shared: cloning an `Object`
/// value bumps the reference count and never copies the `EngineObject`.
#[derive(Clone)]
pub enum PropertyValue {
    /// Boolean: `true` or `false`
    Bool(bool),

    /// Signed 64-bit integer
    Int(i64),

    /// 64-bit IEEE floating point
    Double(f64),

    /// Ordered sequence of property values
    List(Vec<PropertyValue>),

    /// Shared reference to an engine object
    Object(Arc<EngineObject>),
}

/// The discriminant of a [`PropertyValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`PropertyValue::Bool`]
    Bool,
    /// [`PropertyValue::Int`]
    Int,
    /// [`PropertyValue::Double`]
    Double,
    /// [`PropertyValue::List`]
    List,
    /// [`PropertyValue::Object`]
    Object,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 5] = [Kind::Bool, Kind::Int, Kind::Double, Kind::List, Kind::Object];

    /// Lowercase name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::List => "list",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PropertyValue {
    /// The kind of the active payload
    pub fn kind(&self) -> Kind {
        match self {
            PropertyValue::Bool(_) => Kind::Bool,
            PropertyValue::Int(_) => Kind::Int,
            PropertyValue::Double(_) => Kind::Double,
            PropertyValue::List(_) => Kind::List,
            PropertyValue::Object(_) => Kind::Object,
        }
    }
}
