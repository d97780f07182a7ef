//! PropertyValue constructors, predicates, extractors and conversions

use std::sync::Arc;

use super::*;
use crate::error::{PropertyError, Result};

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl PropertyValue {
    /// Create a list value
    pub fn list(items: impl IntoIterator<Item = PropertyValue>) -> Self {
        PropertyValue::List(items.into_iter().collect())
    }

    /// Create a value sharing ownership of `object`
    pub fn object(object: Arc<EngineObject>) -> Self {
        PropertyValue::Object(object)
    }

    /// Create a value wrapping a freshly created engine object
    pub fn new_object() -> Self {
        PropertyValue::Object(Arc::new(EngineObject::new()))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Kind Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, PropertyValue::Bool(_))
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, PropertyValue::Int(_))
    }

    /// Check if value is a double
    pub fn is_double(&self) -> bool {
        matches!(self, PropertyValue::Double(_))
    }

    /// Check if value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, PropertyValue::List(_))
    }

    /// Check if value references an engine object
    pub fn is_object(&self) -> bool {
        matches!(self, PropertyValue::Object(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (fail with KindMismatch on the wrong kind)
    // ═══════════════════════════════════════════════════════════════════
    fn mismatch(&self, expected: Kind) -> PropertyError {
        PropertyError::kind_mismatch(expected, self.kind())
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            PropertyValue::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Kind::Bool)),
        }
    }

    /// Extract integer value
    pub fn as_int(&self) -> Result<i64> {
        match self {
            PropertyValue::Int(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Int)),
        }
    }

    /// Extract double value
    pub fn as_double(&self) -> Result<f64> {
        match self {
            PropertyValue::Double(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Double)),
        }
    }

    /// Borrow the list elements
    pub fn as_list(&self) -> Result<&[PropertyValue]> {
        match self {
            PropertyValue::List(items) => Ok(items.as_slice()),
            _ => Err(self.mismatch(Kind::List)),
        }
    }

    /// Take ownership of the list elements
    pub fn into_list(self) -> Result<Vec<PropertyValue>> {
        match self {
            PropertyValue::List(items) => Ok(items),
            other => Err(other.mismatch(Kind::List)),
        }
    }

    /// Get a new shared handle to the referenced engine object
    pub fn as_object(&self) -> Result<Arc<EngineObject>> {
        match self {
            PropertyValue::Object(object) => Ok(Arc::clone(object)),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Int(n.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Double(n)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        PropertyValue::List(items)
    }
}

impl From<Arc<EngineObject>> for PropertyValue {
    fn from(object: Arc<EngineObject>) -> Self {
        PropertyValue::Object(object)
    }
}

impl From<EngineObject> for PropertyValue {
    fn from(object: EngineObject) -> Self {
        PropertyValue::Object(Arc::new(object))
    }
}

// ═══════════════════════════════════════════════════════════════════
// TryFrom Trait Implementations
// ═══════════════════════════════════════════════════════════════════

macro_rules! impl_try_from {
    ($ty:ty, $method:ident) => {
        impl TryFrom<&PropertyValue> for $ty {
            type Error = PropertyError;

            fn try_from(value: &PropertyValue) -> Result<Self> {
                value.$method()
            }
        }

        impl TryFrom<PropertyValue> for $ty {
            type Error = PropertyError;

            fn try_from(value: PropertyValue) -> Result<Self> {
                value.$method()
            }
        }
    };
}

impl_try_from!(bool, as_bool);
impl_try_from!(i64, as_int);
impl_try_from!(f64, as_double);
impl_try_from!(Arc<EngineObject>, as_object);

impl TryFrom<PropertyValue> for Vec<PropertyValue> {
    type Error = PropertyError;

    fn try_from(value: PropertyValue) -> Result<Self> {
        value.into_list()
    }
}
