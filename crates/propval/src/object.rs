//! The external object behind the reference kind

use rand::Rng;

/// An opaque engine object with a random integer identity.
///
/// Objects are ordered totally by identity. They are shared between
/// property values through `Arc<EngineObject>` and never copied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EngineObject {
    id: i32,
}

impl EngineObject {
    /// Create an object with a fresh identity from the thread-local generator.
    ///
    /// Identities are non-negative. Two independently created objects
    /// almost always differ, but nothing guarantees it.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Create an object whose identity is drawn from `rng`
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self {
            id: rng.random_range(0..=i32::MAX),
        }
    }

    /// Create an object with a fixed identity
    pub fn with_id(id: i32) -> Self {
        Self { id }
    }

    /// The object's identity
    pub fn id(&self) -> i32 {
        self.id
    }
}

impl Default for EngineObject {
    fn default() -> Self {
        Self::new()
    }
}
