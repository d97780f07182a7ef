//! Random population generation

use std::sync::Arc;

use propval::{EngineObject, Kind, PropertyValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{BenchConfig, Pairing};
use crate::error::{BenchError, Result};

/// Left and right operands of every compared pair.
///
/// `lhs[i]` is compared against `rhs[i]`; both vectors always have the
/// same length.
#[derive(Debug, Clone)]
pub struct Population {
    lhs: Vec<PropertyValue>,
    rhs: Vec<PropertyValue>,
}

impl Population {
    /// Build a population from explicit operands.
    ///
    /// Fails when the two sides differ in length.
    pub fn from_sides(lhs: Vec<PropertyValue>, rhs: Vec<PropertyValue>) -> Result<Self> {
        if lhs.len() != rhs.len() {
            return Err(BenchError::MismatchedSides {
                lhs: lhs.len(),
                rhs: rhs.len(),
            });
        }
        Ok(Self { lhs, rhs })
    }

    /// Generate a population using the configured seed, or an OS seed
    /// when none is configured.
    pub fn seeded(config: &BenchConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| StdRng::from_os_rng().random());
        debug!(seed, "seeding population generator");
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }

    /// Generate a population drawing every choice from `rng`.
    pub fn generate<R: Rng>(config: &BenchConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut lhs = Vec::with_capacity(config.pairs);
        let mut rhs = Vec::with_capacity(config.pairs);
        for _ in 0..config.pairs {
            let (left, right) = kinds_for(config.pairing, rng);
            lhs.push(random_value(left, config.max_list_len, rng));
            rhs.push(random_value(right, config.max_list_len, rng));
        }

        debug!(
            pairs = config.pairs,
            pairing = ?config.pairing,
            "generated population"
        );
        Ok(Self { lhs, rhs })
    }

    /// Left operands
    pub fn lhs(&self) -> &[PropertyValue] {
        &self.lhs
    }

    /// Right operands
    pub fn rhs(&self) -> &[PropertyValue] {
        &self.rhs
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.lhs.len()
    }

    /// Whether the population holds no pairs
    pub fn is_empty(&self) -> bool {
        self.lhs.is_empty()
    }

    /// Iterate over `(lhs, rhs)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&PropertyValue, &PropertyValue)> {
        self.lhs.iter().zip(&self.rhs)
    }
}

fn kinds_for<R: Rng>(pairing: Pairing, rng: &mut R) -> (Kind, Kind) {
    match pairing {
        Pairing::Mixed => match rng.random_range(0..4) {
            0 => (Kind::Int, Kind::Int),
            1 => (Kind::Object, Kind::Int),
            2 => (Kind::Int, Kind::Object),
            _ => (Kind::Object, Kind::Object),
        },
        Pairing::IntInt => (Kind::Int, Kind::Int),
        Pairing::ObjectInt => (Kind::Object, Kind::Int),
        Pairing::IntObject => (Kind::Int, Kind::Object),
        Pairing::ObjectObject => (Kind::Object, Kind::Object),
        Pairing::AnyKind => (any_kind(rng), any_kind(rng)),
    }
}

fn any_kind<R: Rng>(rng: &mut R) -> Kind {
    Kind::ALL[rng.random_range(0..Kind::ALL.len())]
}

/// Build a random value of `kind`.
///
/// Integers and object identities are non-negative `i32`s. Lists hold up
/// to `max_list_len` scalar or object elements, never nested lists.
pub fn random_value<R: Rng>(kind: Kind, max_list_len: usize, rng: &mut R) -> PropertyValue {
    match kind {
        Kind::Bool => PropertyValue::Bool(rng.random()),
        Kind::Int => PropertyValue::Int(rng.random_range(0..=i32::MAX).into()),
        Kind::Double => PropertyValue::Double(rng.random()),
        Kind::List => {
            let len = rng.random_range(0..=max_list_len);
            PropertyValue::List(
                (0..len)
                    .map(|_| {
                        let element = match rng.random_range(0..4) {
                            0 => Kind::Bool,
                            1 => Kind::Int,
                            2 => Kind::Double,
                            _ => Kind::Object,
                        };
                        random_value(element, max_list_len, rng)
                    })
                    .collect(),
            )
        }
        Kind::Object => PropertyValue::Object(Arc::new(EngineObject::from_rng(rng))),
    }
}
