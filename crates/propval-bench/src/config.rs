//! Harness run configuration

use crate::error::{BenchError, Result};

/// Population size used when none is given
pub const DEFAULT_PAIRS: usize = 10_000_000;

/// Longest list generated for `Pairing::AnyKind`
pub const DEFAULT_MAX_LIST_LEN: usize = 4;

/// Which kinds end up on each side of a compared pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Pairing {
    /// Uniform choice among the four int/object pairings
    #[default]
    Mixed,
    /// Int against int
    IntInt,
    /// Object against int
    ObjectInt,
    /// Int against object
    IntObject,
    /// Object against object
    ObjectObject,
    /// Each side independently picks any kind, lists included
    AnyKind,
}

/// Configuration for a harness run.
///
/// Passed to population generation and controls the size and shape of
/// the compared data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of compared pairs
    pub pairs: usize,

    /// Generator seed; a fresh OS seed is drawn when absent
    pub seed: Option<u64>,

    /// Kind pairing of generated values
    pub pairing: Pairing,

    /// Upper bound on generated list length
    pub max_list_len: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
            seed: None,
            pairing: Pairing::default(),
            max_list_len: DEFAULT_MAX_LIST_LEN,
        }
    }
}

impl BenchConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom population size.
    pub fn with_pairs(pairs: usize) -> Self {
        Self {
            pairs,
            ..Default::default()
        }
    }

    /// Use a fixed generator seed.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a specific kind pairing.
    pub fn pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Check that the configuration describes a runnable benchmark.
    pub fn validate(&self) -> Result<()> {
        if self.pairs == 0 {
            return Err(BenchError::InvalidConfig(
                "pairs must be greater than zero".to_string(),
            ));
        }
        if self.max_list_len == 0 {
            return Err(BenchError::InvalidConfig(
                "max_list_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::new();
        assert_eq!(config.pairs, DEFAULT_PAIRS);
        assert_eq!(config.seed, None);
        assert_eq!(config.pairing, Pairing::Mixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = BenchConfig::with_pairs(10)
            .seeded(7)
            .pairing(Pairing::ObjectObject);
        assert_eq!(config.pairs, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pairing, Pairing::ObjectObject);
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let err = BenchConfig::with_pairs(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: pairs must be greater than zero"
        );
    }

    #[test]
    fn test_zero_list_len_rejected() {
        let config = BenchConfig {
            max_list_len: 0,
            ..BenchConfig::with_pairs(1)
        };
        assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));
    }
}
