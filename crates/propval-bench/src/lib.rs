//! # propval-bench
//!
//! Timing harness for [`propval`] comparisons.
//!
//! The harness builds two equally long populations of property values from
//! a seeded generator, compares them pairwise, and reports how long the
//! comparison loop took together with a tally of the verdicts. Generation
//! is never part of the timed region.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod population;
pub mod report;

pub use config::{BenchConfig, Pairing};
pub use error::{BenchError, Result};
pub use population::Population;
pub use report::{run, Report, VerdictCounts};
