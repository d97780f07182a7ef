//! Timed comparison runs and their reports

use std::fmt;
use std::time::{Duration, Instant};

use propval::{compare, Verdict};
use serde::{Serialize, Serializer};
use tracing::info;

use crate::population::Population;

/// Number of comparisons that produced each verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictCounts {
    /// `Verdict::Less` results
    pub less: usize,
    /// `Verdict::Equal` results
    pub equal: usize,
    /// `Verdict::Greater` results
    pub greater: usize,
    /// `Verdict::Unordered` results
    pub unordered: usize,
}

impl VerdictCounts {
    /// Count one verdict
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Less => self.less += 1,
            Verdict::Equal => self.equal += 1,
            Verdict::Greater => self.greater += 1,
            Verdict::Unordered => self.unordered += 1,
        }
    }

    /// Total number of recorded verdicts
    pub fn total(&self) -> usize {
        self.less + self.equal + self.greater + self.unordered
    }
}

impl<'a> FromIterator<&'a Verdict> for VerdictCounts {
    fn from_iter<I: IntoIterator<Item = &'a Verdict>>(iter: I) -> Self {
        let mut counts = Self::default();
        for verdict in iter {
            counts.record(*verdict);
        }
        counts
    }
}

/// Result of one timed run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of compared pairs
    pub pairs: usize,

    /// Wall time spent in the comparison loop
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,

    /// Tally of verdicts
    pub counts: VerdictCounts,
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(millis(*elapsed))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.elapsed.as_millis())?;
        write!(
            f,
            "pairs={} less={} equal={} greater={} unordered={}",
            self.pairs,
            self.counts.less,
            self.counts.equal,
            self.counts.greater,
            self.counts.unordered
        )
    }
}

/// Compare every pair of `population` and time the loop.
///
/// Verdicts are written into a preallocated buffer inside the timed
/// region and tallied afterwards.
pub fn run(population: &Population) -> Report {
    info!(pairs = population.len(), "starting comparison run");

    let mut verdicts = Vec::with_capacity(population.len());
    let start = Instant::now();
    verdicts.extend(population.pairs().map(|(lhs, rhs)| compare(lhs, rhs)));
    let elapsed = start.elapsed();

    let counts: VerdictCounts = verdicts.iter().collect();
    info!(
        elapsed_ms = millis(elapsed),
        unordered = counts.unordered,
        "finished comparison run"
    );

    Report {
        pairs: population.len(),
        elapsed,
        counts,
    }
}
