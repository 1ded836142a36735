use std::fmt::Display;
use std::time::Duration;

use average::{self, concatenate, Estimate, Mean, Variance};

use readable::num::*;

concatenate!(AggStats, [Mean, mean], [Variance, sample_variance]);

/// Summary over the sort phase of repeated runs, in milliseconds.
///
/// `stddev` is NaN for fewer than two runs and `mean` is NaN for none.
pub fn aggregate_durations(durations: impl Iterator<Item = Duration>) -> Stats {
    let s: AggStats = durations.map(|d| d.as_secs_f64() * 1000.0).collect();
    Stats {
        mean: s.mean(),
        stddev: s.sample_variance().sqrt(),
        len: s.mean.len() as usize,
    }
}

#[derive(Debug)]
pub struct Stats {
    pub mean: f64,
    pub stddev: f64,
    pub len: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "μ: {}ms σ: {}ms n: {}",
            Float::from(self.mean),
            Float::from(self.stddev),
            Unsigned::from(self.len),
        )
    }
}
