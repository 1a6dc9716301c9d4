//! Wall-clock timing of repeated traversals

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::traverse::Traversal;
use crate::{Layout, LayoutError};

/// Result of running one traversal several times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalTiming {
    /// Which counter ran
    pub traversal: Traversal,

    /// Count returned by the counter (identical every run)
    pub count: usize,

    /// Number of runs
    pub iterations: usize,

    /// Wall time across all runs
    pub total: Duration,

    /// Fastest single run
    pub best: Duration,
}

impl TraversalTiming {
    /// Average time per run
    pub fn mean(&self) -> Duration {
        let nanos = self.total.as_nanos() / self.iterations.max(1) as u128;
        Duration::from_nanos(nanos as u64)
    }
}

impl fmt::Display for TraversalTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>8} | count={:>9} | runs={:>4} | mean={:>12.3?} | best={:>12.3?}",
            self.traversal,
            self.count,
            self.iterations,
            self.mean(),
            self.best
        )
    }
}

/// Run `traversal` `iterations` times against `layout`
pub fn time_traversal(
    layout: &Layout,
    traversal: Traversal,
    iterations: usize,
) -> Result<TraversalTiming, LayoutError> {
    if iterations == 0 {
        return Err(LayoutError::ZeroIterations);
    }

    let mut total = Duration::ZERO;
    let mut best = Duration::MAX;
    let mut count = 0;

    for run in 0..iterations {
        let start = Instant::now();
        count = black_box(traversal.count(black_box(layout)));
        let elapsed = start.elapsed();

        trace!(%traversal, run, ?elapsed, count, "traversal run");
        total += elapsed;
        best = best.min(elapsed);
    }

    Ok(TraversalTiming {
        traversal,
        count,
        iterations,
        total,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutConfig;

    #[test]
    fn test_rejects_zero_iterations() {
        let layout = Layout::new(&LayoutConfig::new(2, 2).unwrap());
        assert!(matches!(
            time_traversal(&layout, Traversal::Row, 0),
            Err(LayoutError::ZeroIterations)
        ));
    }

    #[test]
    fn test_timing_carries_count() {
        let layout = Layout::new(&LayoutConfig::new(16, 32).unwrap());
        let timing = time_traversal(&layout, Traversal::Column, 3).unwrap();

        assert_eq!(timing.count, 64);
        assert_eq!(timing.iterations, 3);
        assert!(timing.best <= timing.mean());
        assert!(timing.mean() <= timing.total);
    }
}
