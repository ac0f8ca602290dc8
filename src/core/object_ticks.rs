use serde::{Deserialize, Serialize};

/// Tick placement for categorical axes indexed by integer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTickLocator {
    first: i64,
    last: i64,
    max_ticks: usize,
    force_all: bool,
}

impl ObjectTickLocator {
    #[must_use]
    pub fn new(first: i64, last: i64, max_ticks: usize) -> Self {
        let (first, last) = if first > last {
            (last, first)
        } else {
            (first, last)
        };
        Self {
            first,
            last,
            max_ticks,
            force_all: false,
        }
    }

    #[must_use]
    pub fn with_force_all(mut self, force_all: bool) -> Self {
        self.force_all = force_all;
        self
    }

    #[must_use]
    pub fn first(self) -> i64 {
        self.first
    }

    #[must_use]
    pub fn last(self) -> i64 {
        self.last
    }

    /// Indices to mark, thinned by doubling the stride until they fit.
    #[must_use]
    pub fn locate(self) -> Vec<i64> {
        let max_ticks = self.max_ticks.max(1) as u64;
        let span = self.last.abs_diff(self.first);
        let mut step: u64 = 1;
        loop {
            let count = (span / step).saturating_add(1);
            if self.force_all || count <= max_ticks {
                return (0..count)
                    .map(|index| self.first.saturating_add_unsigned(index * step))
                    .collect();
            }
            match step.checked_mul(2) {
                Some(next) => step = next,
                None => return vec![self.first],
            }
        }
    }

    /// Flattened `(index, y)` pairs for a horizontal axis.
    #[must_use]
    pub fn x_pairs(self, y: f64) -> Vec<f64> {
        self.locate()
            .into_iter()
            .flat_map(|index| [index as f64, y])
            .collect()
    }
}
