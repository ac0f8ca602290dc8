use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisRange, NumericTickLocator, TickSet};

/// Runtime metrics exposed by the tick cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TickQuery {
    max: OrderedFloat<f64>,
    min: OrderedFloat<f64>,
    desired: usize,
    max_ticks: usize,
}

/// Memoized numeric tick queries.
///
/// Margin computation and painting ask for the same ticks repeatedly between
/// data changes; the owner calls [`TickCache::clear`] when ranges move.
#[derive(Debug, Default)]
pub struct TickCache {
    entries: HashMap<TickQuery, Option<TickSet>>,
    hits: u64,
    misses: u64,
}

impl TickCache {
    const MAX_ENTRIES: usize = 1024;

    pub fn locate(&mut self, range: AxisRange, desired: usize, max_ticks: usize) -> Option<TickSet> {
        let query = TickQuery {
            max: OrderedFloat(range.max),
            min: OrderedFloat(range.min),
            desired,
            max_ticks,
        };
        if let Some(cached) = self.entries.get(&query) {
            self.hits = self.hits.saturating_add(1);
            trace!(max = range.max, min = range.min, desired, "tick cache hit");
            return cached.clone();
        }

        self.misses = self.misses.saturating_add(1);
        let ticks = NumericTickLocator::for_range(range, desired, max_ticks).locate();
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(query, ticks.clone());
        ticks
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn stats(&self) -> TickCacheStats {
        TickCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_query_hits_cache() {
        let mut cache = TickCache::default();
        let range = AxisRange::normalized(100.0, 0.0);
        let first = cache.locate(range, 10, 40);
        let second = cache.locate(range, 10, 40);
        assert_eq!(first, second);
        assert_eq!(
            cache.stats(),
            TickCacheStats {
                hits: 1,
                misses: 1,
                size: 1
            }
        );
    }

    #[test]
    fn clear_drops_entries_but_keeps_counters() {
        let mut cache = TickCache::default();
        let _ = cache.locate(AxisRange::default(), 10, 40);
        cache.clear();
        assert_eq!(cache.stats().size, 0);
        assert_eq!(cache.stats().misses, 1);
    }
}
