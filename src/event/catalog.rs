//! Immutable event catalog with an age-eligibility cache

use crate::config::EventRecord;
use crate::error::{LifeGameError, Result};
use ahash::AHashMap;
use parking_lot::RwLock;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Events eligible at one age, in catalog order
pub type Eligible<'a> = SmallVec<[&'a EventRecord; 16]>;

/// Ordered, read-only collection of event records
pub struct Catalog {
    events: Vec<EventRecord>,
    /// Highest `to` in the catalog; ages outside `0..=max_age_to` are not cached
    max_age_to: Option<i32>,
    /// age -> indices into `events`
    eligible_cache: RwLock<AHashMap<i32, Arc<[usize]>>>,
}

impl Catalog {
    /// Build a catalog, rejecting records whose age range is inverted
    pub fn new(events: Vec<EventRecord>) -> Result<Self> {
        for (index, event) in events.iter().enumerate() {
            if event.age_from > event.age_to {
                return Err(LifeGameError::InvalidCatalog(format!(
                    "event #{} ({:?}): from {} is greater than to {}",
                    index, event.title, event.age_from, event.age_to
                )));
            }
        }

        let max_age_to = events.iter().map(|e| e.age_to).max();

        Ok(Self {
            events,
            max_age_to,
            eligible_cache: RwLock::new(AHashMap::with_capacity(64)),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.events.get(index)
    }

    /// Records whose `[from, to]` range contains `age`, in catalog order
    pub fn eligible(&self, age: i32) -> Eligible<'_> {
        self.eligible_indices(age)
            .iter()
            .map(|&i| &self.events[i])
            .collect()
    }

    /// Number of records eligible at `age`
    pub fn eligible_count(&self, age: i32) -> usize {
        self.eligible_indices(age).len()
    }

    fn eligible_indices(&self, age: i32) -> Arc<[usize]> {
        // Fast path: check read lock first
        {
            let cache = self.eligible_cache.read();
            if let Some(indices) = cache.get(&age) {
                return indices.clone();
            }
        }

        // Slow path: scan and cache
        let indices: Arc<[usize]> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_eligible_at(age))
            .map(|(i, _)| i)
            .collect();

        if self.is_cacheable(age) {
            tracing::trace!(age, eligible = indices.len(), "eligibility cache miss");
            self.eligible_cache.write().insert(age, indices.clone());
        }
        indices
    }

    /// Bounds the cache to the ages the catalog can actually cover
    #[inline]
    fn is_cacheable(&self, age: i32) -> bool {
        self.max_age_to.is_some_and(|max| (0..=max).contains(&age))
    }

    #[cfg(test)]
    fn cache_size(&self) -> usize {
        self.eligible_cache.read().len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            max_age_to: None,
            eligible_cache: RwLock::new(AHashMap::new()),
        }
    }
}

impl Clone for Catalog {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            max_age_to: self.max_age_to,
            eligible_cache: RwLock::new(self.eligible_cache.read().clone()),
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
