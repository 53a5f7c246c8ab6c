//! One-shot triggers for visibility-driven effects.
//!
//! The visibility observer may report the same element more than once (e.g.
//! before it has processed an `unobserve`). Membership in a [`TriggerSet`] is
//! what guarantees an effect runs at most once per element.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Keys still waiting for their one-time effect.
#[derive(Debug, Clone)]
pub struct TriggerSet<K: Eq + Hash> {
    pending: HashSet<K>,
}

impl<K: Eq + Hash> Default for TriggerSet<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> TriggerSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `key`; returns false if it was already pending
    pub fn arm(&mut self, key: K) -> bool {
        self.pending.insert(key)
    }

    /// Consume the trigger for `key`; true exactly once per armed key
    pub fn fire(&mut self, key: &K) -> bool {
        self.pending.remove(key)
    }

    /// Fire every key of an intersection batch and assign stagger delays.
    ///
    /// Keys are taken in batch order; already-fired keys are skipped and do not
    /// consume a stagger slot. The n-th newly fired key is delayed by `n * step`.
    pub fn fire_batch<I>(&mut self, batch: I, step: Duration) -> Vec<(K, Duration)>
    where
        I: IntoIterator<Item = K>,
    {
        let mut fired = Vec::new();
        for key in batch {
            if self.fire(&key) {
                let delay = step * fired.len() as u32;
                fired.push((key, delay));
            }
        }
        fired
    }
}

#[cfg(test)]
impl<K: Eq + Hash> TriggerSet<K> {
    fn is_pending(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    fn len(&self) -> usize {
        self.pending.len()
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fire_once() {
        let mut set = TriggerSet::new();
        assert!(set.arm("card"));
        assert!(!set.arm("card"));
        assert!(set.is_pending(&"card"));

        assert!(set.fire(&"card"));
        assert!(!set.fire(&"card"));
        assert!(!set.is_pending(&"card"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_fire_unknown_key() {
        let mut set: TriggerSet<u32> = TriggerSet::new();
        assert!(!set.fire(&7));
    }

    #[test]
    fn test_batch_stagger_in_batch_order() {
        let mut set = TriggerSet::new();
        for key in 0..5 {
            set.arm(key);
        }

        let fired = set.fire_batch([3, 1, 4], ms(100));
        assert_eq!(fired, vec![(3, ms(0)), (1, ms(100)), (4, ms(200))]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_batch_stagger_restarts_per_batch() {
        let mut set = TriggerSet::new();
        for key in 0..4 {
            set.arm(key);
        }

        set.fire_batch([0, 1], ms(100));
        let second = set.fire_batch([2, 3], ms(100));
        assert_eq!(second, vec![(2, ms(0)), (3, ms(100))]);
    }

    #[test]
    fn test_reentering_elements_fire_only_once() {
        let mut set = TriggerSet::new();
        set.arm("hero");
        set.arm("plan");

        let first = set.fire_batch(["hero"], ms(100));
        assert_eq!(first.len(), 1);

        // "hero" scrolls out and back in alongside "plan"
        let second = set.fire_batch(["hero", "plan", "hero"], ms(100));
        assert_eq!(second, vec![("plan", ms(0))]);

        let third = set.fire_batch(["hero", "plan"], ms(100));
        assert!(third.is_empty());
    }
}
