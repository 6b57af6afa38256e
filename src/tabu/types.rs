//! Tabu memory.

use std::collections::{HashSet, VecDeque};

use crate::error::{check_count, SolveResult};
use crate::tour::Tour;

/// Fixed-capacity, insertion-ordered set of recently visited tours.
///
/// Inserting beyond capacity evicts the oldest entry. Keys are the exact
/// position sequence, so rotations of the same cycle are distinct entries.
///
/// # Examples
///
/// ```
/// use tour_metaheur::tabu::TabuMemory;
/// use tour_metaheur::Tour;
///
/// let mut memory = TabuMemory::new(1)?;
/// let a = Tour::identity(3);
/// let b = Tour::new(vec![1, 0, 2], 3).unwrap();
/// memory.insert(&a);
/// memory.insert(&b);
/// assert!(!memory.contains(&a));
/// assert!(memory.contains(&b));
/// # Ok::<(), tour_metaheur::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    // FIFO queue with set for O(1) lookup
    queue: VecDeque<Tour>,
    set: HashSet<Tour>,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` tours.
    ///
    /// Fails with [`crate::SolveError::InvalidHyperparameter`] if `capacity` is zero.
    pub fn new(capacity: usize) -> SolveResult<Self> {
        check_count("tabu_capacity", capacity)?;
        Ok(Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
        })
    }

    pub fn contains(&self, tour: &Tour) -> bool {
        self.set.contains(tour)
    }

    /// Records `tour`, evicting the oldest entry when full.
    ///
    /// A tour already held is left in place; returns `false` in that case.
    pub fn insert(&mut self, tour: &Tour) -> bool {
        if self.set.contains(tour) {
            return false;
        }
        if self.queue.len() >= self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
        self.queue.push_back(tour.clone());
        self.set.insert(tour.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(order: &[usize]) -> Tour {
        Tour::new(order.to_vec(), order.len()).unwrap()
    }

    #[test]
    fn test_fifo_eviction() {
        let mut memory = TabuMemory::new(2).unwrap();
        let (a, b, c) = (t(&[0, 1, 2]), t(&[1, 0, 2]), t(&[2, 1, 0]));

        assert!(memory.insert(&a));
        assert!(memory.insert(&b));
        assert_eq!(memory.len(), 2);

        assert!(memory.insert(&c));
        assert_eq!(memory.len(), 2);
        assert!(!memory.contains(&a));
        assert!(memory.contains(&b));
        assert!(memory.contains(&c));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            TabuMemory::new(0),
            Err(crate::SolveError::InvalidHyperparameter { name: "tabu_capacity", .. })
        ));
        assert_eq!(TabuMemory::new(1).unwrap().capacity(), 1);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut memory = TabuMemory::new(3).unwrap();
        let a = t(&[0, 1, 2]);
        assert!(memory.insert(&a));
        assert!(!memory.insert(&a));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_rotations_are_distinct() {
        let mut memory = TabuMemory::new(3).unwrap();
        memory.insert(&t(&[0, 1, 2]));
        assert!(!memory.contains(&t(&[1, 2, 0])));
    }
}
