//! # Randomized Set
//!
//! A set of unique values supporting **insert**, **remove** and **uniform random sampling**,
//! each in amortized O(1) time.
//!
//! The values live in a dense `Vec<T>` (the *value store*) so a random slot can be read in
//! constant time, and a `HashMap<T, usize>` (the *position index*) maps every value to its
//! slot so membership checks and removals avoid a linear scan.
//!
//! Removal uses **swap-to-end deletion**: the last value is moved into the freed slot and the
//! store is truncated by one. Only the moved value's index entry changes, so removal is O(1),
//! at the cost of insertion order. Slot order carries no meaning beyond addressability.
//!
//! ## Key Properties
//! - **No duplicates**: inserting a present value returns `false` and changes nothing.
//! - **Consistency**: after every operation, `positions[store[i]] == i` for every slot `i`
//!   and both structures have the same length.
//! - **Uniform sampling**: [`RandomizedSet::get_random`] picks each member with probability `1/n`.
//! - **Explicit precondition**: sampling an empty set is an [`Error::InvalidState`], never a default value.
//! - **Thread Safety**: not thread-safe. Wrap in a mutex to share it.
//!
//! ## Example
//! ```rust
//! use randset::RandomizedSet;
//!
//! let mut set = RandomizedSet::with_seed(7);
//! assert!(set.insert(1));
//! assert!(set.insert(2));
//! assert!(!set.insert(1));
//!
//! let picked = *set.get_random().unwrap();
//! assert!(picked == 1 || picked == 2);
//!
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1));
//! assert_eq!(set.get_random(), Ok(&2));
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cs::error::{Error, Result};
use crate::cs::randomized::index_source::IndexSource;

/// A set of unique values with O(1) insert, remove and uniform random retrieval.
///
/// `T` defaults to `i64`; `S` is the stored [`IndexSource`] used by
/// [`get_random`](RandomizedSet::get_random), an OS-seeded [`StdRng`] by default.
#[derive(Debug, Clone)]
pub struct RandomizedSet<T = i64, S = StdRng> {
    values: Vec<T>,
    positions: HashMap<T, usize>,
    source: S,
}

impl<T: Hash + Eq + Clone> Default for RandomizedSet<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> RandomizedSet<T, StdRng> {
    /// Creates an empty set whose sampling is seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_rng(capacity, StdRng::from_entropy())
    }
}

impl<T: Hash + Eq + Clone> RandomizedSet<T, ChaCha8Rng> {
    /// Creates an empty set whose samples are a reproducible function of `seed`.
    ///
    /// Seeded sets use ChaCha8, whose output stream is stable across `rand` releases.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<T: Hash + Eq + Clone, S> RandomizedSet<T, S> {
    /// Creates an empty set sampling from `source`.
    pub fn with_rng(source: S) -> Self {
        Self::with_capacity_and_rng(0, source)
    }

    /// Creates an empty set with the given capacity, sampling from `source`.
    pub fn with_capacity_and_rng(capacity: usize, source: S) -> Self {
        RandomizedSet {
            values: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            source,
        }
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns the slot currently holding `value`.
    ///
    /// Slots shift when other values are removed, so this is only meaningful
    /// until the next removal.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.positions.get(value).copied()
    }

    /// Adds `value` to the set.
    ///
    /// Returns `false` without modifying the set if `value` is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let position = self.values.len();
        match self.positions.entry(value) {
            Entry::Occupied(_) => {
                trace!("insert rejected: value already present");
                false
            }
            Entry::Vacant(slot) => {
                self.values.push(slot.key().clone());
                slot.insert(position);
                trace!("inserted value at position {}", position);
                true
            }
        }
    }

    /// Removes `value` from the set.
    ///
    /// The last value is moved into the freed slot, so removal is O(1) but
    /// slot order is not preserved. Returns `false` if `value` was absent.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(position) = self.positions.remove(value) else {
            trace!("remove skipped: value absent");
            return false;
        };

        self.values.swap_remove(position);
        // If the removed value was not in the last slot, the former last value now sits at `position`
        if let Some(moved) = self.values.get(position) {
            if let Some(slot) = self.positions.get_mut(moved) {
                *slot = position;
            }
            trace!(
                "removed value at position {}, relocated last value from position {}",
                position,
                self.values.len()
            );
        } else {
            trace!("removed value from last position {}", position);
        }
        true
    }

    /// Returns a uniformly chosen value, drawing the slot from `source` instead of
    /// the set's own generator.
    ///
    /// # Errors
    /// - [`Error::InvalidState`] if the set is empty.
    /// - [`Error::IndexOutOfRange`] if `source` returns an index outside `[0, len)`.
    pub fn get_random_with<I>(&self, source: &mut I) -> Result<&T>
    where
        I: IndexSource + ?Sized,
    {
        pick(&self.values, source)
    }

    /// Removes every value, keeping the allocated capacity.
    pub fn clear(&mut self) {
        debug!("clearing randomized set of {} values", self.values.len());
        self.values.clear();
        self.positions.clear();
    }

    /// Returns the values in slot order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterates over the values in slot order. The order carries no meaning.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Verifies that the value store and position index agree.
    ///
    /// # Errors
    /// Returns [`Error::Inconsistent`] describing the first mismatch found.
    pub fn check_invariants(&self) -> Result<()> {
        if self.values.len() != self.positions.len() {
            debug!(
                "invariant violated: {} stored values, {} index entries",
                self.values.len(),
                self.positions.len()
            );
            return Err(Error::inconsistent(format!(
                "value store holds {} values but position index holds {} entries",
                self.values.len(),
                self.positions.len()
            )));
        }

        for (slot, value) in self.values.iter().enumerate() {
            match self.positions.get(value) {
                Some(&recorded) if recorded == slot => {}
                Some(&recorded) => {
                    debug!("invariant violated at slot {}", slot);
                    return Err(Error::inconsistent(format!(
                        "value at slot {} is indexed at slot {}",
                        slot, recorded
                    )));
                }
                None => {
                    debug!("invariant violated at slot {}", slot);
                    return Err(Error::inconsistent(format!(
                        "value at slot {} has no index entry",
                        slot
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<T: Hash + Eq + Clone, S: IndexSource> RandomizedSet<T, S> {
    /// Returns a value chosen uniformly at random from the set.
    ///
    /// Each call is an independent draw, so the same value may be returned repeatedly.
    ///
    /// # Errors
    /// - [`Error::InvalidState`] if the set is empty.
    /// - [`Error::IndexOutOfRange`] if a custom source breaks its `[0, len)` contract.
    ///
    /// # Examples
    /// ```
    /// use randset::{Error, RandomizedSet};
    ///
    /// let mut set: RandomizedSet = RandomizedSet::new();
    /// assert!(matches!(set.get_random(), Err(Error::InvalidState(_))));
    ///
    /// set.insert(10);
    /// assert_eq!(set.get_random(), Ok(&10));
    /// ```
    pub fn get_random(&mut self) -> Result<&T> {
        pick(&self.values, &mut self.source)
    }
}

fn pick<'a, T, I>(values: &'a [T], source: &mut I) -> Result<&'a T>
where
    I: IndexSource + ?Sized,
{
    if values.is_empty() {
        return Err(Error::invalid_state(
            "cannot sample from an empty randomized set",
        ));
    }
    let len = values.len();
    let index = source.next_index(len);
    trace!("sampled position {} of {}", index, len);
    values.get(index).ok_or(Error::IndexOutOfRange { index, len })
}

impl<T: Hash + Eq + Clone> FromIterator<T> for RandomizedSet<T, StdRng> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut set = RandomizedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone, S> Extend<T> for RandomizedSet<T, S> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a RandomizedSet<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
