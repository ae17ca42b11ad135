//! Mapping between globally unique ids and consecutive local indices.
//!
//! # Introduction
//!
//! Distributed data usually addresses an entity by a *global* id that is persistent but
//! not consecutive, while each process stores its entities in arrays addressed by a
//! *local* index that is consecutive but not persistent.
//! [`IndexSet`] keeps the pairs of both, sorted by global id.
//!
//! The set is modified in resize transactions only:
//!
//! 1. [`IndexSet::begin_resize`] switches from [`IndexSetState::Ground`] to [`IndexSetState::Resize`].
//! 2. [`IndexSet::add`] and [`IndexSet::remove`] queue modifications.
//! 3. [`IndexSet::end_resize`] merges them and switches back to [`IndexSetState::Ground`].
//!
//! Calling an operation in the wrong state is an error.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use genit::index_set::{IndexSet, LocalIndex};
//! use genit::prelude::*;
//!
//! let mut set = IndexSet::new();
//! set.begin_resize()?;
//! set.add(42u64)?;
//! set.add_with_local(7, LocalIndex::new(0, true))?;
//! set.add(13)?;
//! set.end_resize()?;
//! set.renumber_local()?;
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.num_public(), 1);
//! assert_eq!(set.get(&13).map(|p| p.local().local()), Some(1));
//!
//! let globals: Vec<u64> = set.cursors().map(|p| *p.global()).collect();
//! assert_eq!(globals, vec![7, 13, 42]);
//! # Ok(())
//! # }
//! ```
pub mod index_pair;

use std::cmp::Ordering;

use anyhow::{anyhow, Result};
use tracing::{debug, trace};

use crate::generic_iter::Iter;
use crate::{Indexed, IndexedMut};

pub use index_pair::{IndexPair, LocalIndex, LocalIndexState};

/// States an [`IndexSet`] can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndexSetState {
    /// The set is ready to be used.
    #[default]
    Ground,
    /// The set is being resized.
    Resize,
}

/// Manager of the mapping between global ids of type `G` and local indices.
///
/// The pairs are kept sorted by global id, so lookups are binary searches.
/// The set implements [`Indexed`] and [`IndexedMut`] over its pairs,
/// so it is walked with [`GenericIter`](crate::GenericIter) cursors.
#[derive(Clone, Debug)]
pub struct IndexSet<G> {
    pairs: Vec<IndexPair<G>>,
    added: Vec<IndexPair<G>>,
    state: IndexSetState,
    seq_no: usize,
    num_public: usize,
}

impl<G> Default for IndexSet<G> {
    fn default() -> Self {
        Self {
            pairs: vec![],
            added: vec![],
            state: IndexSetState::Ground,
            seq_no: 0,
            num_public: 0,
        }
    }
}

impl<G> IndexSet<G> {
    /// Creates a new empty set in the [`Ground`](IndexSetState::Ground) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the state.
    #[inline(always)]
    pub const fn state(&self) -> IndexSetState {
        self.state
    }

    /// Gets the number of completed resizes.
    #[inline(always)]
    pub const fn seq_no(&self) -> usize {
        self.seq_no
    }

    /// Gets the number of public indices, as of the last resize.
    #[inline(always)]
    pub const fn num_public(&self) -> usize {
        self.num_public
    }

    /// Gets the number of pairs, as of the last resize.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Checks if the set is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Creates an iterator for enumerating the pairs in global order.
    pub fn iter(&self) -> Iter<'_, Self> {
        self.cursors()
    }

    /// Switches to the [`Resize`](IndexSetState::Resize) state.
    ///
    /// # Errors
    ///
    /// An error is returned if the set is not in the [`Ground`](IndexSetState::Ground) state.
    pub fn begin_resize(&mut self) -> Result<()> {
        if self.state != IndexSetState::Ground {
            return Err(anyhow!(
                "begin_resize() requires the Ground state, but got {:?}.",
                self.state
            ));
        }
        self.state = IndexSetState::Resize;
        debug!(seq_no = self.seq_no, len = self.len(), "began resizing index set");
        Ok(())
    }

    /// Queues a new pair for `global` with a default local index.
    ///
    /// # Errors
    ///
    /// An error is returned if the set is not in the [`Resize`](IndexSetState::Resize) state.
    pub fn add(&mut self, global: G) -> Result<()> {
        self.add_with_local(global, LocalIndex::default())
    }

    /// Queues a new pair of `global` and `local`.
    ///
    /// # Errors
    ///
    /// An error is returned if the set is not in the [`Resize`](IndexSetState::Resize) state.
    pub fn add_with_local(&mut self, global: G, local: LocalIndex) -> Result<()> {
        if self.state != IndexSetState::Resize {
            return Err(anyhow!(
                "indices can only be added in the Resize state, but got {:?}.",
                self.state
            ));
        }
        self.added.push(IndexPair::new(global, local));
        Ok(())
    }

    /// Renumbers the local indices consecutively from 0 in global order.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the set is in the [`Resize`](IndexSetState::Resize) state, or
    ///  - the set holds more pairs than a local index can number.
    pub fn renumber_local(&mut self) -> Result<()> {
        if self.state == IndexSetState::Resize {
            return Err(anyhow!(
                "renumber_local() requires the Ground state, but got {:?}.",
                self.state
            ));
        }
        if !self.is_empty() && u32::try_from(self.len() - 1).is_err() {
            return Err(anyhow!(
                "local indices must fit in u32, but got {} pairs.",
                self.len()
            ));
        }
        let len = self.len() as isize;
        let mut it = self.begin_mut();
        while it.position() < len {
            let local = it.position() as u32;
            it.set_local(local);
            it.increment();
        }
        Ok(())
    }
}

impl<G: Ord> IndexSet<G> {
    /// Marks the pair of `global` as [`Deleted`](LocalIndexState::Deleted).
    /// It is dropped by the next [`end_resize`](Self::end_resize).
    ///
    /// Unknown global ids are ignored.
    ///
    /// # Errors
    ///
    /// An error is returned if the set is not in the [`Resize`](IndexSetState::Resize) state.
    pub fn remove(&mut self, global: &G) -> Result<()> {
        if self.state != IndexSetState::Resize {
            return Err(anyhow!(
                "indices can only be removed in the Resize state, but got {:?}.",
                self.state
            ));
        }
        if let Some(pair) = self.get_mut(global) {
            pair.local_mut().set_state(LocalIndexState::Deleted);
        }
        Ok(())
    }

    /// Merges the queued modifications and switches to the [`Ground`](IndexSetState::Ground) state.
    ///
    /// Deleted pairs are dropped, and the new pairs are inserted in global order.
    /// A new pair replaces an existing one with the same global id;
    /// among new pairs with the same global id, the first added is kept.
    ///
    /// # Errors
    ///
    /// An error is returned if the set is not in the [`Resize`](IndexSetState::Resize) state.
    pub fn end_resize(&mut self) -> Result<()> {
        if self.state != IndexSetState::Resize {
            return Err(anyhow!(
                "end_resize() requires the Resize state, but got {:?}.",
                self.state
            ));
        }
        self.added.sort();
        self.added.dedup_by(|a, b| a.global() == b.global());
        self.merge();
        self.seq_no += 1;
        self.state = IndexSetState::Ground;
        debug!(
            seq_no = self.seq_no,
            len = self.len(),
            num_public = self.num_public,
            "finished resizing index set"
        );
        Ok(())
    }

    /// Returns the pair of `global`, or [`None`] if not found.
    ///
    /// # Complexity
    ///
    /// $`O(\lg n)`$
    pub fn get(&self, global: &G) -> Option<&IndexPair<G>> {
        self.find(global).map(|i| &self.pairs[i])
    }

    /// Returns the pair of `global` mutably, or [`None`] if not found.
    pub fn get_mut(&mut self, global: &G) -> Option<&mut IndexPair<G>> {
        self.find(global).map(|i| &mut self.pairs[i])
    }

    fn find(&self, global: &G) -> Option<usize> {
        self.pairs.binary_search_by(|p| p.global().cmp(global)).ok()
    }

    fn merge(&mut self) {
        let num_added = self.added.len();
        let mut merged = Vec::with_capacity(self.pairs.len() + num_added);
        let mut old = std::mem::take(&mut self.pairs)
            .into_iter()
            .filter(|p| p.local().state() != LocalIndexState::Deleted)
            .peekable();
        let mut added = std::mem::take(&mut self.added).into_iter().peekable();

        loop {
            let order = match (old.peek(), added.peek()) {
                (Some(o), Some(a)) => o.global().cmp(a.global()),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            match order {
                Ordering::Less => merged.extend(old.next()),
                Ordering::Greater => merged.extend(added.next()),
                Ordering::Equal => {
                    old.next();
                    merged.extend(added.next());
                }
            }
        }

        self.num_public = merged.iter().filter(|p| p.local().is_public()).count();
        trace!(
            added = num_added,
            len = merged.len(),
            "merged index pairs"
        );
        self.pairs = merged;
    }
}

impl<G> Indexed for IndexSet<G> {
    type Item = IndexPair<G>;

    #[inline(always)]
    fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &IndexPair<G> {
        &self.pairs[pos]
    }
}

impl<G> IndexedMut for IndexSet<G> {
    #[inline(always)]
    fn at_mut(&mut self, pos: usize) -> &mut IndexPair<G> {
        &mut self.pairs[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    fn build(globals: &[u64]) -> IndexSet<u64> {
        let mut set = IndexSet::new();
        set.begin_resize().unwrap();
        for &g in globals {
            set.add(g).unwrap();
        }
        set.end_resize().unwrap();
        set
    }

    fn globals(set: &IndexSet<u64>) -> Vec<u64> {
        set.iter().map(|p| *p.global()).collect()
    }

    #[test]
    fn test_new() {
        let set = IndexSet::<u64>::new();
        assert_eq!(set.state(), IndexSetState::Ground);
        assert_eq!(set.seq_no(), 0);
        assert_eq!(set.num_public(), 0);
        assert!(set.is_empty());
        assert_eq!(set.begin(), set.end());
    }

    #[test]
    fn test_begin_resize_twice() {
        let mut set = IndexSet::<u64>::new();
        set.begin_resize().unwrap();
        let e = set.begin_resize();
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("begin_resize() requires the Ground state, but got Resize.".to_string())
        );
    }

    #[test]
    fn test_add_in_ground() {
        let mut set = IndexSet::<u64>::new();
        let e = set.add(1);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("indices can only be added in the Resize state, but got Ground.".to_string())
        );
    }

    #[test]
    fn test_remove_in_ground() {
        let mut set = build(&[1]);
        let e = set.remove(&1);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("indices can only be removed in the Resize state, but got Ground.".to_string())
        );
    }

    #[test]
    fn test_end_resize_in_ground() {
        let mut set = IndexSet::<u64>::new();
        let e = set.end_resize();
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("end_resize() requires the Resize state, but got Ground.".to_string())
        );
    }

    #[test]
    fn test_renumber_in_resize() {
        let mut set = IndexSet::<u64>::new();
        set.begin_resize().unwrap();
        let e = set.renumber_local();
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("renumber_local() requires the Ground state, but got Resize.".to_string())
        );
    }

    #[test]
    fn test_sorted_after_resize() {
        let set = build(&[42, 7, 13, 100, 1]);
        assert_eq!(globals(&set), vec![1, 7, 13, 42, 100]);
        assert_eq!(set.seq_no(), 1);
        assert_eq!(set.state(), IndexSetState::Ground);
    }

    #[test]
    fn test_random_merge() {
        let mut rng = ChaChaRng::seed_from_u64(334);
        let mut all: Vec<u64> = (0..1000).map(|x| x * 3).collect();
        all.shuffle(&mut rng);
        let (first, second) = all.split_at(600);

        let mut set = build(first);
        set.begin_resize().unwrap();
        for &g in second {
            set.add(g).unwrap();
        }
        for &g in &first[..100] {
            set.remove(&g).unwrap();
        }
        set.end_resize().unwrap();

        let mut expected: Vec<u64> = first[100..].iter().chain(second).copied().collect();
        expected.sort_unstable();
        assert_eq!(globals(&set), expected);
        assert_eq!(set.seq_no(), 2);
        for &g in &first[..100] {
            assert!(set.get(&g).is_none());
        }
        for &g in &expected {
            assert_eq!(set.get(&g).map(|p| *p.global()), Some(g));
        }
    }

    #[test]
    fn test_remove_without_add() {
        let mut set = build(&[1, 2, 3]);
        set.begin_resize().unwrap();
        set.remove(&2).unwrap();
        set.remove(&9).unwrap();
        assert_eq!(
            set.get(&2).map(|p| p.local().state()),
            Some(LocalIndexState::Deleted)
        );
        set.end_resize().unwrap();
        assert_eq!(globals(&set), vec![1, 3]);
    }

    #[test]
    fn test_replace_and_duplicates() {
        let mut set = IndexSet::new();
        set.begin_resize().unwrap();
        set.add_with_local(5u64, LocalIndex::new(1, false)).unwrap();
        set.add_with_local(5, LocalIndex::new(2, true)).unwrap();
        set.end_resize().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&5).map(|p| p.local().local()), Some(1));
        assert_eq!(set.num_public(), 0);

        set.begin_resize().unwrap();
        set.add_with_local(5, LocalIndex::new(9, true)).unwrap();
        set.end_resize().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&5).map(|p| p.local().local()), Some(9));
        assert_eq!(set.num_public(), 1);
    }

    #[test]
    fn test_num_public() {
        let mut set = IndexSet::new();
        set.begin_resize().unwrap();
        for g in 0..10u32 {
            set.add_with_local(g, LocalIndex::new(0, g % 3 == 0)).unwrap();
        }
        set.end_resize().unwrap();
        assert_eq!(set.num_public(), 4);

        set.begin_resize().unwrap();
        set.remove(&0).unwrap();
        set.remove(&1).unwrap();
        set.end_resize().unwrap();
        assert_eq!(set.num_public(), 3);
    }

    #[test]
    fn test_renumber_local() {
        let mut set = build(&[50, 10, 30]);
        assert!(set.iter().all(|p| p.local().local() == 0));
        set.renumber_local().unwrap();
        let locals: Vec<u32> = set.iter().map(|p| p.local().local()).collect();
        assert_eq!(locals, vec![0, 1, 2]);
        assert_eq!(set.get(&30).map(|p| u32::from(*p.local())), Some(1));
    }

    #[test]
    fn test_cursors() {
        let mut set = build(&[4, 8, 15, 16, 23, 42]);
        let begin = set.begin();
        assert_eq!(*begin[3].global(), 16);
        assert_eq!(begin.distance_to(&set.end()), 6);

        let mut it = set.begin_mut();
        it.advance(5);
        it.local_mut().set_state(LocalIndexState::Deleted);
        set.begin_resize().unwrap();
        set.end_resize().unwrap();
        assert_eq!(globals(&set), vec![4, 8, 15, 16, 23]);
    }
}
