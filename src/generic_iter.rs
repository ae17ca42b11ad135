//! Random-access cursor over any container implementing [`Indexed`].
//!
//! # Introduction
//!
//! [`GenericIter`] stores a borrowed container and a signed position.
//! Moving the cursor only updates the position; the container is consulted
//! when an element is requested, through [`Indexed::at`] or [`IndexedMut::at_mut`].
//!
//! Positions are deliberately unchecked while moving. A cursor may sit at the
//! end sentinel (position `len()`), before the first element, or anywhere else,
//! and only dereferencing an invalid position panics.
//!
//! # Examples
//!
//! ```
//! use genit::{GenericIter, Indexed};
//!
//! let v = vec![10, 20, 30, 40];
//!
//! let begin = GenericIter::new(&v, 0);
//! let end = v.end();
//!
//! let mut it = begin;
//! it.increment();
//! assert_eq!(*it, 20);
//! assert_eq!(it.element_at(2), &40);
//! assert_eq!(begin.distance_to(&end), 4);
//! assert_eq!(end - begin, 4);
//! assert!(it < end);
//!
//! let mut n = 0;
//! while it != end {
//!     it.increment();
//!     n += 1;
//! }
//! assert_eq!(n, 3);
//! ```
pub mod iter;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

use crate::mutability::{Const, Mut, Mutability};
use crate::{Indexed, IndexedMut};

pub use iter::Iter;

/// Random-access cursor over a container `C`, reading or writing as chosen by `M`.
///
/// The container is borrowed for `'a`, so the cursor cannot outlive it.
/// Two cursors are equal if and only if they refer to the same container instance
/// and hold the same position.
///
/// A default cursor is detached: it refers to no container, sits at position 0,
/// and panics when dereferenced.
///
/// # Mutability
///
/// - `GenericIter<'a, C, Const>` (the default) is `Copy` and yields `&'a C::Item`.
/// - `GenericIter<'a, C, Mut>` is unique and yields elements borrowed from the cursor.
///
/// A mutable cursor lowers into a read-only one, never the reverse:
///
/// ```
/// use genit::{Const, GenericIter, IndexedMut};
///
/// let mut v = vec![0, 1, 2, 3, 4];
/// let mut it = v.begin_mut();
/// it.advance(2);
/// assert_eq!(*it, 2);
///
/// let it: GenericIter<'_, Vec<i32>, Const> = it.into();
/// assert_eq!(*it, 2);
/// ```
///
/// ```compile_fail
/// use genit::{GenericIter, Indexed, Mut};
///
/// let v = vec![0, 1, 2, 3, 4];
/// let it: GenericIter<'_, Vec<i32>, Mut> = GenericIter::from(v.begin());
/// ```
pub struct GenericIter<'a, C: ?Sized + 'a, M: Mutability = Const> {
    container: Option<M::Ref<'a, C>>,
    position: isize,
}

/// Converts a cursor position into a container index.
#[inline(always)]
fn to_index(position: isize) -> usize {
    match usize::try_from(position) {
        Ok(pos) => pos,
        Err(_) => panic!("cursor position {position} is out of bounds."),
    }
}

impl<'a, C: ?Sized + 'a, M: Mutability> GenericIter<'a, C, M> {
    /// Gets the current position.
    #[inline(always)]
    pub const fn position(&self) -> isize {
        self.position
    }

    /// Checks if the cursor refers to no container, i.e., it was default-constructed.
    #[inline(always)]
    pub const fn is_detached(&self) -> bool {
        self.container.is_none()
    }

    /// Returns the container the cursor refers to, or [`None`] if detached.
    #[inline(always)]
    pub fn container(&self) -> Option<&C> {
        self.container.as_ref().map(|c| M::as_shared(c))
    }

    /// Checks if `self` and `other` refer to the same container instance.
    ///
    /// Two detached cursors share the absent container.
    #[inline(always)]
    pub fn same_container<N: Mutability>(&self, other: &GenericIter<'_, C, N>) -> bool {
        self.addr() == other.addr()
    }

    /// Moves the cursor to the next position.
    ///
    /// No bounds checking is performed.
    #[inline(always)]
    pub fn increment(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Moves the cursor to the previous position.
    ///
    /// No bounds checking is performed.
    #[inline(always)]
    pub fn decrement(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    /// Moves the cursor by `n` positions, backwards if `n` is negative.
    ///
    /// This is equivalent to `n` calls of [`increment`](Self::increment) (or `-n` calls of
    /// [`decrement`](Self::decrement)). No bounds checking is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use genit::Indexed;
    ///
    /// let v = vec![5, 6, 7];
    /// let mut it = v.end();
    /// it.advance(-3);
    /// assert_eq!(it, v.begin());
    /// ```
    #[inline(always)]
    pub fn advance(&mut self, n: isize) -> &mut Self {
        self.position += n;
        self
    }

    /// Returns the signed number of increments moving `self` onto `other`,
    /// i.e., `other.position() - self.position()`.
    ///
    /// # Arguments
    ///
    ///  - `other`: Cursor over the same container, of either mutability.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the cursors refer to different containers.
    /// The result is meaningless in that case otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use genit::Indexed;
    ///
    /// let v = vec![1, 2, 3, 4];
    /// let (a, b) = (v.begin() + 1, v.end());
    /// assert_eq!(a.distance_to(&b), 3);
    /// assert_eq!(b.distance_to(&a), -3);
    /// ```
    #[inline(always)]
    pub fn distance_to<N: Mutability>(&self, other: &GenericIter<'_, C, N>) -> isize {
        debug_assert!(
            self.same_container(other),
            "distance between cursors over different containers."
        );
        other.position - self.position
    }

    fn addr(&self) -> Option<*const C> {
        self.container().map(|c| c as *const C)
    }

    fn shared(&self) -> &C {
        match self.container() {
            Some(c) => c,
            None => panic!("dereferenced a detached cursor."),
        }
    }
}

impl<'a, C: ?Sized + 'a> GenericIter<'a, C, Const> {
    /// Creates a read-only cursor over `container` at `position`.
    ///
    /// # Arguments
    ///
    ///  - `container`: Container to walk.
    ///  - `position`: Initial position, e.g., 0 for the first element or
    ///    the container length for the end sentinel. It is not checked.
    #[inline(always)]
    pub const fn new(container: &'a C, position: isize) -> Self {
        Self {
            container: Some(container),
            position,
        }
    }

    /// Moves the cursor to the next position, returning a copy of the cursor before moving.
    #[inline(always)]
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.increment();
        old
    }

    /// Moves the cursor to the previous position, returning a copy of the cursor before moving.
    #[inline(always)]
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.decrement();
        old
    }

    /// Creates an iterator over the elements from `self` up to (but excluding) `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genit::Indexed;
    ///
    /// let v = vec![1, 2, 3, 4, 5];
    /// let it = (v.begin() + 1).range(v.end() - 1);
    /// assert_eq!(it.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    /// ```
    pub fn range(self, end: Self) -> Iter<'a, C> {
        Iter::new(self, end)
    }
}

impl<'a, C: Indexed + ?Sized + 'a> GenericIter<'a, C, Const> {
    /// Returns the element at the current position.
    ///
    /// The reference is bound to the container, not to the cursor.
    ///
    /// # Panics
    ///
    /// It panics if the cursor is detached or its position is out of bounds.
    #[inline(always)]
    pub fn get(&self) -> &'a C::Item {
        match self.container {
            Some(c) => c.at(to_index(self.position)),
            None => panic!("dereferenced a detached cursor."),
        }
    }

    /// Returns the element `offset` positions away, leaving the cursor unchanged.
    ///
    /// # Panics
    ///
    /// It panics if the cursor is detached or `position() + offset` is out of bounds.
    #[inline(always)]
    pub fn element_at(&self, offset: isize) -> &'a C::Item {
        match self.container {
            Some(c) => c.at(to_index(self.position + offset)),
            None => panic!("dereferenced a detached cursor."),
        }
    }
}

impl<'a, C: ?Sized + 'a> GenericIter<'a, C, Mut> {
    /// Creates a mutable cursor over `container` at `position`.
    ///
    /// # Arguments
    ///
    ///  - `container`: Container to walk.
    ///  - `position`: Initial position. It is not checked.
    #[inline(always)]
    pub fn new_mut(container: &'a mut C, position: isize) -> Self {
        Self {
            container: Some(container),
            position,
        }
    }

    /// Borrows the cursor as a read-only one at the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use genit::{Indexed, IndexedMut};
    ///
    /// let mut v = vec![1, 2, 3];
    /// let mut it = v.begin_mut();
    /// it.increment();
    /// let ro = it.as_const();
    /// assert_eq!(ro.position(), 1);
    /// assert_eq!(*ro, 2);
    /// ```
    #[inline(always)]
    pub fn as_const(&self) -> GenericIter<'_, C, Const> {
        GenericIter {
            container: self.container.as_deref(),
            position: self.position,
        }
    }
}

impl<'a, C: Indexed + ?Sized + 'a> GenericIter<'a, C, Mut> {
    /// Returns the element at the current position.
    ///
    /// # Panics
    ///
    /// It panics if the cursor is detached or its position is out of bounds.
    #[inline(always)]
    pub fn get(&self) -> &C::Item {
        self.shared().at(to_index(self.position))
    }

    /// Returns the element `offset` positions away, leaving the cursor unchanged.
    ///
    /// # Panics
    ///
    /// It panics if the cursor is detached or `position() + offset` is out of bounds.
    #[inline(always)]
    pub fn element_at(&self, offset: isize) -> &C::Item {
        self.shared().at(to_index(self.position + offset))
    }
}

impl<'a, C: IndexedMut + ?Sized + 'a> GenericIter<'a, C, Mut> {
    /// Returns the element at the current position mutably.
    ///
    /// # Panics
    ///
    /// It panics if the cursor is detached or its position is out of bounds.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut C::Item {
        let pos = to_index(self.position);
        match self.container.as_deref_mut() {
            Some(c) => c.at_mut(pos),
            None => panic!("dereferenced a detached cursor."),
        }
    }

    /// Returns the element `offset` positions away mutably, leaving the cursor unchanged.
    ///
    /// # Panics
    ///
    /// It panics if the cursor is detached or `position() + offset` is out of bounds.
    #[inline(always)]
    pub fn element_at_mut(&mut self, offset: isize) -> &mut C::Item {
        let pos = to_index(self.position + offset);
        match self.container.as_deref_mut() {
            Some(c) => c.at_mut(pos),
            None => panic!("dereferenced a detached cursor."),
        }
    }
}

impl<'a, C: ?Sized + 'a> From<GenericIter<'a, C, Mut>> for GenericIter<'a, C, Const> {
    /// Lowers a mutable cursor into a read-only one at the same position.
    fn from(it: GenericIter<'a, C, Mut>) -> Self {
        let container = match it.container {
            Some(c) => Some(&*c),
            None => None,
        };
        Self {
            container,
            position: it.position,
        }
    }
}

impl<'a, C: ?Sized + 'a, M: Mutability> Default for GenericIter<'a, C, M> {
    fn default() -> Self {
        Self {
            container: None,
            position: 0,
        }
    }
}

impl<'a, C: ?Sized + 'a> Clone for GenericIter<'a, C, Const> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: ?Sized + 'a> Copy for GenericIter<'a, C, Const> {}

impl<'a, C: ?Sized + 'a, M: Mutability> fmt::Debug for GenericIter<'a, C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericIter")
            .field("container", &self.addr())
            .field("position", &self.position)
            .finish()
    }
}

impl<'a, 'b, C, M, N> PartialEq<GenericIter<'b, C, N>> for GenericIter<'a, C, M>
where
    C: ?Sized,
    M: Mutability,
    N: Mutability,
{
    #[inline(always)]
    fn eq(&self, other: &GenericIter<'b, C, N>) -> bool {
        self.position == other.position && self.same_container(other)
    }
}

impl<'a, C: ?Sized + 'a, M: Mutability> Eq for GenericIter<'a, C, M> {}

impl<'a, 'b, C, M, N> PartialOrd<GenericIter<'b, C, N>> for GenericIter<'a, C, M>
where
    C: ?Sized,
    M: Mutability,
    N: Mutability,
{
    /// Orders cursors over the same container by position.
    /// Cursors over different containers are incomparable.
    fn partial_cmp(&self, other: &GenericIter<'b, C, N>) -> Option<Ordering> {
        if self.same_container(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<'a, C: Indexed + ?Sized + 'a, M: Mutability> Deref for GenericIter<'a, C, M> {
    type Target = C::Item;

    #[inline(always)]
    fn deref(&self) -> &C::Item {
        self.shared().at(to_index(self.position))
    }
}

impl<'a, C: IndexedMut + ?Sized + 'a> DerefMut for GenericIter<'a, C, Mut> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut C::Item {
        self.get_mut()
    }
}

impl<'a, C: Indexed + ?Sized + 'a, M: Mutability> Index<isize> for GenericIter<'a, C, M> {
    type Output = C::Item;

    #[inline(always)]
    fn index(&self, offset: isize) -> &C::Item {
        self.shared().at(to_index(self.position + offset))
    }
}

impl<'a, C: IndexedMut + ?Sized + 'a> IndexMut<isize> for GenericIter<'a, C, Mut> {
    #[inline(always)]
    fn index_mut(&mut self, offset: isize) -> &mut C::Item {
        self.element_at_mut(offset)
    }
}

impl<'a, C: ?Sized + 'a, M: Mutability> AddAssign<isize> for GenericIter<'a, C, M> {
    #[inline(always)]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<'a, C: ?Sized + 'a, M: Mutability> SubAssign<isize> for GenericIter<'a, C, M> {
    #[inline(always)]
    fn sub_assign(&mut self, n: isize) {
        self.advance(-n);
    }
}

impl<'a, C: ?Sized + 'a> Add<isize> for GenericIter<'a, C, Const> {
    type Output = Self;

    #[inline(always)]
    fn add(mut self, n: isize) -> Self {
        self.advance(n);
        self
    }
}

impl<'a, C: ?Sized + 'a> Sub<isize> for GenericIter<'a, C, Const> {
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, n: isize) -> Self {
        self.advance(-n);
        self
    }
}

impl<'a, C: ?Sized + 'a> Sub for GenericIter<'a, C, Const> {
    type Output = isize;

    /// Returns `self.position() - rhs.position()`, i.e., `rhs.distance_to(&self)`.
    #[inline(always)]
    fn sub(self, rhs: Self) -> isize {
        rhs.distance_to(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn gen_random_ints(len: usize, seed: u64) -> Vec<u64> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen::<u64>()).collect()
    }

    fn gen_random_positions(n: usize, len: usize, seed: u64) -> Vec<isize> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        (0..n).map(|_| rng.gen_range(0..=len) as isize).collect()
    }

    #[test]
    fn test_equal_iff_same_position() {
        let v = gen_random_ints(100, 13);
        let n = v.len() as isize;
        for i in 0..=n {
            for j in 0..=n {
                let a = GenericIter::new(&v, i);
                let b = GenericIter::new(&v, j);
                assert_eq!(a == b, i == j);
                assert_eq!(a != b, i != j);
            }
        }
    }

    #[test]
    fn test_different_containers() {
        let v = vec![1, 2, 3];
        let w = v.clone();
        assert_ne!(v.begin(), w.begin());
        assert_eq!(v.begin().partial_cmp(&w.begin()), None);
        assert!(!v.begin().same_container(&w.begin()));
        assert!(v.begin().same_container(&v.end()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "distance between cursors over different containers.")]
    fn test_distance_different_containers() {
        let v = vec![1, 2, 3];
        let w = vec![1, 2, 3];
        v.begin().distance_to(&w.end());
    }

    #[test]
    fn test_increment_then_deref() {
        let v = gen_random_ints(1000, 7);
        let mut it = v.begin();
        for _ in 0..v.len() - 1 {
            let next = *it.element_at(1);
            it.increment();
            assert_eq!(*it.get(), next);
        }
    }

    #[test]
    fn test_decrement_then_deref() {
        let v = gen_random_ints(1000, 8);
        let mut it = v.end();
        for i in (0..v.len()).rev() {
            let prev = *it.element_at(-1);
            it.decrement();
            assert_eq!(*it, prev);
            assert_eq!(*it, v[i]);
        }
        assert_eq!(it, v.begin());
    }

    #[test]
    fn test_random_advance() {
        let v = gen_random_ints(1000, 42);
        let from = gen_random_positions(1000, v.len() - 1, 1);
        let to = gen_random_positions(1000, v.len() - 1, 2);
        for (&i, &j) in from.iter().zip(to.iter()) {
            let mut it = GenericIter::new(&v, i);
            let expected = *it.element_at(j - i);
            assert_eq!(it[j - i], expected);
            it.advance(j - i);
            assert_eq!(it.position(), j);
            assert_eq!(*it, expected);
            assert_eq!(*it, v[j as usize]);
        }
    }

    #[test]
    fn test_random_distance() {
        let v = gen_random_ints(500, 3);
        let from = gen_random_positions(1000, v.len(), 4);
        let to = gen_random_positions(1000, v.len(), 5);
        for (&i, &j) in from.iter().zip(to.iter()) {
            let a = GenericIter::new(&v, i);
            let b = GenericIter::new(&v, j);
            assert_eq!(a.distance_to(&b), j - i);
            assert_eq!(b.distance_to(&a), i - j);
            assert_eq!(b - a, j - i);
            assert_eq!(a.partial_cmp(&b), Some(i.cmp(&j)));
        }
    }

    #[test]
    fn test_advance_is_repeated_increment() {
        let v = vec![0u8; 10];
        let mut a = v.begin();
        let mut b = v.begin();
        a.advance(7).advance(-3);
        for _ in 0..7 {
            b.increment();
        }
        for _ in 0..3 {
            b.decrement();
        }
        assert_eq!(a, b);
        a += 2;
        b -= -2;
        assert_eq!(a, b);
        assert_eq!(a + 1 - 1, b);
    }

    #[test]
    fn test_post_increment_decrement() {
        let v = vec![5, 6, 7];
        let mut it = v.begin();
        assert_eq!(*it.post_increment(), 5);
        assert_eq!(*it, 6);
        assert_eq!(*it.post_decrement(), 6);
        assert_eq!(*it, 5);
    }

    #[test]
    fn test_out_of_range_positions() {
        let v = vec![1, 2, 3];
        let mut it = v.begin();
        it.decrement();
        assert_eq!(it.position(), -1);
        it.advance(10);
        assert_eq!(it.position(), 9);
        it.advance(-6);
        assert_eq!(it, v.end());
        assert_eq!(*it.element_at(-1), 3);
    }

    #[test]
    #[should_panic(expected = "cursor position -1 is out of bounds.")]
    fn test_deref_before_begin() {
        let v = vec![1, 2, 3];
        let mut it = v.begin();
        it.decrement();
        it.get();
    }

    #[test]
    fn test_mut_to_const() {
        let mut v: Vec<i32> = (0..5).collect();
        for i in 0..5 {
            let mut it = GenericIter::new_mut(&mut v, 0);
            it.advance(i);
            let x = *it.get();
            assert_eq!(*it.as_const().get(), x);
            let ro: GenericIter<'_, Vec<i32>, Const> = it.into();
            assert_eq!(ro.position(), i);
            assert_eq!(*ro.get(), x);
        }

        let mut it = v.begin_mut();
        it.advance(2);
        assert_eq!(*it, 2);
        let ro: GenericIter<'_, Vec<i32>> = GenericIter::from(it);
        assert_eq!(*ro, 2);
        assert_eq!(ro.position(), 2);
        assert_eq!(ro.element_at(2), &4);
    }

    #[test]
    fn test_mut_writes() {
        let mut v = vec![1, 2, 3, 4];
        let mut it = v.begin_mut();
        while it.position() < 4 {
            *it.get_mut() *= 2;
            it.increment();
        }
        let mut it = v.end_mut();
        it.decrement();
        it[-1] += 1;
        *it.element_at_mut(-3) = 0;
        assert_eq!(it.element_at(-2), &4);
        assert_eq!(v, vec![0, 4, 7, 8]);
    }

    #[test]
    fn test_cross_mutability_compare() {
        let mut v = vec![1, 2, 3];
        let mut it = v.begin_mut();
        it.increment();
        let ro = it.as_const();
        assert_eq!(it, ro);
        assert_eq!(ro.distance_to(&it), 0);
        assert_eq!(it.partial_cmp(&(ro + 1)), Some(Ordering::Less));
    }

    #[test]
    fn test_default() {
        let a: GenericIter<'_, Vec<u8>> = GenericIter::default();
        let b: GenericIter<'_, Vec<u8>> = Default::default();
        let m: GenericIter<'_, Vec<u8>, Mut> = Default::default();
        assert!(a.is_detached());
        assert_eq!(a.position(), 0);
        assert_eq!(a, b);
        assert_eq!(a, m);
        assert_eq!(a.container(), None);

        let v = vec![0u8];
        let c = GenericIter::new(&v, 0);
        assert!(!c.is_detached());
        assert_ne!(a, c);
    }

    #[test]
    #[should_panic(expected = "dereferenced a detached cursor.")]
    fn test_deref_detached() {
        let it: GenericIter<'_, Vec<u8>> = GenericIter::default();
        it.get();
    }

    #[test]
    fn test_end_convention() {
        for len in [0, 1, 5, 100] {
            let v = vec![0u32; len];
            let mut it = v.begin();
            for _ in 0..len {
                it.increment();
            }
            assert_eq!(it, GenericIter::new(&v, len as isize));
            assert_eq!(it, v.end());
        }
    }

    #[test]
    fn test_debug() {
        let it: GenericIter<'_, Vec<u8>> = GenericIter::default();
        assert_eq!(
            format!("{:?}", it),
            "GenericIter { container: None, position: 0 }"
        );
    }
}
