//! # `genit`: Generic random-access cursors in Rust
//!
//! `genit` gives any container with positional element access a random-access cursor,
//! [`GenericIter`], by implementing only two methods of [`Indexed`]:
//! the number of elements and a reference to the element at a position.
//!
//! ## Cursors
//!
//! A cursor is a pair of a borrowed container and a signed position.
//! It supports the operations of a C++-style random-access iterator:
//!
//! - dereference ([`GenericIter::get`] or `*it`),
//! - increment and decrement,
//! - offset dereference ([`GenericIter::element_at`] or `it[i]`),
//! - advance by a signed offset ([`GenericIter::advance`] or `it += n`),
//! - signed distance ([`GenericIter::distance_to`]), and
//! - equality and ordering between cursors over the same container.
//!
//! Arithmetic is never bounds checked, so the position may move before the first
//! element or past the end; only dereferencing such a position panics.
//!
//! ## Read-only and mutable cursors
//!
//! The same type serves both views, selected by a [`Mutability`] marker.
//! `GenericIter<'a, C, Const>` borrows the container shared and is `Copy`;
//! `GenericIter<'a, C, Mut>` borrows it exclusively and hands out mutable elements.
//! A mutable cursor converts into a read-only one with [`From`], but
//! there is no way back, which the compiler checks:
//!
//! ```compile_fail
//! use genit::{GenericIter, Indexed, Mut};
//!
//! let v = vec![0, 1, 2, 3, 4];
//! let it = v.begin();
//! let it: GenericIter<'_, Vec<i32>, Mut> = it.into();
//! ```
//!
//! ## Examples
//!
//! ```
//! use genit::{Indexed, IndexedMut};
//!
//! let mut v = vec![0, 1, 2, 3, 4];
//!
//! let mut it = v.begin_mut();
//! while it.position() < 5 {
//!     *it *= 10;
//!     it.increment();
//! }
//!
//! let (mut it, end) = (v.begin(), v.end());
//! assert_eq!(end.distance_to(&it), -5);
//! it += 2;
//! assert_eq!(*it, 20);
//! assert_eq!(it[1], 30);
//! assert_eq!(v.cursors().sum::<i32>(), 100);
//! ```
//!
//! ## Index sets
//!
//! [`IndexSet`] maps persistent global ids to consecutive local indices and
//! exposes its pairs through the same cursors.
#![deny(missing_docs)]

pub mod generic_iter;
pub mod index_set;
pub mod mutability;
pub mod prelude;
mod std_impls;

pub use generic_iter::GenericIter;
pub use index_set::IndexSet;
pub use mutability::{Const, Mut, Mutability};

/// An interface for containers whose elements are addressed by position.
///
/// Implementing [`len`](Indexed::len) and [`at`](Indexed::at) is all a container
/// needs for read-only cursors.
///
/// # Examples
///
/// ```
/// use genit::Indexed;
///
/// struct Squares([u64; 8]);
///
/// impl Indexed for Squares {
///     type Item = u64;
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn at(&self, pos: usize) -> &u64 {
///         &self.0[pos]
///     }
/// }
///
/// let sq = Squares([0, 1, 4, 9, 16, 25, 36, 49]);
/// let mut it = sq.begin();
/// it.advance(3);
/// assert_eq!(*it, 9);
/// assert_eq!(it.distance_to(&sq.end()), 5);
/// ```
pub trait Indexed {
    /// Type of the stored elements.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the `pos`-th element.
    ///
    /// # Panics
    ///
    /// Implementations panic if `pos` is out of bounds.
    fn at(&self, pos: usize) -> &Self::Item;

    /// Checks if the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a read-only cursor at the first element.
    fn begin(&self) -> GenericIter<'_, Self, Const> {
        GenericIter::new(self, 0)
    }

    /// Creates a read-only cursor one past the last element.
    fn end(&self) -> GenericIter<'_, Self, Const> {
        // NOTE: containers never hold more than isize::MAX elements.
        GenericIter::new(self, self.len() as isize)
    }

    /// Creates an iterator over all the elements, walking a cursor from
    /// [`begin`](Indexed::begin) to [`end`](Indexed::end).
    fn cursors(&self) -> generic_iter::Iter<'_, Self> {
        self.begin().range(self.end())
    }
}

/// An interface for containers whose elements can be modified in place by position.
pub trait IndexedMut: Indexed {
    /// Returns the `pos`-th element mutably.
    ///
    /// # Panics
    ///
    /// Implementations panic if `pos` is out of bounds.
    fn at_mut(&mut self, pos: usize) -> &mut Self::Item;

    /// Creates a mutable cursor at the first element.
    fn begin_mut(&mut self) -> GenericIter<'_, Self, Mut> {
        GenericIter::new_mut(self, 0)
    }

    /// Creates a mutable cursor one past the last element.
    fn end_mut(&mut self) -> GenericIter<'_, Self, Mut> {
        let len = self.len() as isize;
        GenericIter::new_mut(self, len)
    }
}
