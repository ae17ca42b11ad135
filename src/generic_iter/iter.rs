//! Iterator walking a pair of read-only cursors.
use std::fmt;
use std::iter::FusedIterator;

use crate::generic_iter::GenericIter;
use crate::mutability::Const;
use crate::Indexed;

/// Iterator for enumerating elements between two cursors,
/// created by [`GenericIter::range`] or [`Indexed::cursors`].
pub struct Iter<'a, C: ?Sized + 'a> {
    front: GenericIter<'a, C, Const>,
    back: GenericIter<'a, C, Const>,
}

impl<'a, C: ?Sized + 'a> Iter<'a, C> {
    /// Creates a new iterator over `[front, back)`.
    ///
    /// An empty range results if `back` precedes `front`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the cursors refer to different containers.
    pub fn new(front: GenericIter<'a, C, Const>, back: GenericIter<'a, C, Const>) -> Self {
        debug_assert!(
            front.same_container(&back),
            "range over cursors of different containers."
        );
        Self { front, back }
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.front.distance_to(&self.back)).unwrap_or(0)
    }
}

impl<'a, C: Indexed + ?Sized + 'a> Iterator for Iter<'a, C> {
    type Item = &'a C::Item;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            Some(self.front.post_increment().get())
        } else {
            None
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }

    #[inline(always)]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n < self.remaining() {
            self.front.advance(n as isize);
            self.next()
        } else {
            self.front = self.back;
            None
        }
    }
}

impl<'a, C: Indexed + ?Sized + 'a> DoubleEndedIterator for Iter<'a, C> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            Some(self.back.decrement().get())
        } else {
            None
        }
    }
}

impl<'a, C: Indexed + ?Sized + 'a> ExactSizeIterator for Iter<'a, C> {}

impl<'a, C: Indexed + ?Sized + 'a> FusedIterator for Iter<'a, C> {}

impl<'a, C: ?Sized + 'a> Clone for Iter<'a, C> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, C: ?Sized + 'a> fmt::Debug for Iter<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
