//! Capabilities of the standard containers.
use std::collections::VecDeque;

use crate::{Indexed, IndexedMut};

impl<T> Indexed for [T] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T> IndexedMut for [T] {
    #[inline(always)]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T, const N: usize> IndexedMut for [T; N] {
    #[inline(always)]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }
}

impl<T> Indexed for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T> IndexedMut for Vec<T> {
    #[inline(always)]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }
}

impl<T> Indexed for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T> IndexedMut for VecDeque<T> {
    #[inline(always)]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }
}
