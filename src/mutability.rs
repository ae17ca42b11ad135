//! Markers tracking whether a cursor reads or writes its container.
//!
//! Contexts holding [`Mut`] may lower to [`Const`]; contexts holding [`Const`]
//! have no way to raise themselves to [`Mut`].

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Const {}
    impl Sealed for super::Mut {}
}

/// Borrow kind stored by a [`GenericIter`](crate::GenericIter).
///
/// This trait is sealed; [`Const`] and [`Mut`] are its only implementors.
pub trait Mutability: sealed::Sealed {
    /// Reference to a container `C` borrowed for `'a`.
    type Ref<'a, C: ?Sized + 'a>;

    /// Reborrows a stored reference as a shared one.
    fn as_shared<'s, 'a: 's, C: ?Sized + 'a>(r: &'s Self::Ref<'a, C>) -> &'s C;
}

/// A read-only view, holding `&'a C`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Const;

impl Mutability for Const {
    type Ref<'a, C: ?Sized + 'a> = &'a C;

    #[inline(always)]
    fn as_shared<'s, 'a: 's, C: ?Sized + 'a>(r: &'s &'a C) -> &'s C {
        *r
    }
}

/// A mutable view, holding `&'a mut C`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mut;

impl Mutability for Mut {
    type Ref<'a, C: ?Sized + 'a> = &'a mut C;

    #[inline(always)]
    fn as_shared<'s, 'a: 's, C: ?Sized + 'a>(r: &'s &'a mut C) -> &'s C {
        &**r
    }
}
