//! Pairs of a global id and a local index.
use std::cmp::Ordering;
use std::fmt;

/// States of a local index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocalIndexState {
    /// The index is in use.
    #[default]
    Valid,
    /// The index was removed and disappears at the end of the current resize.
    Deleted,
}

/// An index present on the local process.
///
/// A default index is `0`, [`Valid`](LocalIndexState::Valid), and not public.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalIndex {
    local: u32,
    state: LocalIndexState,
    public: bool,
}

impl LocalIndex {
    /// Creates a new valid local index.
    ///
    /// # Arguments
    ///
    ///  - `local`: Local index number.
    ///  - `public`: Whether the index is known to other processes.
    pub const fn new(local: u32, public: bool) -> Self {
        Self {
            local,
            state: LocalIndexState::Valid,
            public,
        }
    }

    /// Gets the local index number.
    #[inline(always)]
    pub const fn local(&self) -> u32 {
        self.local
    }

    /// Sets the local index number.
    #[inline(always)]
    pub fn set_local(&mut self, local: u32) {
        self.local = local;
    }

    /// Gets the state.
    #[inline(always)]
    pub const fn state(&self) -> LocalIndexState {
        self.state
    }

    /// Sets the state.
    #[inline(always)]
    pub fn set_state(&mut self, state: LocalIndexState) {
        self.state = state;
    }

    /// Checks if the index is known to other processes.
    #[inline(always)]
    pub const fn is_public(&self) -> bool {
        self.public
    }
}

impl From<LocalIndex> for u32 {
    fn from(index: LocalIndex) -> Self {
        index.local
    }
}

impl fmt::Display for LocalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local)
    }
}

/// A pair consisting of a global id and a local index.
///
/// Pairs are compared by their global ids only.
///
/// # Examples
///
/// ```
/// use genit::index_set::{IndexPair, LocalIndex};
///
/// let a = IndexPair::new(7u64, LocalIndex::new(0, true));
/// let b = IndexPair::new(7u64, LocalIndex::new(3, false));
/// assert_eq!(a, b);
/// assert!(a < IndexPair::from_global(9));
/// assert_eq!(a.to_string(), "{global=7, local=0}");
/// ```
#[derive(Clone, Debug)]
pub struct IndexPair<G> {
    global: G,
    local: LocalIndex,
}

impl<G> IndexPair<G> {
    /// Creates a new pair.
    pub const fn new(global: G, local: LocalIndex) -> Self {
        Self { global, local }
    }

    /// Creates a new pair with a default local index.
    pub fn from_global(global: G) -> Self {
        Self::new(global, LocalIndex::default())
    }

    /// Gets the global id.
    #[inline(always)]
    pub const fn global(&self) -> &G {
        &self.global
    }

    /// Gets the local index.
    #[inline(always)]
    pub const fn local(&self) -> &LocalIndex {
        &self.local
    }

    /// Gets the local index mutably.
    #[inline(always)]
    pub fn local_mut(&mut self) -> &mut LocalIndex {
        &mut self.local
    }

    /// Sets the local index number.
    #[inline(always)]
    pub fn set_local(&mut self, local: u32) {
        self.local.set_local(local);
    }
}

impl<G: PartialEq> PartialEq for IndexPair<G> {
    fn eq(&self, other: &Self) -> bool {
        self.global == other.global
    }
}

impl<G: Eq> Eq for IndexPair<G> {}

impl<G: PartialOrd> PartialOrd for IndexPair<G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.global.partial_cmp(&other.global)
    }
}

impl<G: Ord> Ord for IndexPair<G> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.global.cmp(&other.global)
    }
}

impl<G: fmt::Display> fmt::Display for IndexPair<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{global={}, local={}}}", self.global, self.local)
    }
}
