//! The prelude for cursors.
//!
//! The purpose of this module is to alleviate imports of the container traits,
//! whose methods create cursors.
//!
//! ```
//! # #![allow(unused_imports)]
//! use genit::prelude::*;
//! ```
pub use crate::{Indexed, IndexedMut};
