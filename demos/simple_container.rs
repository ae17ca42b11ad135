//! Example to demonstrate how a container obtains cursors from `Indexed`.
//!
//! Run with `RUST_LOG=debug` to see the index-set events.

use genit::index_set::{IndexSet, LocalIndex};
use genit::{Const, GenericIter, Indexed, IndexedMut};
use tracing_subscriber::EnvFilter;

/// Fixed-size container providing nothing but positional access.
struct SimpleContainer<T> {
    values: [T; 100],
}

impl SimpleContainer<i32> {
    fn new() -> Self {
        let mut values = [0; 100];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as i32;
        }
        Self { values }
    }
}

impl<T> Indexed for SimpleContainer<T> {
    type Item = T;

    fn len(&self) -> usize {
        100
    }

    fn at(&self, pos: usize) -> &T {
        &self.values[pos]
    }
}

impl<T> IndexedMut for SimpleContainer<T> {
    fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self.values[pos]
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sc = SimpleContainer::new();

    // Negate every odd element through a mutable cursor.
    let mut it = sc.begin_mut();
    it.increment();
    while it.position() < 100 {
        *it = -*it;
        it.advance(2);
    }

    // The mutable cursor lowers into a read-only one.
    let ro: GenericIter<'_, SimpleContainer<i32>, Const> = it.into();
    println!("lowered cursor at {}", ro.position());

    let (begin, end) = (sc.begin(), sc.end());
    println!("distance: {}", begin.distance_to(&end));
    println!("third element: {}", begin[2]);
    println!("sum: {}", sc.cursors().sum::<i32>());

    let mut set = IndexSet::new();
    set.begin_resize()?;
    for (i, x) in sc.cursors().enumerate().filter(|(_, x)| **x < 0).take(5) {
        set.add_with_local(*x, LocalIndex::new(i as u32, i % 4 == 1))?;
    }
    set.end_resize()?;
    set.renumber_local()?;
    for pair in set.iter() {
        println!("{pair}");
    }
    Ok(())
}
