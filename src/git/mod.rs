//! Working tree diff collection.

pub mod diff;

pub use diff::{DiffSource, WorkingTree};
