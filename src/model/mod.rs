//! Incremental sparse model builder.
//!
//! A [`SparseModel`] stages a linear or quadratic program one row, column
//! or element at a time.  Its matrix elements live in a single growable
//! arena indexed three ways: by a (row, column) hash, and by a row-wise and a
//! column-wise doubly linked list threaded through the arena.  All three
//! indices are kept consistent under insertion, in-place update, deletion
//! and compaction, so a model can be read back element by element, walked
//! by row or column, exported to CSC form or written as an MPS file
//! at any point during construction.
//!
//! Values of elements, bounds, objective coefficients and integrality may
//! be symbolic: a string standing for a number that is associated later
//! with [`associate_element`](SparseModel::associate_element).

mod attributes;
mod core;
mod elements;
mod export;
mod links;
mod names;
mod pack;
mod strings;
mod traversal;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod json;
        pub use json::*;
    }
}

pub use self::attributes::ModelValue;
pub use self::core::{BuildMode, ObjectiveSense, SparseModel};
pub use self::export::{LoadPath, ProblemData};
pub use self::traversal::{Link, LinkOrigin};
