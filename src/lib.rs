//! __sparse-model__ is an incremental builder for sparse linear and
//! quadratic programs.  It stages a problem of the form
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T P x + c^T x\\\\\[2ex\]
//!  \text{subject to} & l_r \le Ax \le u_r \\\\\[1ex\]
//!         & l_c \le x \le u_c, \quad x_j \in \mathbb{Z} \text{ for } j \in I
//!  \end{array}
//! $$
//!
//! one row, column or element at a time, and hands it on either as CSC
//! matrices and plain arrays or as a fixed-format MPS file.
//!
//! ## Features
//!
//! * __Dual indexing__: every element of $A$ is reachable by (row, column)
//!   lookup and by walking its row or its column, and all of these stay
//!   consistent under insertion, update, deletion and compaction.
//!
//! * __Implicit growth__: setting an attribute or element beyond the current
//!   size grows the model, filling the gap with default rows and columns.
//!
//! * __Symbolic values__: elements, bounds, objective coefficients and
//!   integrality may be given as strings whose numeric values are
//!   associated later.
//!
//! * __Output__: CSC export for loading into a solver, MPS files, and JSON
//!   snapshots (with the `serde` feature).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod model;
pub mod mps;
pub(crate) mod utils;
