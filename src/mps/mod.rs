//! Fixed-format MPS output.
//!
//! Models are written with [`SparseModel::write_mps`] or
//! [`SparseModel::write_mps_to`], configured by [`MpsSettings`].  Bounds
//! whose magnitude reaches the process-wide infinity threshold (see
//! [`set_infinity`]) are written as infinite.
//!
//! [`SparseModel::write_mps`]: crate::model::SparseModel::write_mps
//! [`SparseModel::write_mps_to`]: crate::model::SparseModel::write_mps_to

pub(crate) const _INFINITY_DEFAULT: f64 = 1e30;

mod error_types;
mod format;
mod settings;
mod writer;

pub use crate::utils::infbounds::*;
pub use error_types::*;
pub use settings::*;
