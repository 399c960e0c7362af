#![allow(non_snake_case)]

use super::core::{BuildMode, ObjectiveSense, SparseModel};
use crate::algebra::{CscMatrix, FloatT};

/// The most direct way to hand a model to a solving engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPath {
    /// load row by row
    Rows,
    /// load column by column
    Columns,
    /// load from the assembled matrices
    Generic,
}

/// A model flattened into plain arrays and CSC matrices.
///
/// `A` is the `m × n` constraint matrix and `P` holds the quadratic
/// objective terms as an `n × n` matrix with entry (i, j) at row i and
/// column j.  All values are resolved, so symbolic entries appear as their
/// placeholder values.
#[derive(Debug, Clone)]
pub struct ProblemData<T = f64> {
    pub A: CscMatrix<T>,
    pub P: CscMatrix<T>,
    pub objective: Vec<T>,
    pub row_lower: Vec<T>,
    pub row_upper: Vec<T>,
    pub column_lower: Vec<T>,
    pub column_upper: Vec<T>,
    pub integer: Vec<bool>,
    pub row_names: Vec<String>,
    pub column_names: Vec<String>,
    pub sense: ObjectiveSense,
}

impl<T> SparseModel<T>
where
    T: FloatT,
{
    /// Loading path suggested by how the model was built.
    pub fn load_path(&self) -> LoadPath {
        if self.quadratic.len() > 0 {
            return LoadPath::Generic;
        }
        match self.mode() {
            BuildMode::Rows => LoadPath::Rows,
            BuildMode::Columns => LoadPath::Columns,
            BuildMode::Unset | BuildMode::Linked => LoadPath::Generic,
        }
    }

    /// The constraint matrix in CSC form.
    ///
    /// The matrix is assembled on first access and cached until the
    /// next mutation of the model.
    pub fn matrix(&self) -> &CscMatrix<T> {
        self.matrix_cache.get_or_init(|| {
            log::trace!(
                "assembling {} x {} constraint matrix",
                self.number_rows,
                self.number_columns
            );
            let columns = (0..self.number_columns)
                .map(|col| {
                    self.elements
                        .columns()
                        .iter(col)
                        .filter_map(|slot| self.elements.get(slot))
                        .map(|t| (t.row, self.resolve(t.value, T::zero())))
                        .collect::<Vec<_>>()
                })
                .collect();
            CscMatrix::from_columns(self.number_rows, self.number_columns, columns)
        })
    }

    /// The quadratic objective terms as an `n × n` CSC matrix.
    pub fn quadratic_matrix(&self) -> CscMatrix<T> {
        let n = self.number_columns;
        let columns = (0..n)
            .map(|j| {
                self.quadratic
                    .columns()
                    .iter(j)
                    .filter_map(|slot| self.quadratic.get(slot))
                    .map(|t| (t.row, t.value))
                    .collect::<Vec<_>>()
            })
            .collect();
        CscMatrix::from_columns(n, n, columns)
    }

    /// Flatten the model into plain arrays and matrices.
    pub fn to_problem(&self) -> ProblemData<T> {
        let (m, n) = (self.number_rows, self.number_columns);
        ProblemData {
            A: self.matrix().clone(),
            P: self.quadratic_matrix(),
            objective: (0..n).map(|c| self.column_objective(c)).collect(),
            row_lower: (0..m).map(|r| self.row_lower(r)).collect(),
            row_upper: (0..m).map(|r| self.row_upper(r)).collect(),
            column_lower: (0..n).map(|c| self.column_lower(c)).collect(),
            column_upper: (0..n).map(|c| self.column_upper(c)).collect(),
            integer: (0..n).map(|c| self.column_is_integer(c)).collect(),
            row_names: (0..m).map(|r| self.row_name(r).to_string()).collect(),
            column_names: (0..n).map(|c| self.column_name(c).to_string()).collect(),
            sense: self.sense,
        }
    }
}
