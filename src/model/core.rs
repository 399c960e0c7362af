use super::attributes::{AttributeStore, ModelValue};
use super::elements::ElementStore;
use super::strings::AssociationTable;
use crate::algebra::{CscMatrix, FloatT};
use std::cell::{Cell, OnceCell};
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Build mode of a [`SparseModel`].
///
/// The mode records how the model has been assembled so far and determines
/// the most direct way to hand it to a solving engine (see
/// [`LoadPath`](crate::model::LoadPath)).  Transitions are monotonic:
///
/// - `Unset` becomes `Rows` on the first [`add_row`](SparseModel::add_row)
///   and `Columns` on the first [`add_column`](SparseModel::add_column).
/// - `Rows` or `Columns` become `Linked` on the first operation that needs
///   the other orientation or addresses an element directly by
///   (row, column).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuildMode {
    /// nothing has been inserted yet
    #[default]
    Unset,
    /// built by whole rows
    Rows,
    /// built by whole columns
    Columns,
    /// both orientations in use
    Linked,
}

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectiveSense {
    /// minimize the objective
    #[default]
    Minimize,
    /// maximize the objective
    Maximize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    Row,
    Column,
}

/// Incremental sparse model builder.
///
/// Holds row and column attributes (bounds, names, objective, integrality),
/// a sparse linear constraint matrix and a sparse quadratic objective, and
/// keeps a hash index and row-wise and column-wise linked lists over the
/// matrix elements consistent under insertion, in-place update, deletion
/// and compaction.
///
/// __Example usage__ :
///
/// ```no_run
/// use sparse_model::model::*;
///
/// let mut model = SparseModel::<f64>::new();
///
/// // x0 + 5 x2 <= 10
/// model.add_row(&[0, 2], &[1.0, 5.0], f64::NEG_INFINITY, 10.0, "cap");
/// // 3 x1 >= 1
/// model.add_row(&[1], &[3.0], 1.0, f64::INFINITY, "");
///
/// assert_eq!(model.get_element(0, 2), 5.0);
/// assert_eq!(model.number_rows(), 2);
/// assert_eq!(model.number_columns(), 3);
/// assert_eq!(model.row("cap"), Some(0));
/// ```
///
/// Indices beyond the current row or column counts are never an error.
/// Getters return defaults for them, and setters silently grow the model,
/// filling intermediate rows with bounds `[-∞, +∞]` and intermediate
/// columns with bounds `[0, +∞]`, zero objective and no integrality.
///
/// A model is single-owner state.  It is `Send` but not `Sync`; callers
/// that need to share one should place it behind a single lock.

#[derive(Debug, Clone)]
pub struct SparseModel<T: FloatT = f64> {
    pub(crate) number_rows: usize,
    pub(crate) number_columns: usize,
    pub(crate) sense: ObjectiveSense,
    pub(crate) attributes: AttributeStore<T>,
    pub(crate) strings: AssociationTable<T>,
    pub(crate) elements: ElementStore<ModelValue<T>>,
    pub(crate) quadratic: ElementStore<T>,
    mode: Cell<BuildMode>,
    pub(crate) matrix_cache: OnceCell<CscMatrix<T>>,
}

impl<T> Default for SparseModel<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseModel<T>
where
    T: FloatT,
{
    /// Create an empty model.
    pub fn new() -> Self {
        Self::with_capacity(0, 0, 0)
    }

    /// Create an empty model with storage reserved for the given
    /// numbers of rows, columns and elements.
    pub fn with_capacity(rows: usize, columns: usize, elements: usize) -> Self {
        Self {
            number_rows: 0,
            number_columns: 0,
            sense: ObjectiveSense::default(),
            attributes: AttributeStore::with_capacity(rows, columns),
            strings: AssociationTable::default(),
            elements: ElementStore::with_capacity(elements),
            quadratic: ElementStore::default(),
            mode: Cell::new(BuildMode::Unset),
            matrix_cache: OnceCell::new(),
        }
    }

    /// number of rows, including any implied by element or attribute setters
    pub fn number_rows(&self) -> usize {
        self.number_rows
    }

    /// number of columns, including any implied by element or attribute setters
    pub fn number_columns(&self) -> usize {
        self.number_columns
    }

    /// number of linear elements
    pub fn number_elements(&self) -> usize {
        self.elements.len()
    }

    /// number of quadratic objective elements
    pub fn number_quadratic_elements(&self) -> usize {
        self.quadratic.len()
    }

    /// current build mode
    pub fn mode(&self) -> BuildMode {
        self.mode.get()
    }

    /// direction of optimization
    pub fn optimization_direction(&self) -> ObjectiveSense {
        self.sense
    }

    /// set the direction of optimization
    pub fn set_optimization_direction(&mut self, sense: ObjectiveSense) {
        self.sense = sense;
    }

    /// Append a row with the given elements and bounds.  An empty `name`
    /// leaves the row unnamed.  Column indices beyond the current column
    /// count grow the model.  A column repeated within `columns` keeps
    /// the last value given for it.  Returns the index of the new row.
    ///
    /// # Panics
    /// Panics if `columns` and `elements` have different lengths.
    pub fn add_row(
        &mut self,
        columns: &[usize],
        elements: &[T],
        lower: T,
        upper: T,
        name: &str,
    ) -> usize {
        assert_eq!(columns.len(), elements.len());
        self.note_insert(Orientation::Row);

        let row = self.number_rows;
        self.grow_rows(row + 1);
        self.attributes.row_mut(row).set_bounds(lower, upper);
        self.attributes.set_row_name(row, name);

        for (&col, &value) in zip(columns, elements) {
            self.grow_columns(col + 1);
            self.elements.upsert(row, col, ModelValue::Number(value));
        }
        self.invalidate();
        row
    }

    /// Append a column with the given elements, bounds, objective
    /// coefficient and integrality.  An empty `name` leaves the column
    /// unnamed.  Row indices beyond the current row count grow the
    /// model.  Returns the index of the new column.
    ///
    /// # Panics
    /// Panics if `rows` and `elements` have different lengths.
    #[allow(clippy::too_many_arguments)]
    pub fn add_column(
        &mut self,
        rows: &[usize],
        elements: &[T],
        lower: T,
        upper: T,
        objective: T,
        name: &str,
        is_integer: bool,
    ) -> usize {
        assert_eq!(rows.len(), elements.len());
        self.note_insert(Orientation::Column);

        let col = self.number_columns;
        self.grow_columns(col + 1);
        {
            let info = self.attributes.column_mut(col);
            info.set_bounds(lower, upper);
            info.objective = ModelValue::Number(objective);
            info.integer = ModelValue::Number(is_integer);
        }
        self.attributes.set_column_name(col, name);

        for (&row, &value) in zip(rows, elements) {
            self.grow_rows(row + 1);
            self.elements.upsert(row, col, ModelValue::Number(value));
        }
        self.invalidate();
        col
    }

    /// Set the element at (row, column), growing the model if needed.
    /// An existing element is overwritten in place.
    pub fn set_element(&mut self, row: usize, column: usize, value: T) {
        self.put_element(row, column, ModelValue::Number(value));
    }

    /// Set the element at (row, column) to a symbolic value.  The string is
    /// entered in the association table with an unset placeholder if it is
    /// not already there.  Returns the string's id, or `None` (leaving the
    /// model unchanged) if the string cannot be entered.
    pub fn set_element_string(&mut self, row: usize, column: usize, value: &str) -> Option<usize> {
        let id = self.strings.intern(value)?;
        self.put_element(row, column, ModelValue::Symbol(id));
        Some(id)
    }

    /// Value of the element at (row, column), or zero if there is none.
    /// A symbolic element gives its associated placeholder value, or zero
    /// when no value has been associated with its string.
    pub fn get_element(&self, row: usize, column: usize) -> T {
        self.note_direct_access();
        self.elements
            .find(row, column)
            .and_then(|slot| self.elements.get(slot))
            .map_or(T::zero(), |t| self.resolve(t.value, T::zero()))
    }

    /// The string of a symbolic element at (row, column), if there is one.
    pub fn get_element_as_string(&self, row: usize, column: usize) -> Option<&str> {
        self.note_direct_access();
        let slot = self.elements.find(row, column)?;
        let id = self.elements.get(slot)?.value.symbol()?;
        self.strings.string(id)
    }

    /// Mutable access to a numeric element in place.
    ///
    /// Returns `None` if there is no element at (row, column) or if the
    /// element is symbolic.  The borrow ends before any further mutation
    /// of the model, so the handle can never outlive a relocation of the
    /// element storage.
    pub fn element_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.note_direct_access();
        self.invalidate();
        let slot = self.elements.find(row, column)?;
        match self.elements.value_mut(slot)? {
            ModelValue::Number(v) => Some(v),
            ModelValue::Symbol(_) => None,
        }
    }

    /// Associate a numeric placeholder value with a string, entering the
    /// string in the association table if needed.  Returns the string's
    /// id, or `None` if the table cannot accept the entry (the empty
    /// string is rejected).
    pub fn associate_element(&mut self, string: &str, value: T) -> Option<usize> {
        let id = self.strings.associate(string, value)?;
        self.invalidate();
        Some(id)
    }

    /// Set the quadratic objective element for columns (i, j), growing the
    /// column count if needed.  Entries are keyed by the ordered pair, so
    /// (i, j) and (j, i) are distinct.
    pub fn set_quadratic_element(&mut self, i: usize, j: usize, value: T) {
        self.grow_columns(i.max(j) + 1);
        self.quadratic.upsert(i, j, value);
    }

    /// Quadratic objective element for columns (i, j), or zero if there is none.
    pub fn get_quadratic_element(&self, i: usize, j: usize) -> T {
        self.quadratic
            .find(i, j)
            .and_then(|slot| self.quadratic.get(slot))
            .map_or(T::zero(), |t| t.value)
    }

    // ---------------
    // internal helpers
    // ---------------

    fn put_element(&mut self, row: usize, column: usize, value: ModelValue<T>) {
        if self.mode() != BuildMode::Linked {
            self.set_mode(BuildMode::Linked);
        }
        self.grow_rows(row + 1);
        self.grow_columns(column + 1);
        self.elements.upsert(row, column, value);
        self.invalidate();
    }

    // resolve a possibly symbolic value through the association table
    pub(crate) fn resolve(&self, value: ModelValue<T>, default: T) -> T {
        match value {
            ModelValue::Number(v) => v,
            ModelValue::Symbol(id) => self.strings.value(id).unwrap_or(default),
        }
    }

    pub(crate) fn resolve_flag(&self, value: ModelValue<bool>) -> bool {
        match value {
            ModelValue::Number(v) => v,
            ModelValue::Symbol(id) => self.strings.value(id).is_some_and(|v| v != T::zero()),
        }
    }

    pub(crate) fn grow_rows(&mut self, rows: usize) {
        if rows > self.number_rows {
            self.number_rows = rows;
            self.elements.ensure_majors(rows, self.number_columns);
            self.invalidate();
        }
    }

    pub(crate) fn grow_columns(&mut self, columns: usize) {
        if columns > self.number_columns {
            self.number_columns = columns;
            self.elements.ensure_majors(self.number_rows, columns);
            self.quadratic.ensure_majors(columns, columns);
            self.invalidate();
        }
    }

    // drop the cached CSC export after any change it depends on
    pub(crate) fn invalidate(&mut self) {
        self.matrix_cache.take();
    }

    pub(crate) fn set_mode(&self, mode: BuildMode) {
        log::debug!("model build mode {:?} -> {:?}", self.mode.get(), mode);
        self.mode.set(mode);
    }

    pub(crate) fn note_insert(&self, orientation: Orientation) {
        let next = match (self.mode(), orientation) {
            (BuildMode::Unset, Orientation::Row) => BuildMode::Rows,
            (BuildMode::Unset, Orientation::Column) => BuildMode::Columns,
            (BuildMode::Columns, Orientation::Row) => BuildMode::Linked,
            (BuildMode::Rows, Orientation::Column) => BuildMode::Linked,
            (mode, _) => mode,
        };
        if next != self.mode() {
            self.set_mode(next);
        }
    }

    pub(crate) fn note_access(&self, orientation: Orientation) {
        match (self.mode(), orientation) {
            (BuildMode::Columns, Orientation::Row) | (BuildMode::Rows, Orientation::Column) => {
                self.set_mode(BuildMode::Linked)
            }
            _ => (),
        }
    }

    pub(crate) fn note_direct_access(&self) {
        if matches!(self.mode(), BuildMode::Rows | BuildMode::Columns) {
            self.set_mode(BuildMode::Linked);
        }
    }

    pub(crate) fn restore_mode(&mut self, mode: BuildMode) {
        self.mode.set(mode);
    }
}
