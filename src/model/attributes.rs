use super::core::SparseModel;
use super::names::NameIndex;
use crate::algebra::FloatT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either a number or a reference to a string in the
/// model's association table.
///
/// Symbolic values stand in for numbers that are to be decided later.  When
/// a numeric value is needed, a symbol is replaced by the placeholder value
/// associated with its string (see
/// [`associate_element`](SparseModel::associate_element)).

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModelValue<V> {
    /// an ordinary numeric value
    Number(V),
    /// id of a string in the association table
    Symbol(usize),
}

impl<V: Copy> ModelValue<V> {
    /// true if the value is a string reference
    pub fn is_symbol(&self) -> bool {
        matches!(self, ModelValue::Symbol(_))
    }

    /// the association table id, if symbolic
    pub fn symbol(&self) -> Option<usize> {
        match self {
            ModelValue::Symbol(id) => Some(*id),
            ModelValue::Number(_) => None,
        }
    }

    /// the numeric value, if not symbolic
    pub fn number(&self) -> Option<V> {
        match self {
            ModelValue::Number(v) => Some(*v),
            ModelValue::Symbol(_) => None,
        }
    }
}

// ---------------
// per row / column attribute records
// ---------------

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct RowInfo<T> {
    pub lower: ModelValue<T>,
    pub upper: ModelValue<T>,
    pub name: String,
}

impl<T: FloatT> Default for RowInfo<T> {
    fn default() -> Self {
        Self {
            lower: ModelValue::Number(T::neg_infinity()),
            upper: ModelValue::Number(T::infinity()),
            name: String::new(),
        }
    }
}

impl<T: FloatT> RowInfo<T> {
    pub(crate) fn set_bounds(&mut self, lower: T, upper: T) {
        self.lower = ModelValue::Number(lower);
        self.upper = ModelValue::Number(upper);
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct ColumnInfo<T> {
    pub lower: ModelValue<T>,
    pub upper: ModelValue<T>,
    pub objective: ModelValue<T>,
    pub integer: ModelValue<bool>,
    pub name: String,
}

impl<T: FloatT> Default for ColumnInfo<T> {
    fn default() -> Self {
        Self {
            lower: ModelValue::Number(T::zero()),
            upper: ModelValue::Number(T::infinity()),
            objective: ModelValue::Number(T::zero()),
            integer: ModelValue::Number(false),
            name: String::new(),
        }
    }
}

impl<T: FloatT> ColumnInfo<T> {
    pub(crate) fn set_bounds(&mut self, lower: T, upper: T) {
        self.lower = ModelValue::Number(lower);
        self.upper = ModelValue::Number(upper);
    }
}

/// Row and column attribute arrays with their name indices.
///
/// The arrays may be shorter than the model's row and column counts when
/// trailing rows or columns have only been implied by element insertion.
/// Entries past the end of an array have default attributes; `fill_rows`
/// and `fill_columns` materialize them.

#[derive(Debug, Clone, Default)]
pub(crate) struct AttributeStore<T> {
    pub rows: Vec<RowInfo<T>>,
    pub columns: Vec<ColumnInfo<T>>,
    row_names: NameIndex,
    column_names: NameIndex,
}

impl<T> AttributeStore<T>
where
    T: FloatT,
{
    pub(crate) fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            rows: Vec::with_capacity(rows),
            columns: Vec::with_capacity(columns),
            row_names: NameIndex::default(),
            column_names: NameIndex::default(),
        }
    }

    /// rebuild a store and its name indices from attribute arrays
    pub(crate) fn from_parts(rows: Vec<RowInfo<T>>, columns: Vec<ColumnInfo<T>>) -> Self {
        let mut store = Self {
            rows,
            columns,
            row_names: NameIndex::default(),
            column_names: NameIndex::default(),
        };
        store
            .row_names
            .rebuild(store.rows.iter().map(|r| r.name.as_str()));
        store
            .column_names
            .rebuild(store.columns.iter().map(|c| c.name.as_str()));
        store
    }

    pub(crate) fn row(&self, row: usize) -> Option<&RowInfo<T>> {
        self.rows.get(row)
    }

    pub(crate) fn column(&self, col: usize) -> Option<&ColumnInfo<T>> {
        self.columns.get(col)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut RowInfo<T> {
        self.fill_rows(row + 1);
        &mut self.rows[row]
    }

    pub(crate) fn column_mut(&mut self, col: usize) -> &mut ColumnInfo<T> {
        self.fill_columns(col + 1);
        &mut self.columns[col]
    }

    pub(crate) fn fill_rows(&mut self, n: usize) {
        if n > self.rows.len() {
            self.rows.resize_with(n, RowInfo::default);
        }
    }

    pub(crate) fn fill_columns(&mut self, n: usize) {
        if n > self.columns.len() {
            self.columns.resize_with(n, ColumnInfo::default);
        }
    }

    pub(crate) fn find_row(&self, name: &str) -> Option<usize> {
        self.row_names.find(name)
    }

    pub(crate) fn find_column(&self, name: &str) -> Option<usize> {
        self.column_names.find(name)
    }

    pub(crate) fn set_row_name(&mut self, row: usize, name: &str) {
        let info = self.row_mut(row);
        let old = std::mem::replace(&mut info.name, name.to_string());
        self.row_names
            .remove(&old, row, self.rows.iter().map(|r| r.name.as_str()));
        self.row_names.insert(name, row);
    }

    pub(crate) fn set_column_name(&mut self, col: usize, name: &str) {
        let info = self.column_mut(col);
        let old = std::mem::replace(&mut info.name, name.to_string());
        self.column_names
            .remove(&old, col, self.columns.iter().map(|c| c.name.as_str()));
        self.column_names.insert(name, col);
    }

    /// restore default attributes for a row, dropping its name
    pub(crate) fn clear_row(&mut self, row: usize) {
        if let Some(info) = self.rows.get_mut(row) {
            let old = std::mem::take(info);
            self.row_names
                .remove(&old.name, row, self.rows.iter().map(|r| r.name.as_str()));
        }
    }

    /// restore default attributes for a column, dropping its name
    pub(crate) fn clear_column(&mut self, col: usize) {
        if let Some(info) = self.columns.get_mut(col) {
            let old = std::mem::take(info);
            self.column_names
                .remove(&old.name, col, self.columns.iter().map(|c| c.name.as_str()));
        }
    }

    pub(crate) fn truncate_rows(&mut self, n: usize) {
        if n >= self.rows.len() {
            return;
        }
        let tail = self.rows.split_off(n);
        for (i, info) in tail.iter().enumerate() {
            let names = self.rows.iter().map(|r| r.name.as_str());
            self.row_names.remove(&info.name, n + i, names);
        }
    }

    pub(crate) fn truncate_columns(&mut self, n: usize) {
        if n >= self.columns.len() {
            return;
        }
        let tail = self.columns.split_off(n);
        for (i, info) in tail.iter().enumerate() {
            let names = self.columns.iter().map(|c| c.name.as_str());
            self.column_names.remove(&info.name, n + i, names);
        }
    }

    /// keep only rows flagged in `keep`, preserving order
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.rows.retain(|_| *flags.next().unwrap_or(&true));
        self.row_names
            .rebuild(self.rows.iter().map(|r| r.name.as_str()));
    }

    /// keep only columns flagged in `keep`, preserving order
    pub(crate) fn retain_columns(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.columns.retain(|_| *flags.next().unwrap_or(&true));
        self.column_names
            .rebuild(self.columns.iter().map(|c| c.name.as_str()));
    }
}

// ---------------
// attribute getters and setters on the model
// ---------------

macro_rules! symbolic_setter {
    ($(#[$doc:meta])* $fn:ident, $grow:ident, $info:ident, $field:ident) => {
        $(#[$doc])*
        pub fn $fn(&mut self, index: usize, value: &str) -> Option<usize> {
            let id = self.strings.intern(value)?;
            self.$grow(index + 1);
            self.attributes.$info(index).$field = ModelValue::Symbol(id);
            Some(id)
        }
    };
}

macro_rules! symbolic_getter {
    ($(#[$doc:meta])* $fn:ident, $info:ident, $field:ident) => {
        $(#[$doc])*
        pub fn $fn(&self, index: usize) -> Option<&str> {
            let id = self.attributes.$info(index)?.$field.symbol()?;
            self.strings.string(id)
        }
    };
}

impl<T> SparseModel<T>
where
    T: FloatT,
{
    /// Set the lower bound of a row.  If the row does not exist then all
    /// rows up to this one are created with default values and no elements.
    pub fn set_row_lower(&mut self, row: usize, lower: T) {
        self.grow_rows(row + 1);
        self.attributes.row_mut(row).lower = ModelValue::Number(lower);
    }

    /// Set the upper bound of a row, creating rows as needed.
    pub fn set_row_upper(&mut self, row: usize, upper: T) {
        self.grow_rows(row + 1);
        self.attributes.row_mut(row).upper = ModelValue::Number(upper);
    }

    /// Set both bounds of a row, creating rows as needed.
    pub fn set_row_bounds(&mut self, row: usize, lower: T, upper: T) {
        self.grow_rows(row + 1);
        self.attributes.row_mut(row).set_bounds(lower, upper);
    }

    /// Set the name of a row, creating rows as needed.  An empty
    /// name removes any existing name.
    pub fn set_row_name(&mut self, row: usize, name: &str) {
        self.grow_rows(row + 1);
        self.attributes.set_row_name(row, name);
    }

    /// Set the lower bound of a column, creating columns as needed.
    pub fn set_column_lower(&mut self, col: usize, lower: T) {
        self.grow_columns(col + 1);
        self.attributes.column_mut(col).lower = ModelValue::Number(lower);
    }

    /// Set the upper bound of a column, creating columns as needed.
    pub fn set_column_upper(&mut self, col: usize, upper: T) {
        self.grow_columns(col + 1);
        self.attributes.column_mut(col).upper = ModelValue::Number(upper);
    }

    /// Set both bounds of a column, creating columns as needed.
    pub fn set_column_bounds(&mut self, col: usize, lower: T, upper: T) {
        self.grow_columns(col + 1);
        self.attributes.column_mut(col).set_bounds(lower, upper);
    }

    /// Set the objective coefficient of a column, creating columns as needed.
    pub fn set_column_objective(&mut self, col: usize, objective: T) {
        self.grow_columns(col + 1);
        self.attributes.column_mut(col).objective = ModelValue::Number(objective);
    }

    /// Set the name of a column, creating columns as needed.  An empty
    /// name removes any existing name.
    pub fn set_column_name(&mut self, col: usize, name: &str) {
        self.grow_columns(col + 1);
        self.attributes.set_column_name(col, name);
    }

    /// Mark a column as integer or continuous, creating columns as needed.
    pub fn set_column_is_integer(&mut self, col: usize, is_integer: bool) {
        self.grow_columns(col + 1);
        self.attributes.column_mut(col).integer = ModelValue::Number(is_integer);
    }

    symbolic_setter!(
        /// Set the lower bound of a row to a symbolic value.  Returns the
        /// string's id, or `None` if the string cannot be entered.
        set_row_lower_string, grow_rows, row_mut, lower
    );
    symbolic_setter!(
        /// Set the upper bound of a row to a symbolic value.
        set_row_upper_string, grow_rows, row_mut, upper
    );
    symbolic_setter!(
        /// Set the lower bound of a column to a symbolic value.
        set_column_lower_string, grow_columns, column_mut, lower
    );
    symbolic_setter!(
        /// Set the upper bound of a column to a symbolic value.
        set_column_upper_string, grow_columns, column_mut, upper
    );
    symbolic_setter!(
        /// Set the objective coefficient of a column to a symbolic value.
        set_column_objective_string, grow_columns, column_mut, objective
    );
    symbolic_setter!(
        /// Set the integrality of a column to a symbolic value.  The column
        /// is integer when the associated placeholder is nonzero.
        set_column_is_integer_string, grow_columns, column_mut, integer
    );

    /// Lower bound of a row (-∞ if the row does not exist).
    pub fn row_lower(&self, row: usize) -> T {
        let default = T::neg_infinity();
        self.attributes
            .row(row)
            .map_or(default, |r| self.resolve(r.lower, default))
    }

    /// Upper bound of a row (+∞ if the row does not exist).
    pub fn row_upper(&self, row: usize) -> T {
        let default = T::infinity();
        self.attributes
            .row(row)
            .map_or(default, |r| self.resolve(r.upper, default))
    }

    /// Name of a row ("" if the row does not exist or is unnamed).
    pub fn row_name(&self, row: usize) -> &str {
        self.attributes.row(row).map_or("", |r| r.name.as_str())
    }

    /// Lower bound of a column (0 if the column does not exist).
    pub fn column_lower(&self, col: usize) -> T {
        let default = T::zero();
        self.attributes
            .column(col)
            .map_or(default, |c| self.resolve(c.lower, default))
    }

    /// Upper bound of a column (+∞ if the column does not exist).
    pub fn column_upper(&self, col: usize) -> T {
        let default = T::infinity();
        self.attributes
            .column(col)
            .map_or(default, |c| self.resolve(c.upper, default))
    }

    /// Objective coefficient of a column (0 if the column does not exist).
    pub fn column_objective(&self, col: usize) -> T {
        let default = T::zero();
        self.attributes
            .column(col)
            .map_or(default, |c| self.resolve(c.objective, default))
    }

    /// Name of a column ("" if the column does not exist or is unnamed).
    pub fn column_name(&self, col: usize) -> &str {
        self.attributes.column(col).map_or("", |c| c.name.as_str())
    }

    /// Integrality of a column (false if the column does not exist).
    pub fn column_is_integer(&self, col: usize) -> bool {
        self.attributes
            .column(col)
            .is_some_and(|c| self.resolve_flag(c.integer))
    }

    symbolic_getter!(
        /// The string of a symbolic row lower bound, if there is one.
        row_lower_as_string, row, lower
    );
    symbolic_getter!(
        /// The string of a symbolic row upper bound, if there is one.
        row_upper_as_string, row, upper
    );
    symbolic_getter!(
        /// The string of a symbolic column lower bound, if there is one.
        column_lower_as_string, column, lower
    );
    symbolic_getter!(
        /// The string of a symbolic column upper bound, if there is one.
        column_upper_as_string, column, upper
    );
    symbolic_getter!(
        /// The string of a symbolic objective coefficient, if there is one.
        column_objective_as_string, column, objective
    );
    symbolic_getter!(
        /// The string of a symbolic integrality flag, if there is one.
        column_is_integer_as_string, column, integer
    );

    /// Row index from row name (`None` if no row has that name).
    pub fn row(&self, name: &str) -> Option<usize> {
        self.attributes.find_row(name)
    }

    /// Column index from column name (`None` if no column has that name).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.attributes.find_column(name)
    }

    /// Materialize default attributes for every row implied so far.
    pub fn fill_rows(&mut self) {
        self.attributes.fill_rows(self.number_rows);
    }

    /// Materialize default attributes for every column implied so far.
    pub fn fill_columns(&mut self) {
        self.attributes.fill_columns(self.number_columns);
    }
}
