use super::attributes::ModelValue;
use super::core::{Orientation, SparseModel};
use super::elements::ElementStore;
use super::links::LinkedList;
use crate::algebra::FloatT;

/// The list a [`Link`] was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    /// a row list of the linear matrix
    Row,
    /// a column list of the linear matrix
    Column,
    /// a column list of the quadratic objective
    QuadraticColumn,
}

/// Cursor over one row or column list of a [`SparseModel`].
///
/// A cursor is a snapshot of one element: its arena position, its row and
/// column, and its value.  For a symbolic element `value` is the resolved
/// placeholder and `symbol` holds the string id.  For quadratic cursors
/// `row` holds the first column index of the term.
///
/// A cursor past either end of its list is the end sentinel: `position` is
/// `None`, the index of the list it was walking is kept in `row` (for
/// [`LinkOrigin::Row`]) or `column` (otherwise), and the other index is
/// `usize::MAX`.
///
/// Cursors are tagged with the arena generation at which they were issued
/// and become stale once the arena grows, loses an element or is
/// compacted.  See [`SparseModel::is_current`].

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link<T> {
    /// arena slot of the element, `None` for the end sentinel
    pub position: Option<usize>,
    /// row index (first column index for quadratic terms)
    pub row: usize,
    /// column index
    pub column: usize,
    /// element value
    pub value: T,
    /// string id of a symbolic element
    pub symbol: Option<usize>,
    origin: LinkOrigin,
    generation: u64,
}

impl<T> Link<T>
where
    T: FloatT,
{
    fn end(origin: LinkOrigin, major: usize, generation: u64) -> Self {
        let (row, column) = match origin {
            LinkOrigin::Row => (major, usize::MAX),
            LinkOrigin::Column | LinkOrigin::QuadraticColumn => (usize::MAX, major),
        };
        Self {
            position: None,
            row,
            column,
            value: T::zero(),
            symbol: None,
            origin,
            generation,
        }
    }

    /// true for the end sentinel
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// the list this cursor walks
    pub fn origin(&self) -> LinkOrigin {
        self.origin
    }

    fn major(&self) -> usize {
        match self.origin {
            LinkOrigin::Row => self.row,
            LinkOrigin::Column | LinkOrigin::QuadraticColumn => self.column,
        }
    }
}

#[derive(Clone, Copy)]
enum Step {
    First,
    Last,
    Next(usize),
    Previous(usize),
}

impl<T> SparseModel<T>
where
    T: FloatT,
{
    /// Cursor to the first element of a row, or the end sentinel if the
    /// row is empty or does not exist.
    pub fn first_in_row(&self, row: usize) -> Link<T> {
        self.note_access(Orientation::Row);
        self.walk(LinkOrigin::Row, row, Step::First)
    }

    /// Cursor to the last element of a row.
    pub fn last_in_row(&self, row: usize) -> Link<T> {
        self.note_access(Orientation::Row);
        self.walk(LinkOrigin::Row, row, Step::Last)
    }

    /// Cursor to the first element of a column.
    pub fn first_in_column(&self, column: usize) -> Link<T> {
        self.note_access(Orientation::Column);
        self.walk(LinkOrigin::Column, column, Step::First)
    }

    /// Cursor to the last element of a column.
    pub fn last_in_column(&self, column: usize) -> Link<T> {
        self.note_access(Orientation::Column);
        self.walk(LinkOrigin::Column, column, Step::Last)
    }

    /// Cursor to the first quadratic term (i, `column`).
    pub fn first_in_quadratic_column(&self, column: usize) -> Link<T> {
        self.walk(LinkOrigin::QuadraticColumn, column, Step::First)
    }

    /// Cursor to the last quadratic term (i, `column`).
    pub fn last_in_quadratic_column(&self, column: usize) -> Link<T> {
        self.walk(LinkOrigin::QuadraticColumn, column, Step::Last)
    }

    /// Advance a cursor along the list it was taken from.  Past the end,
    /// or from the end sentinel, gives the end sentinel.  A stale cursor
    /// also gives the end sentinel.
    pub fn next(&self, link: &Link<T>) -> Link<T> {
        self.step(link, Step::Next)
    }

    /// Step a cursor backwards along the list it was taken from.
    pub fn previous(&self, link: &Link<T>) -> Link<T> {
        self.step(link, Step::Previous)
    }

    /// true if no growth, removal or compaction has happened in the
    /// cursor's arena since it was issued
    pub fn is_current(&self, link: &Link<T>) -> bool {
        link.generation == self.generation_of(link.origin)
    }

    // ---------------
    // internal helpers
    // ---------------

    fn step(&self, link: &Link<T>, step: fn(usize) -> Step) -> Link<T> {
        let generation = self.generation_of(link.origin);
        let Some(position) = link.position else {
            return Link::end(link.origin, link.major(), generation);
        };
        if link.generation != generation {
            log::warn!(
                "stale {:?} cursor at ({}, {}) used after the element arena changed",
                link.origin,
                link.row,
                link.column
            );
            return Link::end(link.origin, link.major(), generation);
        }
        self.walk(link.origin, link.major(), step(position))
    }

    fn walk(&self, origin: LinkOrigin, major: usize, step: Step) -> Link<T> {
        let resolve_linear = |v: &ModelValue<T>| match *v {
            ModelValue::Number(v) => (v, None),
            ModelValue::Symbol(id) => (self.strings.value(id).unwrap_or_else(T::zero), Some(id)),
        };
        match origin {
            LinkOrigin::Row => {
                let list = self.elements.rows();
                walk_in(&self.elements, list, origin, major, step, resolve_linear)
            }
            LinkOrigin::Column => {
                let list = self.elements.columns();
                walk_in(&self.elements, list, origin, major, step, resolve_linear)
            }
            LinkOrigin::QuadraticColumn => {
                let list = self.quadratic.columns();
                walk_in(&self.quadratic, list, origin, major, step, |v| (*v, None))
            }
        }
    }

    fn generation_of(&self, origin: LinkOrigin) -> u64 {
        match origin {
            LinkOrigin::Row | LinkOrigin::Column => self.elements.generation(),
            LinkOrigin::QuadraticColumn => self.quadratic.generation(),
        }
    }
}

fn walk_in<T, V, F>(
    store: &ElementStore<V>,
    list: &LinkedList,
    origin: LinkOrigin,
    major: usize,
    step: Step,
    resolve: F,
) -> Link<T>
where
    T: FloatT,
    V: Copy,
    F: Fn(&V) -> (T, Option<usize>),
{
    let slot = match step {
        Step::First => list.first(major),
        Step::Last => list.last(major),
        Step::Next(slot) => list.next(slot),
        Step::Previous(slot) => list.previous(slot),
    };
    let generation = store.generation();

    match slot.and_then(|s| store.get(s).map(|t| (s, t))) {
        Some((slot, triple)) => {
            let (value, symbol) = resolve(&triple.value);
            Link {
                position: Some(slot),
                row: triple.row,
                column: triple.column,
                value,
                symbol,
                origin,
                generation,
            }
        }
        None => Link::end(origin, major, generation),
    }
}
