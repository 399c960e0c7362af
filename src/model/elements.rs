use super::links::LinkedList;
use std::collections::HashMap;

// smallest number of slots added when the arena grows
const MIN_GROWTH: usize = 64;

/// A single sparse entry.  For the quadratic sublayer `row` holds
/// the first column index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Triple<V> {
    pub row: usize,
    pub column: usize,
    pub value: V,
}

/// Arena of sparse entries with a (row, column) hash index and
/// row-wise and column-wise linked lists threaded through it.
///
/// All three indices are updated together by every mutating method, so
/// that a live slot is always present in the hash and in exactly one row
/// list and one column list.  Vacated slots are recycled before the arena
/// is grown.
///
/// The arena carries a generation counter which is advanced whenever the
/// arena grows or a slot is vacated, and whenever the store is renumbered.
/// Cursors record the generation at which they were issued.

#[derive(Debug, Clone)]
pub(crate) struct ElementStore<V> {
    slots: Vec<Option<Triple<V>>>,
    capacity: usize,
    free: Vec<usize>,
    hash: HashMap<(usize, usize), usize>,
    rows: LinkedList,
    columns: LinkedList,
    generation: u64,
}

impl<V> Default for ElementStore<V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
            free: Vec::new(),
            hash: HashMap::new(),
            rows: LinkedList::new(),
            columns: LinkedList::new(),
            generation: 0,
        }
    }
}

impl<V> ElementStore<V>
where
    V: Copy,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut store = Self::default();
        if capacity > 0 {
            store.grow(capacity);
        }
        store
    }

    /// number of live entries
    pub(crate) fn len(&self) -> usize {
        self.hash.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn rows(&self) -> &LinkedList {
        &self.rows
    }

    pub(crate) fn columns(&self) -> &LinkedList {
        &self.columns
    }

    /// make sure both orientations have (possibly empty) lists
    /// for every major index below the given counts
    pub(crate) fn ensure_majors(&mut self, rows: usize, columns: usize) {
        self.rows.ensure_majors(rows);
        self.columns.ensure_majors(columns);
    }

    pub(crate) fn find(&self, row: usize, column: usize) -> Option<usize> {
        self.hash.get(&(row, column)).copied()
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&Triple<V>> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub(crate) fn value_mut(&mut self, slot: usize) -> Option<&mut V> {
        self.slots
            .get_mut(slot)
            .and_then(|s| s.as_mut())
            .map(|t| &mut t.value)
    }

    /// Insert or overwrite the entry at (row, column).
    ///
    /// An existing entry is overwritten in place and keeps its slot and
    /// its position in both lists.  A new entry is appended to the tail of
    /// its row list and its column list.  Returns the slot and whether
    /// a new entry was created.
    pub(crate) fn upsert(&mut self, row: usize, column: usize, value: V) -> (usize, bool) {
        if let Some(slot) = self.find(row, column) {
            if let Some(triple) = self.slots[slot].as_mut() {
                triple.value = value;
            }
            return (slot, false);
        }

        let slot = self.allocate_slot();
        self.slots[slot] = Some(Triple { row, column, value });
        self.hash.insert((row, column), slot);
        self.rows.push_back(row, slot);
        self.columns.push_back(column, slot);
        (slot, true)
    }

    /// Vacate a slot, unlinking it from both lists and the hash.
    pub(crate) fn remove(&mut self, slot: usize) -> Option<Triple<V>> {
        let triple = self.slots.get_mut(slot)?.take()?;
        self.rows.unlink(triple.row, slot);
        self.columns.unlink(triple.column, slot);
        self.hash.remove(&(triple.row, triple.column));
        self.free.push(slot);
        self.generation += 1;
        Some(triple)
    }

    /// Vacate every entry in a row.  Returns the number removed.
    pub(crate) fn remove_row(&mut self, row: usize) -> usize {
        let slots: Vec<usize> = self.rows.iter(row).collect();
        slots.iter().filter_map(|&s| self.remove(s)).count()
    }

    /// Vacate every entry in a column.  Returns the number removed.
    pub(crate) fn remove_column(&mut self, column: usize) -> usize {
        let slots: Vec<usize> = self.columns.iter(column).collect();
        slots.iter().filter_map(|&s| self.remove(s)).count()
    }

    /// drop the (empty) row lists at and beyond `rows`
    pub(crate) fn truncate_rows(&mut self, rows: usize) {
        self.rows.truncate_majors(rows);
    }

    /// drop the (empty) column lists at and beyond `columns`
    pub(crate) fn truncate_columns(&mut self, columns: usize) {
        self.columns.truncate_majors(columns);
    }

    /// live entries in slot order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &Triple<V>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, t)| t.as_ref().map(|t| (slot, t)))
    }

    /// Rewrite every row and/or column index through the given maps and
    /// rebuild the slots, hash index and both linked lists from scratch.
    ///
    /// Every live entry must map to a surviving index; entries that do
    /// not are dropped.  Surviving entries keep their relative slot order.
    pub(crate) fn renumber(
        &mut self,
        row_map: Option<&[Option<usize>]>,
        column_map: Option<&[Option<usize>]>,
        rows: usize,
        columns: usize,
    ) {
        let remap = |map: Option<&[Option<usize>]>, idx: usize| match map {
            Some(map) => map.get(idx).copied().flatten(),
            None => Some(idx),
        };

        let live: Vec<Triple<V>> = self
            .slots
            .drain(..)
            .flatten()
            .filter_map(|t| {
                Some(Triple {
                    row: remap(row_map, t.row)?,
                    column: remap(column_map, t.column)?,
                    value: t.value,
                })
            })
            .collect();
        debug_assert_eq!(live.len(), self.hash.len());

        self.free.clear();
        self.hash.clear();
        self.rows.reset(rows, self.capacity);
        self.columns.reset(columns, self.capacity);

        for (slot, triple) in live.into_iter().enumerate() {
            self.hash.insert((triple.row, triple.column), slot);
            self.rows.push_back(triple.row, slot);
            self.columns.push_back(triple.column, slot);
            self.slots.push(Some(triple));
        }
        self.generation += 1;
    }

    // take a vacated slot if one exists, otherwise append,
    // growing the arena when it is full
    fn allocate_slot(&mut self) -> usize {
        if let Some(slot) = self.free.pop() {
            return slot;
        }
        if self.slots.len() == self.capacity {
            let extra = (self.capacity / 2).max(MIN_GROWTH);
            self.grow(self.capacity + extra);
        }
        self.slots.push(None);
        self.slots.len() - 1
    }

    fn grow(&mut self, capacity: usize) {
        log::trace!(
            "growing element arena from {} to {} slots",
            self.capacity,
            capacity
        );
        self.slots.reserve_exact(capacity - self.slots.len());
        self.rows.ensure_slots(capacity);
        self.columns.ensure_slots(capacity);
        self.capacity = capacity;
        self.generation += 1;
    }
}

#[test]
fn test_upsert_and_lookup() {
    let mut store = ElementStore::<f64>::default();
    let (s0, new0) = store.upsert(0, 2, 1.0);
    let (s1, new1) = store.upsert(1, 2, 2.0);
    assert!(new0 && new1);
    assert_eq!(store.len(), 2);

    // overwrite in place
    let (s2, new2) = store.upsert(0, 2, 5.0);
    assert!(!new2);
    assert_eq!(s2, s0);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(s0).unwrap().value, 5.0);

    assert_eq!(store.find(1, 2), Some(s1));
    assert_eq!(store.find(2, 1), None);
    assert_eq!(store.columns().iter(2).collect::<Vec<_>>(), vec![s0, s1]);
}

#[test]
fn test_remove_recycles_slot() {
    let mut store = ElementStore::<f64>::default();
    store.upsert(0, 0, 1.0);
    let (s, _) = store.upsert(0, 1, 2.0);
    store.upsert(1, 1, 3.0);

    let generation = store.generation();
    assert_eq!(store.remove(s).unwrap().value, 2.0);
    assert!(store.generation() > generation);
    assert_eq!(store.find(0, 1), None);
    assert_eq!(store.rows().count(0), 1);
    assert_eq!(store.columns().count(1), 1);

    // vacated slot is taken first
    let (s2, _) = store.upsert(3, 3, 4.0);
    assert_eq!(s2, s);
}

#[test]
fn test_growth_advances_generation() {
    let mut store = ElementStore::<f64>::with_capacity(2);
    assert_eq!(store.capacity(), 2);
    store.upsert(0, 0, 1.0);
    store.upsert(0, 1, 1.0);
    let generation = store.generation();

    // third entry forces the arena to grow
    store.upsert(0, 2, 1.0);
    assert!(store.capacity() > 2);
    assert!(store.generation() > generation);
    assert_eq!(store.rows().iter(0).count(), 3);
}

#[test]
fn test_renumber() {
    let mut store = ElementStore::<f64>::default();
    store.upsert(0, 0, 1.0);
    store.upsert(2, 3, 2.0);
    store.upsert(2, 1, 3.0);

    // rows 0,2 survive as 0,1 : columns 0,1,3 survive as 0,1,2
    let row_map = [Some(0), None, Some(1)];
    let column_map = [Some(0), Some(1), None, Some(2)];
    store.renumber(Some(&row_map), Some(&column_map), 2, 3);

    assert_eq!(store.len(), 3);
    assert!(store.find(1, 2).is_some());
    assert!(store.find(1, 1).is_some());
    assert_eq!(store.rows().count(1), 2);
    assert_eq!(store.columns().number_majors(), 3);
    assert_eq!(store.columns().count(2), 1);
}
