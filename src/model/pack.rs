use super::core::SparseModel;
use crate::algebra::FloatT;
use crate::utils::PositionAll;

impl<T> SparseModel<T>
where
    T: FloatT,
{
    /// Delete a row.
    ///
    /// Every element of the row is removed and the row's attributes return
    /// to their defaults.  If `row` is the last row then the row count is
    /// reduced by one and `true` is returned.  Otherwise the row remains
    /// as an empty gap (removable by [`pack_rows`](Self::pack_rows)) and
    /// `false` is returned, as it is for a row that does not exist.
    pub fn delete_row(&mut self, row: usize) -> bool {
        if row >= self.number_rows {
            return false;
        }
        self.note_direct_access();
        self.elements.remove_row(row);
        self.attributes.clear_row(row);
        self.invalidate();

        if row + 1 != self.number_rows {
            return false;
        }
        self.number_rows -= 1;
        self.attributes.truncate_rows(self.number_rows);
        self.elements.truncate_rows(self.number_rows);
        true
    }

    /// Delete a column together with its quadratic terms.  Otherwise as
    /// for [`delete_row`](Self::delete_row).
    pub fn delete_column(&mut self, col: usize) -> bool {
        if col >= self.number_columns {
            return false;
        }
        self.note_direct_access();
        self.elements.remove_column(col);
        self.quadratic.remove_row(col);
        self.quadratic.remove_column(col);
        self.attributes.clear_column(col);
        self.invalidate();

        if col + 1 != self.number_columns {
            return false;
        }
        self.number_columns -= 1;
        self.attributes.truncate_columns(self.number_columns);
        self.elements.truncate_columns(self.number_columns);
        self.quadratic.truncate_rows(self.number_columns);
        self.quadratic.truncate_columns(self.number_columns);
        true
    }

    /// Remove every row with no elements and numeric bounds satisfying
    /// lower ≤ upper, renumbering the remaining rows contiguously in their
    /// original order.  Returns the number of rows removed.
    pub fn pack_rows(&mut self) -> usize {
        self.note_direct_access();

        let keep: Vec<bool> = (0..self.number_rows)
            .map(|row| !self.row_is_removable(row))
            .collect();
        let survivors = keep.iter().position_all(|&&k| k);
        let removed = self.number_rows - survivors.len();
        if removed == 0 {
            return 0;
        }

        let map = survivor_map(self.number_rows, &survivors);
        self.elements
            .renumber(Some(&map), None, survivors.len(), self.number_columns);
        self.attributes.retain_rows(&keep);
        self.number_rows = survivors.len();
        self.invalidate();

        log::debug!("packed {} rows, {} remain", removed, self.number_rows);
        removed
    }

    /// Remove every column with no elements, no quadratic terms and a
    /// zero numeric objective coefficient, renumbering the remaining columns
    /// contiguously in their original order.  Returns the number of columns
    /// removed.
    pub fn pack_columns(&mut self) -> usize {
        self.note_direct_access();

        let keep: Vec<bool> = (0..self.number_columns)
            .map(|col| !self.column_is_removable(col))
            .collect();
        let survivors = keep.iter().position_all(|&&k| k);
        let removed = self.number_columns - survivors.len();
        if removed == 0 {
            return 0;
        }

        let map = survivor_map(self.number_columns, &survivors);
        let n = survivors.len();
        self.elements.renumber(None, Some(&map), self.number_rows, n);
        self.quadratic.renumber(Some(&map), Some(&map), n, n);
        self.attributes.retain_columns(&keep);
        self.number_columns = n;
        self.invalidate();

        log::debug!("packed {} columns, {} remain", removed, self.number_columns);
        removed
    }

    /// [`pack_rows`](Self::pack_rows) then
    /// [`pack_columns`](Self::pack_columns).  Returns the total removed.
    pub fn pack(&mut self) -> usize {
        self.pack_rows() + self.pack_columns()
    }

    fn row_is_removable(&self, row: usize) -> bool {
        if self.elements.rows().count(row) > 0 {
            return false;
        }
        match self.attributes.row(row) {
            None => true,
            Some(info) => match (info.lower.number(), info.upper.number()) {
                (Some(lower), Some(upper)) => lower <= upper,
                _ => false,
            },
        }
    }

    fn column_is_removable(&self, col: usize) -> bool {
        if self.elements.columns().count(col) > 0
            || self.quadratic.rows().count(col) > 0
            || self.quadratic.columns().count(col) > 0
        {
            return false;
        }
        match self.attributes.column(col) {
            None => true,
            Some(info) => info.objective.number().is_some_and(|c| c == T::zero()),
        }
    }
}

// old index -> new index for a sorted list of surviving indices
fn survivor_map(n: usize, survivors: &[usize]) -> Vec<Option<usize>> {
    let mut map = vec![None; n];
    for (new, &old) in survivors.iter().enumerate() {
        map[old] = Some(new);
    }
    map
}

#[test]
fn test_survivor_map() {
    let map = survivor_map(5, &[0, 3, 4]);
    assert_eq!(map, vec![Some(0), None, None, Some(1), Some(2)]);
}
