//! Internal utility functions and helpers.

pub(crate) mod atomic;
pub(crate) mod infbounds;

// assorted other functionality missing from std

// a drop-in replacement for the julia "findall" function,
// which serves as a vectorized version of the std::iter::position
// returning indices of *all* elements satisfying a predicate

pub(crate) trait PositionAll<T>: Iterator<Item = T> {
    fn position_all<F>(&mut self, predicate: F) -> Vec<usize>
    where
        F: FnMut(&T) -> bool;
}

impl<T, I> PositionAll<T> for I
where
    I: Iterator<Item = T>,
{
    fn position_all<F>(&mut self, mut f: F) -> Vec<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.enumerate()
            .filter(|(_, item)| f(item))
            .map(|(index, _)| index)
            .collect::<Vec<_>>()
    }
}

// -------------
// testing

#[test]
fn test_position_all() {
    let keep = [true, false, false, true, true];
    let idx = keep.iter().position_all(|&&k| k);
    assert_eq!(idx, vec![0, 3, 4]);

    let idx = keep.iter().position_all(|_| false);
    assert!(idx.is_empty());
}
