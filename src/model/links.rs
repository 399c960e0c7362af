// ---------------
// Doubly linked lists threaded through an element arena
// ---------------

/// One orientation's worth of intrusive doubly linked lists.
///
/// Every major index (a row, or a column) owns one list.  Link fields are
/// stored per arena slot, so a slot is a member of at most one list of a
/// given orientation.  Two of these, one keyed by row and one keyed by
/// column, are threaded through the same arena by [`ElementStore`].
///
/// [`ElementStore`]: super::elements::ElementStore

#[derive(Debug, Clone, Default)]
pub(crate) struct LinkedList {
    // per major index
    first: Vec<Option<usize>>,
    last: Vec<Option<usize>>,
    counts: Vec<usize>,

    // per arena slot
    previous: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
}

impl LinkedList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn number_majors(&self) -> usize {
        self.first.len()
    }

    /// make sure that lists exist for all majors `0..n`
    pub(crate) fn ensure_majors(&mut self, n: usize) {
        if n > self.first.len() {
            self.first.resize(n, None);
            self.last.resize(n, None);
            self.counts.resize(n, 0);
        }
    }

    /// drop trailing majors.  Dropped lists must already be empty.
    pub(crate) fn truncate_majors(&mut self, n: usize) {
        debug_assert!(self.counts.iter().skip(n).all(|&c| c == 0));
        self.first.truncate(n);
        self.last.truncate(n);
        self.counts.truncate(n);
    }

    /// make link storage available for slots `0..n`
    pub(crate) fn ensure_slots(&mut self, n: usize) {
        if n > self.next.len() {
            self.previous.resize(n, None);
            self.next.resize(n, None);
        }
    }

    /// splice `slot` onto the tail of the list for `major`
    pub(crate) fn push_back(&mut self, major: usize, slot: usize) {
        self.ensure_majors(major + 1);
        self.ensure_slots(slot + 1);

        let tail = self.last[major];
        self.previous[slot] = tail;
        self.next[slot] = None;
        match tail {
            Some(t) => self.next[t] = Some(slot),
            None => self.first[major] = Some(slot),
        }
        self.last[major] = Some(slot);
        self.counts[major] += 1;
    }

    /// remove `slot` from the list for `major`, joining its neighbours
    pub(crate) fn unlink(&mut self, major: usize, slot: usize) {
        let (prev, next) = (self.previous[slot], self.next[slot]);

        match prev {
            Some(p) => self.next[p] = next,
            None => self.first[major] = next,
        }
        match next {
            Some(n) => self.previous[n] = prev,
            None => self.last[major] = prev,
        }
        self.previous[slot] = None;
        self.next[slot] = None;
        self.counts[major] -= 1;
    }

    pub(crate) fn first(&self, major: usize) -> Option<usize> {
        self.first.get(major).copied().flatten()
    }

    pub(crate) fn last(&self, major: usize) -> Option<usize> {
        self.last.get(major).copied().flatten()
    }

    pub(crate) fn next(&self, slot: usize) -> Option<usize> {
        self.next.get(slot).copied().flatten()
    }

    pub(crate) fn previous(&self, slot: usize) -> Option<usize> {
        self.previous.get(slot).copied().flatten()
    }

    /// number of slots in the list for `major`
    pub(crate) fn count(&self, major: usize) -> usize {
        self.counts.get(major).copied().unwrap_or(0)
    }

    /// walk the list for `major` from head to tail
    pub(crate) fn iter(&self, major: usize) -> LinkIter<'_> {
        LinkIter {
            list: self,
            current: self.first(major),
        }
    }

    /// forget every list and link, keeping `majors` empty lists
    pub(crate) fn reset(&mut self, majors: usize, slots: usize) {
        self.first = vec![None; majors];
        self.last = vec![None; majors];
        self.counts = vec![0; majors];
        self.previous = vec![None; slots];
        self.next = vec![None; slots];
    }
}

pub(crate) struct LinkIter<'a> {
    list: &'a LinkedList,
    current: Option<usize>,
}

impl Iterator for LinkIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = self.current?;
        self.current = self.list.next(slot);
        Some(slot)
    }
}

#[test]
fn test_push_and_unlink() {
    let mut list = LinkedList::new();
    list.push_back(1, 0);
    list.push_back(1, 3);
    list.push_back(1, 2);
    list.push_back(0, 1);

    assert_eq!(list.number_majors(), 2);
    assert_eq!(list.iter(1).collect::<Vec<_>>(), vec![0, 3, 2]);
    assert_eq!(list.iter(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(list.count(1), 3);

    // middle
    list.unlink(1, 3);
    assert_eq!(list.iter(1).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(list.previous(2), Some(0));

    // head and tail
    list.unlink(1, 0);
    assert_eq!(list.first(1), Some(2));
    list.unlink(1, 2);
    assert_eq!(list.first(1), None);
    assert_eq!(list.last(1), None);
    assert_eq!(list.count(1), 0);

    // out of range majors are empty
    assert_eq!(list.first(7), None);
    assert_eq!(list.count(7), 0);
}
