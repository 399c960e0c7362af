use std::collections::HashMap;

/// Hash index from a row or column name to its index.
///
/// The empty string means "no name" and is never indexed.  When two
/// entries carry the same name the most recently indexed one is found,
/// and the name stays indexed while any entry still carries it.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameIndex {
    map: HashMap<String, usize>,
}

impl NameIndex {
    pub(crate) fn find(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    pub(crate) fn insert(&mut self, name: &str, index: usize) {
        if !name.is_empty() {
            self.map.insert(name.to_string(), index);
        }
    }

    /// Forget `name` for `index`.  If it resolved to `index`, it passes to
    /// the last of `names` (the current names in index order) still
    /// carrying it.
    pub(crate) fn remove<'a, I>(&mut self, name: &str, index: usize, mut names: I)
    where
        I: DoubleEndedIterator<Item = &'a str> + ExactSizeIterator,
    {
        if self.find(name) != Some(index) {
            return;
        }
        match names.rposition(|other| other == name) {
            Some(owner) => self.insert(name, owner),
            None => {
                self.map.remove(name);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// rebuild from scratch from a sequence of names in index order
    pub(crate) fn rebuild<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        self.map.clear();
        names.enumerate().for_each(|(i, name)| self.insert(name, i));
    }
}

#[test]
fn test_name_index() {
    let mut names = NameIndex::default();
    names.insert("", 0);
    names.insert("cap", 1);
    names.insert("demand", 2);
    assert_eq!(names.len(), 2);
    assert_eq!(names.find("cap"), Some(1));
    assert_eq!(names.find(""), None);

    // stale removal does not disturb a newer owner
    names.insert("cap", 4);
    names.remove("cap", 1, ["", "", "demand", "", "cap"].into_iter());
    assert_eq!(names.find("cap"), Some(4));
    names.remove("cap", 4, ["", "", "demand"].into_iter());
    assert_eq!(names.find("cap"), None);

    // a name still carried elsewhere passes to the last holder
    names.insert("cap", 0);
    names.insert("cap", 3);
    names.remove("cap", 3, ["cap", "", "demand", ""].into_iter());
    assert_eq!(names.find("cap"), Some(0));

    names.rebuild(["x", "", "y"].into_iter());
    assert_eq!(names.find("y"), Some(2));
    assert_eq!(names.find("demand"), None);
}
