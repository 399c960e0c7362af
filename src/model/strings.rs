use super::names::NameIndex;
use crate::algebra::FloatT;

/// Symbol table associating strings with numeric placeholder values.
///
/// Ids are assigned densely in order of first appearance and are never
/// reused or renumbered, so they remain valid across deletion and
/// compaction of the model.  A string may appear in the table before any
/// value has been associated with it, in which case its placeholder is
/// unset.

#[derive(Debug, Clone, Default)]
pub(crate) struct AssociationTable<T> {
    strings: Vec<String>,
    values: Vec<Option<T>>,
    index: NameIndex,
}

impl<T> AssociationTable<T>
where
    T: FloatT,
{
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.strings.len()
    }

    pub(crate) fn find(&self, string: &str) -> Option<usize> {
        self.index.find(string)
    }

    /// Find `string`, adding it with an unset placeholder if absent.
    /// The empty string cannot be entered and gives `None`.
    pub(crate) fn intern(&mut self, string: &str) -> Option<usize> {
        if string.is_empty() {
            return None;
        }
        if let Some(id) = self.find(string) {
            return Some(id);
        }
        let id = self.strings.len();
        self.strings.push(string.to_string());
        self.values.push(None);
        self.index.insert(string, id);
        Some(id)
    }

    /// Find or add `string` and set its placeholder value.
    pub(crate) fn associate(&mut self, string: &str, value: T) -> Option<usize> {
        let id = self.intern(string)?;
        self.values[id] = Some(value);
        Some(id)
    }

    pub(crate) fn string(&self, id: usize) -> Option<&str> {
        self.strings.get(id).map(|s| s.as_str())
    }

    /// placeholder value, if one has been associated
    pub(crate) fn value(&self, id: usize) -> Option<T> {
        self.values.get(id).copied().flatten()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Option<T>)> + '_ {
        self.strings
            .iter()
            .zip(self.values.iter())
            .map(|(s, &v)| (s.as_str(), v))
    }
}

#[test]
fn test_association_table() {
    let mut table = AssociationTable::<f64>::default();
    assert_eq!(table.associate("", 1.0), None);

    let a = table.intern("alpha").unwrap();
    assert_eq!(table.value(a), None);
    assert_eq!(table.associate("alpha", 2.5), Some(a));
    assert_eq!(table.value(a), Some(2.5));

    let b = table.associate("beta", -1.0).unwrap();
    assert_ne!(a, b);
    assert_eq!(table.len(), 2);
    assert_eq!(table.string(b), Some("beta"));
    assert_eq!(table.find("gamma"), None);

    // re-association overwrites the placeholder but keeps the id
    assert_eq!(table.associate("beta", 4.0), Some(b));
    assert_eq!(table.value(b), Some(4.0));
}
