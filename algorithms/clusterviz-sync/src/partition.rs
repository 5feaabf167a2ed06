use std::collections::{BTreeMap, BTreeSet};
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::view::ViewId;

/// Fields each view hides from its axes
///
/// Hidden fields form a set, so hiding a field twice leaves a single entry.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionMap {
    hidden: BTreeMap<ViewId, BTreeSet<String>>,
}

impl PartitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hidden fields of a view, if the view has an entry
    pub fn hidden(&self, view: ViewId) -> Option<&BTreeSet<String>> {
        self.hidden.get(&view)
    }

    /// Entry of a view, created empty when missing
    pub fn entry(&mut self, view: ViewId) -> &mut BTreeSet<String> {
        self.hidden.entry(view).or_default()
    }

    /// Hides `field` on `view`. Returns whether it was visible before.
    pub fn hide<S: Into<String>>(&mut self, view: ViewId, field: S) -> bool {
        self.entry(view).insert(field.into())
    }

    /// Shows `field` on `view` again. Returns whether it was hidden.
    pub fn show(&mut self, view: ViewId, field: &str) -> bool {
        self.hidden
            .get_mut(&view)
            .map_or(false, |fields| fields.remove(field))
    }

    pub fn is_hidden(&self, view: ViewId, field: &str) -> bool {
        self.hidden
            .get(&view)
            .map_or(false, |fields| fields.contains(field))
    }

    /// Views with an entry, in identifier order
    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.hidden.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &BTreeSet<String>)> {
        self.hidden.iter().map(|(&view, fields)| (view, fields))
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(ViewId, Vec<S>)> for PartitionMap {
    fn from_iter<I: IntoIterator<Item = (ViewId, Vec<S>)>>(iter: I) -> Self {
        let mut partition = PartitionMap::new();
        for (view, fields) in iter {
            let entry = partition.entry(view);
            entry.extend(fields.into_iter().map(Into::into));
        }
        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_is_idempotent() {
        let mut partition = PartitionMap::new();
        assert!(partition.hide(ViewId(0), "cluster"));
        assert!(!partition.hide(ViewId(0), "cluster"));
        assert_eq!(partition.hidden(ViewId(0)).unwrap().len(), 1);
    }

    #[test]
    fn show_restores_the_axis() {
        let mut partition: PartitionMap = vec![(ViewId(1), vec!["a", "b"])].into_iter().collect();
        assert!(partition.show(ViewId(1), "a"));
        assert!(!partition.show(ViewId(1), "a"));
        assert!(!partition.show(ViewId(4), "a"));
        assert!(partition.is_hidden(ViewId(1), "b"));
        assert!(!partition.is_hidden(ViewId(1), "a"));
    }

    #[test]
    fn entries_are_created_empty() {
        let mut partition = PartitionMap::new();
        assert!(partition.hidden(ViewId(2)).is_none());
        assert!(partition.entry(ViewId(2)).is_empty());
        assert_eq!(partition.views().collect::<Vec<_>>(), vec![ViewId(2)]);
    }
}
