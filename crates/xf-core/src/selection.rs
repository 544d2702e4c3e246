//! Ordered multi-object selection

use uuid::Uuid;

use crate::error::{InspectorError, InspectorResult};

/// Identifier of an inspected object
pub type ObjectId = Uuid;

/// Ordered, non-empty set of objects sharing one inspector session
///
/// The first entry is the primary object whose values are displayed.
/// Iteration follows the order the selection was built in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ObjectId>,
}

impl Selection {
    /// Build a selection, dropping repeated ids (first occurrence wins)
    pub fn new(ids: impl IntoIterator<Item = ObjectId>) -> InspectorResult<Self> {
        let mut unique: Vec<ObjectId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        if unique.is_empty() {
            return Err(InspectorError::EmptySelection);
        }
        Ok(Self { ids: unique })
    }

    /// Selection containing one object
    pub fn single(id: ObjectId) -> Self {
        Self { ids: vec![id] }
    }

    /// The reference object
    pub fn primary(&self) -> ObjectId {
        self.ids[0]
    }

    /// Every object after the primary
    pub fn others(&self) -> &[ObjectId] {
        &self.ids[1..]
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids.iter().copied()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_multi(&self) -> bool {
        self.ids.len() > 1
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_rejected() {
        assert_eq!(
            Selection::new(Vec::new()),
            Err(InspectorError::EmptySelection)
        );
    }

    #[test]
    fn test_selection_order_and_dedup() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let selection = Selection::new([b, a, b]).unwrap();

        assert_eq!(selection.primary(), b);
        assert_eq!(selection.others(), &[a]);
        assert_eq!(selection.len(), 2);
        assert!(selection.is_multi());
    }

    #[test]
    fn test_single() {
        let a = Uuid::new_v4();
        let selection = Selection::single(a);
        assert!(!selection.is_multi());
        assert!(selection.others().is_empty());
    }
}
