use crate::types::{Identified, RecordId};

/// Local mirror of a backend list, keyed by record identifier.
///
/// Keeps the order records arrived in. Merging a record the backend returned
/// replaces the entry with the same identifier in place, or appends it when
/// the identifier is new. Whatever was merged last wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(items);
        collection
    }

    /// Replaces the contents with a fresh listing.
    ///
    /// Duplicate identifiers in the listing collapse onto their first position.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items.clear();
        for item in items {
            self.upsert(item);
        }
    }

    /// Merges a record. Returns `true` when an existing entry was replaced.
    pub fn upsert(&mut self, item: T) -> bool {
        match self.position(item.id()) {
            Some(i) => {
                self.items[i] = item;
                true
            }
            None => {
                self.items.push(item);
                false
            }
        }
    }

    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        self.position(id).map(|i| self.items.remove(i))
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.items.iter().map(Identified::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.items.sort_by(compare);
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
