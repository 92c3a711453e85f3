//! Ordered collection keyed by a natural id.
//!
//! # Invariants
//! - No two elements share an id.
//! - Element order is insertion order and is never changed by an update.
//! - Update operations take `&self` and return a new collection; the receiver
//!   is never modified.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

/// Types with a natural key used for lookups in an [`IdentifiedVec`].
pub trait Identifiable {
    type Id: Debug + Clone + PartialEq;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiedVec<T> {
    items: Vec<T>,
}

impl<T: Identifiable + Clone> IdentifiedVec<T> {
    /// Collects `iter` keeping order, or returns the first repeated id.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, T::Id>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items: Vec<T> = Vec::new();
        for item in iter {
            let id = item.id();
            if items.iter().any(|existing| existing.id() == id) {
                return Err(id);
            }
            items.push(item);
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn index_of(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.index_of(id).map(|index| &self.items[index])
    }

    pub fn contains_id(&self, id: &T::Id) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(Identifiable::id).collect()
    }

    /// Returns a copy with `item` added at the end, or `None` if its id is taken.
    pub fn appending(&self, item: T) -> Option<Self> {
        if self.contains_id(&item.id()) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(item);
        Some(Self { items })
    }

    /// Returns a copy where the element sharing `item`'s id is replaced by
    /// `item` at the same position, or `None` if no element has that id.
    pub fn replacing(&self, item: T) -> Option<Self> {
        let index = self.index_of(&item.id())?;
        let mut items = self.items.clone();
        items[index] = item;
        Some(Self { items })
    }
}

impl<T> std::ops::Index<usize> for IdentifiedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a IdentifiedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for IdentifiedVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T> Deserialize<'de> for IdentifiedVec<T>
where
    T: Deserialize<'de> + Identifiable + Clone,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(d)?;
        Self::try_from_iter(items)
            .map_err(|id| de::Error::custom(format!("duplicate id: {:?}", id)))
    }
}
