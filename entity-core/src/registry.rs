//! Keyed entity store
//!
//! The registry only guarantees uniqueness and existence. Transactional
//! semantics belong to the systems that own registries.

use crate::{Entity, Error, Result};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered map from identity to entity
pub struct Registry<E: Entity> {
    entries: IndexMap<E::Id, E>,
}

impl<E: Entity> Registry<E> {
    /// Create empty registry
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register an entity under its own identity
    ///
    /// Fails with `DuplicateKey` when the identity is taken; the rejected
    /// entity is dropped and the stored one is left untouched.
    pub fn register(&mut self, entity: E) -> Result<&E> {
        let id = entity.id().clone();

        if self.entries.contains_key(&id) {
            tracing::warn!(kind = E::KIND, %id, "Rejected duplicate registration");
            return Err(Error::duplicate(E::KIND, &id));
        }

        tracing::debug!(kind = E::KIND, %id, "Registered entity");
        let (index, _) = self.entries.insert_full(id, entity);
        Ok(&self.entries[index])
    }

    /// Look up an entity
    pub fn find(&self, id: &E::Id) -> Result<&E> {
        self.entries
            .get(id)
            .ok_or_else(|| Error::not_found(E::KIND, id))
    }

    /// Look up an entity for mutation through its guarded methods
    pub fn find_mut(&mut self, id: &E::Id) -> Result<&mut E> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| Error::not_found(E::KIND, id))
    }

    /// Check whether an identity is registered
    pub fn contains(&self, id: &E::Id) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate over all entities in insertion order
    ///
    /// Every call starts a fresh pass over the current contents.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &E> + '_ {
        self.entries.values()
    }

    /// Remove an entity, keeping the order of the others
    pub fn remove(&mut self, id: &E::Id) -> Result<E> {
        let entity = self
            .entries
            .shift_remove(id)
            .ok_or_else(|| Error::not_found(E::KIND, id))?;

        tracing::debug!(kind = E::KIND, %id, "Removed entity");
        Ok(entity)
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Entity> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity + fmt::Debug> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &E::KIND)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Debug, PartialEq)]
    struct Widget {
        id: u32,
        label: &'static str,
    }

    impl Entity for Widget {
        type Id = u32;
        const KIND: &'static str = "widget";

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn widget(id: u32, label: &'static str) -> Widget {
        Widget { id, label }
    }

    #[test]
    fn test_register_then_find() {
        let mut registry = Registry::new();
        registry.register(widget(1, "first")).unwrap();

        let found = registry.find(&1).unwrap();
        assert_eq!(found.label, "first");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut registry = Registry::new();
        registry.register(widget(7, "original")).unwrap();

        let err = registry.register(widget(7, "impostor")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(registry.find(&7).unwrap().label, "original");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_missing() {
        let registry: Registry<Widget> = Registry::new();
        let err = registry.find(&42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "widget not found: 42");
    }

    #[test]
    fn test_list_is_ordered_and_restartable() {
        let mut registry = Registry::new();
        for (id, label) in [(3, "c"), (1, "a"), (2, "b")] {
            registry.register(widget(id, label)).unwrap();
        }

        let first: Vec<u32> = registry.list().map(|w| w.id).collect();
        assert_eq!(first, vec![3, 1, 2]);

        registry.register(widget(9, "z")).unwrap();
        let second: Vec<u32> = registry.list().map(|w| w.id).collect();
        assert_eq!(second, vec![3, 1, 2, 9]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut registry = Registry::new();
        for id in 1..=4 {
            registry.register(widget(id, "w")).unwrap();
        }

        let removed = registry.remove(&2).unwrap();
        assert_eq!(removed.id, 2);
        assert!(!registry.contains(&2));

        let ids: Vec<u32> = registry.list().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        assert_eq!(registry.remove(&2).unwrap_err().kind(), ErrorKind::NotFound);
    }
}
