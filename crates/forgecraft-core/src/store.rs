use crate::definition::ForgeDefinition;
use crate::id::Identifier;
use std::collections::HashMap;

/// Ordered, keyed collection of loaded forge definitions.
///
/// Owns its definitions exclusively. Iteration follows insertion order, which
/// the loader keeps equal to document order so recipe registration is
/// deterministic. Mutated only during a load batch; read-only afterwards
/// until a reload replaces the whole store.
#[derive(Debug, Default)]
pub struct ForgeStore {
    entries: Vec<(Identifier, ForgeDefinition)>,
    index: HashMap<Identifier, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A second definition arrived under an already-used key within one load
    /// batch. The first entry is retained.
    #[error("duplicate forge definition: {0}")]
    DuplicateForge(Identifier),
}

impl ForgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Identifier, def: ForgeDefinition) -> Result<(), StoreError> {
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateForge(id));
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, def));
        Ok(())
    }

    pub fn get(&self, id: &Identifier) -> Option<&ForgeDefinition> {
        self.index.get(id).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.index.contains_key(id)
    }

    /// Definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &ForgeDefinition)> {
        self.entries.iter().map(|(id, def)| (id, def))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
