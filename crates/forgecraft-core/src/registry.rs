use crate::id::{BlockId, Identifier};
use std::collections::HashMap;

/// A block entry in the registry.
#[derive(Debug, Clone)]
pub struct BlockDef {
    pub id: Identifier,
}

/// Host-populated table of registered blocks, keyed by identifier.
///
/// The host registers blocks incrementally during startup; definition
/// parsing only ever reads from it. Lookups resolve the string form at call
/// time, so a name registered after a failed resolve would succeed on a
/// later reload, never retroactively.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    blocks: Vec<BlockDef>,
    name_to_id: HashMap<Identifier, BlockId>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The name is not a well-formed identifier or no block is registered
    /// under it.
    #[error("unknown block: {0}")]
    UnknownBlock(String),
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block under `id`. Re-registering an identifier returns the
    /// existing handle.
    pub fn register(&mut self, id: Identifier) -> BlockId {
        if let Some(&existing) = self.name_to_id.get(&id) {
            return existing;
        }
        let block = BlockId(self.blocks.len() as u32);
        self.name_to_id.insert(id.clone(), block);
        self.blocks.push(BlockDef { id });
        block
    }

    /// Resolve a string name to a block handle. Pure forwarding lookup.
    pub fn resolve(&self, name: &str) -> Result<BlockId, RegistryError> {
        let id: Identifier = name
            .parse()
            .map_err(|_| RegistryError::UnknownBlock(name.to_string()))?;
        self.lookup(&id)
            .ok_or_else(|| RegistryError::UnknownBlock(name.to_string()))
    }

    /// Lookup by parsed identifier.
    pub fn lookup(&self, id: &Identifier) -> Option<BlockId> {
        self.name_to_id.get(id).copied()
    }

    /// Reverse lookup, for diagnostics.
    pub fn get(&self, block: BlockId) -> Option<&BlockDef> {
        self.blocks.get(block.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Maps a forge identifier to its controller block.
///
/// Populated by the host alongside the block registry; consulted by recipe
/// generation to pick the crafted output.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    controllers: HashMap<Identifier, BlockId>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, forge: Identifier, controller: BlockId) {
        self.controllers.insert(forge, controller);
    }

    pub fn controller_block(&self, forge: &Identifier) -> Option<BlockId> {
        self.controllers.get(forge).copied()
    }
}
