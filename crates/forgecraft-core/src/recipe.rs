use crate::definition::ForgeDefinition;
use crate::id::{BlockId, Identifier};
use crate::registry::ControllerRegistry;
use serde::Serialize;

pub const GRID_WIDTH: u32 = 3;
pub const GRID_HEIGHT: u32 = 3;
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;
/// Center of the 3x3 grid, reserved for the catalyst.
const CATALYST_SLOT: usize = 4;

/// One cell of a crafting grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ingredient {
    Empty,
    Block(BlockId),
}

/// A quantity of one block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    pub block: BlockId,
    pub count: u32,
}

/// A derived shaped crafting recipe, consumable by the host recipe registry.
/// Serializable so reload caches can diff artifacts byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedRecipe {
    pub id: Identifier,
    pub width: u32,
    pub height: u32,
    /// Row-major, `width * height` cells.
    pub ingredients: Vec<Ingredient>,
    pub output: ItemStack,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("no controller block registered for forge '{0}'")]
    NoController(Identifier),
}

/// Synthesizes the crafting recipe for a forge controller: a ring of the
/// tier's primary material around a fixed catalyst block.
///
/// Generation is pure; identical inputs always produce identical artifacts.
#[derive(Debug, Clone, Copy)]
pub struct RecipeGenerator {
    catalyst: BlockId,
}

impl RecipeGenerator {
    pub fn new(catalyst: BlockId) -> Self {
        Self { catalyst }
    }

    pub fn generate(
        &self,
        forge: &Identifier,
        def: &ForgeDefinition,
        controllers: &ControllerRegistry,
    ) -> Result<ShapedRecipe, RecipeError> {
        let controller = controllers
            .controller_block(forge)
            .ok_or_else(|| RecipeError::NoController(forge.clone()))?;

        let mut ingredients = vec![Ingredient::Block(def.material()); GRID_SIZE];
        ingredients[CATALYST_SLOT] = Ingredient::Block(self.catalyst);

        Ok(ShapedRecipe {
            id: forge.clone(),
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            ingredients,
            output: ItemStack {
                block: controller,
                count: 1,
            },
        })
    }
}
