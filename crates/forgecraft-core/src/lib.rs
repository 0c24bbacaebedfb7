//! Forgecraft Core -- domain types for the tiered forge definition engine.
//!
//! A forge tier is described by a data file, validated against the host's
//! block registry, and stored as an immutable [`definition::ForgeDefinition`]
//! from which a shaped crafting recipe is derived deterministically.
//!
//! # Key Types
//!
//! - [`id::Identifier`] -- namespaced `namespace:path` identifier.
//! - [`registry::BlockRegistry`] -- host-populated block table; the only
//!   source of [`id::BlockId`] handles.
//! - [`definition::ForgeDefinition`] -- immutable tier value with the derived
//!   smelt time computed by its smart constructor.
//! - [`store::ForgeStore`] -- insertion-ordered, duplicate-rejecting
//!   collection of loaded definitions.
//! - [`recipe::RecipeGenerator`] -- pure derivation of the controller
//!   crafting recipe from a definition.
//!
//! File parsing and batch loading live in the `forgecraft-data` crate; this
//! crate performs no I/O.

pub mod definition;
pub mod id;
pub mod recipe;
pub mod registry;
pub mod store;

pub use definition::{BASE_MAX_SMELT_TIME, DEFAULT_FUEL_CAPACITY, DefinitionError, ForgeDefinition};
pub use id::{BlockId, Identifier, IdentifierError};
pub use recipe::{Ingredient, ItemStack, RecipeError, RecipeGenerator, ShapedRecipe};
pub use registry::{BlockDef, BlockRegistry, ControllerRegistry, RegistryError};
pub use store::{ForgeStore, StoreError};
