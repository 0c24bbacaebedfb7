//! Forgecraft Data -- data-file layer for the forge definition engine.
//!
//! Reads forge tier documents (JSON, RON, or TOML), parses them against the
//! host's block registry, and drives the batch load that fills a
//! [`forgecraft_core::store::ForgeStore`] and derives controller recipes.
//! Failures never abort a batch; they are collected per document into a
//! [`loader::LoadReport`].

pub mod document;
pub mod loader;

pub use document::{ParseError, parse_definition};
pub use loader::{
    Format, LoadError, LoadOutcome, LoadReport, Loader, collect_forge_files, detect_format,
    read_document,
};
