//! Batch loading pipeline: decode documents, parse definitions, derive
//! recipes, and collect every failure into a single report.
//!
//! Also provides format detection (JSON/RON/TOML) and directory scanning for
//! the host's reload path. All file I/O lives here; the per-document pipeline
//! itself operates on already-materialized document trees.

use crate::document::{ParseError, parse_definition};
use forgecraft_core::id::{Identifier, IdentifierError};
use forgecraft_core::recipe::{RecipeError, RecipeGenerator, ShapedRecipe};
use forgecraft_core::registry::{BlockRegistry, ControllerRegistry};
use forgecraft_core::store::{ForgeStore, StoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Any failure attributable to one document or to the file layer.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files would define the same forge in different formats.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// The file name does not form a valid identifier path.
    #[error("invalid file name '{file}': {source}")]
    FileName {
        file: PathBuf,
        source: IdentifierError,
    },

    /// The document text would not decode in its declared format.
    #[error("syntax error in {file}: {detail}")]
    Syntax { file: PathBuf, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection and document decoding
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
    Toml,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        _ => Err(LoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// Read a file and decode it into a document tree according to its format.
///
/// RON and TOML documents are normalized into the same [`Value`] tree that
/// JSON produces, so the parser sees one representation.
pub fn read_document(path: &Path) -> Result<Value, LoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Json => serde_json::from_str(&content).map_err(|e| LoadError::Syntax {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Ron => ron::from_str(&content).map_err(|e| LoadError::Syntax {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| LoadError::Syntax {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

/// Scan a directory for forge data files: one file per forge, identifier =
/// `namespace:file_stem`.
///
/// Files with unrelated extensions are ignored. Two files with the same stem
/// in different formats are an error rather than an arbitrary pick. Results
/// are sorted by identifier so the load order (and therefore store and
/// recipe-registration order) does not depend on directory enumeration.
pub fn collect_forge_files(
    dir: &Path,
    namespace: &str,
) -> Result<Vec<(Identifier, PathBuf)>, LoadError> {
    let mut by_stem: HashMap<String, PathBuf> = HashMap::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || detect_format(&path).is_err() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(existing) = by_stem.get(stem) {
            return Err(LoadError::ConflictingFormats {
                a: existing.clone(),
                b: path,
            });
        }
        by_stem.insert(stem.to_string(), path);
    }

    let mut files = Vec::with_capacity(by_stem.len());
    for (stem, path) in by_stem {
        let id = Identifier::new(namespace, &stem).map_err(|source| LoadError::FileName {
            file: path.clone(),
            source,
        })?;
        files.push((id, path));
    }
    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(files)
}

// ===========================================================================
// Load report
// ===========================================================================

/// Outcome of one load batch, success and failure lists in processing order.
///
/// Every failed document appears here with its own error; the host is
/// expected to surface the whole list so authors can fix every problem in
/// one edit-reload cycle.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub successes: Vec<Identifier>,
    pub failures: Vec<(Identifier, LoadError)>,
}

impl LoadReport {
    /// The batch counts as failed if any document failed.
    pub fn is_failure(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// A completed load: the replacement store, the derived recipes in store
/// order, and the report.
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: ForgeStore,
    pub recipes: Vec<ShapedRecipe>,
    pub report: LoadReport,
}

// ===========================================================================
// Loader
// ===========================================================================

/// Drives parse -> generate -> insert for a batch of forge documents.
///
/// Each document is processed independently; a failure is recorded and the
/// remaining documents still load. A failed document contributes neither a
/// store entry nor a recipe.
#[derive(Debug)]
pub struct Loader<'a> {
    blocks: &'a BlockRegistry,
    controllers: &'a ControllerRegistry,
    generator: RecipeGenerator,
}

impl<'a> Loader<'a> {
    pub fn new(
        blocks: &'a BlockRegistry,
        controllers: &'a ControllerRegistry,
        generator: RecipeGenerator,
    ) -> Self {
        Self {
            blocks,
            controllers,
            generator,
        }
    }

    /// Load a batch of already-decoded documents, in the order given.
    pub fn load_all(&self, docs: &[(Identifier, Value)]) -> LoadOutcome {
        let mut store = ForgeStore::new();
        let mut recipes = Vec::new();
        let mut report = LoadReport::default();

        for (id, doc) in docs {
            match self.load_one(id, doc, &mut store) {
                Ok(recipe) => {
                    recipes.push(recipe);
                    report.successes.push(id.clone());
                }
                Err(err) => report.failures.push((id.clone(), err)),
            }
        }

        LoadOutcome {
            store,
            recipes,
            report,
        }
    }

    /// Read every forge file under `dir` and load the lot. Files that fail
    /// to decode are reported alongside definition failures rather than
    /// aborting the batch; only directory-level problems (I/O, stem
    /// conflicts, bad file names) abort.
    pub fn load_dir(&self, dir: &Path, namespace: &str) -> Result<LoadOutcome, LoadError> {
        let files = collect_forge_files(dir, namespace)?;

        let mut docs = Vec::with_capacity(files.len());
        let mut undecodable = Vec::new();
        for (id, path) in files {
            match read_document(&path) {
                Ok(doc) => docs.push((id, doc)),
                Err(err) => undecodable.push((id, err)),
            }
        }

        let mut outcome = self.load_all(&docs);
        outcome.report.failures.extend(undecodable);
        Ok(outcome)
    }

    // Generation runs before insertion so a document that fails either step
    // leaves no trace in the store.
    fn load_one(
        &self,
        id: &Identifier,
        doc: &Value,
        store: &mut ForgeStore,
    ) -> Result<ShapedRecipe, LoadError> {
        let def = parse_definition(doc, self.blocks)?;
        let recipe = self.generator.generate(id, &def, self.controllers)?;
        store.insert(id.clone(), def)?;
        Ok(recipe)
    }
}
