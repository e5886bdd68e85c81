//! # tylax-mapgen
//!
//! Symbol and command mapping generator for the Tylax LaTeX ↔ Typst
//! converter.
//!
//! Compiles three curated catalogs (symbols, command arities, reverse
//! mappings) into the generated `maps.rs` consumed by the translator:
//! a runtime-initialized `mitex_spec::CommandSpec` for the forward
//! direction and a `phf` perfect-hash map for the reverse direction.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tylax_mapgen::generate;
//!
//! let generated = generate(None).unwrap();
//! assert!(generated.code.contains("TEX_COMMAND_SPEC"));
//! assert!(generated.code.contains("TYPST_TO_TEX"));
//! ```
//!
//! Passing a path runs the external importer first and merges the
//! extracted pairs over the embedded Symbol Catalog; an unusable source
//! degrades to the baseline instead of failing the run.

/// Compilation pipeline - resolver, table builders, code emitter
pub mod compile;

/// Data layer - the embedded catalogs
pub mod data;

/// Comparison harness backends
pub mod harness;

/// External catalog importer
pub mod import;

/// Utility modules
pub mod utils;

use std::path::Path;

pub use compile::{escape_token, render_maps, ForwardEntry, ForwardTable, ReverseTable};
pub use data::{RESERVED_CITE_ALIAS, RESERVED_CITE_COMMAND, STRUCTURAL_ENVIRONMENT};
pub use harness::{compare_case, Backend, BackendRun, CaseReport, ProcessBackend};
pub use utils::error::{GenError, GenResult};

/// Fixed location of the generated artifact, relative to the crate root of
/// the translator.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/maps.rs";

/// A completed generation run: the full artifact text plus counts for
/// reporting. The text is assembled entirely in memory so the caller can
/// perform a single atomic write.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Complete source text of the artifact
    pub code: String,
    /// Catalog-derived forward entries (structural entries excluded)
    pub forward_entries: usize,
    /// Reverse entries
    pub reverse_entries: usize,
    /// Pairs merged from the external source
    pub imported: usize,
    /// Non-fatal import degradation, reported by the CLI
    pub import_error: Option<GenError>,
}

/// Compile the catalogs into the artifact text.
///
/// With `external` set, the importer runs first and its pairs overwrite
/// same-named Symbol Catalog entries. Import failures are non-fatal and
/// surface in [`Generated::import_error`]; a reverse-catalog conflict is
/// fatal and returns before any output exists.
pub fn generate(external: Option<&Path>) -> GenResult<Generated> {
    let mut symbols = data::symbol_catalog();
    let commands = data::command_catalog();

    let mut imported = 0;
    let mut import_error = None;
    if let Some(path) = external {
        match import::import_file(path) {
            Ok(pairs) => {
                imported = pairs.len();
                symbols = import::merge_symbols(&symbols, &pairs);
            }
            Err(err) => import_error = Some(err),
        }
    }

    let forward = ForwardTable::new(compile::resolve(&symbols, &commands));
    let reverse = ReverseTable::build(data::REVERSE_BASELINE)?;
    let code = render_maps(&forward, &reverse);

    Ok(Generated {
        code,
        forward_entries: forward.len(),
        reverse_entries: reverse.len(),
        imported,
        import_error,
    })
}
