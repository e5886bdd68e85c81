//! External Catalog Importer
//!
//! Pulls literal pairs out of an external mapping source (the tex2typst
//! `map.ts` file) so the Symbol Catalog can be refreshed from upstream.
//! Extraction is data-driven: an ordered list of patterns covering the
//! quoting conventions the source has used over time, tried in order with
//! last-write-wins. Every failure here is non-fatal; the caller falls back
//! to the embedded baseline.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::{GenError, GenResult};

lazy_static! {
    /// Literal-pair extraction patterns, tried in order. The source has
    /// shipped both single- and double-quoted tuple literals.
    static ref EXTRACTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\['([^']*)',\s*'([^']*)'\]").unwrap(),
        Regex::new(r#"\["([^"]*)",\s*"([^"]*)"\]"#).unwrap(),
    ];
}

/// Extract a key-unique mapping from source text. Empty keys or values are
/// skipped; a later match for the same key overwrites an earlier one.
pub fn extract_pairs(content: &str) -> IndexMap<String, String> {
    let mut pairs = IndexMap::new();
    for pattern in EXTRACTION_PATTERNS.iter() {
        for captures in pattern.captures_iter(content) {
            let key = &captures[1];
            let value = &captures[2];
            if !key.is_empty() && !value.is_empty() {
                pairs.insert(key.to_string(), value.to_string());
            }
        }
    }
    pairs
}

/// Read an external mapping source and extract its pairs.
///
/// A missing or unreadable file, or one yielding zero matches, is an
/// `ImportFailure`: reported, never fatal to compilation.
pub fn import_file(path: &Path) -> GenResult<IndexMap<String, String>> {
    let content = fs::read_to_string(path)
        .map_err(|err| GenError::import(format!("{}: {}", path.display(), err)))?;
    let pairs = extract_pairs(&content);
    if pairs.is_empty() {
        return Err(GenError::import(format!(
            "{}: no mapping pairs found",
            path.display()
        )));
    }
    Ok(pairs)
}

/// Merge imported pairs into a symbol catalog, returning a new map.
/// Imported entries overwrite same-named baseline entries; everything else
/// is untouched.
pub fn merge_symbols(
    baseline: &IndexMap<String, String>,
    imported: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = baseline.clone();
    for (key, value) in imported {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
