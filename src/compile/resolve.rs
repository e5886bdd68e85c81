//! Precedence Resolver - merges the Symbol and Command Arity catalogs
//!
//! Both catalogs share one forward namespace. When a name is declared in
//! both (accents like `hat` are a plain substitution and a 1-argument
//! command), the arity declaration wins and the alias is discarded.
//! Resolution is total: it never fails, it only filters.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::data::{RESERVED_CITE_COMMAND, STRUCTURAL_ENVIRONMENT};

/// Compiled forward entry: exactly one variant per resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardEntry {
    /// Direct token substitution, takes no arguments
    Alias { target: String },
    /// Fixed-arity command, arguments handled by the parser
    Arity { argc: u8 },
}

/// Merge the Symbol Catalog and the Command Arity Catalog into one
/// namespace, lexicographically ordered.
///
/// Filtering rules:
/// - empty names and empty alias targets mean "no mapping" and are dropped
/// - zero arities are dropped (the catalogs forbid them; a zero-argument
///   command is a symbol)
/// - the reserved structural names are never catalog-derived and are
///   dropped here so the injected entries cannot be overridden
pub fn resolve(
    symbols: &IndexMap<String, String>,
    commands: &IndexMap<String, u8>,
) -> BTreeMap<String, ForwardEntry> {
    let mut resolved = BTreeMap::new();

    for (name, target) in symbols {
        if name.is_empty() || target.is_empty() || is_reserved(name) {
            continue;
        }
        resolved.insert(
            name.clone(),
            ForwardEntry::Alias {
                target: target.clone(),
            },
        );
    }

    // Arity declarations win over same-named aliases
    for (name, argc) in commands {
        if name.is_empty() || *argc == 0 || is_reserved(name) {
            continue;
        }
        resolved.insert(name.clone(), ForwardEntry::Arity { argc: *argc });
    }

    resolved
}

fn is_reserved(name: &str) -> bool {
    name == RESERVED_CITE_COMMAND || name == STRUCTURAL_ENVIRONMENT
}
