//! Data layer - the three embedded catalogs
//!
//! This module holds the curated static tables the generator compiles:
//! - Symbol Catalog (zero-argument LaTeX → Typst aliases)
//! - Command Arity Catalog (commands with required arguments)
//! - Reverse Catalog (Typst → LaTeX)
//!
//! The slices are the authored form; `symbol_catalog`/`command_catalog`
//! load them into key-unique, insertion-ordered maps for the compiler.

pub mod commands;
pub mod reverse;
pub mod symbols;

use indexmap::IndexMap;

pub use commands::COMMAND_ARITIES;
pub use reverse::REVERSE_BASELINE;
pub use symbols::SYMBOL_BASELINE;

/// Name of the citation command injected for the downstream translator.
pub const RESERVED_CITE_COMMAND: &str = "typstcite";

/// Reserved internal alias the injected citation command is bound to.
pub const RESERVED_CITE_ALIAS: &str = "__typstcite__";

/// Zero-argument environment the downstream translator requires.
pub const STRUCTURAL_ENVIRONMENT: &str = "aligned";

/// Load the embedded Symbol Catalog into a key-unique map.
pub fn symbol_catalog() -> IndexMap<String, String> {
    SYMBOL_BASELINE
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Load the embedded Command Arity Catalog into a key-unique map.
pub fn command_catalog() -> IndexMap<String, u8> {
    COMMAND_ARITIES
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_catalog_is_key_unique() {
        // collect() on IndexMap keeps the last value for a duplicate key,
        // so equal lengths prove the slice had no duplicates
        assert_eq!(symbol_catalog().len(), SYMBOL_BASELINE.len());
    }

    #[test]
    fn test_command_catalog_is_key_unique() {
        assert_eq!(command_catalog().len(), COMMAND_ARITIES.len());
    }

    #[test]
    fn test_reserved_names_are_not_catalog_derived() {
        let symbols = symbol_catalog();
        let commands = command_catalog();
        for name in [RESERVED_CITE_COMMAND, STRUCTURAL_ENVIRONMENT] {
            assert!(!symbols.contains_key(name));
            assert!(!commands.contains_key(name));
        }
    }

    #[test]
    fn test_accents_are_declared_both_ways() {
        // overlap between the two catalogs is deliberate for accents
        let symbols = symbol_catalog();
        let commands = command_catalog();
        for accent in ["hat", "tilde", "bar", "vec", "dot"] {
            assert!(symbols.contains_key(accent), "{} missing alias", accent);
            assert!(commands.contains_key(accent), "{} missing arity", accent);
        }
    }
}
