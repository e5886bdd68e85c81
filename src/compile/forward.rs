//! Forward Table Builder
//!
//! Wraps the resolved namespace and materializes the runtime-initialized
//! `mitex_spec::CommandSpec` the downstream translator constructs once at
//! startup. The emitted `maps.rs` reconstructs the same value; building it
//! here too lets the generator be tested against the real spec types.

use std::collections::BTreeMap;

use fxhash::FxHashMap;
use mitex_spec::{ArgPattern, ArgShape, CmdShape, CommandSpec, CommandSpecItem, ContextFeature, EnvShape};

use crate::compile::resolve::ForwardEntry;
use crate::data::{RESERVED_CITE_ALIAS, RESERVED_CITE_COMMAND, STRUCTURAL_ENVIRONMENT};

/// Compiled forward table: one entry per name, lexicographic iteration,
/// structural entries injected last.
#[derive(Debug, Clone)]
pub struct ForwardTable {
    entries: BTreeMap<String, ForwardEntry>,
}

impl ForwardTable {
    pub fn new(entries: BTreeMap<String, ForwardEntry>) -> Self {
        Self { entries }
    }

    /// Catalog-derived entries in lexicographic name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ForwardEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&ForwardEntry> {
        self.entries.get(name)
    }

    /// Number of catalog-derived entries (structural entries excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialize the command specification the translator initializes at
    /// startup: every catalog-derived entry plus the structural entries.
    pub fn command_spec(&self) -> CommandSpec {
        let mut m = FxHashMap::default();

        for (name, entry) in &self.entries {
            let shape = match entry {
                ForwardEntry::Alias { target } => CmdShape {
                    args: ArgShape::Right {
                        pattern: ArgPattern::None,
                    },
                    alias: Some(target.clone()),
                },
                ForwardEntry::Arity { argc } => CmdShape {
                    args: ArgShape::Right {
                        pattern: ArgPattern::FixedLenTerm { len: (*argc).into() },
                    },
                    alias: None,
                },
            };
            m.insert(name.clone(), CommandSpecItem::Cmd(shape));
        }

        // Structural entries the translator requires, never catalog-derived
        m.insert(
            RESERVED_CITE_COMMAND.to_string(),
            CommandSpecItem::Cmd(CmdShape {
                args: ArgShape::Right {
                    pattern: ArgPattern::FixedLenTerm { len: 1 },
                },
                alias: Some(RESERVED_CITE_ALIAS.to_string()),
            }),
        );
        m.insert(
            STRUCTURAL_ENVIRONMENT.to_string(),
            CommandSpecItem::Env(EnvShape {
                args: ArgPattern::None,
                ctx_feature: ContextFeature::None,
                alias: None,
            }),
        );

        CommandSpec::new(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, ForwardEntry)]) -> ForwardTable {
        ForwardTable::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_spec_contains_alias_and_arity_entries() {
        let table = table(&[
            (
                "alpha",
                ForwardEntry::Alias {
                    target: "alpha".to_string(),
                },
            ),
            ("frac", ForwardEntry::Arity { argc: 2 }),
        ]);
        let spec = table.command_spec();

        match spec.get("alpha") {
            Some(CommandSpecItem::Cmd(shape)) => {
                assert_eq!(shape.alias.as_deref(), Some("alpha"));
            }
            _ => panic!("expected alias entry for alpha"),
        }
        match spec.get("frac") {
            Some(CommandSpecItem::Cmd(shape)) => assert!(shape.alias.is_none()),
            _ => panic!("expected arity entry for frac"),
        }
    }

    #[test]
    fn test_spec_injects_structural_entries() {
        let spec = table(&[]).command_spec();

        match spec.get(RESERVED_CITE_COMMAND) {
            Some(CommandSpecItem::Cmd(shape)) => {
                assert_eq!(shape.alias.as_deref(), Some(RESERVED_CITE_ALIAS));
            }
            _ => panic!("expected injected typstcite entry"),
        }
        assert!(matches!(
            spec.get(STRUCTURAL_ENVIRONMENT),
            Some(CommandSpecItem::Env(_))
        ));
    }

    #[test]
    fn test_catalog_iteration_excludes_structural_entries() {
        let table = table(&[("frac", ForwardEntry::Arity { argc: 2 })]);
        assert_eq!(table.len(), 1);
        let names: Vec<_> = table.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["frac"]);
    }
}
