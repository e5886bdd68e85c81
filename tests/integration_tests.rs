//! Integration tests for the mapping generator pipeline

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pretty_assertions::assert_eq;
use tylax_mapgen::{
    compare_case, data, escape_token, generate, harness::Backend, harness::BackendRun, import,
    render_maps, ForwardEntry, ForwardTable, GenError, ReverseTable,
};

// ============================================================================
// Generation pipeline
// ============================================================================

mod generation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identical_catalogs_yield_byte_identical_output() {
        let first = generate(None).unwrap().code;
        let second = generate(None).unwrap().code;
        assert_eq!(first, second);
    }

    #[test]
    fn test_alias_and_arity_compile_independently() {
        let symbols = [("alpha", "alpha")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let commands = [("frac", 2u8)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();

        let resolved = tylax_mapgen::compile::resolve(&symbols, &commands);
        assert_eq!(resolved.len(), 2);
        assert_eq!(
            resolved["alpha"],
            ForwardEntry::Alias {
                target: "alpha".to_string()
            }
        );
        assert_eq!(resolved["frac"], ForwardEntry::Arity { argc: 2 });
    }

    #[test]
    fn test_arity_declaration_beats_alias_in_full_pipeline() {
        // `hat` is declared both as a plain substitution and a 1-argument
        // accent; the compiled artifact must carry only the arity form
        let generated = generate(None).unwrap();
        let hat_entry = generated
            .code
            .lines()
            .skip_while(|line| !line.contains("m.insert(\"hat\".to_string()"))
            .take(3)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(hat_entry.contains("FixedLenTerm { len: 1 }"));
        assert!(hat_entry.contains("alias: None"));
    }

    #[test]
    fn test_emitted_code_contains_both_declarations() {
        let code = generate(None).unwrap().code;
        assert!(code.contains("pub static ref TEX_COMMAND_SPEC: CommandSpec"));
        assert!(code.contains("pub static TYPST_TO_TEX: phf::Map<&'static str, &'static str>"));
        // structural entries close the forward table
        assert!(code.contains("__typstcite__"));
        assert!(code.contains("m.insert(\"aligned\".to_string(), CommandSpecItem::Env"));
    }

    #[test]
    fn test_command_spec_materializes_for_the_translator() {
        use mitex_spec::CommandSpecItem;

        let symbols = data::symbol_catalog();
        let commands = data::command_catalog();
        let forward = ForwardTable::new(tylax_mapgen::compile::resolve(&symbols, &commands));
        let spec = forward.command_spec();

        match spec.get("alpha") {
            Some(CommandSpecItem::Cmd(shape)) => {
                assert_eq!(shape.alias.as_deref(), Some("alpha"))
            }
            _ => panic!("expected alias entry for alpha"),
        }
        match spec.get("frac") {
            Some(CommandSpecItem::Cmd(shape)) => assert!(shape.alias.is_none()),
            _ => panic!("expected arity entry for frac"),
        }
        assert!(matches!(
            spec.get("aligned"),
            Some(CommandSpecItem::Env(_))
        ));
    }
}

// ============================================================================
// Reverse table validation
// ============================================================================

mod reverse_table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conflicting_values_prevent_output() {
        let err = ReverseTable::build(&[("K", "X"), ("K", "Y")]).unwrap_err();
        assert!(matches!(err, GenError::ConfigurationConflict { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_identical_duplicate_compiles_to_single_entry() {
        let table = ReverseTable::build(&[("K", "X"), ("K", "X")]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("K"), Some("X"));
    }

    #[test]
    fn test_baseline_reverse_catalog_compiles() {
        let table = ReverseTable::build(data::REVERSE_BASELINE).unwrap();
        assert_eq!(table.get("arrow.r"), Some("rightarrow"));
        assert_eq!(table.get("oo"), Some("infty"));
    }
}

// ============================================================================
// Importer
// ============================================================================

mod importer {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_source(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mapgen_{}_{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_zero_match_import_leaves_catalog_at_baseline() {
        let path = temp_source("empty.ts", "// no tuple literals in here\n");
        let baseline = generate(None).unwrap();
        let degraded = generate(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(degraded.imported, 0);
        assert!(matches!(
            degraded.import_error,
            Some(GenError::ImportFailure { .. })
        ));
        assert_eq!(degraded.code, baseline.code);
    }

    #[test]
    fn test_imported_entries_overwrite_baseline() {
        let path = temp_source("override.ts", "['alpha', 'alpha.custom']\n");
        let generated = generate(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(generated.imported, 1);
        assert!(generated.import_error.is_none());
        assert!(generated.code.contains("alias: Some(\"alpha.custom\".to_string()),"));
    }

    #[test]
    fn test_missing_source_degrades_to_baseline() {
        let baseline = generate(None).unwrap();
        let degraded = generate(Some(Path::new("/no/such/map.ts"))).unwrap();
        assert_eq!(degraded.code, baseline.code);
    }

    #[test]
    fn test_merge_is_pure() {
        let baseline = data::symbol_catalog();
        let imported = import::extract_pairs("['alpha', 'changed']");
        let merged = import::merge_symbols(&baseline, &imported);
        assert_eq!(merged["alpha"], "changed");
        assert_eq!(baseline["alpha"], "alpha");
    }
}

// ============================================================================
// Escaping round trip
// ============================================================================

mod escaping {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Inverse of the emitter's escaping, as the Rust compiler would apply
    /// it to the emitted literal.
    fn unescape(escaped: &str) -> String {
        let mut out = String::with_capacity(escaped.len());
        let mut chars = escaped.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn test_round_trip_recovers_literal_value() {
        let token = r#"a"b\c"#;
        assert_eq!(unescape(&escape_token(token)), token);
    }

    #[test]
    fn test_escaping_is_total_over_awkward_input() {
        for token in ["", "\\", "\"", "\\\"\\", "plain", "dots.h", "\\\\"] {
            assert_eq!(unescape(&escape_token(token)), token);
        }
    }

    #[test]
    fn test_awkward_token_survives_emission() {
        let mut entries = BTreeMap::new();
        entries.insert(
            r#"a"b\c"#.to_string(),
            ForwardEntry::Alias {
                target: r#"x\y"z"#.to_string(),
            },
        );
        let forward = ForwardTable::new(entries);
        let reverse = ReverseTable::build(&[]).unwrap();
        let code = render_maps(&forward, &reverse);
        assert!(code.contains(r#"m.insert("a\"b\\c".to_string()"#));
        assert!(code.contains(r#"alias: Some("x\\y\"z".to_string()),"#));
    }
}

// ============================================================================
// Comparison harness
// ============================================================================

mod harness_cases {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FakeBackend {
        name: &'static str,
        output: String,
        elapsed: Duration,
    }

    impl Backend for FakeBackend {
        fn name(&self) -> &str {
            self.name
        }

        fn run(&self, _input: &str) -> BackendRun {
            BackendRun {
                output: self.output.clone(),
                elapsed: self.elapsed,
            }
        }
    }

    fn fake(name: &'static str, output: &str, millis: u64) -> FakeBackend {
        FakeBackend {
            name,
            output: output.to_string(),
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_character_identical_outputs_report_match() {
        let tylax = fake("tylax", "alpha + beta = gamma", 2);
        let pandoc = fake("pandoc", "alpha + beta = gamma", 40);
        let report = compare_case(&tylax, &pandoc, r"$\alpha + \beta = \gamma$");
        assert!(report.matched);
        assert!(report.speedup().unwrap() > 1.0);
    }

    #[test]
    fn test_trailing_whitespace_divergence_reports_mismatch() {
        let tylax = fake("tylax", "alpha + beta = gamma", 2);
        let pandoc = fake("pandoc", "alpha + beta = gamma\n", 40);
        let report = compare_case(&tylax, &pandoc, r"$\alpha + \beta = \gamma$");
        assert!(!report.matched);
    }

    #[test]
    fn test_failed_backend_reports_error_string_without_aborting() {
        let tylax = fake("tylax", "Error: timed out after 30s", 30000);
        let pandoc = fake("pandoc", "alpha", 40);
        let report = compare_case(&tylax, &pandoc, r"$\alpha$");
        assert!(report.left.is_error());
        assert!(!report.right.is_error());
        assert!(!report.matched);
    }
}
