//! Code Emitter
//!
//! Serializes the compiled forward and reverse tables into the `maps.rs`
//! source text. Ordering and formatting are stable, so unchanged catalogs
//! reproduce a byte-identical artifact. Token escaping is total: any
//! backslash or quote survives the round trip through the emitted literal.

use crate::compile::forward::ForwardTable;
use crate::compile::resolve::ForwardEntry;
use crate::compile::reverse::ReverseTable;
use crate::data::{RESERVED_CITE_ALIAS, RESERVED_CITE_COMMAND, STRUCTURAL_ENVIRONMENT};

/// Escape a token for use inside a double-quoted Rust string literal.
pub fn escape_token(token: &str) -> String {
    token.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the complete generated source file.
pub fn render_maps(forward: &ForwardTable, reverse: &ReverseTable) -> String {
    let mut lines: Vec<String> = vec![
        "// Generated by gen-maps".to_string(),
        "// This file contains static symbol mappings from tex2typst project".to_string(),
        "// Do not edit manually - regenerate using: cargo run --bin gen-maps".to_string(),
        String::new(),
        "use mitex_spec::{CommandSpec, CommandSpecItem, CmdShape, ArgShape, ArgPattern};"
            .to_string(),
        "use fxhash::FxHashMap;".to_string(),
        "use lazy_static::lazy_static;".to_string(),
        "use phf::phf_map;".to_string(),
        String::new(),
    ];

    emit_forward(&mut lines, forward);
    lines.push(String::new());
    emit_reverse(&mut lines, reverse);

    let mut code = lines.join("\n");
    code.push('\n');
    code
}

/// Emit the lazy_static TEX_COMMAND_SPEC block. CommandSpec holds owned
/// strings, so the consumer pays the construction cost once at startup.
fn emit_forward(lines: &mut Vec<String>, forward: &ForwardTable) {
    lines.extend(
        [
            "// =============================================================================",
            "// TEX_COMMAND_SPEC: Runtime-constructed CommandSpec for mitex parser",
            "// Uses lazy_static because CommandSpec requires runtime construction",
            "// =============================================================================",
            "",
            "lazy_static! {",
            "    /// LaTeX command specification for Mitex",
            "    pub static ref TEX_COMMAND_SPEC: CommandSpec = {",
            "        let mut m = FxHashMap::default();",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    for (name, entry) in forward.entries() {
        let name_esc = escape_token(name);
        lines.push(format!(
            "        m.insert(\"{}\".to_string(), CommandSpecItem::Cmd(CmdShape {{",
            name_esc
        ));
        match entry {
            ForwardEntry::Alias { target } => {
                lines.push(
                    "            args: ArgShape::Right { pattern: ArgPattern::None },".to_string(),
                );
                lines.push(format!(
                    "            alias: Some(\"{}\".to_string()),",
                    escape_token(target)
                ));
            }
            ForwardEntry::Arity { argc } => {
                lines.push(format!(
                    "            args: ArgShape::Right {{ pattern: ArgPattern::FixedLenTerm {{ len: {} }} }},",
                    argc
                ));
                lines.push("            alias: None,".to_string());
            }
        }
        lines.push("        }));".to_string());
    }

    // Structural entries required by the translator, appended last
    lines.push(format!(
        "        m.insert(\"{}\".to_string(), CommandSpecItem::Cmd(CmdShape {{",
        RESERVED_CITE_COMMAND
    ));
    lines.push(
        "            args: ArgShape::Right { pattern: ArgPattern::FixedLenTerm { len: 1 } },"
            .to_string(),
    );
    lines.push(format!(
        "            alias: Some(\"{}\".to_string()),",
        RESERVED_CITE_ALIAS
    ));
    lines.push("        }));".to_string());

    lines.push(format!(
        "        m.insert(\"{}\".to_string(), CommandSpecItem::Env(mitex_spec::EnvShape {{",
        STRUCTURAL_ENVIRONMENT
    ));
    lines.push("            args: ArgPattern::None,".to_string());
    lines.push("            ctx_feature: mitex_spec::ContextFeature::None,".to_string());
    lines.push("            alias: None,".to_string());
    lines.push("        }));".to_string());

    lines.extend(
        ["", "        CommandSpec::new(m)", "    };", "}"]
            .iter()
            .map(|s| s.to_string()),
    );
}

/// Emit the phf TYPST_TO_TEX map: compile-time perfect hash, zero runtime
/// initialization cost in the consumer.
fn emit_reverse(lines: &mut Vec<String>, reverse: &ReverseTable) {
    lines.extend(
        [
            "// =============================================================================",
            "// TYPST_TO_TEX: Compile-time perfect hash map for Typst -> LaTeX conversion",
            "// Uses phf for O(1) lookup with zero runtime initialization cost",
            "// =============================================================================",
            "",
            "/// Typst to LaTeX symbol mapping (compile-time perfect hash)",
            "pub static TYPST_TO_TEX: phf::Map<&'static str, &'static str> = phf_map! {",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    for (key, value) in reverse.entries() {
        lines.push(format!(
            "    \"{}\" => \"{}\",",
            escape_token(key),
            escape_token(value)
        ));
    }

    lines.push("};".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn small_tables() -> (ForwardTable, ReverseTable) {
        let mut entries = BTreeMap::new();
        entries.insert(
            "alpha".to_string(),
            ForwardEntry::Alias {
                target: "alpha".to_string(),
            },
        );
        entries.insert("frac".to_string(), ForwardEntry::Arity { argc: 2 });
        let reverse = ReverseTable::build(&[("alpha", "alpha")]).unwrap();
        (ForwardTable::new(entries), reverse)
    }

    #[test]
    fn test_escape_token_handles_backslash_and_quote() {
        assert_eq!(escape_token(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_token("plain"), "plain");
        assert_eq!(escape_token(""), "");
    }

    #[test]
    fn test_render_contains_both_declarations() {
        let (forward, reverse) = small_tables();
        let code = render_maps(&forward, &reverse);
        assert!(code.contains("pub static ref TEX_COMMAND_SPEC: CommandSpec"));
        assert!(code.contains("pub static TYPST_TO_TEX: phf::Map<&'static str, &'static str>"));
        assert!(code.contains("ArgPattern::FixedLenTerm { len: 2 }"));
        assert!(code.contains("alias: Some(\"alpha\".to_string()),"));
        assert!(code.contains("\"alpha\" => \"alpha\","));
    }

    #[test]
    fn test_structural_entries_come_after_catalog_entries() {
        let (forward, reverse) = small_tables();
        let code = render_maps(&forward, &reverse);
        let frac = code.find("\"frac\"").unwrap();
        let cite = code.find("\"typstcite\"").unwrap();
        let env = code.find("\"aligned\"").unwrap();
        assert!(frac < cite);
        assert!(cite < env);
        assert!(code.contains("__typstcite__"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let (forward, reverse) = small_tables();
        assert_eq!(
            render_maps(&forward, &reverse),
            render_maps(&forward, &reverse)
        );
    }
}
