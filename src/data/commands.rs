//! Command Arity Catalog - commands that take required arguments
//!
//! Each entry is (command name, required argument count). Arities are
//! always positive: a zero-argument command is a symbol and belongs in the
//! Symbol Catalog instead. On a name collision the arity entry wins over
//! the symbol entry (accents like `hat` appear in both on purpose).

/// Embedded Command Arity Catalog baseline.
pub static COMMAND_ARITIES: &[(&str, u8)] = &[
    // Document structure (1 arg)
    ("part", 1),
    ("chapter", 1),
    ("section", 1),
    ("subsection", 1),
    ("subsubsection", 1),
    ("paragraph", 1),
    ("title", 1),
    ("author", 1),
    ("date", 1),
    ("caption", 1),
    ("label", 1),
    // Macro definitions (2 args)
    ("newcommand", 2),
    ("renewcommand", 2),
    ("providecommand", 2),
    ("DeclareMathOperator", 2),
    // Math formatting (1 arg)
    ("mathbf", 1),
    ("mathit", 1),
    ("mathrm", 1),
    ("mathcal", 1),
    ("mathbb", 1),
    ("mathfrak", 1),
    ("mathsf", 1),
    ("mathtt", 1),
    ("text", 1),
    ("textrm", 1),
    ("textbf", 1),
    ("textit", 1),
    ("texttt", 1),
    ("textsc", 1),
    ("emph", 1),
    ("boldsymbol", 1),
    ("bm", 1),
    // Accents (1 arg) - these override the symbol-only definitions
    ("hat", 1),
    ("widehat", 1),
    ("tilde", 1),
    ("widetilde", 1),
    ("bar", 1),
    ("overline", 1),
    ("underline", 1),
    ("vec", 1),
    ("dot", 1),
    ("ddot", 1),
    ("overbrace", 1),
    ("underbrace", 1),
    ("check", 1),
    ("acute", 1),
    ("grave", 1),
    ("breve", 1),
    // Limits and stacking (2 args)
    ("overset", 2),
    ("underset", 2),
    ("stackrel", 2),
    // Extensible arrows (1 arg, optional arg handled by the parser)
    ("xleftarrow", 1),
    ("xrightarrow", 1),
    ("xmapsto", 1),
    ("xleftrightarrow", 1),
    // Math classes (1 arg)
    ("mathrel", 1),
    ("mathbin", 1),
    ("mathop", 1),
    ("mathord", 1),
    ("mathopen", 1),
    ("mathclose", 1),
    ("mathpunct", 1),
    ("mathinner", 1),
    // Misc math (1 arg)
    ("pmod", 1),
    ("pod", 1),
    ("displaylines", 1),
    ("set", 1),
    ("Set", 1),
    ("sqrt", 1),
    ("not", 1),
    ("phantom", 1),
    ("cancel", 1),
    ("bcancel", 1),
    ("boxed", 1),
    ("fbox", 1),
    // Fractions and roots (2 args)
    ("frac", 2),
    ("dfrac", 2),
    ("tfrac", 2),
    ("cfrac", 2),
    ("binom", 2),
    // Colors (1-2 args)
    ("textcolor", 2),
    ("colorbox", 2),
    ("color", 1),
    // Links (1-2 args)
    ("url", 1),
    ("href", 2),
    // References (1 arg)
    ("ref", 1),
    ("eqref", 1),
    ("autoref", 1),
    ("pageref", 1),
    ("cref", 1),
    ("Cref", 1),
    // Footnote (1 arg)
    ("footnote", 1),
    // Citations (1 arg)
    ("cite", 1),
    ("citep", 1),
    ("citet", 1),
    ("autocite", 1),
    ("textcite", 1),
    ("parencite", 1),
    ("footcite", 1),
    // Acronyms and glossaries (1 arg usage, 2-3 args definition)
    ("ac", 1),
    ("gls", 1),
    ("Gls", 1),
    ("acrshort", 1),
    ("acrlong", 1),
    ("acrfull", 1),
    ("Acs", 1),
    ("Acl", 1),
    ("Acf", 1),
    ("newacronym", 3),
    ("newglossaryentry", 2),
];
