//! Reverse Catalog - Typst token → LaTeX command pairs
//!
//! An independent catalog for the Typst → LaTeX direction; it is not the
//! inverse of the Symbol Catalog (many LaTeX spellings collapse onto one
//! Typst token, so the reverse direction picks a canonical spelling).
//! Duplicate keys with differing values are a fatal configuration error
//! caught by the reverse table builder.

/// Embedded Reverse Catalog baseline.
pub static REVERSE_BASELINE: &[(&str, &str)] = &[
    // Greek lowercase
    ("alpha", "alpha"),
    ("beta", "beta"),
    ("gamma", "gamma"),
    ("delta", "delta"),
    ("epsilon", "epsilon"),
    ("epsilon.alt", "varepsilon"),
    ("zeta", "zeta"),
    ("eta", "eta"),
    ("theta", "theta"),
    ("theta.alt", "vartheta"),
    ("iota", "iota"),
    ("kappa", "kappa"),
    ("lambda", "lambda"),
    ("mu", "mu"),
    ("nu", "nu"),
    ("xi", "xi"),
    ("pi", "pi"),
    ("pi.alt", "varpi"),
    ("rho", "rho"),
    ("rho.alt", "varrho"),
    ("sigma", "sigma"),
    ("sigma.alt", "varsigma"),
    ("tau", "tau"),
    ("upsilon", "upsilon"),
    ("phi", "varphi"),
    ("phi.alt", "phi"),
    ("chi", "chi"),
    ("psi", "psi"),
    ("omega", "omega"),
    // Greek uppercase
    ("Gamma", "Gamma"),
    ("Delta", "Delta"),
    ("Theta", "Theta"),
    ("Lambda", "Lambda"),
    ("Xi", "Xi"),
    ("Pi", "Pi"),
    ("Sigma", "Sigma"),
    ("Upsilon", "Upsilon"),
    ("Phi", "Phi"),
    ("Psi", "Psi"),
    ("Omega", "Omega"),
    // Operators
    ("plus.minus", "pm"),
    ("minus.plus", "mp"),
    ("times", "times"),
    ("div", "div"),
    ("dot.op", "cdot"),
    ("sect", "cap"),
    ("union", "cup"),
    ("lt.eq", "leq"),
    ("gt.eq", "geq"),
    ("eq.not", "neq"),
    ("approx", "approx"),
    ("equiv", "equiv"),
    ("tilde.op", "sim"),
    ("subset", "subset"),
    ("supset", "supset"),
    ("subset.eq", "subseteq"),
    ("supset.eq", "supseteq"),
    ("in", "in"),
    ("in.not", "notin"),
    ("forall", "forall"),
    ("exists", "exists"),
    ("not", "neg"),
    // Arrows
    ("arrow.r", "rightarrow"),
    ("arrow.l", "leftarrow"),
    ("arrow.l.r", "leftrightarrow"),
    ("arrow.r.double", "Rightarrow"),
    ("arrow.l.double", "Leftarrow"),
    ("arrow.l.r.double", "Leftrightarrow"),
    // Misc
    ("infinity", "infty"),
    ("emptyset", "emptyset"),
    ("diff", "partial"),
    ("nabla", "nabla"),
    ("sum", "sum"),
    ("product", "prod"),
    ("integral", "int"),
    // Functions
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("log", "log"),
    ("ln", "ln"),
    ("exp", "exp"),
    ("lim", "lim"),
    ("max", "max"),
    ("min", "min"),
    // Dots
    ("dots.h", "ldots"),
    ("dots.c", "cdots"),
    ("dots.v", "vdots"),
    // Special
    ("oo", "infty"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_no_conflicting_baseline_entries() {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (key, value) in REVERSE_BASELINE {
            if let Some(prev) = seen.insert(key, value) {
                assert_eq!(
                    prev, *value,
                    "reverse key {:?} maps to both {:?} and {:?}",
                    key, prev, value
                );
            }
        }
    }
}
