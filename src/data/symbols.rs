//! Symbol Catalog - zero-argument LaTeX command → Typst token pairs
//!
//! Curated baseline extracted from the tex2typst project and embedded here
//! for independence. Keys must be unique; an empty key or value means
//! "no mapping" and is filtered during resolution.

/// Embedded Symbol Catalog baseline (LaTeX command name, without backslash,
/// to Typst token).
pub static SYMBOL_BASELINE: &[(&str, &str)] = &[
    // Greek lowercase
    ("alpha", "alpha"),
    ("beta", "beta"),
    ("gamma", "gamma"),
    ("delta", "delta"),
    ("epsilon", "epsilon"),
    ("varepsilon", "epsilon.alt"),
    ("zeta", "zeta"),
    ("eta", "eta"),
    ("theta", "theta"),
    ("vartheta", "theta.alt"),
    ("iota", "iota"),
    ("kappa", "kappa"),
    ("lambda", "lambda"),
    ("mu", "mu"),
    ("nu", "nu"),
    ("xi", "xi"),
    ("pi", "pi"),
    ("varpi", "pi.alt"),
    ("rho", "rho"),
    ("varrho", "rho.alt"),
    ("sigma", "sigma"),
    ("varsigma", "sigma.alt"),
    ("tau", "tau"),
    ("upsilon", "upsilon"),
    ("phi", "phi.alt"),
    ("varphi", "phi"),
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
    // Binary operators
    ("pm", "plus.minus"),
    ("mp", "minus.plus"),
    ("times", "times"),
    ("div", "div"),
    ("cdot", "dot.op"),
    ("ast", "ast"),
    ("star", "star"),
    ("circ", "circle.small"),
    ("bullet", "bullet"),
    ("oplus", "plus.circle"),
    ("ominus", "minus.circle"),
    ("otimes", "times.circle"),
    ("oslash", "divides.circle"),
    ("odot", "dot.circle"),
    ("cap", "sect"),
    ("cup", "union"),
    ("sqcap", "sect.sq"),
    ("sqcup", "union.sq"),
    ("vee", "or"),
    ("wedge", "and"),
    ("setminus", "without"),
    ("wr", "wreath"),
    ("diamond", "diamond"),
    ("bigtriangleup", "triangle.t"),
    ("bigtriangledown", "triangle.b"),
    ("triangleleft", "triangle.l"),
    ("triangleright", "triangle.r"),
    ("lhd", "triangle.l"),
    ("rhd", "triangle.r"),
    ("unlhd", "triangle.l.eq"),
    ("unrhd", "triangle.r.eq"),
    ("amalg", "product.co"),
    ("dagger", "dagger"),
    ("ddagger", "dagger.double"),
    // Relations
    ("leq", "lt.eq"),
    ("le", "lt.eq"),
    ("geq", "gt.eq"),
    ("ge", "gt.eq"),
    ("prec", "prec"),
    ("succ", "succ"),
    ("preceq", "prec.eq"),
    ("succeq", "succ.eq"),
    ("ll", "lt.double"),
    ("gg", "gt.double"),
    ("subset", "subset"),
    ("supset", "supset"),
    ("subseteq", "subset.eq"),
    ("supseteq", "supset.eq"),
    ("sqsubset", "subset.sq"),
    ("sqsupset", "supset.sq"),
    ("sqsubseteq", "subset.sq.eq"),
    ("sqsupseteq", "supset.sq.eq"),
    ("in", "in"),
    ("ni", "in.rev"),
    ("notin", "in.not"),
    ("vdash", "tack.r"),
    ("dashv", "tack.l"),
    ("models", "models"),
    ("smile", "smile"),
    ("frown", "frown"),
    ("mid", "divides"),
    ("parallel", "parallel"),
    ("perp", "perp"),
    ("equiv", "equiv"),
    ("sim", "tilde.op"),
    ("simeq", "tilde.eq"),
    ("asymp", "asymp"),
    ("approx", "approx"),
    ("cong", "tilde.equiv"),
    ("neq", "eq.not"),
    ("ne", "eq.not"),
    ("doteq", "eq.dot"),
    ("propto", "prop"),
    // Arrows
    ("leftarrow", "arrow.l"),
    ("rightarrow", "arrow.r"),
    ("to", "arrow.r"),
    ("leftrightarrow", "arrow.l.r"),
    ("Leftarrow", "arrow.l.double"),
    ("Rightarrow", "arrow.r.double"),
    ("Leftrightarrow", "arrow.l.r.double"),
    ("mapsto", "arrow.r.bar"),
    ("hookleftarrow", "arrow.l.hook"),
    ("hookrightarrow", "arrow.r.hook"),
    ("leftharpoonup", "harpoon.lt"),
    ("leftharpoondown", "harpoon.lb"),
    ("rightharpoonup", "harpoon.rt"),
    ("rightharpoondown", "harpoon.rb"),
    ("uparrow", "arrow.t"),
    ("downarrow", "arrow.b"),
    ("updownarrow", "arrow.t.b"),
    ("Uparrow", "arrow.t.double"),
    ("Downarrow", "arrow.b.double"),
    ("Updownarrow", "arrow.t.b.double"),
    ("nearrow", "arrow.tr"),
    ("searrow", "arrow.br"),
    ("swarrow", "arrow.bl"),
    ("nwarrow", "arrow.tl"),
    ("leadsto", "arrow.r.squiggly"),
    ("longleftarrow", "arrow.l.long"),
    ("longrightarrow", "arrow.r.long"),
    ("longleftrightarrow", "arrow.l.r.long"),
    ("Longleftarrow", "arrow.l.double.long"),
    ("Longrightarrow", "arrow.r.double.long"),
    ("Longleftrightarrow", "arrow.l.r.double.long"),
    ("longmapsto", "arrow.r.long.bar"),
    ("iff", "arrow.l.r.double.long"),
    // Misc symbols
    ("infty", "infinity"),
    ("forall", "forall"),
    ("exists", "exists"),
    ("nexists", "exists.not"),
    ("neg", "not"),
    ("lnot", "not"),
    ("emptyset", "emptyset"),
    ("varnothing", "nothing"),
    ("nabla", "nabla"),
    ("partial", "diff"),
    ("surd", "sqrt"),
    ("top", "top"),
    ("bot", "bot"),
    ("angle", "angle"),
    ("triangle", "triangle.t"),
    ("backslash", "backslash"),
    ("prime", "prime"),
    ("flat", "flat"),
    ("natural", "natural"),
    ("sharp", "sharp"),
    ("ell", "ell"),
    ("hbar", "planck.reduce"),
    ("imath", "dotless.i"),
    ("jmath", "dotless.j"),
    ("wp", "weierstrass"),
    ("Re", "Re"),
    ("Im", "Im"),
    ("aleph", "aleph"),
    ("beth", "beth"),
    ("gimel", "gimel"),
    // Dots
    ("ldots", "dots.h"),
    ("cdots", "dots.c"),
    ("vdots", "dots.v"),
    ("ddots", "dots.down"),
    ("dots", "dots"),
    ("dotsc", "dots.c"),
    ("dotsb", "dots.c"),
    ("dotsm", "dots.c"),
    // Delimiters
    ("langle", "angle.l"),
    ("rangle", "angle.r"),
    ("lceil", "ceil.l"),
    ("rceil", "ceil.r"),
    ("lfloor", "floor.l"),
    ("rfloor", "floor.r"),
    ("lbrace", "brace.l"),
    ("rbrace", "brace.r"),
    ("lvert", "bar.v"),
    ("rvert", "bar.v"),
    ("lVert", "bar.v.double"),
    ("rVert", "bar.v.double"),
    // Big operators
    ("sum", "sum"),
    ("prod", "product"),
    ("coprod", "product.co"),
    ("int", "integral"),
    ("iint", "integral.double"),
    ("iiint", "integral.triple"),
    ("oint", "integral.cont"),
    ("bigcap", "sect.big"),
    ("bigcup", "union.big"),
    ("bigsqcup", "union.sq.big"),
    ("bigvee", "or.big"),
    ("bigwedge", "and.big"),
    ("bigoplus", "plus.circle.big"),
    ("bigotimes", "times.circle.big"),
    ("bigodot", "dot.circle.big"),
    // Functions
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("cot", "cot"),
    ("sec", "sec"),
    ("csc", "csc"),
    ("arcsin", "arcsin"),
    ("arccos", "arccos"),
    ("arctan", "arctan"),
    ("sinh", "sinh"),
    ("cosh", "cosh"),
    ("tanh", "tanh"),
    ("coth", "coth"),
    ("log", "log"),
    ("ln", "ln"),
    ("lg", "lg"),
    ("exp", "exp"),
    ("lim", "lim"),
    ("limsup", "limsup"),
    ("liminf", "liminf"),
    ("sup", "sup"),
    ("inf", "inf"),
    ("min", "min"),
    ("max", "max"),
    ("arg", "arg"),
    ("det", "det"),
    ("dim", "dim"),
    ("gcd", "gcd"),
    ("hom", "hom"),
    ("ker", "ker"),
    ("Pr", "Pr"),
    ("deg", "deg"),
    // Spacing
    ("displaystyle", "display"),
    ("textstyle", "inline"),
    ("hspace", "#h"),
    (",", "thin"),
    (":", "med"),
    (";", "thick"),
    (">", "med"),
    (" ", "med"),
    ("~", "space.nobreak"),
    // Accents and modifiers (the arity catalog overrides these when used
    // with an argument)
    ("hat", "hat"),
    ("widehat", "hat"),
    ("check", "caron"),
    ("tilde", "tilde"),
    ("widetilde", "tilde"),
    ("acute", "acute"),
    ("grave", "grave"),
    ("dot", "dot"),
    ("ddot", "dot.double"),
    ("dddot", "dot.triple"),
    ("breve", "breve"),
    ("bar", "macron"),
    ("vec", "arrow"),
    ("overline", "overline"),
    ("underline", "underline"),
    ("overbrace", "overbrace"),
    ("underbrace", "underbrace"),
    // Misc
    ("|", "bar.v.double"),
    ("blacktriangleleft", "triangle.filled.l"),
    ("blacktriangleright", "triangle.filled.r"),
    ("square", "square"),
    ("blacksquare", "square.filled"),
    ("lozenge", "lozenge"),
    ("blacklozenge", "lozenge.filled"),
    ("clubsuit", "suit.club"),
    ("diamondsuit", "suit.diamond"),
    ("heartsuit", "suit.heart"),
    ("spadesuit", "suit.spade"),
];
