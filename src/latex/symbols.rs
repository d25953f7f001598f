//! Unicode math symbol to LaTeX macro substitution.

/// Symbol mapping table, in application order.
const UNICODE_TO_LATEX: &[(char, &str)] = &[
    // Superscripts and subscripts
    ('²', "^{2}"),
    ('³', "^{3}"),
    ('₁', "_{1}"),
    ('₂', "_{2}"),
    // Big operators and constants
    ('π', "\\pi"),
    ('∑', "\\sum"),
    ('∫', "\\int"),
    ('∞', "\\infty"),
    // Arithmetic
    ('×', "\\times"),
    ('÷', "\\div"),
    ('±', "\\pm"),
    ('∈', "\\in"),
    ('√', "\\sqrt"),
    // Relations
    ('≠', "\\neq"),
    ('≤', "\\leq"),
    ('≥', "\\geq"),
    ('∝', "\\propto"),
    // Quantifiers and sets
    ('∀', "\\forall"),
    ('∃', "\\exists"),
    ('∅', "\\emptyset"),
    ('∉', "\\notin"),
    ('∩', "\\cap"),
    ('∪', "\\cup"),
    // Logic
    ('∧', "\\land"),
    ('∨', "\\lor"),
    ('¬', "\\lnot"),
    ('⇒', "\\Rightarrow"),
    ('⇔', "\\Leftrightarrow"),
];

/// Ordered mapping from single Unicode characters to LaTeX macros.
///
/// Matching is literal and per character. Nothing else in the text is
/// escaped, so `%`, `&` or `_` pass through untouched.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTable {
    entries: &'static [(char, &'static str)],
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SymbolTable {
    /// The built-in table.
    pub const fn standard() -> Self {
        Self {
            entries: UNICODE_TO_LATEX,
        }
    }

    /// Looks up the macro for a symbol.
    pub fn lookup(&self, symbol: char) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == symbol)
            .map(|(_, latex)| *latex)
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every table symbol with its macro plus one trailing space.
    ///
    /// The space keeps a following letter from fusing into the macro name
    /// (`πr` becomes `\pi r`, not `\pir`).
    pub fn substitute(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (symbol, latex) in self.iter() {
            if result.contains(symbol) {
                result = result.replace(symbol, &format!("{latex} "));
            }
        }
        result
    }
}

/// Replaces Unicode math symbols using the built-in table.
///
/// # Example
///
/// ```
/// use pastex::latex::symbols::substitute_symbols;
///
/// assert_eq!(substitute_symbols("2πr"), "2\\pi r");
/// assert_eq!(substitute_symbols("a ≤ b"), "a \\leq  b");
/// ```
pub fn substitute_symbols(text: &str) -> String {
    SymbolTable::standard().substitute(text)
}
