/// Fixed finite set of input symbols shared by every automaton the engine
/// compares. Symbol order fixes the column layout of transition tables and
/// the iteration order of signatures; it carries no language meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<String>,
}

impl Alphabet {
    pub fn new(symbols: Vec<String>) -> Self {
        assert!(!symbols.is_empty());
        for (i, s) in symbols.iter().enumerate() {
            assert!(!symbols[..i].contains(s), "duplicate symbol '{}'", s);
        }
        Alphabet { symbols }
    }

    pub fn from_strs(symbols: &[&str]) -> Self {
        Self::new(symbols.iter().map(|s| s.to_string()).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn symbol(&self, index: usize) -> &str {
        &self.symbols[index]
    }

    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    #[inline]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}
