//! Symbol alphabet: the ordered set of pegs available in a round.

use std::fmt;

use crate::config::ConfigError;

/// A single peg symbol (color name, emoji, or any other token).
///
/// Symbols are opaque and compared only by equality; their cycling order
/// comes from the [`Alphabet`] they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty set of symbols for one round.
///
/// Order defines forward cycling in the guess editor. Duplicates are
/// rejected at construction: cycling past a repeated symbol would be
/// ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for (i, s) in symbols.iter().enumerate() {
            if symbols[..i].contains(s) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: s.as_str().to_string(),
                });
            }
        }
        Ok(Self { symbols })
    }

    /// Convenience constructor from string tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(tokens.into_iter().map(Symbol::new).collect())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First symbol in cycling order. The alphabet is never empty.
    pub fn first(&self) -> &Symbol {
        &self.symbols[0]
    }

    /// Next symbol after `current` in cycling order, wrapping to the first
    /// after the last. `None` if `current` is not in this alphabet.
    pub fn next_after(&self, current: &Symbol) -> Option<&Symbol> {
        let pos = self.symbols.iter().position(|s| s == current)?;
        Some(&self.symbols[(pos + 1) % self.symbols.len()])
    }
}
