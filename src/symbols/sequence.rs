//! Symbol and sequence types
//!
//! Text is handled as a sequence of integer codes. One code is reserved as
//! the end-of-sequence sentinel so real data can never be mistaken for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One token of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u32);

impl Symbol {
    /// End-of-sequence marker; orders after every other symbol
    pub const SENTINEL: Symbol = Symbol(u32::MAX);

    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    #[inline]
    pub fn code(self) -> u32 {
        self.0
    }
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol(b as u32)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c as u32)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "$")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An ordered, immutable list of symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    symbols: Vec<Symbol>,
}

impl Sequence {
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// One symbol per byte
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            symbols: bytes.iter().map(|&b| Symbol::from(b)).collect(),
        }
    }

    /// One symbol per Unicode scalar value
    pub fn from_chars(text: &str) -> Self {
        Self {
            symbols: text.chars().map(Symbol::from).collect(),
        }
    }

    /// Query followed by target, no separator
    pub fn concat(query: &Sequence, target: &Sequence) -> Self {
        let mut symbols = Vec::with_capacity(query.len() + target.len() + 1);
        symbols.extend_from_slice(&query.symbols);
        symbols.extend_from_slice(&target.symbols);
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn get(&self, i: usize) -> Option<Symbol> {
        self.symbols.get(i).copied()
    }

    /// True when the last symbol is the sentinel
    pub fn is_terminated(&self) -> bool {
        self.symbols.last().is_some_and(|s| s.is_sentinel())
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::from_chars(text)
    }
}

impl FromIterator<Symbol> for Sequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = Symbol;

    fn index(&self, i: usize) -> &Symbol {
        &self.symbols[i]
    }
}
