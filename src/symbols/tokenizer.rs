use super::sequence::{Sequence, Symbol};
use crate::error::{Result, TextSearchError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How text is split into symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenizeMode {
    /// One symbol per UTF-8 byte
    Bytes,
    /// One symbol per Unicode scalar value
    #[default]
    Chars,
    /// One symbol per whitespace-separated word
    Words,
}

/// Text split into display tokens plus their symbol codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    pub sequence: Sequence,
}

impl Tokenized {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizer with a shared word vocabulary
///
/// Tokenize the query and the target with the same instance so equal words
/// map to equal symbols.
#[derive(Debug, Default)]
pub struct Tokenizer {
    mode: TokenizeMode,
    vocab: FxHashMap<String, Symbol>,
}

impl Tokenizer {
    pub fn new(mode: TokenizeMode) -> Self {
        Self {
            mode,
            vocab: FxHashMap::default(),
        }
    }

    pub fn mode(&self) -> TokenizeMode {
        self.mode
    }

    /// Number of distinct words seen so far (always 0 outside word mode)
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn tokenize(&mut self, text: &str) -> Result<Tokenized> {
        match self.mode {
            TokenizeMode::Bytes => Ok(tokenize_raw(text.as_bytes())),
            TokenizeMode::Chars => Ok(Tokenized {
                tokens: text.chars().map(String::from).collect(),
                sequence: Sequence::from_chars(text),
            }),
            TokenizeMode::Words => {
                let mut tokens = Vec::new();
                let mut symbols = Vec::new();
                for word in text.split_whitespace() {
                    symbols.push(self.intern(word)?);
                    tokens.push(word.to_string());
                }
                Ok(Tokenized {
                    tokens,
                    sequence: Sequence::from_symbols(symbols),
                })
            }
        }
    }

    /// Tokenize raw file contents
    ///
    /// Byte mode accepts any input. The other modes need valid UTF-8.
    pub fn tokenize_bytes(&mut self, bytes: &[u8]) -> Result<Tokenized> {
        if self.mode == TokenizeMode::Bytes {
            return Ok(tokenize_raw(bytes));
        }
        let text = std::str::from_utf8(bytes).map_err(|e| {
            TextSearchError::invalid_input(format!(
                "input is not valid UTF-8 ({}); use byte tokenization for binary input",
                e
            ))
        })?;
        self.tokenize(text)
    }

    fn intern(&mut self, word: &str) -> Result<Symbol> {
        if let Some(&symbol) = self.vocab.get(word) {
            return Ok(symbol);
        }
        let next = self.vocab.len() as u64;
        if next >= Symbol::SENTINEL.code() as u64 {
            return Err(TextSearchError::invalid_input(
                "word vocabulary exhausted the symbol space",
            ));
        }
        let symbol = Symbol(next as u32);
        self.vocab.insert(word.to_string(), symbol);
        Ok(symbol)
    }
}

fn tokenize_raw(bytes: &[u8]) -> Tokenized {
    Tokenized {
        tokens: bytes.iter().copied().map(display_byte).collect(),
        sequence: Sequence::from_bytes(bytes),
    }
}

fn display_byte(b: u8) -> String {
    if b.is_ascii_graphic() || b == b' ' {
        (b as char).to_string()
    } else {
        format!("\\x{:02x}", b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_mode() {
        let mut tok = Tokenizer::new(TokenizeMode::Chars);
        let out = tok.tokenize("LOVE").unwrap();
        assert_eq!(out.tokens, vec!["L", "O", "V", "E"]);
        assert_eq!(out.sequence, Sequence::from_chars("LOVE"));
    }

    #[test]
    fn test_bytes_mode_escapes_non_ascii() {
        let mut tok = Tokenizer::new(TokenizeMode::Bytes);
        let out = tok.tokenize("é").unwrap();
        assert_eq!(out.tokens, vec!["\\xc3", "\\xa9"]);
        assert_eq!(out.sequence.len(), 2);
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let raw = [0xff, b'a'];

        let mut tok = Tokenizer::new(TokenizeMode::Bytes);
        let out = tok.tokenize_bytes(&raw).unwrap();
        assert_eq!(out.tokens, vec!["\\xff", "a"]);
        assert_eq!(out.sequence, Sequence::from_bytes(&raw));

        let mut tok = Tokenizer::new(TokenizeMode::Chars);
        let err = tok.tokenize_bytes(&raw).unwrap_err();
        assert!(matches!(err, TextSearchError::InvalidInput(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_tokenize_bytes_matches_str() {
        for mode in [TokenizeMode::Bytes, TokenizeMode::Chars, TokenizeMode::Words] {
            let from_str = Tokenizer::new(mode).tokenize("héllo wörld").unwrap();
            let from_bytes = Tokenizer::new(mode)
                .tokenize_bytes("héllo wörld".as_bytes())
                .unwrap();
            assert_eq!(from_str, from_bytes);
        }
    }

    #[test]
    fn test_words_share_vocabulary() {
        let mut tok = Tokenizer::new(TokenizeMode::Words);
        let query = tok.tokenize("i love you").unwrap();
        let target = tok.tokenize("you  love\tme").unwrap();

        assert_eq!(query.tokens, vec!["i", "love", "you"]);
        assert_eq!(target.tokens, vec!["you", "love", "me"]);
        assert_eq!(query.sequence[2], target.sequence[0]);
        assert_eq!(query.sequence[1], target.sequence[1]);
        assert_ne!(query.sequence[0], target.sequence[2]);
        assert_eq!(tok.vocab_size(), 4);
    }

    #[test]
    fn test_empty_text() {
        let mut tok = Tokenizer::new(TokenizeMode::Words);
        assert!(tok.tokenize("   ").unwrap().is_empty());
    }
}
