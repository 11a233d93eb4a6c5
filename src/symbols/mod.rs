//! Symbols, sequences and tokenization.
//!
//! ## Modules
//!
//! - [`sequence`] - `Symbol` codes with a reserved sentinel, and `Sequence`
//! - [`tokenizer`] - Splitting text into bytes, chars or words
//!
//! ```
//! use textsearch::symbols::{TokenizeMode, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new(TokenizeMode::Words);
//! let query = tokenizer.tokenize("i love you").unwrap();
//! let target = tokenizer.tokenize("and i love you too").unwrap();
//! assert_eq!(query.sequence[1], target.sequence[2]);
//! ```

pub mod sequence;
pub mod tokenizer;

pub use sequence::*;
pub use tokenizer::*;
