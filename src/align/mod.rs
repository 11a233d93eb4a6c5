//! Levenshtein alignment between two symbol sequences.
//!
//! - [`levenshtein`] - Edit distance table and traceback into an explicit path
//! - [`render`] - Token pairs and the three-row text view of a path
//!
//! ```
//! use textsearch::align::{align, render, render_nice};
//! use textsearch::symbols::{TokenizeMode, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new(TokenizeMode::Chars);
//! let query = tokenizer.tokenize("LOVE").unwrap();
//! let target = tokenizer.tokenize("ILOVEYOU").unwrap();
//!
//! let alignment = align(&query.sequence, &target.sequence);
//! assert_eq!(alignment.distance, 4);
//!
//! let pairs = render(&alignment.path, &query.tokens, &target.tokens, "*").unwrap();
//! println!("{}", render_nice(&pairs));
//! ```

pub mod levenshtein;
pub mod render;

pub use levenshtein::{align, Alignment, EditKind, EditOp};
pub use render::{
    column_widths, kind_marker, pad_cell, render, render_nice, AlignedPair, RenderConfig,
};
