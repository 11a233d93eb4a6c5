//! # textsearch - Suffix-array search and Levenshtein alignment
//!
//! Tools for lining up ASR transcripts with reference text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`symbols`] - Symbol codes, sequences and tokenization
//! - [`suffix_array`] - Suffix array construction and close-match search
//! - [`align`] - Levenshtein alignment paths and their rendering
//! - [`config`] - JSON-loadable settings
//! - [`output`] - Terminal and JSON output for the CLI
//!
//! ## Quick Start
//!
//! ```
//! use textsearch::suffix_array::{build_query_target, close_matches};
//! use textsearch::align::align;
//! use textsearch::symbols::Sequence;
//!
//! let query = Sequence::from_chars("LOVE");
//! let target = Sequence::from_chars("ILOVEYOU");
//!
//! // Coarse locate: nearest target suffixes around each query suffix
//! let (sa, query_len) = build_query_target(&query, &target).unwrap();
//! let matches = close_matches(&sa, query_len).unwrap();
//! assert_eq!(matches[0].following, Some(5));
//!
//! // Exact alignment
//! let alignment = align(&query, &target);
//! assert_eq!(alignment.distance, 4);
//! ```
//!
//! Both entry points are pure functions of their inputs and hold no shared
//! state, so they can be called from any number of threads.

pub mod align;
pub mod config;
pub mod error;
pub mod output;
pub mod suffix_array;
pub mod symbols;

pub use error::{Result, TextSearchError};
