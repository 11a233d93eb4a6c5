//! Suffix array indexing module
//!
//! Sorted suffixes of a query+target concatenation, and the close-match
//! query that finds, for each query position, its nearest target-origin
//! neighbors in sort order.
//!
//! ## Architecture
//!
//! - `builder`: Constructs suffix arrays by prefix doubling
//! - `close_match`: Neighbor search between query and target suffixes
//! - `types`: Config, origin tags and close-match records

pub mod builder;
pub mod close_match;
pub mod types;

// Re-exports for convenience
pub use builder::{build_query_target, build_suffix_array, SuffixArray, SuffixArrayBuilder};
pub use close_match::close_matches;
pub use types::{CloseMatch, Origin, SuffixArrayConfig};
