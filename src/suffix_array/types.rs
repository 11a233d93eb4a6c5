//! Types for suffix array construction and close-match queries

use serde::{Deserialize, Serialize};

/// Configuration for suffix array building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixArrayConfig {
    /// Inputs longer than this are sorted with rayon (default: 100_000)
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
        }
    }
}

/// Which half of a query+target concatenation a suffix starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Query,
    Target,
    /// The suffix made of the sentinel alone
    Sentinel,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::Query => "query",
            Origin::Target => "target",
            Origin::Sentinel => "sentinel",
        }
    }
}

/// Nearest target-origin suffixes around one query position, in sort order
///
/// Values are positions in the concatenated sequence, so a target offset is
/// `position - query_len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseMatch {
    pub preceding: Option<usize>,
    pub following: Option<usize>,
}

impl CloseMatch {
    /// Both neighbors shifted into target coordinates
    ///
    /// A neighbor below `query_len` has no target offset and maps to `None`.
    pub fn target_offsets(&self, query_len: usize) -> (Option<usize>, Option<usize>) {
        (
            self.preceding.and_then(|p| p.checked_sub(query_len)),
            self.following.and_then(|p| p.checked_sub(query_len)),
        )
    }
}
