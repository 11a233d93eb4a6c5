//! Suffix array builder
//!
//! Builds a suffix array over a sequence terminated by the sentinel symbol:
//! 1. Rank every position by its first symbol
//! 2. Repeatedly sort positions by (rank[i], rank[i + k]) and re-rank,
//!    doubling k until all ranks are distinct
//!
//! The sentinel is unique and maximal, so every suffix gets a distinct rank
//! and the output is a total order.

use super::types::*;
use crate::error::{Result, TextSearchError};
use crate::symbols::{Sequence, Symbol};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Builder for constructing suffix arrays from sequences
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array of `sequence`
    ///
    /// A trailing sentinel is accepted as already present; a sentinel
    /// anywhere else is rejected.
    pub fn build(&self, sequence: &Sequence) -> Result<SuffixArray> {
        let symbols = sequence.as_slice();
        let data = if sequence.is_terminated() {
            &symbols[..symbols.len() - 1]
        } else {
            symbols
        };

        if data.is_empty() {
            return Err(TextSearchError::invalid_input(
                "sequence is empty; a suffix array needs at least one symbol",
            ));
        }
        if let Some(pos) = data.iter().position(|s| s.is_sentinel()) {
            return Err(TextSearchError::invalid_input(format!(
                "symbol at position {} collides with the reserved sentinel",
                pos
            )));
        }

        let mut text = Vec::with_capacity(data.len() + 1);
        text.extend_from_slice(data);
        text.push(Symbol::SENTINEL);

        let parallel = text.len() > self.config.parallel_threshold;
        let started = Instant::now();
        let (sa, rounds) = prefix_doubling(&text, parallel);
        debug!(
            len = text.len(),
            rounds,
            parallel,
            elapsed_us = started.elapsed().as_micros() as u64,
            "built suffix array"
        );

        Ok(SuffixArray {
            text: Sequence::from_symbols(text),
            sa,
        })
    }

    /// Concatenate `query` and `target` and build the suffix array of the result
    ///
    /// Neither half may contain the sentinel, even in last position, or the
    /// concatenation could pass for an already terminated sequence.
    pub fn build_query_target(
        &self,
        query: &Sequence,
        target: &Sequence,
    ) -> Result<(SuffixArray, usize)> {
        for (name, seq) in [("query", query), ("target", target)] {
            if let Some(pos) = seq.as_slice().iter().position(|s| s.is_sentinel()) {
                return Err(TextSearchError::invalid_input(format!(
                    "{} symbol at position {} collides with the reserved sentinel",
                    name, pos
                )));
            }
        }
        let sa = self.build(&Sequence::concat(query, target))?;
        Ok((sa, query.len()))
    }
}

/// Build a suffix array with the default configuration
pub fn build_suffix_array(sequence: &Sequence) -> Result<SuffixArray> {
    SuffixArrayBuilder::with_defaults().build(sequence)
}

/// Concatenate `query` and `target` and build the suffix array of the result
///
/// Returns the array together with the query length, which is the boundary
/// between query-origin and target-origin positions.
pub fn build_query_target(query: &Sequence, target: &Sequence) -> Result<(SuffixArray, usize)> {
    SuffixArrayBuilder::with_defaults().build_query_target(query, target)
}

/// A sorted suffix array together with the terminated text it indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    /// Text including the trailing sentinel
    text: Sequence,
    /// Suffix start positions in lexicographic order
    sa: Vec<usize>,
}

impl SuffixArray {
    pub fn as_slice(&self) -> &[usize] {
        &self.sa
    }

    /// Number of suffixes, sentinel included
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// The indexed text, terminated by the sentinel
    pub fn text(&self) -> &Sequence {
        &self.text
    }

    /// Start position of the suffix with the given rank
    pub fn position(&self, rank: usize) -> Option<usize> {
        self.sa.get(rank).copied()
    }

    /// Symbols of the suffix with the given rank, sentinel included
    pub fn suffix(&self, rank: usize) -> &[Symbol] {
        &self.text.as_slice()[self.sa[rank]..]
    }

    /// Rank of the sentinel-only suffix (always the last one)
    pub fn sentinel_rank(&self) -> usize {
        self.sa.len() - 1
    }

    /// Classify the suffix at `rank` relative to a query of `query_len` symbols
    pub fn origin(&self, rank: usize, query_len: usize) -> Origin {
        let pos = self.sa[rank];
        if pos == self.text.len() - 1 {
            Origin::Sentinel
        } else if pos < query_len {
            Origin::Query
        } else {
            Origin::Target
        }
    }

    /// Inverse permutation: `rank_array()[pos]` is the rank of suffix `pos`
    pub fn rank_array(&self) -> Vec<usize> {
        let mut rank = vec![0; self.sa.len()];
        for (r, &pos) in self.sa.iter().enumerate() {
            rank[pos] = r;
        }
        rank
    }
}

/// Prefix doubling over a sentinel-terminated text
///
/// Returns the suffix array and the number of sort rounds.
/// Time: O(n log^2 n), Space: O(n)
fn prefix_doubling(text: &[Symbol], parallel: bool) -> (Vec<usize>, u32) {
    let n = text.len();
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<u64> = text.iter().map(|s| s.code() as u64).collect();
    let mut next_rank = vec![0u64; n];
    let mut k = 1;
    let mut rounds = 0;

    loop {
        rounds += 1;
        // Past the end only happens for suffixes already containing the
        // sentinel, whose first rank is unique, so 0 never decides a tie.
        let key = |i: usize| -> (u64, u64) {
            let second = if i + k < n { rank[i + k] + 1 } else { 0 };
            (rank[i], second)
        };

        if parallel {
            sa.par_sort_unstable_by_key(|&i| key(i));
        } else {
            sa.sort_unstable_by_key(|&i| key(i));
        }

        next_rank[sa[0]] = 0;
        for w in 1..n {
            let bump = (key(sa[w]) != key(sa[w - 1])) as u64;
            next_rank[sa[w]] = next_rank[sa[w - 1]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k *= 2;
    }

    (sa, rounds)
}
