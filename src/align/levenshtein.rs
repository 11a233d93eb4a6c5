//! Levenshtein distance with an explicit alignment path
//!
//! Unit cost for substitution, insertion and deletion; matches are free.
//! The full (|source|+1) x (|target|+1) table is kept so the path can be
//! traced back from the bottom-right corner.

use crate::error::{Result, TextSearchError};
use crate::symbols::{Sequence, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Kind of one alignment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Match,
    Substitution,
    Insertion,
    Deletion,
}

impl EditKind {
    /// Single-letter code: C (correct), S, I, D
    pub fn code(self) -> char {
        match self {
            EditKind::Match => 'C',
            EditKind::Substitution => 'S',
            EditKind::Insertion => 'I',
            EditKind::Deletion => 'D',
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One step of an alignment path, with the symbols it consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    Match { source: Symbol, target: Symbol },
    Substitution { source: Symbol, target: Symbol },
    /// Target symbol with no source counterpart
    Insertion { target: Symbol },
    /// Source symbol with no target counterpart
    Deletion { source: Symbol },
}

impl EditOp {
    pub fn kind(&self) -> EditKind {
        match self {
            EditOp::Match { .. } => EditKind::Match,
            EditOp::Substitution { .. } => EditKind::Substitution,
            EditOp::Insertion { .. } => EditKind::Insertion,
            EditOp::Deletion { .. } => EditKind::Deletion,
        }
    }

    pub fn source(&self) -> Option<Symbol> {
        match *self {
            EditOp::Match { source, .. }
            | EditOp::Substitution { source, .. }
            | EditOp::Deletion { source } => Some(source),
            EditOp::Insertion { .. } => None,
        }
    }

    pub fn target(&self) -> Option<Symbol> {
        match *self {
            EditOp::Match { target, .. }
            | EditOp::Substitution { target, .. }
            | EditOp::Insertion { target } => Some(target),
            EditOp::Deletion { .. } => None,
        }
    }

    #[inline]
    pub fn cost(&self) -> usize {
        match self {
            EditOp::Match { .. } => 0,
            _ => 1,
        }
    }
}

/// Minimum edit distance and one path achieving it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub distance: usize,
    pub path: Vec<EditOp>,
}

impl Alignment {
    /// Op codes of the path, e.g. "ICCCCIII"
    pub fn edit_string(&self) -> String {
        self.path.iter().map(|op| op.kind().code()).collect()
    }

    /// Replay the path against `source`, producing the target it encodes
    ///
    /// Fails if the path disagrees with `source` (wrong symbol, too short or
    /// too long), which means it was computed for a different input.
    pub fn apply(&self, source: &Sequence) -> Result<Sequence> {
        let mut out = Vec::with_capacity(self.path.len());
        let mut i = 0;

        for (step, op) in self.path.iter().enumerate() {
            if let Some(expected) = op.source() {
                match source.get(i) {
                    Some(actual) if actual == expected => i += 1,
                    _ => {
                        return Err(TextSearchError::invalid_input(format!(
                            "alignment step {} expects source symbol {} at position {}",
                            step, expected, i
                        )));
                    }
                }
            }
            if let Some(t) = op.target() {
                out.push(t);
            }
        }

        if i != source.len() {
            return Err(TextSearchError::invalid_input(format!(
                "alignment consumed {} of {} source symbols",
                i,
                source.len()
            )));
        }
        Ok(Sequence::from_symbols(out))
    }
}

/// Align `source` to `target` under unit-cost Levenshtein distance
///
/// When several paths are optimal, the traceback prefers
/// Match > Substitution > Deletion > Insertion at every cell, so the same
/// input always yields the same path.
pub fn align(source: &Sequence, target: &Sequence) -> Alignment {
    let src = source.as_slice();
    let tgt = target.as_slice();
    let (n, m) = (src.len(), tgt.len());
    let width = m + 1;

    let mut table = vec![0usize; (n + 1) * width];
    for (j, cell) in table[..width].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=n {
        table[i * width] = i;
        for j in 1..=m {
            let cost = (src[i - 1] != tgt[j - 1]) as usize;
            table[i * width + j] = (table[(i - 1) * width + j - 1] + cost)
                .min(table[(i - 1) * width + j] + 1) // deletion
                .min(table[i * width + j - 1] + 1); // insertion
        }
    }

    let distance = table[n * width + m];
    let mut path = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);

    while i > 0 || j > 0 {
        let here = table[i * width + j];
        if i > 0 && j > 0 {
            let (s, t) = (src[i - 1], tgt[j - 1]);
            let diag = table[(i - 1) * width + j - 1];
            if s == t && diag == here {
                path.push(EditOp::Match { source: s, target: t });
                i -= 1;
                j -= 1;
                continue;
            }
            if s != t && diag + 1 == here {
                path.push(EditOp::Substitution { source: s, target: t });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && table[(i - 1) * width + j] + 1 == here {
            path.push(EditOp::Deletion { source: src[i - 1] });
            i -= 1;
            continue;
        }
        path.push(EditOp::Insertion { target: tgt[j - 1] });
        j -= 1;
    }
    path.reverse();

    debug!(source_len = n, target_len = m, distance, "aligned sequences");
    Alignment { distance, path }
}
