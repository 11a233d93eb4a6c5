//! Human-readable rendering of alignment paths
//!
//! Pairs each step with the source and target tokens it covers, using a gap
//! marker where one side has no token.

use super::levenshtein::{EditKind, EditOp};
use crate::error::{Result, TextSearchError};
use serde::{Deserialize, Serialize};

/// Configuration for alignment rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Printed in place of a missing token (default: "*")
    pub gap_marker: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gap_marker: "*".to_string(),
        }
    }
}

/// One rendered alignment column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub kind: EditKind,
    pub source: String,
    pub target: String,
}

/// Pair every step of `path` with its source and target tokens
///
/// Insertions get `gap_marker` on the source side, deletions on the target
/// side. Fails if the path needs more tokens than supplied.
pub fn render<S: AsRef<str>>(
    path: &[EditOp],
    source_tokens: &[S],
    target_tokens: &[S],
    gap_marker: &str,
) -> Result<Vec<AlignedPair>> {
    let mut pairs = Vec::with_capacity(path.len());
    let (mut i, mut j) = (0, 0);

    for op in path {
        let source = if op.source().is_some() {
            let token = take_token(source_tokens, i, "source")?;
            i += 1;
            token
        } else {
            gap_marker.to_string()
        };
        let target = if op.target().is_some() {
            let token = take_token(target_tokens, j, "target")?;
            j += 1;
            token
        } else {
            gap_marker.to_string()
        };
        pairs.push(AlignedPair {
            kind: op.kind(),
            source,
            target,
        });
    }

    Ok(pairs)
}

fn take_token<S: AsRef<str>>(tokens: &[S], index: usize, side: &str) -> Result<String> {
    tokens
        .get(index)
        .map(|t| t.as_ref().to_string())
        .ok_or_else(|| {
            TextSearchError::invalid_input(format!(
                "path needs {} token {} but only {} were given",
                side,
                index,
                tokens.len()
            ))
        })
}

/// Marker shown between the source and target rows
pub fn kind_marker(kind: EditKind) -> char {
    match kind {
        EditKind::Match => '|',
        other => other.code(),
    }
}

/// Three-row text view: source tokens, op markers, target tokens
///
/// ```text
/// * L O V E * * *
/// I | | | | I I I
/// I L O V E Y O U
/// ```
///
/// Column width is the widest token in that column, counted in chars.
/// The last column is not padded.
pub fn render_nice(pairs: &[AlignedPair]) -> String {
    let widths = column_widths(pairs);
    let cells: [fn(&AlignedPair) -> String; 3] = [
        |p| p.source.clone(),
        |p| kind_marker(p.kind).to_string(),
        |p| p.target.clone(),
    ];

    cells
        .iter()
        .map(|cell| {
            let mut row = String::new();
            for (col, (pair, &width)) in pairs.iter().zip(&widths).enumerate() {
                if col > 0 {
                    row.push(' ');
                }
                row.push_str(&pad_cell(&cell(pair), width));
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display width of each column of the three-row view
///
/// Every column but the last is as wide as its widest token (at least 1).
/// The last column gets width 0 so rows carry no trailing padding.
pub fn column_widths(pairs: &[AlignedPair]) -> Vec<usize> {
    let mut widths: Vec<usize> = pairs
        .iter()
        .map(|p| p.source.chars().count().max(p.target.chars().count()).max(1))
        .collect();
    if let Some(last) = widths.last_mut() {
        *last = 0;
    }
    widths
}

/// Left-align `text` in a cell of `width` chars
pub fn pad_cell(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
