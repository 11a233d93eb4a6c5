//! Close-match search over a query+target suffix array
//!
//! For every query position, find the target-origin suffixes sorted
//! immediately before and after it. Suffixes that sort next to each other
//! share a long common prefix, so these neighbors are cheap candidates for
//! where the query text lines up with the target.

use super::builder::SuffixArray;
use super::types::CloseMatch;
use crate::error::{Result, TextSearchError};
use tracing::trace;

/// Nearest preceding and following target-origin suffix for each query position
///
/// `query_len` is the boundary in the indexed text: positions below it are
/// query-origin, the rest (except the sentinel) are target-origin. The result
/// is indexed by query position. Runs in two linear sweeps over the array.
pub fn close_matches(sa: &SuffixArray, query_len: usize) -> Result<Vec<CloseMatch>> {
    let n = sa.len();
    if query_len > n {
        return Err(TextSearchError::invalid_input(format!(
            "query_len {} is outside [0, {}]",
            query_len, n
        )));
    }

    // The sentinel suffix is the last rank and is never reported.
    let sentinel_pos = n - 1;
    let reported = query_len.min(sentinel_pos);
    let mut matches = vec![CloseMatch::default(); reported];
    let ranks = &sa.as_slice()[..sa.sentinel_rank()];

    let mut last_target = None;
    for &pos in ranks {
        if pos < query_len {
            matches[pos].preceding = last_target;
        } else {
            last_target = Some(pos);
        }
    }

    let mut next_target = None;
    for &pos in ranks.iter().rev() {
        if pos < query_len {
            matches[pos].following = next_target;
        } else {
            next_target = Some(pos);
        }
    }

    trace!(query_len, suffixes = n, "close matches computed");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix_array::{build_query_target, build_suffix_array};

    #[test]
    fn test_love_in_iloveyou() {
        let (sa, query_len) = build_query_target(&"LOVE".into(), &"ILOVEYOU".into()).unwrap();
        let matches = close_matches(&sa, query_len).unwrap();

        assert_eq!(
            matches,
            vec![
                // L: between "ILOVEYOU$" (4) and "LOVEYOU$" (5)
                CloseMatch { preceding: Some(4), following: Some(5) },
                // O: between "OU$" (10) and "OVEYOU$" (6)
                CloseMatch { preceding: Some(10), following: Some(6) },
                // V: between "U$" (11) and "VEYOU$" (7)
                CloseMatch { preceding: Some(11), following: Some(7) },
                // E: sorts first overall
                CloseMatch { preceding: None, following: Some(8) },
            ]
        );
        assert_eq!(matches[0].target_offsets(query_len), (Some(0), Some(1)));
    }

    #[test]
    fn test_no_following_neighbor() {
        // "zz" sorts after every target suffix except the sentinel
        let (sa, query_len) = build_query_target(&"zz".into(), &"abc".into()).unwrap();
        let matches = close_matches(&sa, query_len).unwrap();
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert_eq!(m.preceding, Some(4));
            assert_eq!(m.following, None);
        }
    }

    #[test]
    fn test_empty_target() {
        let (sa, query_len) = build_query_target(&"abc".into(), &"".into()).unwrap();
        let matches = close_matches(&sa, query_len).unwrap();
        assert_eq!(matches, vec![CloseMatch::default(); 3]);
    }

    #[test]
    fn test_zero_query_len() {
        let sa = build_suffix_array(&"abc".into()).unwrap();
        assert!(close_matches(&sa, 0).unwrap().is_empty());
    }

    #[test]
    fn test_full_length_excludes_sentinel() {
        let sa = build_suffix_array(&"abc".into()).unwrap();
        let matches = close_matches(&sa, sa.len()).unwrap();
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| *m == CloseMatch::default()));
    }

    #[test]
    fn test_query_len_out_of_range() {
        let sa = build_suffix_array(&"abc".into()).unwrap();
        let err = close_matches(&sa, 5).unwrap_err();
        assert!(matches!(err, TextSearchError::InvalidInput(_)));
    }
}
