//! Output formatting for suffix tables, close matches and alignments

use crate::align::{column_widths, kind_marker, pad_cell, AlignedPair, Alignment, EditKind};
use crate::suffix_array::{CloseMatch, Origin, SuffixArray};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Open stdout with color enabled or disabled
pub fn stdout(color: ColorChoice) -> StandardStream {
    StandardStream::stdout(color)
}

/// One row of a sorted suffix listing
#[derive(Debug, Clone, Serialize)]
pub struct SuffixRow {
    pub rank: usize,
    pub position: usize,
    pub origin: Origin,
    pub suffix: String,
}

/// Close-match record for one query token
#[derive(Debug, Clone, Serialize)]
pub struct CloseMatchRow {
    pub query_position: usize,
    pub token: String,
    pub preceding: Option<usize>,
    pub following: Option<usize>,
}

/// JSON view of a close-match run
#[derive(Debug, Clone, Serialize)]
pub struct CloseMatchReport {
    pub query_len: usize,
    pub suffixes: Vec<SuffixRow>,
    pub matches: Vec<CloseMatchRow>,
}

/// JSON view of an alignment
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport<'a> {
    pub distance: usize,
    pub edits: String,
    pub alignment: &'a Alignment,
    pub pairs: &'a [AlignedPair],
}

/// List every suffix in sort order, sentinel rendered as `$`
///
/// `tokens` are the display tokens of the indexed text (without sentinel);
/// `joiner` goes between tokens, "" for chars and " " for words.
pub fn suffix_rows(
    sa: &SuffixArray,
    tokens: &[String],
    joiner: &str,
    query_len: usize,
) -> Vec<SuffixRow> {
    (0..sa.len())
        .map(|rank| {
            let position = sa.as_slice()[rank];
            let mut suffix = tokens.get(position..).unwrap_or_default().join(joiner);
            if !suffix.is_empty() && !joiner.is_empty() {
                suffix.push_str(joiner);
            }
            suffix.push('$');
            SuffixRow {
                rank,
                position,
                origin: sa.origin(rank, query_len),
                suffix,
            }
        })
        .collect()
}

/// Pair each close-match record with its query token
pub fn close_match_rows(matches: &[CloseMatch], query_tokens: &[String]) -> Vec<CloseMatchRow> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| CloseMatchRow {
            query_position: i,
            token: query_tokens.get(i).cloned().unwrap_or_default(),
            preceding: m.preceding,
            following: m.following,
        })
        .collect()
}

fn origin_color(origin: Origin) -> Color {
    match origin {
        Origin::Query => Color::Cyan,
        Origin::Target => Color::Green,
        Origin::Sentinel => Color::Magenta,
    }
}

/// Print the sorted suffix table
pub fn print_suffix_rows<W: WriteColor>(out: &mut W, rows: &[SuffixRow]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "rank\tpos\ttype\tsuffix")?;
    out.reset()?;

    for row in rows {
        write!(out, "{}\t{}\t", row.rank, row.position)?;
        out.set_color(ColorSpec::new().set_fg(Some(origin_color(row.origin))))?;
        write!(out, "{}", row.origin.as_str())?;
        out.reset()?;
        writeln!(out, "\t{}", row.suffix)?;
    }

    Ok(())
}

fn write_neighbor<W: WriteColor>(out: &mut W, neighbor: Option<usize>) -> io::Result<()> {
    match neighbor {
        Some(pos) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "{}", pos)?;
        }
        None => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "none")?;
        }
    }
    out.reset()
}

/// Print preceding/following target positions for each query token
pub fn print_close_matches<W: WriteColor>(out: &mut W, rows: &[CloseMatchRow]) -> io::Result<()> {
    for row in rows {
        write!(out, "Query {} ", row.query_position)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(out, "{}", row.token)?;
        out.reset()?;
        write!(out, " precede ")?;
        write_neighbor(out, row.preceding)?;
        write!(out, " follow ")?;
        write_neighbor(out, row.following)?;
        writeln!(out)?;
    }
    Ok(())
}

fn kind_color(kind: EditKind) -> Option<Color> {
    match kind {
        EditKind::Match => None,
        EditKind::Substitution => Some(Color::Yellow),
        EditKind::Insertion => Some(Color::Green),
        EditKind::Deletion => Some(Color::Red),
    }
}

/// Print distance, op string and the three-row view with edits highlighted
///
/// Without colors the rows are exactly [`crate::align::render_nice`].
pub fn print_alignment<W: WriteColor>(
    out: &mut W,
    alignment: &Alignment,
    pairs: &[AlignedPair],
) -> io::Result<()> {
    writeln!(out, "distance: {}", alignment.distance)?;
    writeln!(out, "edits: {}", alignment.edit_string())?;

    let widths = column_widths(pairs);

    let cells: [fn(&AlignedPair) -> String; 3] = [
        |p| p.source.clone(),
        |p| kind_marker(p.kind).to_string(),
        |p| p.target.clone(),
    ];

    for cell in cells {
        for (col, (pair, &width)) in pairs.iter().zip(&widths).enumerate() {
            if col > 0 {
                write!(out, " ")?;
            }
            let mut spec = ColorSpec::new();
            spec.set_fg(kind_color(pair.kind));
            out.set_color(&spec)?;
            write!(out, "{}", pad_cell(&cell(pair), width))?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Print any serializable report as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, value)?;
    writeln!(lock)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{align, render, render_nice};
    use crate::suffix_array::{build_query_target, close_matches};
    use crate::symbols::{TokenizeMode, Tokenizer};
    use termcolor::Buffer;

    fn tokens(s: &str) -> Vec<String> {
        s.chars().map(String::from).collect()
    }

    #[test]
    fn test_suffix_rows_love() {
        let (sa, query_len) = build_query_target(&"LOVE".into(), &"ILOVEYOU".into()).unwrap();
        let rows = suffix_rows(&sa, &tokens("LOVEILOVEYOU"), "", query_len);

        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].suffix, "EILOVEYOU$");
        assert_eq!(rows[0].origin, Origin::Query);
        assert_eq!(rows[1].suffix, "EYOU$");
        assert_eq!(rows[12].suffix, "$");
        assert_eq!(rows[12].origin, Origin::Sentinel);
    }

    #[test]
    fn test_suffix_rows_words() {
        let mut tok = Tokenizer::new(TokenizeMode::Words);
        let t = tok.tokenize("b a").unwrap();
        let sa = crate::suffix_array::build_suffix_array(&t.sequence).unwrap();
        let rows = suffix_rows(&sa, &t.tokens, " ", 0);
        let suffixes: Vec<_> = rows.iter().map(|r| r.suffix.as_str()).collect();
        // "b" is interned first and gets the smaller code
        assert_eq!(suffixes, vec!["b a $", "a $", "$"]);
    }

    #[test]
    fn test_print_close_matches_plain() {
        let (sa, query_len) = build_query_target(&"LOVE".into(), &"ILOVEYOU".into()).unwrap();
        let matches = close_matches(&sa, query_len).unwrap();
        let rows = close_match_rows(&matches, &tokens("LOVE"));

        let mut buf = Buffer::no_color();
        print_close_matches(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Query 0 L precede 4 follow 5");
        assert_eq!(lines[3], "Query 3 E precede none follow 8");
    }

    #[test]
    fn test_print_alignment_plain() {
        let alignment = align(&"LOVE".into(), &"ILOVEYOU".into());
        let pairs = render(&alignment.path, &tokens("LOVE"), &tokens("ILOVEYOU"), "*").unwrap();

        let mut buf = Buffer::no_color();
        print_alignment(&mut buf, &alignment, &pairs).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        assert_eq!(
            text,
            "distance: 4\nedits: ICCCCIII\n* L O V E * * *\nI | | | | I I I\nI L O V E Y O U\n"
        );
    }

    #[test]
    fn test_print_alignment_matches_render_nice() {
        let mut tok = Tokenizer::new(TokenizeMode::Words);
        for (source, target) in [("a", "abc"), ("the cat sat", "a cat"), ("", "x yz")] {
            let s = tok.tokenize(source).unwrap();
            let t = tok.tokenize(target).unwrap();
            let alignment = align(&s.sequence, &t.sequence);
            let pairs = render(&alignment.path, &s.tokens, &t.tokens, "*").unwrap();

            let mut buf = Buffer::no_color();
            print_alignment(&mut buf, &alignment, &pairs).unwrap();
            let text = String::from_utf8(buf.into_inner()).unwrap();
            let rows: Vec<_> = text.splitn(3, '\n').collect();
            assert_eq!(rows[2], format!("{}\n", render_nice(&pairs)), "{} / {}", source, target);
        }

        let s = tok.tokenize("a").unwrap();
        let t = tok.tokenize("abc").unwrap();
        let alignment = align(&s.sequence, &t.sequence);
        let pairs = render(&alignment.path, &s.tokens, &t.tokens, "*").unwrap();
        let mut buf = Buffer::no_color();
        print_alignment(&mut buf, &alignment, &pairs).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        assert_eq!(text, "distance: 1\nedits: S\na\nS\nabc\n");
    }

    #[test]
    fn test_alignment_report_json() {
        let alignment = align(&"AB".into(), &"B".into());
        let pairs = render(&alignment.path, &tokens("AB"), &tokens("B"), "*").unwrap();
        let report = AlignmentReport {
            distance: alignment.distance,
            edits: alignment.edit_string(),
            alignment: &alignment,
            pairs: &pairs,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["distance"], 1);
        assert_eq!(json["edits"], "DC");
        assert_eq!(json["pairs"][0]["kind"], "deletion");
        assert_eq!(json["alignment"]["path"][1]["op"], "match");
    }
}
