//! Text statistics: character, word, line, and paragraph counts
//!
//! A pure, total function over any input string. All five counts are
//! computed from the same `&str` snapshot, so they are always mutually
//! consistent.
//!
//! Line counting keeps naive split semantics: segments produced by splitting
//! on `\n`, including the segment after a trailing newline (`"a\nb\n"` is
//! three lines, the empty string is one).
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

static PARAGRAPH_SPLIT: OnceLock<Regex> = OnceLock::new();

fn paragraph_split() -> &'static Regex {
    // A paragraph boundary is a newline, optional whitespace, then another
    // newline: one or more blank lines between blocks of text.
    PARAGRAPH_SPLIT.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Counts computed by [`analyze`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Total character count (Unicode scalar values)
    pub characters: usize,
    /// Character count excluding all whitespace
    pub characters_no_spaces: usize,
    /// Maximal non-whitespace runs; 0 for empty or whitespace-only input
    pub words: usize,
    /// Segments produced by splitting on `\n`; never 0
    pub lines: usize,
    /// Blank-line-separated blocks that are non-empty after trimming
    pub paragraphs: usize,
}

/// Compute all five statistics over `text`. Total; never fails.
pub fn analyze(text: &str) -> TextStats {
    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
        lines: text.split('\n').count(),
        paragraphs: paragraph_split()
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let stats = analyze("");
        assert_eq!(
            stats,
            TextStats {
                characters: 0,
                characters_no_spaces: 0,
                words: 0,
                lines: 1,
                paragraphs: 0,
            }
        );
    }

    #[test]
    fn test_mixed_input() {
        let stats = analyze("hi there\n\nbye");
        assert_eq!(stats.characters, 13);
        assert_eq!(stats.characters_no_spaces, 10);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.paragraphs, 2);
    }

    #[test]
    fn test_whitespace_only_input() {
        let stats = analyze("  \t \n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters_no_spaces, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn test_trailing_newline_counts_a_segment() {
        assert_eq!(analyze("a\nb").lines, 2);
        assert_eq!(analyze("a\nb\n").lines, 3);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(analyze("one\n\ntwo\n\nthree").paragraphs, 3);
        // Blank lines containing whitespace still separate paragraphs
        assert_eq!(analyze("one\n  \t\ntwo").paragraphs, 2);
        // Runs of blank lines do not create empty paragraphs
        assert_eq!(analyze("one\n\n\n\ntwo").paragraphs, 2);
        assert_eq!(analyze("single paragraph").paragraphs, 1);
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        let stats = analyze("héllo \u{1F980}");
        assert_eq!(stats.characters, 7);
        assert_eq!(stats.characters_no_spaces, 6);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(analyze("  a \t b\nc  ").words, 3);
    }
}
