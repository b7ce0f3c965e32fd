//! Letter-case conversion between seven styles
//!
//! The tokenization rule, applied uniformly: a *word* is a maximal run of
//! non-whitespace characters. Capitalizing a word uppercases its first
//! alphanumeric character and lowercases everything after it; characters
//! before the first alphanumeric (leading punctuation) pass through
//! unchanged. Mixed-case input is therefore normalized, not preserved.
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output style selector for [`convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Full-string uppercase folding
    Uppercase,
    /// Full-string lowercase folding
    Lowercase,
    /// Capitalize every word, whitespace preserved
    Title,
    /// First word lowercased, subsequent words capitalized, whitespace removed
    Camel,
    /// Every word capitalized, whitespace removed
    Pascal,
    /// Lowercase, whitespace runs become a single underscore
    Snake,
    /// Lowercase, whitespace runs become a single hyphen
    Kebab,
}

impl CaseMode {
    /// Every mode, in selector order
    pub const ALL: [CaseMode; 7] = [
        CaseMode::Uppercase,
        CaseMode::Lowercase,
        CaseMode::Title,
        CaseMode::Camel,
        CaseMode::Pascal,
        CaseMode::Snake,
        CaseMode::Kebab,
    ];

    /// Resolve a mode from its selector name.
    ///
    /// Returns `None` for unrecognized names; callers that need the legacy
    /// fallback behavior should use [`convert_named`], which treats an
    /// unrecognized name as the identity transform.
    pub fn from_name(name: &str) -> Option<CaseMode> {
        match name {
            "uppercase" => Some(CaseMode::Uppercase),
            "lowercase" => Some(CaseMode::Lowercase),
            "title" => Some(CaseMode::Title),
            "camel" => Some(CaseMode::Camel),
            "pascal" => Some(CaseMode::Pascal),
            "snake" => Some(CaseMode::Snake),
            "kebab" => Some(CaseMode::Kebab),
            _ => None,
        }
    }

    /// The selector name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            CaseMode::Uppercase => "uppercase",
            CaseMode::Lowercase => "lowercase",
            CaseMode::Title => "title",
            CaseMode::Camel => "camel",
            CaseMode::Pascal => "pascal",
            CaseMode::Snake => "snake",
            CaseMode::Kebab => "kebab",
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rewrite `input` into the selected case style. Total; never fails.
pub fn convert(input: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Uppercase => input.to_uppercase(),
        CaseMode::Lowercase => input.to_lowercase(),
        CaseMode::Title => title_case(input),
        CaseMode::Camel => camel_case(input),
        CaseMode::Pascal => input.split_whitespace().map(capitalize).collect(),
        CaseMode::Snake => fold_separated(input, '_'),
        CaseMode::Kebab => fold_separated(input, '-'),
    }
}

/// [`convert`] with a string-valued selector.
///
/// Unrecognized names return the input unchanged, never an error.
pub fn convert_named(input: &str, name: &str) -> String {
    match CaseMode::from_name(name) {
        Some(mode) => convert(input, mode),
        None => input.to_string(),
    }
}

/// Uppercase the first alphanumeric character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut seen_alnum = false;
    for c in word.chars() {
        if !seen_alnum && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
            seen_alnum = true;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Capitalize each word in place, preserving the original whitespace.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else if at_word_start {
            out.push(c);
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn camel_case(input: &str) -> String {
    let mut words = input.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut out = first.to_lowercase();
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}

/// Lowercase the string, replacing every whitespace run with `sep`.
fn fold_separated(input: &str, sep: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(sep);
            }
            in_run = true;
        } else {
            in_run = false;
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_and_lowercase() {
        assert_eq!(convert("Hello World", CaseMode::Uppercase), "HELLO WORLD");
        assert_eq!(convert("Hello World", CaseMode::Lowercase), "hello world");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(convert("hello world", CaseMode::Title), "Hello World");
        assert_eq!(convert("hELLO wORLD", CaseMode::Title), "Hello World");
    }

    #[test]
    fn test_title_preserves_whitespace() {
        assert_eq!(convert("hello  \t world", CaseMode::Title), "Hello  \t World");
    }

    #[test]
    fn test_title_skips_leading_punctuation() {
        assert_eq!(convert("(hello) world", CaseMode::Title), "(Hello) World");
        assert_eq!(convert("'quoted' text", CaseMode::Title), "'Quoted' Text");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(convert("hello world", CaseMode::Camel), "helloWorld");
        assert_eq!(convert("HELLO BIG world", CaseMode::Camel), "helloBigWorld");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(convert("hello world", CaseMode::Pascal), "HelloWorld");
        assert_eq!(convert("XML http request", CaseMode::Pascal), "XmlHttpRequest");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(convert("Hello World", CaseMode::Snake), "hello_world");
        assert_eq!(convert("a  b\tc", CaseMode::Snake), "a_b_c");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(convert("Hello World", CaseMode::Kebab), "hello-world");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_fold_to_separator() {
        assert_eq!(convert(" hi ", CaseMode::Snake), "_hi_");
    }

    #[test]
    fn test_empty_input_is_total() {
        for mode in CaseMode::ALL {
            assert_eq!(convert("", mode), "");
        }
    }

    #[test]
    fn test_digits_count_as_word_starts() {
        assert_eq!(convert("2nd place", CaseMode::Title), "2nd Place");
        assert_eq!(convert("2nd place", CaseMode::Pascal), "2ndPlace");
    }

    #[test]
    fn test_convert_named_known_modes() {
        assert_eq!(convert_named("hello world", "pascal"), "HelloWorld");
        assert_eq!(convert_named("Hello World", "snake"), "hello_world");
    }

    #[test]
    fn test_convert_named_unknown_mode_is_identity() {
        assert_eq!(convert_named("Hello World", "sPoNgEbOb"), "Hello World");
        assert_eq!(convert_named("Hello World", ""), "Hello World");
    }

    #[test]
    fn test_from_name_round_trips_name() {
        for mode in CaseMode::ALL {
            assert_eq!(CaseMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(CaseMode::from_name("bogus"), None);
    }
}
