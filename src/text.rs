//! Unicode-aware text utilities.
//!
//! Lengths are counted in codepoints, never bytes, so CJK and accented text
//! score the same as ASCII of equal visual length.

use crate::patterns::{EXCESS_NEWLINES, WHITESPACE};

/// Collapses every whitespace run to one space and trims both ends.
#[must_use]
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Normalizes each line independently, keeping paragraph breaks.
///
/// Runs of three or more newlines collapse to exactly two.
#[must_use]
pub fn normalize_preserving_newlines(text: &str) -> String {
    let lines: Vec<String> = text.split('\n').map(normalize).collect();
    let joined = lines.join("\n");
    EXCESS_NEWLINES.replace_all(&joined, "\n\n").trim().to_string()
}

/// Codepoint length of `text`.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Counts ASCII commas and CJK ideographic commas.
#[must_use]
pub fn count_commas(text: &str) -> usize {
    text.chars().filter(|&c| c == ',' || c == '，').count()
}

/// Number of whitespace-delimited tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Builds a short leading excerpt of at most `max_len` characters plus an
/// optional `"..."` marker.
///
/// Cuts after the last sentence terminator in the back half of the window,
/// otherwise at the last whitespace there, otherwise hard-cuts.
#[must_use]
pub fn excerpt(text: &str, max_len: usize) -> String {
    let text = normalize(text);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text;
    }

    let window = (max_len / 2..max_len).rev();

    for i in window.clone() {
        if chars[i] == '.' || chars[i] == '。' {
            return chars[..=i].iter().collect();
        }
    }

    for i in window {
        if chars[i].is_whitespace() {
            let mut out: String = chars[..i].iter().collect();
            out.push_str("...");
            return out;
        }
    }

    let mut out: String = chars[..max_len.saturating_sub(3)].iter().collect();
    out.push_str("...");
    out
}

/// Escapes text for inclusion as HTML character data.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Hello \n\t  world  "), "Hello world");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{a0}caf\u{e9}\u{a0}"), "caf\u{e9}");
    }

    #[test]
    fn preserve_newlines_keeps_paragraphs() {
        let input = "  First   line \n\n\n\n Second\tline  \n";
        assert_eq!(normalize_preserving_newlines(input), "First line\n\nSecond line");
    }

    #[test]
    fn char_len_counts_codepoints() {
        assert_eq!(char_len("日本語"), 3);
        assert_eq!("日本語".len(), 9);
    }

    #[test]
    fn commas_ascii_and_cjk() {
        assert_eq!(count_commas("a, b, c"), 2);
        assert_eq!(count_commas("一，二，三"), 2);
        assert_eq!(count_commas("none here"), 0);
    }

    #[test]
    fn words() {
        assert_eq!(count_words("  one two\nthree\t four "), 4);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn excerpt_short_text_unchanged() {
        assert_eq!(excerpt("Short text.", 200), "Short text.");
    }

    #[test]
    fn excerpt_cuts_at_sentence() {
        let text = format!("{}. {}", "a".repeat(120), "b".repeat(200));
        let result = excerpt(&text, 200);
        assert_eq!(result, format!("{}.", "a".repeat(120)));
    }

    #[test]
    fn excerpt_cuts_at_word_boundary() {
        let text = "word ".repeat(60);
        let result = excerpt(&text, 200);
        assert!(result.ends_with("..."));
        assert!(char_len(&result) <= 203);
        assert!(!result.contains(" ..."));
    }

    #[test]
    fn excerpt_hard_cut() {
        let text = "x".repeat(500);
        let result = excerpt(&text, 200);
        assert_eq!(char_len(&result), 200);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn excerpt_never_exceeds_bound() {
        for len in [0, 50, 199, 200, 201, 350, 1000] {
            let text = "lorem ipsum. ".repeat(len / 13 + 1);
            assert!(char_len(&excerpt(&text, 200)) <= 203);
        }
    }

    #[test]
    fn escape() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }
}
