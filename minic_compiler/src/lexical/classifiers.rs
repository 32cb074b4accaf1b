//! Lexeme classifiers
//!
//! Each classifier looks at the unscanned remainder of the source and reports
//! how many bytes its token category would consume there. Classifiers are
//! independent of one another and never allocate; the analyzer turns a
//! [`Scan`] into a token.

/// Outcome of running one classifier at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The category does not start here
    NoMatch,
    /// A complete lexeme of this many bytes
    Matched(usize),
    /// The lexeme started but input ended before it closed; carries the
    /// number of bytes examined (always to end of input)
    Unterminated(usize),
}

/// Only letters open an identifier; a leading `_` is skipped like any other
/// unrecognized character
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn run_length(rest: &str, accept: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|(_, ch)| !accept(*ch))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len())
}

fn non_empty(len: usize) -> Scan {
    if len == 0 {
        Scan::NoMatch
    } else {
        Scan::Matched(len)
    }
}

/// Maximal run of ASCII alphanumerics and underscores
pub fn scan_identifier(rest: &str) -> Scan {
    non_empty(run_length(rest, is_identifier_continue))
}

/// Maximal run of decimal digits
pub fn scan_number(rest: &str) -> Scan {
    non_empty(run_length(rest, |ch| ch.is_ascii_digit()))
}

/// Double-quoted literal, ending at the first unescaped closing quote
///
/// A backslash makes the following character part of the literal whatever
/// it is. Escape sequences are kept verbatim, not decoded.
pub fn scan_string_literal(rest: &str) -> Scan {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, '"')) => {}
        _ => return Scan::NoMatch,
    }

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '"' => return Scan::Matched(idx + 1),
            _ => {}
        }
    }

    Scan::Unterminated(rest.len())
}

/// `//` through, but not including, the next `\r` or `\n`
pub fn scan_single_line_comment(rest: &str) -> Scan {
    if !rest.starts_with("//") {
        return Scan::NoMatch;
    }
    let len = rest.find(['\r', '\n']).unwrap_or(rest.len());
    Scan::Matched(len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    SeekingStar,
    SeekingSlash,
}

/// `/*` through the first following `*/`, delimiters included
///
/// The closing `*` must come after the opening pair, so `/*/` does not
/// close itself. Any character other than `/` after a `*` sends the scan
/// back to looking for a `*`, and that character is not looked at again,
/// so `**/` does not close.
pub fn scan_multi_line_comment(rest: &str) -> Scan {
    const OPEN: &str = "/*";
    if !rest.starts_with(OPEN) {
        return Scan::NoMatch;
    }

    let mut state = CommentState::SeekingStar;
    for (idx, ch) in rest[OPEN.len()..].char_indices() {
        state = match (state, ch) {
            (CommentState::SeekingStar, '*') => CommentState::SeekingSlash,
            (CommentState::SeekingStar, _) => CommentState::SeekingStar,
            (CommentState::SeekingSlash, '/') => return Scan::Matched(OPEN.len() + idx + 1),
            (CommentState::SeekingSlash, _) => CommentState::SeekingStar,
        };
    }

    Scan::Unterminated(rest.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_start_is_letter_only() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(!is_identifier_start('_'));
        assert!(!is_identifier_start('9'));
        assert!(is_identifier_continue('_'));
    }

    #[test]
    fn test_identifier_run() {
        assert_eq!(scan_identifier("foo_bar2 = 1"), Scan::Matched(8));
        assert_eq!(scan_identifier("x"), Scan::Matched(1));
        assert_eq!(scan_identifier("+x"), Scan::NoMatch);
    }

    #[test]
    fn test_number_stops_at_non_digit() {
        assert_eq!(scan_number("123;"), Scan::Matched(3));
        assert_eq!(scan_number("3.14"), Scan::Matched(1));
        assert_eq!(scan_number("x1"), Scan::NoMatch);
    }

    #[test]
    fn test_string_ends_at_closing_quote() {
        let src = r#""hi" + "there""#;
        assert_eq!(scan_string_literal(src), Scan::Matched(4));
        assert_eq!(scan_string_literal(r#""""#), Scan::Matched(2));
    }

    #[test]
    fn test_string_escaped_quote_does_not_close() {
        let src = r#""say \"hi\"" rest"#;
        assert_eq!(scan_string_literal(src), Scan::Matched(12));
        assert_eq!(scan_string_literal(r#""a\\" b"#), Scan::Matched(5));
    }

    #[test]
    fn test_string_unterminated() {
        assert_eq!(scan_string_literal("\"abc"), Scan::Unterminated(4));
        assert_eq!(scan_string_literal("\"abc\\\""), Scan::Unterminated(6));
        assert_eq!(scan_string_literal("abc"), Scan::NoMatch);
    }

    #[test]
    fn test_single_line_comment_excludes_terminator() {
        assert_eq!(scan_single_line_comment("// a\nint"), Scan::Matched(4));
        assert_eq!(scan_single_line_comment("// a\r\nint"), Scan::Matched(4));
        assert_eq!(scan_single_line_comment("// to eof"), Scan::Matched(9));
        assert_eq!(scan_single_line_comment("/ x"), Scan::NoMatch);
    }

    #[test]
    fn test_multi_line_comment_closes() {
        assert_eq!(scan_multi_line_comment("/* a */ x"), Scan::Matched(7));
        assert_eq!(scan_multi_line_comment("/**/"), Scan::Matched(4));
        assert_eq!(scan_multi_line_comment("/* a\n b */"), Scan::Matched(10));
    }

    #[test]
    fn test_multi_line_comment_star_runs() {
        assert_eq!(scan_multi_line_comment("/* a **/"), Scan::Unterminated(8));
        assert_eq!(scan_multi_line_comment("/* a **/ b */"), Scan::Matched(13));
        assert_eq!(scan_multi_line_comment("/* a ***/"), Scan::Matched(9));
        assert_eq!(scan_multi_line_comment("/* * / */"), Scan::Matched(9));
    }

    #[test]
    fn test_multi_line_comment_does_not_close_on_opening_star() {
        assert_eq!(scan_multi_line_comment("/*/"), Scan::Unterminated(3));
        assert_eq!(scan_multi_line_comment("/* never closes"), Scan::Unterminated(15));
        assert_eq!(scan_multi_line_comment("// x"), Scan::NoMatch);
    }
}
