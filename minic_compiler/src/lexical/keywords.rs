//! Reserved word table
//!
//! Each letter that begins at least one reserved word maps to an ordered
//! list of `(word, kind)` pairs. The lexer checks a letter's list in order
//! and the first full-word match wins. Letters absent from the table go
//! straight to identifier scanning.

use crate::lexical::classifiers::is_identifier_continue;
use crate::tokens::TokenKind;

const DT: TokenKind = TokenKind::DataType;
const KW: TokenKind = TokenKind::Keyword;

pub type KeywordEntry = (&'static str, TokenKind);

static KEYWORDS_A: [KeywordEntry; 1] = [("auto", KW)];
static KEYWORDS_B: [KeywordEntry; 1] = [("break", KW)];
static KEYWORDS_C: [KeywordEntry; 4] = [
    ("case", KW),
    ("char", DT),
    ("const", KW),
    ("continue", KW),
];
static KEYWORDS_D: [KeywordEntry; 3] = [("default", KW), ("double", DT), ("do", KW)];
static KEYWORDS_E: [KeywordEntry; 3] = [("else", KW), ("enum", DT), ("extern", KW)];
static KEYWORDS_F: [KeywordEntry; 2] = [("float", DT), ("for", KW)];
static KEYWORDS_G: [KeywordEntry; 1] = [("goto", KW)];
static KEYWORDS_I: [KeywordEntry; 2] = [("if", KW), ("int", DT)];
static KEYWORDS_L: [KeywordEntry; 1] = [("long", DT)];
static KEYWORDS_R: [KeywordEntry; 2] = [("register", KW), ("return", KW)];
static KEYWORDS_S: [KeywordEntry; 6] = [
    ("short", DT),
    ("signed", DT),
    ("sizeof", KW),
    ("static", KW),
    ("struct", DT),
    ("switch", KW),
];
static KEYWORDS_T: [KeywordEntry; 1] = [("typedef", DT)];
static KEYWORDS_U: [KeywordEntry; 2] = [("union", DT), ("unsigned", DT)];
static KEYWORDS_V: [KeywordEntry; 2] = [("void", DT), ("volatile", KW)];
static KEYWORDS_W: [KeywordEntry; 1] = [("while", KW)];

/// Ordered candidate list for a leading character (empty when none)
pub fn keywords_for(first: char) -> &'static [KeywordEntry] {
    match first {
        'a' => &KEYWORDS_A,
        'b' => &KEYWORDS_B,
        'c' => &KEYWORDS_C,
        'd' => &KEYWORDS_D,
        'e' => &KEYWORDS_E,
        'f' => &KEYWORDS_F,
        'g' => &KEYWORDS_G,
        'i' => &KEYWORDS_I,
        'l' => &KEYWORDS_L,
        'r' => &KEYWORDS_R,
        's' => &KEYWORDS_S,
        't' => &KEYWORDS_T,
        'u' => &KEYWORDS_U,
        'v' => &KEYWORDS_V,
        'w' => &KEYWORDS_W,
        _ => &[],
    }
}

/// Match a reserved word at the start of `rest`
///
/// A word only matches when it is not immediately followed by an
/// identifier character, so `intx` never yields `int`.
pub fn match_keyword(rest: &str) -> Option<KeywordEntry> {
    let first = rest.chars().next()?;
    keywords_for(first).iter().copied().find(|(word, _)| {
        rest.starts_with(word)
            && !rest[word.len()..]
                .chars()
                .next()
                .is_some_and(is_identifier_continue)
    })
}

/// Every reserved word with its kind, in table order
pub fn all_keywords() -> impl Iterator<Item = KeywordEntry> {
    ('a'..='z').flat_map(|letter| keywords_for(letter).iter().copied())
}

pub fn is_data_type(word: &str) -> bool {
    match_keyword(word).is_some_and(|(kw, kind)| kw.len() == word.len() && kind == DT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_word_matches() {
        assert_eq!(match_keyword("int main"), Some(("int", DT)));
        assert_eq!(match_keyword("return;"), Some(("return", KW)));
        assert_eq!(match_keyword("struct{"), Some(("struct", DT)));
    }

    #[test]
    fn test_prefix_is_not_a_keyword() {
        assert_eq!(match_keyword("intx"), None);
        assert_eq!(match_keyword("int_"), None);
        assert_eq!(match_keyword("int2"), None);
        assert_eq!(match_keyword("doubles"), None);
    }

    #[test]
    fn test_priority_order_still_requires_full_word() {
        // "do" is listed after "double"; a bare "do" must still match
        assert_eq!(match_keyword("do {"), Some(("do", KW)));
        assert_eq!(match_keyword("double x"), Some(("double", DT)));
        // "for" after "float"
        assert_eq!(match_keyword("for("), Some(("for", KW)));
    }

    #[test]
    fn test_no_keyword_is_accepted_as_prefix() {
        for (word, _) in all_keywords() {
            let longer = format!("{}z", word);
            assert_eq!(match_keyword(&longer), None, "{} matched as prefix", word);
            assert!(match_keyword(word).is_some(), "{} did not match", word);
        }
    }

    #[test]
    fn test_letters_without_keywords() {
        assert!(keywords_for('h').is_empty());
        assert!(keywords_for('I').is_empty());
        assert_eq!(match_keyword("Int"), None);
    }

    #[test]
    fn test_data_type_classification() {
        let data_types: Vec<_> = all_keywords()
            .filter(|(_, kind)| *kind == DT)
            .map(|(word, _)| word)
            .collect();
        assert_eq!(data_types.len(), 13);
        assert!(is_data_type("unsigned"));
        assert!(!is_data_type("return"));
        assert!(!is_data_type("integer"));
        assert_eq!(all_keywords().count(), 32);
    }
}
