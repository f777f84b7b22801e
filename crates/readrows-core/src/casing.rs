//! Default field-name to column-name conversion.

/// Converts an upper camel case identifier into a lower case, underscore
/// separated column name.
///
/// A run of capitals followed by a capitalized word is split into the
/// acronym and the word, so `URLPrefix` becomes `url_prefix`. A trailing run
/// of capitals with nothing after it stays a single segment (`FooID` becomes
/// `foo_id`). Identifiers that do not start with a capital, including
/// ordinary snake case Rust field names, are only lower cased.
///
/// ```
/// use readrows_core::casing::to_snake_case;
///
/// assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
/// assert_eq!(to_snake_case("URLPrefix"), "url_prefix");
/// assert_eq!(to_snake_case("created_at"), "created_at");
/// ```
pub fn to_snake_case(ident: &str) -> String {
    let mut parts = vec![];
    let mut rest = ident;

    while let Some(word) = Word::next(rest) {
        if !word.acronym.is_empty() {
            parts.push(word.acronym);
        }

        parts.push(word.word);
        rest = &rest[word.len..];
    }

    if !rest.is_empty() {
        parts.push(rest);
    }

    parts.join("_").to_lowercase()
}

/// One match of `{upper*}{upper}{non-upper+}` at the start of the input.
struct Word<'a> {
    /// Capitals preceding the capital that starts `word`, possibly empty
    acronym: &'a str,

    /// Capital letter plus the non-capital run that follows it
    word: &'a str,

    /// Number of bytes consumed
    len: usize,
}

impl<'a> Word<'a> {
    fn next(src: &'a str) -> Option<Self> {
        let bytes = src.as_bytes();

        let upper = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
        if upper == 0 {
            return None;
        }

        // ASCII capitals are never part of a multi-byte sequence, so every
        // offset computed here falls on a char boundary.
        let lower = bytes[upper..]
            .iter()
            .take_while(|b| !b.is_ascii_uppercase())
            .count();
        if lower == 0 {
            return None;
        }

        let len = upper + lower;

        Some(Word {
            acronym: &src[..upper - 1],
            word: &src[upper - 1..len],
            len,
        })
    }
}
