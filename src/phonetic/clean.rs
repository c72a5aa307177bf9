//! Input cleaning: keep letters, uppercase them.
//!
//! A letter is any code point in Unicode general category `L` (`Lu`, `Ll`,
//! `Lt`, `Lm`, `Lo`). Combining marks, digits, punctuation, separators and
//! symbols are deleted. Uppercasing uses the locale-independent Unicode
//! mapping, so full mappings such as `ß → SS` apply and the result never
//! depends on the host locale.
//!
//! A handful of letters uppercase to a base letter plus a combining mark
//! (`ǰ → J̌`). The mark is dropped, so a cleaned word is letters only and
//! cleaning is idempotent.

use std::sync::OnceLock;

use regex::Regex;

fn non_letters() -> &'static Regex {
    static NON_LETTERS: OnceLock<Regex> = OnceLock::new();
    NON_LETTERS.get_or_init(|| Regex::new(r"\P{L}+").expect("letter class is a valid pattern"))
}

/// Check whether a character is a letter in the general Unicode sense.
#[inline]
pub fn is_letter(c: char) -> bool {
    let mut buf = [0u8; 4];
    !non_letters().is_match(c.encode_utf8(&mut buf))
}

/// Strip non-letters and uppercase the rest.
///
/// # Examples
///
/// ```rust
/// use nyingarn_phonetic::phonetic::clean;
///
/// assert_eq!(clean("go2od!"), "GOOD");
/// assert_eq!(clean("ŋarra"), "ŊARRA");
/// assert_eq!(clean("123"), "");
/// ```
pub fn clean(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let upper = non_letters().replace_all(input, "").to_uppercase();
    if non_letters().is_match(&upper) {
        non_letters().replace_all(&upper, "").into_owned()
    } else {
        upper
    }
}

/// Absence-preserving form of [`clean`].
#[inline]
pub fn clean_opt(input: Option<&str>) -> Option<String> {
    input.map(clean)
}
