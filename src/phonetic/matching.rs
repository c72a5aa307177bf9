//! Match and replace primitives for the three rule kinds.
//!
//! # Functions
//!
//! - [`rewrite_matches`] - Does a rewrite match anywhere in the string?
//! - [`replace_literal_all`] - Literal, every occurrence
//! - [`replace_first`] / [`replace_all`] - Pattern, leftmost / every occurrence
//!
//! All scans run left to right over the current string and never rescan text
//! inserted by the same replacement.

use std::borrow::Cow;

use super::types::{Pattern, Rewrite};

// ============================================================================
// Matching
// ============================================================================

/// Check whether a rewrite matches anywhere in `s`.
#[inline]
pub fn rewrite_matches(rewrite: &Rewrite, s: &str) -> bool {
    match rewrite {
        Rewrite::LiteralAll(text) => !text.is_empty() && s.contains(text.as_str()),
        Rewrite::PatternFirst(p) | Rewrite::PatternAll(p) => pattern_matches(p, s),
    }
}

/// Check whether a pattern matches anywhere in `s`.
#[inline]
pub fn pattern_matches(pattern: &Pattern, s: &str) -> bool {
    match pattern {
        Pattern::Regex(re) => re.is_match(s),
        Pattern::Doubled { except } => find_doubled(s, *except, 0).is_some(),
    }
}

/// Find the leftmost doubled character at or after byte offset `from`.
///
/// Returns `(start, end, ch)` where `s[start..end]` is `ch` written twice.
fn find_doubled(s: &str, except: char, from: usize) -> Option<(usize, usize, char)> {
    let mut chars = s[from..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == except {
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if next == c {
                let start = from + i;
                return Some((start, start + 2 * c.len_utf8(), c));
            }
        }
    }
    None
}

/// Expand a `${1}` / `$1` template for the doubled-letter matcher.
fn expand_doubled(template: &str, c: char) -> String {
    let mut buf = [0u8; 4];
    let letter: &str = c.encode_utf8(&mut buf);
    template.replace("${1}", letter).replace("$1", letter)
}

// ============================================================================
// Replacement
// ============================================================================

/// Replace every non-overlapping occurrence of the literal `from`.
///
/// An empty `from` never matches.
pub fn replace_literal_all<'s>(s: &'s str, from: &str, to: &str) -> Cow<'s, str> {
    if from.is_empty() || !s.contains(from) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace(from, to))
}

/// Replace the leftmost match of `pattern`.
pub fn replace_first<'s>(s: &'s str, pattern: &Pattern, replacement: &str) -> Cow<'s, str> {
    match pattern {
        Pattern::Regex(re) => re.replacen(s, 1, replacement),
        Pattern::Doubled { except } => match find_doubled(s, *except, 0) {
            Some((start, end, c)) => {
                let mut out = String::with_capacity(s.len());
                out.push_str(&s[..start]);
                out.push_str(&expand_doubled(replacement, c));
                out.push_str(&s[end..]);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(s),
        },
    }
}

/// Replace every non-overlapping match of `pattern`, left to right.
pub fn replace_all<'s>(s: &'s str, pattern: &Pattern, replacement: &str) -> Cow<'s, str> {
    match pattern {
        Pattern::Regex(re) => re.replace_all(s, replacement),
        Pattern::Doubled { except } => {
            let Some(mut found) = find_doubled(s, *except, 0) else {
                return Cow::Borrowed(s);
            };
            let mut out = String::with_capacity(s.len());
            let mut last_end = 0;
            loop {
                let (start, end, c) = found;
                out.push_str(&s[last_end..start]);
                out.push_str(&expand_doubled(replacement, c));
                last_end = end;
                match find_doubled(s, *except, end) {
                    Some(next) => found = next,
                    None => break,
                }
            }
            out.push_str(&s[last_end..]);
            Cow::Owned(out)
        }
    }
}
