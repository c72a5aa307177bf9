//! Phonetic token filter.
//!
//! Adapts a stream of word tokens, replacing each token by its phonetic code
//! or injecting the code next to it. Tokenization itself belongs upstream;
//! [`whitespace_tokens`] is a minimal stand-in for tests and the CLI.
//!
//! # Modes
//!
//! ```text
//! | replace | input          | output                              |
//! |---------|----------------|-------------------------------------|
//! | true    | good(+1)       | KUT(+1)                             |
//! | false   | good(+1)       | KUT(+1), good(+0)                   |
//! | either  | A(+1)          | A(+1)            (code == original) |
//! | either  | 42(+1)         | 42(+1)           (empty code)       |
//! ```
//!
//! In inject mode the code comes first and carries the original position
//! increment; the original follows at the same position.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::phonetic::Encoder;

/// Filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Replace the original token with its code (`true`) or emit both
    /// (`false`).
    pub replace: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self { replace: true }
    }
}

/// A word token with its position increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text
    pub text: String,
    /// Distance from the previous token's position (0 = same position)
    pub position_increment: u32,
}

impl Token {
    /// A token at the next position.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position_increment: 1,
        }
    }

    /// A token stacked on the previous token's position.
    pub fn stacked(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position_increment: 0,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@+{}", self.text, self.position_increment)
    }
}

/// Split text on Unicode whitespace into tokens at consecutive positions.
pub fn whitespace_tokens(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.split_whitespace().map(Token::new)
}

/// Iterator adapter applying an [`Encoder`] to every token.
///
/// Encoder errors are yielded as `Err` items and are not recovered from;
/// they mean the rule table is broken.
pub struct PhoneticFilter<I, E> {
    input: I,
    encoder: E,
    settings: FilterSettings,
    pending: VecDeque<Token>,
}

impl<I, E> PhoneticFilter<I, E>
where
    I: Iterator<Item = Token>,
    E: Encoder,
{
    /// Wrap a token stream.
    pub fn new(input: I, encoder: E, settings: FilterSettings) -> Self {
        Self {
            input,
            encoder,
            settings,
            pending: VecDeque::with_capacity(1),
        }
    }

    fn process(&mut self, mut token: Token) -> Result<Token> {
        if token.text.is_empty() {
            return Ok(token);
        }

        let code = self.encoder.encode(&token.text)?;
        if code.is_empty() || code == token.text {
            return Ok(token);
        }

        if self.settings.replace {
            token.text = code;
            return Ok(token);
        }

        let phonetic = Token {
            text: code,
            position_increment: token.position_increment,
        };
        token.position_increment = 0;
        self.pending.push_back(token);
        Ok(phonetic)
    }
}

impl<I, E> Iterator for PhoneticFilter<I, E>
where
    I: Iterator<Item = Token>,
    E: Encoder,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(saved) = self.pending.pop_front() {
            return Some(Ok(saved));
        }
        let token = self.input.next()?;
        Some(self.process(token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.input.size_hint();
        let pending = self.pending.len();
        let upper = if self.settings.replace {
            upper.map(|u| u + pending)
        } else {
            upper.and_then(|u| u.checked_mul(2)).map(|u| u + pending)
        };
        (lower + pending, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhoneticError;
    use crate::phonetic::NyingarnPhonetic;

    fn run(text: &str, replace: bool) -> Vec<Token> {
        let encoder = NyingarnPhonetic::new().unwrap();
        PhoneticFilter::new(whitespace_tokens(text), encoder, FilterSettings { replace })
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_default_settings_replace() {
        assert!(FilterSettings::default().replace);
    }

    #[test]
    fn test_replace_mode() {
        assert_eq!(run("good NGNG", true), vec![Token::new("KUT"), Token::new("NG")]);
    }

    #[test]
    fn test_inject_mode() {
        assert_eq!(
            run("good", false),
            vec![Token::new("KUT"), Token::stacked("good")]
        );
    }

    #[test]
    fn test_unchanged_code_passes_through() {
        assert_eq!(run("A", false), vec![Token::new("A")]);
        assert_eq!(run("A", true), vec![Token::new("A")]);
    }

    #[test]
    fn test_empty_code_keeps_original() {
        assert_eq!(run("42 good", true), vec![Token::new("42"), Token::new("KUT")]);
    }

    #[test]
    fn test_zero_length_token_passes_through() {
        let encoder = NyingarnPhonetic::new().unwrap();
        let out: Vec<_> = PhoneticFilter::new(
            vec![Token::new("")].into_iter(),
            encoder,
            FilterSettings::default(),
        )
        .collect::<Result<_>>()
        .unwrap();
        assert_eq!(out, vec![Token::new("")]);
    }

    #[test]
    fn test_encoder_error_is_yielded() {
        struct Broken;
        impl Encoder for Broken {
            fn encode(&self, word: &str) -> Result<String> {
                Err(PhoneticError::NoFixpoint {
                    word: word.to_string(),
                    passes: 0,
                })
            }
        }

        let mut filter =
            PhoneticFilter::new(whitespace_tokens("good"), Broken, FilterSettings::default());
        assert!(matches!(filter.next(), Some(Err(PhoneticError::NoFixpoint { .. }))));
        assert!(filter.next().is_none());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new("KUT").to_string(), "KUT@+1");
        assert_eq!(Token::stacked("good").to_string(), "good@+0");
    }

    #[test]
    fn test_settings_json() {
        let s: FilterSettings = serde_json::from_str("{}").unwrap();
        assert!(s.replace);
        let s: FilterSettings = serde_json::from_str(r#"{"replace": false}"#).unwrap();
        assert!(!s.replace);
    }
}
