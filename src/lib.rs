//! # nyingarn-phonetic
//!
//! Phonetic normalization for Nyingarn orthography.
//!
//! Differently spelled words that sound the same collapse to one canonical
//! code, so a search index keyed on the code matches spelling variants. The
//! encoder plays the role Soundex or Metaphone play for English, but is built
//! for one orthography's consonant and vowel inventory and diacritics.
//!
//! ## Example
//!
//! ```rust
//! use nyingarn_phonetic::prelude::*;
//!
//! let encoder = NyingarnPhonetic::new().unwrap();
//! assert_eq!(encoder.encode("good").unwrap(), "KUT");
//!
//! let tokens = PhoneticFilter::new(
//!     whitespace_tokens("good NGNG"),
//!     encoder,
//!     FilterSettings { replace: true },
//! )
//! .collect::<Result<Vec<Token>>>()
//! .unwrap();
//! assert_eq!(tokens[0].text, "KUT");
//! assert_eq!(tokens[1].text, "NG");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod filter;
pub mod phonetic;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{PhoneticError, Result};
    pub use crate::filter::{whitespace_tokens, FilterSettings, PhoneticFilter, Token};
    pub use crate::phonetic::{
        clean, encode, encode_opt, Encoder, NyingarnPhonetic, RewriteRule, RuleKind, RuleTable,
    };
}
