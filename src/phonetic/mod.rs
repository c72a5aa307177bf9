//! Phonetic normalization of Nyingarn orthography.
//!
//! Spelling variants that sound alike collapse to one canonical code made of
//! the letters `A`-`Z`, suitable as an index key for fuzzy search.
//!
//! # Pipeline
//!
//! ```text
//! word ──clean──▶ CLEANED ──pass──▶ … ──pass──▶ CODE   (a pass that changes nothing)
//! ```
//!
//! 1. [`clean`] keeps letters only and uppercases them.
//! 2. [`apply_pass`] runs every rule of the [`RuleTable`] once, in order.
//! 3. [`apply_rules_to_fixpoint`] repeats passes until one changes nothing.
//!
//! # Usage
//!
//! ```rust
//! use nyingarn_phonetic::phonetic::NyingarnPhonetic;
//!
//! let encoder = NyingarnPhonetic::new().unwrap();
//! assert_eq!(encoder.encode("good").unwrap(), "KUT");
//! assert_eq!(encoder.encode("go2od!").unwrap(), "KUT");
//! assert_eq!(encoder.encode("NGNG").unwrap(), "NG");
//! ```
//!
//! # Properties
//!
//! - **Deterministic**: the rule table is immutable after construction
//! - **Lossy**: many spellings share a code; codes cannot be decoded
//! - **Stable**: one more pass over a code returns the code unchanged
//! - **Letters only**: digits and punctuation never influence the code

pub mod application;
pub mod clean;
pub mod encoder;
pub mod matching;
pub mod rules;
pub mod types;

mod properties;

pub use application::{
    apply_pass, apply_rule, apply_rules_to_fixpoint, can_apply, pass_budget, trace_to_fixpoint,
    MIN_PASS_BUDGET, PASSES_PER_CHAR,
};
pub use clean::{clean, clean_opt, is_letter};
pub use encoder::{encode, encode_opt, Encoder, NyingarnPhonetic};
pub use matching::{pattern_matches, replace_all, replace_first, replace_literal_all, rewrite_matches};
pub use rules::nyingarn_rules;
pub use types::{Pattern, Rewrite, RewriteRule, RuleKind, RuleTable};
