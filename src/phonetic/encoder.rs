//! The Nyingarn phonetic encoder.
//!
//! [`NyingarnPhonetic`] ties the cleaner and the fixpoint driver to a rule
//! table. It is `Copy`, holds no mutable state, and can be shared freely
//! between threads.

use rayon::prelude::*;

use super::application::{apply_rules_to_fixpoint, pass_budget, trace_to_fixpoint};
use super::clean::clean;
use super::types::RuleTable;
use crate::error::Result;

/// A string-to-code encoder, as consumed by token filters.
pub trait Encoder: Send + Sync {
    /// Encode a single word.
    fn encode(&self, word: &str) -> Result<String>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, word: &str) -> Result<String> {
        (**self).encode(word)
    }
}

/// Encoder for the Nyingarn phonetic algorithm.
///
/// # Example
///
/// ```rust
/// use nyingarn_phonetic::phonetic::NyingarnPhonetic;
///
/// let encoder = NyingarnPhonetic::new().unwrap();
/// assert_eq!(encoder.encode("good").unwrap(), "KUT");
/// assert_eq!(encoder.encode_opt(None).unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NyingarnPhonetic<'r> {
    rules: &'r RuleTable,
}

impl NyingarnPhonetic<'static> {
    /// Encoder over the shared Nyingarn rule table.
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(RuleTable::shared()?))
    }
}

impl<'r> NyingarnPhonetic<'r> {
    /// Encoder over an explicit rule table.
    pub fn with_rules(rules: &'r RuleTable) -> Self {
        Self { rules }
    }

    /// The rule table this encoder applies.
    #[inline]
    pub fn rules(&self) -> &'r RuleTable {
        self.rules
    }

    /// Encode a word.
    ///
    /// Empty input, or input with no letters, encodes to the empty string
    /// without running any pass.
    ///
    /// # Errors
    ///
    /// [`PhoneticError::NoFixpoint`](crate::error::PhoneticError::NoFixpoint)
    /// if the rule table fails to converge.
    pub fn encode(&self, word: &str) -> Result<String> {
        let cleaned = clean(word);
        if cleaned.is_empty() {
            return Ok(cleaned);
        }
        let budget = pass_budget(cleaned.chars().count());
        apply_rules_to_fixpoint(self.rules, &cleaned, budget)
    }

    /// Absence-preserving form of [`encode`](Self::encode).
    pub fn encode_opt(&self, word: Option<&str>) -> Result<Option<String>> {
        word.map(|w| self.encode(w)).transpose()
    }

    /// Encode many words in parallel. Output order matches input order.
    ///
    /// Stops at the first error.
    pub fn encode_batch<S>(&self, words: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        words.par_iter().map(|w| self.encode(w.as_ref())).collect()
    }

    /// The cleaned word followed by every pass that changed it.
    ///
    /// Empty when the word has no letters.
    pub fn trace(&self, word: &str) -> Result<Vec<String>> {
        let cleaned = clean(word);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }
        let budget = pass_budget(cleaned.chars().count());
        trace_to_fixpoint(self.rules, &cleaned, budget)
    }
}

impl Encoder for NyingarnPhonetic<'_> {
    fn encode(&self, word: &str) -> Result<String> {
        NyingarnPhonetic::encode(self, word)
    }
}

/// Encode a word with the shared Nyingarn rule table.
pub fn encode(word: &str) -> Result<String> {
    NyingarnPhonetic::new()?.encode(word)
}

/// Absence-preserving form of [`encode`].
pub fn encode_opt(word: Option<&str>) -> Result<Option<String>> {
    NyingarnPhonetic::new()?.encode_opt(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhoneticError;
    use crate::phonetic::types::RewriteRule;

    #[test]
    fn test_absent_and_empty() {
        let enc = NyingarnPhonetic::new().unwrap();
        assert_eq!(enc.encode_opt(None).unwrap(), None);
        assert_eq!(enc.encode_opt(Some("")).unwrap(), Some(String::new()));
        assert_eq!(enc.encode("").unwrap(), "");
        assert_eq!(enc.encode("123").unwrap(), "");
        assert_eq!(enc.encode("123!!").unwrap(), "");
    }

    #[test]
    fn test_concrete_scenarios() {
        let enc = NyingarnPhonetic::new().unwrap();
        assert_eq!(enc.encode("A").unwrap(), "A");
        assert_eq!(enc.encode("good").unwrap(), "KUT");
        assert_eq!(enc.encode("go2od!").unwrap(), "KUT");
        assert_eq!(enc.encode("NGNG").unwrap(), "NG");
    }

    #[test]
    fn test_free_functions_match_encoder() {
        assert_eq!(encode("good").unwrap(), "KUT");
        assert_eq!(encode_opt(Some("NGNG")).unwrap(), Some("NG".to_string()));
        assert_eq!(encode_opt(None).unwrap(), None);
    }

    #[test]
    fn test_reduced_rule_table() {
        let table = RuleTable::new(vec![RewriteRule::literal(1, 1, "OO", "U")]);
        let enc = NyingarnPhonetic::with_rules(&table);
        assert_eq!(enc.encode("good").unwrap(), "GUD");
        assert_eq!(enc.rules().len(), 1);
    }

    #[test]
    fn test_no_fixpoint_surfaces() {
        let table = RuleTable::new(vec![
            RewriteRule::literal(1, 1, "A", "B"),
            RewriteRule::literal(2, 1, "BB", "A"),
            RewriteRule::literal(3, 1, "B", "AA"),
        ]);
        let enc = NyingarnPhonetic::with_rules(&table);
        match enc.encode("a") {
            Err(PhoneticError::NoFixpoint { word, passes }) => {
                assert_eq!(word, "A");
                assert_eq!(passes, pass_budget(1));
            }
            other => panic!("expected NoFixpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let enc = NyingarnPhonetic::new().unwrap();
        let codes = enc.encode_batch(&["good", "NGNG", "", "A"]).unwrap();
        assert_eq!(codes, vec!["KUT", "NG", "", "A"]);
    }

    #[test]
    fn test_trace() {
        let enc = NyingarnPhonetic::new().unwrap();
        assert_eq!(enc.trace("go2od").unwrap(), vec!["GOOD", "KUT"]);
        assert!(enc.trace("42").unwrap().is_empty());
    }

    #[test]
    fn test_trait_object() {
        let enc = NyingarnPhonetic::new().unwrap();
        let dyn_enc: &dyn Encoder = &enc;
        assert_eq!(dyn_enc.encode("good").unwrap(), "KUT");
    }
}
