//! Property-based tests for the encoder.
//!
//! # Properties Tested
//!
//! 1. **Determinism** - the same word always encodes to the same code
//! 2. **Alphabet closure** - words over the orthography encode to `[A-Z]+`
//! 3. **Fixpoint** - one more pass never changes a code
//! 4. **Non-letter invariance** - digits and punctuation never matter
//! 5. **Convergence** - the pass budget is never exhausted

#[cfg(test)]
mod tests {
    use super::super::application::{apply_pass, pass_budget, trace_to_fixpoint};
    use super::super::clean::clean;
    use super::super::encoder::NyingarnPhonetic;
    use super::super::rules::nyingarn_rules;
    use proptest::prelude::*;

    // ========================================================================
    // Proptest Generators
    // ========================================================================

    /// Words over the orthography: ASCII letters, apostrophes, and every
    /// special letter the rule table folds.
    fn arb_orthographic_word() -> impl Strategy<Value = String> {
        "[a-zA-Z'āēīōūĀĒĪŌŪŋŊñÑœŒûÛäÄʀƦθΘðÐ]{1,24}"
    }

    /// Non-letter noise: digits, ASCII punctuation, whitespace.
    fn arb_noise() -> impl Strategy<Value = String> {
        "[0-9 !?.,;:()\\[\\]{}<>*+=_/\\\\@#$%^&|~`\"-]{0,4}"
    }

    /// A word with noise spliced in after every character.
    fn arb_noisy_word() -> impl Strategy<Value = (String, String)> {
        arb_orthographic_word().prop_flat_map(|word| {
            let n = word.chars().count();
            (Just(word), prop::collection::vec(arb_noise(), n..=n))
        })
        .prop_map(|(word, noise)| {
            let mut noisy = String::new();
            for (c, junk) in word.chars().zip(noise.iter()) {
                noisy.push(c);
                noisy.push_str(junk);
            }
            (word, noisy)
        })
    }

    proptest! {
        /// Property 1: Determinism
        #[test]
        fn prop_deterministic(word in any::<String>()) {
            let enc = NyingarnPhonetic::new().unwrap();
            prop_assert_eq!(enc.encode(&word).unwrap(), enc.encode(&word).unwrap());
        }

        /// Property 2: Alphabet closure
        #[test]
        fn prop_alphabet_closure(word in arb_orthographic_word()) {
            let enc = NyingarnPhonetic::new().unwrap();
            let code = enc.encode(&word).unwrap();
            if clean(&word).is_empty() {
                prop_assert!(code.is_empty());
            } else {
                prop_assert!(!code.is_empty(), "{:?} encoded to nothing", word);
                prop_assert!(
                    code.chars().all(|c| c.is_ascii_uppercase()),
                    "{:?} encoded to {:?}", word, code
                );
            }
        }

        /// Property 3: Fixpoint
        #[test]
        fn prop_code_is_fixpoint(word in any::<String>()) {
            let rules = nyingarn_rules().unwrap();
            let enc = NyingarnPhonetic::with_rules(&rules);
            let code = enc.encode(&word).unwrap();
            if !code.is_empty() {
                prop_assert_eq!(apply_pass(&rules, &code), code);
            }
        }

        /// Property 4a: Encoding the cleaned word gives the same code
        #[test]
        fn prop_clean_is_transparent(word in any::<String>()) {
            let enc = NyingarnPhonetic::new().unwrap();
            prop_assert_eq!(enc.encode(&word).unwrap(), enc.encode(&clean(&word)).unwrap());
        }

        /// Property 4b: Inserted noise is ignored
        #[test]
        fn prop_noise_is_ignored((word, noisy) in arb_noisy_word()) {
            let enc = NyingarnPhonetic::new().unwrap();
            prop_assert_eq!(enc.encode(&word).unwrap(), enc.encode(&noisy).unwrap());
        }

        /// Property 5: Convergence well inside the budget
        #[test]
        fn prop_converges(word in arb_orthographic_word()) {
            let rules = nyingarn_rules().unwrap();
            let cleaned = clean(&word);
            prop_assume!(!cleaned.is_empty());
            let budget = pass_budget(cleaned.chars().count());
            let steps = trace_to_fixpoint(&rules, &cleaned, budget).unwrap();
            prop_assert!(steps.len() <= budget);
        }
    }

    #[test]
    fn test_codes_are_stable_under_reencoding() {
        let enc = NyingarnPhonetic::new().unwrap();
        for word in ["good", "nyingarn", "kaurna", "gamilaraay", "œuf", "Θeo"] {
            let code = enc.encode(word).unwrap();
            assert_eq!(enc.encode(&code).unwrap(), code, "{word}");
        }
    }
}
