//! Rule application: single rules, whole passes, and the fixpoint loop.
//!
//! # Functions
//!
//! - [`apply_rule`] - Apply one rule to a string
//! - [`apply_pass`] - Apply every rule of a table once, in order
//! - [`apply_rules_to_fixpoint`] - Repeat passes until nothing changes
//! - [`trace_to_fixpoint`] - Same, keeping every intermediate pass
//!
//! # Termination
//!
//! The loop stops as soon as a pass leaves the string unchanged. It is also
//! bounded by [`pass_budget`]; running out of passes means two rules are
//! undoing each other and is reported as [`PhoneticError::NoFixpoint`].

use std::borrow::Cow;

use tracing::{debug, error, trace};

use super::matching::{replace_all, replace_first, replace_literal_all, rewrite_matches};
use super::types::{Rewrite, RewriteRule, RuleTable};
use crate::error::{PhoneticError, Result};

/// Passes granted regardless of word length.
pub const MIN_PASS_BUDGET: usize = 16;

/// Additional passes granted per character of the cleaned word.
pub const PASSES_PER_CHAR: usize = 2;

/// Maximum number of passes for a cleaned word of `chars` characters.
///
/// Real words settle in a handful of passes; the budget is far above that.
#[inline]
pub fn pass_budget(chars: usize) -> usize {
    MIN_PASS_BUDGET + PASSES_PER_CHAR * chars
}

// ============================================================================
// Single rule
// ============================================================================

/// Check whether a rule would change anything in `s`.
#[inline]
pub fn can_apply(rule: &RewriteRule, s: &str) -> bool {
    rewrite_matches(&rule.rewrite, s)
}

/// Apply one rule to `s`.
///
/// Borrows `s` back when the rule does not match.
///
/// # Examples
///
/// ```rust
/// use nyingarn_phonetic::phonetic::{apply_rule, RewriteRule};
///
/// let rule = RewriteRule::literal(1, 7, "OO", "U");
/// assert_eq!(apply_rule(&rule, "GOOD"), "GUD");
/// assert_eq!(apply_rule(&rule, "KUT"), "KUT");
/// ```
pub fn apply_rule<'s>(rule: &RewriteRule, s: &'s str) -> Cow<'s, str> {
    match &rule.rewrite {
        Rewrite::LiteralAll(from) => replace_literal_all(s, from, &rule.replacement),
        Rewrite::PatternFirst(p) => replace_first(s, p, &rule.replacement),
        Rewrite::PatternAll(p) => replace_all(s, p, &rule.replacement),
    }
}

// ============================================================================
// Whole pass
// ============================================================================

/// Apply every rule in `rules` once, each rule seeing the previous rule's
/// output.
pub fn apply_pass(rules: &RuleTable, s: &str) -> String {
    rules.iter().fold(s.to_string(), |current, rule| {
        let rewritten = match apply_rule(rule, &current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match rewritten {
            Some(next) if next != current => {
                trace!(rule_id = rule.rule_id, rule = %rule.rule_name, from = %current, to = %next, "rule applied");
                next
            }
            _ => current,
        }
    })
}

// ============================================================================
// Fixpoint
// ============================================================================

/// Apply passes until a pass leaves the string unchanged.
///
/// # Errors
///
/// [`PhoneticError::NoFixpoint`] if `max_passes` passes ran without the string
/// settling.
pub fn apply_rules_to_fixpoint(rules: &RuleTable, s: &str, max_passes: usize) -> Result<String> {
    let mut current = s.to_string();
    for pass in 1..=max_passes {
        let next = apply_pass(rules, &current);
        if next == current {
            debug!(word = %s, code = %current, passes = pass, "fixpoint reached");
            return Ok(current);
        }
        trace!(pass, from = %current, to = %next, "pass changed word");
        current = next;
    }

    error!(word = %s, passes = max_passes, last = %current, "rule table did not converge");
    Err(PhoneticError::NoFixpoint {
        word: s.to_string(),
        passes: max_passes,
    })
}

/// Like [`apply_rules_to_fixpoint`] but returns `s` followed by the output of
/// every pass that changed it. The last element is the fixpoint.
pub fn trace_to_fixpoint(rules: &RuleTable, s: &str, max_passes: usize) -> Result<Vec<String>> {
    let mut steps = vec![s.to_string()];
    for _ in 0..max_passes {
        let current = &steps[steps.len() - 1];
        let next = apply_pass(rules, current);
        if &next == current {
            return Ok(steps);
        }
        steps.push(next);
    }

    Err(PhoneticError::NoFixpoint {
        word: s.to_string(),
        passes: max_passes,
    })
}
