//! Type definitions for phonetic rewrite rules.
//!
//! A rule is an immutable `(kind, match, replacement)` record. The kind decides
//! how the match text is interpreted and how many occurrences are rewritten:
//!
//! | Kind            | Match text         | Occurrences rewritten          |
//! |-----------------|--------------------|--------------------------------|
//! | `LiteralAll`    | exact substring    | every non-overlapping one      |
//! | `PatternFirst`  | regular expression | the leftmost one               |
//! | `PatternAll`    | regular expression | every non-overlapping one      |
//!
//! Kinds are not interchangeable. A literal rule whose text happens to look
//! like a regular expression (for example `A-I`) is still matched literally.

use regex::Regex;

use crate::error::{PhoneticError, Result};

// ============================================================================
// Rule kinds
// ============================================================================

/// How a rule's match text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Replace every non-overlapping occurrence of an exact substring
    LiteralAll,
    /// Replace the leftmost match of a pattern
    PatternFirst,
    /// Replace every non-overlapping match of a pattern
    PatternAll,
}

/// A compiled pattern.
///
/// Most patterns are plain regular expressions. The doubled-letter collapse
/// needs a backreference (`([^R])\1`), which `regex` does not support, so it
/// gets a dedicated matcher with the same leftmost, non-overlapping semantics.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A regular expression; replacements may reference groups as `${n}`
    Regex(Regex),
    /// Two consecutive identical characters other than a doubled `except`.
    ///
    /// Group 1 is the repeated character.
    Doubled {
        /// The character whose doubling is preserved
        except: char,
    },
}

impl Pattern {
    /// Compile a regular expression pattern.
    pub fn regex(source: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(source).map(Pattern::Regex)
    }

    /// Pattern source text, as it would be written for a backtracking engine.
    pub fn source(&self) -> String {
        match self {
            Pattern::Regex(re) => re.as_str().to_string(),
            Pattern::Doubled { except } => format!("([^{}])\\1", except),
        }
    }
}

/// The match half of a rule, tagged with its kind.
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Exact substring, every occurrence
    LiteralAll(String),
    /// Pattern, leftmost occurrence only
    PatternFirst(Pattern),
    /// Pattern, every occurrence
    PatternAll(Pattern),
}

impl Rewrite {
    /// The kind of this rewrite.
    #[inline]
    pub fn kind(&self) -> RuleKind {
        match self {
            Rewrite::LiteralAll(_) => RuleKind::LiteralAll,
            Rewrite::PatternFirst(_) => RuleKind::PatternFirst,
            Rewrite::PatternAll(_) => RuleKind::PatternAll,
        }
    }

    /// Match text as written in the rule table.
    pub fn source(&self) -> String {
        match self {
            Rewrite::LiteralAll(text) => text.clone(),
            Rewrite::PatternFirst(p) | Rewrite::PatternAll(p) => p.source(),
        }
    }
}

// ============================================================================
// Rewrite rules
// ============================================================================

/// A single text-rewrite rule.
///
/// # Fields
///
/// - `rule_id` - Position-independent identifier, unique within a table
/// - `rule_name` - Human-readable name (for tracing and the `rules` listing)
/// - `stage` - Normalization stage the rule belongs to (1-based)
/// - `rewrite` - What to match and how
/// - `replacement` - Replacement text; `${n}` refers to capture group `n` for
///   pattern kinds and is copied verbatim for literal rules
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Unique identifier for the rule
    pub rule_id: usize,
    /// Human-readable name
    pub rule_name: String,
    /// Normalization stage
    pub stage: u8,
    /// Match text and kind
    pub rewrite: Rewrite,
    /// Replacement text
    pub replacement: String,
}

impl RewriteRule {
    /// Literal-all rule: replace every occurrence of `from` with `to`.
    pub fn literal(rule_id: usize, stage: u8, from: &str, to: &str) -> Self {
        Self {
            rule_id,
            rule_name: format!("{} → {}", from, to),
            stage,
            rewrite: Rewrite::LiteralAll(from.to_string()),
            replacement: to.to_string(),
        }
    }

    /// Pattern-first rule: replace the leftmost match of `pattern`.
    pub fn first(rule_id: usize, stage: u8, pattern: &str, to: &str) -> Result<Self> {
        let compiled = compile(rule_id, pattern, to)?;
        Ok(Self {
            rule_id,
            rule_name: format!("{} → {} (first)", pattern, to),
            stage,
            rewrite: Rewrite::PatternFirst(compiled),
            replacement: to.to_string(),
        })
    }

    /// Pattern-all rule: replace every match of `pattern`.
    pub fn all(rule_id: usize, stage: u8, pattern: &str, to: &str) -> Result<Self> {
        let compiled = compile(rule_id, pattern, to)?;
        Ok(Self {
            rule_id,
            rule_name: format!("{} → {} (all)", pattern, to),
            stage,
            rewrite: Rewrite::PatternAll(compiled),
            replacement: to.to_string(),
        })
    }

    /// Pattern-all rule collapsing any doubled character except `except`.
    pub fn doubled(rule_id: usize, stage: u8, except: char) -> Self {
        let pattern = Pattern::Doubled { except };
        Self {
            rule_id,
            rule_name: format!("{} → ${{1}} (all)", pattern.source()),
            stage,
            rewrite: Rewrite::PatternAll(pattern),
            replacement: "${1}".to_string(),
        }
    }

    /// The kind of this rule.
    #[inline]
    pub fn kind(&self) -> RuleKind {
        self.rewrite.kind()
    }
}

fn compile(rule_id: usize, pattern: &str, to: &str) -> Result<Pattern> {
    Pattern::regex(pattern).map_err(|e| PhoneticError::InvalidPattern {
        rule_id,
        rule_name: format!("{} → {}", pattern, to),
        reason: e.to_string(),
    })
}

// ============================================================================
// Rule tables
// ============================================================================

/// An ordered, immutable sequence of rewrite rules.
///
/// Order is load-bearing: within a pass every rule sees the output of the
/// rules before it.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    /// Create a table from rules in application order.
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Rules in application order.
    #[inline]
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Iterate over the rules in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, RewriteRule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules belonging to one normalization stage.
    pub fn stage(&self, stage: u8) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter().filter(move |r| r.stage == stage)
    }

    /// Look up a rule by id.
    pub fn get(&self, rule_id: usize) -> Option<&RewriteRule> {
        self.rules.iter().find(|r| r.rule_id == rule_id)
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a RewriteRule;
    type IntoIter = std::slice::Iter<'a, RewriteRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<RewriteRule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = RewriteRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Display implementations
// ============================================================================

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::LiteralAll => write!(f, "literal-all"),
            RuleKind::PatternFirst => write!(f, "pattern-first"),
            RuleKind::PatternAll => write!(f, "pattern-all"),
        }
    }
}

impl std::fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} [{}] {}", self.rule_id, self.kind(), self.rule_name)
    }
}
