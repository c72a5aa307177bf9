//! The Nyingarn normalization rule table.
//!
//! Rules are listed in application order and grouped into the normalization
//! stages below. Stage numbers are labels only; a few rules sit out of stage
//! order (the apostrophe deletion follows the macron folding) and it is the
//! table order that is applied.
//!
//! 1. Diacritic and special-letter folding, apostrophe deletion
//! 2. Macron vowels to plain vowels
//! 3. Diphthongs and triphthongs to glide sequences, initial `I`/`U` glides
//! 4. Trailing `-OW`/`-AW` and `[OA]W` before a consonant to `AWU`
//! 5. `AH`, `UH`, trailing `A[HR]` and `ER` to `A`
//! 6. Trailing `EN`/`EL` to `IN`/`IL`
//! 7. Long vowels `OO`/`UU`/`II` to short vowels
//! 8. `UA`/`UI`/`OA` gain a `W` glide
//! 9. Doubled letters collapse, except `RR`
//! 10. `Ŋ` to `NG`
//! 11. `YNY`/`YN`/`YLY`/`YL` to `NY`/`LY`
//! 12. Doubled digraphs collapse
//! 13. Final `Y` to `AYI`
//! 14. Initial `G` to `K`
//! 15. First `B`, `D`, `O`, `E` to `P`, `T`, `U`, `I`
//! 16. `G` outside `NG` to `K`
//! 17. Affricate spellings and `S` to `J`
//! 18. `C` to `K`, `WH` to `W`
//! 19. `WU` to `U` except after `A`/`I`/`U`
//! 20. `W` glide before `A`/`I`/`U`
//! 21. `U` glide before `R` + vowel
//! 22. `Y` glide resolution
//! 23. Stray punctuation and digits removed
//!
//! # Literal rules that look like patterns
//!
//! The two retraction rules and the hyphenated `A-I`/`E-I` rules are literal
//! substring rules. Their text contains pattern syntax (groups, classes, an
//! escaped code point) but it is matched byte for byte, so on cleaned input
//! they never fire. They are kept literal so that the phonetic mapping stays
//! exactly as published.

use std::sync::OnceLock;

use super::types::{RewriteRule, RuleTable};
use crate::error::Result;

/// Build the Nyingarn rule table.
///
/// Fails only if one of the built-in patterns does not compile.
pub fn nyingarn_rules() -> Result<RuleTable> {
    use RewriteRule as R;

    let mut id = 0usize;
    let mut next = || {
        id += 1;
        id
    };

    let rules = vec![
        // Stage 1: diacritics and special letters
        R::literal(next(), 1, r"([TD])\u0320([TD])\u0320", "r$1$2"),
        R::literal(next(), 1, r"([A-Z])\u0320", "r$1"),
        R::literal(next(), 1, "Ñ", "NY"),
        R::literal(next(), 1, "Œ", "OE"),
        R::literal(next(), 1, "Û", "OOE"),
        R::literal(next(), 1, "Ä", "AA"),
        R::literal(next(), 1, "Ʀ", "R"),
        R::literal(next(), 1, "Θ", "TH"),
        R::literal(next(), 1, "Ð", "TH"),
        R::literal(next(), 1, "RNGU", "RNKU"),
        // Stage 2: macrons
        R::literal(next(), 2, "Ā", "A"),
        R::literal(next(), 2, "Ē", "I"),
        R::literal(next(), 2, "Ī", "I"),
        R::literal(next(), 2, "Ō", "O"),
        R::literal(next(), 2, "Ū", "U"),
        R::literal(next(), 1, "'", ""),
        // Stage 3: diphthongs and triphthongs
        R::literal(next(), 3, "AIOO", "AYU"),
        R::literal(next(), 3, "AIU", "AYU"),
        R::literal(next(), 3, "AUA", "AWA"),
        R::literal(next(), 3, "AUE", "AWA"),
        R::literal(next(), 3, "UAI", "UWAYI"),
        R::literal(next(), 3, "OOI", "UWI"),
        R::literal(next(), 3, "AUI", "AWUYI"),
        R::literal(next(), 3, "NGG", "NGK"),
        R::literal(next(), 3, "A-I", "AYI"),
        R::literal(next(), 3, "E-I", "AYI"),
        R::first(next(), 3, "^I", "YI")?,
        R::first(next(), 3, "^U", "WU")?,
        R::literal(next(), 3, "EE", "I"),
        R::literal(next(), 3, "AIA", "AYA"),
        R::literal(next(), 3, "AI", "AYI"),
        R::literal(next(), 3, "IA", "IYA"),
        R::literal(next(), 3, "EA", "IYA"),
        R::literal(next(), 3, "EI", "AYI"),
        R::literal(next(), 3, "IU", "IWU"),
        R::literal(next(), 3, "AU", "AWU"),
        // Stage 4: -OW / -AW
        R::first(next(), 4, "OW$", "AWU")?,
        R::first(next(), 4, "AW$", "AWU")?,
        R::first(next(), 4, "[OA]W([^AEIOU])", "AWU${1}")?,
        // Stage 5: collapse toward A
        R::literal(next(), 5, "AA", "A"),
        R::first(next(), 5, "AH([^AEIOU])", "A${1}")?,
        R::first(next(), 5, "A[HR]$", "A")?,
        R::literal(next(), 5, "UH", "A"),
        R::first(next(), 5, "ER$", "A")?,
        // Stage 6: trailing EN / EL
        R::first(next(), 6, "E([NL])$", "I${1}")?,
        // Stage 7: long vowels
        R::literal(next(), 7, "EL", "AL"),
        R::literal(next(), 7, "OOA", "UWA"),
        R::literal(next(), 7, "OO", "U"),
        R::literal(next(), 7, "UU", "U"),
        R::literal(next(), 7, "II", "I"),
        // Stage 8: W glides
        R::literal(next(), 8, "UA", "UWA"),
        R::literal(next(), 8, "UI", "UWI"),
        R::literal(next(), 8, "OA", "UWA"),
        // Stage 9: doubled letters, RR preserved
        R::doubled(next(), 9, 'R'),
        // Stage 10: eng
        R::literal(next(), 10, "Ŋ", "NG"),
        // Stage 11: Y + nasal / liquid
        R::literal(next(), 11, "YNY", "NY"),
        R::literal(next(), 11, "YN", "NY"),
        R::literal(next(), 11, "YLY", "LY"),
        R::literal(next(), 11, "YL", "LY"),
        // Stage 12: doubled digraphs
        R::literal(next(), 12, "NHNH", "NH"),
        R::literal(next(), 12, "NGNG", "NG"),
        R::literal(next(), 12, "NYNY", "NY"),
        R::literal(next(), 12, "RNRN", "RN"),
        R::literal(next(), 12, "RLRL", "RL"),
        R::literal(next(), 12, "LHLH", "LH"),
        R::literal(next(), 12, "LYLY", "LY"),
        R::literal(next(), 12, "RTRT", "RT"),
        R::literal(next(), 12, "THTH", "TH"),
        // Stage 13-16: single letter substitutions
        R::first(next(), 13, "Y$", "AYI")?,
        R::first(next(), 14, "^G", "K")?,
        R::first(next(), 15, "B", "P")?,
        R::first(next(), 15, "D", "T")?,
        R::first(next(), 15, "O", "U")?,
        R::first(next(), 15, "E", "I")?,
        R::first(next(), 16, "([^N])G", "${1}K")?,
        // Stage 17: affricates
        R::literal(next(), 17, "TCH", "J"),
        R::literal(next(), 17, "SCH", "J"),
        R::literal(next(), 17, "TY", "J"),
        R::literal(next(), 17, "TJ", "J"),
        R::literal(next(), 17, "SJ", "J"),
        R::literal(next(), 17, "STH", "J"),
        R::literal(next(), 17, "S", "J"),
        // Stage 18
        R::literal(next(), 18, "C", "K"),
        R::literal(next(), 18, "WH", "W"),
        // Stage 19-22: glides
        R::all(next(), 19, "([^AIU ])WU", "${1}U")?,
        R::all(next(), 20, "([^AIU ])W([AIU])", "${1}UW${2}")?,
        R::all(next(), 21, "(^| )([^AIUR ])R([AIU])", "${1}${2}UR${3}")?,
        R::all(next(), 22, "([^AIUNL])Y([^IUA])", "${1}AYI${2}")?,
        R::all(next(), 22, "AY([^IUA])", "AYI${1}")?,
        R::all(next(), 22, "([^NLTAIU ])Y", "${1}I")?,
        // Stage 23: leftovers
        R::first(next(), 23, r"[()*+,-./:;<=>?@\[\]\\^_]", "")?,
        R::first(next(), 23, "[0-9]", "")?,
    ];

    Ok(RuleTable::new(rules))
}

impl RuleTable {
    /// The process-wide Nyingarn rule table.
    ///
    /// Built on first use and never mutated afterwards.
    pub fn shared() -> Result<&'static RuleTable> {
        static SHARED: OnceLock<Result<RuleTable>> = OnceLock::new();
        SHARED.get_or_init(nyingarn_rules).as_ref().map_err(Clone::clone)
    }
}
