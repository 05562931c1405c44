use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::table::{self, SoftPair};

/// Rule family for a single (lowercased) input character.
///
/// Exactly one variant applies per character; the conversion step then
/// does one exhaustive match instead of re-probing every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Fixed Latin string, no context needed.
    Direct(&'static str),
    /// The letter `л`; the next character picks `l` or `ł`.
    Ell,
    /// Consonant with hard/soft forms; the next character decides.
    Soft(&'static SoftPair),
    /// Iotated vowel rendered as glide base + fixed second letter; the
    /// previous character decides the base.
    Iotated(&'static str),
    /// Soft sign or apostrophe, dropped from the output.
    Silent,
    /// Anything else passes through unchanged.
    Passthrough,
}

/// Immutable lookup structure over the static rule tables, built once on
/// first use.
pub struct RuleTable {
    direct: HashMap<char, &'static str>,
    soft: HashMap<char, &'static SoftPair>,
    iotated: HashMap<char, &'static str>,
    vowels: HashSet<char>,
}

impl RuleTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTable {
        static INSTANCE: OnceLock<RuleTable> = OnceLock::new();
        INSTANCE.get_or_init(|| RuleTable {
            direct: table::DIRECT.iter().copied().collect(),
            soft: table::SOFT_PAIRS.iter().map(|(c, p)| (*c, p)).collect(),
            iotated: table::IOTATED.iter().copied().collect(),
            vowels: table::VOWELS.iter().copied().collect(),
        })
    }

    /// Classify one lowercased character into its rule family.
    pub fn classify(&self, lower: char) -> CharClass {
        if let Some(&latin) = self.direct.get(&lower) {
            return CharClass::Direct(latin);
        }
        if lower == table::ELL {
            return CharClass::Ell;
        }
        if let Some(&pair) = self.soft.get(&lower) {
            return CharClass::Soft(pair);
        }
        if let Some(&second) = self.iotated.get(&lower) {
            return CharClass::Iotated(second);
        }
        if lower == table::SOFT_SIGN || lower == table::APOSTROPHE {
            return CharClass::Silent;
        }
        CharClass::Passthrough
    }

    /// True for iotated-vowel keys; `л` softens before these.
    pub fn is_iotated(&self, lower: char) -> bool {
        self.iotated.contains_key(&lower)
    }

    /// True for the vowels consulted during iotated-vowel resolution.
    pub fn is_vowel(&self, lower: char) -> bool {
        self.vowels.contains(&lower)
    }

    /// Characters that do not count as a real preceding letter: anything
    /// non-alphabetic, plus the soft sign, hard sign, and apostrophe.
    pub fn is_special_or_non_alpha(&self, lower: char) -> bool {
        !lower.is_alphabetic()
            || lower == table::SOFT_SIGN
            || lower == table::HARD_SIGN
            || lower == table::APOSTROPHE
    }
}
