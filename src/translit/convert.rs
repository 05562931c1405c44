use serde::Serialize;
use tracing::{debug, debug_span};

use super::classify::{CharClass, RuleTable};
use super::table::{self, SoftPair};
use crate::unicode::{self, CaseClass};

/// Which rule family produced an output fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedRule {
    Direct,
    Ell,
    SoftConsonant,
    Iotated,
    Silent,
    Passthrough,
}

impl AppliedRule {
    pub fn label(&self) -> &'static str {
        match self {
            AppliedRule::Direct => "direct",
            AppliedRule::Ell => "l-rule",
            AppliedRule::SoftConsonant => "soft-consonant",
            AppliedRule::Iotated => "iotated",
            AppliedRule::Silent => "silent",
            AppliedRule::Passthrough => "passthrough",
        }
    }
}

/// Conversion outcome for one input character.
pub(crate) struct Resolution {
    pub text: String,
    pub rule: AppliedRule,
    /// Which neighbor decided the outcome, when context was consulted.
    pub note: Option<&'static str>,
}

fn prev_lower(chars: &[char], index: usize) -> Option<char> {
    index.checked_sub(1).map(|i| unicode::fold_char(chars[i]))
}

fn next_lower(chars: &[char], index: usize) -> Option<char> {
    chars.get(index + 1).copied().map(unicode::fold_char)
}

/// `л` reads soft before the soft sign, another `л`, or an iotated vowel;
/// everywhere else (including end of input) it is `ł`.
fn resolve_ell(table: &RuleTable, chars: &[char], index: usize) -> Resolution {
    let softened = match next_lower(chars, index) {
        Some(next) => {
            next == table::SOFT_SIGN || next == table::ELL || table.is_iotated(next)
        }
        None => false,
    };
    let (text, note) = if softened {
        ("l", "palatalized by next letter")
    } else {
        ("ł", "non-palatalized")
    };
    Resolution {
        text: text.to_string(),
        rule: AppliedRule::Ell,
        note: Some(note),
    }
}

fn resolve_soft(pair: &SoftPair, chars: &[char], index: usize) -> Resolution {
    let soft = next_lower(chars, index) == Some(table::SOFT_SIGN);
    let (text, note) = if soft {
        (pair.soft, "soft form before soft sign")
    } else {
        (pair.hard, "hard form")
    };
    Resolution {
        text: text.to_string(),
        rule: AppliedRule::SoftConsonant,
        note: Some(note),
    }
}

/// Iotated vowels render as glide base + fixed second letter. The base
/// depends on what precedes: nothing after `л` (which already reads soft),
/// an `i` glide after a consonant, and otherwise `i` for plain `і` or a
/// `j` onset for the rest. Plain `і` keeps its `i` even after `л`.
fn resolve_iotated(
    table: &RuleTable,
    chars: &[char],
    index: usize,
    lower: char,
    second: &'static str,
) -> Resolution {
    let prev = prev_lower(chars, index);
    let (base, note) = match prev {
        Some(p) if p == table::ELL && lower != table::PLAIN_I => {
            ("", "glide absorbed by preceding л")
        }
        Some(p) if !table.is_vowel(p) && !table.is_special_or_non_alpha(p) => {
            ("i", "i-glide after consonant")
        }
        _ => {
            if lower == table::PLAIN_I {
                ("i", "plain i")
            } else {
                ("j", "j-onset")
            }
        }
    };
    Resolution {
        text: format!("{base}{second}"),
        rule: AppliedRule::Iotated,
        note: Some(note),
    }
}

/// Convert the character at `index`, reading one character of context on
/// either side of the *original* input. Case is reapplied at the end:
/// an uppercase source character capitalizes only the first character of
/// its (possibly multi-character) rendering.
pub(crate) fn resolve_at(chars: &[char], index: usize) -> Resolution {
    let table = RuleTable::global();
    let ch = chars[index];
    let lower = unicode::fold_char(ch);

    let mut resolution = match table.classify(lower) {
        CharClass::Direct(latin) => Resolution {
            text: latin.to_string(),
            rule: AppliedRule::Direct,
            note: None,
        },
        CharClass::Ell => resolve_ell(table, chars, index),
        CharClass::Soft(pair) => resolve_soft(pair, chars, index),
        CharClass::Iotated(second) => resolve_iotated(table, chars, index, lower, second),
        CharClass::Silent => Resolution {
            text: String::new(),
            rule: AppliedRule::Silent,
            note: None,
        },
        CharClass::Passthrough => Resolution {
            text: ch.to_string(),
            rule: AppliedRule::Passthrough,
            note: None,
        },
    };

    match unicode::case_class(ch) {
        CaseClass::Upper => resolution.text = unicode::capitalize_first(&resolution.text),
        CaseClass::Lower | CaseClass::Caseless => {}
    }
    resolution
}

/// Convert Belarusian Cyrillic `text` to its Łacinka rendering.
///
/// Characters outside the source alphabet pass through unchanged, so
/// whole mixed documents (Latin fragments, digits, punctuation) are safe
/// to feed in. Context is always read from the original input, never from
/// already-converted output.
pub fn latinize(text: &str) -> String {
    let _span = debug_span!("latinize", bytes = text.len()).entered();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for index in 0..chars.len() {
        out.push_str(&resolve_at(&chars, index).text);
    }
    debug!(in_chars = chars.len(), out_bytes = out.len(), "converted");
    out
}
