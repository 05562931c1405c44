//! Static rule tables for the Cyrillic → Łacinka mapping.

/// Hard and palatalized Latin forms of a soft-pairable consonant.
#[derive(Debug, PartialEq, Eq)]
pub struct SoftPair {
    pub hard: &'static str,
    pub soft: &'static str,
}

/// One-to-one substitutions, lowercase source letter → Latin rendering.
/// `х` is the one digraph here; everything else maps to a single letter.
pub(crate) static DIRECT: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "h"),
    ('ґ', "g"),
    ('д', "d"),
    ('ж', "ž"),
    ('й', "j"),
    ('к', "k"),
    ('м', "m"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('т', "t"),
    ('у', "u"),
    ('ў', "ŭ"),
    ('ф', "f"),
    ('х', "ch"),
    ('ч', "č"),
    ('ш', "š"),
    ('ы', "y"),
    ('э', "e"),
];

/// Consonants that soften when the soft sign follows them.
pub(crate) static SOFT_PAIRS: &[(char, SoftPair)] = &[
    ('з', SoftPair { hard: "z", soft: "ź" }),
    ('н', SoftPair { hard: "n", soft: "ń" }),
    ('с', SoftPair { hard: "s", soft: "ś" }),
    ('ц', SoftPair { hard: "c", soft: "ć" }),
];

/// Iotated vowels and the fixed letter that follows the computed glide
/// base. `і` has no second letter; its rendering is the base alone.
pub(crate) static IOTATED: &[(char, &str)] = &[
    ('е', "e"),
    ('ё', "o"),
    ('і', ""),
    ('ю', "u"),
    ('я', "a"),
];

/// Vowels, as consulted when classifying the character *before* an
/// iotated vowel.
pub(crate) static VOWELS: &[char] = &['а', 'е', 'ё', 'і', 'у', 'ы', 'э', 'ю', 'я'];

/// `л` — rendering depends on the following character.
pub(crate) const ELL: char = 'л';

/// Palatalization marker; never rendered.
pub(crate) const SOFT_SIGN: char = 'ь';

/// Separation marker; unknown to the tables, so it passes through, but it
/// never counts as a real preceding letter.
pub(crate) const HARD_SIGN: char = 'ъ';

/// ASCII apostrophe, dropped like the soft sign.
pub(crate) const APOSTROPHE: char = '\'';

/// The plain-`і` vowel, the one iotated vowel with an empty second letter.
pub(crate) const PLAIN_I: char = 'і';
