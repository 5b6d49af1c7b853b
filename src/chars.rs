//! Hebrew Unicode inventory: letters, points, and code point classification.
//!
//! See <https://en.wikipedia.org/wiki/Unicode_and_HTML_for_the_Hebrew_alphabet#Compact_table>
//! for the Hebrew block layout.

// Points (niqqud) and marks, U+05B0..U+05C7.
pub const SHEVA: char = '\u{05b0}';
pub const HATAF_SEGOL: char = '\u{05b1}';
pub const HATAF_PATAH: char = '\u{05b2}';
pub const HATAF_QAMATS: char = '\u{05b3}';
pub const HIRIQ: char = '\u{05b4}';
pub const TSERE: char = '\u{05b5}';
pub const SEGOL: char = '\u{05b6}';
pub const PATAH: char = '\u{05b7}';
pub const QAMATS: char = '\u{05b8}';
pub const HOLAM: char = '\u{05b9}';
pub const HOLAM_HASER_VAV: char = '\u{05ba}'; // pairs with a preceding vav only
pub const QUBUTS: char = '\u{05bb}';
pub const DAGESH: char = '\u{05bc}'; // also mapiq and the shuruq dot
pub const MAQAF: char = '\u{05be}';
pub const SHIN_DOT: char = '\u{05c1}';
pub const SIN_DOT: char = '\u{05c2}';
pub const QAMATS_QATAN: char = '\u{05c7}';

/// The 27 consonant letters, sofit (final) forms included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Alef,
    Bet,
    Gimel,
    Dalet,
    He,
    Vav,
    Zayin,
    Het,
    Tet,
    Yod,
    KafSofit,
    Kaf,
    Lamed,
    MemSofit,
    Mem,
    NunSofit,
    Nun,
    Samekh,
    Ayin,
    PeSofit,
    Pe,
    TsadiSofit,
    Tsadi,
    Qof,
    Resh,
    Shin,
    Tav,
}

/// Consonant classes the classifier keys rules on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    /// Bet, gimel, dalet, kaf, pe, tav: take dagesh qal.
    Bgdkft,
    /// Alef, he, het, ayin.
    Guttural,
    /// Resh.
    SemiGuttural,
    Other,
}

impl Letter {
    pub fn from_char(c: char) -> Option<Letter> {
        let letter = match c {
            '\u{05d0}' => Letter::Alef,
            '\u{05d1}' => Letter::Bet,
            '\u{05d2}' => Letter::Gimel,
            '\u{05d3}' => Letter::Dalet,
            '\u{05d4}' => Letter::He,
            '\u{05d5}' => Letter::Vav,
            '\u{05d6}' => Letter::Zayin,
            '\u{05d7}' => Letter::Het,
            '\u{05d8}' => Letter::Tet,
            '\u{05d9}' => Letter::Yod,
            '\u{05da}' => Letter::KafSofit,
            '\u{05db}' => Letter::Kaf,
            '\u{05dc}' => Letter::Lamed,
            '\u{05dd}' => Letter::MemSofit,
            '\u{05de}' => Letter::Mem,
            '\u{05df}' => Letter::NunSofit,
            '\u{05e0}' => Letter::Nun,
            '\u{05e1}' => Letter::Samekh,
            '\u{05e2}' => Letter::Ayin,
            '\u{05e3}' => Letter::PeSofit,
            '\u{05e4}' => Letter::Pe,
            '\u{05e5}' => Letter::TsadiSofit,
            '\u{05e6}' => Letter::Tsadi,
            '\u{05e7}' => Letter::Qof,
            '\u{05e8}' => Letter::Resh,
            '\u{05e9}' => Letter::Shin,
            '\u{05ea}' => Letter::Tav,
            _ => return None,
        };
        Some(letter)
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::Alef => '\u{05d0}',
            Letter::Bet => '\u{05d1}',
            Letter::Gimel => '\u{05d2}',
            Letter::Dalet => '\u{05d3}',
            Letter::He => '\u{05d4}',
            Letter::Vav => '\u{05d5}',
            Letter::Zayin => '\u{05d6}',
            Letter::Het => '\u{05d7}',
            Letter::Tet => '\u{05d8}',
            Letter::Yod => '\u{05d9}',
            Letter::KafSofit => '\u{05da}',
            Letter::Kaf => '\u{05db}',
            Letter::Lamed => '\u{05dc}',
            Letter::MemSofit => '\u{05dd}',
            Letter::Mem => '\u{05de}',
            Letter::NunSofit => '\u{05df}',
            Letter::Nun => '\u{05e0}',
            Letter::Samekh => '\u{05e1}',
            Letter::Ayin => '\u{05e2}',
            Letter::PeSofit => '\u{05e3}',
            Letter::Pe => '\u{05e4}',
            Letter::TsadiSofit => '\u{05e5}',
            Letter::Tsadi => '\u{05e6}',
            Letter::Qof => '\u{05e7}',
            Letter::Resh => '\u{05e8}',
            Letter::Shin => '\u{05e9}',
            Letter::Tav => '\u{05ea}',
        }
    }

    pub fn class(self) -> LetterClass {
        match self {
            Letter::Bet
            | Letter::Gimel
            | Letter::Dalet
            | Letter::Kaf
            | Letter::KafSofit
            | Letter::Pe
            | Letter::PeSofit
            | Letter::Tav => LetterClass::Bgdkft,
            Letter::Alef | Letter::He | Letter::Het | Letter::Ayin => LetterClass::Guttural,
            Letter::Resh => LetterClass::SemiGuttural,
            _ => LetterClass::Other,
        }
    }

    pub fn is_bgdkft(self) -> bool {
        self.class() == LetterClass::Bgdkft
    }

    /// Sofit forms fold onto their base letter for identity comparisons.
    pub fn base(self) -> Letter {
        match self {
            Letter::KafSofit => Letter::Kaf,
            Letter::MemSofit => Letter::Mem,
            Letter::NunSofit => Letter::Nun,
            Letter::PeSofit => Letter::Pe,
            Letter::TsadiSofit => Letter::Tsadi,
            other => other,
        }
    }
}

/// A raw vowel point as it appears in input, before classification.
/// The hataf family is a single vowel, never a sheva + vowel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Niqqud {
    Hiriq,
    Tsere,
    Segol,
    Patah,
    Qamats,
    QamatsQatan,
    Holam,
    HolamHaserVav,
    Qubuts,
    HatafSegol,
    HatafPatah,
    HatafQamats,
}

impl Niqqud {
    pub fn is_hataf(self) -> bool {
        matches!(
            self,
            Niqqud::HatafSegol | Niqqud::HatafPatah | Niqqud::HatafQamats
        )
    }
}

/// Classification of a single input code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodepointClass {
    Letter(Letter),
    Vowel(Niqqud),
    Sheva,
    Dagesh,
    ShinDot,
    SinDot,
    Maqaf,
    /// Whitespace and word-boundary punctuation.
    Whitespace,
    /// Cantillation accents and bidi/format controls; stripped silently.
    Cantillation,
    /// Anything else; dropped with a diagnostic.
    Other,
}

/// Classify one code point. Presentation forms are expected to have been
/// decomposed before this sees them.
pub fn classify(c: char) -> CodepointClass {
    if let Some(letter) = Letter::from_char(c) {
        return CodepointClass::Letter(letter);
    }
    match c {
        SHEVA => CodepointClass::Sheva,
        HATAF_SEGOL => CodepointClass::Vowel(Niqqud::HatafSegol),
        HATAF_PATAH => CodepointClass::Vowel(Niqqud::HatafPatah),
        HATAF_QAMATS => CodepointClass::Vowel(Niqqud::HatafQamats),
        HIRIQ => CodepointClass::Vowel(Niqqud::Hiriq),
        TSERE => CodepointClass::Vowel(Niqqud::Tsere),
        SEGOL => CodepointClass::Vowel(Niqqud::Segol),
        PATAH => CodepointClass::Vowel(Niqqud::Patah),
        QAMATS => CodepointClass::Vowel(Niqqud::Qamats),
        QAMATS_QATAN => CodepointClass::Vowel(Niqqud::QamatsQatan),
        HOLAM => CodepointClass::Vowel(Niqqud::Holam),
        HOLAM_HASER_VAV => CodepointClass::Vowel(Niqqud::HolamHaserVav),
        QUBUTS => CodepointClass::Vowel(Niqqud::Qubuts),
        DAGESH => CodepointClass::Dagesh,
        SHIN_DOT => CodepointClass::ShinDot,
        SIN_DOT => CodepointClass::SinDot,
        MAQAF => CodepointClass::Maqaf,
        c if is_cantillation(c) || is_format_control(c) => CodepointClass::Cantillation,
        c if c.is_whitespace() => CodepointClass::Whitespace,
        // Stray marks from the Hebrew block must not split a word.
        c if ('\u{0590}'..='\u{05cf}').contains(&c) => CodepointClass::Other,
        // Foreign letters and digits carry information we cannot keep.
        c if c.is_alphanumeric() => CodepointClass::Other,
        // Everything else separates words, like whitespace does.
        _ => CodepointClass::Whitespace,
    }
}

/// Accents and the handful of marks read as accents: meteg, rafe, paseq,
/// sof pasuq, nun hafukha.
fn is_cantillation(c: char) -> bool {
    matches!(c,
        '\u{0591}'..='\u{05af}'
        | '\u{05bd}'
        | '\u{05bf}'
        | '\u{05c0}'
        | '\u{05c3}'
        | '\u{05c6}')
}

/// Bidi and zero-width format controls embedded by editors.
fn is_format_control(c: char) -> bool {
    matches!(c,
        '\u{200c}'..='\u{200f}'
        | '\u{202a}'..='\u{202e}'
        | '\u{2066}'..='\u{2069}'
        | '\u{feff}')
}
