//! The assembled parse result and its diagnostic flags.

use bitflags::bitflags;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::syllable::Syllable;
use crate::symbol::Symbol;

bitflags! {
    /// Word-level diagnostics. Purely informational: flags never alter
    /// the symbol sequence.
    #[derive(Default)]
    pub struct Diagnostics: u32 {
        /// The word carries letters but no vowel points and no sheva.
        const HAS_NO_NIQQUD = 1 << 0;
        /// Unrecognized code points were dropped from this word.
        const UNKNOWN_CODEPOINTS = 1 << 1;
        /// A qamats whose gadol/qatan reading needs stress information
        /// this parser does not have.
        const AMBIGUOUS_QAMATS = 1 << 2;
        /// A sheva and a vowel were both written on one letter.
        const AMBIGUOUS_SHEVA_HATAF = 1 << 3;
        /// A shin with neither shin dot nor sin dot.
        const MISSING_SHIN_SIN_DOT = 1 << 4;
        /// The word opens with a detached be-/le- prefix shape.
        const LIKELY_PREFIX_BE_LE = 1 << 5;
        /// A dagesh was left unclassified (fallback `dagesh` emitted).
        const UNCLASSIFIED_DAGESH = 1 << 6;
        /// A sheva was left unclassified (fallback `sheva` emitted).
        const UNCLASSIFIED_SHEVA = 1 << 7;
        /// A qamats was left unclassified (fallback `qamats` emitted).
        const UNCLASSIFIED_QAMATS = 1 << 8;
        /// A holam was left unclassified (fallback `holam` emitted).
        const UNCLASSIFIED_HOLAM = 1 << 9;
    }
}

const FLAG_NAMES: &[(Diagnostics, &str)] = &[
    (Diagnostics::HAS_NO_NIQQUD, "has-no-niqqud"),
    (Diagnostics::UNKNOWN_CODEPOINTS, "unknown-codepoints"),
    (Diagnostics::AMBIGUOUS_QAMATS, "ambiguous-qamats"),
    (Diagnostics::AMBIGUOUS_SHEVA_HATAF, "ambiguous-sheva-hataf"),
    (Diagnostics::MISSING_SHIN_SIN_DOT, "missing-shin-sin-dot"),
    (Diagnostics::LIKELY_PREFIX_BE_LE, "likely-prefix-be-le"),
    (Diagnostics::UNCLASSIFIED_DAGESH, "unclassified-dagesh"),
    (Diagnostics::UNCLASSIFIED_SHEVA, "unclassified-sheva"),
    (Diagnostics::UNCLASSIFIED_QAMATS, "unclassified-qamats"),
    (Diagnostics::UNCLASSIFIED_HOLAM, "unclassified-holam"),
];

impl Diagnostics {
    /// Names of every raised flag, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, name)| name)
            .collect()
    }
}

impl Serialize for Diagnostics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

/// The parse of one word: its symbols, its syllables, and what the
/// classifier wants the caller to know about them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    /// The word as normalized input (accents stripped).
    pub word: String,
    pub symbols: Vec<Symbol>,
    pub syllables: Vec<Syllable>,
    pub flags: Diagnostics,
    /// A maqaf joined this word to the next one in its phrase.
    pub followed_by_maqaf: bool,
    /// The final patah is a patah-genuvah, pronounced before its letter.
    /// The symbol sequence itself is not reordered.
    pub patah_genuvah: bool,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol names in order, for display and for test fixtures.
    pub fn symbol_names(&self) -> Vec<&'static str> {
        self.symbols.iter().map(|s| s.name()).collect()
    }

    /// Re-emit the underlying Unicode: letters plus canonical diacritics.
    /// Reproduces the normalized form of the input word.
    pub fn unicode(&self) -> String {
        self.symbols.iter().map(|s| s.unicode()).collect()
    }

    /// The symbol slice of each syllable, in order.
    pub fn syllable_slices(&self) -> Vec<&[Symbol]> {
        self.syllables
            .iter()
            .map(|syl| &self.symbols[syl.start..syl.end])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_names_round_trip_declaration_order() {
        let flags = Diagnostics::HAS_NO_NIQQUD | Diagnostics::MISSING_SHIN_SIN_DOT;
        assert_eq!(flags.names(), vec!["has-no-niqqud", "missing-shin-sin-dot"]);
        assert!(Diagnostics::empty().names().is_empty());
    }

    #[test]
    fn every_flag_has_a_name() {
        assert_eq!(FLAG_NAMES.len(), Diagnostics::all().bits().count_ones() as usize);
    }

    #[test]
    fn empty_result() {
        let result = ParseResult::default();
        assert!(result.is_empty());
        assert!(result.syllable_slices().is_empty());
        assert_eq!(result.unicode(), "");
    }
}
