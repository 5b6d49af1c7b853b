//! The closed set of grammatical symbols the classifier emits.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::chars::Letter;

/// One grammatical symbol: a letter reading, a classified point, or an
/// unclassified fallback.
///
/// The fallbacks (`Dagesh`, `Sheva`, `Qamats`, `Holam`) are emitted only
/// when the rule window cannot disambiguate; each raises its own
/// diagnostic flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    // Letters.
    Alef,
    MapiqAlef,
    Bet,
    Vet,
    Gimel,
    Dalet,
    He,
    MapiqHe,
    Vav,
    Zayin,
    Het,
    Tet,
    Yod,
    Kaf,
    Khaf,
    KafSofit,
    KhafSofit,
    Lamed,
    Mem,
    MemSofit,
    Nun,
    NunSofit,
    Samekh,
    Ayin,
    Pe,
    Fe,
    PeSofit,
    FeSofit,
    Tsadi,
    TsadiSofit,
    Qof,
    Resh,
    Shin,
    Sin,
    Tav,
    Sav,

    // Points.
    DageshQal,
    DageshHazaq,
    ShevaNa,
    ShevaNah,
    Hiriq,
    HiriqMaleYod,
    Tsere,
    TsereMaleAlef,
    TsereMaleHe,
    TsereMaleYod,
    Segol,
    SegolMaleAlef,
    SegolMaleHe,
    SegolMaleYod,
    HatafSegol,
    Patah,
    PatahMaleAlef,
    PatahMaleHe,
    PatahGenuvah,
    HatafPatah,
    QamatsGadol,
    QamatsMaleAlef,
    QamatsMaleHe,
    HatafQamats,
    QamatsQatan,
    HolamHaser,
    HolamMaleAlef,
    HolamMaleHe,
    HolamMaleVav,
    Qubuts,
    Shuruq,

    // Unclassified fallbacks.
    Dagesh,
    Sheva,
    Qamats,
    Holam,
}

impl Symbol {
    /// Kebab-case name; the stable identifier external consumers see.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Alef => "alef",
            Symbol::MapiqAlef => "mapiq-alef",
            Symbol::Bet => "bet",
            Symbol::Vet => "vet",
            Symbol::Gimel => "gimel",
            Symbol::Dalet => "dalet",
            Symbol::He => "he",
            Symbol::MapiqHe => "mapiq-he",
            Symbol::Vav => "vav",
            Symbol::Zayin => "zayin",
            Symbol::Het => "het",
            Symbol::Tet => "tet",
            Symbol::Yod => "yod",
            Symbol::Kaf => "kaf",
            Symbol::Khaf => "khaf",
            Symbol::KafSofit => "kaf-sofit",
            Symbol::KhafSofit => "khaf-sofit",
            Symbol::Lamed => "lamed",
            Symbol::Mem => "mem",
            Symbol::MemSofit => "mem-sofit",
            Symbol::Nun => "nun",
            Symbol::NunSofit => "nun-sofit",
            Symbol::Samekh => "samekh",
            Symbol::Ayin => "ayin",
            Symbol::Pe => "pe",
            Symbol::Fe => "fe",
            Symbol::PeSofit => "pe-sofit",
            Symbol::FeSofit => "fe-sofit",
            Symbol::Tsadi => "tsadi",
            Symbol::TsadiSofit => "tsadi-sofit",
            Symbol::Qof => "qof",
            Symbol::Resh => "resh",
            Symbol::Shin => "shin",
            Symbol::Sin => "sin",
            Symbol::Tav => "tav",
            Symbol::Sav => "sav",
            Symbol::DageshQal => "dagesh-qal",
            Symbol::DageshHazaq => "dagesh-hazaq",
            Symbol::ShevaNa => "sheva-na",
            Symbol::ShevaNah => "sheva-nah",
            Symbol::Hiriq => "hiriq",
            Symbol::HiriqMaleYod => "hiriq-male-yod",
            Symbol::Tsere => "tsere",
            Symbol::TsereMaleAlef => "tsere-male-alef",
            Symbol::TsereMaleHe => "tsere-male-he",
            Symbol::TsereMaleYod => "tsere-male-yod",
            Symbol::Segol => "segol",
            Symbol::SegolMaleAlef => "segol-male-alef",
            Symbol::SegolMaleHe => "segol-male-he",
            Symbol::SegolMaleYod => "segol-male-yod",
            Symbol::HatafSegol => "hataf-segol",
            Symbol::Patah => "patah",
            Symbol::PatahMaleAlef => "patah-male-alef",
            Symbol::PatahMaleHe => "patah-male-he",
            Symbol::PatahGenuvah => "patah-genuvah",
            Symbol::HatafPatah => "hataf-patah",
            Symbol::QamatsGadol => "qamats-gadol",
            Symbol::QamatsMaleAlef => "qamats-male-alef",
            Symbol::QamatsMaleHe => "qamats-male-he",
            Symbol::HatafQamats => "hataf-qamats",
            Symbol::QamatsQatan => "qamats-qatan",
            Symbol::HolamHaser => "holam-haser",
            Symbol::HolamMaleAlef => "holam-male-alef",
            Symbol::HolamMaleHe => "holam-male-he",
            Symbol::HolamMaleVav => "holam-male-vav",
            Symbol::Qubuts => "qubuts",
            Symbol::Shuruq => "shuruq",
            Symbol::Dagesh => "dagesh",
            Symbol::Sheva => "sheva",
            Symbol::Qamats => "qamats",
            Symbol::Holam => "holam",
        }
    }

    /// The underlying Unicode, canonical diacritics included. Joining the
    /// sequence for a whole word reproduces its normalized text.
    pub fn unicode(self) -> &'static str {
        match self {
            Symbol::Alef => "\u{05d0}",
            Symbol::MapiqAlef => "\u{05d0}\u{05bc}",
            Symbol::Bet | Symbol::Vet => "\u{05d1}",
            Symbol::Gimel => "\u{05d2}",
            Symbol::Dalet => "\u{05d3}",
            Symbol::He => "\u{05d4}",
            Symbol::MapiqHe => "\u{05d4}\u{05bc}",
            Symbol::Vav => "\u{05d5}",
            Symbol::Zayin => "\u{05d6}",
            Symbol::Het => "\u{05d7}",
            Symbol::Tet => "\u{05d8}",
            Symbol::Yod => "\u{05d9}",
            Symbol::KafSofit | Symbol::KhafSofit => "\u{05da}",
            Symbol::Kaf | Symbol::Khaf => "\u{05db}",
            Symbol::Lamed => "\u{05dc}",
            Symbol::MemSofit => "\u{05dd}",
            Symbol::Mem => "\u{05de}",
            Symbol::NunSofit => "\u{05df}",
            Symbol::Nun => "\u{05e0}",
            Symbol::Samekh => "\u{05e1}",
            Symbol::Ayin => "\u{05e2}",
            Symbol::PeSofit | Symbol::FeSofit => "\u{05e3}",
            Symbol::Pe | Symbol::Fe => "\u{05e4}",
            Symbol::TsadiSofit => "\u{05e5}",
            Symbol::Tsadi => "\u{05e6}",
            Symbol::Qof => "\u{05e7}",
            Symbol::Resh => "\u{05e8}",
            Symbol::Shin => "\u{05e9}\u{05c1}",
            Symbol::Sin => "\u{05e9}\u{05c2}",
            Symbol::Tav | Symbol::Sav => "\u{05ea}",
            Symbol::DageshQal | Symbol::DageshHazaq | Symbol::Dagesh => "\u{05bc}",
            Symbol::ShevaNa | Symbol::ShevaNah | Symbol::Sheva => "\u{05b0}",
            Symbol::Hiriq => "\u{05b4}",
            Symbol::HiriqMaleYod => "\u{05b4}\u{05d9}",
            Symbol::Tsere => "\u{05b5}",
            Symbol::TsereMaleAlef => "\u{05b5}\u{05d0}",
            Symbol::TsereMaleHe => "\u{05b5}\u{05d4}",
            Symbol::TsereMaleYod => "\u{05b5}\u{05d9}",
            Symbol::Segol => "\u{05b6}",
            Symbol::SegolMaleAlef => "\u{05b6}\u{05d0}",
            Symbol::SegolMaleHe => "\u{05b6}\u{05d4}",
            Symbol::SegolMaleYod => "\u{05b6}\u{05d9}",
            Symbol::HatafSegol => "\u{05b1}",
            Symbol::Patah | Symbol::PatahGenuvah => "\u{05b7}",
            Symbol::PatahMaleAlef => "\u{05b7}\u{05d0}",
            Symbol::PatahMaleHe => "\u{05b7}\u{05d4}",
            Symbol::HatafPatah => "\u{05b2}",
            Symbol::QamatsGadol | Symbol::QamatsQatan | Symbol::Qamats => "\u{05b8}",
            Symbol::QamatsMaleAlef => "\u{05b8}\u{05d0}",
            Symbol::QamatsMaleHe => "\u{05b8}\u{05d4}",
            Symbol::HatafQamats => "\u{05b3}",
            Symbol::HolamHaser | Symbol::Holam => "\u{05b9}",
            Symbol::HolamMaleAlef => "\u{05b9}\u{05d0}",
            Symbol::HolamMaleHe => "\u{05b9}\u{05d4}",
            Symbol::HolamMaleVav => "\u{05d5}\u{05b9}",
            Symbol::Qubuts => "\u{05bb}",
            Symbol::Shuruq => "\u{05d5}\u{05bc}",
        }
    }

    pub fn is_letter(self) -> bool {
        matches!(
            self,
            Symbol::Alef
                | Symbol::MapiqAlef
                | Symbol::Bet
                | Symbol::Vet
                | Symbol::Gimel
                | Symbol::Dalet
                | Symbol::He
                | Symbol::MapiqHe
                | Symbol::Vav
                | Symbol::Zayin
                | Symbol::Het
                | Symbol::Tet
                | Symbol::Yod
                | Symbol::Kaf
                | Symbol::Khaf
                | Symbol::KafSofit
                | Symbol::KhafSofit
                | Symbol::Lamed
                | Symbol::Mem
                | Symbol::MemSofit
                | Symbol::Nun
                | Symbol::NunSofit
                | Symbol::Samekh
                | Symbol::Ayin
                | Symbol::Pe
                | Symbol::Fe
                | Symbol::PeSofit
                | Symbol::FeSofit
                | Symbol::Tsadi
                | Symbol::TsadiSofit
                | Symbol::Qof
                | Symbol::Resh
                | Symbol::Shin
                | Symbol::Sin
                | Symbol::Tav
                | Symbol::Sav
        )
    }

    /// A full vowel nucleus: everything except letters, dagesh, and sheva.
    pub fn is_vowel(self) -> bool {
        !self.is_letter() && !self.is_dagesh() && !self.is_sheva()
    }

    pub fn is_dagesh(self) -> bool {
        matches!(self, Symbol::DageshQal | Symbol::DageshHazaq | Symbol::Dagesh)
    }

    pub fn is_sheva(self) -> bool {
        matches!(self, Symbol::ShevaNa | Symbol::ShevaNah | Symbol::Sheva)
    }

    /// Long vowels for the sheva rules; every male vowel counts.
    pub fn is_long_vowel(self) -> bool {
        matches!(
            self,
            Symbol::QamatsGadol
                | Symbol::QamatsMaleAlef
                | Symbol::QamatsMaleHe
                | Symbol::Tsere
                | Symbol::TsereMaleAlef
                | Symbol::TsereMaleHe
                | Symbol::TsereMaleYod
                | Symbol::HiriqMaleYod
                | Symbol::SegolMaleAlef
                | Symbol::SegolMaleHe
                | Symbol::SegolMaleYod
                | Symbol::PatahMaleAlef
                | Symbol::PatahMaleHe
                | Symbol::HolamHaser
                | Symbol::HolamMaleAlef
                | Symbol::HolamMaleHe
                | Symbol::HolamMaleVav
                | Symbol::Shuruq
        )
    }

    /// Short vowels for the sheva rules. Hataf vowels are neither long
    /// nor short here; they fall through to the default.
    pub fn is_short_vowel(self) -> bool {
        matches!(
            self,
            Symbol::Patah
                | Symbol::PatahGenuvah
                | Symbol::Segol
                | Symbol::Hiriq
                | Symbol::Qubuts
                | Symbol::QamatsQatan
        )
    }

    /// The letter a male vowel or shuruq absorbed, if any. Useful for
    /// accounting every input letter.
    pub fn consumed_letter(self) -> Option<Letter> {
        match self {
            Symbol::HiriqMaleYod | Symbol::TsereMaleYod | Symbol::SegolMaleYod => Some(Letter::Yod),
            Symbol::TsereMaleAlef
            | Symbol::SegolMaleAlef
            | Symbol::PatahMaleAlef
            | Symbol::QamatsMaleAlef
            | Symbol::HolamMaleAlef => Some(Letter::Alef),
            Symbol::TsereMaleHe
            | Symbol::SegolMaleHe
            | Symbol::PatahMaleHe
            | Symbol::QamatsMaleHe
            | Symbol::HolamMaleHe => Some(Letter::He),
            Symbol::HolamMaleVav | Symbol::Shuruq => Some(Letter::Vav),
            _ => None,
        }
    }

    /// The base letter identity of a letter symbol (vet folds to bet,
    /// mapiq-he to he, and so on).
    pub fn letter(self) -> Option<Letter> {
        let letter = match self {
            Symbol::Alef | Symbol::MapiqAlef => Letter::Alef,
            Symbol::Bet | Symbol::Vet => Letter::Bet,
            Symbol::Gimel => Letter::Gimel,
            Symbol::Dalet => Letter::Dalet,
            Symbol::He | Symbol::MapiqHe => Letter::He,
            Symbol::Vav => Letter::Vav,
            Symbol::Zayin => Letter::Zayin,
            Symbol::Het => Letter::Het,
            Symbol::Tet => Letter::Tet,
            Symbol::Yod => Letter::Yod,
            Symbol::Kaf | Symbol::Khaf => Letter::Kaf,
            Symbol::KafSofit | Symbol::KhafSofit => Letter::KafSofit,
            Symbol::Lamed => Letter::Lamed,
            Symbol::Mem => Letter::Mem,
            Symbol::MemSofit => Letter::MemSofit,
            Symbol::Nun => Letter::Nun,
            Symbol::NunSofit => Letter::NunSofit,
            Symbol::Samekh => Letter::Samekh,
            Symbol::Ayin => Letter::Ayin,
            Symbol::Pe | Symbol::Fe => Letter::Pe,
            Symbol::PeSofit | Symbol::FeSofit => Letter::PeSofit,
            Symbol::Tsadi => Letter::Tsadi,
            Symbol::TsadiSofit => Letter::TsadiSofit,
            Symbol::Qof => Letter::Qof,
            Symbol::Resh => Letter::Resh,
            Symbol::Shin | Symbol::Sin => Letter::Shin,
            Symbol::Tav | Symbol::Sav => Letter::Tav,
            _ => return None,
        };
        Some(letter)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(Symbol::TsereMaleAlef.name(), "tsere-male-alef");
        assert_eq!(Symbol::MapiqHe.name(), "mapiq-he");
        assert_eq!(Symbol::DageshQal.name(), "dagesh-qal");
        assert_eq!(Symbol::QamatsQatan.name(), "qamats-qatan");
    }

    #[test]
    fn vowel_classes_are_disjoint() {
        let all = [
            Symbol::Hiriq,
            Symbol::HiriqMaleYod,
            Symbol::QamatsGadol,
            Symbol::QamatsQatan,
            Symbol::Shuruq,
            Symbol::HatafPatah,
            Symbol::Qamats,
        ];
        for s in all {
            assert!(s.is_vowel(), "{s}");
            assert!(!(s.is_long_vowel() && s.is_short_vowel()), "{s}");
        }
        assert!(!Symbol::ShevaNa.is_vowel());
        assert!(!Symbol::DageshHazaq.is_vowel());
        assert!(!Symbol::Bet.is_vowel());
    }

    #[test]
    fn soft_and_hard_letters_share_identity() {
        assert_eq!(Symbol::Vet.letter(), Some(Letter::Bet));
        assert_eq!(Symbol::Sav.letter(), Some(Letter::Tav));
        assert_eq!(Symbol::Sin.letter(), Some(Letter::Shin));
        assert_eq!(Symbol::DageshQal.letter(), None);
    }

    #[test]
    fn shuruq_consumes_a_vav() {
        assert_eq!(Symbol::Shuruq.consumed_letter(), Some(Letter::Vav));
        assert_eq!(Symbol::HiriqMaleYod.consumed_letter(), Some(Letter::Yod));
        assert_eq!(Symbol::Hiriq.consumed_letter(), None);
    }
}
