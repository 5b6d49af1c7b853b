//! The classifier: ordered rule tables over a small context window.
//!
//! Each cluster is rewritten into grammatical symbols by fixed-order rule
//! groups (letters, dagesh, vav composition, sheva, hataf, male vowels,
//! patah-genuvah, qamats, residual vowels). Within a group the first
//! matching rule wins. Context never exceeds the previous cluster, the
//! next cluster, the word flags, and the sound the fold last emitted;
//! where a reading would need more than that (stress, morphology), the
//! classifier raises a diagnostic instead of guessing.

use log::trace;

use crate::chars::{Letter, Niqqud};
use crate::cluster::{Cluster, ShinDot, Word};
use crate::result::Diagnostics;
use crate::symbol::Symbol;

/// Classifier output for one word.
#[derive(Debug, Clone)]
pub(crate) struct Classified {
    pub symbols: Vec<Symbol>,
    pub flags: Diagnostics,
    pub patah_genuvah: bool,
}

/// The sound the fold last emitted, carried left to right. Classification
/// of a cluster may read the symbols already chosen for its predecessors,
/// never the other way around.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Sound {
    Start,
    Vowel(Symbol),
    ShevaNa,
    ShevaNah,
    Consonant,
}

impl Sound {
    /// An open, voiced ending: a vowel or a voiced sheva.
    fn is_voiced(self) -> bool {
        matches!(self, Sound::Vowel(_) | Sound::ShevaNa)
    }

    fn vowel(self) -> Option<Symbol> {
        match self {
            Sound::Vowel(v) => Some(v),
            _ => None,
        }
    }
}

/// The rule window: the cluster under classification plus everything a
/// rule predicate may look at.
struct Window<'a> {
    clusters: &'a [Cluster],
    i: usize,
    followed_by_maqaf: bool,
    /// False when the word carries no vowel points and no sheva at all.
    word_pointed: bool,
    last: Sound,
    /// Dagesh symbol already chosen for the current cluster, if any.
    cur_dagesh: Option<Symbol>,
}

impl Window<'_> {
    fn cur(&self) -> &Cluster {
        &self.clusters[self.i]
    }

    fn prev(&self) -> Option<&Cluster> {
        self.i.checked_sub(1).map(|j| &self.clusters[j])
    }

    fn next(&self) -> Option<&Cluster> {
        self.clusters.get(self.i + 1)
    }

    fn next2(&self) -> Option<&Cluster> {
        self.clusters.get(self.i + 2)
    }
}

/// One ordered rule: a predicate over the window and its outcome.
struct Rule<T: Copy + 'static> {
    id: &'static str,
    when: fn(&Window) -> bool,
    then: T,
}

fn first_match<T: Copy>(group: &str, rules: &[Rule<T>], w: &Window) -> Option<T> {
    for rule in rules {
        if (rule.when)(w) {
            trace!("{group}: rule '{}' fired at cluster {}", rule.id, w.i);
            return Some(rule.then);
        }
    }
    None
}

#[derive(Debug, Clone, Copy)]
enum DageshOut {
    MapiqAlef,
    MapiqHe,
    Hazaq,
    Qal,
    Unclassified,
}

static DAGESH_RULES: &[Rule<DageshOut>] = &[
    Rule {
        id: "mapiq-alef",
        when: |w| w.cur().letter == Letter::Alef,
        then: DageshOut::MapiqAlef,
    },
    Rule {
        id: "mapiq-he",
        when: |w| w.cur().letter == Letter::He && w.cur().is_last,
        then: DageshOut::MapiqHe,
    },
    Rule {
        id: "doubled-he",
        when: |w| w.cur().letter == Letter::He,
        then: DageshOut::Hazaq,
    },
    // Without any vowel context the qal/hazaq rules below read nothing.
    Rule {
        id: "no-vowel-context",
        when: |w| !w.word_pointed,
        then: DageshOut::Unclassified,
    },
    Rule {
        id: "bgdkft-after-open-sound",
        when: |w| w.cur().letter.is_bgdkft() && w.last.is_voiced(),
        then: DageshOut::Hazaq,
    },
    Rule {
        id: "bgdkft-plosive",
        when: |w| w.cur().letter.is_bgdkft(),
        then: DageshOut::Qal,
    },
    Rule {
        id: "doubling",
        when: |_| true,
        then: DageshOut::Hazaq,
    },
];

#[derive(Debug, Clone, Copy)]
enum VavOut {
    /// The vav keeps its letter and reads a literal holam-haser.
    HolamLiteral,
    /// The previous cluster gains holam-male-vav; the vav is consumed.
    HolamMale,
    /// The previous slot (or the word start) gains shuruq; the vav is
    /// consumed.
    Shuruq,
    /// Doubled consonantal vav.
    Geminate,
    /// No reading fits; unclassified holam.
    HolamFallback,
}

static VAV_RULES: &[Rule<VavOut>] = &[
    // The dedicated marker always reads haser, never male.
    Rule {
        id: "holam-for-vav-marker",
        when: |w| w.cur().vowel == Some(Niqqud::HolamHaserVav),
        then: VavOut::HolamLiteral,
    },
    Rule {
        id: "holam-male",
        when: |w| {
            w.cur().vowel == Some(Niqqud::Holam)
                && !w.cur().dagesh
                && w.prev().is_some_and(|p| p.vowel.is_none() && !p.sheva)
        },
        then: VavOut::HolamMale,
    },
    Rule {
        id: "consonantal-holam",
        when: |w| {
            w.cur().vowel == Some(Niqqud::Holam)
                && !w.cur().dagesh
                && w.prev().is_some_and(|p| p.vowel.is_some() || p.sheva)
        },
        then: VavOut::HolamLiteral,
    },
    // A holam on a word-initial vav has no slot to land on.
    Rule {
        id: "holam-no-context",
        when: |w| {
            w.cur().vowel == Some(Niqqud::Holam) && !w.cur().dagesh && w.prev().is_none()
        },
        then: VavOut::HolamFallback,
    },
    Rule {
        id: "shuruq",
        when: |w| {
            w.cur().dagesh
                && w.cur().is_unpointed()
                && w.prev().is_none_or(|p| p.vowel.is_none())
        },
        then: VavOut::Shuruq,
    },
    Rule {
        id: "doubled-vav",
        when: |w| w.cur().dagesh,
        then: VavOut::Geminate,
    },
];

static SHEVA_RULES: &[Rule<Symbol>] = &[
    Rule {
        id: "final-pair",
        when: |w| {
            (w.cur().is_last && prev_has_sheva(w))
                || (next_has_sheva(w) && w.next().is_some_and(|n| n.is_last))
        },
        then: Symbol::ShevaNa,
    },
    Rule {
        id: "medial-pair-lead",
        when: next_has_sheva,
        then: Symbol::ShevaNah,
    },
    Rule {
        id: "medial-pair-trail",
        when: prev_has_sheva,
        then: Symbol::ShevaNa,
    },
    Rule {
        id: "word-final",
        when: |w| w.cur().is_last,
        then: Symbol::ShevaNah,
    },
    Rule {
        id: "word-initial",
        when: |w| w.cur().is_first,
        then: Symbol::ShevaNa,
    },
    Rule {
        id: "under-doubling",
        when: |w| w.cur_dagesh == Some(Symbol::DageshHazaq),
        then: Symbol::ShevaNa,
    },
    Rule {
        id: "after-long-vowel",
        when: |w| w.last.vowel().is_some_and(Symbol::is_long_vowel),
        then: Symbol::ShevaNa,
    },
    Rule {
        id: "after-short-vowel",
        when: |w| w.last.vowel().is_some_and(Symbol::is_short_vowel),
        then: Symbol::ShevaNah,
    },
    Rule {
        id: "before-final-alef",
        when: |w| {
            w.next()
                .is_some_and(|n| n.is_last && n.letter == Letter::Alef && n.is_unpointed())
        },
        then: Symbol::ShevaNah,
    },
    Rule {
        id: "before-twin-sound",
        when: |w| {
            w.next().is_some_and(|n| {
                n.letter.base() == w.cur().letter.base() || n.phoneme() == w.cur().phoneme()
            })
        },
        then: Symbol::ShevaNa,
    },
    Rule {
        id: "default",
        when: |_| true,
        then: Symbol::ShevaNah,
    },
];

fn prev_has_sheva(w: &Window) -> bool {
    w.prev().is_some_and(|p| p.sheva)
}

fn next_has_sheva(w: &Window) -> bool {
    w.next().is_some_and(|n| n.sheva)
}

#[derive(Debug, Clone, Copy)]
enum QamatsOut {
    Qatan,
    /// Unverifiable without stress: fallback symbol plus diagnostic.
    Ambiguous,
    Gadol,
}

static QAMATS_RULES: &[Rule<QamatsOut>] = &[
    Rule {
        id: "written-qatan",
        when: |w| w.cur().vowel == Some(Niqqud::QamatsQatan),
        then: QamatsOut::Qatan,
    },
    Rule {
        id: "maqaf-bound",
        when: |w| w.followed_by_maqaf,
        then: QamatsOut::Qatan,
    },
    Rule {
        id: "before-hataf-qamats",
        when: |w| w.next().is_some_and(|n| n.vowel == Some(Niqqud::HatafQamats)),
        then: QamatsOut::Qatan,
    },
    Rule {
        id: "after-be-le-prefix",
        when: |w| be_le_prefix_position(w) && next_sheva_reads_nah(w),
        then: QamatsOut::Qatan,
    },
    Rule {
        id: "after-be-le-prefix-unverified",
        when: be_le_prefix_position,
        then: QamatsOut::Ambiguous,
    },
    Rule {
        id: "default-gadol",
        when: |_| true,
        then: QamatsOut::Gadol,
    },
];

/// The cluster sits right after a detached be-/le- prefix.
fn be_le_prefix_position(w: &Window) -> bool {
    w.i == 1 && {
        let first = &w.clusters[0];
        matches!(first.letter, Letter::Bet | Letter::Lamed)
            && first.sheva
            && first.vowel.is_none()
    }
}

/// Would the following cluster's sheva read nah if this qamats were
/// short? Position rules that force sheva-na regardless veto the short
/// reading; without a closing sheva there is no evidence either way.
fn next_sheva_reads_nah(w: &Window) -> bool {
    match w.next() {
        Some(next) if next.sheva && !next.dagesh => {
            // A word-final sheva pair reads na-na no matter the vowel.
            !w.next2().is_some_and(|n2| n2.sheva && n2.is_last)
        }
        _ => false,
    }
}

/// Mater lectionis readings: raw vowel + absorbed letter.
static MALE_VOWELS: &[(Niqqud, Letter, Symbol)] = &[
    (Niqqud::Hiriq, Letter::Yod, Symbol::HiriqMaleYod),
    (Niqqud::Tsere, Letter::Alef, Symbol::TsereMaleAlef),
    (Niqqud::Tsere, Letter::He, Symbol::TsereMaleHe),
    (Niqqud::Tsere, Letter::Yod, Symbol::TsereMaleYod),
    (Niqqud::Segol, Letter::Alef, Symbol::SegolMaleAlef),
    (Niqqud::Segol, Letter::He, Symbol::SegolMaleHe),
    (Niqqud::Segol, Letter::Yod, Symbol::SegolMaleYod),
    (Niqqud::Patah, Letter::Alef, Symbol::PatahMaleAlef),
    (Niqqud::Patah, Letter::He, Symbol::PatahMaleHe),
    (Niqqud::Qamats, Letter::Alef, Symbol::QamatsMaleAlef),
    (Niqqud::Qamats, Letter::He, Symbol::QamatsMaleHe),
    (Niqqud::Holam, Letter::Alef, Symbol::HolamMaleAlef),
    (Niqqud::Holam, Letter::He, Symbol::HolamMaleHe),
];

/// A male reading consumes the next letter when it is bare: no vowel, no
/// sheva, no dagesh, no dot. A bare he serves as a mater only at the end
/// of the word; mid-word it is a consonant waiting for its own vowel.
fn male_vowel(w: &Window) -> Option<Symbol> {
    let vowel = w.cur().vowel?;
    let next = w.next()?;
    if !next.is_unpointed() || next.dagesh || next.dot.is_some() {
        return None;
    }
    if next.letter == Letter::He && !next.is_last {
        return None;
    }
    MALE_VOWELS
        .iter()
        .find(|&&(v, letter, _)| v == vowel && letter == next.letter)
        .map(|&(_, _, symbol)| symbol)
}

/// Final het, ayin, and mapiq-he pull a terminal patah in front of
/// themselves.
fn genuvah_carrier(c: &Cluster) -> bool {
    matches!(c.letter, Letter::Het | Letter::Ayin) || (c.letter == Letter::He && c.dagesh)
}

fn letter_symbol(c: &Cluster) -> (Symbol, Diagnostics) {
    let mut flags = Diagnostics::empty();
    let symbol = match c.letter {
        Letter::Alef => Symbol::Alef,
        Letter::Bet => plosive(c, Symbol::Bet, Symbol::Vet),
        Letter::Gimel => Symbol::Gimel,
        Letter::Dalet => Symbol::Dalet,
        Letter::He => Symbol::He,
        Letter::Vav => Symbol::Vav,
        Letter::Zayin => Symbol::Zayin,
        Letter::Het => Symbol::Het,
        Letter::Tet => Symbol::Tet,
        Letter::Yod => Symbol::Yod,
        Letter::Kaf => plosive(c, Symbol::Kaf, Symbol::Khaf),
        Letter::KafSofit => plosive(c, Symbol::KafSofit, Symbol::KhafSofit),
        Letter::Lamed => Symbol::Lamed,
        Letter::Mem => Symbol::Mem,
        Letter::MemSofit => Symbol::MemSofit,
        Letter::Nun => Symbol::Nun,
        Letter::NunSofit => Symbol::NunSofit,
        Letter::Samekh => Symbol::Samekh,
        Letter::Ayin => Symbol::Ayin,
        Letter::Pe => plosive(c, Symbol::Pe, Symbol::Fe),
        Letter::PeSofit => plosive(c, Symbol::PeSofit, Symbol::FeSofit),
        Letter::Tsadi => Symbol::Tsadi,
        Letter::TsadiSofit => Symbol::TsadiSofit,
        Letter::Qof => Symbol::Qof,
        Letter::Resh => Symbol::Resh,
        Letter::Shin => match c.dot {
            Some(ShinDot::Shin) => Symbol::Shin,
            Some(ShinDot::Sin) => Symbol::Sin,
            None => {
                flags |= Diagnostics::MISSING_SHIN_SIN_DOT;
                Symbol::Shin
            }
        },
        Letter::Tav => plosive(c, Symbol::Tav, Symbol::Sav),
    };
    (symbol, flags)
}

fn plosive(c: &Cluster, hard: Symbol, soft: Symbol) -> Symbol {
    if c.dagesh { hard } else { soft }
}

fn hataf_symbol(v: Niqqud) -> Symbol {
    match v {
        Niqqud::HatafSegol => Symbol::HatafSegol,
        Niqqud::HatafPatah => Symbol::HatafPatah,
        Niqqud::HatafQamats => Symbol::HatafQamats,
        _ => unreachable!("not a hataf vowel"),
    }
}

/// Context-free readings for whatever vowels remain.
fn residual_symbol(v: Niqqud) -> Symbol {
    match v {
        Niqqud::Hiriq => Symbol::Hiriq,
        Niqqud::Tsere => Symbol::Tsere,
        Niqqud::Segol => Symbol::Segol,
        Niqqud::Patah => Symbol::Patah,
        Niqqud::Holam | Niqqud::HolamHaserVav => Symbol::HolamHaser,
        Niqqud::Qubuts => Symbol::Qubuts,
        Niqqud::QamatsQatan => Symbol::QamatsQatan,
        Niqqud::Qamats => Symbol::QamatsGadol,
        Niqqud::HatafSegol | Niqqud::HatafPatah | Niqqud::HatafQamats => hataf_symbol(v),
    }
}

/// Rewrite a tokenized word into its grammatical symbols, left to right.
pub(crate) fn classify(word: &Word) -> Classified {
    let clusters = &word.clusters;
    let mut symbols: Vec<Symbol> = Vec::with_capacity(clusters.len() * 2);
    let mut flags = word.flags;
    let mut patah_genuvah = false;
    let mut last = Sound::Start;
    let mut consume_next = false;

    for i in 0..clusters.len() {
        if consume_next {
            consume_next = false;
            continue;
        }
        let cur = &clusters[i];
        let mut w = Window {
            clusters,
            i,
            followed_by_maqaf: word.followed_by_maqaf,
            word_pointed: !word.flags.contains(Diagnostics::HAS_NO_NIQQUD),
            last,
            cur_dagesh: None,
        };

        // Letters.
        let (mut letter_sym, letter_flags) = letter_symbol(cur);
        flags |= letter_flags;
        let mut dagesh_sym: Option<Symbol> = None;
        let mut vowel_sym: Option<Symbol> = None;
        let mut sheva_sym: Option<Symbol> = None;

        // Dagesh. A dagesh on vav belongs to the vav-composition group.
        if cur.dagesh && cur.letter != Letter::Vav {
            match first_match("dagesh", DAGESH_RULES, &w) {
                Some(DageshOut::MapiqAlef) => letter_sym = Symbol::MapiqAlef,
                Some(DageshOut::MapiqHe) => letter_sym = Symbol::MapiqHe,
                Some(DageshOut::Hazaq) => dagesh_sym = Some(Symbol::DageshHazaq),
                Some(DageshOut::Qal) => dagesh_sym = Some(Symbol::DageshQal),
                Some(DageshOut::Unclassified) | None => {
                    flags |= Diagnostics::UNCLASSIFIED_DAGESH;
                    dagesh_sym = Some(Symbol::Dagesh);
                }
            }
            w.cur_dagesh = dagesh_sym;
        }

        // Vav composition.
        if cur.letter == Letter::Vav {
            match first_match("vav", VAV_RULES, &w) {
                Some(VavOut::HolamLiteral) => {
                    vowel_sym = Some(Symbol::HolamHaser);
                    if cur.dagesh {
                        dagesh_sym = Some(Symbol::DageshHazaq);
                        w.cur_dagesh = dagesh_sym;
                    }
                }
                Some(VavOut::HolamMale) => {
                    symbols.push(Symbol::HolamMaleVav);
                    last = Sound::Vowel(Symbol::HolamMaleVav);
                    continue;
                }
                Some(VavOut::Shuruq) => {
                    symbols.push(Symbol::Shuruq);
                    last = Sound::Vowel(Symbol::Shuruq);
                    continue;
                }
                Some(VavOut::Geminate) => {
                    dagesh_sym = Some(Symbol::DageshHazaq);
                    w.cur_dagesh = dagesh_sym;
                }
                Some(VavOut::HolamFallback) => {
                    flags |= Diagnostics::UNCLASSIFIED_HOLAM;
                    vowel_sym = Some(Symbol::Holam);
                }
                None => {}
            }
        }

        // Sheva.
        if cur.sheva {
            sheva_sym = Some(match first_match("sheva", SHEVA_RULES, &w) {
                Some(symbol) => symbol,
                None => {
                    flags |= Diagnostics::UNCLASSIFIED_SHEVA;
                    Symbol::Sheva
                }
            });
        }

        // Hataf, male, patah-genuvah, qamats, residual: one vowel slot.
        if vowel_sym.is_none() {
            if let Some(v) = cur.vowel {
                if v.is_hataf() {
                    vowel_sym = Some(hataf_symbol(v));
                } else if let Some(male) = male_vowel(&w) {
                    trace!("male: '{}' absorbs the next letter", male.name());
                    vowel_sym = Some(male);
                    consume_next = true;
                } else if v == Niqqud::Patah && cur.is_last && genuvah_carrier(cur) {
                    vowel_sym = Some(Symbol::PatahGenuvah);
                    patah_genuvah = true;
                } else if matches!(v, Niqqud::Qamats | Niqqud::QamatsQatan) {
                    vowel_sym = Some(match first_match("qamats", QAMATS_RULES, &w) {
                        Some(QamatsOut::Qatan) => Symbol::QamatsQatan,
                        Some(QamatsOut::Gadol) => Symbol::QamatsGadol,
                        Some(QamatsOut::Ambiguous) | None => {
                            flags |= Diagnostics::AMBIGUOUS_QAMATS;
                            Symbol::Qamats
                        }
                    });
                } else {
                    vowel_sym = Some(residual_symbol(v));
                }
            }
        }

        symbols.push(letter_sym);
        symbols.extend(dagesh_sym);
        symbols.extend(vowel_sym);
        symbols.extend(sheva_sym);

        last = match (sheva_sym, vowel_sym) {
            (Some(Symbol::ShevaNa), _) => Sound::ShevaNa,
            (Some(Symbol::ShevaNah), _) => Sound::ShevaNah,
            (Some(_), _) => Sound::Consonant,
            (None, Some(v)) => Sound::Vowel(v),
            (None, None) => Sound::Consonant,
        };
    }

    Classified {
        symbols,
        flags,
        patah_genuvah,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::tokenize;
    use crate::normalize::normalize;

    fn parse_symbols(text: &str) -> (Vec<Symbol>, Diagnostics) {
        let mut raw = normalize(text);
        assert_eq!(raw.len(), 1, "expected one word in {text:?}");
        let word = tokenize(raw.remove(0));
        let classified = classify(&word);
        (classified.symbols, classified.flags)
    }

    fn names(symbols: &[Symbol]) -> Vec<&'static str> {
        symbols.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn word_initial_bgdkft_takes_dagesh_qal() {
        let (symbols, _) = parse_symbols("בָּרָא");
        assert_eq!(
            names(&symbols),
            vec!["bet", "dagesh-qal", "qamats-gadol", "resh", "qamats-male-alef"]
        );
    }

    #[test]
    fn doubling_dagesh_after_vowel() {
        // שַׁבָּת: the bet is doubled after a patah.
        let (symbols, _) = parse_symbols("שַׁבָּת");
        assert_eq!(
            names(&symbols),
            vec!["shin", "patah", "bet", "dagesh-hazaq", "qamats-gadol", "sav"]
        );
    }

    #[test]
    fn dagesh_qal_after_silent_sheva() {
        // מִדְבָּר: the dalet's sheva is silent, so the bet is plosive.
        let (symbols, _) = parse_symbols("מִדְבָּר");
        assert_eq!(
            names(&symbols),
            vec![
                "mem",
                "hiriq",
                "dalet",
                "sheva-nah",
                "bet",
                "dagesh-qal",
                "qamats-gadol",
                "resh"
            ]
        );
    }

    #[test]
    fn mapiq_he_only_word_finally() {
        let (symbols, _) = parse_symbols("בָּהּ");
        assert_eq!(
            names(&symbols),
            vec!["bet", "dagesh-qal", "qamats-gadol", "mapiq-he"]
        );

        // A dotted he mid-word is doubled, not mapiq.
        let (symbols, _) = parse_symbols("חֲמֹרֵיהֶּם");
        assert_eq!(
            names(&symbols),
            vec![
                "het",
                "hataf-patah",
                "mem",
                "holam-haser",
                "resh",
                "tsere-male-yod",
                "he",
                "dagesh-hazaq",
                "segol",
                "mem-sofit"
            ]
        );
    }

    #[test]
    fn shuruq_collapses_the_vav() {
        let (symbols, _) = parse_symbols("תֹהוּ");
        assert_eq!(names(&symbols), vec!["sav", "holam-haser", "he", "shuruq"]);
    }

    #[test]
    fn word_initial_shuruq_stands_alone() {
        // The conjunction: a bare shuruq nucleus before the word.
        let (symbols, _) = parse_symbols("וּמֹשֶׁה");
        assert_eq!(
            names(&symbols),
            vec!["shuruq", "mem", "holam-haser", "shin", "segol-male-he"]
        );
    }

    #[test]
    fn holam_male_lands_on_the_previous_cluster() {
        let (symbols, _) = parse_symbols("אוֹר");
        assert_eq!(names(&symbols), vec!["alef", "holam-male-vav", "resh"]);
    }

    #[test]
    fn consonantal_vav_keeps_its_holam() {
        // מִצְוֹת: the vav follows a sheva, so its holam stays literal.
        let (symbols, _) = parse_symbols("מִצְוֹת");
        assert_eq!(
            names(&symbols),
            vec!["mem", "hiriq", "tsadi", "sheva-nah", "vav", "holam-haser", "sav"]
        );
    }

    #[test]
    fn doubled_vav_reads_dagesh_hazaq() {
        // חַוָּה: vav with dagesh and its own vowel.
        let (symbols, _) = parse_symbols("חַוָּה");
        assert_eq!(
            names(&symbols),
            vec!["het", "patah", "vav", "dagesh-hazaq", "qamats-male-he"]
        );
    }

    #[test]
    fn sheva_after_short_vowel_is_silent() {
        let (symbols, _) = parse_symbols("וַיְהִי");
        assert_eq!(
            names(&symbols),
            vec!["vav", "patah", "yod", "sheva-nah", "he", "hiriq-male-yod"]
        );
    }

    #[test]
    fn sheva_after_long_vowel_is_voiced() {
        // שָׁמְרוּ with qamats-gadol: the sheva is voiced.
        let (symbols, _) = parse_symbols("שָׁמְרוּ");
        assert_eq!(
            names(&symbols),
            vec!["shin", "qamats-gadol", "mem", "sheva-na", "resh", "shuruq"]
        );
    }

    #[test]
    fn final_sheva_is_silent() {
        let (symbols, _) = parse_symbols("לָךְ");
        assert_eq!(
            names(&symbols),
            vec!["lamed", "qamats-gadol", "khaf-sofit", "sheva-nah"]
        );
    }

    #[test]
    fn short_vowel_outranks_twin_letters() {
        // הַלְלוּ: the patah is short, and the length rule fires before
        // the doubled-letter rule.
        let (symbols, _) = parse_symbols("הַלְלוּ");
        assert_eq!(
            names(&symbols),
            vec!["he", "patah", "lamed", "sheva-nah", "lamed", "shuruq"]
        );
    }

    #[test]
    fn twin_letters_voice_the_sheva_after_a_hataf() {
        // After a hataf neither length rule speaks, so the doubled lamed
        // decides.
        let (symbols, _) = parse_symbols("הֲלְלוּ");
        assert_eq!(
            names(&symbols),
            vec!["he", "hataf-patah", "lamed", "sheva-na", "lamed", "shuruq"]
        );
    }

    #[test]
    fn long_vowel_outranks_final_alef() {
        // חֵטְא: the tsere is long and rules on the sheva first.
        let (symbols, _) = parse_symbols("חֵטְא");
        assert_eq!(
            names(&symbols),
            vec!["het", "tsere", "tet", "sheva-na", "alef"]
        );
    }

    #[test]
    fn sheva_before_final_bare_alef_is_silent() {
        // With no vowel on the preceding letter, the final-alef rule is
        // what decides.
        let (symbols, _) = parse_symbols("חטְא");
        assert_eq!(names(&symbols), vec!["het", "tet", "sheva-nah", "alef"]);
    }

    #[test]
    fn final_sheva_pair_is_voiced() {
        // וַיֵּבְךְּ: both final shevas read na, and the voiced first
        // sheva makes the final dagesh a doubling one.
        let (symbols, flags) = parse_symbols("וַיֵּבְךְּ");
        assert_eq!(
            names(&symbols),
            vec![
                "vav",
                "patah",
                "yod",
                "dagesh-hazaq",
                "tsere",
                "vet",
                "sheva-na",
                "kaf-sofit",
                "dagesh-hazaq",
                "sheva-na"
            ]
        );
        assert!(!flags.contains(Diagnostics::AMBIGUOUS_QAMATS));
    }

    #[test]
    fn patah_genuvah_on_final_het() {
        let (symbols, _) = parse_symbols("רוּחַ");
        assert_eq!(names(&symbols), vec!["resh", "shuruq", "het", "patah-genuvah"]);
    }

    #[test]
    fn maqaf_marks_qamats_qatan() {
        let mut raw = normalize("כָּל־");
        let word = tokenize(raw.remove(0));
        assert!(word.followed_by_maqaf);
        let classified = classify(&word);
        assert_eq!(
            names(&classified.symbols),
            vec!["kaf", "dagesh-qal", "qamats-qatan", "lamed"]
        );
    }

    #[test]
    fn qamats_before_hataf_qamats_is_qatan() {
        // צָהֳרַיִם opening.
        let (symbols, _) = parse_symbols("צָהֳרַיִם");
        assert_eq!(symbols[1], Symbol::QamatsQatan);
    }

    #[test]
    fn written_qatan_codepoint_is_honored() {
        let (symbols, _) = parse_symbols("כ\u{05c7}ל");
        assert_eq!(names(&symbols), vec!["khaf", "qamats-qatan", "lamed"]);
    }

    #[test]
    fn prefix_qamats_with_silent_sheva_reads_qatan() {
        // בְּחָכְמָה: the qamats after the be- prefix closes on a silent
        // sheva.
        let (symbols, flags) = parse_symbols("בְּחָכְמָה");
        assert_eq!(
            names(&symbols),
            vec![
                "bet",
                "dagesh-qal",
                "sheva-na",
                "het",
                "qamats-qatan",
                "khaf",
                "sheva-nah",
                "mem",
                "qamats-male-he"
            ]
        );
        assert!(flags.contains(Diagnostics::LIKELY_PREFIX_BE_LE));
        assert!(!flags.contains(Diagnostics::AMBIGUOUS_QAMATS));
    }

    #[test]
    fn prefix_qamats_without_evidence_is_ambiguous() {
        // לְדָבָר: nothing pins the qamats down after the le- prefix.
        let (symbols, flags) = parse_symbols("לְדָבָר");
        assert_eq!(symbols[3], Symbol::Qamats);
        assert!(flags.contains(Diagnostics::AMBIGUOUS_QAMATS));
        assert!(flags.contains(Diagnostics::LIKELY_PREFIX_BE_LE));
    }

    #[test]
    fn unpointed_word_degrades_gracefully() {
        let (symbols, flags) = parse_symbols("שבת");
        assert_eq!(names(&symbols), vec!["shin", "vet", "sav"]);
        assert!(flags.contains(Diagnostics::HAS_NO_NIQQUD));
        assert!(flags.contains(Diagnostics::MISSING_SHIN_SIN_DOT));
    }

    #[test]
    fn unpointed_dagesh_is_unclassified() {
        let (symbols, flags) = parse_symbols("שבּת");
        assert!(symbols.contains(&Symbol::Dagesh));
        assert!(flags.contains(Diagnostics::UNCLASSIFIED_DAGESH));
    }
}
