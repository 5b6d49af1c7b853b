//! Folding the normalized mark stream into consonant clusters.

use log::debug;

use crate::chars::{CodepointClass, Letter, Niqqud};
use crate::normalize::RawWord;
use crate::result::Diagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShinDot {
    Shin,
    Sin,
}

/// One consonant letter with everything written on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub letter: Letter,
    pub dagesh: bool,
    /// Only meaningful on shin.
    pub dot: Option<ShinDot>,
    /// At most one vowel OR a sheva, never both; a hataf vowel fills the
    /// vowel slot as a single unit.
    pub vowel: Option<Niqqud>,
    pub sheva: bool,
    pub is_first: bool,
    pub is_last: bool,
}

impl Cluster {
    fn new(letter: Letter) -> Cluster {
        Cluster {
            letter,
            dagesh: false,
            dot: None,
            vowel: None,
            sheva: false,
            is_first: false,
            is_last: false,
        }
    }

    /// No vowel and no sheva: the shape a mater lectionis must have.
    pub fn is_unpointed(&self) -> bool {
        self.vowel.is_none() && !self.sheva
    }

    /// Rough consonant sound, used to spot doubled letters across a
    /// sheva. Folds letters that read alike: qof with hard kaf, samekh
    /// with sin and soft tav, het with soft kaf.
    pub(crate) fn phoneme(&self) -> Phoneme {
        match self.letter.base() {
            Letter::Alef | Letter::Ayin => Phoneme::Glottal,
            Letter::Bet => {
                if self.dagesh {
                    Phoneme::B
                } else {
                    Phoneme::V
                }
            }
            Letter::Gimel => Phoneme::G,
            Letter::Dalet => Phoneme::D,
            Letter::He => Phoneme::H,
            Letter::Vav => Phoneme::V,
            Letter::Zayin => Phoneme::Z,
            Letter::Het => Phoneme::Kh,
            Letter::Tet => Phoneme::T,
            Letter::Yod => Phoneme::Y,
            Letter::Kaf => {
                if self.dagesh {
                    Phoneme::K
                } else {
                    Phoneme::Kh
                }
            }
            Letter::Lamed => Phoneme::L,
            Letter::Mem => Phoneme::M,
            Letter::Nun => Phoneme::N,
            Letter::Samekh => Phoneme::S,
            Letter::Pe => {
                if self.dagesh {
                    Phoneme::P
                } else {
                    Phoneme::F
                }
            }
            Letter::Tsadi => Phoneme::Ts,
            Letter::Qof => Phoneme::K,
            Letter::Resh => Phoneme::R,
            Letter::Shin => match self.dot {
                Some(ShinDot::Sin) => Phoneme::S,
                _ => Phoneme::Sh,
            },
            Letter::Tav => {
                if self.dagesh {
                    Phoneme::T
                } else {
                    Phoneme::S
                }
            }
            // base() already folded the sofit forms
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phoneme {
    Glottal,
    B,
    V,
    G,
    D,
    H,
    Z,
    Kh,
    T,
    Y,
    K,
    L,
    M,
    N,
    S,
    P,
    F,
    Ts,
    R,
    Sh,
}

/// A tokenized word: a non-empty run of clusters plus word-level flags.
#[derive(Debug, Clone)]
pub(crate) struct Word {
    pub text: String,
    pub clusters: Vec<Cluster>,
    pub followed_by_maqaf: bool,
    pub flags: Diagnostics,
}

/// Fold a normalized word into clusters. Every letter starts a cluster;
/// the marks that follow attach to it. Conflicting marks resolve
/// deterministically and raise a diagnostic.
pub(crate) fn tokenize(raw: RawWord) -> Word {
    let mut flags = Diagnostics::empty();
    if raw.unknown_dropped {
        flags |= Diagnostics::UNKNOWN_CODEPOINTS;
    }

    let mut clusters: Vec<Cluster> = Vec::new();
    for (class, _) in raw.marks {
        match class {
            CodepointClass::Letter(letter) => clusters.push(Cluster::new(letter)),
            _ => match clusters.last_mut() {
                Some(cluster) => attach(cluster, class, &mut flags),
                None => {
                    // A mark with no letter to carry it.
                    debug!("dropping orphan mark at word start");
                    flags |= Diagnostics::UNKNOWN_CODEPOINTS;
                }
            },
        }
    }

    if let Some(first) = clusters.first_mut() {
        first.is_first = true;
    }
    if let Some(last) = clusters.last_mut() {
        last.is_last = true;
    }

    if !clusters.is_empty() && clusters.iter().all(Cluster::is_unpointed) {
        flags |= Diagnostics::HAS_NO_NIQQUD;
    }
    if is_be_le_prefix(&clusters) {
        flags |= Diagnostics::LIKELY_PREFIX_BE_LE;
    }

    Word {
        text: raw.text,
        clusters,
        followed_by_maqaf: raw.followed_by_maqaf,
        flags,
    }
}

fn attach(cluster: &mut Cluster, class: CodepointClass, flags: &mut Diagnostics) {
    match class {
        CodepointClass::Dagesh => cluster.dagesh = true,
        CodepointClass::ShinDot => set_dot(cluster, ShinDot::Shin, flags),
        CodepointClass::SinDot => set_dot(cluster, ShinDot::Sin, flags),
        CodepointClass::Sheva => {
            if cluster.vowel.is_some() {
                // A sheva and a vowel on one letter: the vowel wins.
                *flags |= Diagnostics::AMBIGUOUS_SHEVA_HATAF;
            } else if cluster.sheva {
                *flags |= Diagnostics::UNKNOWN_CODEPOINTS;
            } else {
                cluster.sheva = true;
            }
        }
        CodepointClass::Vowel(niqqud) => {
            if cluster.sheva {
                // The hataf (or plain) vowel wins over the sheva.
                cluster.sheva = false;
                cluster.vowel = Some(niqqud);
                *flags |= Diagnostics::AMBIGUOUS_SHEVA_HATAF;
            } else if cluster.vowel.is_some() {
                // Two vowels on one letter: keep the first.
                *flags |= Diagnostics::UNKNOWN_CODEPOINTS;
            } else {
                cluster.vowel = Some(niqqud);
            }
        }
        _ => {}
    }
}

fn set_dot(cluster: &mut Cluster, dot: ShinDot, flags: &mut Diagnostics) {
    match cluster.dot {
        None => cluster.dot = Some(dot),
        Some(existing) if existing == dot => {}
        Some(_) => *flags |= Diagnostics::UNKNOWN_CODEPOINTS,
    }
}

/// A detached be-/le- prefix shape: the word opens with a vowel-less
/// bet or lamed carrying a sheva, with more clusters after it.
fn is_be_le_prefix(clusters: &[Cluster]) -> bool {
    match clusters.first() {
        Some(first) if clusters.len() > 1 => {
            matches!(first.letter, Letter::Bet | Letter::Lamed)
                && first.sheva
                && first.vowel.is_none()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn word(text: &str) -> Word {
        let mut raw = normalize(text);
        assert_eq!(raw.len(), 1, "expected one word in {text:?}");
        tokenize(raw.remove(0))
    }

    #[test]
    fn clusters_carry_their_marks() {
        let w = word("בְּרֵאשִׁית");
        assert_eq!(w.clusters.len(), 6);

        let bet = w.clusters[0];
        assert_eq!(bet.letter, Letter::Bet);
        assert!(bet.dagesh);
        assert!(bet.sheva);
        assert!(bet.is_first);

        let shin = w.clusters[3];
        assert_eq!(shin.letter, Letter::Shin);
        assert_eq!(shin.dot, Some(ShinDot::Shin));
        assert_eq!(shin.vowel, Some(Niqqud::Hiriq));

        assert!(w.clusters[5].is_last);
    }

    #[test]
    fn hataf_wins_over_sheva() {
        // Sheva followed by hataf-patah on the same het.
        let w = word("\u{05d7}\u{05b0}\u{05b2}");
        assert_eq!(w.clusters[0].vowel, Some(Niqqud::HatafPatah));
        assert!(!w.clusters[0].sheva);
        assert!(w.flags.contains(Diagnostics::AMBIGUOUS_SHEVA_HATAF));
    }

    #[test]
    fn bare_letters_flag_no_niqqud() {
        let w = word("שלום");
        assert!(w.flags.contains(Diagnostics::HAS_NO_NIQQUD));
        assert!(w.clusters.iter().all(|c| c.is_unpointed()));
    }

    #[test]
    fn be_prefix_is_spotted() {
        assert!(word("בְּרֵאשִׁית").flags.contains(Diagnostics::LIKELY_PREFIX_BE_LE));
        assert!(!word("בָּרָא").flags.contains(Diagnostics::LIKELY_PREFIX_BE_LE));
    }

    #[test]
    fn doubled_sounds_match_across_letters() {
        let kaf = Cluster {
            dagesh: true,
            ..Cluster::new(Letter::Kaf)
        };
        let qof = Cluster::new(Letter::Qof);
        assert_eq!(kaf.phoneme(), qof.phoneme());

        let sav = Cluster::new(Letter::Tav);
        let samekh = Cluster::new(Letter::Samekh);
        assert_eq!(sav.phoneme(), samekh.phoneme());
    }
}
