//! Input normalization: accent stripping, presentation-form folding,
//! canonical mark ordering, and word segmentation.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::chars::{self, CodepointClass};

/// One segmented word, normalized and ready for the tokenizer.
#[derive(Debug, Clone)]
pub(crate) struct RawWord {
    /// Normalized word text: letters and points in canonical order.
    pub text: String,
    pub marks: Vec<(CodepointClass, char)>,
    /// A maqaf joined this word to the rest of its phrase.
    pub followed_by_maqaf: bool,
    /// Unrecognized code points were dropped from this word.
    pub unknown_dropped: bool,
}

/// Normalize `text` and split it into words.
///
/// Compatibility decomposition folds the Alphabetic Presentation Forms
/// (precomposed shin/sin, dagesh ligatures) onto base letters plus
/// combining marks. Accents and format controls are stripped silently;
/// any other unrecognized code point is dropped and reported on its
/// word. Word boundaries are runs of whitespace or punctuation; a maqaf
/// also ends a word but keeps the phrase together.
pub(crate) fn normalize(text: &str) -> Vec<RawWord> {
    let mut words = Vec::new();
    let mut word = RawWord {
        text: String::new(),
        marks: Vec::new(),
        followed_by_maqaf: false,
        unknown_dropped: false,
    };

    let mut flush = |word: &mut RawWord, maqaf: bool| {
        if word.marks.is_empty() && !word.unknown_dropped {
            return;
        }
        word.followed_by_maqaf = maqaf && !word.marks.is_empty();
        reorder_marks(&mut word.marks);
        word.text = word.marks.iter().map(|&(_, c)| c).collect();
        words.push(std::mem::replace(
            word,
            RawWord {
                text: String::new(),
                marks: Vec::new(),
                followed_by_maqaf: false,
                unknown_dropped: false,
            },
        ));
    };

    for c in text.nfkd() {
        match chars::classify(c) {
            CodepointClass::Whitespace => flush(&mut word, false),
            CodepointClass::Maqaf => flush(&mut word, true),
            CodepointClass::Cantillation => {} // expected; no diagnostic
            CodepointClass::Other => {
                debug!("dropping unrecognized code point U+{:04X}", c as u32);
                word.unknown_dropped = true;
            }
            class => word.marks.push((class, c)),
        }
    }
    flush(&mut word, false);

    words
}

/// Restore the canonical mark order inside each cluster: letter, then
/// dagesh, then shin/sin dot, then vowel, then sheva. Decomposition
/// orders marks by combining class, which puts the vowel ahead of the
/// dagesh and the dots.
fn reorder_marks(marks: &mut [(CodepointClass, char)]) {
    let mut start = 0;
    for i in 1..=marks.len() {
        if i == marks.len() || matches!(marks[i].0, CodepointClass::Letter(_)) {
            // One segment per cluster; the letter sorts first and the
            // sort is stable, so ties keep their input order.
            marks[start..i].sort_by_key(|&(class, _)| mark_rank(class));
            start = i;
        }
    }
}

fn mark_rank(class: CodepointClass) -> u8 {
    match class {
        CodepointClass::Letter(_) => 0,
        CodepointClass::Dagesh => 1,
        CodepointClass::ShinDot | CodepointClass::SinDot => 2,
        CodepointClass::Vowel(_) => 3,
        CodepointClass::Sheva => 4,
        _ => 5,
    }
}

static POINTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0591}-\u{05c7}]").expect("points pattern"));

/// Remove all points, accents, and the maqaf, leaving bare consonantal
/// text.
pub fn strip_points(text: &str) -> String {
    POINTS.replace_all(text, "").into_owned()
}
