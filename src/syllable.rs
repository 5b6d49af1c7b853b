//! Grouping the symbol stream into syllables.
//!
//! A new syllable opens at the letter owning each vowel nucleus and at
//! each voiced sheva; a silent sheva closes the syllable it ends. The
//! spans partition the symbol sequence with no gaps and no overlap.

use serde::Serialize;

use crate::symbol::Symbol;

/// One syllable: a `[start, end)` span of the symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Syllable {
    pub start: usize,
    pub end: usize,
    /// Open syllables end in a vowel; closed ones end on a consonant or
    /// a silent sheva.
    pub open: bool,
}

pub(crate) fn syllabify(symbols: &[Symbol]) -> Vec<Syllable> {
    if symbols.is_empty() {
        return Vec::new();
    }

    // The first syllable starts at the word start no matter what.
    let mut starts = vec![0usize];
    for (i, &symbol) in symbols.iter().enumerate().skip(1) {
        if !(symbol.is_vowel() || symbol == Symbol::ShevaNa) {
            continue;
        }
        let start = owning_letter(symbols, i);
        if start > *starts.last().expect("non-empty") {
            starts.push(start);
        }
    }

    starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(symbols.len());
            Syllable {
                start,
                end,
                open: symbols[end - 1].is_vowel(),
            }
        })
        .collect()
}

/// The nucleus' own letter: step back over the cluster's dagesh to the
/// letter symbol. A nucleus with no letter of its own (a bare shuruq at
/// the word start) opens the syllable itself.
fn owning_letter(symbols: &[Symbol], i: usize) -> usize {
    let mut j = i;
    if j > 0 && symbols[j - 1].is_dagesh() {
        j -= 1;
    }
    if j > 0 && symbols[j - 1].is_letter() {
        j - 1
    } else {
        i
    }
}
