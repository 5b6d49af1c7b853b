//! Grammatical phonics for pointed Hebrew text.
//!
//! `hebphonics-rs` rewrites a vocalized Hebrew word into a stream of
//! named grammatical symbols (distinguishing, for example, a silent from
//! a voiced sheva, a qamats-gadol from a qamats-qatan, a plosive from a
//! doubling dagesh) and groups the symbols into syllables:
//!
//! ```
//! let parsed = hebphonics_rs::parse("בָּהּ");
//! assert_eq!(
//!     parsed.symbol_names(),
//!     vec!["bet", "dagesh-qal", "qamats-gadol", "mapiq-he"]
//! );
//! assert_eq!(parsed.syllables.len(), 1);
//! ```
//!
//! Parsing is pure: no I/O, no shared state, and the same input always
//! yields the same result. Linguistic ambiguity never fails a parse; it
//! is reported through [`Diagnostics`] flags on the result.

mod chars;
mod classify;
mod cluster;
mod normalize;
mod result;
mod syllable;
mod symbol;

use anyhow::{Context, Result};
use log::debug;

pub use chars::{classify as classify_codepoint, CodepointClass, Letter, LetterClass, Niqqud};
pub use cluster::{Cluster, ShinDot};
pub use normalize::strip_points;
pub use result::{Diagnostics, ParseResult};
pub use syllable::Syllable;
pub use symbol::Symbol;

/// Parse a single word. Anything after the first word boundary is
/// ignored; empty or all-accent input yields an empty result.
pub fn parse(word: &str) -> ParseResult {
    parse_words(word).into_iter().next().unwrap_or_default()
}

/// Parse every word of `text`. Words split on whitespace and
/// punctuation; a maqaf keeps its two sides in one phrase but each side
/// parses as its own word, with the left one flagged.
pub fn parse_words(text: &str) -> Vec<ParseResult> {
    let words = normalize::normalize(text);
    debug!("parsing {} word(s)", words.len());
    words
        .into_iter()
        .map(|raw| assemble(cluster::tokenize(raw)))
        .collect()
}

/// Byte-level front door: validates UTF-8, then parses. The only fatal
/// error this crate reports.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<ParseResult>> {
    let text = std::str::from_utf8(bytes).context("input is not valid UTF-8")?;
    Ok(parse_words(text))
}

/// Wire one word through the pipeline stages. No policy lives here.
fn assemble(word: cluster::Word) -> ParseResult {
    let classified = classify::classify(&word);
    let syllables = syllable::syllabify(&classified.symbols);
    ParseResult {
        word: word.text,
        symbols: classified.symbols,
        syllables,
        flags: classified.flags,
        followed_by_maqaf: word.followed_by_maqaf,
        patah_genuvah: classified.patah_genuvah,
    }
}
