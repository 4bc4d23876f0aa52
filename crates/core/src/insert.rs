//! Keyword placement without a syntactic parser.
//!
//! Inserts a keyword into existing prose at a word boundary, preferring
//! sentences long enough to absorb an extra token. Position and connector
//! are chosen at random so repeated enhancement of similar text does not
//! produce mechanically identical phrasing; pass a seeded generator to
//! [`insert_keyword_with_rng`] when a test needs exact output.

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

/// Pattern matching one run of sentence-terminating punctuation.
const SENTENCE_TERMINATORS: &str = r"[.!?]+";

/// Connector words placed before the keyword. The empty connector inserts
/// the keyword bare.
const CONNECTORS: [&str; 5] = ["", "and", "with", "including", "such as"];

/// Sentences with more words than this are considered long enough to absorb
/// an insertion naturally.
const ABSORBING_SENTENCE_WORDS: usize = 5;

/// Sentence bodies with fewer words than this take the keyword as a trailing
/// token instead of an interior insertion.
const MIN_INTERIOR_WORDS: usize = 3;

/// Insert a keyword into text using the process-local random source.
///
/// Idempotent with respect to presence: empty inputs and text that already
/// contains the keyword (case-insensitive) are returned unchanged, so a
/// second call on the result is a no-op.
///
/// # Example
///
/// ```rust
/// use verba_core::insert_keyword;
///
/// let enhanced = insert_keyword("Dogs are great pets for families everywhere.", "loyal");
/// assert!(enhanced.to_lowercase().contains("loyal"));
/// assert_eq!(insert_keyword(&enhanced, "loyal"), enhanced);
/// ```
pub fn insert_keyword(text: &str, keyword: &str) -> String {
    insert_keyword_with_rng(text, keyword, &mut rand::thread_rng())
}

/// Insert a keyword using a caller-supplied random source.
///
/// Production callers want [`insert_keyword`]; this variant exists so tests
/// can pin a seed and assert exact output.
pub fn insert_keyword_with_rng<R: Rng + ?Sized>(text: &str, keyword: &str, rng: &mut R) -> String {
    if text.is_empty() || keyword.is_empty() {
        return text.to_string();
    }

    if text.to_lowercase().contains(&keyword.to_lowercase()) {
        return text.to_string();
    }

    let mut units = split_units(text);
    if units.is_empty() {
        return format!("{}. {}", keyword, text);
    }

    let mut index = select_unit(&units);

    if is_terminator(&units[index]) {
        match units[..index].iter().rposition(|u| !is_terminator(u)) {
            Some(body) => index = body,
            None => {
                // Nothing precedes the terminator: lead with the keyword as
                // its own sentence.
                units.insert(0, format!("{}.", keyword));
                return join_units(&units);
            }
        }
    }

    let modified = insert_into_sentence(&units[index], keyword, rng);
    units[index] = modified;

    join_units(&units)
}

/// Split text into trimmed sentence bodies and terminator runs, in order,
/// with empty fragments dropped.
fn split_units(text: &str) -> Vec<String> {
    let terminator_regex = Regex::new(SENTENCE_TERMINATORS).unwrap();

    let mut units = Vec::new();
    let mut last = 0;

    for m in terminator_regex.find_iter(text) {
        units.push(text[last..m.start()].trim().to_string());
        units.push(m.as_str().to_string());
        last = m.end();
    }
    units.push(text[last..].trim().to_string());

    units.retain(|unit| !unit.is_empty());
    units
}

/// A unit consisting solely of terminator punctuation.
fn is_terminator(unit: &str) -> bool {
    !unit.is_empty() && unit.chars().all(|c| matches!(c, '.' | '!' | '?'))
}

/// Pick the unit to receive the keyword: the first body long enough to
/// absorb it, else the structural middle when there are more than two
/// units, else the first.
fn select_unit(units: &[String]) -> usize {
    let absorbing = units
        .iter()
        .position(|u| !is_terminator(u) && u.split_whitespace().count() > ABSORBING_SENTENCE_WORDS);

    if let Some(index) = absorbing {
        return index;
    }

    if units.len() > 2 { units.len() / 2 } else { 0 }
}

/// Insert the keyword into one sentence body at a word boundary.
///
/// Short bodies append the keyword. Longer ones insert at one of three
/// fractional positions, optionally prefixed by a connector, both chosen
/// uniformly at random.
fn insert_into_sentence<R: Rng + ?Sized>(sentence: &str, keyword: &str, rng: &mut R) -> String {
    let mut words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();

    if words.len() < MIN_INTERIOR_WORDS {
        return format!("{} {}", sentence, keyword);
    }

    let n = words.len();
    let slots = [n / 3, n / 2, 2 * n / 3];
    let position = *slots.choose(rng).unwrap_or(&(n / 2));

    let connector = CONNECTORS.choose(rng).copied().unwrap_or("");
    let insertion = if connector.is_empty() {
        keyword.to_string()
    } else {
        format!("{} {}", connector, keyword)
    };

    words.insert(position, insertion);
    words.join(" ")
}

/// Reassemble units with terminator runs reattached to the body before them
/// and bodies separated by single spaces.
fn join_units(units: &[String]) -> String {
    let mut pieces: Vec<String> = Vec::new();

    for unit in units {
        if is_terminator(unit) {
            match pieces.last_mut() {
                Some(previous) => previous.push_str(unit),
                None => pieces.push(unit.clone()),
            }
        } else {
            pieces.push(unit.clone());
        }
    }

    pieces.join(" ")
}
