//! Opening word selection by English letter frequency
//!
//! Independent of the candidate set: every letter carries a fixed weight from
//! its frequency in English text (e = 26 down to z = 1), and a word scores the
//! sum of its letter weights. Only words with five distinct letters qualify.

use crate::core::Word;

/// Letters ordered from most to least frequent in English
const ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Weight of a letter: 26 for 'e' down to 1 for 'z'
#[must_use]
pub fn letter_weight(letter: u8) -> u32 {
    ENGLISH_FREQUENCY_ORDER
        .iter()
        .position(|&l| l == letter)
        .map_or(0, |rank| 26 - rank as u32)
}

/// Sum of letter weights, or `None` if the word repeats a letter
#[must_use]
pub fn starter_score(word: &Word) -> Option<u32> {
    word.has_distinct_letters()
        .then(|| word.letters().iter().map(|&l| letter_weight(l)).sum())
}

/// All qualifying words with their scores, sorted by ascending score
///
/// Equal scores keep input order.
#[must_use]
pub fn rank_starters(words: &[Word]) -> Vec<(Word, u32)> {
    let mut ranked: Vec<(Word, u32)> = words
        .iter()
        .filter_map(|&word| starter_score(&word).map(|score| (word, score)))
        .collect();
    ranked.sort_by_key(|&(_, score)| score);
    ranked
}

/// Highest-scoring qualifying word, the earliest on ties
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::starter::best_starter;
///
/// let words: Vec<Word> = ["fuzzy", "stone", "quick"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let (best, score) = best_starter(&words).unwrap();
/// assert_eq!(best.text(), "stone");
/// assert_eq!(score, 20 + 25 + 23 + 21 + 26);
/// ```
#[must_use]
pub fn best_starter(words: &[Word]) -> Option<(Word, u32)> {
    words
        .iter()
        .filter_map(|&word| starter_score(&word).map(|score| (word, score)))
        .fold(None, |best: Option<(Word, u32)>, candidate| match best {
            Some(current) if current.1 >= candidate.1 => Some(current),
            _ => Some(candidate),
        })
}
