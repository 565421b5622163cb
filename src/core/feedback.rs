//! Per-letter feedback and the feedback evaluator
//!
//! Each guess position receives one mark:
//! - `Match`   = right letter, right position (`o`, `G`, 🟩)
//! - `Present` = letter occurs elsewhere in the solution (`-`, `Y`, 🟨)
//! - `Absent`  = letter does not occur in the solution (`x`, `_`, ⬜)
//!
//! Presence is checked against the whole solution without consuming letters,
//! so a repeated guess letter can be marked `Present` more often than the
//! solution contains it. The pruner applies the same rules, which keeps
//! evaluate → prune self-consistent.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Match,
    Present,
    Absent,
}

impl Mark {
    /// Parse a single feedback symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'o' | 'O' | 'G' | 'g' | '✓' | '🟩' => Some(Self::Match),
            '-' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'x' | 'X' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Console symbol: ✓ for match, - for present, x for absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => '✓',
            Self::Present => '-',
            Self::Absent => 'x',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback code for a whole guess, one mark per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

/// Error type for unparseable feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{0}' (use o/G for match, -/Y for present, x/_ for absent)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// All letters matched
    pub const VICTORY: Self = Self([Mark::Match; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is a match
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Match)
    }

    /// Parse feedback from text such as `"o-xxo"`, `"GY__G"` or `"🟩🟨⬜⬜🟩"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the text does not hold exactly 5 symbols
    /// or contains an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("o-xxo").unwrap();
    /// assert_eq!(feedback.mark_at(1), Mark::Present);
    /// assert_eq!(feedback, Feedback::parse("🟩🟨⬜⬜🟩").unwrap());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = text.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self(marks))
    }

    /// Convert feedback to emoji string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Result of evaluating a guess against a known solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub victory: bool,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `solution`
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Word, Feedback, evaluate};
///
/// let guess = Word::new("angle").unwrap();
/// let solution = Word::new("apple").unwrap();
/// let evaluation = evaluate(&guess, &solution);
///
/// assert!(!evaluation.victory);
/// assert_eq!(evaluation.feedback, Feedback::parse("oxxoo").unwrap());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> Evaluation {
    let mut marks = [Mark::Absent; WORD_LENGTH];

    for (position, mark) in marks.iter_mut().enumerate() {
        let letter = guess.letter_at(position);
        *mark = if letter == solution.letter_at(position) {
            Mark::Match
        } else if solution.contains(letter) {
            Mark::Present
        } else {
            Mark::Absent
        };
    }

    Evaluation {
        victory: guess == solution,
        feedback: Feedback(marks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn victory_constant() {
        assert!(Feedback::VICTORY.is_victory());
        assert_eq!(Feedback::VICTORY.count(Mark::Match), 5);
        assert_eq!(Feedback::VICTORY.to_string(), "✓✓✓✓✓");
    }

    #[test]
    fn evaluate_self_is_victory() {
        for text in ["crane", "slate", "apple", "zzzzz", "aaaaa"] {
            let w = word(text);
            let evaluation = evaluate(&w, &w);
            assert!(evaluation.victory);
            assert_eq!(evaluation.feedback, Feedback::VICTORY);
        }
    }

    #[test]
    fn evaluate_disjoint_letters_all_absent() {
        let evaluation = evaluate(&word("abcde"), &word("fghij"));
        assert!(!evaluation.victory);
        assert_eq!(evaluation.feedback.count(Mark::Absent), 5);
    }

    #[test]
    fn evaluate_mixed_marks() {
        // C(absent) R(absent) A(match) N(absent) E(match)
        let evaluation = evaluate(&word("crane"), &word("slate"));
        assert_eq!(evaluation.feedback, Feedback::parse("xxoxo").unwrap());

        // T(present) R(match) A(match) C(present) E(match)
        let evaluation = evaluate(&word("trace"), &word("crate"));
        assert_eq!(evaluation.feedback, Feedback::parse("-oo-o").unwrap());
    }

    #[test]
    fn evaluate_repeated_letters_do_not_consume() {
        // SASSY vs STAIR: every non-matching S is still present
        let evaluation = evaluate(&word("sassy"), &word("stair"));
        assert_eq!(
            evaluation.feedback.marks(),
            &[
                Mark::Match,
                Mark::Present,
                Mark::Present,
                Mark::Present,
                Mark::Absent,
            ]
        );
    }

    #[test]
    fn parse_accepts_all_symbol_sets() {
        let expected = Feedback::new([
            Mark::Match,
            Mark::Present,
            Mark::Absent,
            Mark::Absent,
            Mark::Match,
        ]);
        assert_eq!(Feedback::parse("o-xxo").unwrap(), expected);
        assert_eq!(Feedback::parse("GY__G").unwrap(), expected);
        assert_eq!(Feedback::parse("gyXXg").unwrap(), expected);
        assert_eq!(Feedback::parse("🟩🟨⬜⬜🟩").unwrap(), expected);
        assert_eq!(Feedback::parse(" ✓-xx✓ ").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Feedback::parse("o-x"), Err(FeedbackError::InvalidLength(3)));
        assert_eq!(
            Feedback::parse("o-xxoo"),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!(Feedback::parse(""), Err(FeedbackError::InvalidLength(0)));
        assert_eq!(
            Feedback::parse("o-xqo"),
            Err(FeedbackError::InvalidSymbol('q'))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let feedback = evaluate(&word("angle"), &word("apple")).feedback;
        assert_eq!(feedback.to_string(), "✓xx✓✓");
        assert_eq!(feedback.to_string().parse::<Feedback>().unwrap(), feedback);
        assert_eq!(feedback.to_emoji(), "🟩⬜⬜🟩🟩");
    }
}
