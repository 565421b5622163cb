//! Scored candidate sets produced by the scorers

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Which scorer produced a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Product of per-position letter probabilities (higher is better)
    Frequency,
    /// Mean number of candidates eliminated (higher is better)
    Elimination,
}

impl Method {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Elimination => "elimination",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate together with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Scores for every candidate, kept in candidate order with keyed lookup
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: Vec<ScoredWord>,
    index: FxHashMap<Word, usize>,
}

impl ScoreTable {
    #[must_use]
    pub fn new(entries: Vec<ScoredWord>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.word, i))
            .collect();
        Self { entries, index }
    }

    /// Score of a word, if it was ranked
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.index.get(word).map(|&i| self.entries[i].score)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in candidate order
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredWord> {
        self.entries.iter()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.score).sum()
    }

    /// Entries sorted by ascending score; equal scores keep candidate order
    #[must_use]
    pub fn ascending(&self) -> Vec<ScoredWord> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.score.total_cmp(&b.score));
        sorted
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a ScoredWord;
    type IntoIter = std::slice::Iter<'a, ScoredWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scores for a candidate set plus the recommended guess
#[derive(Debug, Clone)]
pub struct Ranking {
    pub method: Method,
    pub scores: ScoreTable,
    pub best: Word,
}

impl Ranking {
    /// Score of the recommended guess
    #[must_use]
    pub fn best_score(&self) -> f64 {
        self.scores.get(&self.best).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str, score: f64) -> ScoredWord {
        ScoredWord {
            word: Word::new(text).unwrap(),
            score,
        }
    }

    #[test]
    fn lookup_by_word() {
        let table = ScoreTable::new(vec![scored("crane", 0.25), scored("slate", 0.75)]);
        assert_eq!(table.get(&Word::new("slate").unwrap()), Some(0.75));
        assert_eq!(table.get(&Word::new("apple").unwrap()), None);
        assert!((table.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ascending_is_stable() {
        let table = ScoreTable::new(vec![
            scored("crane", 0.5),
            scored("slate", 0.1),
            scored("trace", 0.5),
            scored("apple", 0.2),
        ]);
        let sorted = table.ascending();
        let order: Vec<&str> = sorted.iter().map(|e| e.word.text()).collect();
        assert_eq!(order, ["slate", "apple", "crane", "trace"]);
    }

    #[test]
    fn iterates_in_candidate_order() {
        let table = ScoreTable::new(vec![scored("crane", 0.5), scored("slate", 0.1)]);
        let mut order = Vec::new();
        for entry in &table {
            order.push(entry.word.text());
        }
        assert_eq!(order, ["crane", "slate"]);
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::Frequency.to_string(), "frequency");
        assert_eq!(Method::Elimination.to_string(), "elimination");
    }
}
