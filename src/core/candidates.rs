//! Ordered, duplicate-free set of candidate words

use super::Word;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// The words still consistent with every piece of feedback seen so far
///
/// Built once from the dictionary and afterwards only replaced by smaller
/// sets. Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Arc<[Word]>,
}

impl CandidateSet {
    /// Build a set from dictionary words, keeping the first occurrence of duplicates
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{CandidateSet, Word};
    ///
    /// let words = ["apple", "angle", "apple"].map(|w| Word::new(w).unwrap());
    /// let set = CandidateSet::from_words(words);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| seen.insert(*w)).collect();
        Self {
            words: words.into(),
        }
    }

    /// Wrap words already known to be a duplicate-free subset of another set
    pub(crate) fn from_subset(words: Vec<Word>) -> Self {
        Self {
            words: words.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
