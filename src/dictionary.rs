use crate::{MAX_WORD_LEN, MIN_WORD_LEN};
use std::collections::{BTreeSet, HashSet};

/// A membership oracle for the words players may form. Lookups are made with
/// uppercase words.
///
/// # See Also
///
/// * [RuleEngine](crate::RuleEngine)
/// * [WordList]
pub trait Dictionary {
    /// Whether `word`, given in uppercase, is an accepted word.
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl Dictionary for HashSet<String> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// An in-memory [dictionary](Dictionary) of normalized words.
///
/// Entries are trimmed and uppercased. Entries which are not purely ASCII letters, or
/// whose length is outside [MIN_WORD_LEN] to [MAX_WORD_LEN], can never be formed on the
/// board and are dropped.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// The normalized form of `entry`, or [None] if it can never be formed on the board.
    pub fn normalize(entry: &str) -> Option<String> {
        let entry = entry.trim();
        let is_formable = (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&entry.len())
            && entry.chars().all(|char| char.is_ascii_alphabetic());
        is_formable.then(|| entry.to_ascii_uppercase())
    }

    /// Adds `entry` after normalizing it.
    ///
    /// # Returns
    ///
    /// Whether `entry` was kept and not already present.
    pub fn insert(&mut self, entry: &str) -> bool {
        WordList::normalize(entry).map_or(false, |word| self.words.insert(word))
    }

    /// The number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were kept.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut word_list = WordList::default();
        for entry in iter {
            word_list.insert(entry.as_ref());
        }
        word_list
    }
}

impl<S: AsRef<str>> Extend<S> for WordList {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry.as_ref());
        }
    }
}
