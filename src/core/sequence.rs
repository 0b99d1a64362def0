//! Fixed-length character sequence representation
//!
//! A Sequence is one candidate word: an immutable, ordered run of characters
//! with positional and membership queries used by the classifier.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A character paired with its position inside a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexedChar {
    pub position: usize,
    pub character: char,
}

impl IndexedChar {
    #[inline]
    #[must_use]
    pub const fn new(position: usize, character: char) -> Self {
        Self {
            position,
            character,
        }
    }
}

impl fmt::Display for IndexedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.position, self.character)
    }
}

/// Error type for sequences that cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A character slot was absent (a `None` element or a NUL character)
    #[error("sequence is missing a character at position {0}")]
    MissingCharacter(usize),
}

/// An immutable fixed-length sequence of characters
///
/// Equality, hashing and ordering all use the full ordered content, so two
/// sequences built from the same text are interchangeable. Ordering is
/// lexicographic by character, which is what gives corpus iteration and
/// tie-breaking a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence {
    chars: Vec<char>,
}

impl Sequence {
    /// Create a sequence from text
    ///
    /// # Errors
    /// Returns `SequenceError::MissingCharacter` if the text contains a NUL
    /// character, which stands in for an absent slot.
    ///
    /// # Examples
    /// ```
    /// use matchle::core::Sequence;
    ///
    /// let seq = Sequence::new("apple").unwrap();
    /// assert_eq!(seq.len(), 5);
    /// assert_eq!(seq.get(1), Some('p'));
    ///
    /// assert!(Sequence::new("ap\0le").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        Self::from_slots(text.chars().map(|c| (c != '\0').then_some(c)))
    }

    /// Create a sequence from possibly-absent character slots
    ///
    /// # Errors
    /// Returns `SequenceError::MissingCharacter` with the first absent position.
    pub fn from_slots<I>(slots: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = Option<char>>,
    {
        let chars = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| slot.ok_or(SequenceError::MissingCharacter(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { chars })
    }

    /// Number of characters in the sequence
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a position, or `None` if out of range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Get the characters as a slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The sequence rendered back to a `String`
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Check whether this sequence holds `ic.character` at `ic.position`
    ///
    /// Positions outside the sequence never match.
    #[inline]
    #[must_use]
    pub fn matches(&self, ic: IndexedChar) -> bool {
        self.get(ic.position) == Some(ic.character)
    }

    /// Check whether a character occurs anywhere in the sequence
    #[inline]
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.chars.contains(&character)
    }

    /// Position-independent membership for an indexed character
    #[inline]
    #[must_use]
    pub fn contains_indexed(&self, ic: IndexedChar) -> bool {
        self.contains(ic.character)
    }

    /// Check whether the character occurs somewhere other than its own position
    #[inline]
    #[must_use]
    pub fn contains_elsewhere(&self, ic: IndexedChar) -> bool {
        self.contains_indexed(ic) && !self.matches(ic)
    }

    /// Equality that ignores letter case
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .chars
                .iter()
                .zip(&other.chars)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
    }

    /// Iterate over `(position, character)` pairs
    ///
    /// The iterator borrows the sequence and can be recreated any number of
    /// times; it is also `Clone`, so a partially consumed traversal can be
    /// forked.
    pub fn indexed(&self) -> impl Iterator<Item = IndexedChar> + Clone + '_ {
        self.chars
            .iter()
            .enumerate()
            .map(|(position, &character)| IndexedChar::new(position, character))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case() {
        let lower = Sequence::new("apple").unwrap();
        assert!(lower.eq_ignore_case(&Sequence::new("APPLE").unwrap()));
        assert!(lower.eq_ignore_case(&Sequence::new("aPpLe").unwrap()));
        assert!(!lower.eq_ignore_case(&Sequence::new("apply").unwrap()));
        assert!(!lower.eq_ignore_case(&Sequence::new("apples").unwrap()));
    }

    #[test]
    fn sequence_creation_valid() {
        let seq = Sequence::new("apple").unwrap();
        assert_eq!(seq.text(), "apple");
        assert_eq!(seq.chars(), &['a', 'p', 'p', 'l', 'e']);
        assert_eq!(seq.len(), 5);
        assert!(!seq.is_empty());
    }

    #[test]
    fn sequence_empty_is_allowed() {
        let seq = Sequence::new("").unwrap();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.indexed().count(), 0);
    }

    #[test]
    fn sequence_rejects_absent_characters() {
        assert_eq!(
            Sequence::new("ab\0d"),
            Err(SequenceError::MissingCharacter(2))
        );
        assert_eq!(
            Sequence::from_slots([Some('a'), None, Some('c'), None]),
            Err(SequenceError::MissingCharacter(1))
        );
    }

    #[test]
    fn sequence_from_slots_valid() {
        let seq = Sequence::from_slots("test".chars().map(Some)).unwrap();
        assert_eq!(seq, Sequence::new("test").unwrap());
    }

    #[test]
    fn sequence_get() {
        let seq = Sequence::new("hello").unwrap();
        assert_eq!(seq.get(0), Some('h'));
        assert_eq!(seq.get(4), Some('o'));
        assert_eq!(seq.get(5), None);
    }

    #[test]
    fn sequence_matches() {
        let seq = Sequence::new("hello").unwrap();
        assert!(seq.matches(IndexedChar::new(0, 'h')));
        assert!(seq.matches(IndexedChar::new(3, 'l')));
        assert!(!seq.matches(IndexedChar::new(0, 'e')));
        assert!(!seq.matches(IndexedChar::new(9, 'h')));
    }

    #[test]
    fn sequence_contains() {
        let seq = Sequence::new("hello").unwrap();
        assert!(seq.contains('h'));
        assert!(seq.contains('l'));
        assert!(!seq.contains('z'));
        assert!(seq.contains_indexed(IndexedChar::new(4, 'h')));
    }

    #[test]
    fn sequence_contains_elsewhere() {
        let seq = Sequence::new("hello").unwrap();
        // 'l' at 2 is exact, not elsewhere
        assert!(!seq.contains_elsewhere(IndexedChar::new(2, 'l')));
        // 'h' exists but not at 1
        assert!(seq.contains_elsewhere(IndexedChar::new(1, 'h')));
        assert!(!seq.contains_elsewhere(IndexedChar::new(1, 'z')));
    }

    #[test]
    fn sequence_indexed_is_restartable() {
        let seq = Sequence::new("abc").unwrap();
        let first: Vec<_> = seq.indexed().collect();
        let second: Vec<_> = seq.indexed().collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                IndexedChar::new(0, 'a'),
                IndexedChar::new(1, 'b'),
                IndexedChar::new(2, 'c'),
            ]
        );
    }

    #[test]
    fn sequence_equality_and_order() {
        let a = Sequence::new("apple").unwrap();
        let b: Sequence = "apple".parse().unwrap();
        let c = Sequence::new("berry").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn sequence_is_case_sensitive() {
        assert_ne!(Sequence::new("Apple").unwrap(), Sequence::new("apple").unwrap());
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", Sequence::new("peach").unwrap()), "peach");
        assert_eq!(format!("{}", IndexedChar::new(0, 'a')), "0-a");
    }
}
