//! Session-scoped character knowledge
//!
//! Tracks what the player has learned about every character of the fixed
//! alphabet across a game session. Each character is in exactly one of four
//! classes at any time, and a class change is always an upgrade:
//! `Unseen < Absent < WrongPosition < Exact`. Knowledge is owned by the game
//! session and reset when a new game starts.

use super::equation::ALPHABET;
use rustc_hash::FxHashMap;
use std::fmt;

/// Knowledge class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// No guess has touched this character yet
    Unseen,
    /// Guessed, not found at any still-unresolved position
    Absent,
    /// Seen in the target but never yet at a matching position
    WrongPosition,
    /// Confirmed correct at some position in some guess
    Exact,
}

impl CharClass {
    /// Position in the upgrade order; classes only ever move to a higher rank
    const fn rank(self) -> u8 {
        match self {
            Self::Unseen => 0,
            Self::Absent => 1,
            Self::WrongPosition => 2,
            Self::Exact => 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unseen => "unseen",
            Self::Absent => "absent",
            Self::WrongPosition => "wrong position",
            Self::Exact => "exact",
        };
        write!(f, "{label}")
    }
}

/// Per-character knowledge over the fixed alphabet
///
/// Every alphabet character starts `Unseen`. Upgrades are monotone: once a
/// character reaches `Exact` it stays there, and `WrongPosition` can never
/// fall back to `Absent`. Characters outside the alphabet are ignored.
#[derive(Debug, Clone)]
pub struct CharKnowledge {
    classes: FxHashMap<char, CharClass>,
}

impl CharKnowledge {
    /// Create a fresh table with every alphabet character `Unseen`
    #[must_use]
    pub fn new() -> Self {
        let classes = ALPHABET.chars().map(|c| (c, CharClass::Unseen)).collect();
        Self { classes }
    }

    /// Reset every character to `Unseen` (new game)
    pub fn reset(&mut self) {
        for class in self.classes.values_mut() {
            *class = CharClass::Unseen;
        }
    }

    /// Current class of a character
    ///
    /// Characters outside the alphabet report `Unseen`.
    #[must_use]
    pub fn class_of(&self, ch: char) -> CharClass {
        self.classes.get(&ch).copied().unwrap_or(CharClass::Unseen)
    }

    /// Upgrade a character's class
    ///
    /// Applies only when `class` ranks strictly above the current class, so
    /// callers can propose any observation and the table keeps the strongest
    /// one. Characters outside the alphabet are ignored.
    pub fn upgrade(&mut self, ch: char, class: CharClass) {
        if let Some(current) = self.classes.get_mut(&ch)
            && class.rank() > current.rank()
        {
            *current = class;
        }
    }

    /// All characters currently in `class`, in alphabet order
    #[must_use]
    pub fn chars_in(&self, class: CharClass) -> Vec<char> {
        ALPHABET
            .chars()
            .filter(|c| self.class_of(*c) == class)
            .collect()
    }
}

impl Default for CharKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_unseen() {
        let knowledge = CharKnowledge::new();
        for ch in ALPHABET.chars() {
            assert_eq!(knowledge.class_of(ch), CharClass::Unseen);
        }
        assert_eq!(knowledge.chars_in(CharClass::Unseen).len(), ALPHABET.len());
    }

    #[test]
    fn upgrade_moves_forward() {
        let mut knowledge = CharKnowledge::new();
        knowledge.upgrade('5', CharClass::Absent);
        assert_eq!(knowledge.class_of('5'), CharClass::Absent);

        knowledge.upgrade('5', CharClass::WrongPosition);
        assert_eq!(knowledge.class_of('5'), CharClass::WrongPosition);

        knowledge.upgrade('5', CharClass::Exact);
        assert_eq!(knowledge.class_of('5'), CharClass::Exact);
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut knowledge = CharKnowledge::new();
        knowledge.upgrade('+', CharClass::Exact);

        knowledge.upgrade('+', CharClass::WrongPosition);
        knowledge.upgrade('+', CharClass::Absent);
        knowledge.upgrade('+', CharClass::Unseen);
        assert_eq!(knowledge.class_of('+'), CharClass::Exact);

        knowledge.upgrade('7', CharClass::WrongPosition);
        knowledge.upgrade('7', CharClass::Absent);
        assert_eq!(knowledge.class_of('7'), CharClass::WrongPosition);
    }

    #[test]
    fn classes_partition_the_alphabet() {
        let mut knowledge = CharKnowledge::new();
        knowledge.upgrade('1', CharClass::Exact);
        knowledge.upgrade('2', CharClass::WrongPosition);
        knowledge.upgrade('3', CharClass::Absent);

        let total = knowledge.chars_in(CharClass::Unseen).len()
            + knowledge.chars_in(CharClass::Absent).len()
            + knowledge.chars_in(CharClass::WrongPosition).len()
            + knowledge.chars_in(CharClass::Exact).len();
        assert_eq!(total, ALPHABET.len());
    }

    #[test]
    fn foreign_characters_are_ignored() {
        let mut knowledge = CharKnowledge::new();
        knowledge.upgrade('a', CharClass::Exact);
        assert_eq!(knowledge.class_of('a'), CharClass::Unseen);
        assert!(!knowledge.chars_in(CharClass::Exact).contains(&'a'));
    }

    #[test]
    fn reset_clears_everything() {
        let mut knowledge = CharKnowledge::new();
        knowledge.upgrade('9', CharClass::Exact);
        knowledge.upgrade('/', CharClass::Absent);

        knowledge.reset();
        assert_eq!(knowledge.class_of('9'), CharClass::Unseen);
        assert_eq!(knowledge.class_of('/'), CharClass::Unseen);
    }

    #[test]
    fn chars_in_is_alphabet_ordered() {
        let mut knowledge = CharKnowledge::new();
        knowledge.upgrade('9', CharClass::Absent);
        knowledge.upgrade('0', CharClass::Absent);
        knowledge.upgrade('*', CharClass::Absent);

        assert_eq!(knowledge.chars_in(CharClass::Absent), vec!['0', '9', '*']);
    }
}
