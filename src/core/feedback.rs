//! Per-position guess feedback
//!
//! Scores a guess against the target and folds what was learned into the
//! session's [`CharKnowledge`]. Scoring runs in three passes whose order is
//! load-bearing: an unseen-drain pass that provisionally marks never-guessed
//! characters absent, an exact-match pass that can immediately upgrade them,
//! and a wrong-position pass over everything not already exact.

use super::knowledge::{CharClass, CharKnowledge};
use std::fmt;

/// Feedback status of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharStatus {
    /// Character does not appear in the target
    Absent,
    /// Character appears in the target at a different position
    WrongPosition,
    /// Character is correct at this position
    Exact,
}

impl fmt::Display for CharStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Absent => "absent",
            Self::WrongPosition => "wrong position",
            Self::Exact => "exact",
        };
        write!(f, "{label}")
    }
}

/// Score a guess against the target and update character knowledge
///
/// The returned vector has one status per target position. When the guess
/// and target lengths differ only the overlapping prefix is scored; positions
/// beyond it stay `Absent` and excess guess characters are ignored, so a
/// mis-sized guess degrades gracefully instead of indexing out of range.
///
/// Repeated guess characters are each matched independently against the
/// target — there is no occurrence budget. See the pinned test below before
/// changing this.
///
/// # Examples
/// ```
/// use numberle::core::{score, CharKnowledge, CharStatus};
///
/// let mut knowledge = CharKnowledge::new();
/// let statuses = score("2*3-6=0", "5+15=20", &mut knowledge);
/// assert_eq!(statuses[6], CharStatus::Exact); // '0' in place
/// assert_eq!(statuses[4], CharStatus::WrongPosition); // '=' misplaced
/// ```
#[must_use]
pub fn score(target: &str, guess: &str, knowledge: &mut CharKnowledge) -> Vec<CharStatus> {
    let target: Vec<char> = target.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    let overlap = target.len().min(guess.len());

    let mut statuses = vec![CharStatus::Absent; target.len()];

    // Pass 1: drain never-guessed characters into Absent. Runs before the
    // exact pass so a character guessed for the first time lands somewhere;
    // later passes upgrade it if it is actually in the target.
    for &ch in &guess[..overlap] {
        if knowledge.class_of(ch) == CharClass::Unseen {
            knowledge.upgrade(ch, CharClass::Absent);
        }
    }

    // Pass 2: exact position matches
    for i in 0..overlap {
        if guess[i] == target[i] {
            statuses[i] = CharStatus::Exact;
            knowledge.upgrade(guess[i], CharClass::Exact);
        }
    }

    // Pass 3: characters present elsewhere in the target. Each guess
    // position scans the whole target, so duplicates in the guess may all
    // claim the same target occurrence.
    for i in 0..overlap {
        if statuses[i] != CharStatus::Exact && target.contains(&guess[i]) {
            statuses[i] = CharStatus::WrongPosition;
            knowledge.upgrade(guess[i], CharClass::WrongPosition);
        }
    }

    statuses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses_of(target: &str, guess: &str) -> Vec<CharStatus> {
        let mut knowledge = CharKnowledge::new();
        score(target, guess, &mut knowledge)
    }

    #[test]
    fn perfect_guess_is_all_exact() {
        let statuses = statuses_of("12+3=15", "12+3=15");
        assert_eq!(statuses, vec![CharStatus::Exact; 7]);
    }

    #[test]
    fn disjoint_guess_is_mostly_absent() {
        // Target has no '7', '8', '9' and no '/'; the misplaced '=' is the
        // only character the guess shares with it
        let statuses = statuses_of("12+3=15", "7/8=9/8");
        assert_eq!(
            statuses,
            vec![
                CharStatus::Absent,        // 7
                CharStatus::Absent,        // /
                CharStatus::Absent,        // 8
                CharStatus::WrongPosition, // = (target has one, elsewhere)
                CharStatus::Absent,        // 9
                CharStatus::Absent,        // /
                CharStatus::Absent,        // 8
            ]
        );
    }

    #[test]
    fn worked_example_status_vector() {
        let statuses = statuses_of("2*3-6=0", "5+15=20");
        assert_eq!(
            statuses,
            vec![
                CharStatus::Absent,        // 5
                CharStatus::Absent,        // +
                CharStatus::Absent,        // 1
                CharStatus::Absent,        // 5
                CharStatus::WrongPosition, // =
                CharStatus::WrongPosition, // 2
                CharStatus::Exact,         // 0
            ]
        );
    }

    #[test]
    fn knowledge_after_one_guess() {
        let mut knowledge = CharKnowledge::new();
        score("12+3=15", "11+5=16", &mut knowledge);

        assert_eq!(knowledge.class_of('6'), CharClass::Absent);
        assert_eq!(knowledge.class_of('1'), CharClass::Exact);
        assert_eq!(knowledge.class_of('5'), CharClass::WrongPosition);
        assert_eq!(knowledge.class_of('2'), CharClass::Unseen);
        assert_eq!(knowledge.class_of('+'), CharClass::Exact);
        assert_eq!(knowledge.class_of('='), CharClass::Exact);
    }

    #[test]
    fn knowledge_never_downgrades_across_guesses() {
        let mut knowledge = CharKnowledge::new();
        let target = "12+3=15";

        score(target, "11+5=16", &mut knowledge);
        assert_eq!(knowledge.class_of('1'), CharClass::Exact);
        assert_eq!(knowledge.class_of('5'), CharClass::WrongPosition);

        // '1' absent from this guess entirely, '5' at a still-wrong spot
        score(target, "20-6=14", &mut knowledge);
        assert_eq!(knowledge.class_of('1'), CharClass::Exact);
        assert_eq!(knowledge.class_of('5'), CharClass::WrongPosition);

        // '5' finally lands on its true position and upgrades
        score(target, "20-5=15", &mut knowledge);
        assert_eq!(knowledge.class_of('5'), CharClass::Exact);
    }

    #[test]
    fn first_time_exact_character_skips_absent() {
        let mut knowledge = CharKnowledge::new();
        // '1' is unseen, gets provisionally drained in pass 1, then the
        // exact pass must win
        score("12+3=15", "1000000", &mut knowledge);
        assert_eq!(knowledge.class_of('1'), CharClass::Exact);
    }

    #[test]
    fn shorter_guess_scores_prefix_only() {
        let mut knowledge = CharKnowledge::new();
        let statuses = score("12+3=15", "12+", &mut knowledge);

        assert_eq!(statuses.len(), 7);
        assert_eq!(statuses[0], CharStatus::Exact);
        assert_eq!(statuses[1], CharStatus::Exact);
        assert_eq!(statuses[2], CharStatus::Exact);
        assert_eq!(&statuses[3..], &[CharStatus::Absent; 4]);
    }

    #[test]
    fn longer_guess_ignores_excess() {
        let mut knowledge = CharKnowledge::new();
        let statuses = score("12+3=15", "123456789", &mut knowledge);

        assert_eq!(statuses.len(), 7);
        // Excess characters never touch knowledge
        assert_eq!(knowledge.class_of('8'), CharClass::Unseen);
        assert_eq!(knowledge.class_of('9'), CharClass::Unseen);
        // Within the overlap: '2' hit its spot once shifted? No — position 1
        // holds '2' in both strings, so it is exact; '4' is nowhere in the
        // target; '3' appears elsewhere.
        assert_eq!(knowledge.class_of('2'), CharClass::Exact);
        assert_eq!(knowledge.class_of('3'), CharClass::WrongPosition);
        assert_eq!(knowledge.class_of('4'), CharClass::Absent);
    }

    #[test]
    fn empty_guess_is_harmless() {
        let mut knowledge = CharKnowledge::new();
        let statuses = score("12+3=15", "", &mut knowledge);
        assert_eq!(statuses, vec![CharStatus::Absent; 7]);
        assert_eq!(knowledge.chars_in(CharClass::Unseen).len(), 15);
    }

    // Pinned behavior: a repeated guess character may match the same target
    // occurrence more than once. There is deliberately no occurrence budget;
    // the rule is more generous than Wordle's consume-the-occurrence scoring.
    #[test]
    fn duplicate_guess_characters_share_one_occurrence() {
        let statuses = statuses_of("2*3-6=0", "0000000");
        assert_eq!(statuses[6], CharStatus::Exact);
        for status in &statuses[..6] {
            assert_eq!(*status, CharStatus::WrongPosition);
        }
    }
}
