//! Match grades and the keyboard-hint map.
//!
//! `Grade` is the single total order used everywhere precedence matters:
//! the evaluator's rollups, the keyboard-hint fold and the display layer
//! all compare through the derived `Ord` instead of ad-hoc priority maps.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Classification of one matched unit, ordered by precedence.
///
/// The derived `Ord` follows declaration order:
/// `None < Absent < MisplacedSyllable < Present < Correct`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grade {
    /// Not evaluated yet; only used for cells that were never submitted.
    #[default]
    None,
    /// Not in the target word at all.
    Absent,
    /// In the target word, but not in this syllable block.
    MisplacedSyllable,
    /// In this syllable block, at a different position.
    Present,
    /// Exactly right.
    Correct,
}

/// Best grade ever observed per atomic jamo, across all submitted guesses.
///
/// The map only improves: [`KeyboardHints::raise`] ignores anything that
/// does not strictly exceed the stored grade. One instance lives on the
/// game session, created on `new_game` and cleared only by the next reset.
#[derive(Debug, Clone, Default)]
pub struct KeyboardHints {
    map: AHashMap<char, Grade>,
}

impl KeyboardHints {
    /// Create an empty hint map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored grade for a jamo, `Grade::None` when never seen.
    pub fn get(&self, jamo: char) -> Grade {
        self.map.get(&jamo).copied().unwrap_or(Grade::None)
    }

    /// Raise the stored grade for `jamo`, keeping the old one unless the
    /// new grade strictly exceeds it.
    pub fn raise(&mut self, jamo: char, grade: Grade) {
        if grade > self.get(jamo) {
            self.map.insert(jamo, grade);
        }
    }

    /// Forget everything (game reset only).
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate over all jamo with a recorded grade.
    pub fn iter(&self) -> impl Iterator<Item = (char, Grade)> + '_ {
        self.map.iter().map(|(&j, &g)| (j, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_precedence_order() {
        assert!(Grade::None < Grade::Absent);
        assert!(Grade::Absent < Grade::MisplacedSyllable);
        assert!(Grade::MisplacedSyllable < Grade::Present);
        assert!(Grade::Present < Grade::Correct);
    }

    #[test]
    fn test_hints_never_regress() {
        let mut hints = KeyboardHints::new();
        assert_eq!(hints.get('ㄱ'), Grade::None);

        hints.raise('ㄱ', Grade::Present);
        assert_eq!(hints.get('ㄱ'), Grade::Present);

        // Equal or lower grades are ignored.
        hints.raise('ㄱ', Grade::Present);
        hints.raise('ㄱ', Grade::Absent);
        hints.raise('ㄱ', Grade::MisplacedSyllable);
        assert_eq!(hints.get('ㄱ'), Grade::Present);

        hints.raise('ㄱ', Grade::Correct);
        assert_eq!(hints.get('ㄱ'), Grade::Correct);
    }

    #[test]
    fn test_clear() {
        let mut hints = KeyboardHints::new();
        hints.raise('ㅏ', Grade::Correct);
        hints.clear();
        assert_eq!(hints.get('ㅏ'), Grade::None);
    }
}
