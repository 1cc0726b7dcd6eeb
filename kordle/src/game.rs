//! Game session and state machine.
//!
//! A `Game` owns everything one round needs: the immutable target, the
//! live jamo buffer, the guess history and the keyboard-hint map. All
//! mutation happens through the four entry points (`push_jamo`,
//! `delete_last`, `submit_guess`, `new_game`), each of which fully
//! completes before the next input is accepted, so there is no concurrent
//! state to reason about.
//!
//! Nothing in here is a fatal error: invalid attempts come back as a
//! [`Rejection`] and leave the session untouched.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use hangeul_core::{assemble, is_syllable, JamoBuffer};

use crate::evaluate::{evaluate, BlockScore};
use crate::grade::KeyboardHints;
use crate::words::{self, WordEntry};

/// Guesses allowed per round.
pub const MAX_GUESSES: usize = 5;

/// Lifecycle of one round. `Won` and `Lost` are terminal until the next
/// `new_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// Why an attempt was turned away. The session is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The typed unit would assemble into a third block.
    TooManyBlocks,
    /// Submission requires exactly two assembled units.
    NotTwoBlocks,
    /// An assembled unit never combined into a full syllable block.
    IncompleteBlock,
    /// The round is over; only `new_game` is accepted.
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::TooManyBlocks => "input would exceed two syllable blocks",
            Rejection::NotTwoBlocks => "a guess must be exactly two syllable blocks",
            Rejection::IncompleteBlock => "the guess contains an incomplete syllable",
            Rejection::GameOver => "the round is over; start a new game",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Rejection {}

/// One submitted guess, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    pub blocks: [BlockScore; 2],
}

/// One round of the game.
#[derive(Debug, Clone)]
pub struct Game {
    target: [char; 2],
    meaning: &'static str,
    buffer: JamoBuffer,
    guesses: Vec<GuessRecord>,
    hints: KeyboardHints,
    status: Status,
}

fn target_blocks(word: &str) -> Option<[char; 2]> {
    let mut chars = word.chars();
    let first = chars.next()?;
    let second = chars.next()?;
    if chars.next().is_some() || !is_syllable(first) || !is_syllable(second) {
        return None;
    }
    Some([first, second])
}

impl Game {
    /// Start a round with a uniformly random word.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_entry(words::random_entry(rng))
    }

    /// Start a round with a fixed word-list entry.
    pub fn with_entry(entry: &'static WordEntry) -> Self {
        let (target, meaning) = match target_blocks(entry.word) {
            Some(target) => (target, entry.meaning),
            None => {
                let fb = words::fallback();
                (target_blocks(fb.word).unwrap_or(['사', '람']), fb.meaning)
            }
        };
        debug!(word = entry.word, "new round started");
        Self {
            target,
            meaning,
            buffer: JamoBuffer::new(),
            guesses: Vec::new(),
            hints: KeyboardHints::new(),
            status: Status::Playing,
        }
    }

    /// Discard the round and start a fresh one with a new random word.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Game::new(rng);
    }

    /// Append one typed atomic jamo to the input buffer.
    ///
    /// Rejected, with the buffer unchanged, when the unit would make the
    /// buffer assemble into more than two units (loose units count).
    pub fn push_jamo(&mut self, jamo: char) -> Result<(), Rejection> {
        if self.status != Status::Playing {
            return Err(Rejection::GameOver);
        }
        let mut attempt = self.buffer.as_slice().to_vec();
        attempt.push(jamo);
        if assemble(&attempt).len() > 2 {
            trace!(%jamo, "unit rejected: third block");
            return Err(Rejection::TooManyBlocks);
        }
        self.buffer.push(jamo);
        Ok(())
    }

    /// Remove the most recently typed unit. No-op on an empty buffer or a
    /// finished round.
    pub fn delete_last(&mut self) {
        if self.status != Status::Playing {
            return;
        }
        self.buffer.pop();
    }

    /// Drop all unsubmitted input. No-op on a finished round.
    pub fn clear_input(&mut self) {
        if self.status != Status::Playing {
            return;
        }
        self.buffer.clear();
    }

    /// Submit the assembled buffer as a guess.
    ///
    /// The attempt is rejected unless the buffer assembles to exactly two
    /// complete syllable blocks. On success the guess is evaluated and
    /// recorded, the buffer clears, and the round transitions to `Won` on
    /// block-for-block identity with the target or `Lost` on the fifth
    /// non-winning guess.
    pub fn submit_guess(&mut self) -> Result<Status, Rejection> {
        if self.status != Status::Playing {
            return Err(Rejection::GameOver);
        }
        let assembled = self.buffer.assembled();
        if assembled.len() != 2 {
            trace!(units = assembled.len(), "submission rejected: not two blocks");
            return Err(Rejection::NotTwoBlocks);
        }
        if !assembled.iter().all(|&c| is_syllable(c)) {
            trace!("submission rejected: incomplete block");
            return Err(Rejection::IncompleteBlock);
        }

        let guess = [assembled[0], assembled[1]];
        let blocks = evaluate(guess, self.target, &mut self.hints);
        self.guesses.push(GuessRecord { blocks });
        self.buffer.clear();

        if guess == self.target {
            self.status = Status::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = Status::Lost;
        }
        debug!(guesses = self.guesses.len(), status = ?self.status, "guess submitted");
        Ok(self.status)
    }

    /// The assembled preview of the unsubmitted input.
    pub fn preview(&self) -> Vec<char> {
        self.buffer.assembled()
    }

    /// Raw unsubmitted jamo, in typing order.
    pub fn raw_input(&self) -> &[char] {
        self.buffer.as_slice()
    }

    /// All recorded guesses, oldest first.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// The accumulated keyboard-hint map.
    pub fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// Current lifecycle state.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The target word as a string.
    pub fn target_word(&self) -> String {
        self.target.iter().collect()
    }

    /// The target's gloss.
    pub fn target_meaning(&self) -> &'static str {
        self.meaning
    }

    /// Guesses left before the round is lost.
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }
}
