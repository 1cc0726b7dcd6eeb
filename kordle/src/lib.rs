//! # kordle
//!
//! A Hangul word-guessing game engine built on `hangeul-core`. The target
//! is always a two-syllable word; a guess is typed as a stream of atomic
//! jamo, assembled live by the input automaton, and scored per atomic
//! jamo by a three-pass, frequency-conserving evaluator.
//!
//! Public API:
//! - [`Game`] - one round: buffer, history, hints, win/loss state
//! - [`evaluate`] - the scoring pass, usable without a session
//! - [`Grade`] / [`KeyboardHints`] - the precedence order and hint map
//! - [`words`] - the fixed word list
//! - [`keymap`] - Dubeolsik physical-keyboard mapping

pub mod grade;
pub use grade::{Grade, KeyboardHints};

pub mod evaluate;
pub use evaluate::{evaluate, AtomScore, BlockScore, ComponentScore};

pub mod words;
pub use words::{WordEntry, WORD_LIST};

pub mod game;
pub use game::{Game, GuessRecord, Rejection, Status, MAX_GUESSES};

pub mod keymap;
pub use keymap::{qwerty_to_jamo, KEYBOARD_ROWS};
