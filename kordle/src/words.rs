//! The fixed word list.
//!
//! Every entry is exactly two syllable blocks; the tests enforce this so a
//! bad entry can never reach the game. Entry 0 doubles as the fallback
//! target when selection is impossible.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// One playable word with its English gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: &'static str,
    pub meaning: &'static str,
}

/// All playable words.
pub static WORD_LIST: &[WordEntry] = &[
    WordEntry { word: "사람", meaning: "Person" },
    WordEntry { word: "시간", meaning: "Time" },
    WordEntry { word: "친구", meaning: "Friend" },
    WordEntry { word: "가족", meaning: "Family" },
    WordEntry { word: "학교", meaning: "School" },
    WordEntry { word: "오늘", meaning: "Today" },
    WordEntry { word: "사랑", meaning: "Love" },
    WordEntry { word: "마음", meaning: "Mind / Heart" },
    WordEntry { word: "이름", meaning: "Name" },
    WordEntry { word: "나라", meaning: "Country" },
    WordEntry { word: "사과", meaning: "Apple" },
    WordEntry { word: "하늘", meaning: "Sky" },
    WordEntry { word: "바다", meaning: "Sea" },
    WordEntry { word: "노래", meaning: "Song" },
    WordEntry { word: "아침", meaning: "Morning" },
    WordEntry { word: "약속", meaning: "Promise" },
    WordEntry { word: "과일", meaning: "Fruit" },
    WordEntry { word: "의자", meaning: "Chair" },
    WordEntry { word: "회사", meaning: "Company" },
    WordEntry { word: "취미", meaning: "Hobby" },
    WordEntry { word: "우유", meaning: "Milk" },
];

/// Entry used when selection is impossible.
pub fn fallback() -> &'static WordEntry {
    &WORD_LIST[0]
}

/// Pick one entry uniformly at random.
pub fn random_entry<R: Rng + ?Sized>(rng: &mut R) -> &'static WordEntry {
    WORD_LIST.choose(rng).unwrap_or_else(fallback)
}

/// Look an entry up by its word.
pub fn find(word: &str) -> Option<&'static WordEntry> {
    WORD_LIST.iter().find(|e| e.word == word)
}
