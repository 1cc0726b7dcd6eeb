//! Dubeolsik physical-keyboard mapping.
//!
//! Maps a Latin key (standard two-set layout) to the jamo it types;
//! shifted keys give the doubled consonants and the ㅒ/ㅖ vowels. Keys
//! outside the layout are simply unmapped.

use phf::phf_map;

static QWERTY_TO_JAMO: phf::Map<char, char> = phf_map! {
    'q' => 'ㅂ', 'Q' => 'ㅃ',
    'w' => 'ㅈ', 'W' => 'ㅉ',
    'e' => 'ㄷ', 'E' => 'ㄸ',
    'r' => 'ㄱ', 'R' => 'ㄲ',
    't' => 'ㅅ', 'T' => 'ㅆ',
    'y' => 'ㅛ',
    'u' => 'ㅕ',
    'i' => 'ㅑ',
    'o' => 'ㅐ', 'O' => 'ㅒ',
    'p' => 'ㅔ', 'P' => 'ㅖ',
    'a' => 'ㅁ',
    's' => 'ㄴ',
    'd' => 'ㅇ',
    'f' => 'ㄹ',
    'g' => 'ㅎ',
    'h' => 'ㅗ',
    'j' => 'ㅓ',
    'k' => 'ㅏ',
    'l' => 'ㅣ',
    'z' => 'ㅋ',
    'x' => 'ㅌ',
    'c' => 'ㅊ',
    'v' => 'ㅍ',
    'b' => 'ㅠ',
    'n' => 'ㅜ',
    'm' => 'ㅡ',
};

/// The on-screen keyboard rows, in display order.
pub const KEYBOARD_ROWS: [&[char]; 3] = [
    &['ㅂ', 'ㅈ', 'ㄷ', 'ㄱ', 'ㅅ', 'ㅛ', 'ㅕ', 'ㅑ', 'ㅐ', 'ㅔ'],
    &['ㅁ', 'ㄴ', 'ㅇ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅓ', 'ㅏ', 'ㅣ'],
    &['ㅋ', 'ㅌ', 'ㅊ', 'ㅍ', 'ㅠ', 'ㅜ', 'ㅡ'],
];

/// Map a physical key to the jamo it types, if any.
pub fn qwerty_to_jamo(key: char) -> Option<char> {
    QWERTY_TO_JAMO.get(&key).copied()
}
