//! Syllable block decomposition and composition.
//!
//! A precomposed Hangul syllable occupies the contiguous code range
//! U+AC00..=U+D7A3 and is an affine combination of its three positional
//! indices: `code = cho * 588 + jung * 28 + jong`. Everything here is a
//! pure function over that formula plus the tables in [`crate::jamo`].

use serde::{Deserialize, Serialize};

use crate::jamo;

/// First code point of the precomposed syllable area (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last code point of the precomposed syllable area (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const JUNGSEONG_SPAN: u32 = 21 * 28; // 588
const JONGSEONG_SPAN: u32 = 28;

/// Whether `c` is a complete precomposed syllable block.
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// The three positional components of one syllable block.
///
/// `jongseong` is `None` for an open syllable; the empty trailing slot has
/// no character form and never participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposed {
    pub choseong: char,
    pub jungseong: char,
    pub jongseong: Option<char>,
}

impl Decomposed {
    /// The components in slot order, trailing omitted when empty.
    pub fn components(&self) -> Vec<char> {
        let mut out = vec![self.choseong, self.jungseong];
        if let Some(jong) = self.jongseong {
            out.push(jong);
        }
        out
    }

    /// Every atomic jamo of the block: composite components contribute
    /// their ordered pair, simple ones themselves.
    pub fn atoms(&self) -> Vec<char> {
        self.components()
            .into_iter()
            .flat_map(|c| split_component(c))
            .collect()
    }
}

/// Decompose a syllable block into its three components.
///
/// Returns `None` for anything outside the syllable code range; callers
/// that need the original pass-through contract use [`decompose_flat`].
pub fn decompose(c: char) -> Option<Decomposed> {
    if !is_syllable(c) {
        return None;
    }
    let code = c as u32 - SYLLABLE_BASE;
    let jong_index = (code % JONGSEONG_SPAN) as usize;
    let jung_index = ((code % JUNGSEONG_SPAN) / JONGSEONG_SPAN) as usize;
    let cho_index = (code / JUNGSEONG_SPAN) as usize;

    Some(Decomposed {
        choseong: jamo::CHOSEONG[cho_index],
        jungseong: jamo::JUNGSEONG[jung_index],
        jongseong: jamo::JONGSEONG[jong_index],
    })
}

/// Decompose a syllable into its component list, passing any non-syllable
/// input through as a single loose unit.
pub fn decompose_flat(c: char) -> Vec<char> {
    match decompose(c) {
        Some(d) => d.components(),
        None => vec![c],
    }
}

/// Compose a syllable block from positional indices. Total over valid
/// index ranges (`cho < 19`, `jung < 21`, `jong < 28`).
pub fn compose(cho_index: usize, jung_index: usize, jong_index: usize) -> char {
    let code = SYLLABLE_BASE
        + cho_index as u32 * JUNGSEONG_SPAN
        + jung_index as u32 * JONGSEONG_SPAN
        + jong_index as u32;
    // Valid index ranges always land inside U+AC00..=U+D7A3.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Split a component into its atomic jamo: a composite vowel or trailing
/// cluster yields its ordered pair, anything else yields itself.
pub fn split_component(c: char) -> Vec<char> {
    if let Some((a, b)) = jamo::split_vowel(c) {
        vec![a, b]
    } else if let Some((a, b)) = jamo::split_jongseong(c) {
        vec![a, b]
    } else {
        vec![c]
    }
}

/// Visual layout of a vowel within its block. Used by presentation only;
/// the matching logic never looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VowelLayout {
    /// Vowel drawn to the right of the leading consonant (ㅏ, ㅣ, ...).
    Vertical,
    /// Vowel drawn below the leading consonant (ㅗ, ㅡ, ...).
    Horizontal,
    /// Composite vowel wrapping both positions (ㅘ, ㅢ, ...).
    Mixed,
}

/// Classify how a vowel is laid out inside a block.
pub fn vowel_layout(vowel: char) -> VowelLayout {
    if jamo::split_vowel(vowel).is_some() {
        VowelLayout::Mixed
    } else if matches!(vowel, 'ㅗ' | 'ㅛ' | 'ㅜ' | 'ㅠ' | 'ㅡ') {
        VowelLayout::Horizontal
    } else {
        VowelLayout::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(c: char) -> Vec<char> {
        decompose_flat(c)
    }

    #[test]
    fn test_decompose_simple() {
        assert_eq!(parts('가'), vec!['ㄱ', 'ㅏ']);
        assert_eq!(parts('각'), vec!['ㄱ', 'ㅏ', 'ㄱ']);
        assert_eq!(parts('한'), vec!['ㅎ', 'ㅏ', 'ㄴ']);
    }

    #[test]
    fn test_decompose_composite_vowels() {
        assert_eq!(parts('과'), vec!['ㄱ', 'ㅘ']);
        assert_eq!(parts('왜'), vec!['ㅇ', 'ㅙ']);
        assert_eq!(parts('괴'), vec!['ㄱ', 'ㅚ']);
        assert_eq!(parts('원'), vec!['ㅇ', 'ㅝ', 'ㄴ']);
        assert_eq!(parts('웨'), vec!['ㅇ', 'ㅞ']);
        assert_eq!(parts('위'), vec!['ㅇ', 'ㅟ']);
        assert_eq!(parts('의'), vec!['ㅇ', 'ㅢ']);
    }

    #[test]
    fn test_decompose_trailing_clusters() {
        assert_eq!(parts('몫'), vec!['ㅁ', 'ㅗ', 'ㄳ']);
        assert_eq!(parts('앉'), vec!['ㅇ', 'ㅏ', 'ㄵ']);
        assert_eq!(parts('않'), vec!['ㅇ', 'ㅏ', 'ㄶ']);
        assert_eq!(parts('닭'), vec!['ㄷ', 'ㅏ', 'ㄺ']);
        assert_eq!(parts('삶'), vec!['ㅅ', 'ㅏ', 'ㄻ']);
        assert_eq!(parts('밟'), vec!['ㅂ', 'ㅏ', 'ㄼ']);
        assert_eq!(parts('곬'), vec!['ㄱ', 'ㅗ', 'ㄽ']);
        assert_eq!(parts('핥'), vec!['ㅎ', 'ㅏ', 'ㄾ']);
        assert_eq!(parts('읊'), vec!['ㅇ', 'ㅡ', 'ㄿ']);
        assert_eq!(parts('잃'), vec!['ㅇ', 'ㅣ', 'ㅀ']);
        assert_eq!(parts('없'), vec!['ㅇ', 'ㅓ', 'ㅄ']);
    }

    #[test]
    fn test_non_syllable_passthrough() {
        assert_eq!(parts('A'), vec!['A']);
        assert_eq!(parts('!'), vec!['!']);
        assert_eq!(parts('ㄱ'), vec!['ㄱ']);
        assert!(decompose('A').is_none());
    }

    #[test]
    fn test_compose_decompose_round_trip_full_range() {
        for code in SYLLABLE_BASE..=SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let d = decompose(c).unwrap();
            let cho = jamo::choseong_index(d.choseong).unwrap();
            let jung = jamo::jungseong_index(d.jungseong).unwrap();
            let jong = d.jongseong.map(|j| jamo::jongseong_index(j).unwrap()).unwrap_or(0);
            assert_eq!(compose(cho, jung, jong), c);
        }
    }

    #[test]
    fn test_atoms() {
        assert_eq!(decompose('닭').unwrap().atoms(), vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);
        assert_eq!(decompose('의').unwrap().atoms(), vec!['ㅇ', 'ㅡ', 'ㅣ']);
        assert_eq!(decompose('가').unwrap().atoms(), vec!['ㄱ', 'ㅏ']);
    }

    #[test]
    fn test_vowel_layout() {
        assert_eq!(vowel_layout('ㅏ'), VowelLayout::Vertical);
        assert_eq!(vowel_layout('ㅣ'), VowelLayout::Vertical);
        assert_eq!(vowel_layout('ㅗ'), VowelLayout::Horizontal);
        assert_eq!(vowel_layout('ㅡ'), VowelLayout::Horizontal);
        assert_eq!(vowel_layout('ㅘ'), VowelLayout::Mixed);
        assert_eq!(vowel_layout('ㅢ'), VowelLayout::Mixed);
    }
}
