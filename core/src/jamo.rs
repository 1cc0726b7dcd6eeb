//! Static jamo composition tables.
//!
//! The three positional tables below are in Unicode syllable index order,
//! which is what makes the affine compose/decompose arithmetic in
//! [`crate::syllable`] work. The composite maps cover the 7 composite
//! vowels and the 11 trailing-consonant clusters; both directions of each
//! map are fixed data, expressed as `match` arms over ordered `(char, char)`
//! pairs rather than concatenated string keys.

use phf::phf_set;

/// The 19 leading consonants (choseong), in syllable index order.
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// The 21 vowels (jungseong), in syllable index order. Seven of these are
/// composite: ㅘ ㅙ ㅚ ㅝ ㅞ ㅟ ㅢ.
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// The 28 trailing slots (jongseong), in syllable index order. Index 0 is
/// the empty trailing; eleven of the rest are two-consonant clusters.
pub const JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

static CHOSEONG_SET: phf::Set<char> = phf_set! {
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
};

static JUNGSEONG_SET: phf::Set<char> = phf_set! {
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
};

static JONGSEONG_SET: phf::Set<char> = phf_set! {
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
};

/// Whether `c` can open a syllable block.
pub fn is_choseong(c: char) -> bool {
    CHOSEONG_SET.contains(&c)
}

/// Whether `c` is a vowel (simple or composite).
pub fn is_jungseong(c: char) -> bool {
    JUNGSEONG_SET.contains(&c)
}

/// Whether `c` can close a syllable block. The empty trailing is not a
/// character and is excluded here.
pub fn is_jongseong(c: char) -> bool {
    JONGSEONG_SET.contains(&c)
}

/// Syllable index of a leading consonant.
pub fn choseong_index(c: char) -> Option<usize> {
    CHOSEONG.iter().position(|&x| x == c)
}

/// Syllable index of a vowel.
pub fn jungseong_index(c: char) -> Option<usize> {
    JUNGSEONG.iter().position(|&x| x == c)
}

/// Syllable index of a trailing consonant (1..=27; the empty slot has no
/// character form).
pub fn jongseong_index(c: char) -> Option<usize> {
    JONGSEONG.iter().position(|&x| x == Some(c))
}

/// Merge an ordered pair of simple vowels into a composite vowel.
pub fn compose_vowel(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㅗ', 'ㅏ') => Some('ㅘ'),
        ('ㅗ', 'ㅐ') => Some('ㅙ'),
        ('ㅗ', 'ㅣ') => Some('ㅚ'),
        ('ㅜ', 'ㅓ') => Some('ㅝ'),
        ('ㅜ', 'ㅔ') => Some('ㅞ'),
        ('ㅜ', 'ㅣ') => Some('ㅟ'),
        ('ㅡ', 'ㅣ') => Some('ㅢ'),
        _ => None,
    }
}

/// Split a composite vowel back into its ordered pair.
pub fn split_vowel(vowel: char) -> Option<(char, char)> {
    match vowel {
        'ㅘ' => Some(('ㅗ', 'ㅏ')),
        'ㅙ' => Some(('ㅗ', 'ㅐ')),
        'ㅚ' => Some(('ㅗ', 'ㅣ')),
        'ㅝ' => Some(('ㅜ', 'ㅓ')),
        'ㅞ' => Some(('ㅜ', 'ㅔ')),
        'ㅟ' => Some(('ㅜ', 'ㅣ')),
        'ㅢ' => Some(('ㅡ', 'ㅣ')),
        _ => None,
    }
}

/// Merge an ordered pair of simple consonants into a trailing cluster.
pub fn compose_jongseong(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㄱ', 'ㅅ') => Some('ㄳ'),
        ('ㄴ', 'ㅈ') => Some('ㄵ'),
        ('ㄴ', 'ㅎ') => Some('ㄶ'),
        ('ㄹ', 'ㄱ') => Some('ㄺ'),
        ('ㄹ', 'ㅁ') => Some('ㄻ'),
        ('ㄹ', 'ㅂ') => Some('ㄼ'),
        ('ㄹ', 'ㅅ') => Some('ㄽ'),
        ('ㄹ', 'ㅌ') => Some('ㄾ'),
        ('ㄹ', 'ㅍ') => Some('ㄿ'),
        ('ㄹ', 'ㅎ') => Some('ㅀ'),
        ('ㅂ', 'ㅅ') => Some('ㅄ'),
        _ => None,
    }
}

/// Split a trailing cluster back into its ordered pair.
pub fn split_jongseong(jong: char) -> Option<(char, char)> {
    match jong {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHOSEONG.len(), 19);
        assert_eq!(JUNGSEONG.len(), 21);
        assert_eq!(JONGSEONG.len(), 28);
        assert_eq!(JONGSEONG[0], None);
    }

    #[test]
    fn test_role_membership() {
        assert!(is_choseong('ㄱ'));
        assert!(is_choseong('ㅎ'));
        assert!(!is_choseong('ㅏ'));

        assert!(is_jungseong('ㅏ'));
        assert!(is_jungseong('ㅢ'));
        assert!(!is_jungseong('ㄱ'));

        assert!(is_jongseong('ㄺ'));
        assert!(!is_jongseong('ㄸ')); // ㄸ ㅃ ㅉ never close a block
        assert!(!is_jongseong('ㅃ'));
        assert!(!is_jongseong('ㅉ'));
    }

    #[test]
    fn test_index_lookup() {
        assert_eq!(choseong_index('ㄱ'), Some(0));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(jungseong_index('ㅏ'), Some(0));
        assert_eq!(jungseong_index('ㅣ'), Some(20));
        assert_eq!(jongseong_index('ㄱ'), Some(1));
        assert_eq!(jongseong_index('ㅎ'), Some(27));
        assert_eq!(jongseong_index('ㄸ'), None);
    }

    #[test]
    fn test_vowel_pairs_round_trip() {
        for composite in ['ㅘ', 'ㅙ', 'ㅚ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅢ'] {
            let (a, b) = split_vowel(composite).unwrap();
            assert_eq!(compose_vowel(a, b), Some(composite));
        }
        assert_eq!(split_vowel('ㅏ'), None);
        assert_eq!(compose_vowel('ㅏ', 'ㅣ'), None);
    }

    #[test]
    fn test_jongseong_pairs_round_trip() {
        for cluster in ['ㄳ', 'ㄵ', 'ㄶ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅄ'] {
            let (a, b) = split_jongseong(cluster).unwrap();
            assert_eq!(compose_jongseong(a, b), Some(cluster));
        }
        assert_eq!(split_jongseong('ㄱ'), None);
        assert_eq!(compose_jongseong('ㄱ', 'ㄱ'), None);
    }
}
