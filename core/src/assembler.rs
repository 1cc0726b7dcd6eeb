//! Jamo input automaton.
//!
//! [`assemble`] turns an ordered stream of typed atomic jamo into syllable
//! blocks exactly the way a Dubeolsik input method does: one left-to-right
//! scan with greedy maximal munch, one unit of vowel lookahead and two
//! units of trailing lookahead. Units that cannot open or complete a block
//! pass through as loose units, so the function is total.

use tracing::trace;

use crate::jamo;
use crate::syllable;

/// Assemble a jamo stream into syllable blocks and loose units.
///
/// Every output element is either a complete block in the syllable code
/// range or one of the input units unchanged. The trailing-reclaim rule
/// applies throughout: a consonant that could close the current block
/// instead opens the next one whenever a vowel follows it.
pub fn assemble(jamos: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(jamos.len());
    let mut i = 0;
    while i < jamos.len() {
        match munch_block(jamos, i) {
            Some((block, consumed)) => {
                out.push(block);
                i += consumed;
            }
            None => {
                out.push(jamos[i]);
                i += 1;
            }
        }
    }
    trace!(input = jamos.len(), output = out.len(), "assembled jamo stream");
    out
}

/// Try to munch one full syllable block starting at `start`. Returns the
/// composed block and how many units it consumed, or `None` when the unit
/// at `start` stays loose.
fn munch_block(jamos: &[char], start: usize) -> Option<(char, usize)> {
    let cho = jamo::choseong_index(jamos[start])?;

    // A leading consonant without a vowel after it stays loose.
    let v1 = *jamos.get(start + 1)?;
    if !jamo::is_jungseong(v1) {
        return None;
    }
    let mut consumed = 2;

    // One unit of lookahead: merge an adjacent vowel pair when the ordered
    // pair forms a composite vowel.
    let mut vowel = v1;
    if let Some(&v2) = jamos.get(start + 2) {
        if jamo::is_jungseong(v2) {
            if let Some(merged) = jamo::compose_vowel(v1, v2) {
                vowel = merged;
                consumed = 3;
            }
        }
    }
    let jung = jamo::jungseong_index(vowel)?;

    // Trailing candidate: must be a jongseong and must not be followed by
    // a vowel, otherwise it is reclaimed as the next block's choseong.
    let mut jong = 0;
    if let Some(&t1) = jamos.get(start + consumed) {
        if let Some(t1_index) = jamo::jongseong_index(t1) {
            let next_is_vowel = jamos
                .get(start + consumed + 1)
                .is_some_and(|&c| jamo::is_jungseong(c));
            if !next_is_vowel {
                jong = t1_index;
                let mut used = 1;

                // Cluster extension: the pair must form a valid cluster and
                // the unit after the pair must not be a vowel, or the second
                // consonant splits off into the next block.
                if let Some(&t2) = jamos.get(start + consumed + 1) {
                    if let Some(cluster) = jamo::compose_jongseong(t1, t2) {
                        let after_is_vowel = jamos
                            .get(start + consumed + 2)
                            .is_some_and(|&c| jamo::is_jungseong(c));
                        if !after_is_vowel {
                            if let Some(cluster_index) = jamo::jongseong_index(cluster) {
                                jong = cluster_index;
                                used = 2;
                            }
                        }
                    }
                }
                consumed += used;
            }
        }
    }

    Some((syllable::compose(cho, jung, jong), consumed))
}
