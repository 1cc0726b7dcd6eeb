//! Three-pass, frequency-conserving guess evaluator.
//!
//! A guess and the target are both broken down to positional components
//! and further to atomic jamo. Two depletable multiset pools of target
//! atoms are built up front - one per syllable block and one global pool
//! spanning the whole word - and every claimed match spends from them, so
//! duplicate jamo in a guess can never out-match the target's actual
//! multiplicities.
//!
//! The three passes encode match priority and each runs to completion
//! over both blocks before the next starts:
//!
//! 1. `Correct` - the whole component is identical in the same slot of
//!    the same block; spends from the block pool and the global pool.
//! 2. `Present` - the atom remains in its own block's pool; spends from
//!    the block pool and the global pool.
//! 3. `MisplacedSyllable` - the atom remains in the global pool; spends
//!    from the global pool only.
//!
//! Whatever is left is `Absent`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use hangeul_core::{decompose, decompose_flat, split_component};

use crate::grade::{Grade, KeyboardHints};

/// Grade of one atomic jamo of the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomScore {
    pub jamo: char,
    pub grade: Grade,
}

/// Grade of one positional component, with the per-atom breakdown. For a
/// simple component the breakdown is the single atom itself; for a
/// composite vowel or trailing cluster it has both halves, which may be
/// graded differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub jamo: char,
    pub grade: Grade,
    pub atoms: Vec<AtomScore>,
}

/// Grade of one whole syllable block of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockScore {
    pub block: char,
    pub grade: Grade,
    pub components: Vec<ComponentScore>,
}

/// Depletable multiset of atomic jamo counts.
type Pool = AHashMap<char, u32>;

fn charge(pool: &mut Pool, jamo: char) {
    *pool.entry(jamo).or_insert(0) += 1;
}

/// Spend one instance of `jamo` if any remains. Counts never go negative.
fn spend(pool: &mut Pool, jamo: char) -> bool {
    match pool.get_mut(&jamo) {
        Some(n) if *n > 0 => {
            *n -= 1;
            true
        }
        _ => false,
    }
}

/// One guess component paired with the target component in the same slot
/// of the same block.
struct Cell {
    jamo: char,
    target: Option<char>,
    atoms: Vec<AtomScore>,
}

impl Cell {
    fn new(jamo: char, target: Option<char>) -> Self {
        let atoms = split_component(jamo)
            .into_iter()
            .map(|a| AtomScore {
                jamo: a,
                grade: Grade::None,
            })
            .collect();
        Self {
            jamo,
            target,
            atoms,
        }
    }
}

/// Slot-aligned cells for one guess block against one target block. The
/// empty trailing slot contributes no cell on either side.
fn build_cells(guess: char, target: char) -> Vec<Cell> {
    let Some(g) = decompose(guess) else {
        // Loose units are rejected at submission; grade the raw unit as a
        // single slotless component so the function stays total.
        return vec![Cell::new(guess, None)];
    };
    let t = decompose(target);

    let mut cells = vec![
        Cell::new(g.choseong, t.map(|t| t.choseong)),
        Cell::new(g.jungseong, t.map(|t| t.jungseong)),
    ];
    if let Some(jong) = g.jongseong {
        cells.push(Cell::new(jong, t.and_then(|t| t.jongseong)));
    }
    cells
}

/// Fold a set of atom grades into the displayed grade: `Correct` only when
/// everything is correct, otherwise the best partial evidence.
fn rollup(grades: impl Iterator<Item = Grade>) -> Grade {
    let mut seen_any = false;
    let mut all_correct = true;
    let mut any_present = false;
    let mut any_misplaced = false;
    for grade in grades {
        seen_any = true;
        all_correct &= grade == Grade::Correct;
        any_present |= grade == Grade::Present;
        any_misplaced |= grade == Grade::MisplacedSyllable;
    }
    if seen_any && all_correct {
        Grade::Correct
    } else if any_present {
        Grade::Present
    } else if any_misplaced {
        Grade::MisplacedSyllable
    } else {
        Grade::Absent
    }
}

fn finish_block(block: char, cells: Vec<Cell>, hints: &mut KeyboardHints) -> BlockScore {
    let mut components = Vec::with_capacity(cells.len());
    for mut cell in cells {
        for atom in &mut cell.atoms {
            if atom.grade == Grade::None {
                atom.grade = Grade::Absent;
            }
            hints.raise(atom.jamo, atom.grade);
        }
        let grade = rollup(cell.atoms.iter().map(|a| a.grade));
        components.push(ComponentScore {
            jamo: cell.jamo,
            grade,
            atoms: cell.atoms,
        });
    }
    let grade = rollup(
        components
            .iter()
            .flat_map(|c| c.atoms.iter().map(|a| a.grade)),
    );
    BlockScore {
        block,
        grade,
        components,
    }
}

/// Score a 2-block guess against the 2-block target.
///
/// `hints` is the keyboard-hint map accumulated over all previous guesses
/// of the session; every atom's grade is folded into it, monotonically.
pub fn evaluate(
    guess: [char; 2],
    target: [char; 2],
    hints: &mut KeyboardHints,
) -> [BlockScore; 2] {
    // Both pools are exact multiplicity counts of the target's atoms and
    // live from the start; passes 1 and 2 spend from both.
    let mut global: Pool = Pool::new();
    let mut block_pools: [Pool; 2] = [Pool::new(), Pool::new()];
    for (b, &t) in target.iter().enumerate() {
        for component in decompose_flat(t) {
            for atom in split_component(component) {
                charge(&mut global, atom);
                charge(&mut block_pools[b], atom);
            }
        }
    }

    let mut cells = [
        build_cells(guess[0], target[0]),
        build_cells(guess[1], target[1]),
    ];

    // Pass 1: whole-component identity in the same slot.
    for (b, block_cells) in cells.iter_mut().enumerate() {
        for cell in block_cells.iter_mut() {
            if cell.target == Some(cell.jamo) {
                for atom in &mut cell.atoms {
                    atom.grade = Grade::Correct;
                    spend(&mut block_pools[b], atom.jamo);
                    spend(&mut global, atom.jamo);
                }
            }
        }
    }

    // Pass 2: atom still available within its own block.
    for (b, block_cells) in cells.iter_mut().enumerate() {
        for cell in block_cells.iter_mut() {
            for atom in &mut cell.atoms {
                if atom.grade == Grade::None && spend(&mut block_pools[b], atom.jamo) {
                    atom.grade = Grade::Present;
                    spend(&mut global, atom.jamo);
                }
            }
        }
    }

    // Pass 3: atom available anywhere in the word.
    for block_cells in cells.iter_mut() {
        for cell in block_cells.iter_mut() {
            for atom in &mut cell.atoms {
                if atom.grade == Grade::None && spend(&mut global, atom.jamo) {
                    atom.grade = Grade::MisplacedSyllable;
                }
            }
        }
    }

    let [first, second] = cells;
    [
        finish_block(guess[0], first, hints),
        finish_block(guess[1], second, hints),
    ]
}
