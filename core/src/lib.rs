//! hangeul-core
//!
//! Hangul script machinery shared by the kordle game crate: the static
//! jamo tables, syllable decomposition/composition over the precomposed
//! code range, the Dubeolsik-style input automaton, and a raw jamo input
//! buffer.
//!
//! Public API:
//! - [`jamo`] - positional tables, role predicates, composite pair maps
//! - [`Decomposed`] / [`decompose`] / [`compose`] - block <-> components
//! - [`split_component`] - component -> atomic jamo
//! - [`assemble`] - jamo stream -> syllable blocks and loose units
//! - [`JamoBuffer`] - ordered typed-jamo buffer with live preview
//!
//! This crate knows nothing about guessing, grading or words; all game
//! semantics live in the `kordle` crate.

pub mod jamo;

pub mod syllable;
pub use syllable::{
    compose, decompose, decompose_flat, is_syllable, split_component, vowel_layout, Decomposed,
    VowelLayout, SYLLABLE_BASE, SYLLABLE_LAST,
};

pub mod assembler;
pub use assembler::assemble;

pub mod input_buffer;
pub use input_buffer::JamoBuffer;
