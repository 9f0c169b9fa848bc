//! # OPL2/OPL3 MIDI lookup tables
//!
//! Computes the constant tables a MUS/MIDI playback engine indexes while
//! driving a Yamaha YM3812 (OPL2) or YMF262 (OPL3) FM synthesis chip:
//!
//! - **Attenuation ramps**: MIDI channel volume, expression and note
//!   velocity are 0-127 perceptual values, while the chip's Operator Level
//!   register wants attenuation in 0.75 dB steps. Staying in log-space lets
//!   the player combine the three controls with two additions and three
//!   table lookups where a linear gain model would need logarithm calls and
//!   a multiplication chain on the audio path.
//! - **Frequency words**: each MIDI note becomes a packed register word of
//!   key-on bit, 3-bit block (octave-range exponent) and 10-bit frequency
//!   number, chosen by exhaustive search over the 8 blocks for the pair
//!   that reproduces the note's pitch with the least quantisation error.
//!
//! Every table is a pure function of [`Tuning`], which gathers all the
//! empirical constants of the derivation. The `tablegen` tool in this
//! workspace writes the results out as Rust `static` arrays for the player
//! to compile in.
//!
//! ## Usage
//!
//! ```rust
//! use opl2_tables::{Tuning, attenuation, frequency};
//!
//! let tuning = Tuning::default();
//! let ramps = attenuation::generate(&tuning);
//! let words = frequency::note_words(&tuning).unwrap();
//!
//! // Control value 100 is the 0 dB pivot
//! assert_eq!(ramps.log_square[100], 0);
//! // A4 (MIDI note 69) lands on block 5, fnum 580
//! assert_eq!(frequency::block(words[69]), 5);
//! assert_eq!(frequency::fnum(words[69]), 580);
//! ```
//!
//! ## Word layout
//!
//! The packed word is split by the player over the chip's A0 (low byte) and
//! B0 (high byte) channel registers:
//!
//! ```text,ignore
//! bit  13    | key-on
//! bits 12-10 | block, 0-7
//! bits 9-0   | frequency number, 0-1023
//! ```
//!
//! A word of zero marks a note no block can represent; the player must not
//! key it on.

pub mod attenuation;
pub mod frequency;
mod tuning;

pub use tuning::Tuning;

/// Key-on flag in the packed frequency word (bit 5 of the B0 register)
pub const KEY_ON: u16 = 1 << 13;

/// Largest frequency number the chip accepts (10 bits)
pub const FNUM_MAX: u16 = 1023;

/// Highest block exponent (3 bits)
pub const BLOCK_MAX: u8 = 7;

/// Bit position of the block field in the packed word
pub const BLOCK_SHIFT: u16 = 10;

/// Operator Level register ceiling: 63 steps of 0.75 dB below full volume
pub const LEVEL_MAX: u8 = 63;
