//! MIDI note to OPL frequency-word conversion.
//!
//! The chip pitches a channel from a 10-bit frequency number scaled by one
//! of 8 block exponents:
//!
//! ```text,ignore
//! frequency = fnum * 49716 / 2^(20 - block)
//! ```
//!
//! Lower blocks give finer frequency granularity over a narrower range.
//! Each MIDI note is converted to Hz and every block searched for the fnum
//! that reproduces the pitch with the least error; the winner is packed
//! with the key-on bit for the player to split across the A0/B0 registers.

use log::debug;

use crate::{BLOCK_MAX, BLOCK_SHIFT, FNUM_MAX, KEY_ON, Tuning};

/// A4 in MIDI note numbers
const A4_NOTE: f64 = 69.0;

/// Equal-tempered frequency in Hz for a MIDI note.
///
/// The reference pitch is `a4_pitch * octave_correction`: 880 Hz with the
/// default tuning, so note 69 plays one octave above concert pitch to
/// cancel the player's octave offset.
pub fn note_frequency(note: u8, tuning: &Tuning) -> f64 {
    let reference = tuning.a4_pitch * tuning.octave_correction;
    2f64.powf((note as f64 - A4_NOTE) / 12.0) * reference
}

/// The frequency in Hz the chip actually produces for a block/fnum pair
pub fn chip_frequency(block: u8, fnum: u16, tuning: &Tuning) -> f64 {
    fnum as f64 * tuning.opl_clock / 2f64.powi(20 - block as i32)
}

/// Block field of a packed word
pub const fn block(word: u16) -> u8 {
    ((word >> BLOCK_SHIFT) & 0x7) as u8
}

/// Frequency-number field of a packed word
pub const fn fnum(word: u16) -> u16 {
    word & FNUM_MAX
}

/// Whether the word keys its note on. The all-zero word marks an
/// out-of-range note and leaves the channel silent.
pub const fn is_key_on(word: u16) -> bool {
    word & KEY_ON != 0
}

/// Find the block/fnum pair reproducing `freq` with the least quantisation
/// error and pack it with the key-on flag.
///
/// Blocks whose fnum would overflow 10 bits are skipped; ties on the error
/// keep the lowest block, which has the finer granularity. A frequency
/// above what block 7 can hold returns the silent word 0 rather than an
/// error. `Err` is reserved for the search producing an out-of-range field,
/// a logic defect that must abort generation instead of emitting a corrupt
/// register value.
pub fn frequency_to_word(freq: f64, tuning: &Tuning) -> Result<u16, String> {
    let mut best: Option<(u8, u16)> = None;
    let mut best_error = f64::INFINITY;

    for block in 0..=BLOCK_MAX {
        let fnum = (freq * 2f64.powi(20 - block as i32) / tuning.opl_clock).floor();
        if fnum > FNUM_MAX as f64 {
            continue;
        }
        let reproduced = fnum * tuning.opl_clock / 2f64.powi(20 - block as i32);
        let error = (reproduced - freq).abs();
        if error < best_error {
            best = Some((block, fnum as u16));
            best_error = error;
        }
    }

    match best {
        Some((block, fnum)) => {
            if fnum > FNUM_MAX {
                return Err(format!(
                    "frequency number {fnum} exceeds 10 bits for {freq} Hz"
                ));
            }
            if block > BLOCK_MAX {
                return Err(format!("block {block} exceeds 3 bits for {freq} Hz"));
            }
            Ok(KEY_ON | ((block as u16) << BLOCK_SHIFT) | fnum)
        }
        None => Ok(0),
    }
}

/// Build the full 128-entry note table.
///
/// Notes past the top of the chip's range emit the silent word 0; the
/// player must not key those on.
pub fn note_words(tuning: &Tuning) -> Result<[u16; 128], String> {
    let mut words = [0u16; 128];
    for (note, word) in words.iter_mut().enumerate() {
        let freq = note_frequency(note as u8, tuning);
        *word = frequency_to_word(freq, tuning)?;
        if *word == 0 {
            debug!("note {note} ({freq:.2} Hz) unrepresentable, left silent");
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    // Known-good note words for the default tuning, as compiled into the
    // player. Zeros at the top of the range never key on.
    #[rustfmt::skip]
    const NOTE_WORDS: [u16; 128] = [
        8536, 8557, 8579, 8602, 8626, 8652, 8679, 8708,
        8739, 8772, 8806, 8843, 8881, 8922, 8966, 9012,
        9061, 9112, 9167, 9732, 9763, 9796, 9830, 9867,
        9905, 9946, 9990, 10036, 10085, 10136, 10191, 10756,
        10787, 10820, 10854, 10891, 10929, 10970, 11014, 11060,
        11109, 11160, 11215, 11780, 11811, 11844, 11878, 11915,
        11953, 11994, 12038, 12084, 12133, 12184, 12239, 12804,
        12835, 12868, 12902, 12939, 12977, 13018, 13062, 13108,
        13157, 13208, 13263, 13828, 13859, 13892, 13926, 13963,
        14001, 14042, 14086, 14132, 14181, 14232, 14287, 14852,
        14883, 14916, 14950, 14987, 15025, 15066, 15110, 15156,
        15205, 15256, 15311, 15876, 15907, 15940, 15974, 16011,
        16049, 16090, 16134, 16180, 16229, 16280, 16335, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
    ];

    #[test]
    fn matches_known_words() {
        let words = note_words(&Tuning::default()).unwrap();
        assert_eq!(words, NOTE_WORDS);
    }

    #[test]
    fn reference_pitches() {
        let tuning = Tuning::default();
        assert_eq!(note_frequency(69, &tuning), 880.0);
        assert_eq!(note_frequency(57, &tuning), 440.0);

        // dropping the octave correction restores concert pitch
        let concert = Tuning {
            octave_correction: 1.0,
            ..Tuning::default()
        };
        assert_eq!(note_frequency(69, &concert), 440.0);
    }

    #[test]
    fn a4_lands_on_block_5() {
        let words = note_words(&Tuning::default()).unwrap();
        assert!(is_key_on(words[69]));
        assert_eq!(block(words[69]), 5);
        assert_eq!(fnum(words[69]), 580);
        // the octave below reuses the fnum one block down
        assert_eq!(block(words[57]), 4);
        assert_eq!(fnum(words[57]), 580);
    }

    #[test]
    fn words_are_well_formed() {
        let words = note_words(&Tuning::default()).unwrap();
        for (note, &word) in words.iter().enumerate() {
            if word == 0 {
                continue;
            }
            assert!(is_key_on(word), "note {note} missing key-on");
            assert_eq!(word & !0x3fff, 0, "note {note} has stray high bits");
            assert!(fnum(word) <= FNUM_MAX);
            assert!(block(word) <= BLOCK_MAX);
        }
    }

    #[test]
    fn range_limits() {
        let words = note_words(&Tuning::default()).unwrap();
        // the bottom of the MIDI range still fits block 0
        assert_eq!(block(words[0]), 0);
        assert_eq!(fnum(words[0]), 344);
        // notes past 102 overflow every block and stay silent
        assert!(words[102] != 0);
        for note in 103..128 {
            assert_eq!(words[note], 0, "note {note}");
        }
    }

    #[test]
    fn block_promotion_at_fnum_overflow() {
        let words = note_words(&Tuning::default()).unwrap();
        // note 18 is the last block-0 note; 19 would need fnum > 1023
        assert_eq!(block(words[18]), 0);
        assert_eq!(fnum(words[18]), 975);
        assert_eq!(block(words[19]), 1);
        assert_eq!(fnum(words[19]), 516);
    }

    #[test]
    fn round_trip_error_is_bounded() {
        let tuning = Tuning::default();
        let words = note_words(&tuning).unwrap();
        for (note, &word) in words.iter().enumerate() {
            if word == 0 {
                continue;
            }
            let target = note_frequency(note as u8, &tuning);
            let reproduced = chip_frequency(block(word), fnum(word), &tuning);
            let error = (reproduced - target).abs();
            // one fnum step of the coarsest block bounds every note
            assert!(error < 6.1, "note {note}: {error} Hz off");
            if note <= 58 {
                assert!(error < 1.0, "note {note}: {error} Hz off");
            }
        }
    }

    #[test]
    fn silent_word_below_chip_range() {
        // block 0 fnum 0 covers arbitrarily low frequencies, so only the
        // top of the range degrades; a plain zero frequency still encodes
        let tuning = Tuning::default();
        let word = frequency_to_word(0.0, &tuning).unwrap();
        assert_eq!(fnum(word), 0);
        assert_eq!(block(word), 0);
        // far above block 7's ceiling nothing fits
        assert_eq!(frequency_to_word(50_000.0, &tuning).unwrap(), 0);
    }

    #[test]
    fn generation_is_deterministic() {
        let tuning = Tuning::default();
        assert_eq!(note_words(&tuning).unwrap(), note_words(&tuning).unwrap());
    }
}
