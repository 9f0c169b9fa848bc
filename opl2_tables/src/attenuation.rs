//! Loudness-to-attenuation ramps for the Operator Level register.
//!
//! MIDI volume (CC7), expression (CC11) and note velocity are all 0-127
//! values with a logarithmic loudness convention: `L(dB) = k * 20 *
//! log10(value / pivot)`, k=2 for volume and expression, k≈3 for velocity.
//! Keeping everything in dB means attenuations sum where linear gains would
//! multiply:
//!
//! ```text,ignore
//! L = log_square[volume] + log_square[expression] + log_cube[velocity]
//! ```
//!
//! Entries are pre-divided by the hardware step size (0.75 dB), so the sum
//! is already in register steps and only needs [`register_level`]'s clamp
//! before it is written to the chip.

use crate::{LEVEL_MAX, Tuning};

/// Parallel 128-entry attenuation ramps in 0.75 dB register steps, indexed
/// directly by MIDI control value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttenuationTables {
    /// Square-law ramp for channel volume and expression
    pub log_square: [i8; 128],
    /// Boosted-law ramp for note velocity
    pub log_cube: [i8; 128],
}

impl AttenuationTables {
    /// Volume/expression attenuation for a control value. Out-of-range
    /// values are limited to 127 first, as the player does with raw
    /// controller data.
    pub fn square(&self, control: u8) -> i8 {
        self.log_square[control.min(127) as usize]
    }

    /// Note-velocity attenuation for a control value
    pub fn cube(&self, control: u8) -> i8 {
        self.log_cube[control.min(127) as usize]
    }
}

/// Build both ramps from the tuning constants.
///
/// Entry 0 is pinned to `max_attenuation`: control value 0 is silence and
/// the logarithm is undefined there. Remaining entries are clamped to at
/// most `max_attenuation` and truncated toward zero. There is no lower
/// clamp; entries above the pivot run negative and act as a boost until
/// [`register_level`] clamps the combined value into the register range.
pub fn generate(tuning: &Tuning) -> AttenuationTables {
    let mut log_square = [tuning.max_attenuation; 128];
    let mut log_cube = [tuning.max_attenuation; 128];

    let square_scale = tuning.volume_exponent * 20.0 / -tuning.db_step;
    let cube_scale = tuning.velocity_exponent * 20.0 / -tuning.db_step;
    let ceiling = tuning.max_attenuation as f64;

    for n in 1..128 {
        let log = (n as f64 / tuning.pivot).log10();
        log_square[n] = (square_scale * log).min(ceiling) as i8;
        log_cube[n] = (cube_scale * log).min(ceiling) as i8;
    }

    AttenuationTables {
        log_square,
        log_cube,
    }
}

/// Sum the per-control attenuations and clamp into the 0-63 Operator Level
/// register range. The ramps themselves span 96..=-7, so both clamps are
/// load-bearing: quiet combinations bottom out at silence, boosted ones top
/// out at full volume.
pub fn register_level(volume_att: i8, expression_att: i8, velocity_att: i8) -> u8 {
    (volume_att as i32 + expression_att as i32 + velocity_att as i32)
        .clamp(0, LEVEL_MAX as i32) as u8
}
