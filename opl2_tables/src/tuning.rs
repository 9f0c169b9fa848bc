use nanoserde::{DeRon, SerRon};

/// The empirical constants behind both table derivations.
///
/// The defaults reproduce the ramps and note words the player currently
/// compiles in; any field can be overridden from a RON file via `tablegen
/// --tuning` without touching the algorithms.
#[derive(Debug, Clone, DeRon, SerRon)]
pub struct Tuning {
    /// Control value treated as 0 dB "full volume". MUS tracks are authored
    /// against 100 rather than 127, leaving boost headroom above the pivot.
    pub pivot: f64,
    /// Hardware attenuation step size in dB
    pub db_step: f64,
    /// Perceptual power law for channel volume and expression
    pub volume_exponent: f64,
    /// Power law for note velocity. 2.6 rather than the conventional cubic;
    /// strict cubic scaling hides quiet background instruments in the mix.
    pub velocity_exponent: f64,
    /// Ramp ceiling in register steps. Applied at control value 0 and as the
    /// upper clamp of both ramps. Intentionally above the 0-63 register
    /// range; the player clamps after summing the per-control entries.
    pub max_attenuation: i8,
    /// Chip clock-derived frequency constant, 14.31818 MHz / 288
    pub opl_clock: f64,
    /// Conventional A4 reference pitch in Hz
    pub a4_pitch: f64,
    /// Reference-pitch multiplier working around the octave offset in the
    /// player's MUS interpretation. Set to 1.0 once that is fixed.
    pub octave_correction: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pivot: 100.0,
            db_step: 0.75,
            volume_exponent: 2.0,
            velocity_exponent: 2.6,
            max_attenuation: 96,
            opl_clock: 49716.0,
            a4_pitch: 440.0,
            octave_correction: 2.0,
        }
    }
}
