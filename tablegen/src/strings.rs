pub const TABLES_HEADER_STR: &str = r#"//! Attenuation and note-frequency lookup tables for the OPL2/OPL3 player.
//!
//! GENERATED by tablegen, do not edit. Regenerate with:
//! `cargo run -p tablegen -- --out <this file>`
"#;

pub const ATT_SQUARE_STR: &str = r#"
/// Volume/expression attenuation in 0.75 dB register steps, indexed by
/// control value. Combine in log-space and clamp:
/// `level = clamp(ATT_LOG_SQUARE[vol] + ATT_LOG_SQUARE[expr] + ATT_LOG_CUBE[vel], 0, 63)`
pub static ATT_LOG_SQUARE: [i8; 128] = ["#;

pub const ATT_CUBE_STR: &str = r#"
/// Note-velocity attenuation in 0.75 dB register steps, indexed by control
/// value.
pub static ATT_LOG_CUBE: [i8; 128] = ["#;

pub const NOTE_CMDS_STR: &str = r#"
/// A0/B0 register bytes for each MIDI note: key-on | block << 10 | fnum.
/// Zero entries are out of the chip's range and must not key on.
pub static NOTE_CMDS: [u16; 128] = ["#;

pub const ARRAY_END_STR: &str = "
];
";
