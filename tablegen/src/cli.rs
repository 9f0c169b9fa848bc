use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;

/// Generate the OPL2/OPL3 attenuation and note-frequency lookup tables as
/// Rust source for the music player.
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug
    #[argh(option)]
    pub verbose: Option<LevelFilter>,
    /// path to write the generated source to; stdout when not set
    #[argh(option)]
    pub out: Option<PathBuf>,
    /// path to a RON tuning file overriding the default constants
    #[argh(option)]
    pub tuning: Option<PathBuf>,
    /// write the default tuning as RON to this path and exit
    #[argh(option)]
    pub write_tuning: Option<PathBuf>,
}
