//! Table generator for the OPL2/OPL3 music player.
//!
//! Runs both derivations from `opl2_tables` and writes the results out as
//! a Rust source file of `static` arrays the player compiles in: the two
//! attenuation ramps and the per-note frequency words.

mod cli;
mod strings;

use std::error::Error;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;

use log::info;
use nanoserde::{DeRon, SerRon};
use opl2_tables::attenuation::AttenuationTables;
use opl2_tables::{Tuning, attenuation, frequency};
use simplelog::TermLogger;

use crate::cli::CLIOptions;
use crate::strings::{
    ARRAY_END_STR, ATT_CUBE_STR, ATT_SQUARE_STR, NOTE_CMDS_STR, TABLES_HEADER_STR,
};

fn main() -> Result<(), Box<dyn Error>> {
    let options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if let Some(path) = &options.write_tuning {
        return write_tuning(path);
    }

    let tuning = match &options.tuning {
        Some(path) => read_tuning(path)?,
        None => Tuning::default(),
    };

    let ramps = attenuation::generate(&tuning);
    let words = frequency::note_words(&tuning)?;
    let source = render_tables(&ramps, &words);

    match &options.out {
        Some(path) => {
            write_source(path, &source)?;
            info!("Wrote tables to {:?}", path);
        }
        None => std::io::stdout().write_all(source.as_bytes())?,
    }
    Ok(())
}

/// Format all three tables as a single Rust source file
fn render_tables(ramps: &AttenuationTables, words: &[u16; 128]) -> String {
    let mut source = String::from(TABLES_HEADER_STR);

    source.push_str(ATT_SQUARE_STR);
    push_rows(&mut source, ramps.log_square.iter());
    source.push_str(ARRAY_END_STR);

    source.push_str(ATT_CUBE_STR);
    push_rows(&mut source, ramps.log_cube.iter());
    source.push_str(ARRAY_END_STR);

    source.push_str(NOTE_CMDS_STR);
    push_rows(&mut source, words.iter());
    source.push_str(ARRAY_END_STR);

    source
}

/// Lay table entries out in comma-separated rows of eight
fn push_rows<T: Display>(source: &mut String, entries: impl Iterator<Item = T>) {
    for (i, entry) in entries.enumerate() {
        if i % 8 == 0 {
            source.push_str("\n    ");
        } else {
            source.push(' ');
        }
        source.push_str(&format!("{entry},"));
    }
}

fn read_tuning(path: &Path) -> Result<Tuning, Box<dyn Error>> {
    let mut buf = String::new();
    OpenOptions::new()
        .read(true)
        .open(path)?
        .read_to_string(&mut buf)?;
    let tuning =
        Tuning::deserialize_ron(&buf).map_err(|e| format!("couldn't parse {path:?}: {e}"))?;
    info!("Loaded tuning from {:?}", path);
    Ok(tuning)
}

fn write_tuning(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(Tuning::default().serialize_ron().as_bytes())?;
    info!("Wrote default tuning to {:?}", path);
    Ok(())
}

fn write_source(path: &Path, source: &str) -> Result<(), Box<dyn Error>> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(source.as_bytes())?;
    Ok(())
}
