//! Built-in level table. Each entry pairs a level number with its TOML
//! definition, compiled into the binary.

use super::error::LevelError;
use super::loader::load_level_from_str;
use super::model::Level;

pub struct LevelEntry {
    pub number: u32,
    pub title: &'static str,
    pub source: &'static str,
}

pub const LEVELS: &[LevelEntry] = &[
    LevelEntry {
        number: 1,
        title: "The Ancient Castle",
        source: include_str!("../../levels/level01.toml"),
    },
    LevelEntry {
        number: 2,
        title: "The Enchanted Forest",
        source: include_str!("../../levels/level02.toml"),
    },
];

pub fn find_level(number: u32) -> Option<&'static LevelEntry> {
    LEVELS.iter().find(|e| e.number == number)
}

/// Build a fresh copy of a registered level.
pub fn load_level(number: u32) -> Result<Level, LevelError> {
    let entry = match find_level(number) {
        Some(e) => e,
        None => {
            log::error!("no level registered under number {}", number);
            return Err(LevelError::UnknownLevel(number));
        }
    };

    let level = load_level_from_str(entry.source)?;
    if level.number != entry.number {
        return Err(LevelError::Malformed(format!(
            "level {} definition declares number {}",
            entry.number, level.number
        )));
    }

    log::info!("loaded level {}: {}", level.number, level.name);
    Ok(level)
}
