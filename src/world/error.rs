use thiserror::Error;

use super::validator::ValidationError;

/// Errors that can arise while resolving or building a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// No level is registered under this number.
    #[error("Level {0} does not exist!")]
    UnknownLevel(u32),

    /// The level definition is not valid TOML or misses required fields.
    #[error("failed to parse level definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structural problem found while building the room graph.
    #[error("malformed level definition: {0}")]
    Malformed(String),

    /// The level parsed but its graph did not pass validation.
    #[error("level failed validation: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
