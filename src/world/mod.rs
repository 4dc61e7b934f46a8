mod error;
mod loader;
mod model;
mod registry;
mod validator;

pub use error::LevelError;
pub use loader::load_level_from_str;
pub use registry::{LEVELS, LevelEntry, find_level, load_level};

pub use model::{Boss, Exit, Item, Level, Player, Room};
pub use validator::{ValidationError, validate_level};
