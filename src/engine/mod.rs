mod combat;
mod command;
mod items;
mod movement;
mod output;
mod render;

pub use combat::{
    CombatOutcome, CombatReport, MIN_BOSS_POWER, Round, announce_battle, effective_boss_power,
    narrate_combat, resolve_combat,
};
pub use command::Command;
pub use items::{handle_drop, handle_take};
pub use movement::{MoveOutcome, try_handle_movement};
pub use output::{Output, OutputBlock};
pub use render::{render_inventory, render_preview, render_room};
