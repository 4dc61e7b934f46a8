pub mod config;
pub mod engine;
pub mod world;

use rand::SeedableRng;
use rand::rngs::StdRng;

use engine::{
    Command, CombatOutcome, CombatReport, MoveOutcome, Output, announce_battle, handle_drop,
    handle_take, narrate_combat, render_inventory, render_room, resolve_combat,
    try_handle_movement,
};
use world::{Level, Player};

pub use config::{ConfigError, GameConfig};
pub use world::{LevelError, load_level, load_level_from_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Quit,
    /// Entered the boss room with too few items.
    Unprepared,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    /// The boss has been announced; the next input starts the fight.
    BattlePending,
    Over(Ending),
}

pub struct Game {
    pub level: Level,
    pub player: Player,
    pub phase: Phase,
    pub last_combat: Option<CombatReport>,
    rng: StdRng,
    confirm_start: bool,
}

impl Game {
    pub fn new(level: Level, player_name: &str, config: &GameConfig) -> Self {
        let rng = match config.combat.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let player = Player::new(
            player_name,
            config.player.health,
            level.starting_room.clone(),
        );

        Game {
            level,
            player,
            phase: Phase::Exploring,
            last_combat: None,
            rng,
            confirm_start: config.combat.confirm_start,
        }
    }

    /// Load the configured level from the built-in table.
    pub fn from_config(config: &GameConfig, player_name: &str) -> Result<Self, LevelError> {
        let level = load_level(config.level)?;
        Ok(Game::new(level, player_name, config))
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    pub fn ending(&self) -> Option<Ending> {
        match self.phase {
            Phase::Over(e) => Some(e),
            _ => None,
        }
    }

    pub fn current_room(&self) -> Option<&world::Room> {
        self.level.rooms.get(&self.player.current_room_id)
    }

    /// Level introduction plus the first room render.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        out.title(format!("Level {}: {}", self.level.number, self.level.name));
        out.say(self.level.desc.clone());
        out.say(format!(
            "You must find {} magical items to defeat the boss.",
            self.level.required_items
        ));

        match self.current_room() {
            Some(room) => render_room(&mut out, room),
            None => out.say(format!(
                "Error: start_room '{}' not found.",
                self.player.current_room_id
            )),
        }
        out
    }

    /// Process a single player input; returns (output, game over?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        match self.phase {
            Phase::Over(_) => {
                out.say("The game is over.");
                return (out, true);
            }
            Phase::BattlePending => {
                self.run_battle(&mut out);
                return (out, self.is_over());
            }
            Phase::Exploring => {}
        }

        match Command::parse(input) {
            Command::Empty => out.say("Please enter a command."),
            Command::Quit => {
                out.say("Thanks for playing!");
                self.phase = Phase::Over(Ending::Quit);
            }
            Command::Look => match self.current_room() {
                Some(room) => render_room(&mut out, room),
                None => out.say(format!(
                    "Error: you are in an unknown room '{}'",
                    self.player.current_room_id
                )),
            },
            Command::Inventory => render_inventory(&mut out, &self.player),
            Command::Go(direction) => {
                let outcome =
                    try_handle_movement(&mut out, &self.level, &mut self.player, &direction);
                if outcome == MoveOutcome::Moved {
                    if self.player.current_room_id == self.level.boss_room {
                        self.enter_boss_room(&mut out);
                    } else if let Some(room) = self.current_room() {
                        render_room(&mut out, room);
                    }
                }
            }
            Command::Take(name) => {
                if let Some(room) = self.level.rooms.get_mut(&self.player.current_room_id) {
                    handle_take(&mut out, room, &mut self.player, &name);
                }
            }
            Command::Drop(name) => {
                if let Some(room) = self.level.rooms.get_mut(&self.player.current_room_id) {
                    handle_drop(&mut out, room, &mut self.player, &name);
                }
            }
            Command::Unknown => out.say("I don't understand that command."),
        }

        (out, self.is_over())
    }

    fn enter_boss_room(&mut self, out: &mut Output) {
        let boss = &self.level.boss;
        let carried = self.player.inventory.len();

        if carried < self.level.required_items {
            log::info!(
                "boss gate closed: {} of {} items",
                carried,
                self.level.required_items
            );
            out.event(format!(
                "As you enter the chamber, the {} rises before you!",
                boss.name
            ));
            out.say("You realize you are ill-equipped to face such a powerful foe.");
            out.say(format!(
                "The {}'s attack engulfs you before you can react.",
                boss.name
            ));
            out.say("GAME OVER - You need to find more magical items before facing the boss.");
            self.phase = Phase::Over(Ending::Unprepared);
            return;
        }

        log::info!("boss gate open: {} items carried", carried);
        out.event(format!(
            "You enter the chamber, and the {} rises before you!",
            boss.name
        ));
        out.say("But with your magical items, you are prepared for this battle.");
        announce_battle(out, boss, self.player.total_power());

        if self.confirm_start {
            out.say("Press Enter to begin the battle...");
            self.phase = Phase::BattlePending;
        } else {
            self.run_battle(out);
        }
    }

    fn run_battle(&mut self, out: &mut Output) {
        let report = resolve_combat(
            &mut self.rng,
            self.player.total_power(),
            self.player.health,
            &self.level.boss,
        );
        narrate_combat(out, &self.level.boss, &report);

        self.player.health = report.player_health;
        self.level.boss.health = report.boss_health;
        self.phase = Phase::Over(match report.outcome {
            CombatOutcome::Victory => Ending::Victory,
            CombatOutcome::Defeat => Ending::Defeat,
        });
        self.last_combat = Some(report);
    }
}
