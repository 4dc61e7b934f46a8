//! Boss fight resolution.
//!
//! The player's total item power both drives their own damage and weakens
//! the boss, down to a floor of [`MIN_BOSS_POWER`]. Rounds alternate with
//! the player striking first; a boss brought to zero health does not get
//! to answer that round.
//!
//! A player with zero power rolls `0..=0` every round and never hurts the
//! boss. That fight still ends, because the boss always deals at least
//! `MIN_BOSS_POWER / 3` damage.

use rand::Rng;

use crate::engine::output::Output;
use crate::world;

pub const MIN_BOSS_POWER: i32 = 10;

pub fn effective_boss_power(boss_power: i32, player_power: u32) -> i32 {
    let player_power = i32::try_from(player_power).unwrap_or(i32::MAX);
    boss_power.saturating_sub(player_power).max(MIN_BOSS_POWER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: u32,
    pub player_damage: i32,
    /// `None` when the boss fell before it could strike back.
    pub boss_damage: Option<i32>,
    pub player_health: i32,
    pub boss_health: i32,
}

#[derive(Debug, Clone)]
pub struct CombatReport {
    pub player_power: u32,
    pub effective_boss_power: i32,
    pub rounds: Vec<Round>,
    pub outcome: CombatOutcome,
    pub player_health: i32,
    pub boss_health: i32,
}

pub fn resolve_combat<R: Rng>(
    rng: &mut R,
    player_power: u32,
    player_health: i32,
    boss: &world::Boss,
) -> CombatReport {
    let effective = effective_boss_power(boss.power, player_power);
    let attack = i32::try_from(player_power).unwrap_or(i32::MAX);

    let mut player_health = player_health;
    let mut boss_health = boss.health;
    let mut rounds: Vec<Round> = Vec::new();
    let mut number = 1u32;

    while boss_health > 0 && player_health > 0 {
        let player_damage = rng.gen_range(attack / 2..=attack);
        boss_health = boss_health.saturating_sub(player_damage);

        if boss_health <= 0 {
            rounds.push(Round {
                number,
                player_damage,
                boss_damage: None,
                player_health,
                boss_health,
            });
            break;
        }

        let boss_damage = rng.gen_range(effective / 3..=effective);
        player_health = player_health.saturating_sub(boss_damage);

        rounds.push(Round {
            number,
            player_damage,
            boss_damage: Some(boss_damage),
            player_health,
            boss_health,
        });
        number += 1;
    }

    let outcome = if player_health <= 0 {
        CombatOutcome::Defeat
    } else {
        CombatOutcome::Victory
    };

    log::info!(
        "combat vs {} ended in {:?} after {} rounds (player {} / boss {})",
        boss.name,
        outcome,
        rounds.len(),
        player_health,
        boss_health
    );

    CombatReport {
        player_power,
        effective_boss_power: effective,
        rounds,
        outcome,
        player_health,
        boss_health,
    }
}

pub fn announce_battle(out: &mut Output, boss: &world::Boss, player_power: u32) {
    out.title(format!("=== BOSS BATTLE: {} ===", boss.name));
    out.say(boss.desc.clone());
    out.say(format!("Your Power: {}", player_power));
    out.say(format!(
        "{}'s Power: {}",
        boss.name,
        effective_boss_power(boss.power, player_power)
    ));
}

pub fn narrate_combat(out: &mut Output, boss: &world::Boss, report: &CombatReport) {
    for round in &report.rounds {
        out.title(format!("--- Round {} ---", round.number));
        out.event(format!(
            "You attack the {} for {} damage!",
            boss.name, round.player_damage
        ));

        if let Some(damage) = round.boss_damage {
            out.event(format!("The {} attacks you for {} damage!", boss.name, damage));
            out.say(format!("Your Health: {}", round.player_health));
            out.say(format!("{}'s Health: {}", boss.name, round.boss_health));
            out.pause();
        }
    }

    match report.outcome {
        CombatOutcome::Defeat => {
            out.event(format!("The {} has defeated you!", boss.name));
            out.say("GAME OVER");
        }
        CombatOutcome::Victory => {
            out.event(format!("You have defeated the {}!", boss.name));
            out.say("Congratulations! You have completed the adventure!");
            out.say("To be continued in the next level...");
        }
    }
}
