use crate::engine::output::Output;
use crate::world;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No exit in that direction.
    NoExit,
    /// The exit exists but points at a room the level does not have.
    Dangling,
    Moved,
}

pub fn try_handle_movement(
    out: &mut Output,
    level: &world::Level,
    player: &mut world::Player,
    direction: &str,
) -> MoveOutcome {
    let room = match level.rooms.get(&player.current_room_id) {
        Some(r) => r,
        None => {
            log::error!("player is in unknown room '{}'", player.current_room_id);
            out.say(format!(
                "Error: you are in an unknown room '{}'",
                player.current_room_id
            ));
            return MoveOutcome::Dangling;
        }
    };

    let target = match room.get_connection(direction) {
        Some(t) => t,
        None => {
            out.say(format!("You can't go {} from here.", direction));
            return MoveOutcome::NoExit;
        }
    };

    if !level.rooms.contains_key(target) {
        log::warn!(
            "room '{}' exit '{}' points at missing room '{}'",
            room.id,
            direction,
            target
        );
        out.say(format!(
            "You try to go {}, but something feels wrong (room not found).",
            direction
        ));
        return MoveOutcome::Dangling;
    }

    log::debug!("{} -> {} via {}", room.id, target, direction);
    player.current_room_id = target.to_string();
    MoveOutcome::Moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Boss, Level, Player, Room};
    use std::collections::HashMap;

    fn two_rooms() -> Level {
        let mut start = Room::new("start", "Gate", "");
        start.add_connection("north", "hall");
        start.add_connection("west", "void");
        let mut hall = Room::new("hall", "Hall", "");
        hall.add_connection("south", "start");

        let mut rooms = HashMap::new();
        rooms.insert("start".to_string(), start);
        rooms.insert("hall".to_string(), hall);

        Level {
            number: 1,
            name: "Test".to_string(),
            desc: String::new(),
            required_items: 0,
            starting_room: "start".to_string(),
            boss_room: "hall".to_string(),
            boss: Boss {
                name: "Ogre".to_string(),
                desc: String::new(),
                health: 10,
                power: 10,
            },
            rooms,
        }
    }

    #[test]
    fn moves_along_existing_exit() {
        let level = two_rooms();
        let mut player = Player::new("Aria", 100, "start");
        let mut out = Output::new();

        let outcome = try_handle_movement(&mut out, &level, &mut player, "NORTH");
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(player.current_room_id, "hall");
    }

    #[test]
    fn missing_exit_keeps_position() {
        let level = two_rooms();
        let mut player = Player::new("Aria", 100, "start");
        let mut out = Output::new();

        for dir in ["south", "east", "up", "down"] {
            let outcome = try_handle_movement(&mut out, &level, &mut player, dir);
            assert_eq!(outcome, MoveOutcome::NoExit);
            assert_eq!(player.current_room_id, "start");
        }
        assert!(out.contains("You can't go south from here."));
    }

    #[test]
    fn dangling_exit_is_guarded() {
        let level = two_rooms();
        let mut player = Player::new("Aria", 100, "start");
        let mut out = Output::new();

        let outcome = try_handle_movement(&mut out, &level, &mut player, "west");
        assert_eq!(outcome, MoveOutcome::Dangling);
        assert_eq!(player.current_room_id, "start");
        assert!(out.contains("room not found"));
    }
}
