use std::collections::HashSet;
use std::fmt;

use super::model::Level;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_level(level: &Level) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if level.rooms.is_empty() {
        errors.push(ValidationError::new("level has no rooms"));
    }

    if !level.rooms.contains_key(&level.starting_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            level.starting_room
        )));
    }

    if !level.rooms.contains_key(&level.boss_room) {
        errors.push(ValidationError::new(format!(
            "boss_room '{}' not found among rooms",
            level.boss_room
        )));
    }

    // Validate exits
    for room_id in level.room_ids() {
        let room = &level.rooms[room_id];
        for exit in &room.exits {
            if exit.direction.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room_id
                )));
            }
            if !level.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
        }

        for item in &room.items {
            if item.name.is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' holds an item with an empty name",
                    room_id
                )));
            }
        }
    }

    let placed = level.item_count();
    if level.required_items > placed {
        errors.push(ValidationError::new(format!(
            "required_items is {} but only {} items are placed",
            level.required_items, placed
        )));
    }

    // A boss room nobody can reach makes the level unwinnable.
    if level.rooms.contains_key(&level.boss_room)
        && !reachable_rooms(level).contains(level.boss_room.as_str())
    {
        errors.push(ValidationError::new(format!(
            "boss_room '{}' is not reachable from '{}'",
            level.boss_room, level.starting_room
        )));
    }

    if level.boss.health <= 0 {
        errors.push(ValidationError::new(format!(
            "boss '{}' must start with positive health",
            level.boss.name
        )));
    }

    errors
}

fn reachable_rooms(level: &Level) -> HashSet<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();

    if let Some((id, _)) = level.rooms.get_key_value(&level.starting_room) {
        stack.push(id.as_str());
    }

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(room) = level.rooms.get(id) {
            for exit in &room.exits {
                if let Some((target, _)) = level.rooms.get_key_value(&exit.target) {
                    stack.push(target.as_str());
                }
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::{Boss, Item, Room};
    use std::collections::HashMap;

    fn level_with(rooms: Vec<Room>, required_items: usize) -> Level {
        Level {
            number: 1,
            name: "Test".to_string(),
            desc: String::new(),
            required_items,
            starting_room: "start".to_string(),
            boss_room: "boss".to_string(),
            boss: Boss {
                name: "Ogre".to_string(),
                desc: String::new(),
                health: 50,
                power: 20,
            },
            rooms: rooms.into_iter().map(|r| (r.id.clone(), r)).collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn connected_level_is_clean() {
        let mut start = Room::new("start", "Gate", "");
        start.add_connection("north", "boss");
        start.add_item(Item::new("Club", "", 5));
        let mut boss = Room::new("boss", "Lair", "");
        boss.add_connection("south", "start");

        assert!(validate_level(&level_with(vec![start, boss], 1)).is_empty());
    }

    #[test]
    fn reports_every_problem() {
        let mut start = Room::new("start", "Gate", "");
        start.add_connection("east", "nowhere");
        let boss = Room::new("boss", "Lair", "");

        let errors = validate_level(&level_with(vec![start, boss], 2));
        let text: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();

        assert!(text.iter().any(|m| m.contains("missing room 'nowhere'")));
        assert!(text.iter().any(|m| m.contains("only 0 items")));
        assert!(text.iter().any(|m| m.contains("not reachable")));
    }

    #[test]
    fn missing_start_and_boss_rooms() {
        let errors = validate_level(&level_with(vec![Room::new("hall", "Hall", "")], 0));
        assert!(errors.iter().any(|e| e.message.contains("start_room 'start'")));
        assert!(errors.iter().any(|e| e.message.contains("boss_room 'boss'")));
    }

    #[test]
    fn boss_must_start_alive() {
        let mut start = Room::new("start", "Gate", "");
        start.add_connection("north", "boss");
        let mut level = level_with(vec![start, Room::new("boss", "Lair", "")], 0);
        level.boss.health = 0;

        let errors = validate_level(&level);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("boss 'Ogre' must start with positive health"));
    }
}
