use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime level type used by the game loop.
pub struct Level {
    pub number: u32,
    pub name: String,
    pub desc: String,
    pub required_items: usize,
    pub starting_room: String,
    pub boss_room: String,
    pub boss: Boss,
    pub rooms: HashMap<String, Room>,
}

impl Level {
    /// Room ids in a stable order (starting room first, the rest sorted).
    pub fn room_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .rooms
            .keys()
            .map(|k| k.as_str())
            .filter(|k| *k != self.starting_room)
            .collect();
        ids.sort();
        if self.rooms.contains_key(&self.starting_room) {
            ids.insert(0, self.starting_room.as_str());
        }
        ids
    }

    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|r| r.items.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boss {
    pub name: String,
    pub desc: String,
    pub health: i32,
    pub power: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub power: u32,
    pub emoji: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, power: u32) -> Self {
        Item {
            name: name.into(),
            desc: desc.into(),
            power,
            emoji: None,
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Name prefixed with its emoji, if it has one.
    pub fn label(&self) -> String {
        match &self.emoji {
            Some(e) if !e.trim().is_empty() => format!("{} {}", e.trim(), self.name),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Debug, Clone, Default)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub art: Option<String>,
    pub theme: Option<String>,
    pub items: Vec<Item>,
    pub exits: Vec<Exit>,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            name: name.into(),
            desc: desc.into(),
            ..Default::default()
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item whose name matches, ignoring case.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.is_named(name))?;
        Some(self.items.remove(idx))
    }

    /// Directions are stored lower-cased; re-adding one replaces its target.
    pub fn add_connection(&mut self, direction: &str, target: impl Into<String>) {
        let direction = direction.trim().to_lowercase();
        let target = target.into();

        if let Some(exit) = self.exits.iter_mut().find(|e| e.direction == direction) {
            exit.target = target;
        } else {
            self.exits.push(Exit { direction, target });
        }
    }

    pub fn get_connection(&self, direction: &str) -> Option<&str> {
        let direction = direction.trim().to_lowercase();
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub health: i32,
    pub inventory: Vec<Item>,
    pub current_room_id: String,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32, start_room: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            health,
            inventory: Vec::new(),
            current_room_id: start_room.into(),
        }
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn remove_from_inventory(&mut self, name: &str) -> Option<Item> {
        let idx = self.inventory.iter().position(|i| i.is_named(name))?;
        Some(self.inventory.remove(idx))
    }

    /// Sum of item powers, saturating at `u32::MAX`.
    pub fn total_power(&self) -> u32 {
        self.inventory
            .iter()
            .fold(0u32, |total, i| total.saturating_add(i.power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connections_are_case_insensitive_and_replaceable() {
        let mut room = Room::new("hall", "Main Hall", "");
        room.add_connection("North", "throne");
        room.add_connection("down", "dungeon");

        assert_eq!(room.get_connection("NORTH"), Some("throne"));
        assert_eq!(room.get_connection("up"), None);

        room.add_connection("north", "boss");
        assert_eq!(room.get_connection("north"), Some("boss"));
        assert_eq!(room.exits.len(), 2);
        assert_eq!(room.exits[0].direction, "north");
    }

    #[test]
    fn remove_item_takes_first_match_only() {
        let mut room = Room::new("cellar", "Cellar", "");
        room.add_item(Item::new("Potion", "red", 8));
        room.add_item(Item::new("potion", "blue", 3));

        let taken = room.remove_item("POTION").map(|i| i.desc);
        assert_eq!(taken.as_deref(), Some("red"));
        assert_eq!(room.items.len(), 1);
        assert_eq!(room.items[0].desc, "blue");
        assert!(room.remove_item("sword").is_none());
    }

    #[test]
    fn total_power_tracks_inventory() {
        let mut player = Player::new("Aria", 100, "start");
        assert_eq!(player.total_power(), 0);

        player.add_to_inventory(Item::new("Sword", "", 15));
        player.add_to_inventory(Item::new("Shield", "", 10));
        assert_eq!(player.total_power(), 25);

        player.remove_from_inventory("sword");
        assert_eq!(player.total_power(), 10);
    }

    #[test]
    fn names_and_directions_match_beyond_ascii() {
        let mut room = Room::new("forge", "Forge", "");
        room.add_item(Item::new("Épée", "", 9));
        room.add_connection("Über", "attic");

        assert_eq!(room.get_connection("ÜBER"), Some("attic"));
        assert_eq!(room.get_connection("über"), Some("attic"));

        let mut player = Player::new("Aria", 100, "forge");
        let item = room.remove_item("épée").expect("lower-cased name matches");
        player.add_to_inventory(item);
        assert!(room.items.is_empty());
        assert!(player.remove_from_inventory("ÉPÉE").is_some());
    }

    #[test]
    fn total_power_saturates_instead_of_overflowing() {
        let mut player = Player::new("Aria", 100, "start");
        player.add_to_inventory(Item::new("a", "", 4_000_000_000));
        player.add_to_inventory(Item::new("b", "", 4_000_000_000));
        assert_eq!(player.total_power(), u32::MAX);

        player.remove_from_inventory("a");
        assert_eq!(player.total_power(), 4_000_000_000);
    }

    #[test]
    fn label_uses_emoji_when_present() {
        let mut item = Item::new("Bow", "", 14);
        assert_eq!(item.label(), "Bow");
        item.emoji = Some("🏹".to_string());
        assert_eq!(item.label(), "🏹 Bow");
    }
}
