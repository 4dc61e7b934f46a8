use serde::Deserialize;
use std::collections::HashMap;

use super::error::LevelError;
use super::model::{Boss, Item, Level, Room};
use super::validator::validate_level;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct LevelFile {
    level: LevelHeader,
    boss: BossConfig,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct LevelHeader {
    number: u32,
    name: String,
    #[serde(default)]
    desc: String,
    required_items: usize,
    #[serde(default = "default_start_room")]
    start_room: String,
    #[serde(default = "default_boss_room")]
    boss_room: String,
}

#[derive(Deserialize)]
struct BossConfig {
    name: String,
    #[serde(default)]
    desc: String,
    health: i32,
    power: i32,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    art: Option<String>,
    #[serde(default)]
    theme: Option<String>,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    power: u32,
    #[serde(default)]
    emoji: Option<String>,
}

fn default_start_room() -> String {
    "start".to_string()
}

fn default_boss_room() -> String {
    "boss".to_string()
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Parse and validate a level definition.
pub fn load_level_from_str(contents: &str) -> Result<Level, LevelError> {
    let level_file: LevelFile = toml::from_str(contents)?;
    let level = build_level(level_file)?;

    let errors = validate_level(&level);
    if !errors.is_empty() {
        for e in &errors {
            log::warn!("level {}: {}", level.number, e);
        }
        return Err(LevelError::Invalid(errors));
    }

    log::debug!(
        "built level {} '{}' with {} rooms and {} items",
        level.number,
        level.name,
        level.rooms.len(),
        level.item_count()
    );
    Ok(level)
}

fn build_level(file: LevelFile) -> Result<Level, LevelError> {
    if file.level.start_room.trim().is_empty() {
        return Err(LevelError::Malformed(
            "level.start_room may not be empty".to_string(),
        ));
    }

    let mut rooms: HashMap<String, Room> = HashMap::new();

    for room_cfg in file.room {
        if room_cfg.id.trim().is_empty() {
            return Err(LevelError::Malformed(format!(
                "room '{}' has an empty id",
                room_cfg.name
            )));
        }
        if rooms.contains_key(&room_cfg.id) {
            return Err(LevelError::Malformed(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        let mut room = Room::new(
            room_cfg.id.clone(),
            room_cfg.name,
            normalize_multiline_desc(&room_cfg.desc),
        );
        room.art = room_cfg.art.as_deref().and_then(normalize_art);
        room.theme = room_cfg
            .theme
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        for exit in room_cfg.exit {
            room.add_connection(&exit.direction, exit.target.trim());
        }

        for ic in room_cfg.item {
            room.add_item(Item {
                name: ic.name.trim().to_string(),
                desc: normalize_multiline_desc(&ic.desc),
                power: ic.power,
                emoji: ic.emoji.filter(|e| !e.trim().is_empty()),
            });
        }

        rooms.insert(room_cfg.id, room);
    }

    Ok(Level {
        number: file.level.number,
        name: file.level.name,
        desc: normalize_multiline_desc(&file.level.desc),
        required_items: file.level.required_items,
        starting_room: file.level.start_room,
        boss_room: file.level.boss_room,
        boss: Boss {
            name: file.boss.name,
            desc: normalize_multiline_desc(&file.boss.desc),
            health: file.boss.health,
            power: file.boss.power,
        },
        rooms,
    })
}

/// Wrapped lines join with a space, one blank line becomes a newline,
/// two or more become a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}

/// Art keeps its indentation; only surrounding blank lines and trailing
/// spaces are dropped.
fn normalize_art(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw.lines().map(|l| l.trim_end()).collect();
    let first = lines.iter().position(|l| !l.is_empty())?;
    let last = lines.iter().rposition(|l| !l.is_empty())?;
    Some(lines[first..=last].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [level]
        number = 9
        name = "Test Cellar"
        required_items = 1

        [boss]
        name = "Rat King"
        health = 30
        power = 12

        [[room]]
        id = "start"
        name = "Cellar Stairs"
        desc = """
            Narrow steps lead
            down into the dark.
        """

        [[room.exit]]
        direction = "Down"
        target = "boss"

        [[room.item]]
        name = " Torch "
        desc = "It flickers."
        power = 4

        [[room]]
        id = "boss"
        name = "Rat Nest"
        art = '''

            (\_/)
            (o.o)

        '''

        [[room.exit]]
        direction = "up"
        target = "start"
    "#;

    #[test]
    fn loads_minimal_level_with_defaults() {
        let level = load_level_from_str(MINIMAL).expect("level");

        assert_eq!(level.number, 9);
        assert_eq!(level.starting_room, "start");
        assert_eq!(level.boss_room, "boss");
        assert_eq!(level.boss.power, 12);

        let start = &level.rooms["start"];
        assert_eq!(start.desc, "Narrow steps lead down into the dark.");
        assert_eq!(start.get_connection("down"), Some("boss"));
        assert_eq!(start.items[0].name, "Torch");
        assert_eq!(start.items[0].power, 4);

        let art = level.rooms["boss"].art.as_deref().expect("art");
        assert!(art.starts_with("            (\\_/)"));
        assert_eq!(art.lines().count(), 2);
    }

    #[test]
    fn duplicate_room_ids_are_rejected() {
        let doubled = format!(
            "{}\n[[room]]\nid = \"start\"\nname = \"Again\"\n",
            MINIMAL
        );
        match load_level_from_str(&doubled) {
            Err(LevelError::Malformed(msg)) => assert!(msg.contains("start")),
            other => panic!("expected Malformed, got {:?}", other.err()),
        }
    }

    #[test]
    fn dangling_exit_fails_validation() {
        let broken = MINIMAL.replace("target = \"start\"", "target = \"attic\"");
        match load_level_from_str(&broken) {
            Err(LevelError::Invalid(errors)) => {
                assert!(errors.iter().any(|e| e.message.contains("attic")));
            }
            other => panic!("expected Invalid, got {:?}", other.err()),
        }
    }

    #[test]
    fn missing_boss_table_is_a_parse_error() {
        let text = MINIMAL.replace("[boss]", "[not_boss]");
        assert!(matches!(
            load_level_from_str(&text),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn normalize_keeps_paragraphs() {
        let raw = "one\ntwo\n\nthree\n\n\nfour";
        assert_eq!(normalize_multiline_desc(raw), "one two\nthree\n\nfour");
    }
}
