use crate::engine::output::Output;
use crate::world;

const RULE_WIDTH: usize = 50;
const UNKNOWN_ITEM_EMOJI: &str = "❓";
const EMPTY_ROOM_ART: &str = "    ╔═══════════════╗
    ║               ║
    ║  Empty Room   ║
    ║               ║
    ╚═══════════════╝";

pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(format!("=== {} ===", room.name));
    out.say(room.desc.trim());
    render_art(out, room);

    if !room.items.is_empty() {
        out.say("You see:");
        for item in &room.items {
            out.say(format!("- {}: {}", item.label(), item.desc));
        }
    }

    if room.exits.is_empty() {
        out.exits("Possible exits: (none)");
    } else {
        let list = room
            .exits
            .iter()
            .map(|e| format!("- {}", capitalize(&e.direction)))
            .collect::<Vec<_>>()
            .join("\n");
        out.exits(format!("Possible exits:\n{}", list));
    }
}

pub fn render_inventory(out: &mut Output, player: &world::Player) {
    if player.inventory.is_empty() {
        out.say("Your inventory is empty.");
        return;
    }

    out.title("=== Inventory ===");
    for item in &player.inventory {
        out.say(format!(
            "- {}: {} (Power: {})",
            item.label(),
            item.desc,
            item.power
        ));
    }
    out.say(format!("Total Power: {}", player.total_power()));
    out.say(format!("Health: {}", player.health));
}

/// Every room of a level with its items and resolved connections.
pub fn render_preview(out: &mut Output, level: &world::Level) {
    let rule = "-".repeat(RULE_WIDTH);

    out.title("=== LEVEL PREVIEW ===");
    out.say(format!("Level {}: {}", level.number, level.name));
    out.say(rule.clone());
    out.say(format!(
        "Final Boss: {} (in {})",
        level.boss.name,
        level
            .rooms
            .get(&level.boss_room)
            .map(|r| r.name.as_str())
            .unwrap_or(level.boss_room.as_str())
    ));
    out.say(format!("Required items: {}", level.required_items));
    out.say(rule.clone());

    for room_id in level.room_ids() {
        let room = &level.rooms[room_id];

        out.title(format!("=== {} [{}] ===", room.name, room_id));
        out.say(room.desc.trim());
        render_art(out, room);

        if !room.items.is_empty() {
            out.say("Items in this room:");
            for item in &room.items {
                out.say(format!("- {} (Power: {})", item.label(), item.power));
                out.say(format!("  Description: {}", item.desc));
            }
        }

        out.say("Connections:");
        for exit in &room.exits {
            if let Some(target) = level.rooms.get(&exit.target) {
                out.say(format!("- {} -> {}", capitalize(&exit.direction), target.name));
            }
        }

        out.say(rule.clone());
    }
}

/// Room art (or the empty-room frame) with the decoration line under it.
fn render_art(out: &mut Output, room: &world::Room) {
    let art = room_art(room);
    out.art(art);

    let decoration = decoration_line(room);
    if !decoration.is_empty() {
        out.say(center_under_art(art, &decoration));
    }
}

fn room_art(room: &world::Room) -> &str {
    match room.art.as_deref() {
        Some(art) if !art.trim().is_empty() => art,
        _ => EMPTY_ROOM_ART,
    }
}

/// Theme decoration followed by the emoji of every item in the room.
fn decoration_line(room: &world::Room) -> String {
    let theme = room.theme.as_deref().unwrap_or("").trim();
    let items = room
        .items
        .iter()
        .map(|i| match i.emoji.as_deref().map(str::trim) {
            Some(e) if !e.is_empty() => e,
            _ => UNKNOWN_ITEM_EMOJI,
        })
        .collect::<Vec<_>>()
        .join(" ");

    match (theme.is_empty(), items.is_empty()) {
        (false, false) => format!("{} | {}", theme, items),
        (true, false) => items,
        _ => theme.to_string(),
    }
}

fn center_under_art(art: &str, line: &str) -> String {
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let padding = width.saturating_sub(line.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), line)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
