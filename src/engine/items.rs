use crate::engine::output::Output;
use crate::world;

/// Move the first item named `name` from the room into the inventory.
pub fn handle_take(
    out: &mut Output,
    room: &mut world::Room,
    player: &mut world::Player,
    name: &str,
) -> bool {
    let query = name.trim();
    if query.is_empty() {
        out.say("Take what?");
        return false;
    }

    match room.remove_item(query) {
        Some(item) => {
            log::debug!("took '{}' (power {}) from '{}'", item.name, item.power, room.id);
            out.say(format!("Added {} to your inventory.", item.label()));
            player.add_to_inventory(item);
            true
        }
        None => {
            out.say(format!("There is no {} here.", query));
            false
        }
    }
}

pub fn handle_drop(
    out: &mut Output,
    room: &mut world::Room,
    player: &mut world::Player,
    name: &str,
) -> bool {
    let query = name.trim();
    if query.is_empty() {
        out.say("Drop what?");
        return false;
    }

    match player.remove_from_inventory(query) {
        Some(item) => {
            log::debug!("dropped '{}' in '{}'", item.name, room.id);
            out.say(format!("You dropped {}.", item.name));
            room.add_item(item);
            true
        }
        None => {
            out.say(format!("You don't have {} in your inventory.", query));
            false
        }
    }
}
