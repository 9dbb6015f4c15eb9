//! Message templates for narration.

use fw_world::{Direction, GameObject, Room};

use super::config::Verbosity;
use crate::clock::GameClock;
use crate::preferences::DisplayMode;

/// Prompt for `take` with no target.
pub const TAKE_WHAT: &str = "What would you like to take?";
/// Prompt for `drop` with no target.
pub const DROP_WHAT: &str = "What would you like to drop?";
/// Capacity refusal.
pub const CANNOT_CARRY_MORE: &str = "You can't carry any more.";
/// `take all` in a room with nothing carryable.
pub const NOTHING_TO_TAKE: &str = "There is nothing here to take.";
/// Nothing is carried.
pub const EMPTY_HANDED: &str = "You are empty-handed.";
/// Heading for the inventory listing.
pub const CARRYING: &str = "You are carrying:";
/// Heading for moved objects in a room.
pub const ON_THE_GROUND: &str = "On the ground is:";
/// Response to `wait`.
pub const TIME_PASSES: &str = "Time passes.";
/// `sleep` while fully rested.
pub const NOT_TIRED: &str = "You are nowhere near tired.";
/// Voluntary sleep.
pub const FALL_ASLEEP: &str =
    "You lay down, resting your head on the softest thing nearby, and after a short while, you drift off.";
/// Confirmation for `clear`.
pub const SCREEN_CLEARED: &str = "Screen cleared.";
/// Confirmation for `restart`.
pub const GAME_RESTARTED: &str = "Game restarted.";
/// Fallback when the unknown-command pool is empty.
pub const NOT_UNDERSTOOD: &str = "I don't understand that.";
/// Farewell for `quit`.
pub const GOODBYE: &str = "Goodbye!";
/// Heading for `help`.
pub const HELP_HEADING: &str = "Commands:";

/// Failure text when no exit leads in `direction`. A room-specific override wins.
pub fn no_exit(room: &Room, direction: Direction) -> String {
    if let Some(custom) = room.exit_error(direction) {
        return custom.to_string();
    }
    match (direction, room.outside) {
        (Direction::Up, true) => "There is no way into the sky.".to_string(),
        (Direction::Up, false) => format!("There is just the ceiling of the {} there.", room.name),
        (Direction::Down, true) => format!("There is only the ground of the {} there.", room.name),
        (Direction::Down, false) => format!("There is only the {}'s floor there.", room.name),
        (_, true) => "You can't go that way.".to_string(),
        (_, false) => "There is a wall there.".to_string(),
    }
}

/// "Lantern: taken."
pub fn taken(object: &GameObject) -> String {
    format!("{}: taken.", capitalize(&object.name))
}

/// "Anvil: cannot take."
pub fn cannot_take_item(object: &GameObject) -> String {
    format!("{}: cannot take.", capitalize(&object.name))
}

/// "Lantern: dropped."
pub fn dropped(object: &GameObject) -> String {
    format!("{}: dropped.", capitalize(&object.name))
}

/// Target not present in the room.
pub fn not_here(target: &str) -> String {
    format!("There is no {target} here.")
}

/// Target present but fixed in place.
pub fn cannot_take(target: &str) -> String {
    format!("You cannot take the {target}.")
}

/// Target not carried.
pub fn not_carried(target: &str) -> String {
    format!("You don't have the {target}.")
}

/// Listing entry, "a brass lantern."
pub fn list_item(object: &GameObject) -> String {
    format!("{}.", object.with_article_name())
}

/// Score report.
pub fn score(score: u32, moves: u32) -> String {
    format!("Your score is {score}, in a game with {moves} moves.")
}

/// Verbosity confirmation.
pub fn verbosity(verbosity: Verbosity) -> String {
    format!("{verbosity} descriptions on.")
}

/// Display mode confirmation.
pub fn mode_switched(mode: DisplayMode) -> String {
    format!("Switched to {mode} mode.")
}

/// "The current time is 8:15."
pub fn time_report(clock: &GameClock) -> String {
    format!("The current time is {clock}.")
}

/// "It is currently Morning."
pub fn period_report(period: &str) -> String {
    format!("It is currently {period}.")
}

/// Help entries, one per command group.
pub fn help_lines() -> Vec<String> {
    [
        "n, s, e, w, ne, nw, se, sw, u, d: move (or north, south, up ...)",
        "get <item> / get all: pick things up (take, pick up)",
        "drop <item> / drop all: put things down (dump)",
        "i: list what you carry (inventory, inv)",
        "look: describe the room in full (l)",
        "wait, sleep, time, diagnose, score",
        "brief / verbose: room description detail",
        "mode: toggle light and dark display",
        "clear, restart, help, quit",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
