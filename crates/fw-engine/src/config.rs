//! Configuration for a game session.

/// Tuning constants for the simulation.
///
/// Defaults are the canonical balance: a move takes a quarter hour, sleep
/// takes seven and a half, and health regenerates 0.1 per 0.15 hours.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// RNG seed for message selection. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Clock hour when a session starts.
    pub start_hour: f64,
    /// Hours that pass per counted move.
    pub move_hours: f64,
    /// Hours that pass while sleeping.
    pub sleep_hours: f64,
    /// Health regained per hour of elapsed time.
    pub regen_per_hour: f64,
    /// From this hour on, every move wears down awakeness.
    pub late_night_hour: f64,
    /// Awakeness when fully rested.
    pub awakeness_max: u32,
    /// Total object weight the player can carry.
    pub inventory_max_weight: u32,
    /// Health at the start of a session.
    pub start_health: f64,
    /// Health ceiling.
    pub max_health: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_hour: 8.0,
            move_hours: 0.25,
            sleep_hours: 7.5,
            regen_per_hour: 0.1 / 0.15,
            late_night_hour: 21.0,
            awakeness_max: 10,
            inventory_max_weight: 10,
            start_health: 5.0,
            max_health: 10.0,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed for reproducible message selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting clock hour (wrapped into 0..24).
    pub fn with_start_hour(mut self, hour: f64) -> Self {
        self.start_hour = hour.rem_euclid(24.0);
        self
    }

    /// Set the hours that pass per move.
    pub fn with_move_hours(mut self, hours: f64) -> Self {
        self.move_hours = hours.max(0.0);
        self
    }

    /// Set the hours that pass while sleeping.
    pub fn with_sleep_hours(mut self, hours: f64) -> Self {
        self.sleep_hours = hours.max(0.0);
        self
    }

    /// Set the inventory capacity.
    pub fn with_inventory_max_weight(mut self, max: u32) -> Self {
        self.inventory_max_weight = max;
        self
    }

    /// Set the full awakeness value (at least 1).
    pub fn with_awakeness_max(mut self, max: u32) -> Self {
        self.awakeness_max = max.max(1);
        self
    }

    /// Set starting and maximum health. Start is clamped to `0..=max`.
    pub fn with_health(mut self, start: f64, max: f64) -> Self {
        self.max_health = max.max(0.0);
        self.start_health = start.clamp(0.0, self.max_health);
        self
    }
}
