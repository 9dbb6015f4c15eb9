//! Game session: parsing, dispatch and the simulation loop.
//!
//! A [`GameSession`] owns the world data, the mutable [`WorldState`] and an
//! output buffer. Each call to [`GameSession::process`] runs one command to
//! completion and returns the responses it produced.
//!
//! Counted moves (movement, take, drop, look, wait) advance the clock,
//! regenerate health and may change the period of day. Past the late-night
//! hour each move also wears down awakeness; when it runs out the player
//! falls asleep on the spot.

use fw_world::{Direction, GameObject, Room, WorldData};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::inventory::ObjectKey;
use crate::narrator::{Verbosity, templates};
use crate::output::{Response, StatusLine};
use crate::parser::{Command, parse_input};
use crate::preferences::{MemoryPreferences, PreferenceStore};
use crate::random::{Chooser, RandomChooser, pick};
use crate::state::WorldState;

/// A single-player game session.
pub struct GameSession {
    world: WorldData,
    config: EngineConfig,
    state: WorldState,
    chooser: Box<dyn Chooser>,
    preferences: Box<dyn PreferenceStore>,
    output: Vec<Response>,
    finished: bool,
}

impl GameSession {
    /// Create a session over validated world data.
    ///
    /// Uses an RNG seeded from `config.seed` and an in-memory preference store.
    pub fn new(world: WorldData, config: EngineConfig) -> EngineResult<Self> {
        world.validate()?;
        let preferences = MemoryPreferences::default();
        let state = WorldState::new(&world, &config, preferences.load_mode())?;
        Ok(Self {
            chooser: Box::new(RandomChooser::from_seed(config.seed)),
            preferences: Box::new(preferences),
            world,
            config,
            state,
            output: Vec::new(),
            finished: false,
        })
    }

    /// Replace the source of random message choices.
    pub fn with_chooser(mut self, chooser: impl Chooser + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Replace the preference store and adopt its stored display mode.
    pub fn with_preferences(mut self, preferences: impl PreferenceStore + 'static) -> Self {
        self.state.display_mode = preferences.load_mode();
        self.preferences = Box::new(preferences);
        self
    }

    /// The world data.
    pub fn world(&self) -> &WorldData {
        &self.world
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The simulation state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Mutable access to the simulation state.
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// Whether the player has quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Values for a status line beside the prompt.
    pub fn status(&self) -> StatusLine {
        StatusLine {
            score: self.state.score,
            moves: self.state.moves,
            health: self.state.health.whole(),
            period: self.state.current_period.clone(),
            time: self.state.clock.to_string(),
            mode: self.state.display_mode,
        }
    }

    /// Welcome the player and describe the starting room.
    pub fn start(&mut self) -> EngineResult<Vec<Response>> {
        self.begin()?;
        Ok(self.drain_output())
    }

    /// Run one line of player input. Blank input does nothing.
    pub fn process(&mut self, input: &str) -> EngineResult<Vec<Response>> {
        let Some(parsed) = parse_input(input) else {
            return Ok(Vec::new());
        };
        debug!(verb = %parsed.verb, args = ?parsed.args, "normalized command");
        self.dispatch(&parsed.verb, &parsed.args)?;
        Ok(self.drain_output())
    }

    /// Run the command registered for a canonical verb, or the unknown-command response.
    pub fn dispatch(&mut self, verb: &str, args: &[String]) -> EngineResult<()> {
        match Command::from_verb(verb) {
            Some(command) => {
                debug!(?command, "dispatching");
                self.execute(command, args)
            }
            None => {
                debug!(verb, "unknown verb");
                self.do_unknown();
                Ok(())
            }
        }
    }

    /// Execute a resolved command.
    pub fn execute(&mut self, command: Command, args: &[String]) -> EngineResult<()> {
        match command {
            Command::Move { direction } => self.attempt_move(direction),
            Command::Get => self.do_take(args),
            Command::Drop => self.do_drop(args),
            Command::Inventory => {
                self.do_inventory();
                Ok(())
            }
            Command::Look => {
                self.display_room(true)?;
                self.register_move()
            }
            Command::Time => {
                self.do_time();
                Ok(())
            }
            Command::Wait => {
                self.say(templates::TIME_PASSES);
                self.register_move()
            }
            Command::Sleep => self.do_sleep(),
            Command::Diagnose => {
                self.say(self.state.health.band().message());
                Ok(())
            }
            Command::Score => {
                self.say(templates::score(self.state.score, self.state.moves));
                Ok(())
            }
            Command::Brief => {
                self.set_verbosity(Verbosity::Brief);
                Ok(())
            }
            Command::Verbose => {
                self.set_verbosity(Verbosity::Verbose);
                self.display_room(true)
            }
            Command::Mode => {
                self.do_mode();
                Ok(())
            }
            Command::Clear => {
                self.output.push(Response::Clear);
                self.say(templates::SCREEN_CLEARED);
                Ok(())
            }
            Command::Restart => self.do_restart(),
            Command::Help => {
                self.output
                    .push(Response::listing(templates::HELP_HEADING, templates::help_lines()));
                Ok(())
            }
            Command::Quit => {
                self.say(templates::GOODBYE);
                self.finished = true;
                Ok(())
            }
        }
    }

    /// Take the exit in `direction`, or explain why there is none.
    pub fn attempt_move(&mut self, direction: Direction) -> EngineResult<()> {
        let room = self.current_room()?;
        let Some(target) = room.exit(direction).cloned() else {
            let message = templates::no_exit(room, direction);
            self.say(message);
            return Ok(());
        };
        if self.world.room(&target).is_none() {
            return Err(EngineError::RoomNotFound(target));
        }

        debug!(from = %self.state.current_room, to = %target, %direction, "moving");
        self.state.current_room = target;
        self.display_room(false)?;
        self.register_move()
    }

    /// Count a move and let a move's worth of time pass.
    pub fn register_move(&mut self) -> EngineResult<()> {
        self.state.moves += 1;
        debug!(moves = self.state.moves, hour = self.state.clock.hour(), "move registered");
        if self.state.clock.hour() >= self.config.late_night_hour {
            self.update_awakeness()?;
        }
        self.pass_time(self.config.move_hours);
        Ok(())
    }

    /// Advance the clock, regenerate health and recompute the period.
    pub fn pass_time(&mut self, hours: f64) {
        self.state.clock.advance(hours);
        self.state.health.regenerate(hours, self.config.regen_per_hour);
        self.update_period();
    }

    /// Wear down awakeness by one; fall asleep when it runs out.
    pub fn update_awakeness(&mut self) -> EngineResult<()> {
        let remaining = self.state.awakeness.decrement();
        debug!(remaining, "awakeness decreased");
        if let Some(message) = self.world.awakeness_message(remaining) {
            self.output.push(Response::text(message));
        }
        if self.state.awakeness.is_exhausted() {
            info!(hour = self.state.clock.hour(), "forced sleep");
            self.reset_awakeness()?;
        }
        Ok(())
    }

    /// Sleep: restore awakeness, pass the night and wake to a full room description.
    pub fn reset_awakeness(&mut self) -> EngineResult<()> {
        self.state.awakeness.reset();
        self.pass_time(self.config.sleep_hours);
        if let Some(message) = pick(&mut *self.chooser, &self.world.wake_up_messages) {
            self.output.push(Response::text(message));
        }
        self.display_room(true)
    }

    /// Announce a new period of day if the clock has entered one.
    pub fn update_period(&mut self) {
        let hour = self.state.clock.hour();
        let Some(period) = self.world.time_periods.active_at(hour) else {
            return;
        };
        if self.state.current_period.as_deref() == Some(period.name.as_str()) {
            return;
        }
        info!(period = %period.name, hour, "period changed");
        self.state.current_period = Some(period.name.clone());
        self.output.push(Response::text(period.message.clone()));
    }

    /// Describe the current room.
    ///
    /// The full description is shown on a first visit, in verbose mode, or
    /// when forced. Objects that were never moved show their own line;
    /// moved ones are gathered into a single ground listing.
    pub fn display_room(&mut self, force_verbose: bool) -> EngineResult<()> {
        let id = self.state.current_room.clone();
        let room = self
            .world
            .room(&id)
            .ok_or_else(|| EngineError::RoomNotFound(id.clone()))?;
        self.output.push(Response::text(room.name.clone()));

        let first_visit = !self.state.visited.contains(&id);
        if first_visit || force_verbose || self.state.verbosity == Verbosity::Verbose {
            if !room.description.is_empty() {
                self.output.push(Response::text(room.description.clone()));
            }
            self.state.visited.insert(id.clone());
        }

        let mut ground = Vec::new();
        for (_, object) in self.state.objects_in(&id) {
            if object.description_embedded {
                continue;
            }
            if object.moved {
                ground.push(templates::list_item(object));
            } else {
                self.output.push(Response::text(object.description_initial.clone()));
            }
        }
        if !ground.is_empty() {
            self.output.push(Response::listing(templates::ON_THE_GROUND, ground));
        }
        Ok(())
    }

    fn begin(&mut self) -> EngineResult<()> {
        info!(room = %self.state.current_room, hour = self.state.clock.hour(), "session started");
        let welcome: Vec<Response> = self
            .world
            .welcome_messages
            .iter()
            .map(|line| Response::text(line.as_str()))
            .collect();
        self.output.extend(welcome);
        self.update_period();
        self.display_room(false)
    }

    fn do_take(&mut self, args: &[String]) -> EngineResult<()> {
        let Some(target) = joined(args) else {
            self.say(templates::TAKE_WHAT);
            return Ok(());
        };
        if target == "all" {
            return self.take_all();
        }

        let Some(key) = self.state.find_in_room(&target) else {
            self.say(templates::not_here(&target));
            return Ok(());
        };
        if !self.state.object(key).is_some_and(|o| o.carryable) {
            self.say(templates::cannot_take(&target));
            return Ok(());
        }
        if !self.state.add_to_inventory(key) {
            self.say(templates::CANNOT_CARRY_MORE);
            return Ok(());
        }
        let message = object_message(&self.state, key, templates::taken);
        self.say(message);
        self.register_move()
    }

    fn take_all(&mut self) -> EngineResult<()> {
        let keys: Vec<ObjectKey> = self
            .state
            .objects_in(&self.state.current_room)
            .filter(|(_, object)| object.carryable)
            .map(|(key, _)| key)
            .collect();

        if keys.is_empty() {
            self.say(templates::NOTHING_TO_TAKE);
        } else {
            let lines = keys
                .into_iter()
                .map(|key| {
                    let render: fn(&GameObject) -> String = if self.state.add_to_inventory(key) {
                        templates::taken
                    } else {
                        templates::cannot_take_item
                    };
                    object_message(&self.state, key, render)
                })
                .collect();
            self.output.push(Response::items(lines));
        }
        self.register_move()
    }

    fn do_drop(&mut self, args: &[String]) -> EngineResult<()> {
        let Some(target) = joined(args) else {
            self.say(templates::DROP_WHAT);
            return Ok(());
        };
        if target == "all" {
            if self.state.inventory().is_empty() {
                self.say(templates::EMPTY_HANDED);
                return self.register_move();
            }
            let lines = self
                .state
                .drop_all()
                .into_iter()
                .map(|key| object_message(&self.state, key, templates::dropped))
                .collect();
            self.output.push(Response::items(lines));
            return self.register_move();
        }

        match self.state.find_carried(&target) {
            Some(key) => {
                self.state.remove_from_inventory(key);
                let message = object_message(&self.state, key, templates::dropped);
                self.say(message);
                self.register_move()
            }
            None => {
                self.say(templates::not_carried(&target));
                Ok(())
            }
        }
    }

    fn do_inventory(&mut self) {
        if self.state.inventory().is_empty() {
            self.say(templates::EMPTY_HANDED);
            return;
        }
        let items = self
            .state
            .carried()
            .map(|(_, object)| templates::list_item(object))
            .collect();
        self.output.push(Response::listing(templates::CARRYING, items));
    }

    fn do_time(&mut self) {
        self.say(templates::time_report(&self.state.clock));
        if let Some(period) = &self.state.current_period {
            self.output.push(Response::text(templates::period_report(period)));
        }
    }

    fn do_sleep(&mut self) -> EngineResult<()> {
        if self.state.awakeness.is_full() {
            self.say(templates::NOT_TIRED);
            return Ok(());
        }
        info!(awakeness = self.state.awakeness.value(), "going to sleep");
        self.say(templates::FALL_ASLEEP);
        self.reset_awakeness()
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.state.verbosity = verbosity;
        self.say(templates::verbosity(verbosity));
    }

    fn do_mode(&mut self) {
        let mode = self.state.display_mode.toggled();
        self.state.display_mode = mode;
        if let Err(e) = self.preferences.save_mode(mode) {
            warn!(error = %e, "failed to save display mode");
        }
        self.say(templates::mode_switched(mode));
    }

    fn do_restart(&mut self) -> EngineResult<()> {
        info!("restarting session");
        self.output.push(Response::Clear);
        self.say(templates::GAME_RESTARTED);
        self.state = WorldState::new(&self.world, &self.config, self.state.display_mode)?;
        self.finished = false;
        self.begin()
    }

    fn do_unknown(&mut self) {
        let message = pick(&mut *self.chooser, &self.world.responses)
            .unwrap_or(templates::NOT_UNDERSTOOD)
            .to_string();
        self.say(message);
    }

    fn current_room(&self) -> EngineResult<&Room> {
        self.world
            .room(&self.state.current_room)
            .ok_or_else(|| EngineError::RoomNotFound(self.state.current_room.clone()))
    }

    fn say(&mut self, text: impl Into<String>) {
        self.output.push(Response::text(text));
    }

    fn drain_output(&mut self) -> Vec<Response> {
        std::mem::take(&mut self.output)
    }
}

fn object_message(state: &WorldState, key: ObjectKey, render: fn(&GameObject) -> String) -> String {
    state.object(key).map(render).unwrap_or_default()
}

fn joined(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}
