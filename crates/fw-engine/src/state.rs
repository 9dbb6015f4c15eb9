//! Mutable simulation state for one session.

use std::collections::HashSet;

use fw_world::{GameObject, ObjectLocation, RoomId, WorldData};

use crate::clock::GameClock;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::inventory::{Inventory, ObjectKey};
use crate::narrator::Verbosity;
use crate::parser::resolve_object;
use crate::preferences::DisplayMode;
use crate::vitals::{Awakeness, Health};

/// Everything that changes while playing.
///
/// Objects and the inventory are private so that an object's location and
/// inventory membership can only change together: an object is carried
/// exactly when its location is [`ObjectLocation::Carried`].
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Room the player is in.
    pub current_room: RoomId,
    /// Description detail for revisited rooms.
    pub verbosity: Verbosity,
    /// Rooms whose full description has been shown.
    pub visited: HashSet<RoomId>,
    /// Time of day.
    pub clock: GameClock,
    /// Name of the active period of day, once one has been computed.
    pub current_period: Option<String>,
    /// Late-night countdown to forced sleep.
    pub awakeness: Awakeness,
    /// Player health.
    pub health: Health,
    /// Points earned.
    pub score: u32,
    /// Counted moves.
    pub moves: u32,
    /// Light or dark presentation.
    pub display_mode: DisplayMode,
    objects: Vec<GameObject>,
    inventory: Inventory,
}

impl WorldState {
    /// Fresh start-of-session state.
    ///
    /// Objects without a room start in the inventory, already counted as
    /// moved; their total weight must fit the configured capacity.
    pub fn new(world: &WorldData, config: &EngineConfig, display_mode: DisplayMode) -> EngineResult<Self> {
        let mut objects = world.objects.clone();
        let mut inventory = Inventory::new(config.inventory_max_weight);

        let carried: Vec<_> = objects
            .iter_mut()
            .enumerate()
            .filter(|(_, object)| object.location == ObjectLocation::Carried)
            .map(|(i, object)| {
                object.moved = true;
                (ObjectKey(i), object.inventory_space)
            })
            .collect();
        let weight: u32 = carried.iter().map(|(_, w)| *w).sum();
        for (key, w) in carried {
            if !inventory.try_add(key, w) {
                return Err(EngineError::InventoryOverCapacity {
                    weight,
                    max: config.inventory_max_weight,
                });
            }
        }

        Ok(Self {
            current_room: world.start_room.clone(),
            verbosity: Verbosity::default(),
            visited: HashSet::new(),
            clock: GameClock::new(config.start_hour),
            current_period: None,
            awakeness: Awakeness::new(config.awakeness_max),
            health: Health::new(config.start_health, config.max_health),
            score: 0,
            moves: 0,
            display_mode,
            objects,
            inventory,
        })
    }

    /// All objects, indexed by [`ObjectKey`].
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Look up an object by key.
    pub fn object(&self, key: ObjectKey) -> Option<&GameObject> {
        self.objects.get(key.0)
    }

    /// Objects lying in a room, in world-data order.
    pub fn objects_in<'a>(&'a self, room: &'a RoomId) -> impl Iterator<Item = (ObjectKey, &'a GameObject)> + 'a {
        self.objects
            .iter()
            .enumerate()
            .filter(move |(_, object)| object.location.is_in(room))
            .map(|(i, object)| (ObjectKey(i), object))
    }

    /// Carried objects in pickup order.
    pub fn carried(&self) -> impl Iterator<Item = (ObjectKey, &GameObject)> + '_ {
        self.inventory
            .keys()
            .filter_map(|key| self.object(key).map(|object| (key, object)))
    }

    /// The inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Resolve a target among the objects in the current room.
    pub fn find_in_room(&self, target: &str) -> Option<ObjectKey> {
        resolve_object(self.objects_in(&self.current_room), target)
    }

    /// Resolve a target among carried objects.
    pub fn find_carried(&self, target: &str) -> Option<ObjectKey> {
        resolve_object(self.carried(), target)
    }

    /// Move an object into the inventory if it fits. Returns whether it was taken.
    pub fn add_to_inventory(&mut self, key: ObjectKey) -> bool {
        let Some(object) = self.objects.get_mut(key.0) else {
            return false;
        };
        if !self.inventory.try_add(key, object.inventory_space) {
            return false;
        }
        object.location = ObjectLocation::Carried;
        object.moved = true;
        true
    }

    /// Put a carried object down in the current room. Returns whether it was carried.
    pub fn remove_from_inventory(&mut self, key: ObjectKey) -> bool {
        if !self.inventory.remove(key) {
            return false;
        }
        if let Some(object) = self.objects.get_mut(key.0) {
            object.location = ObjectLocation::Room(self.current_room.clone());
        }
        true
    }

    /// Put everything down in the current room, returning what was dropped in pickup order.
    pub fn drop_all(&mut self) -> Vec<ObjectKey> {
        let keys = self.inventory.take_all();
        for key in &keys {
            if let Some(object) = self.objects.get_mut(key.0) {
                object.location = ObjectLocation::Room(self.current_room.clone());
            }
        }
        keys
    }
}
