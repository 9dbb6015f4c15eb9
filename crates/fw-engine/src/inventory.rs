//! Weight-limited inventory.

/// Index of an object in the session's object table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(pub(crate) usize);

impl ObjectKey {
    /// Position in the object table.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    key: ObjectKey,
    weight: u32,
}

/// Ordered list of carried objects whose total weight never exceeds capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Slot>,
    weight: u32,
    max_weight: u32,
}

impl Inventory {
    /// An empty inventory with the given capacity.
    pub fn new(max_weight: u32) -> Self {
        Self {
            slots: Vec::new(),
            weight: 0,
            max_weight,
        }
    }

    /// Whether an object of `weight` would fit right now.
    pub fn can_hold(&self, weight: u32) -> bool {
        self.weight
            .checked_add(weight)
            .is_some_and(|total| total <= self.max_weight)
    }

    /// Add an object if it fits. Returns whether it was added.
    pub fn try_add(&mut self, key: ObjectKey, weight: u32) -> bool {
        if self.contains(key) || !self.can_hold(weight) {
            return false;
        }
        self.slots.push(Slot { key, weight });
        self.weight += weight;
        true
    }

    /// Remove an object. Returns whether it was carried.
    pub fn remove(&mut self, key: ObjectKey) -> bool {
        if let Some(pos) = self.slots.iter().position(|slot| slot.key == key) {
            let slot = self.slots.remove(pos);
            self.weight -= slot.weight;
            true
        } else {
            false
        }
    }

    /// Empty the inventory, returning what was carried in order.
    pub fn take_all(&mut self) -> Vec<ObjectKey> {
        self.weight = 0;
        self.slots.drain(..).map(|slot| slot.key).collect()
    }

    /// Whether an object is carried.
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.slots.iter().any(|slot| slot.key == key)
    }

    /// Carried objects in pickup order.
    pub fn keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.slots.iter().map(|slot| slot.key)
    }

    /// Total carried weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Capacity.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Number of carried objects.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
