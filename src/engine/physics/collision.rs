use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision categories used to classify which pair of bodies touched
///
/// Each category owns a single bit so the categories of a contact pair can be
/// OR-ed together and compared against a known combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CollisionCategory {
    /// Not collidable (backdrop decoration)
    None = 0,

    /// The player's rocket
    Rocket = 0b001,

    /// A falling asteroid
    Asteroid = 0b010,

    /// The ground strip along the bottom edge
    Ground = 0b100,
}

impl CollisionCategory {
    /// Raw bit value of this category
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Recover a category from a single-bit mask
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::None),
            0b001 => Some(Self::Rocket),
            0b010 => Some(Self::Asteroid),
            0b100 => Some(Self::Ground),
            _ => None,
        }
    }

    /// Convert to rapier2d's InteractionGroups
    ///
    /// `filter` is the set of categories this body is allowed to touch.
    pub fn to_interaction_groups(self, filter: u32) -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(self.bits()),
            Group::from_bits_truncate(filter),
        )
    }
}

/// Combine categories into a mask
pub fn mask(categories: &[CollisionCategory]) -> u32 {
    categories.iter().fold(0, |acc, c| acc | c.bits())
}

/// What a begin-contact pair means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// An asteroid reached the ground
    GroundAsteroid,
    /// The rocket was hit by an asteroid
    RocketAsteroid,
    /// Any other pair
    Unrecognized,
}

impl ContactKind {
    /// Classify a pair by the OR of both categories
    pub fn classify(a: CollisionCategory, b: CollisionCategory) -> Self {
        let combined = a.bits() | b.bits();
        if combined == mask(&[CollisionCategory::Ground, CollisionCategory::Asteroid]) {
            Self::GroundAsteroid
        } else if combined == mask(&[CollisionCategory::Rocket, CollisionCategory::Asteroid]) {
            Self::RocketAsteroid
        } else {
            Self::Unrecognized
        }
    }
}

/// Two colliders started touching
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub collider1: ColliderHandle,
    pub collider2: ColliderHandle,
}

/// Queue for storing collision events during physics step
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(8))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get all collision events from this frame
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        // Separations carry no gameplay meaning
        if let rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) = event {
            self.push(CollisionEvent {
                collider1: h1,
                collider2: h2,
            });
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}
