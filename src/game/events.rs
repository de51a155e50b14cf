// Events the host loop feeds into a game session

use crate::engine::world::SceneContact;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Begin a round (ignored while one is running)
    Start,
    /// End the current round
    Stop,
    /// One countdown interval elapsed
    CountdownTick,
    /// Two bodies started touching
    Contact(SceneContact),
    /// The player tapped a point in the scene
    MoveTo(Vec2),
}
