// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::presets;
pub use collision::{CollisionCategory, ContactKind};
pub use world::{PhysicsWorld, RigidBodyHandle};
