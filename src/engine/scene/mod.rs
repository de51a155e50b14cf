// Scene graph: sprites, their timed actions, and the HUD labels
//
// This is the render-side collaborator of the game. It keeps every sprite's
// transform current; drawing them is left to whatever presents the scene.

mod action;
mod label;
mod node;

pub use action::Action;
pub use label::Hud;
pub use node::{NodeId, SceneGraph, SpriteNode};
