// Engine module - scene, physics, input and timing

pub mod assets;
pub mod clock;
pub mod input;
pub mod physics;
pub mod scene;
pub mod timer;
pub mod world;
