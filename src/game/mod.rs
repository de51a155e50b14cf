// Game module - rocket dodge rules on top of the engine

pub mod difficulty;
pub mod events;
pub mod layout;
pub mod movement;
pub mod session;
pub mod spawn;
pub mod state;
pub mod textures;

pub use events::GameEvent;
pub use session::GameSession;
pub use textures::GameTextures;
