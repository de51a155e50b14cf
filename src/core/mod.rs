// Shared helpers used by the engine and the game

pub mod math;
pub mod rect;

pub use rect::Rect;
