// Gameplay constants
//
// These are the authoritative defaults behind `GameConfig::default()`.
// Override any of them at runtime through `assets/game.toml`.

// ── Screen ───────────────────────────────────────────────────────────────────
pub const SCREEN_WIDTH: f32 = 414.0;
pub const SCREEN_HEIGHT: f32 = 736.0;

/// Scene points per physics meter (SpriteKit's convention)
pub const POINTS_PER_METER: f32 = 150.0;

// ── Difficulty ───────────────────────────────────────────────────────────────
/// Gravity at level 1, in m/s² (negative pulls down)
pub const INITIAL_GRAVITY: f32 = -3.0;
/// Amount subtracted from gravity on every level up
pub const GRAVITY_STEP: f32 = 0.5;
/// A level up happens every time the score reaches a multiple of this
pub const LEVEL_UP_EVERY: u32 = 5;

// ── Countdown ────────────────────────────────────────────────────────────────
pub const COUNTDOWN_START: u32 = 3;
pub const COUNTDOWN_INTERVAL_SECS: f32 = 1.0;

// ── Rocket ───────────────────────────────────────────────────────────────────
pub const ROCKET_SIZE: f32 = 100.0;
pub const BANK_ANGLE_DEGREES: f32 = 45.0;
pub const BANK_DURATION_SECS: f32 = 0.2;
pub const MOVE_DURATION_SECS: f32 = 0.4;
pub const UPRIGHT_DURATION_SECS: f32 = 0.5;

// ── Asteroid ─────────────────────────────────────────────────────────────────
pub const ASTEROID_SIZE: f32 = 60.0;
pub const SPAWN_MIN_X: f32 = 50.0;
pub const ASTEROID_REVOLUTION_SECS: f32 = 20.0;

// ── Backdrop ─────────────────────────────────────────────────────────────────
pub const MARS_SIZE: f32 = 80.0;
pub const MARS_REVOLUTION_SECS: f32 = 60.0;
pub const EARTH_SIZE: f32 = 30.0;
pub const EARTH_REVOLUTION_SECS: f32 = 50.0;
pub const GROUND_WIDTH: f32 = 10_000.0;
pub const GROUND_HEIGHT: f32 = 10.0;

// ── Draw order ───────────────────────────────────────────────────────────────
pub const Z_BACKDROP: f32 = 1.0;
pub const Z_ACTORS: f32 = 2.0;

// ── Assets ───────────────────────────────────────────────────────────────────
pub const ASSET_DIR: &str = "assets";
pub const CONFIG_FILE: &str = "game.toml";
