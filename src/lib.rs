//! Bumpy Dash - a side-scrolling obstacle-dodging platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (levels, spawning, physics, run state)
//! - `game`: `GameCore`, the command/tick/query surface over a run
//! - `persistence`: High score, completed levels and bonus unlock storage
//! - `config`: Data-driven game tuning
//! - `fx`: Cosmetic particles driven by game events
//! - `timers`: Run-generation gated deferred effects
//! - `platform`: Browser glue (LocalStorage, wasm bindings, input chords)

pub mod config;
pub mod error;
pub mod fx;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod timers;

pub use config::GameConfig;
pub use error::LevelError;
pub use game::{GameCore, Snapshot};
pub use persistence::{MemoryStore, PersistentProgress, ProgressStore, StoredValue};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the player (units/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set by a grounded jump
    pub const JUMP_POWER: f32 = -13.0;
    /// Vertical velocity set by touching or tapping an orb
    pub const ORB_IMPULSE: f32 = -15.0;

    /// Playfield geometry
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const GROUND_Y: f32 = 350.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Shrink applied to each side of the player box for fatal tests
    pub const HITBOX_INSET: f32 = 5.0;
    /// Extra reach around an orb that still counts as a tap
    pub const ORB_TAP_REACH: f32 = 20.0;
    /// Visual spin while airborne (radians/tick)
    pub const AIR_ROTATION_SPEED: f32 = 0.15;

    /// Entity dimensions
    pub const SPIKE_WIDTH: f32 = 30.0;
    pub const SPIKE_HEIGHT: f32 = 40.0;
    pub const TALL_SPIKE_HEIGHT: f32 = 80.0;
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_THICKNESS: f32 = 15.0;
    pub const ORB_RADIUS: f32 = 15.0;
    pub const ORB_ALTITUDE: f32 = 100.0;
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_ALTITUDE: f32 = 120.0;
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 35.0;
    pub const COLLECTIBLE_RADIUS: f32 = 15.0;

    /// Score awards
    pub const PASS_POINTS: u64 = 1;
    pub const ENEMY_PASS_POINTS: u64 = 2;
    pub const COIN_POINTS: u64 = 3;

    /// Coyote window from the improvements sketch (ticks)
    pub const SKETCH_COYOTE_TICKS: u32 = 6;
    /// Distance between endless-mode spawns
    pub const ENDLESS_SPACING: f32 = 300.0;
    /// Endless spikes are SPIKE_HEIGHT plus up to this much
    pub const ENDLESS_SPIKE_VARIANCE: f32 = 20.0;
    /// Endless-mode scroll speed (units/tick)
    pub const ENDLESS_SPEED: f32 = 6.0;
    /// How long banners stay up (ms)
    pub const BANNER_MS: f64 = 1500.0;

    /// Fixed simulation step (ms); one tick per 60 Hz frame
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Max ticks per frame (prevents spiral of death)
    pub const MAX_SUBSTEPS: u32 = 4;
}
