//! Lava Runner - simulation core of a tile-based 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, tile obstacles, level status)
//! - `config`: Run configuration (time step, seed, tick cap)
//! - `levels`: JSON level packs
//! - `error`: Crate error type

pub mod config;
pub mod error;
pub mod levels;
pub mod sim;

pub use config::SimConfig;
pub use error::SimError;
pub use levels::LevelPack;

/// Game configuration constants
pub mod consts {
    /// Default simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Tick cap for a single level run, so a level with no way to finish still stops
    pub const MAX_TICKS: u32 = 10_000;
    /// Grace period (in finish-delay units) between a terminal status and "finished"
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player hitbox and spawn offset (feet anchored to the spawn cell)
    pub const PLAYER_SIZE: (f32, f32) = (0.8, 1.5);
    pub const PLAYER_SPAWN_OFFSET: (f32, f32) = (0.0, -0.5);

    /// Coin hitbox, spawn offset and bobbing
    pub const COIN_SIZE: (f32, f32) = (0.6, 0.6);
    pub const COIN_SPAWN_OFFSET: (f32, f32) = (0.2, 0.1);
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Fireballs occupy exactly one tile
    pub const FIREBALL_SIZE: (f32, f32) = (1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: (f32, f32) = (2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: (f32, f32) = (0.0, 2.0);
    pub const FIRE_RAIN_SPEED: (f32, f32) = (0.0, 3.0);
}
