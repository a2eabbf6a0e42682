//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (actor list order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod level;
pub mod parser;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, ActorType, Behavior, ObstacleResponse};
pub use collision::{Obstacle, Rect, Tile, TileGrid};
pub use level::{Level, LevelStatus, Touch};
pub use parser::{ActorFactory, LevelParser, SymbolTable, default_symbols, extended_symbols};
pub use tick::{GameEvent, RunReport, run_level, tick};
pub use vector::Vector;
