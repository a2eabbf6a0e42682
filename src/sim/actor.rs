//! Actors: every moving or collectible entity in a level
//!
//! An actor is a box (`pos`, `size`) with a velocity and a behavior. The
//! behavior decides what `act` does each tick and which type tag the actor
//! reports to the level.

use std::f32::consts::TAU;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, TileGrid};
use super::vector::Vector;
use crate::consts::*;
use crate::error::{SimError, SimResult};

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Instance identity. Two actors are "the same" iff their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Type tag reported to the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Coin => "coin",
            ActorType::Fireball => "fireball",
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a fireball does when its next step would hit an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleResponse {
    /// Reverse velocity and stay put this tick
    Bounce,
    /// Jump back to where it spawned
    Reset { spawn: Vector },
}

/// Per-variant state and tick rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Plain actor, does nothing
    Static,
    /// Inert; `spawn` is the grid cell it was placed on
    Player { spawn: Vector },
    /// Bobs around a fixed anchor with phase `spring`
    Coin { anchor: Vector, spring: f32 },
    /// Moves linearly, one-step lookahead against the tile grid
    Fireball { on_obstacle: ObstacleResponse },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    id: ActorId,
    pub pos: Vector,
    pub size: Vector,
    pub speed: Vector,
    behavior: Behavior,
}

impl Actor {
    /// Plain actor with explicit geometry.
    ///
    /// Size components must be finite and non-negative; position and speed
    /// must be finite.
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> SimResult<Self> {
        if !pos.is_finite() {
            return Err(SimError::InvalidGeometry { what: "position must be finite" });
        }
        if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
            return Err(SimError::InvalidGeometry {
                what: "size must be finite and non-negative",
            });
        }
        if !speed.is_finite() {
            return Err(SimError::InvalidGeometry { what: "speed must be finite" });
        }
        Ok(Self::with_behavior(pos, size, speed, Behavior::Static))
    }

    fn with_behavior(pos: Vector, size: Vector, speed: Vector, behavior: Behavior) -> Self {
        Self {
            id: ActorId::next(),
            pos,
            size,
            speed,
            behavior,
        }
    }

    /// Player standing on `spawn`; the hitbox pokes half a tile above the cell.
    pub fn player(spawn: Vector) -> Self {
        Self::with_behavior(
            spawn.plus(PLAYER_SPAWN_OFFSET.into()),
            PLAYER_SIZE.into(),
            Vector::ZERO,
            Behavior::Player { spawn },
        )
    }

    /// Coin centered-ish in `spawn` with a random starting phase.
    pub fn coin<R: Rng>(spawn: Vector, rng: &mut R) -> Self {
        let anchor = spawn.plus(COIN_SPAWN_OFFSET.into());
        let spring = rng.random_range(0.0..TAU);
        Self::with_behavior(
            anchor,
            COIN_SIZE.into(),
            Vector::ZERO,
            Behavior::Coin { anchor, spring },
        )
    }

    /// Bouncing fireball with an arbitrary velocity
    pub fn fireball(pos: Vector, speed: Vector) -> Self {
        Self::with_behavior(
            pos,
            FIREBALL_SIZE.into(),
            speed,
            Behavior::Fireball { on_obstacle: ObstacleResponse::Bounce },
        )
    }

    pub fn horizontal_fireball(pos: Vector) -> Self {
        Self::fireball(pos, HORIZONTAL_FIREBALL_SPEED.into())
    }

    pub fn vertical_fireball(pos: Vector) -> Self {
        Self::fireball(pos, VERTICAL_FIREBALL_SPEED.into())
    }

    /// Falls straight down and restarts from `spawn` on any obstacle
    pub fn fire_rain(spawn: Vector) -> Self {
        Self::with_behavior(
            spawn,
            FIREBALL_SIZE.into(),
            FIRE_RAIN_SPEED.into(),
            Behavior::Fireball { on_obstacle: ObstacleResponse::Reset { spawn } },
        )
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn actor_type(&self) -> ActorType {
        match self.behavior {
            Behavior::Static => ActorType::Actor,
            Behavior::Player { .. } => ActorType::Player,
            Behavior::Coin { .. } => ActorType::Coin,
            Behavior::Fireball { .. } => ActorType::Fireball,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.bounds().left()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds().top()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.bounds().right()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bounds().bottom()
    }

    /// Strict box overlap with another actor. An actor never intersects itself.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        self.id != other.id && self.bounds().overlaps(&other.bounds())
    }

    /// Advance this actor by `dt` against the static geometry in `grid`
    pub fn act(&mut self, dt: f32, grid: &TileGrid) {
        match self.behavior {
            Behavior::Static | Behavior::Player { .. } => {}
            Behavior::Coin { anchor, ref mut spring } => {
                *spring += COIN_SPRING_SPEED * dt;
                let wobble = Vector::new(0.0, spring.sin() * COIN_SPRING_DIST);
                self.pos = anchor.plus(wobble);
            }
            Behavior::Fireball { on_obstacle } => {
                let next = self.pos.plus(self.speed.times(dt));
                if grid.obstacle_at(next, self.size).is_some() {
                    match on_obstacle {
                        ObstacleResponse::Bounce => self.speed = self.speed.times(-1.0),
                        ObstacleResponse::Reset { spawn } => self.pos = spawn,
                    }
                } else {
                    self.pos = next;
                }
            }
        }
    }
}
