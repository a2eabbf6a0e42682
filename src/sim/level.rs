//! Level state: static tiles, live actors and the win/loss state machine
//!
//! Status moves from "playing" (`None`) to a terminal value exactly once.
//! After that the driver drains `finish_delay`; the level only reports
//! finished once the delay has dropped below zero, so the final frame can
//! still be shown.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorType};
use super::collision::{Obstacle, TileGrid};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    Won,
    Lost,
}

impl fmt::Display for LevelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LevelStatus::Won => "won",
            LevelStatus::Lost => "lost",
        })
    }
}

/// What the player ran into: a static obstacle or another actor's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Obstacle(Obstacle),
    Actor(ActorType),
}

impl From<Obstacle> for Touch {
    fn from(obstacle: Obstacle) -> Self {
        Touch::Obstacle(obstacle)
    }
}

impl From<ActorType> for Touch {
    fn from(actor_type: ActorType) -> Self {
        Touch::Actor(actor_type)
    }
}

#[derive(Debug, Clone)]
pub struct Level {
    grid: TileGrid,
    actors: Vec<Actor>,
    /// First actor in the list at construction time
    player: Option<ActorId>,
    status: Option<LevelStatus>,
    finish_delay: f32,
}

impl Level {
    /// Build a level. The first actor in `actors` is taken as the player.
    pub fn new(grid: TileGrid, actors: Vec<Actor>) -> Self {
        let player = actors.first().map(Actor::id);
        Self {
            grid,
            actors,
            player,
            status: None,
            finish_delay: FINISH_DELAY,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id() == id)
    }

    /// The player, if it is still in the actor list
    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    #[inline]
    pub fn status(&self) -> Option<LevelStatus> {
        self.status
    }

    #[inline]
    pub fn finish_delay(&self) -> f32 {
        self.finish_delay
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First other actor whose box overlaps `actor`'s
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|other| other.is_intersect(actor))
    }

    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove the actor with this identity. Missing actors are ignored.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|a| a.id() == id)?;
        Some(self.actors.remove(index))
    }

    /// True when no remaining actor carries `actor_type`
    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self.actors.iter().any(|a| a.actor_type() == actor_type)
    }

    /// Run every actor's `act` once, in list order.
    ///
    /// Iterates over a snapshot of ids, so an actor removed mid-pass is simply
    /// skipped.
    pub fn act_all(&mut self, dt: f32) {
        let ids: Vec<ActorId> = self.actors.iter().map(Actor::id).collect();
        for id in ids {
            if let Some(actor) = self.actors.iter_mut().find(|a| a.id() == id) {
                actor.act(dt, &self.grid);
            }
        }
    }

    /// Apply a player contact. Only the first terminal event counts; once the
    /// status is set nothing here mutates the level again.
    pub fn player_touched(&mut self, touch: impl Into<Touch>, touched: Option<ActorId>) {
        if self.status.is_some() {
            return;
        }

        let touch = touch.into();
        match touch {
            Touch::Obstacle(Obstacle::Lava) | Touch::Actor(ActorType::Fireball) => {
                log::info!("Player touched {touch:?}, level lost");
                self.status = Some(LevelStatus::Lost);
            }
            Touch::Actor(ActorType::Coin) => {
                if let Some(id) = touched {
                    if self.remove_actor(id).is_some() {
                        log::debug!("Coin {} collected", id.get());
                    }
                }
                if self.no_more_actors(ActorType::Coin) {
                    log::info!("All coins collected, level won");
                    self.status = Some(LevelStatus::Won);
                }
            }
            _ => {}
        }
    }

    /// Drain the grace period; only meaningful once a status is set.
    pub fn advance_finish_delay(&mut self, step: f32) {
        if self.status.is_some() {
            self.finish_delay -= step;
        }
    }
}
