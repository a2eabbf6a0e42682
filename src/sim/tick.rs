//! Reference driver: advances a level one tick at a time
//!
//! Order within a tick is fixed: actors act in list order, then the player's
//! contacts are resolved, then the finish delay drains.

use serde::{Deserialize, Serialize};

use super::actor::{ActorId, ActorType};
use super::collision::Obstacle;
use super::level::{Level, LevelStatus};
use crate::config::SimConfig;

/// Something that happened during a tick (for display/audio collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { id: ActorId },
    Won,
    Lost,
}

/// Summary of a completed level run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// `None` when the tick cap ran out first
    pub status: Option<LevelStatus>,
    pub ticks: u32,
    pub coins_collected: u32,
}

/// Advance `level` by one tick of `dt`.
///
/// Returns the events raised this tick, in order.
pub fn tick(level: &mut Level, dt: f32, finish_delay_step: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let status_before = level.status();

    level.act_all(dt);

    if status_before.is_none() {
        resolve_player_contacts(level, &mut events);
    }

    match (status_before, level.status()) {
        (None, Some(LevelStatus::Won)) => events.push(GameEvent::Won),
        (None, Some(LevelStatus::Lost)) => events.push(GameEvent::Lost),
        _ => {}
    }

    // The tick that sets the status does not count toward the grace period
    if status_before.is_some() {
        level.advance_finish_delay(finish_delay_step);
    }

    events
}

fn resolve_player_contacts(level: &mut Level, events: &mut Vec<GameEvent>) {
    let Some(player) = level.player() else {
        return;
    };

    if level.obstacle_at(player.pos, player.size) == Some(Obstacle::Lava) {
        level.player_touched(Obstacle::Lava, None);
        return;
    }

    let touched = level
        .actor_at(player)
        .map(|other| (other.actor_type(), other.id()));
    if let Some((actor_type, id)) = touched {
        level.player_touched(actor_type, Some(id));
        if actor_type == ActorType::Coin && level.actor(id).is_none() {
            events.push(GameEvent::CoinCollected { id });
        }
    }
}

/// Tick `level` until it is finished or the configured tick cap is reached
pub fn run_level(level: &mut Level, config: &SimConfig) -> RunReport {
    let mut ticks = 0;
    let mut coins_collected = 0;

    while !level.is_finished() && ticks < config.max_ticks {
        for event in tick(level, config.time_step, config.finish_delay_step) {
            if let GameEvent::CoinCollected { .. } = event {
                coins_collected += 1;
            }
        }
        ticks += 1;
    }

    if !level.is_finished() {
        log::warn!("Level did not finish within {} ticks", config.max_ticks);
    }

    RunReport {
        status: level.status(),
        ticks,
        coins_collected,
    }
}
