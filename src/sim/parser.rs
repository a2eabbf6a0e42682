//! Text map -> Level
//!
//! Every character of a map row is read twice: once against the fixed tile
//! table (`x` wall, `!` lava) and once against the parser's symbol table of
//! actor factories.

use std::collections::HashMap;
use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::{Actor, ActorType};
use super::collision::{Obstacle, TileGrid};
use super::level::Level;
use super::vector::Vector;

/// Builds an actor at a grid cell. Coins draw their phase from the RNG.
pub type BuildActor = fn(Vector, &mut Pcg32) -> Actor;

/// A symbol table entry: the type tag it promises and how to build it
#[derive(Clone, Copy)]
pub struct ActorFactory {
    pub actor_type: ActorType,
    pub build: BuildActor,
}

impl fmt::Debug for ActorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorFactory")
            .field("actor_type", &self.actor_type)
            .finish_non_exhaustive()
    }
}

fn build_player(pos: Vector, _: &mut Pcg32) -> Actor {
    Actor::player(pos)
}

fn build_coin(pos: Vector, rng: &mut Pcg32) -> Actor {
    Actor::coin(pos, rng)
}

fn build_fire_rain(pos: Vector, _: &mut Pcg32) -> Actor {
    Actor::fire_rain(pos)
}

fn build_horizontal_fireball(pos: Vector, _: &mut Pcg32) -> Actor {
    Actor::horizontal_fireball(pos)
}

fn build_vertical_fireball(pos: Vector, _: &mut Pcg32) -> Actor {
    Actor::vertical_fireball(pos)
}

impl ActorFactory {
    pub const PLAYER: Self = Self {
        actor_type: ActorType::Player,
        build: build_player,
    };
    pub const COIN: Self = Self {
        actor_type: ActorType::Coin,
        build: build_coin,
    };
    pub const FIRE_RAIN: Self = Self {
        actor_type: ActorType::Fireball,
        build: build_fire_rain,
    };
    pub const HORIZONTAL_FIREBALL: Self = Self {
        actor_type: ActorType::Fireball,
        build: build_horizontal_fireball,
    };
    pub const VERTICAL_FIREBALL: Self = Self {
        actor_type: ActorType::Fireball,
        build: build_vertical_fireball,
    };
}

pub type SymbolTable = HashMap<char, ActorFactory>;

/// `@` player, `v` fire rain, `o` coin
pub fn default_symbols() -> SymbolTable {
    HashMap::from([
        ('@', ActorFactory::PLAYER),
        ('v', ActorFactory::FIRE_RAIN),
        ('o', ActorFactory::COIN),
    ])
}

/// Default table plus `=` horizontal and `|` vertical fireballs
pub fn extended_symbols() -> SymbolTable {
    let mut symbols = default_symbols();
    symbols.insert('=', ActorFactory::HORIZONTAL_FIREBALL);
    symbols.insert('|', ActorFactory::VERTICAL_FIREBALL);
    symbols
}

#[derive(Debug, Clone)]
pub struct LevelParser {
    symbols: SymbolTable,
    seed: u64,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(default_symbols())
    }
}

impl LevelParser {
    pub fn new(symbols: SymbolTable) -> Self {
        Self { symbols, seed: 0 }
    }

    /// Seed for coin phases. The same seed and map always give the same level.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<&ActorFactory> {
        self.symbols.get(&symbol)
    }

    /// Tile classification, preserving ragged row lengths
    pub fn create_grid<S: AsRef<str>>(&self, rows: &[S]) -> TileGrid {
        TileGrid::new(
            rows.iter()
                .map(|row| row.as_ref().chars().map(Obstacle::from_symbol).collect())
                .collect(),
        )
    }

    /// Actors in row-major order, placed at their (column, row) cell
    pub fn create_actors<S: AsRef<str>>(&self, rows: &[S]) -> Vec<Actor> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut actors = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let Some(factory) = self.actor_from_symbol(symbol) else {
                    continue;
                };
                let actor = (factory.build)(Vector::new(x as f32, y as f32), &mut rng);
                if actor.actor_type() != factory.actor_type {
                    log::warn!(
                        "Symbol '{}' built a {} but is registered as {}, skipped",
                        symbol,
                        actor.actor_type(),
                        factory.actor_type
                    );
                    continue;
                }
                actors.push(actor);
            }
        }
        actors
    }

    pub fn parse<S: AsRef<str>>(&self, rows: &[S]) -> Level {
        let grid = self.create_grid(rows);
        let actors = self.create_actors(rows);

        match actors.first() {
            Some(first) if first.actor_type() != ActorType::Player => {
                log::warn!("First actor is a {}, not a player", first.actor_type());
            }
            None => log::warn!("Map has no actors"),
            _ => {}
        }
        log::debug!(
            "Parsed {}x{} level with {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );

        Level::new(grid, actors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::Behavior;

    #[test]
    fn test_create_grid() {
        let parser = LevelParser::default();
        let grid = parser.create_grid(&["x!", " x @", ""]);
        assert_eq!(grid.rows()[0], vec![Some(Obstacle::Wall), Some(Obstacle::Lava)]);
        assert_eq!(grid.rows()[1], vec![None, Some(Obstacle::Wall), None, None]);
        assert!(grid.rows()[2].is_empty());
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn test_create_actors_row_major() {
        let parser = LevelParser::default();
        let actors = parser.create_actors(&["  @ ", "o  v", " zo "]);
        let types: Vec<ActorType> = actors.iter().map(Actor::actor_type).collect();
        assert_eq!(
            types,
            vec![
                ActorType::Player,
                ActorType::Coin,
                ActorType::Fireball,
                ActorType::Coin
            ]
        );
        match actors[0].behavior() {
            Behavior::Player { spawn } => assert_eq!(*spawn, Vector::new(2.0, 0.0)),
            other => panic!("unexpected behavior {other:?}"),
        }
        assert_eq!(actors[2].pos, Vector::new(3.0, 1.0));
    }

    #[test]
    fn test_unmapped_symbols_place_nothing() {
        let parser = LevelParser::default();
        assert!(parser.create_actors(&["=|#x!"]).is_empty());
        assert!(parser.create_actors::<&str>(&[]).is_empty());

        let extended = LevelParser::new(extended_symbols());
        let actors = extended.create_actors(&["=|"]);
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[0].speed, Vector::new(2.0, 0.0));
        assert_eq!(actors[1].speed, Vector::new(0.0, 2.0));
    }

    #[test]
    fn test_mislabelled_factory_is_skipped() {
        let mut symbols = SymbolTable::new();
        symbols.insert(
            '@',
            ActorFactory {
                actor_type: ActorType::Player,
                build: |pos, _| Actor::fire_rain(pos),
            },
        );
        symbols.insert('o', ActorFactory::COIN);
        let parser = LevelParser::new(symbols);
        let actors = parser.create_actors(&["@o"]);
        assert_eq!(actors.len(), 1);
        assert_eq!(actors[0].actor_type(), ActorType::Coin);
    }

    #[test]
    fn test_same_seed_same_level() {
        let parser = LevelParser::default().with_seed(99);
        let a = parser.create_actors(&["@ o o"]);
        let b = parser.create_actors(&["@ o o"]);
        let springs = |actors: &[Actor]| -> Vec<f32> {
            actors
                .iter()
                .filter_map(|a| match a.behavior() {
                    Behavior::Coin { spring, .. } => Some(*spring),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(springs(&a), springs(&b));
        assert_eq!(springs(&a).len(), 2);
    }

    #[test]
    fn test_parse_wall_player_wall() {
        let parser = LevelParser::default();
        let level = parser.parse(&["x@x"]);

        assert_eq!(level.width(), 3);
        assert_eq!(level.height(), 1);
        assert_eq!(
            level.grid().rows()[0],
            vec![Some(Obstacle::Wall), None, Some(Obstacle::Wall)]
        );
        assert_eq!(level.actors().len(), 1);

        let player = level.player().expect("player parsed");
        assert_eq!(player.actor_type(), ActorType::Player);
        match player.behavior() {
            Behavior::Player { spawn } => assert_eq!(*spawn, Vector::new(1.0, 0.0)),
            other => panic!("unexpected behavior {other:?}"),
        }

        let probe = Vector::new(0.5, 0.5);
        assert_eq!(level.obstacle_at(Vector::new(1.0, 0.0), probe), None);
        assert_eq!(level.obstacle_at(Vector::new(0.0, 0.0), probe), Some(Obstacle::Wall));
        assert_eq!(level.obstacle_at(Vector::new(2.0, 0.0), probe), Some(Obstacle::Wall));
        assert!(level.actor_at(player).is_none());
    }

    #[test]
    fn test_parse_empty_map() {
        let level = LevelParser::default().parse::<&str>(&[]);
        assert_eq!(level.width(), 0);
        assert_eq!(level.height(), 0);
        assert!(level.actors().is_empty());
        assert!(level.player().is_none());
    }
}
