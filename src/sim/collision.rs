//! Collision detection for axis-aligned boxes and the static tile grid
//!
//! Two questions get answered here:
//! - do two boxes overlap (open intervals, touching edges don't count)
//! - what static obstacle, if any, does a box occupy

use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Axis-aligned bounding box. Edges are derived on every access, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vector,
    pub size: Vector,
}

impl Rect {
    #[inline]
    pub fn new(pos: Vector, size: Vector) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap: a shared boundary with zero area is not an intersection.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Static obstacle kinds a tile can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

/// One grid cell: an obstacle or open space
pub type Tile = Option<Obstacle>;

/// Static level geometry. Rows may be ragged; missing cells are open space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    rows: Vec<Vec<Tile>>,
    width: usize,
}

impl TileGrid {
    pub fn new(rows: Vec<Vec<Tile>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Longest row length
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Tile at (column, row); out-of-range cells are open space
    #[inline]
    pub fn tile(&self, col: usize, row: usize) -> Tile {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Classify the box at `pos` with `size` against the level bounds and tiles.
    ///
    /// Falling out through the bottom is lava; leaving through any other edge
    /// is a wall. Inside the bounds, lava beats wall when both are covered.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let probe = Rect::new(pos, size);
        let width = self.width as f32;
        let height = self.height() as f32;

        if probe.bottom() >= height {
            return Some(Obstacle::Lava);
        }
        if probe.top() < 0.0 || probe.left() < 0.0 || probe.right() >= width {
            return Some(Obstacle::Wall);
        }

        let row_start = probe.top().floor() as usize;
        let row_end = probe.bottom().ceil() as usize;
        let col_start = probe.left().floor() as usize;
        let col_end = probe.right().ceil() as usize;

        let mut found = None;
        for row in row_start..row_end {
            for col in col_start..col_end {
                match self.tile(col, row) {
                    Some(Obstacle::Lava) => return Some(Obstacle::Lava),
                    Some(Obstacle::Wall) => found = Some(Obstacle::Wall),
                    None => {}
                }
            }
        }
        found
    }
}
