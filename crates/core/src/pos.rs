//! Block and chunk coordinates.
//!
//! Positions are ordered and serializable so they can key `BTreeMap`s with a
//! deterministic iteration order and survive world persistence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute block position in world space.
///
/// Ordering is lexical by `(x, y, z)` and stable across runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BlockPos {
    /// X coordinate (east is +X).
    pub x: i32,
    /// Y coordinate (up is +Y).
    pub y: i32,
    /// Z coordinate (south is +Z).
    pub z: i32,
}

impl BlockPos {
    /// Create a block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighboring position one step in `direction`.
    pub const fn offset(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.delta();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The neighboring position one step east (+X).
    pub const fn east(self) -> Self {
        self.offset(Direction::East)
    }

    /// The chunk containing this position.
    pub const fn chunk(self) -> ChunkPos {
        ChunkPos::new(self.x >> 4, self.z >> 4)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Chunk coordinate (X,Z) in chunk space.
/// Implements Ord for deterministic iteration in BTreeMap/BTreeSet (sorts by x, then z).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkPos {
    /// Chunk X coordinate.
    pub x: i32,
    /// Chunk Z coordinate.
    pub z: i32,
}

impl ChunkPos {
    /// Create a chunk position.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// The six axis-aligned directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// -Z.
    North,
    /// +Z.
    South,
    /// +X.
    East,
    /// -X.
    West,
    /// +Y.
    Up,
    /// -Y.
    Down,
}

impl Direction {
    /// Unit offset for this direction as `(dx, dy, dz)`.
    pub const fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }
}
