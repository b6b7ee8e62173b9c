use rand::Rng;

/// Size of one grid cell; every entity moves in multiples of this.
pub const CELL: i32 = 10;

/// A grid-aligned position in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position translated by one cell in the given direction.
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Direction an entity can move. The window's y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for one cell of movement in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -CELL),
            Direction::Down => (0, CELL),
            Direction::Left => (-CELL, 0),
            Direction::Right => (CELL, 0),
        }
    }

    /// The mirrored direction on the same axis.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Resolve a requested direction change against the current direction.
///
/// An exact reversal is rejected (it would be an instant self-collision);
/// any other request wins.
pub fn resolve_direction(requested: Direction, current: Direction) -> Direction {
    if current.is_opposite(requested) {
        current
    } else {
        requested
    }
}

/// Random grid-aligned position with a one-cell margin off every edge.
///
/// No collision-avoidance against existing entities; overlapping spawns
/// are permitted.
pub fn spawn_position<R: Rng>(rng: &mut R, width: i32, height: i32) -> Position {
    Position {
        x: rng.gen_range(1..width / CELL) * CELL,
        y: rng.gen_range(1..height / CELL) * CELL,
    }
}

/// True if the position's cell is not fully inside the window.
pub fn is_out_of_bounds(pos: Position, width: i32, height: i32) -> bool {
    pos.x < 0 || pos.x > width - CELL || pos.y < 0 || pos.y > height - CELL
}
