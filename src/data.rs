use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Largest allowed grid width or height.
pub const MAX_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Location {
        Location { x, y }
    }

    pub fn manhattan(self, other: Location) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    pub fn euclidean(self, other: Location) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dir {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
}

const UP: Dir = Dir { dx: 0, dy: -1 };
const RIGHT: Dir = Dir { dx: 1, dy: 0 };
const DOWN: Dir = Dir { dx: 0, dy: 1 };
const LEFT: Dir = Dir { dx: -1, dy: 0 };
pub(crate) const DIRECTIONS: [Dir; 4] = [UP, RIGHT, DOWN, LEFT];

impl Add<Dir> for Location {
    type Output = Location;

    fn add(self, dir: Dir) -> Location {
        Location {
            x: self.x + dir.dx,
            y: self.y + dir.dy,
        }
    }
}
