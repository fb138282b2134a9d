use crate::data::{Location, DIRECTIONS};
use crate::vec2d::Vec2d;

/// 4-connected lattice with precomputed neighbor lists.
#[derive(Debug, Clone)]
pub struct Grid {
    neighbors: Vec2d<Vec<Location>>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let mut neighbors = Vec2d::new(width, height, Vec::new());

        // collect first, `neighbors` can't be borrowed while we fill it
        let positions: Vec<_> = neighbors.positions().collect();
        for pos in positions {
            let adjacent: Vec<_> = DIRECTIONS
                .iter()
                .map(|&dir| pos + dir)
                .filter(|&n| neighbors.contains(n))
                .collect();
            neighbors[pos] = adjacent;
        }

        Grid { neighbors }
    }

    pub fn width(&self) -> usize {
        self.neighbors.width()
    }

    pub fn height(&self) -> usize {
        self.neighbors.height()
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.neighbors.contains(loc)
    }

    pub fn neighbors(&self, loc: Location) -> &[Location] {
        &self.neighbors[loc]
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> {
        self.neighbors.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_counts(grid: &Grid) -> String {
        let mut counts = grid.neighbors.scratchpad(0);
        for pos in grid.locations() {
            counts[pos] = grid.neighbors(pos).len();
        }
        counts.to_string()
    }

    #[test]
    fn neighbor_counts_depend_on_position() {
        let expected = r"
2332
3443
2332
"
        .trim_start();
        assert_eq!(neighbor_counts(&Grid::new(4, 3)), expected);
    }

    #[test]
    fn degenerate_grids() {
        assert_eq!(neighbor_counts(&Grid::new(1, 1)), "0\n");
        assert_eq!(neighbor_counts(&Grid::new(2, 1)), "11\n");
        assert_eq!(neighbor_counts(&Grid::new(1, 3)), "1\n2\n1\n");
    }

    #[test]
    fn orthogonal_only() {
        let grid = Grid::new(3, 3);
        let mut center = grid.neighbors(Location::new(1, 1)).to_vec();
        center.sort();
        assert_eq!(
            center,
            vec![
                Location::new(0, 1),
                Location::new(1, 0),
                Location::new(1, 2),
                Location::new(2, 1),
            ]
        );
        for pos in grid.locations() {
            for &n in grid.neighbors(pos) {
                assert_eq!(pos.manhattan(n), 1);
                assert!(grid.neighbors(n).contains(&pos));
            }
        }
    }

    #[test]
    fn debug_lists_neighbors() {
        assert_eq!(
            format!("{:?}", Grid::new(2, 1)),
            "Grid { neighbors: [[Location { x: 1, y: 0 }], [Location { x: 0, y: 0 }]] }"
        );
    }

    #[test]
    fn dimensions() {
        let grid = Grid::new(5, 2);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.locations().count(), 10);
        assert!(grid.contains(Location::new(4, 1)));
        assert!(!grid.contains(Location::new(1, 4)));
    }
}
