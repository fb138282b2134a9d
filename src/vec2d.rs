use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Location;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(width: usize, height: usize, default: T) -> Self {
        assert!(width > 0 && height > 0);

        Vec2d {
            data: vec![default; width * height],
            width,
            height,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn contains(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.y >= 0 && (loc.x as usize) < self.width && (loc.y as usize) < self.height
    }

    /// Row by row, left to right.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Location> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Location::new(x as i32, y as i32)))
    }

    #[cfg(test)]
    pub(crate) fn scratchpad<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d::new(self.width, self.height, default)
    }

    fn offset(&self, loc: Location) -> usize {
        assert!(self.contains(loc), "{} outside {}x{}", loc, self.width, self.height);
        loc.y as usize * self.width + loc.x as usize
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}

impl<T> Index<Location> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Location) -> &Self::Output {
        &self.data[self.offset(index)]
    }
}

impl<T> IndexMut<Location> for Vec2d<T> {
    fn index_mut(&mut self, index: Location) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_row_major() {
        let mut v = Vec2d::new(3, 2, 0);
        v[Location::new(2, 0)] = 1;
        v[Location::new(0, 1)] = 2;
        assert_eq!(v.to_string(), "001\n200\n");
        assert_eq!(v.width(), 3);
        assert_eq!(v.height(), 2);
    }

    #[test]
    fn bounds() {
        let v = Vec2d::new(2, 2, false);
        assert!(v.contains(Location::new(1, 1)));
        assert!(!v.contains(Location::new(2, 0)));
        assert!(!v.contains(Location::new(0, -1)));
    }

    #[test]
    fn positions_cover_grid() {
        let v = Vec2d::new(2, 2, ' ');
        let positions: Vec<_> = v.positions().collect();
        assert_eq!(
            positions,
            vec![
                Location::new(0, 0),
                Location::new(1, 0),
                Location::new(0, 1),
                Location::new(1, 1),
            ]
        );
        let scratch: Vec2d<u8> = v.scratchpad(7);
        assert_eq!(scratch.to_string(), "77\n77\n");
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let v = Vec2d::new(2, 2, 0);
        let _ = v[Location::new(2, 2)];
    }
}
