//! Straight rays along the eight primary directions.

use nletext_core::MapPos;

/// A primary compass direction, as a unit step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RayDirection {
    /// `(0, +1)`
    East,
    /// `(+1, +1)`
    SouthEast,
    /// `(+1, 0)`
    South,
    /// `(+1, -1)`
    SouthWest,
    /// `(0, -1)`
    West,
    /// `(-1, -1)`
    NorthWest,
    /// `(-1, 0)`
    North,
    /// `(-1, +1)`
    NorthEast,
}

impl RayDirection {
    /// The eight directions, starting east and turning clockwise.
    pub const ALL: [RayDirection; 8] = [
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
    ];

    /// Unit step as `(d_row, d_col)`.
    pub fn step(self) -> (i64, i64) {
        match self {
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
        }
    }
}

/// Iterator over the cells of a ray, nearest first.
///
/// Yields `(pos, d_row, d_col)` where the offsets are relative to the
/// origin. Ends at the first cell outside the grid.
#[derive(Clone, Debug)]
pub struct Ray {
    rows: usize,
    cols: usize,
    origin: MapPos,
    step: (i64, i64),
    n: i64,
}

impl Iterator for Ray {
    type Item = (MapPos, i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.n += 1;
        let (d_row, d_col) = (self.step.0 * self.n, self.step.1 * self.n);
        let pos = MapPos::new(self.origin.row + d_row, self.origin.col + d_col);
        pos.index_in(self.rows, self.cols)?;
        Some((pos, d_row, d_col))
    }
}

/// March from `origin` in direction `dir` over a `rows` x `cols` grid.
///
/// The origin itself is not yielded.
pub fn march(rows: usize, cols: usize, origin: MapPos, dir: RayDirection) -> Ray {
    Ray {
        rows,
        cols,
        origin,
        step: dir.step(),
        n: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn march_stops_at_edge() {
        let cells: Vec<_> = march(5, 5, MapPos::new(2, 2), RayDirection::East)
            .map(|(p, _, _)| p)
            .collect();
        assert_eq!(cells, vec![MapPos::new(2, 3), MapPos::new(2, 4)]);
    }

    #[test]
    fn diagonal_offsets() {
        let steps: Vec<_> = march(21, 79, MapPos::new(10, 10), RayDirection::NorthWest)
            .take(3)
            .map(|(_, dr, dc)| (dr, dc))
            .collect();
        assert_eq!(steps, vec![(-1, -1), (-2, -2), (-3, -3)]);
    }

    #[test]
    fn corner_origin_has_empty_rays() {
        let origin = MapPos::new(0, 0);
        assert_eq!(march(3, 3, origin, RayDirection::North).count(), 0);
        assert_eq!(march(3, 3, origin, RayDirection::West).count(), 0);
        assert_eq!(march(3, 3, origin, RayDirection::SouthEast).count(), 2);
    }

    proptest! {
        #[test]
        fn rays_stay_in_bounds(
            rows in 1usize..30,
            cols in 1usize..90,
            r in 0i64..30,
            c in 0i64..90,
            d in 0usize..8,
        ) {
            let origin = MapPos::new(r % rows as i64, c % cols as i64);
            for (pos, _, _) in march(rows, cols, origin, RayDirection::ALL[d]) {
                prop_assert!(pos.index_in(rows, cols).is_some());
            }
        }
    }
}
