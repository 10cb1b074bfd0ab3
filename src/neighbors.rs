//! Neighbor enumeration and the fixed-point cost model.

use crate::{Cost, Point};

/// Cost of a step between orthogonally adjacent Tiles.
pub const ORTHOGONAL_COST: Cost = 10;
/// Cost of a step between diagonally adjacent Tiles (`10 * sqrt(2)`, rounded).
pub const DIAGONAL_COST: Cost = 14;

/// Defines how a Path can move along the Grid.
///
/// With `diagonals` enabled this is the
/// [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood): the 4
/// cardinal directions plus the 4 diagonals. Disabled, it is the
/// [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood):
/// cardinals only.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o        o
///  \|/         |
/// o-A-o      o-A-o
///  /|\         |
/// o o o        o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridNeighborhood {
    width: usize,
    height: usize,
    diagonals: bool,
}

const CARDINALS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

#[rustfmt::skip]
const MOORE: [(isize, isize); 8] = [
    (0, -1), (1, -1), (1, 0), (1, 1),
    (0, 1), (-1, 1), (-1, 0), (-1, -1),
];

impl GridNeighborhood {
    /// Creates a new GridNeighborhood for a Grid of `width * height` Tiles.
    pub fn new(width: usize, height: usize, diagonals: bool) -> GridNeighborhood {
        GridNeighborhood {
            width,
            height,
            diagonals,
        }
    }

    /// `true` if diagonal movement is enabled.
    pub fn diagonals(&self) -> bool {
        self.diagonals
    }

    /// Clears `out` and fills it with the in-bounds neighbors of `point`
    /// (4 or 8 of them, depending on the diagonal toggle).
    pub fn neighbors(&self, point: Point, out: &mut Vec<Point>) {
        out.clear();
        let deltas: &[(isize, isize)] = if self.diagonals { &MOORE } else { &CARDINALS };
        for &(dx, dy) in deltas {
            let x = point.0 as isize + dx;
            let y = point.1 as isize + dy;
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                out.push((x as usize, y as usize));
            }
        }
    }

    /// Cost of one step between two adjacent Points: [`ORTHOGONAL_COST`] along an
    /// axis, [`DIAGONAL_COST`] otherwise.
    pub fn step_cost(&self, from: Point, to: Point) -> Cost {
        if from.0 == to.0 || from.1 == to.1 {
            ORTHOGONAL_COST
        } else {
            DIAGONAL_COST
        }
    }

    /// Octile-distance estimate from `point` to `goal`:
    /// `14 * min(dx, dy) + 10 * |dx - dy|`.
    ///
    /// Consistent with the step costs when diagonal movement is enabled, which makes
    /// the search optimal. The same estimate is applied with diagonals *disabled*,
    /// where it can overestimate and the search may return a slightly longer Path.
    /// That matches the reference behavior and keeps the two modes comparable.
    pub fn heuristic(&self, point: Point, goal: Point) -> Cost {
        let dx = point.0.abs_diff(goal.0);
        let dy = point.1.abs_diff(goal.1);
        DIAGONAL_COST * dx.min(dy) + ORTHOGONAL_COST * dx.abs_diff(dy)
    }
}

#[test]
fn cardinal_neighbors() {
    let neighborhood = GridNeighborhood::new(5, 5, false);
    let mut out = vec![];
    neighborhood.neighbors((0, 2), &mut out);
    assert_eq!(out, vec![(0, 1), (1, 2), (0, 3)]);
    neighborhood.neighbors((2, 2), &mut out);
    assert_eq!(out, vec![(2, 1), (3, 2), (2, 3), (1, 2)]);
}

#[test]
fn diagonal_neighbors() {
    let neighborhood = GridNeighborhood::new(5, 5, true);
    let mut out = vec![];
    neighborhood.neighbors((0, 2), &mut out);
    assert_eq!(out, vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)]);
    neighborhood.neighbors((2, 2), &mut out);
    assert_eq!(out.len(), 8);
    assert!(!out.contains(&(2, 2)));
}

#[test]
fn octile_heuristic() {
    let neighborhood = GridNeighborhood::new(10, 10, true);
    assert_eq!(neighborhood.heuristic((0, 0), (4, 4)), 4 * 14);
    assert_eq!(neighborhood.heuristic((0, 0), (4, 0)), 4 * 10);
    assert_eq!(neighborhood.heuristic((1, 1), (4, 2)), 14 + 2 * 10);
    assert_eq!(neighborhood.heuristic((4, 2), (1, 1)), 14 + 2 * 10);
}

#[test]
fn step_costs() {
    let neighborhood = GridNeighborhood::new(5, 5, true);
    assert_eq!(neighborhood.step_cost((1, 1), (1, 2)), 10);
    assert_eq!(neighborhood.step_cost((1, 1), (2, 1)), 10);
    assert_eq!(neighborhood.step_cost((1, 1), (2, 2)), 14);
    assert_eq!(neighborhood.step_cost((1, 1), (0, 2)), 14);
}
