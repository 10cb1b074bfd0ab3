use crate::{Cost, Point, TileIndex};

/// One cell of the search space.
///
/// `g_cost`, `h_cost` and `parent` are search bookkeeping and start out at their
/// sentinels; the search engine owns them for the duration of one call. Everything
/// else is fixed once the grid is built.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    /// Identity of this Tile: `y * width + x`. Stable for the lifetime of one search.
    pub index: TileIndex,
    /// Whether the Tile may appear on a Path.
    pub is_walkable: bool,
    /// Additional Cost for entering this Tile (0 = no penalty).
    pub movement_penalty: Cost,
    /// Best known Cost from the start Tile. `Cost::MAX` until relaxed.
    pub g_cost: Cost,
    /// Heuristic estimate to the target. `Cost::MAX` until first computed, then cached.
    pub h_cost: Cost,
    /// Index of the Tile the best known Path arrives from. Meaningless for the start Tile.
    pub parent: TileIndex,
}

impl Tile {
    /// Creates a fresh Tile with untouched search bookkeeping.
    pub fn new(index: TileIndex, is_walkable: bool, movement_penalty: Cost) -> Tile {
        Tile {
            index,
            is_walkable,
            movement_penalty,
            g_cost: Cost::MAX,
            h_cost: Cost::MAX,
            parent: 0,
        }
    }

    /// `true` once the search has assigned a real `g_cost`.
    pub fn is_relaxed(&self) -> bool {
        self.g_cost != Cost::MAX
    }
}

/// A fixed-capacity arena of [`Tile`]s, indexed by [`TileIndex`].
///
/// Tiles are stored in one flat `Vec` in row-major order, so "the Tile at index `i`"
/// is always `tiles[i]` and there is no such thing as a stale copy: the search engine
/// reads and writes Tiles in place. A grid is built fresh for every search request
/// and dropped when the request ends.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid by asking `tile_fn` for every cell, in index order.
    ///
    /// `tile_fn` receives the cell's Point and returns `(is_walkable, movement_penalty)`.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut tile_fn: impl FnMut(Point) -> (bool, Cost),
    ) -> TileGrid {
        let mut tiles = Vec::with_capacity(width * height);
        for index in 0..width * height {
            let point = (index % width, index / width);
            let (is_walkable, movement_penalty) = tile_fn(point);
            tiles.push(Tile::new(index, is_walkable, movement_penalty));
        }
        TileGrid {
            width,
            height,
            tiles,
        }
    }

    /// Creates a grid where every cell is walkable with no penalty.
    pub fn open(width: usize, height: usize) -> TileGrid {
        TileGrid::from_fn(width, height, |_| (true, 0))
    }

    /// The width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of Tiles (`width * height`).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` if the grid has no Tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Converts a Point to its TileIndex. Does not bounds-check.
    pub fn index_of(&self, (x, y): Point) -> TileIndex {
        y * self.width + x
    }

    /// Converts a TileIndex back to its Point.
    pub fn position_of(&self, index: TileIndex) -> Point {
        (index % self.width, index / self.width)
    }

    /// `true` if `index` identifies a Tile of this grid.
    pub fn in_bounds(&self, index: TileIndex) -> bool {
        index < self.tiles.len()
    }

    /// The Tile at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn tile(&self, index: TileIndex) -> &Tile {
        &self.tiles[index]
    }

    /// Mutable access to the Tile at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn tile_mut(&mut self, index: TileIndex) -> &mut Tile {
        &mut self.tiles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_position_bijection() {
        let grid = TileGrid::open(7, 3);
        for index in 0..grid.len() {
            assert_eq!(grid.index_of(grid.position_of(index)), index);
        }
        assert_eq!(grid.index_of((3, 2)), 2 * 7 + 3);
        assert_eq!(grid.position_of(2 * 7 + 3), (3, 2));
    }

    #[test]
    fn from_fn_order() {
        let grid = TileGrid::from_fn(3, 2, |(x, y)| (x != 1, (10 * y + x) as Cost));
        assert_eq!(grid.len(), 6);
        assert!(!grid.tile(1).is_walkable);
        assert!(grid.tile(3).is_walkable);
        assert_eq!(grid.tile(4).movement_penalty, 11);
        assert_eq!(grid.tile(5).index, 5);
        assert!(!grid.tile(0).is_relaxed());
    }
}
