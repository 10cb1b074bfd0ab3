#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for single-shot A* searches on a weighted Tile Grid.
//!
//! ## Introduction
//! Every search runs against a flat array of Tiles, where each Tile knows whether it can be
//! walked on and how expensive it is to enter (a `movement_penalty` on top of the regular
//! step cost). The open set is an indexed binary min-heap that supports decreasing the key
//! of a Tile that is already queued, so a Tile is never queued twice and relaxations stay
//! `O(log n)`.
//!
//! Movement is either 4-connected (the cardinal directions) or 8-connected (cardinals plus
//! diagonals). Costs are fixed-point: an orthogonal step costs 10 and a diagonal step 14,
//! with an octile-distance heuristic to match.
//!
//! ## Examples
//! Running a search directly:
//! ```
//! use tile_pathfinding::prelude::*;
//!
//! // create and initialize Grid
//! // 0 = empty, 1 = swamp, 2 = wall
//! let grid = [
//!     [0, 2, 0, 0, 0],
//!     [0, 2, 2, 2, 0],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 2, 0],
//!     [0, 0, 0, 2, 0],
//! ];
//! let (width, height) = (grid[0].len(), grid.len());
//!
//! // penalty per terrain kind, -1 = solid
//! const PENALTY_MAP: [isize; 3] = [0, 50, -1];
//!
//! let mut tiles = TileGrid::from_fn(width, height, |(x, y)| {
//!     match PENALTY_MAP[grid[y][x]] {
//!         p if p < 0 => (false, 0),
//!         p => (true, p as Cost),
//!     }
//! });
//!
//! let start = tiles.index_of((0, 0));
//! let target = tiles.index_of((4, 4));
//!
//! let path = a_star_search(&mut tiles, start, target, &SearchConfig::default()).unwrap();
//!
//! // the engine reports target-to-start order; reverse for walking order
//! let walk: Vec<_> = path.reversed().iter().map(|&i| tiles.position_of(i)).collect();
//! assert_eq!(walk.last(), Some(&(4, 4)));
//! ```
//!
//! Going through the drawing adapter, which builds the Tile Grid from a walkability [`Mask`]
//! and a color field with a per-color penalty table, and paints the found path:
//! ```
//! use tile_pathfinding::prelude::*;
//!
//! let (width, height) = (8, 8);
//! let texture = ColorGrid::filled(width, height, Color32::rgb(0, 0, 0));
//! let walkable = Mask::solid(width * height);
//!
//! let request = PathDrawRequest {
//!     texture: &texture,
//!     walkable: &walkable,
//!     modifiers: None,
//!     start: (0, 0),
//!     target: (7, 7),
//!     draw_color: Color32::rgb(255, 0, 0),
//!     config: SearchConfig::default(),
//! };
//! let output = draw_path(&request);
//!
//! assert!(output.mask.is_point_set(texture.index_of((7, 7))));
//! ```
//!
//! "No path" is an expected outcome, not a fault: the adapter returns the input texture
//! unchanged and an empty mask, and a direct [`a_star_search`] call reports
//! [`SearchError::Unreachable`].

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// The Type used to identify a Tile: `y * width + x`
pub type TileIndex = usize;

/// a Type to represent the Cost of traversing a Tile
pub type Cost = usize;

pub(crate) type IndexSet = hashbrown::HashSet<TileIndex>;
pub(crate) type SlotMap = hashbrown::HashMap<TileIndex, usize>;

mod grid;
pub use self::grid::{Tile, TileGrid};

mod heap;
pub use self::heap::{OpenEntry, SearchHeap};

pub mod neighbors;

mod search;
pub use self::search::{a_star_search, SearchConfig, SearchError};

mod path;
pub use self::path::Path;

mod draw;
pub use self::draw::{
    draw_path, Color32, ColorGrid, Mask, Modifier, Modifiers, NamedColor, PathDrawOutput,
    PathDrawRequest,
};

#[cfg(feature = "parallel")]
pub use self::draw::draw_paths;

/// The most common imports, bundled
pub mod prelude {
    pub use crate::neighbors::GridNeighborhood;
    pub use crate::{
        a_star_search, draw_path, Color32, ColorGrid, Cost, Mask, Modifier, Modifiers,
        NamedColor, Path, PathDrawOutput, PathDrawRequest, Point, SearchConfig, SearchError,
        Tile, TileGrid, TileIndex,
    };

    #[cfg(feature = "parallel")]
    pub use crate::draw_paths;
}
