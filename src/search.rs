use crate::neighbors::GridNeighborhood;
use crate::{Cost, IndexSet, OpenEntry, Path, SearchHeap, TileGrid, TileIndex};

use thiserror::Error;

/// Options for a single search request.
///
/// Default options:
/// ```
/// # use tile_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         allow_diagonals: true,
///         retrace_limit: 10_000,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `true` (default): movement is 8-connected; `false`: 4-connected.
    pub allow_diagonals: bool,
    /// Upper bound on retrace steps before the parent chain is considered corrupted
    /// (defaults to `10_000`). Raise this for grids with more Tiles than that.
    pub retrace_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            allow_diagonals: true,
            retrace_limit: 10_000,
        }
    }
}

impl SearchConfig {
    /// A config with 4-connected movement and the default retrace limit.
    pub fn cardinal() -> SearchConfig {
        SearchConfig {
            allow_diagonals: false,
            ..Default::default()
        }
    }
}

/// Why a search did not produce a Path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or target index lies outside `0..width * height`. No search is performed.
    #[error("Tile index {index} outside grid of {len} Tiles")]
    InvalidInput {
        /// The offending index.
        index: TileIndex,
        /// The number of Tiles in the grid.
        len: usize,
    },
    /// The target can not be reached: the open set ran dry, or start/target is
    /// unwalkable. An expected outcome for disconnected regions, not a fault.
    #[error("no Path between start and target")]
    Unreachable,
    /// Retracing followed more parent links than the configured limit, which means
    /// the parent chain is corrupted. A latent bug, reported instead of looping.
    #[error("Path retrace exceeded {limit} steps")]
    RetraceLimit {
        /// The limit that was exceeded.
        limit: usize,
    },
}

/// Searches `grid` for the cheapest Path from `start` to `target` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The grid's search bookkeeping must be fresh (build the grid per request); the
/// engine owns it exclusively until the call returns. Independent requests on
/// independent grids may run in parallel freely.
///
/// The returned Path lists Tile indices in **target-to-start order** and excludes
/// the start Tile; call [`Path::reversed`] for walking order. Its cost is the sum
/// of step costs (10 orthogonal / 14 diagonal) and the `movement_penalty` of every
/// entered Tile.
///
/// ## Examples
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let mut grid = TileGrid::open(5, 5);
/// let start = grid.index_of((0, 0));
/// let target = grid.index_of((4, 4));
///
/// let path = a_star_search(&mut grid, start, target, &SearchConfig::default()).unwrap();
/// assert_eq!(path.len(), 4); // 4 diagonal steps
/// assert_eq!(path.cost(), 4 * 14);
/// ```
///
/// A search to an unreachable or unwalkable target is a normal "no path" outcome:
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let mut grid = TileGrid::from_fn(3, 3, |(x, _)| (x != 1, 0));
/// let (start, target) = (grid.index_of((0, 1)), grid.index_of((2, 1)));
///
/// let result = a_star_search(&mut grid, start, target, &SearchConfig::default());
/// assert_eq!(result.unwrap_err(), SearchError::Unreachable);
/// ```
pub fn a_star_search(
    grid: &mut TileGrid,
    start: TileIndex,
    target: TileIndex,
    config: &SearchConfig,
) -> Result<Path<TileIndex>, SearchError> {
    let len = grid.len();
    for index in [start, target] {
        if !grid.in_bounds(index) {
            return Err(SearchError::InvalidInput { index, len });
        }
    }
    if !grid.tile(start).is_walkable || !grid.tile(target).is_walkable {
        return Err(SearchError::Unreachable);
    }

    let neighborhood = GridNeighborhood::new(grid.width(), grid.height(), config.allow_diagonals);
    let target_pos = grid.position_of(target);

    let mut open = SearchHeap::with_capacity(len);
    let mut closed = IndexSet::with_capacity(len / 2);
    let mut neighbors = Vec::with_capacity(8);

    let start_h = neighborhood.heuristic(grid.position_of(start), target_pos);
    {
        let start_tile = grid.tile_mut(start);
        start_tile.g_cost = 0;
        start_tile.h_cost = start_h;
    }
    open.insert(OpenEntry {
        index: start,
        g_cost: 0,
        h_cost: start_h,
    });

    let mut success = false;
    while let Some(current) = open.pop() {
        closed.insert(current.index);

        if current.index == target {
            success = true;
            break;
        }

        let current_pos = grid.position_of(current.index);
        let current_g = grid.tile(current.index).g_cost;

        neighborhood.neighbors(current_pos, &mut neighbors);
        for &neighbor_pos in &neighbors {
            let neighbor = grid.index_of(neighbor_pos);
            let tile = grid.tile(neighbor);

            if !tile.is_walkable || closed.contains(&neighbor) {
                continue;
            }

            let candidate =
                current_g + neighborhood.step_cost(current_pos, neighbor_pos) + tile.movement_penalty;

            let in_open = open.contains(neighbor);
            if in_open && candidate >= tile.g_cost {
                continue;
            }

            // the heuristic is a pure function of position and target, so compute it once
            let h_cost = if tile.h_cost == Cost::MAX {
                neighborhood.heuristic(neighbor_pos, target_pos)
            } else {
                tile.h_cost
            };

            let tile = grid.tile_mut(neighbor);
            tile.g_cost = candidate;
            tile.h_cost = h_cost;
            tile.parent = current.index;

            let entry = OpenEntry {
                index: neighbor,
                g_cost: candidate,
                h_cost,
            };
            if in_open {
                open.decrease_key(entry);
            } else {
                open.insert(entry);
            }
        }
    }

    if !success {
        return Err(SearchError::Unreachable);
    }

    retrace(grid, start, target, config.retrace_limit).map_err(|err| {
        log::warn!("search {} -> {}: {}", start, target, err);
        err
    })
}

/// Follows parent links from `target` back to `start`, recording every Tile on the
/// way (the start Tile itself is not recorded).
fn retrace(
    grid: &TileGrid,
    start: TileIndex,
    target: TileIndex,
    limit: usize,
) -> Result<Path<TileIndex>, SearchError> {
    let mut steps = vec![];
    let mut current = target;

    while current != start {
        if steps.len() >= limit {
            return Err(SearchError::RetraceLimit { limit });
        }
        steps.push(current);
        current = grid.tile(current).parent;
    }

    Ok(Path::new(steps, grid.tile(target).g_cost))
}
