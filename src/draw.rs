//! The drawing adapter: builds a [`TileGrid`] from collaborator artifacts (a
//! walkability [`Mask`], a [`ColorGrid`] and a named-color penalty table), runs the
//! search, and projects the found Path back onto output artifacts.

use crate::{a_star_search, Cost, Path, Point, SearchConfig, SearchError, TileGrid, TileIndex};

/// An RGBA color value, compared and hashed by all four channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color32 {
    /// red
    pub r: u8,
    /// green
    pub g: u8,
    /// blue
    pub b: u8,
    /// alpha
    pub a: u8,
}

impl Color32 {
    /// Creates a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color32 {
        Color32 { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color32 {
        Color32 { r, g, b, a: 255 }
    }
}

/// A flat per-index color field, the "texture" surface the penalty lookup reads
/// from and the Path gets drawn onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl ColorGrid {
    /// Creates a grid with every cell set to `color`.
    pub fn filled(width: usize, height: usize, color: Color32) -> ColorGrid {
        ColorGrid {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// The width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Converts a Point to its flat index. Does not bounds-check.
    pub fn index_of(&self, (x, y): Point) -> TileIndex {
        y * self.width + x
    }
}

use std::ops::{Index, IndexMut};

impl Index<usize> for ColorGrid {
    type Output = Color32;
    fn index(&self, index: usize) -> &Color32 {
        &self.pixels[index]
    }
}

impl IndexMut<usize> for ColorGrid {
    fn index_mut(&mut self, index: usize) -> &mut Color32 {
        &mut self.pixels[index]
    }
}

/// A boolean point-set over flat indices.
///
/// The adapter reads it as "is this index walkable" on the way in and marks the
/// Path's indices into a fresh one on the way out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    bits: Vec<bool>,
}

impl Mask {
    /// Creates a mask of `len` points, all unset.
    pub fn new(len: usize) -> Mask {
        Mask {
            bits: vec![false; len],
        }
    }

    /// Creates a mask of `len` points, all set.
    pub fn solid(len: usize) -> Mask {
        Mask {
            bits: vec![true; len],
        }
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` if the mask has no points.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// `true` if the point at `index` is set. Out-of-bounds indices read as unset.
    pub fn is_point_set(&self, index: TileIndex) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    /// Marks the point at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_point(&mut self, index: TileIndex) {
        self.bits[index] = true;
    }

    /// Unmarks the point at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn clear_point(&mut self, index: TileIndex) {
        self.bits[index] = false;
    }

    /// Iterator over the indices of all set points.
    pub fn iter_set(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(|(index, _)| index)
    }
}

/// A color value with a human-readable name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    /// The display name of the color.
    pub name: String,
    /// The color value, used as the lookup key.
    pub color: Color32,
}

impl NamedColor {
    /// Creates a NamedColor.
    pub fn new(name: impl Into<String>, color: Color32) -> NamedColor {
        NamedColor {
            name: name.into(),
            color,
        }
    }
}

/// One penalty rule: entering a cell of this color costs `movement_penalty` extra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modifier {
    /// The color this rule applies to.
    pub named_color: NamedColor,
    /// The penalty for entering cells of that color.
    pub movement_penalty: Cost,
}

/// The active set of penalty rules.
///
/// Rules are matched by color *value*; cells whose color has no rule cost nothing
/// extra. When two rules name the same color, the later one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// The rules, in insertion order.
    pub active_modifiers: Vec<Modifier>,
}

impl Modifiers {
    /// Creates an empty rule set.
    pub fn new() -> Modifiers {
        Modifiers::default()
    }

    /// Adds a rule for `color`.
    pub fn add(&mut self, named_color: NamedColor, movement_penalty: Cost) {
        self.active_modifiers.push(Modifier {
            named_color,
            movement_penalty,
        });
    }

    /// Collapses the rules into a color → penalty lookup table.
    pub fn penalty_table(&self) -> hashbrown::HashMap<Color32, Cost> {
        self.active_modifiers
            .iter()
            .map(|modifier| (modifier.named_color.color, modifier.movement_penalty))
            .collect()
    }
}

/// Everything one drawing request needs. The referenced artifacts are only read.
#[derive(Clone, Copy, Debug)]
pub struct PathDrawRequest<'a> {
    /// The color field penalties are looked up in and the Path is drawn onto.
    pub texture: &'a ColorGrid,
    /// Which indices are walkable.
    pub walkable: &'a Mask,
    /// Optional per-color penalty rules.
    pub modifiers: Option<&'a Modifiers>,
    /// Start coordinates.
    pub start: Point,
    /// Target coordinates.
    pub target: Point,
    /// The color Path cells are painted in.
    pub draw_color: Color32,
    /// Search options.
    pub config: SearchConfig,
}

/// The artifacts a drawing request produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathDrawOutput {
    /// A clone of the input color field, with the Path painted over it on success.
    pub texture: ColorGrid,
    /// The Path's indices as a point-set; empty when no Path was found.
    pub mask: Mask,
}

/// Runs one search request end to end.
///
/// Builds the Tile Grid from the request's mask (walkability) and texture + penalty
/// rules (movement penalty, 0 for unmatched colors), searches, and paints the found
/// Path onto a clone of the texture while marking its indices in a fresh [`Mask`].
///
/// A failed search is not an error at this boundary: out-of-bounds or unwalkable
/// endpoints and unreachable targets all yield the untouched clone and an empty
/// mask, so the surrounding pipeline keeps going. A tripped retrace safety bound is
/// additionally logged, since it indicates a bug rather than bad input.
///
/// Each call builds its own grid, heap and closed set; independent requests may run
/// in parallel (see [`draw_paths`](crate::draw_paths) with the `parallel` feature).
pub fn draw_path(request: &PathDrawRequest) -> PathDrawOutput {
    let texture = request.texture;
    let (width, height) = (texture.width(), texture.height());

    let mut output = PathDrawOutput {
        texture: texture.clone(),
        mask: Mask::new(width * height),
    };

    let Some(path) = run_search(request) else {
        return output;
    };

    for &index in path.iter() {
        output.texture[index] = request.draw_color;
        output.mask.set_point(index);
    }
    output
}

fn run_search(request: &PathDrawRequest) -> Option<Path<TileIndex>> {
    let texture = request.texture;
    let (width, height) = (texture.width(), texture.height());

    for &(x, y) in [&request.start, &request.target] {
        if x >= width || y >= height {
            return None;
        }
    }

    let start = texture.index_of(request.start);
    let target = texture.index_of(request.target);

    // the engine would report these as Unreachable too; checking here skips
    // building the grid for a known-failed request
    if !request.walkable.is_point_set(start) || !request.walkable.is_point_set(target) {
        return None;
    }

    let penalties = request
        .modifiers
        .map(Modifiers::penalty_table)
        .unwrap_or_default();

    let mut grid = TileGrid::from_fn(width, height, |point| {
        let index = point.1 * width + point.0;
        let penalty = penalties.get(&texture[index]).copied().unwrap_or(0);
        (request.walkable.is_point_set(index), penalty)
    });

    match a_star_search(&mut grid, start, target, &request.config) {
        Ok(path) => Some(path),
        Err(SearchError::Unreachable) => None,
        Err(err) => {
            log::warn!(
                "draw_path {:?} -> {:?} failed: {}",
                request.start,
                request.target,
                err
            );
            None
        }
    }
}

/// Runs a batch of independent drawing requests in parallel.
///
/// Every request allocates its own grid, heap and closed set, so no locking is
/// needed; outputs come back in request order.
#[cfg(feature = "parallel")]
pub fn draw_paths(requests: &[PathDrawRequest]) -> Vec<PathDrawOutput> {
    use rayon::prelude::*;
    requests.par_iter().map(draw_path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_points() {
        let mut mask = Mask::new(4);
        assert!(!mask.is_point_set(2));
        mask.set_point(2);
        assert!(mask.is_point_set(2));
        mask.clear_point(2);
        assert!(!mask.is_point_set(2));
        // out of bounds reads as unset
        assert!(!mask.is_point_set(17));

        let solid = Mask::solid(3);
        assert_eq!(solid.iter_set().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn penalty_table_matches_by_color_value() {
        let swamp = Color32::rgb(20, 80, 20);
        let mud = Color32::rgb(80, 60, 20);

        let mut modifiers = Modifiers::new();
        modifiers.add(NamedColor::new("Swamp", swamp), 50);
        modifiers.add(NamedColor::new("Mud", mud), 20);
        // later rule for the same color value wins
        modifiers.add(NamedColor::new("Deep Swamp", swamp), 120);

        let table = modifiers.penalty_table();
        assert_eq!(table.get(&swamp), Some(&120));
        assert_eq!(table.get(&mud), Some(&20));
        assert_eq!(table.get(&Color32::rgb(0, 0, 0)), None);
    }

    #[test]
    fn color_grid_indexing() {
        let mut grid = ColorGrid::filled(3, 2, Color32::rgb(0, 0, 0));
        let index = grid.index_of((2, 1));
        assert_eq!(index, 5);
        grid[index] = Color32::rgb(1, 2, 3);
        assert_eq!(grid[5], Color32::rgb(1, 2, 3));
    }
}
