use tile_pathfinding::prelude::*;

const BLACK: Color32 = Color32::rgb(0, 0, 0);
const RED: Color32 = Color32::rgb(255, 0, 0);
const GREEN: Color32 = Color32::rgb(0, 128, 0);

/// Builds the artifacts for a grid literal: 0 = walkable, 1 = blocked, 2 = walkable
/// and painted `color` (for penalty rules).
fn artifacts(grid: &[[usize; 5]; 5], color: Color32) -> (ColorGrid, Mask) {
    let (width, height) = (grid[0].len(), grid.len());
    let mut texture = ColorGrid::filled(width, height, BLACK);
    let mut walkable = Mask::new(width * height);
    for y in 0..height {
        for x in 0..width {
            let index = texture.index_of((x, y));
            if grid[y][x] != 1 {
                walkable.set_point(index);
            }
            if grid[y][x] == 2 {
                texture[index] = color;
            }
        }
    }
    (texture, walkable)
}

fn request<'a>(
    texture: &'a ColorGrid,
    walkable: &'a Mask,
    start: Point,
    target: Point,
) -> PathDrawRequest<'a> {
    PathDrawRequest {
        texture,
        walkable,
        modifiers: None,
        start,
        target,
        draw_color: RED,
        config: SearchConfig::default(),
    }
}

#[test]
fn draws_the_path_and_marks_the_mask() {
    let grid = [
        [0, 1, 0, 0, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 0, 0, 1, 0],
    ];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let output = draw_path(&request(&texture, &walkable, (0, 0), (4, 0)));

    // painted cells and mask agree exactly
    let painted: Vec<_> = (0..texture.len())
        .filter(|&i| output.texture[i] == RED)
        .collect();
    let marked: Vec<_> = output.mask.iter_set().collect();
    assert_eq!(painted, marked);

    // the target is on the path, the start is not drawn
    assert!(output.mask.is_point_set(texture.index_of((4, 0))));
    assert!(!output.mask.is_point_set(texture.index_of((0, 0))));

    // the two blocked columns force the full detour: 6 orthogonal + 3 diagonal steps
    assert_eq!(marked.len(), 9);

    // untouched cells keep their input color
    for i in 0..texture.len() {
        if !output.mask.is_point_set(i) {
            assert_eq!(output.texture[i], texture[i]);
        }
    }
}

#[test]
fn unreachable_target_returns_untouched_clone() {
    let grid = [
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
    ];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let output = draw_path(&request(&texture, &walkable, (0, 2), (4, 2)));

    assert_eq!(output.texture, texture);
    assert_eq!(output.mask.iter_set().count(), 0);
}

#[test]
fn unwalkable_endpoint_returns_untouched_clone() {
    let grid = [
        [1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let output = draw_path(&request(&texture, &walkable, (0, 0), (4, 4)));
    assert_eq!(output.texture, texture);
    assert_eq!(output.mask.iter_set().count(), 0);

    // same for an unwalkable target
    let output = draw_path(&request(&texture, &walkable, (4, 4), (0, 0)));
    assert_eq!(output.texture, texture);
    assert_eq!(output.mask.iter_set().count(), 0);
}

#[test]
fn out_of_bounds_endpoint_returns_untouched_clone() {
    let grid = [[0; 5]; 5];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let output = draw_path(&request(&texture, &walkable, (0, 0), (9, 9)));
    assert_eq!(output.texture, texture);
    assert_eq!(output.mask.iter_set().count(), 0);
}

#[test]
fn penalty_rules_route_around_painted_cells() {
    // a painted column with one unpainted gap at the bottom
    let grid = [
        [0, 0, 2, 0, 0],
        [0, 0, 2, 0, 0],
        [0, 0, 2, 0, 0],
        [0, 0, 2, 0, 0],
        [0, 0, 0, 0, 0],
    ];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let mut modifiers = Modifiers::new();
    modifiers.add(NamedColor::new("Swamp", GREEN), 500);

    let mut req = request(&texture, &walkable, (0, 0), (4, 0));
    req.modifiers = Some(&modifiers);
    req.config = SearchConfig::cardinal();

    let output = draw_path(&req);

    // every painted cell is avoided; the path dips through the gap at (2, 4)
    for index in (0..texture.len()).filter(|&i| texture[i] == GREEN) {
        assert!(!output.mask.is_point_set(index));
    }
    assert!(output.mask.is_point_set(texture.index_of((2, 4))));
}

#[test]
fn start_equals_target_draws_nothing() {
    let grid = [[0; 5]; 5];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let output = draw_path(&request(&texture, &walkable, (2, 2), (2, 2)));
    assert_eq!(output.texture, texture);
    assert_eq!(output.mask.iter_set().count(), 0);
}

#[test]
fn identical_requests_are_deterministic() {
    let grid = [
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 0, 0],
    ];
    let (texture, walkable) = artifacts(&grid, GREEN);
    let req = request(&texture, &walkable, (0, 0), (4, 4));

    let first = draw_path(&req);
    let second = draw_path(&req);
    assert_eq!(first, second);
}

#[cfg(feature = "parallel")]
#[test]
fn batched_requests_match_sequential() {
    let grid = [
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 0, 0],
    ];
    let (texture, walkable) = artifacts(&grid, GREEN);

    let requests: Vec<_> = [((0, 0), (4, 4)), ((4, 0), (0, 4)), ((2, 2), (4, 4))]
        .into_iter()
        .map(|(start, target)| request(&texture, &walkable, start, target))
        .collect();

    let batched = draw_paths(&requests);
    let sequential: Vec<_> = requests.iter().map(draw_path).collect();
    assert_eq!(batched, sequential);
}
