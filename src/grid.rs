use once_cell::sync::Lazy;

pub const GRID_SIZE: usize = 6;
pub const NUM_NODES: usize = GRID_SIZE * GRID_SIZE;
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

static NEIGHBORS: Lazy<Vec<Vec<usize>>> = Lazy::new(|| {
    (0..NUM_NODES)
        .map(|node| {
            let (row, col) = pos_to_row_col(node);
            DIRECTIONS
                .iter()
                .filter_map(|(dr, dc)| node_at(row + dr, col + dc))
                .collect()
        })
        .collect()
});

/// Returns `(row, col)` for a node index, or `None` when out of range.
pub fn row_col(node: usize) -> Option<(u8, u8)> {
    if node >= NUM_NODES {
        return None;
    }
    Some(((node / GRID_SIZE) as u8, (node % GRID_SIZE) as u8))
}

/// Bounds-checked inverse of [`row_col`].
pub fn node_at(row: i32, col: i32) -> Option<usize> {
    if in_bounds(row, col) {
        Some(row as usize * GRID_SIZE + col as usize)
    } else {
        None
    }
}

/// True iff the nodes are one orthogonal step apart. No wraparound.
pub fn is_adjacent(a: usize, b: usize) -> bool {
    if a >= NUM_NODES || b >= NUM_NODES {
        return false;
    }
    let (ar, ac) = pos_to_row_col(a);
    let (br, bc) = pos_to_row_col(b);
    (ar - br).abs() + (ac - bc).abs() == 1
}

/// On-grid 4-neighborhood in up, down, left, right order.
pub fn neighbors(node: usize) -> &'static [usize] {
    NEIGHBORS.get(node).map(Vec::as_slice).unwrap_or(&[])
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / GRID_SIZE) as i32, (pos % GRID_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..GRID_SIZE as i32).contains(&row) && (0..GRID_SIZE as i32).contains(&col)
}
