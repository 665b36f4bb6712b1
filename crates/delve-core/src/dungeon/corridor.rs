//! Corridor passes
//!
//! Four passes over the partitioned grid, run in order:
//! 1. Extrude one-tile corridors from each room toward the reserved lines.
//! 2. Merge confluence points along each vertical line into a backbone.
//! 3. Branch rightward along horizontal lines, probabilistically.
//! 4. Flood-clear corridors that dead-end away from every room.

use delve_rng::GameRng;

use super::{CellFlags, Direction, Grid, Room};
use crate::CROSS_CONNECT_CHANCE;

/// Grow corridors from every enabled room toward the surrounding reserved
/// lines
///
/// `rooms` is column-major: index `col * size_y + row`. Left/Right are always
/// attempted away from the grid border; Up/Down are attempted half the time.
/// A scan that runs off the grid without meeting a reserved line marks
/// nothing and is not an error.
pub fn extrude_corridors(
    grid: &mut Grid,
    rooms: &[Room],
    size_x: usize,
    size_y: usize,
    rng: &mut GameRng,
) {
    for col in 0..size_x {
        for row in 0..size_y {
            let room = rooms[col * size_y + row];
            if !room.is_enabled() {
                continue;
            }

            if col > 0 {
                extrude_one(grid, &room, Direction::Left, rng);
            }
            if col + 1 < size_x {
                extrude_one(grid, &room, Direction::Right, rng);
            }
            if row > 0 && rng.one_in(2) {
                extrude_one(grid, &room, Direction::Up, rng);
            }
            if row + 1 < size_y && rng.one_in(2) {
                extrude_one(grid, &room, Direction::Down, rng);
            }
        }
    }
}

/// Dig a single corridor from a random point on the room edge to the nearest
/// reserved line in `dir`
fn extrude_one(grid: &mut Grid, room: &Room, dir: Direction, rng: &mut GameRng) {
    let (dx, dy) = dir.delta();
    let (mut x, mut y) = match dir {
        Direction::Left => (room.x as i32 - 1, (room.y + rng.rn2(room.height as u32) as usize) as i32),
        Direction::Right => (room.right() as i32, (room.y + rng.rn2(room.height as u32) as usize) as i32),
        Direction::Up => ((room.x + rng.rn2(room.width as u32) as usize) as i32, room.y as i32 - 1),
        Direction::Down => ((room.x + rng.rn2(room.width as u32) as usize) as i32, room.bottom() as i32),
    };

    let mut scanned = Vec::new();
    while grid.in_bounds(x, y) {
        if grid.contains(x as usize, y as usize, CellFlags::RESERVED_AISLE) {
            for &(sx, sy) in &scanned {
                grid.insert(sx, sy, CellFlags::AISLE);
            }
            grid.insert(
                x as usize,
                y as usize,
                CellFlags::AISLE | CellFlags::CONFLUENCE,
            );
            return;
        }
        scanned.push((x as usize, y as usize));
        x += dx;
        y += dy;
    }
    // ran off the grid: skip
}

/// Merge confluence points along each vertical split line
///
/// This pass carries the reachability guarantee: every room stubs into the
/// vertical lines beside it, and the spans dug here tie those stubs together.
/// Lines with an odd confluence count or an odd position get one backbone
/// span from first to last; the remaining case connects consecutive pairs.
pub fn connect_vertical(grid: &mut Grid, splits_x: &[usize]) {
    for (index, &x) in splits_x.iter().enumerate() {
        let points: Vec<usize> = (0..grid.height())
            .filter(|&y| grid.contains(x, y, CellFlags::CONFLUENCE))
            .collect();
        if points.len() < 2 {
            continue;
        }

        if points.len() % 2 == 1 || index % 2 == 1 {
            dig_span(grid, x, points[0], points[points.len() - 1]);
        } else {
            for pair in points.chunks_exact(2) {
                dig_span(grid, x, pair[0], pair[1]);
            }
        }
    }
}

/// Mark a vertical run of cells as aisle
fn dig_span(grid: &mut Grid, x: usize, y0: usize, y1: usize) {
    for y in y0..=y1 {
        grid.insert(x, y, CellFlags::AISLE);
    }
}

/// Add optional branch corridors along each horizontal split line
///
/// Each confluence starts a rightward walk. Another confluence is an anchor
/// and always connects; a crossing connects with low probability, and only
/// when something already runs through it. Scanned cells are committed only
/// once an anchor ahead is confirmed, so an aborted walk leaves no marks.
pub fn connect_horizontal(grid: &mut Grid, splits_y: &[usize], rng: &mut GameRng) {
    for &y in splits_y {
        for x in 0..grid.width() {
            if grid.contains(x, y, CellFlags::CONFLUENCE) {
                branch_walk(grid, x, y, rng);
            }
        }
    }
}

/// One rightward branch walk, iterative with deferred marking
///
/// The deferral preserves the original post-order semantics: a cell
/// materializes only after the walk beyond it has found an anchor.
fn branch_walk(grid: &mut Grid, start_x: usize, y: usize, rng: &mut GameRng) {
    let right_sentinel = grid.width() - 2;
    let mut pending = Vec::new();
    let mut adopted_cross = None;
    let mut connect = false;

    let mut x = start_x + 1;
    while x < grid.width() {
        let flags = grid.flags(x, y);
        if flags.contains(CellFlags::CONFLUENCE) {
            connect = true;
            break;
        }
        if flags.contains(CellFlags::CROSS) {
            if x == right_sentinel {
                break;
            }
            if grid.neighbors_with(x, y, CellFlags::AISLE) == 0 {
                break;
            }
            if rng.percent(CROSS_CONNECT_CHANCE) {
                adopted_cross = Some(x);
                connect = true;
            }
            break;
        }
        pending.push(x);
        x += 1;
    }

    if connect {
        if let Some(cx) = adopted_cross {
            grid.insert(cx, y, CellFlags::AISLE);
        }
        for px in pending {
            grid.insert(px, y, CellFlags::AISLE);
        }
    }
}

/// Remove corridors that dead-end away from every room
///
/// A confluence on a horizontal line with exactly one aisle neighbor leads
/// nowhere; its whole branch is flood-cleared, stopping at room cells.
pub fn prune_dead_ends(grid: &mut Grid, splits_y: &[usize]) {
    for &y in splits_y {
        for x in 0..grid.width() {
            if grid.contains(x, y, CellFlags::CONFLUENCE)
                && grid.neighbors_with(x, y, CellFlags::AISLE) == 1
            {
                flood_clear(grid, x, y);
            }
        }
    }
}

/// Iterative flood-clear of aisle flags across orthogonal neighbors
fn flood_clear(grid: &mut Grid, x: usize, y: usize) {
    let mut stack = vec![(x, y)];
    while let Some((cx, cy)) = stack.pop() {
        if grid.intersects(cx, cy, CellFlags::ROOM) {
            continue;
        }
        if !grid.intersects(cx, cy, CellFlags::AISLE) {
            continue;
        }
        grid.remove(cx, cy, CellFlags::AISLE | CellFlags::CONFLUENCE);

        for (dx, dy) in [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
            let nx = cx as i32 + dx;
            let ny = cy as i32 + dy;
            if grid.in_bounds(nx, ny)
                && grid.contains(nx as usize, ny as usize, CellFlags::AISLE)
            {
                stack.push((nx as usize, ny as usize));
            }
        }
    }
}
