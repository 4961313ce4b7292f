//! Initial condition seeding. Runs exactly once, before the first tick:
//! background equilibrium (A=1, B=0) everywhere, then square perturbation
//! blocks of side `2*square_size` with A=1, B=1. Both time slots are written
//! identically so the first tick's Old reads are always valid.

use crate::grid::{Channel, Slot};
use crate::rng::Rng;
use crate::storage::Storage;

/// Where the perturbation blocks go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedLayout {
    /// One block at the grid center.
    Center,
    /// Five symmetric blocks at quarter-grid points: the three on the main
    /// diagonal plus the two off-diagonal quarter points.
    FivePoint,
    /// `count` blocks at deterministic pseudo-random interior positions.
    Random { count: usize, seed: u64 },
}

/// Populates a freshly allocated storage. Blocks that would extend past the
/// interior are clipped at the boundary ring, so the ring always keeps its
/// equilibrium values.
pub fn seed<S: Storage>(storage: &mut S, square_size: usize, layout: SeedLayout) {
    let rows = storage.rows();
    let cols = storage.cols();

    for x in 0..rows {
        for y in 0..cols {
            for slot in [Slot::Old, Slot::New] {
                storage.set(x, y, Channel::A, slot, 1.0);
                storage.set(x, y, Channel::B, slot, 0.0);
            }
        }
    }

    for (cx, cy) in centers(rows, cols, square_size, layout) {
        stamp(storage, cx, cy, square_size);
    }
}

fn centers(
    rows: usize,
    cols: usize,
    square_size: usize,
    layout: SeedLayout,
) -> Vec<(usize, usize)> {
    match layout {
        SeedLayout::Center => vec![(rows / 2, cols / 2)],
        SeedLayout::FivePoint => {
            let mut v: Vec<(usize, usize)> =
                (1..=3).map(|s| (rows * s / 4, cols * s / 4)).collect();
            v.push((rows * 3 / 4, cols / 4));
            v.push((rows / 4, cols * 3 / 4));
            v
        }
        SeedLayout::Random { count, seed } => {
            let mut rng = Rng::new(seed);
            // Valid block centers keep the whole block inside the interior;
            // fall back to the grid center when the grid is too small.
            let span_x = rows.saturating_sub(2 * square_size + 2);
            let span_y = cols.saturating_sub(2 * square_size + 2);
            (0..count)
                .map(|_| {
                    if span_x == 0 || span_y == 0 {
                        (rows / 2, cols / 2)
                    } else {
                        (
                            1 + square_size + rng.range_usize(span_x),
                            1 + square_size + rng.range_usize(span_y),
                        )
                    }
                })
                .collect()
        }
    }
}

/// One block of side `2*square_size` centered at `(cx, cy)`, clipped to the
/// interior, written to both slots.
fn stamp<S: Storage>(storage: &mut S, cx: usize, cy: usize, square_size: usize) {
    let rows = storage.rows();
    let cols = storage.cols();
    let s = square_size as i32;
    for dx in -s..s {
        for dy in -s..s {
            let x = cx as i32 + dx;
            let y = cy as i32 + dy;
            if x < 1 || y < 1 || x as usize > rows - 2 || y as usize > cols - 2 {
                continue;
            }
            for slot in [Slot::Old, Slot::New] {
                storage.set(x as usize, y as usize, Channel::A, slot, 1.0);
                storage.set(x as usize, y as usize, Channel::B, slot, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DualArray, SlotGrid};

    #[test]
    fn both_slots_are_seeded_identically() {
        let mut grid = SlotGrid::new(9, 9);
        seed(&mut grid, 2, SeedLayout::Center);
        for x in 0..9 {
            for y in 0..9 {
                for ch in [Channel::A, Channel::B] {
                    assert_eq!(
                        grid.get(x, y, ch, Slot::Old),
                        grid.get(x, y, ch, Slot::New)
                    );
                }
            }
        }
    }

    #[test]
    fn center_block_covers_expected_cells() {
        let mut grid = DualArray::new(9, 9);
        seed(&mut grid, 1, SeedLayout::Center);
        // Side 2 block: rows/cols 3..5 around center (4,4)
        for x in 0..9 {
            for y in 0..9 {
                let want = (3..5).contains(&x) && (3..5).contains(&y);
                let b = grid.get(x, y, Channel::B, Slot::Old);
                assert_eq!(b, if want { 1.0 } else { 0.0 }, "at ({x}, {y})");
                assert_eq!(grid.get(x, y, Channel::A, Slot::Old), 1.0);
            }
        }
    }

    #[test]
    fn oversized_block_never_touches_the_boundary_ring() {
        let mut grid = DualArray::new(5, 5);
        seed(&mut grid, 10, SeedLayout::Center);
        for i in 0..5 {
            for (x, y) in [(0, i), (4, i), (i, 0), (i, 4)] {
                assert_eq!(grid.get(x, y, Channel::A, Slot::Old), 1.0);
                assert_eq!(grid.get(x, y, Channel::B, Slot::Old), 0.0);
            }
        }
        // Interior is fully stamped
        assert_eq!(grid.get(2, 2, Channel::B, Slot::Old), 1.0);
    }

    #[test]
    fn five_point_layout_stamps_all_quarter_points() {
        let mut grid = DualArray::new(40, 40);
        seed(&mut grid, 2, SeedLayout::FivePoint);
        for (x, y) in [(10, 10), (20, 20), (30, 30), (30, 10), (10, 30)] {
            assert_eq!(grid.get(x, y, Channel::B, Slot::Old), 1.0, "at ({x}, {y})");
        }
    }

    #[test]
    fn random_layout_is_deterministic_and_interior_only() {
        let mut a = DualArray::new(20, 20);
        let mut b = DualArray::new(20, 20);
        seed(&mut a, 2, SeedLayout::Random { count: 4, seed: 9 });
        seed(&mut b, 2, SeedLayout::Random { count: 4, seed: 9 });
        let mut stamped = 0;
        for x in 0..20 {
            for y in 0..20 {
                let va = a.get(x, y, Channel::B, Slot::Old);
                assert_eq!(va, b.get(x, y, Channel::B, Slot::Old));
                if va == 1.0 {
                    stamped += 1;
                    assert!(x >= 1 && y >= 1 && x <= 18 && y <= 18);
                }
            }
        }
        assert!(stamped > 0);
    }
}
