//! 9-point discrete Laplacian over one chemical channel. The kernel weights
//! sum to zero (4*0.2 + 4*0.05 - 1.0), so pure diffusion conserves total
//! concentration and a uniform field diffuses to exactly zero.
//!
//! Both functions read the Old slot only and are pure; they exist in two
//! addressing styles matching the two storage layouts: index arithmetic over a
//! flat field, and precomputed neighbor indices over slot cells.

use crate::grid::{Channel, Field};
use crate::storage::SlotGrid;
use crate::topology::{DIAG, ORTHO, Topology};

pub const ORTHO_WEIGHT: f64 = 0.2;
pub const DIAG_WEIGHT: f64 = 0.05;

/// Weighted neighbor average minus the center value, addressed by index
/// arithmetic. `field` must be the Old buffer; `(x, y)` must be interior.
#[inline]
pub fn convolve(field: &Field, x: usize, y: usize, channel: Channel) -> f64 {
    debug_assert!(field.is_interior(x, y));
    let mut acc = 0.0;
    for (dx, dy) in ORTHO {
        let nx = (x as i32 + dx) as usize;
        let ny = (y as i32 + dy) as usize;
        acc += field.get(nx, ny).channel(channel) * ORTHO_WEIGHT;
    }
    for (dx, dy) in DIAG {
        let nx = (x as i32 + dx) as usize;
        let ny = (y as i32 + dy) as usize;
        acc += field.get(nx, ny).channel(channel) * DIAG_WEIGHT;
    }
    acc - field.get(x, y).channel(channel)
}

/// Same kernel addressed through the precomputed topology table, reading the
/// current (Old) slot of a [`SlotGrid`]. Accumulates in the same neighbor
/// order as [`convolve`] so the two layouts stay bit-identical.
#[inline]
pub fn convolve_slots(
    grid: &SlotGrid,
    topo: &Topology,
    x: usize,
    y: usize,
    channel: Channel,
) -> f64 {
    let slot = grid.current();
    let n = topo.neighbors(x, y);
    let mut acc = 0.0;
    for &i in &n.orthogonal {
        acc += grid.cell(i).channel(channel, slot) * ORTHO_WEIGHT;
    }
    for &i in &n.diagonal {
        acc += grid.cell(i).channel(channel, slot) * DIAG_WEIGHT;
    }
    acc - grid.cell(grid.idx(x, y)).channel(channel, slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn kernel_weights_sum_to_zero() {
        let total = 4.0 * ORTHO_WEIGHT + 4.0 * DIAG_WEIGHT - 1.0;
        assert!(total.abs() < 1e-15);
    }

    #[test]
    fn uniform_field_convolves_to_zero() {
        let mut field = Field::new(5, 5);
        for c in &mut field.data {
            *c = Cell { a: 0.37, b: 0.11 };
        }
        for x in 1..4 {
            for y in 1..4 {
                assert!(convolve(&field, x, y, Channel::A).abs() < 1e-15);
                assert!(convolve(&field, x, y, Channel::B).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn single_spike_spreads_with_kernel_weights() {
        let mut field = Field::new(5, 5);
        for c in &mut field.data {
            *c = Cell { a: 0.0, b: 0.0 };
        }
        field.set(2, 2, Cell { a: 1.0, b: 0.0 });
        // Orthogonal neighbor of the spike
        assert!((convolve(&field, 2, 1, Channel::A) - ORTHO_WEIGHT).abs() < 1e-15);
        // Diagonal neighbor of the spike
        assert!((convolve(&field, 1, 1, Channel::A) - DIAG_WEIGHT).abs() < 1e-15);
        // The spike itself loses its full value
        assert!((convolve(&field, 2, 2, Channel::A) + 1.0).abs() < 1e-15);
    }

    #[test]
    fn addressing_styles_agree_exactly() {
        use crate::grid::Slot;
        use crate::storage::Storage;

        let rows = 6;
        let cols = 7;
        let mut field = Field::new(rows, cols);
        let mut slots = SlotGrid::new(rows, cols);
        let topo = Topology::build(rows, cols);
        // Deterministic non-uniform fill
        for x in 0..rows {
            for y in 0..cols {
                let a = ((x * 31 + y * 7) % 13) as f64 / 13.0;
                let b = ((x * 17 + y * 3) % 11) as f64 / 11.0;
                field.set(x, y, Cell { a, b });
                slots.set(x, y, Channel::A, Slot::Old, a);
                slots.set(x, y, Channel::B, Slot::Old, b);
            }
        }
        for x in 1..rows - 1 {
            for y in 1..cols - 1 {
                for ch in [Channel::A, Channel::B] {
                    let lhs = convolve(&field, x, y, ch);
                    let rhs = convolve_slots(&slots, &topo, x, y, ch);
                    assert_eq!(lhs, rhs);
                }
            }
        }
    }
}
