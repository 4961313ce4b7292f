//! Step scheduler: one full pass over the interior into the New slot, then an
//! O(1) swap so the next tick reads what this one wrote. The boundary ring is
//! never touched and keeps its seeded values for the lifetime of the run.

use rayon::prelude::*;

use crate::config::Params;
use crate::diffusion::{convolve, convolve_slots};
use crate::grid::{Cell, Channel, Slot};
use crate::reaction::gray_scott;
use crate::storage::{DualArray, SlotGrid, Storage};
use crate::topology::Topology;

/// Dual-array tick. Old and New live in disjoint allocations, so rows of the
/// New buffer fan out across the rayon pool; every worker reads only the Old
/// buffer and writes only its own row. The join before the swap is the
/// all-writers-finish barrier.
pub fn step_dual(buffers: &mut DualArray, params: &Params) {
    let (old, next) = buffers.split();
    let rows = old.rows;
    let cols = old.cols;

    next.data
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(x, row)| {
            if x == 0 || x == rows - 1 {
                return;
            }
            for y in 1..cols - 1 {
                let c = old.get(x, y);
                let conv_a = convolve(old, x, y, Channel::A);
                let conv_b = convolve(old, x, y, Channel::B);
                let (a, b) = gray_scott(c.a, c.b, conv_a, conv_b, params);
                row[y] = Cell { a, b };
            }
        });

    buffers.swap();
}

/// Slot-cell tick: a serial interior pass writing the inactive slot, then an
/// index flip. Reads and writes address different slots of the same cells, so
/// the pass never observes its own writes.
pub fn step_slot(grid: &mut SlotGrid, topo: &Topology, params: &Params) {
    let rows = grid.rows();
    let cols = grid.cols();

    for x in 1..rows - 1 {
        for y in 1..cols - 1 {
            let a = grid.get(x, y, Channel::A, Slot::Old);
            let b = grid.get(x, y, Channel::B, Slot::Old);
            let conv_a = convolve_slots(grid, topo, x, y, Channel::A);
            let conv_b = convolve_slots(grid, topo, x, y, Channel::B);
            let (na, nb) = gray_scott(a, b, conv_a, conv_b, params);
            grid.set(x, y, Channel::A, Slot::New, na);
            grid.set(x, y, Channel::B, Slot::New, nb);
        }
    }

    grid.swap();
}
