//! Two interchangeable double-buffering layouts. Both implement [`Storage`]
//! and must produce numerically identical simulations; the choice is a
//! memory-layout tradeoff, not a behavioral one.

use crate::grid::{Cell, Channel, Field, Slot};

/// Which buffering layout an engine uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Two whole fields swapped by reference each tick. Old and New live in
    /// disjoint allocations, so the step pass can fan out across rows.
    #[default]
    DualArray,
    /// One buffer whose every cell carries two time slots per chemical, with
    /// an external current-slot index toggled each tick.
    SlotCell,
}

/// Slot-addressed access to the chemical fields. `swap` exchanges the Old/New
/// roles in O(1) — a reference or index swap, never a data copy.
pub trait Storage {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn get(&self, x: usize, y: usize, channel: Channel, slot: Slot) -> f64;
    fn set(&mut self, x: usize, y: usize, channel: Channel, slot: Slot, value: f64);
    fn swap(&mut self);
}

/// Dual-array layout: `old` is read-only for the duration of a tick, `next`
/// is the write target, `swap` exchanges the two.
#[derive(Clone, Debug)]
pub struct DualArray {
    old: Field,
    next: Field,
}

impl DualArray {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            old: Field::new(rows, cols),
            next: Field::new(rows, cols),
        }
    }

    /// The most recently completed buffer.
    #[inline]
    pub fn old(&self) -> &Field {
        &self.old
    }

    /// Split borrow for the step pass: shared reads from the old buffer,
    /// exclusive writes into the next one.
    #[inline]
    pub fn split(&mut self) -> (&Field, &mut Field) {
        (&self.old, &mut self.next)
    }
}

impl Storage for DualArray {
    fn rows(&self) -> usize {
        self.old.rows
    }

    fn cols(&self) -> usize {
        self.old.cols
    }

    fn get(&self, x: usize, y: usize, channel: Channel, slot: Slot) -> f64 {
        let field = match slot {
            Slot::Old => &self.old,
            Slot::New => &self.next,
        };
        field.get(x, y).channel(channel)
    }

    fn set(&mut self, x: usize, y: usize, channel: Channel, slot: Slot, value: f64) {
        let field = match slot {
            Slot::Old => &mut self.old,
            Slot::New => &mut self.next,
        };
        let mut cell = field.get(x, y);
        match channel {
            Channel::A => cell.a = value,
            Channel::B => cell.b = value,
        }
        field.set(x, y, cell);
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.old, &mut self.next);
    }
}

/// One cell of the slot-cell layout: two time slots per chemical.
#[derive(Clone, Copy, Debug)]
pub struct SlotCell {
    pub a: [f64; 2],
    pub b: [f64; 2],
}

impl SlotCell {
    const EQUILIBRIUM: SlotCell = SlotCell {
        a: [1.0; 2],
        b: [0.0; 2],
    };

    #[inline]
    pub fn channel(&self, channel: Channel, slot: usize) -> f64 {
        match channel {
            Channel::A => self.a[slot],
            Channel::B => self.b[slot],
        }
    }
}

/// Slot-cell layout: a single cell array plus an external current-slot index.
/// Both slots start at equilibrium so the first tick reads valid Old data.
#[derive(Clone, Debug)]
pub struct SlotGrid {
    cells: Vec<SlotCell>,
    rows: usize,
    cols: usize,
    current: usize,
}

impl SlotGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![SlotCell::EQUILIBRIUM; rows * cols],
            rows,
            cols,
            current: 0,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.rows && y < self.cols);
        x * self.cols + y
    }

    #[inline]
    pub fn cell(&self, i: usize) -> &SlotCell {
        &self.cells[i]
    }

    /// Index of the Old slot for the current tick.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The Old-slot view of one cell, as a plain [`Cell`].
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> Cell {
        let c = self.cells[self.idx(x, y)];
        Cell {
            a: c.a[self.current],
            b: c.b[self.current],
        }
    }
}

impl Storage for SlotGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, x: usize, y: usize, channel: Channel, slot: Slot) -> f64 {
        let s = match slot {
            Slot::Old => self.current,
            Slot::New => self.current ^ 1,
        };
        self.cells[self.idx(x, y)].channel(channel, s)
    }

    fn set(&mut self, x: usize, y: usize, channel: Channel, slot: Slot, value: f64) {
        let s = match slot {
            Slot::Old => self.current,
            Slot::New => self.current ^ 1,
        };
        let i = self.idx(x, y);
        match channel {
            Channel::A => self.cells[i].a[s] = value,
            Channel::B => self.cells[i].b[s] = value,
        }
    }

    fn swap(&mut self) {
        self.current ^= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_array_swap_exchanges_roles() {
        let mut s = DualArray::new(3, 3);
        s.set(1, 1, Channel::B, Slot::New, 0.75);
        assert_eq!(s.get(1, 1, Channel::B, Slot::Old), 0.0);
        s.swap();
        assert_eq!(s.get(1, 1, Channel::B, Slot::Old), 0.75);
    }

    #[test]
    fn slot_grid_swap_toggles_index() {
        let mut s = SlotGrid::new(3, 3);
        s.set(1, 2, Channel::A, Slot::New, 0.25);
        assert_eq!(s.get(1, 2, Channel::A, Slot::Old), 1.0);
        s.swap();
        assert_eq!(s.get(1, 2, Channel::A, Slot::Old), 0.25);
        s.swap();
        assert_eq!(s.get(1, 2, Channel::A, Slot::Old), 1.0);
    }

    #[test]
    fn both_layouts_start_at_equilibrium_in_both_slots() {
        let dual = DualArray::new(4, 4);
        let slot = SlotGrid::new(4, 4);
        for s in [Slot::Old, Slot::New] {
            assert_eq!(dual.get(2, 2, Channel::A, s), 1.0);
            assert_eq!(dual.get(2, 2, Channel::B, s), 0.0);
            assert_eq!(slot.get(2, 2, Channel::A, s), 1.0);
            assert_eq!(slot.get(2, 2, Channel::B, s), 0.0);
        }
    }
}
