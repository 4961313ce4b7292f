/// Row-major flat grid of cells. No per-cell heap objects; a cell's coordinate
/// is implicit in its linear index.

/// One cell's chemical concentrations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub a: f64,
    pub b: f64,
}

impl Cell {
    /// Background equilibrium: all A, no B.
    pub const EQUILIBRIUM: Cell = Cell { a: 1.0, b: 0.0 };

    #[inline]
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::A => self.a,
            Channel::B => self.b,
        }
    }
}

/// Which chemical a storage access addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

/// Which time-buffer a storage access addresses. `Old` is the fully-populated
/// read side of the current tick; `New` is write-only until the swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Old,
    New,
}

/// One time-buffer of the simulation. `x` is the row, `y` the column.
#[derive(Clone, Debug)]
pub struct Field {
    pub data: Vec<Cell>,
    pub rows: usize,
    pub cols: usize,
}

impl Field {
    /// Allocates a field with every cell at background equilibrium, so both
    /// buffers hold valid chemistry before any explicit seeding.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![Cell::EQUILIBRIUM; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.rows && y < self.cols);
        x * self.cols + y
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Cell) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Interior cells have a full ring of 8 neighbors; the outer boundary ring
    /// is never updated by the simulation.
    #[inline]
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.rows && y + 1 < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_equilibrium_everywhere() {
        let f = Field::new(4, 7);
        assert!(f.data.iter().all(|c| *c == Cell::EQUILIBRIUM));
    }

    #[test]
    fn interior_excludes_boundary_ring() {
        let f = Field::new(5, 5);
        assert!(f.is_interior(1, 1));
        assert!(f.is_interior(3, 3));
        assert!(!f.is_interior(0, 2));
        assert!(!f.is_interior(4, 2));
        assert!(!f.is_interior(2, 0));
        assert!(!f.is_interior(2, 4));
    }
}
