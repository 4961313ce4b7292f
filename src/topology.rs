//! Precomputed 8-neighbor adjacency for interior cells, stored as linear
//! indices into the cell array. Built in one pass after allocation; the grid
//! never resizes, so the table is immutable for the lifetime of the run.

/// Orthogonal neighbor offsets, in the order the diffusion kernel visits them.
/// The slot-cell and dual-array addressing styles must share this order so the
/// two strategies sum in identical order and stay bit-identical.
pub const ORTHO: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal neighbor offsets, same ordering contract as [`ORTHO`].
pub const DIAG: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Linear indices of one interior cell's neighbors.
#[derive(Clone, Copy, Debug)]
pub struct Neighbors {
    pub orthogonal: [usize; 4],
    pub diagonal: [usize; 4],
}

/// Adjacency table covering the interior (rows 1..R-1, cols 1..C-1).
#[derive(Clone, Debug)]
pub struct Topology {
    rows: usize,
    cols: usize,
    table: Vec<Neighbors>,
}

impl Topology {
    /// One pass over the interior; every offset lands in bounds because the
    /// boundary ring is excluded.
    pub fn build(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 3 && cols >= 3);
        let mut table = Vec::with_capacity((rows - 2) * (cols - 2));
        for x in 1..rows - 1 {
            for y in 1..cols - 1 {
                let at = |dx: i32, dy: i32| {
                    let nx = (x as i32 + dx) as usize;
                    let ny = (y as i32 + dy) as usize;
                    nx * cols + ny
                };
                let mut orthogonal = [0usize; 4];
                let mut diagonal = [0usize; 4];
                for (k, (dx, dy)) in ORTHO.iter().enumerate() {
                    orthogonal[k] = at(*dx, *dy);
                }
                for (k, (dx, dy)) in DIAG.iter().enumerate() {
                    diagonal[k] = at(*dx, *dy);
                }
                table.push(Neighbors {
                    orthogonal,
                    diagonal,
                });
            }
        }
        let topo = Self { rows, cols, table };
        debug_assert!(topo.is_reciprocal());
        topo
    }

    #[inline]
    fn interior_idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x >= 1 && y >= 1 && x + 1 < self.rows && y + 1 < self.cols);
        (x - 1) * (self.cols - 2) + (y - 1)
    }

    /// Neighbor indices of an interior cell.
    #[inline]
    pub fn neighbors(&self, x: usize, y: usize) -> &Neighbors {
        &self.table[self.interior_idx(x, y)]
    }

    /// Reciprocity check: if N sits at offset +d from C, then C sits at -d
    /// from N. Only checked where both cells are interior (boundary cells
    /// carry no neighbor entries).
    pub fn is_reciprocal(&self) -> bool {
        let interior =
            |i: usize| -> Option<(usize, usize)> {
                let (x, y) = (i / self.cols, i % self.cols);
                (x >= 1 && y >= 1 && x + 1 < self.rows && y + 1 < self.cols).then_some((x, y))
            };
        for x in 1..self.rows - 1 {
            for y in 1..self.cols - 1 {
                let here = x * self.cols + y;
                let n = self.neighbors(x, y);
                for (k, &i) in n.orthogonal.iter().enumerate() {
                    if let Some((nx, ny)) = interior(i) {
                        // ORTHO pairs opposites at k ^ 1: (1,0)/(-1,0), (0,1)/(0,-1)
                        if self.neighbors(nx, ny).orthogonal[k ^ 1] != here {
                            return false;
                        }
                    }
                }
                for (k, &i) in n.diagonal.iter().enumerate() {
                    if let Some((nx, ny)) = interior(i) {
                        // DIAG pairs opposites at 3 - k: (1,1)/(-1,-1), (1,-1)/(-1,1)
                        if self.neighbors(nx, ny).diagonal[3 - k] != here {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_pair_into_opposites() {
        for k in 0..4 {
            let (dx, dy) = ORTHO[k];
            assert_eq!(ORTHO[k ^ 1], (-dx, -dy));
            let (dx, dy) = DIAG[k];
            assert_eq!(DIAG[3 - k], (-dx, -dy));
        }
    }

    #[test]
    fn center_cell_neighbors_of_3x3() {
        let t = Topology::build(3, 3);
        let n = t.neighbors(1, 1);
        // (2,1), (0,1), (1,2), (1,0) in ORTHO order
        assert_eq!(n.orthogonal, [7, 1, 5, 3]);
        // (2,2), (2,0), (0,2), (0,0) in DIAG order
        assert_eq!(n.diagonal, [8, 6, 2, 0]);
    }

    #[test]
    fn reciprocity_holds_on_rectangular_grids() {
        assert!(Topology::build(3, 3).is_reciprocal());
        assert!(Topology::build(5, 9).is_reciprocal());
        assert!(Topology::build(12, 4).is_reciprocal());
    }
}
