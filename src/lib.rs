pub mod config;
pub mod diffusion;
pub mod error;
pub mod grid;
pub mod reaction;
pub mod render;
pub mod rng;
pub mod seed;
pub mod step;
pub mod storage;
pub mod topology;

use std::time::Instant;

use config::Params;
use error::EngineError;
use grid::Cell;
use seed::SeedLayout;
use storage::{DualArray, SlotGrid, Strategy};
use topology::Topology;

/// The two storage layouts behind one engine. The slot-cell layout carries
/// its precomputed neighbor table; the dual-array layout addresses neighbors
/// by index arithmetic and needs none.
#[derive(Debug)]
enum Buffers {
    Dual(DualArray),
    Slot(SlotGrid, Topology),
}

/// One owned simulation instance: grid buffers, topology, and rate constants.
/// No globals; everything the run needs lives here.
#[derive(Debug)]
pub struct Engine {
    buffers: Buffers,
    params: Params,
    rows: usize,
    cols: usize,
}

impl Engine {
    /// Dual-array engine with a single center seed block.
    pub fn new(
        rows: usize,
        cols: usize,
        square_size: usize,
        params: Params,
    ) -> Result<Self, EngineError> {
        Self::with_options(
            rows,
            cols,
            square_size,
            SeedLayout::Center,
            Strategy::DualArray,
            params,
        )
    }

    /// Full constructor: validates dimensions and parameters, allocates the
    /// chosen layout, builds the topology where needed, and seeds both slots.
    pub fn with_options(
        rows: usize,
        cols: usize,
        square_size: usize,
        layout: SeedLayout,
        strategy: Strategy,
        params: Params,
    ) -> Result<Self, EngineError> {
        if rows < 3 || cols < 3 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        params.validate()?;

        let buffers = match strategy {
            Strategy::DualArray => {
                let mut b = DualArray::new(rows, cols);
                seed::seed(&mut b, square_size, layout);
                Buffers::Dual(b)
            }
            Strategy::SlotCell => {
                let mut g = SlotGrid::new(rows, cols);
                seed::seed(&mut g, square_size, layout);
                Buffers::Slot(g, Topology::build(rows, cols))
            }
        };

        Ok(Self {
            buffers,
            params,
            rows,
            cols,
        })
    }

    /// Advances one tick: every interior cell is updated into the New slot
    /// from Old-slot reads, then the slot roles swap. Never fails.
    pub fn step(&mut self) {
        match &mut self.buffers {
            Buffers::Dual(b) => step::step_dual(b, &self.params),
            Buffers::Slot(g, topo) => step::step_slot(g, topo, &self.params),
        }
    }

    /// Advances `ticks` ticks.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Concentrations at `(x, y)` from the most recently completed slot.
    pub fn sample(&self, x: usize, y: usize) -> Result<(f64, f64), EngineError> {
        if x >= self.rows || y >= self.cols {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let c = self.cell(x, y);
        Ok((c.a, c.b))
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Unchecked Old-slot read, used by the rasterizer's inner loops.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        match &self.buffers {
            Buffers::Dual(b) => b.old().get(x, y),
            Buffers::Slot(g, _) => g.sample(x, y),
        }
    }
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Convenience driver for the CLI and the preview server: build an engine,
/// run it for `ticks`, and report per-stage timings.
pub fn simulate(
    rows: usize,
    cols: usize,
    square_size: usize,
    ticks: usize,
    params: Params,
) -> Result<(Engine, Vec<Timing>), EngineError> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let mut engine = Engine::new(rows, cols, square_size, params)?;
    timings.push(Timing {
        name: "seed",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    engine.run(ticks);
    timings.push(Timing {
        name: "steps",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    Ok((engine, timings))
}
