//! Step-wise FDTD integration over a masked grid.

use rayon::prelude::*;

use super::coefficients::StabilityCoefficients;
use crate::error::{PhysicsError, PhysicsResult};
use crate::grid::{ensure_same_dimensions, BoundaryMask, Grid};

/// A running FDTD simulation.
///
/// Holds three time levels in fixed slots. `head` names the slot holding the
/// previous level; the current and next levels follow it cyclically, so a time
/// step only advances `head` and never copies a grid.
#[derive(Debug)]
pub struct FdtdSimulation<'m> {
    mask: &'m BoundaryMask,
    coefficients: StabilityCoefficients,
    slots: [Grid; 3],
    head: usize,
    time: usize,
}

impl<'m> FdtdSimulation<'m> {
    /// Starts a simulation from the displacement at `t = 0` and `t = 1`.
    ///
    /// Fails if `u0`, `u1` and `mask` do not share the same dimensions, or if
    /// they are empty.
    pub fn new(
        u0: Grid,
        u1: Grid,
        mask: &'m BoundaryMask,
        coefficients: StabilityCoefficients,
    ) -> PhysicsResult<Self> {
        let dimensions = u0.dimensions();
        ensure_same_dimensions("u1", dimensions, u1.dimensions())?;
        ensure_same_dimensions("mask", dimensions, mask.dimensions())?;
        if dimensions.0 == 0 || dimensions.1 == 0 {
            return Err(PhysicsError::invalid_param(
                "grid",
                "must have at least one cell",
            ));
        }

        let next = Grid::zeros(dimensions.0, dimensions.1);
        Ok(Self {
            mask,
            coefficients,
            slots: [u0, u1, next],
            head: 0,
            time: 1,
        })
    }

    /// Time index of [`Self::current`]; `1` before the first step.
    pub fn time(&self) -> usize {
        self.time
    }

    /// The most recently computed time level.
    pub fn current(&self) -> &Grid {
        &self.slots[(self.head + 1) % 3]
    }

    /// The time level before [`Self::current`].
    pub fn previous(&self) -> &Grid {
        &self.slots[self.head]
    }

    /// Advances one time step and returns the new current level.
    ///
    /// Every updatable cell (interior and off the outer ring) takes the
    /// five-point stencil value; every other cell is set to zero.
    pub fn step(&mut self) -> &Grid {
        let coefficients = self.coefficients;
        let mask = self.mask;
        let (prev, cur, next) = self.roles();
        update(prev, cur, next, mask, coefficients);

        self.head = (self.head + 1) % 3;
        self.time += 1;
        self.current()
    }

    fn roles(&mut self) -> (&Grid, &Grid, &mut Grid) {
        let [a, b, c] = &mut self.slots;
        match self.head {
            0 => (&*a, &*b, c),
            1 => (&*b, &*c, a),
            _ => (&*c, &*a, b),
        }
    }
}

/// Writes one time level into `next`. Rows are independent, so they are
/// computed in parallel.
fn update(
    prev: &Grid,
    cur: &Grid,
    next: &mut Grid,
    mask: &BoundaryMask,
    c: StabilityCoefficients,
) {
    let size_y = cur.size_y();
    let u = cur.as_slice();
    let u_prev = prev.as_slice();

    next.as_mut_slice()
        .par_chunks_mut(size_y)
        .enumerate()
        .for_each(|(x, row)| {
            for (y, cell) in row.iter_mut().enumerate() {
                *cell = if mask.is_updatable(x, y) {
                    let i = x * size_y + y;
                    c.c0 * (u[i + 1] + u[i + size_y] + u[i - 1] + u[i - size_y])
                        + c.c1 * u[i]
                        - c.c2 * u_prev[i]
                } else {
                    0.0
                };
            }
        });
}
