use crate::errors::*;
use crate::lattice::Lattice;

/// Density at which a cell counts as frozen ice.
pub const FROZEN: f64 = 1.0;

/// Parameters of Reiter's snowflake model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Side length of the square lattice.
    pub size: usize,
    pub iterations: usize,
    /// Diffusion constant.
    pub alpha: f64,
    /// Initial vapour density of the background.
    pub beta: f64,
    /// Vapour added to receptive cells per step.
    pub gamma: f64,
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        if self.size < 3 {
            return Err(ErrorKind::InvalidParameter {
                name: "size",
                reason: format!("{} leaves no interior, use at least 3", self.size),
            }
            .into());
        }
        for &(name, value) in &[("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !value.is_finite() {
                return Err(ErrorKind::InvalidParameter { name, reason: format!("{} is not finite", value) }.into());
            }
        }
        Ok(())
    }
}

/// Hexagonal cellular automaton growing a crystal from a single seed.
#[derive(Debug, Clone)]
pub struct Automaton {
    params: Params,
    lattice: Lattice,
    steps: usize,
}

impl Automaton {
    /// Seed in the centre, empty border, `beta` everywhere else.
    pub fn new(params: Params) -> Result<Automaton> {
        params.validate()?;
        let size = params.size;
        let mut lattice = Lattice::new(size, params.beta);
        for x in 0..size {
            for y in 0..size {
                if lattice.is_border(x, y) {
                    lattice[(x, y)] = 0.0;
                }
            }
        }
        lattice[(size / 2, size / 2)] = FROZEN;
        Ok(Automaton { params, lattice, steps: 0 })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Frozen interior cells and their neighbours.
    pub fn receptive(&self) -> Vec<bool> {
        let size = self.lattice.size();
        let mut mask = vec![false; size * size];
        for x in 1..size - 1 {
            for y in 1..size - 1 {
                if self.lattice[(x, y)] < FROZEN {
                    continue;
                }
                mask[x * size + y] = true;
                for &(nx, ny) in Lattice::neighbours(x, y).iter() {
                    mask[nx * size + ny] = true;
                }
            }
        }
        mask
    }

    /// Receptive cells gain `gamma`, the rest diffuse among themselves.
    pub fn step(&mut self) {
        let size = self.lattice.size();
        let mask = self.receptive();
        let mut receptive = Lattice::zeros(size);
        let mut free = Lattice::zeros(size);
        for x in 0..size {
            for y in 0..size {
                let u = self.lattice[(x, y)];
                if mask[x * size + y] {
                    receptive[(x, y)] = u + self.params.gamma;
                } else {
                    free[(x, y)] = u;
                }
            }
        }

        let diffused = free.diffuse(self.params.alpha);
        for x in 0..size {
            for y in 0..size {
                self.lattice[(x, y)] = receptive[(x, y)] + diffused[(x, y)];
            }
        }
        self.steps += 1;
    }

    /// Runs the remaining configured iterations.
    pub fn run(&mut self) -> &Lattice {
        let remaining = self.params.iterations.saturating_sub(self.steps);
        for i in 0..remaining {
            self.step();
            trace!("step {} of {}", i + 1, remaining);
        }
        debug!(
            "{} steps done, {} frozen cells",
            self.steps,
            self.lattice.cells().iter().filter(|&&v| v >= FROZEN).count()
        );
        &self.lattice
    }
}
