use std::io::Write;
use std::ops::{Index, IndexMut};

use crate::errors::*;

/// Square grid of water densities, indexed `(x, y)` with `x` the row.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    cells: Vec<f64>,
}

impl Lattice {
    pub fn new(size: usize, value: f64) -> Lattice {
        Lattice { size, cells: vec![value; size * size] }
    }

    pub fn zeros(size: usize) -> Lattice {
        Lattice::new(size, 0.0)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.size - 1 || y == self.size - 1
    }

    /// The six hexagonal neighbours of an interior cell.
    ///
    /// Rows are offset: even rows lean towards lower `y`, odd rows towards
    /// higher `y`.
    pub fn neighbours(x: usize, y: usize) -> [(usize, usize); 6] {
        let (ya, yb) = if x % 2 == 0 { (y - 1, y - 1) } else { (y + 1, y + 1) };
        [
            (x - 1, y),
            (x + 1, y),
            (x, y - 1),
            (x, y + 1),
            (x - 1, ya),
            (x + 1, yb),
        ]
    }

    /// One explicit diffusion step over the interior, borders stay as they are.
    pub fn diffuse(&self, alpha: f64) -> Lattice {
        let mut next = self.clone();
        for x in 1..self.size.saturating_sub(1) {
            for y in 1..self.size - 1 {
                let u = self[(x, y)];
                let sum: f64 = Lattice::neighbours(x, y).iter().map(|&n| self[n]).sum();
                next[(x, y)] = u + alpha / 12.0 * (sum - 6.0 * u);
            }
        }
        next
    }

    /// Writes one row per line, three decimals per value, each followed by a space.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        for row in self.cells.chunks(self.size.max(1)) {
            for value in row {
                write!(out, "{:.3} ", value).map_err(ErrorKind::IoError)?;
            }
            writeln!(out).map_err(ErrorKind::IoError)?;
        }
        out.flush().map_err(ErrorKind::IoError)?;
        Ok(())
    }
}

impl Index<(usize, usize)> for Lattice {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        &self.cells[x * self.size + y]
    }
}

impl IndexMut<(usize, usize)> for Lattice {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        &mut self.cells[x * self.size + y]
    }
}
