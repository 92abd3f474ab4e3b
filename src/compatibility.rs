//! The compatibility counter tensor `C` used only by the incremental propagator (§3, §4.4).

use crate::adjacency::AdjacencyTable;
use crate::wave::PatternId;

/// `C[x, y, p, d]`: how many patterns in the direction-`d` neighbour of `(x, y)` currently
/// support the presence of `p` at `(x, y)`. Once `W[p, x, y]` becomes false the counter's
/// value is immaterial and is reset to zero.
#[derive(Clone, Debug)]
pub struct Compatibility {
    width: usize,
    height: usize,
    num_patterns: usize,
    num_directions: usize,
    data: Vec<i32>,
}

impl Compatibility {
    fn index(&self, x: usize, y: usize, p: PatternId, d: usize) -> usize {
        ((x * self.height + y) * self.num_patterns + p as usize) * self.num_directions + d
    }

    /// `C[x, y, p, d] = number of patterns q such that A_d[q, p]`, for every cell.
    pub fn init(width: usize, height: usize, adjacency: &AdjacencyTable) -> Self {
        let num_patterns = adjacency.num_patterns();
        let num_directions = adjacency.num_directions();
        let mut data = vec![0i32; width * height * num_patterns * num_directions];
        for x in 0..width {
            for y in 0..height {
                for p in 0..num_patterns as PatternId {
                    for d in 0..num_directions {
                        let idx = ((x * height + y) * num_patterns + p as usize) * num_directions + d;
                        data[idx] = adjacency.support_count(d, p) as i32;
                    }
                }
            }
        }
        Self { width, height, num_patterns, num_directions, data }
    }

    pub fn get(&self, x: usize, y: usize, p: PatternId, d: usize) -> i32 {
        self.data[self.index(x, y, p, d)]
    }

    /// Decrement `C[x, y, p, d]`, returning `true` iff it just reached zero.
    pub fn decrement(&mut self, x: usize, y: usize, p: PatternId, d: usize) -> bool {
        let idx = self.index(x, y, p, d);
        self.data[idx] -= 1;
        self.data[idx] == 0
    }

    /// `C[x, y, p, d] ← 0` for all `d`, called when `p` is banned at `(x, y)`.
    pub fn clear_cell_pattern(&mut self, x: usize, y: usize, p: PatternId) {
        for d in 0..self.num_directions {
            let idx = self.index(x, y, p, d);
            self.data[idx] = 0;
        }
    }
}
