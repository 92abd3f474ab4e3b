//! The possibility tensor and the convenience queries built on top of it.
//!
//! `Wave` owns a flat `P * H * V` boolean buffer: `W[p, x, y]` is `true` while pattern `p`
//! is still admissible at cell `(x, y)`. Row-major order follows the source `numpy` array's
//! own `(n, w, h)` axis order rather than nesting `Vec<Vec<Vec<bool>>>`, so the inner loops the
//! propagators run stay over contiguous memory.

use coord_2d::{Coord, Size};
use grid_2d::Grid;
use hashbrown::HashSet;

pub type PatternId = u32;

/// A grid position. `x` ranges over `[0, H)`, `y` over `[0, V)`.
pub type Cell = (usize, usize);

#[derive(Clone, Debug)]
pub struct Wave {
    num_patterns: usize,
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Wave {
    pub(crate) fn index(&self, p: PatternId, x: usize, y: usize) -> usize {
        debug_assert!((p as usize) < self.num_patterns);
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);
        (p as usize) * self.width * self.height + x * self.height + y
    }

    /// Build a wave of shape `(num_patterns, width, height)` with every pattern admissible
    /// everywhere, then apply `ground` if supplied: every pattern not in `ground` is cleared
    /// from the bottom row (`y == height - 1`), and every pattern in `ground` is cleared from
    /// every other row.
    pub fn build(num_patterns: usize, width: usize, height: usize, ground: Option<&[PatternId]>) -> Self {
        let mut wave = Self {
            num_patterns,
            width,
            height,
            data: vec![true; num_patterns * width * height],
        };
        if let Some(ground) = ground {
            let ground: HashSet<PatternId> = ground.iter().copied().collect();
            let bottom = height - 1;
            for x in 0..width {
                for p in 0..num_patterns as PatternId {
                    if !ground.contains(&p) {
                        let idx = wave.index(p, x, bottom);
                        wave.data[idx] = false;
                    }
                }
                for y in 0..height.saturating_sub(1) {
                    for &g in &ground {
                        let idx = wave.index(g, x, y);
                        wave.data[idx] = false;
                    }
                }
            }
        }
        wave
    }

    pub fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, p: PatternId, x: usize, y: usize) -> bool {
        self.data[self.index(p, x, y)]
    }

    pub fn set(&mut self, p: PatternId, x: usize, y: usize, value: bool) {
        let idx = self.index(p, x, y);
        self.data[idx] = value;
    }

    pub(crate) fn data_len(&self) -> usize {
        self.data.len()
    }

    /// `W ← W ∧ mask`, applied element-wise over the flat `P * H * V` buffer.
    pub(crate) fn and_with(&mut self, mask: &[bool]) {
        debug_assert_eq!(mask.len(), self.data.len());
        for (slot, &allowed) in self.data.iter_mut().zip(mask.iter()) {
            *slot = *slot && allowed;
        }
    }

    /// `popcount_at(x, y)`: number of patterns still admissible at `(x, y)`.
    pub fn popcount_at(&self, x: usize, y: usize) -> u32 {
        (0..self.num_patterns as PatternId)
            .filter(|&p| self.get(p, x, y))
            .count() as u32
    }

    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        self.popcount_at(x, y) == 0
    }

    pub fn is_resolved_at(&self, x: usize, y: usize) -> bool {
        self.popcount_at(x, y) == 1
    }

    /// `count_per_cell`: `width * height` grid where entry `(x, y)` is the popcount along
    /// the pattern axis. Used by location heuristics and termination checks.
    pub fn count_per_cell(&self) -> Vec<Vec<u32>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.popcount_at(x, y)).collect())
            .collect()
    }

    /// Total popcount across the whole tensor. The solver's termination rule is the exact
    /// equality `total_popcount() == width * height`, never the source's loose `>` check.
    pub fn total_popcount(&self) -> u64 {
        self.data.iter().filter(|&&b| b).count() as u64
    }

    /// True iff every cell has exactly one admissible pattern. Checking the total popcount
    /// alone is not equivalent: a cell with zero patterns and another with two could still sum
    /// to `width * height`. `is_resolved_at` is checked per cell so this function is correct in
    /// isolation, not just after a propagator's own empty-cell check has already run.
    pub fn is_resolved(&self) -> bool {
        if self.total_popcount() != (self.width * self.height) as u64 {
            return false;
        }
        (0..self.width).all(|x| (0..self.height).all(|y| self.is_resolved_at(x, y)))
    }

    /// Cell pattern mask at `(x, y)`, for pattern heuristics that need the full slice.
    pub fn cell_slice(&self, x: usize, y: usize) -> Vec<bool> {
        (0..self.num_patterns as PatternId).map(|p| self.get(p, x, y)).collect()
    }

    /// Iterate every `(x, y)` cell along with its pattern mask.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, Vec<bool>)> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y))).map(move |(x, y)| {
            ((x, y), self.cell_slice(x, y))
        })
    }

    /// Global admissibility count per pattern: `sum(W[p, :, :])` for each `p`. Used by the
    /// rarest / most-common pattern heuristics.
    pub fn global_pattern_counts(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.num_patterns];
        for x in 0..self.width {
            for y in 0..self.height {
                for p in 0..self.num_patterns as PatternId {
                    if self.get(p, x, y) {
                        counts[p as usize] += 1;
                    }
                }
            }
        }
        counts
    }

    /// `collapse`: only defined when [`Wave::is_resolved`]; the unique admissible pattern
    /// at every cell.
    pub fn collapse(&self) -> Option<Grid<PatternId>> {
        if !self.is_resolved() {
            return None;
        }
        Some(Grid::new_fn(Size::new(self.width as u32, self.height as u32), |coord: Coord| {
            let x = coord.x as usize;
            let y = coord.y as usize;
            (0..self.num_patterns as PatternId)
                .find(|&p| self.get(p, x, y))
                .expect("is_resolved guarantees exactly one admissible pattern per cell")
        }))
    }
}
