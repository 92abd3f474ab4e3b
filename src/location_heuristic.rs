//! Location heuristics: chooses the next unresolved cell (§4.5).
//!
//! Modeled as a capability with one call-shape per Design Note in spec.md §9 ("Dynamic
//! dispatch of heuristics"): each variant is a struct capturing whatever state it needs
//! (a preferences field, a precomputed curve order), and the solver only ever depends on the
//! `LocationHeuristic` trait, never the concrete variant, the same shape gridbugs-wfc's
//! `ForbidPattern` trait already uses for pluggable per-run behaviour.

use crate::wave::Wave;

pub trait LocationHeuristic {
    /// Choose an open cell (more than one admissible pattern). Returns `None` when no open
    /// cell remains. Must never return a resolved or empty cell: that is a programmer error,
    /// not a [`crate::error::Error::Contradiction`].
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)>;
}

impl<F: FnMut(&Wave) -> Option<(usize, usize)>> LocationHeuristic for F {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        self(wave)
    }
}

fn index(width: usize, height: usize, x: usize, y: usize) -> usize {
    let _ = width;
    x * height + y
}

/// A caller-supplied `width * height` noise/bias field, flat-indexed the same way as
/// [`Wave`]'s tensor (`x * height + y`).
#[derive(Clone, Debug)]
pub struct Preferences {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl Preferences {
    pub fn new(width: usize, height: usize, values: Vec<f32>) -> Self {
        assert_eq!(values.len(), width * height);
        Self { width, height, values }
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[index(self.width, self.height, x, y)]
    }

    /// A fractional rank in `[0, 1)` baked in along a space-filling curve, used by
    /// [`SpiralLocationHeuristic`] and [`HilbertLocationHeuristic`].
    fn fill_with_curve(width: usize, height: usize, curve: impl Iterator<Item = (i64, i64)>) -> Self {
        let total = (width * height) as f32;
        let mut values = vec![f32::INFINITY; width * height];
        let mut filled = 0usize;
        for (cx, cy) in curve {
            if filled >= width * height {
                break;
            }
            if cx >= 0 && cy >= 0 && (cx as usize) < width && (cy as usize) < height {
                let idx = index(width, height, cx as usize, cy as usize);
                if values[idx].is_infinite() {
                    values[idx] = filled as f32 / total;
                    filled += 1;
                }
            }
        }
        Self { width, height, values }
    }
}

fn open_cell_mask(wave: &Wave) -> impl Fn(usize, usize) -> bool + '_ {
    move |x, y| wave.popcount_at(x, y) > 1
}

/// argmin over `(x, y)` of `weights(x, y)` among open cells, lexical (array-order) tie-break.
fn argmin_open(wave: &Wave, weights: impl Fn(usize, usize) -> f32) -> Option<(usize, usize)> {
    let is_open = open_cell_mask(wave);
    let mut best: Option<((usize, usize), f32)> = None;
    for x in 0..wave.width() {
        for y in 0..wave.height() {
            if !is_open(x, y) {
                continue;
            }
            let w = weights(x, y);
            match &best {
                Some((_, best_w)) if *best_w <= w => {}
                _ => best = Some(((x, y), w)),
            }
        }
    }
    best.map(|(cell, _)| cell)
}

fn argmax_open(wave: &Wave, weights: impl Fn(usize, usize) -> f32) -> Option<(usize, usize)> {
    argmin_open(wave, |x, y| -weights(x, y))
}

/// Minimum `(x, y)` among open cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalLocationHeuristic;

impl LocationHeuristic for LexicalLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        argmin_open(wave, |_, _| 1.0)
    }
}

/// argmin of remaining-pattern count among open cells, ties broken by array order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleEntropyLocationHeuristic;

impl LocationHeuristic for SimpleEntropyLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        argmin_open(wave, |x, y| wave.popcount_at(x, y) as f32)
    }
}

/// argmin of `preferences + remaining-count` among open cells.
#[derive(Clone, Debug)]
pub struct WeightedEntropyLocationHeuristic {
    pub preferences: Preferences,
}

impl WeightedEntropyLocationHeuristic {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }
}

impl LocationHeuristic for WeightedEntropyLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        argmin_open(wave, |x, y| self.preferences.get(x, y) + wave.popcount_at(x, y) as f32)
    }
}

/// argmax of `preferences + remaining-count` among open cells.
#[derive(Clone, Debug)]
pub struct AntiEntropyLocationHeuristic {
    pub preferences: Preferences,
}

impl AntiEntropyLocationHeuristic {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }
}

impl LocationHeuristic for AntiEntropyLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        argmax_open(wave, |x, y| self.preferences.get(x, y) + wave.popcount_at(x, y) as f32)
    }
}

/// argmin of `preferences` alone among open cells.
#[derive(Clone, Debug)]
pub struct RandomLocationHeuristic {
    pub preferences: Preferences,
}

impl RandomLocationHeuristic {
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }
}

impl LocationHeuristic for RandomLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        argmin_open(wave, |x, y| self.preferences.get(x, y))
    }
}

/// A fixed traversal order baked into `preferences` (each cell gets a fractional rank from 0
/// to 1 along the curve); behaves as "argmin preferences among open cells".
#[derive(Clone, Debug)]
pub struct SpiralLocationHeuristic {
    inner: RandomLocationHeuristic,
}

fn spiral_coords(width: usize, height: usize) -> impl Iterator<Item = (i64, i64)> {
    let start = (width as i64 / 2, height as i64 / 2);
    let mut x = start.0;
    let mut y = start.1;
    let mut emitted = Some((x, y));
    let mut n: i64 = 1;
    let mut leg: Vec<(i64, i64)> = Vec::new();
    std::iter::from_fn(move || {
        if let Some(first) = emitted.take() {
            return Some(first);
        }
        loop {
            if let Some(step) = leg.pop() {
                x += step.0;
                y += step.1;
                return Some((x, y));
            }
            // Build the next leg sequence lazily, matching the source's `spiral_transforms`:
            // alternates even/odd N between (right, N*down, N*left) and (left, N*up, N*right).
            if n % 2 == 0 {
                let mut next = vec![(0i64, 1i64)];
                next.extend(std::iter::repeat((1i64, 0i64)).take(n as usize));
                next.extend(std::iter::repeat((0i64, -1i64)).take(n as usize));
                next.reverse();
                leg = next;
            } else {
                let mut next = vec![(0i64, -1i64)];
                next.extend(std::iter::repeat((-1i64, 0i64)).take(n as usize));
                next.extend(std::iter::repeat((0i64, 1i64)).take(n as usize));
                next.reverse();
                leg = next;
            }
            n += 1;
        }
    })
}

impl SpiralLocationHeuristic {
    pub fn new(width: usize, height: usize) -> Self {
        let preferences = Preferences::fill_with_curve(width, height, spiral_coords(width, height));
        Self { inner: RandomLocationHeuristic::new(preferences) }
    }
}

impl LocationHeuristic for SpiralLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        self.inner.choose(wave)
    }
}

/// Hilbert-curve traversal order. The curve order is `ceil(sqrt(max(width, height)))` per
/// spec.md's Open Question #5, not hard-coded to a fixed constant as the distilled source did.
#[derive(Clone, Debug)]
pub struct HilbertLocationHeuristic {
    inner: RandomLocationHeuristic,
}

fn hilbert_d2xy(order: u32, mut d: u64) -> (i64, i64) {
    let mut x: i64 = 0;
    let mut y: i64 = 0;
    let mut s: i64 = 1;
    while s < (1i64 << order) {
        let rx = (1 & (d / 2)) as i64;
        let ry = (1 & (d ^ rx as u64)) as i64;
        if ry == 0 {
            if rx == 1 {
                x = s - 1 - x;
                y = s - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }
        x += s * rx;
        y += s * ry;
        d /= 4;
        s *= 2;
    }
    (x, y)
}

impl HilbertLocationHeuristic {
    pub fn new(width: usize, height: usize) -> Self {
        let order = ((width.max(height) as f64).sqrt().ceil() as u32).max(1);
        let curve = (0u64..(1u64 << (2 * order))).map(move |d| hilbert_d2xy(order, d));
        let preferences = Preferences::fill_with_curve(width, height, curve);
        Self { inner: RandomLocationHeuristic::new(preferences) }
    }
}

impl LocationHeuristic for HilbertLocationHeuristic {
    fn choose(&mut self, wave: &Wave) -> Option<(usize, usize)> {
        self.inner.choose(wave)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Scenario E from the solver's acceptance properties: entropy heuristic tie-break.
    #[test]
    fn weighted_entropy_tie_break() {
        let mut wave = Wave::build(5, 3, 4, None);
        for p in 1..5u32 {
            wave.set(p, 0, 0, false);
        }
        for x in 0..3 {
            wave.set(4, x, 2, false);
        }
        let mut values = vec![0.5f32; 3 * 4];
        values[1 * 4 + 2] = 0.3;
        values[1 * 4 + 1] = 0.1;
        let preferences = Preferences::new(3, 4, values);
        let mut heuristic = WeightedEntropyLocationHeuristic::new(preferences);
        assert_eq!(heuristic.choose(&wave), Some((1, 2)));
    }

    #[test]
    fn lexical_picks_minimum_coordinate() {
        let wave = Wave::build(2, 3, 3, None);
        let mut heuristic = LexicalLocationHeuristic::default();
        assert_eq!(heuristic.choose(&wave), Some((0, 0)));
    }

    #[test]
    fn hilbert_order_scales_with_grid() {
        let small = HilbertLocationHeuristic::new(3, 3);
        let large = HilbertLocationHeuristic::new(20, 20);
        assert_eq!(small.inner.preferences.width, 3);
        assert_eq!(large.inner.preferences.width, 20);
    }
}
