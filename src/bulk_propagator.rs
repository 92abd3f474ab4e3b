//! Fixed-point matrix-style constraint propagation (§4.3).
//!
//! Reaches a fixed point by repeatedly restricting the wave until a full pass over every
//! direction changes nothing. This is the systems-language equivalent of the source's
//! `sparse.csr_matrix @ shifted_wave` matmul: no crate in the retrieval pack reaches for
//! dense/sparse linear algebra over a boolean tensor this small, so the per-`(p, q)` loop is
//! the idiomatic substitute, not a missing optimization.

use crate::adjacency::AdjacencyTable;
use crate::error::{Error, Result};
use crate::wave::{PatternId, Wave};
use crate::wrap::Wrap;
use coord_2d::{Coord, Size};

fn neighbor_coord<W: Wrap>(x: usize, y: usize, offset: (i32, i32), width: usize, height: usize) -> Option<(usize, usize)> {
    let coord = Coord::new(x as i32 + offset.0, y as i32 + offset.1);
    let size = Size::new(width as u32, height as u32);
    W::normalize_coord(coord, size).map(|c| (c.x as usize, c.y as usize))
}

/// Run the bulk propagator to a fixed point. Calls `on_propagate` once, after the fixed point
/// is reached (not once per inner iteration), matching spec.md §4.3.
pub fn propagate<W: Wrap>(
    wave: &mut Wave,
    adjacency: &AdjacencyTable,
    mut on_propagate: Option<&mut dyn FnMut(&Wave)>,
) -> Result<()> {
    let width = wave.width();
    let height = wave.height();
    let num_patterns = wave.num_patterns();

    let mut last_count = wave.total_popcount();
    loop {
        let mut support = vec![true; wave.data_len()];
        for d in 0..adjacency.num_directions() {
            let offset = adjacency.offset(d);
            for x in 0..width {
                for y in 0..height {
                    let neighbor = neighbor_coord::<W>(x, y, offset, width, height);
                    for p in 0..num_patterns as PatternId {
                        let supported = match neighbor {
                            Some((nx, ny)) => adjacency.allowed(d, p).any(|q| wave.get(q, nx, ny)),
                            // Non-periodic out-of-bounds neighbour: padded with all-ones, so a
                            // pattern is supported from this direction iff it has any allowed
                            // neighbour there at all ("no constraint from outside the grid").
                            None => adjacency.allowed(d, p).next().is_some(),
                        };
                        if !supported {
                            support[wave.index(p, x, y)] = false;
                        }
                    }
                }
            }
        }
        wave.and_with(&support);
        let count = wave.total_popcount();
        if count == last_count {
            break;
        }
        last_count = count;
    }

    if let Some(cb) = on_propagate.as_deref_mut() {
        cb(wave);
    }

    for x in 0..width {
        for y in 0..height {
            if wave.is_empty_at(x, y) {
                return Err(Error::Contradiction);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::adjacency::{cardinal_offsets, AdjacencyTable, DirectionAdjacency};
    use crate::wrap::WrapNone;

    fn checkerboard_adjacency() -> AdjacencyTable {
        let lists = vec![vec![1u32], vec![0u32], vec![2u32]];
        let dirs: Vec<DirectionAdjacency> = cardinal_offsets()
            .iter()
            .map(|&offset| DirectionAdjacency { offset, allowed_neighbours: lists.clone() })
            .collect();
        AdjacencyTable::compile(3, dirs).unwrap()
    }

    // Mirrors the source's `test_propagate`.
    #[test]
    fn checkerboard_seed_propagates() {
        let adjacency = checkerboard_adjacency();
        let mut wave = Wave::build(3, 3, 4, None);
        for p in 0..3u32 {
            wave.set(p, 0, 0, p == 0);
        }
        propagate::<WrapNone>(&mut wave, &adjacency, None).unwrap();
        let expected = [
            [true, false, true, false],
            [false, true, false, true],
            [true, false, true, false],
        ];
        for x in 0..3 {
            for y in 0..4 {
                assert_eq!(wave.get(0, x, y), expected[x][y], "pattern 0 at ({x},{y})");
                assert_eq!(wave.get(1, x, y), !expected[x][y], "pattern 1 at ({x},{y})");
                assert!(!wave.get(2, x, y), "pattern 2 at ({x},{y})");
            }
        }
    }
}
