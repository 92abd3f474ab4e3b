//! Compiled per-direction pattern-to-pattern allow relation.
//!
//! `D` (the number of directions) is read from the caller's offset list and is never assumed
//! to be 4: the table is backed by `Vec`s indexed by direction, not by `direction`'s fixed
//! four-slot `CardinalDirectionTable`. The `direction` crate is still the default vocabulary
//! for the common von Neumann case via [`cardinal_offsets`].

use crate::wave::PatternId;
use direction::{CardinalDirection, CardinalDirections};

/// A direction offset `(dx, dy)` paired with the per-source-pattern list of patterns allowed
/// to occupy that neighbour, indexed by source pattern id. This is the input shape spec.md
/// §4.2 describes as "a mapping from each direction offset to a list ... of iterables of
/// admissible neighbor patterns".
pub struct DirectionAdjacency {
    pub offset: (i32, i32),
    /// `allowed_neighbours[p]` is the set of patterns allowed at the direction-neighbour of a
    /// cell holding pattern `p`.
    pub allowed_neighbours: Vec<Vec<PatternId>>,
}

/// The four von Neumann offsets in `direction`'s canonical `CardinalDirections` order
/// (North, East, South, West), for callers who don't need a custom direction set.
pub fn cardinal_offsets() -> [(i32, i32); 4] {
    let mut offsets = [(0, 0); 4];
    for (i, direction) in CardinalDirections.enumerate() {
        let coord = direction.coord();
        offsets[i] = (coord.x, coord.y);
    }
    offsets
}

pub fn cardinal_opposite_offset(offset: (i32, i32)) -> (i32, i32) {
    (-offset.0, -offset.1)
}

/// `A`: for each direction a boolean `P x P` matrix, `A_d[p, q]` true iff pattern `q` may
/// appear at the direction-`d` neighbour of a cell containing pattern `p`.
pub struct AdjacencyTable {
    num_patterns: usize,
    offsets: Vec<(i32, i32)>,
    /// Inverse offset map: `inverse[d]` is the index of the direction whose offset negates
    /// direction `d`'s. Required by the incremental propagator.
    inverse: Vec<usize>,
    /// Flattened `D * P * P` matrices, `matrices[d * P * P + p * P + q]`.
    matrices: Vec<bool>,
}

impl AdjacencyTable {
    /// `compile(adj_lists) -> A`. The offset order of `adj_lists` is preserved verbatim as the
    /// table's canonical direction order; the core never re-sorts it.
    pub fn compile(num_patterns: usize, adj_lists: Vec<DirectionAdjacency>) -> Result<Self, crate::error::Error> {
        let num_directions = adj_lists.len();
        let offsets: Vec<(i32, i32)> = adj_lists.iter().map(|d| d.offset).collect();
        let mut matrices = vec![false; num_directions * num_patterns * num_patterns];
        for (d, dir_adj) in adj_lists.iter().enumerate() {
            if dir_adj.allowed_neighbours.len() != num_patterns {
                return Err(crate::error::Error::Invariant(
                    "adjacency table's per-direction list length disagrees with num_patterns",
                ));
            }
            for (p, neighbours) in dir_adj.allowed_neighbours.iter().enumerate() {
                for &q in neighbours {
                    let q = q as usize;
                    if q >= num_patterns {
                        return Err(crate::error::Error::Invariant(
                            "adjacency table references a pattern id outside num_patterns",
                        ));
                    }
                    matrices[d * num_patterns * num_patterns + p * num_patterns + q] = true;
                }
            }
        }
        let inverse = offsets
            .iter()
            .map(|&(dx, dy)| {
                offsets
                    .iter()
                    .position(|&(odx, ody)| (odx, ody) == (-dx, -dy))
                    .unwrap_or(usize::MAX)
            })
            .collect();
        Ok(Self { num_patterns, offsets, inverse, matrices })
    }

    pub fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    pub fn num_directions(&self) -> usize {
        self.offsets.len()
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    pub fn offset(&self, direction: usize) -> (i32, i32) {
        self.offsets[direction]
    }

    /// Index of the direction whose offset is the negation of `direction`'s, or `None` if the
    /// caller's direction set isn't closed under negation.
    pub fn inverse_direction(&self, direction: usize) -> Option<usize> {
        match self.inverse[direction] {
            usize::MAX => None,
            d => Some(d),
        }
    }

    pub fn allows(&self, direction: usize, p: PatternId, q: PatternId) -> bool {
        let n = self.num_patterns;
        self.matrices[direction * n * n + (p as usize) * n + (q as usize)]
    }

    /// Patterns allowed at the direction-neighbour of a cell holding pattern `p`.
    pub fn allowed(&self, direction: usize, p: PatternId) -> impl Iterator<Item = PatternId> + '_ {
        let n = self.num_patterns;
        let base = direction * n * n + (p as usize) * n;
        (0..n as PatternId).filter(move |&q| self.matrices[base + q as usize])
    }

    /// Number of patterns `q` such that `A_d[q, p]` holds, the initial value of the
    /// compatibility counter `C[x, y, p, d]`.
    pub fn support_count(&self, direction: usize, p: PatternId) -> u32 {
        let n = self.num_patterns;
        (0..n as PatternId).filter(|&q| self.allows(direction, q, p)).count() as u32
    }
}
