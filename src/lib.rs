//! A Wave Function Collapse constraint solver core: propagation, observation and
//! backtracking over a pattern wave. Pattern extraction, rendering, and tile/overlap
//! bookkeeping are out of scope: this crate only ever sees an already-compiled adjacency
//! table and hands back a grid of pattern indices.

pub mod adjacency;
pub mod bulk_propagator;
pub mod compatibility;
pub mod constraints;
pub mod error;
pub mod incremental_propagator;
pub mod location_heuristic;
pub mod pattern_heuristic;
pub mod retry;
pub mod solver;
pub mod wave;
pub mod wrap;

pub use adjacency::{cardinal_offsets, cardinal_opposite_offset, AdjacencyTable, DirectionAdjacency};
pub use constraints::{use_all_patterns, FeasibilityPredicate};
pub use coord_2d::{Coord, Size};
pub use error::{Error, Result};
pub use location_heuristic::{
    AntiEntropyLocationHeuristic, HilbertLocationHeuristic, LexicalLocationHeuristic, LocationHeuristic,
    Preferences, RandomLocationHeuristic, SimpleEntropyLocationHeuristic, SpiralLocationHeuristic,
    WeightedEntropyLocationHeuristic,
};
pub use pattern_heuristic::{
    LexicalPatternHeuristic, MostCommonPatternHeuristic, PatternHeuristic, RandomPatternHeuristic,
    RarestPatternHeuristic, WeightedPatternHeuristic,
};
pub use solver::{solve, Observers, PropagatorKind, SolverBuilder, SolverConfig};
pub use wave::{Cell, PatternId, Wave};
pub use wrap::{Wrap, WrapNone, WrapXY};
