//! Auxiliary feasibility predicates (§4.7).

use crate::wave::Wave;

/// A caller-supplied check the solver consults once per iteration; failing it raises
/// [`crate::error::Error::Contradiction`]. Grounded on the closure-capture style gridbugs-wfc
/// uses throughout its `ForbidPattern` trait for pluggable per-run behaviour.
pub trait FeasibilityPredicate: FnMut(&Wave) -> bool {}

impl<F: FnMut(&Wave) -> bool> FeasibilityPredicate for F {}

/// `⋃_{x,y} {p : W[p,x,y]} = {0..P-1}`: every pattern index is still possible somewhere.
/// Once a pattern has been banned from every cell it can never reappear (propagation and
/// observation only ever clear bits), so this predicate only ever transitions true → false.
pub fn use_all_patterns(wave: &Wave) -> bool {
    let counts = wave.global_pattern_counts();
    counts.iter().all(|&count| count > 0)
}
