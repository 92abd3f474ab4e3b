//! Observe → propagate → backtrack search loop (§4.6) and the single `solve` entry point (§6).

use crate::adjacency::AdjacencyTable;
use crate::bulk_propagator;
use crate::compatibility::Compatibility;
use crate::constraints::FeasibilityPredicate;
use crate::error::{Error, Result};
use crate::incremental_propagator::{self, PropagationStack};
use crate::location_heuristic::LocationHeuristic;
use crate::pattern_heuristic::PatternHeuristic;
use crate::wave::{PatternId, Wave};
use crate::wrap::{WrapNone, WrapXY};
use grid_2d::Grid;
use hashbrown::HashSet;
use log::{debug, warn};
use rand::RngCore;
use std::cell::Cell;

/// Which constraint-propagation algorithm the solver runs to a fixed point after every
/// observation. Both reach the same fixed point (Testable Property 4 in
/// [`crate::incremental_propagator`]'s own tests); the incremental propagator is the faster
/// default once a wave has mostly converged, the bulk propagator is the simpler one to reason
/// about and needs no compatibility tensor at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagatorKind {
    Bulk,
    Incremental,
}

/// Per-event callbacks, each a branchless no-op when left `None`. Mirrors gridbugs-wfc's own
/// observer-by-trait-object style, generalized to the five events spec.md's search loop emits.
///
/// Every callback but `on_final` returns `bool`: `false` cooperatively raises
/// [`Error::StopEarly`] (§5), aborting the solve without emitting `on_final`. `on_final` itself
/// has nothing left to cancel.
#[derive(Default)]
pub struct Observers<'o> {
    pub on_choice: Option<&'o mut dyn FnMut(PatternId, usize, usize) -> bool>,
    pub on_observe: Option<&'o mut dyn FnMut(&Wave) -> bool>,
    pub on_propagate: Option<&'o mut dyn FnMut(&Wave) -> bool>,
    pub on_backtrack: Option<&'o mut dyn FnMut(u64) -> bool>,
    pub on_final: Option<&'o mut dyn FnMut(&Wave)>,
}

pub struct SolverConfig<'g> {
    pub periodic: bool,
    pub backtracking: bool,
    pub ground: Option<&'g [PatternId]>,
    pub depth_limit: Option<u64>,
    pub propagator: PropagatorKind,
}

impl<'g> Default for SolverConfig<'g> {
    fn default() -> Self {
        Self {
            periodic: false,
            backtracking: true,
            ground: None,
            depth_limit: None,
            propagator: PropagatorKind::Incremental,
        }
    }
}

/// `observe`: ask the location heuristic for an open cell, then the pattern heuristic for a
/// pattern admissible there. Returns `(p, i, j)`, the pattern first, per Scenario F.
fn observe(
    wave: &Wave,
    location_heuristic: &mut dyn LocationHeuristic,
    pattern_heuristic: &mut dyn PatternHeuristic,
    rng: &mut dyn RngCore,
) -> Option<(PatternId, usize, usize)> {
    let (x, y) = location_heuristic.choose(wave)?;
    let p = pattern_heuristic.choose(wave, x, y, rng);
    Some((p, x, y))
}

fn run_propagation(
    periodic: bool,
    wave: &mut Wave,
    compatibility: &mut Option<Compatibility>,
    stack: &mut PropagationStack,
    adjacency: &AdjacencyTable,
    propagator: PropagatorKind,
    mut on_propagate: Option<&mut dyn FnMut(&Wave)>,
) -> Result<()> {
    match (periodic, propagator) {
        (false, PropagatorKind::Bulk) => {
            bulk_propagator::propagate::<WrapNone>(wave, adjacency, on_propagate.as_deref_mut())
        }
        (true, PropagatorKind::Bulk) => {
            bulk_propagator::propagate::<WrapXY>(wave, adjacency, on_propagate.as_deref_mut())
        }
        (false, PropagatorKind::Incremental) => {
            let compat = compatibility.as_mut().expect("incremental propagator requires a compatibility tensor");
            incremental_propagator::propagate::<WrapNone>(wave, compat, stack, adjacency)?;
            if let Some(cb) = on_propagate.as_deref_mut() {
                cb(wave);
            }
            Ok(())
        }
        (true, PropagatorKind::Incremental) => {
            let compat = compatibility.as_mut().expect("incremental propagator requires a compatibility tensor");
            incremental_propagator::propagate::<WrapXY>(wave, compat, stack, adjacency)?;
            if let Some(cb) = on_propagate.as_deref_mut() {
                cb(wave);
            }
            Ok(())
        }
    }
}

/// Bridges the cancellable, bool-returning `on_propagate` observer to the propagator modules'
/// plain `FnMut(&Wave)` notifier (bulk_propagator and incremental_propagator don't know about
/// `StopEarly`, only the solver loop does), by recording a cancellation request in a `Cell`
/// and raising it only after the propagator has returned a non-error result.
fn propagate_checked(
    periodic: bool,
    wave: &mut Wave,
    compatibility: &mut Option<Compatibility>,
    stack: &mut PropagationStack,
    adjacency: &AdjacencyTable,
    propagator: PropagatorKind,
    on_propagate: Option<&mut dyn FnMut(&Wave) -> bool>,
) -> Result<()> {
    let cancelled = Cell::new(false);
    let result = match on_propagate {
        Some(cb) => {
            let mut wrapped = |w: &Wave| {
                if !cb(w) {
                    cancelled.set(true);
                }
            };
            run_propagation(periodic, wave, compatibility, stack, adjacency, propagator, Some(&mut wrapped))
        }
        None => run_propagation(periodic, wave, compatibility, stack, adjacency, propagator, None),
    };
    result?;
    if cancelled.get() {
        return Err(Error::StopEarly);
    }
    Ok(())
}

fn ban_ground(wave: &mut Wave, compatibility: &mut Compatibility, stack: &mut PropagationStack, ground: &[PatternId]) {
    let ground_set: HashSet<PatternId> = ground.iter().copied().collect();
    let width = wave.width();
    let height = wave.height();
    let bottom = height - 1;
    for x in 0..width {
        for p in 0..wave.num_patterns() as PatternId {
            if !ground_set.contains(&p) {
                incremental_propagator::ban(wave, compatibility, stack, x, bottom, p);
            }
        }
        for y in 0..height.saturating_sub(1) {
            for &g in &ground_set {
                incremental_propagator::ban(wave, compatibility, stack, x, y, g);
            }
        }
    }
}

/// Pop snapshots until propagation succeeds again *and* the feasibility predicate (if any)
/// still holds, or the stack is exhausted. `pending_ban`, the just-tried choice from the trial
/// that just contradicted, is applied to the *first* restored wave only, per spec.md's Open
/// Question #4: a contradiction that arises before any choice was made this trial (a failing
/// feasibility predicate, say) must not ban anything on the way out, and a contradiction
/// produced purely by unwinding (no new choice involved) must not either.
///
/// A restored wave that re-propagates cleanly but fails `feasibility` is treated exactly like a
/// propagation contradiction: the snapshot stack keeps unwinding rather than handing the caller
/// a resolved-but-unacceptable wave (Scenario C requires this: every resolved grid in that
/// scenario is infeasible, so the solve must end in `Contradiction`, not a lucky `Ok`).
#[allow(clippy::too_many_arguments)]
fn unwind(
    backtracking: bool,
    snapshots: &mut Vec<(Wave, Option<Compatibility>)>,
    wave: &mut Wave,
    compatibility: &mut Option<Compatibility>,
    stack: &mut PropagationStack,
    periodic: bool,
    adjacency: &AdjacencyTable,
    propagator: PropagatorKind,
    mut pending_ban: Option<(PatternId, usize, usize)>,
    mut feasibility: Option<&mut dyn FeasibilityPredicate>,
    mut on_propagate: Option<&mut dyn FnMut(&Wave) -> bool>,
    mut on_backtrack: Option<&mut dyn FnMut(u64) -> bool>,
    depth: u64,
) -> Result<bool> {
    if !backtracking {
        return Ok(false);
    }
    loop {
        match snapshots.pop() {
            None => return Ok(false),
            Some((snapshot_wave, snapshot_compat)) => {
                *wave = snapshot_wave;
                *compatibility = snapshot_compat;
                stack.clear();
                if let Some((p, x, y)) = pending_ban.take() {
                    warn!("backtracking at depth {depth}: banning pattern {p} at ({x}, {y})");
                    match propagator {
                        PropagatorKind::Bulk => wave.set(p, x, y, false),
                        PropagatorKind::Incremental => {
                            let compat = compatibility
                                .as_mut()
                                .expect("incremental propagator requires a compatibility tensor");
                            incremental_propagator::ban(wave, compat, stack, x, y, p);
                        }
                    }
                } else {
                    warn!("backtracking at depth {depth}: no pending ban, unwinding further");
                }
                if let Some(cb) = on_backtrack.as_deref_mut() {
                    if !cb(depth) {
                        return Err(Error::StopEarly);
                    }
                }
                match propagate_checked(periodic, wave, compatibility, stack, adjacency, propagator, on_propagate.as_deref_mut()) {
                    Ok(()) => {
                        if let Some(predicate) = feasibility.as_deref_mut() {
                            if !predicate(wave) {
                                warn!("backtracking at depth {depth}: restored wave fails feasibility, unwinding further");
                                continue;
                            }
                        }
                        return Ok(true);
                    }
                    Err(Error::Contradiction) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
    }
}

/// Assembles [`solve`]'s many parameters into a single builder, grounded on the corpus's own
/// multi-field-constructor idiom (`PatternDescription::new`, `GlobalStats::new` taking
/// pre-built tables rather than a long positional argument list) rather than threading nine
/// positional arguments through every call site.
pub struct SolverBuilder<'a> {
    num_patterns: usize,
    width: usize,
    height: usize,
    adjacency: &'a AdjacencyTable,
    location_heuristic: &'a mut dyn LocationHeuristic,
    pattern_heuristic: &'a mut dyn PatternHeuristic,
    rng: &'a mut dyn RngCore,
    config: SolverConfig<'a>,
    feasibility: Option<&'a mut dyn FeasibilityPredicate>,
    observers: Observers<'a>,
}

impl<'a> SolverBuilder<'a> {
    pub fn new(
        num_patterns: usize,
        width: usize,
        height: usize,
        adjacency: &'a AdjacencyTable,
        location_heuristic: &'a mut dyn LocationHeuristic,
        pattern_heuristic: &'a mut dyn PatternHeuristic,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            num_patterns,
            width,
            height,
            adjacency,
            location_heuristic,
            pattern_heuristic,
            rng,
            config: SolverConfig::default(),
            feasibility: None,
            observers: Observers::default(),
        }
    }

    /// Replace the whole config in one call, e.g. when a caller has built one up elsewhere.
    pub fn config(mut self, config: SolverConfig<'a>) -> Self {
        self.config = config;
        self
    }

    pub fn periodic(mut self, periodic: bool) -> Self {
        self.config.periodic = periodic;
        self
    }

    pub fn backtracking(mut self, backtracking: bool) -> Self {
        self.config.backtracking = backtracking;
        self
    }

    pub fn ground(mut self, ground: &'a [PatternId]) -> Self {
        self.config.ground = Some(ground);
        self
    }

    pub fn depth_limit(mut self, depth_limit: u64) -> Self {
        self.config.depth_limit = Some(depth_limit);
        self
    }

    pub fn propagator(mut self, propagator: PropagatorKind) -> Self {
        self.config.propagator = propagator;
        self
    }

    pub fn feasibility(mut self, feasibility: &'a mut dyn FeasibilityPredicate) -> Self {
        self.feasibility = Some(feasibility);
        self
    }

    pub fn observers(mut self, observers: Observers<'a>) -> Self {
        self.observers = observers;
        self
    }

    pub fn solve(self) -> Result<Grid<PatternId>> {
        solve(
            self.num_patterns,
            self.width,
            self.height,
            self.adjacency,
            self.location_heuristic,
            self.pattern_heuristic,
            self.rng,
            self.config,
            self.feasibility,
            self.observers,
        )
    }
}

/// The core's single external entry point (§6).
#[allow(clippy::too_many_arguments)]
pub fn solve(
    num_patterns: usize,
    width: usize,
    height: usize,
    adjacency: &AdjacencyTable,
    location_heuristic: &mut dyn LocationHeuristic,
    pattern_heuristic: &mut dyn PatternHeuristic,
    rng: &mut dyn RngCore,
    config: SolverConfig,
    mut feasibility: Option<&mut dyn FeasibilityPredicate>,
    mut observers: Observers,
) -> Result<Grid<PatternId>> {
    let mut wave = Wave::build(num_patterns, width, height, None);
    let mut compatibility = match config.propagator {
        PropagatorKind::Incremental => Some(Compatibility::init(width, height, adjacency)),
        PropagatorKind::Bulk => None,
    };
    let mut stack = PropagationStack::new();

    if let Some(ground) = config.ground {
        match config.propagator {
            PropagatorKind::Bulk => {
                wave = Wave::build(num_patterns, width, height, Some(ground));
            }
            PropagatorKind::Incremental => {
                let compat = compatibility.as_mut().expect("incremental propagator requires a compatibility tensor");
                ban_ground(&mut wave, compat, &mut stack, ground);
            }
        }
    }

    propagate_checked(
        config.periodic,
        &mut wave,
        &mut compatibility,
        &mut stack,
        adjacency,
        config.propagator,
        observers.on_propagate.as_deref_mut(),
    )?;

    if wave.is_resolved() {
        if let Some(cb) = observers.on_final.as_deref_mut() {
            cb(&wave);
        }
        return Ok(wave.collapse().expect("is_resolved guarantees a collapse"));
    }

    // Initialization snapshots the post-ground, post-initial-propagation (W, C), so the very
    // first contradiction has something to backtrack to, matching spec.md's "Initialization:
    // snapshot the initial (W, C)" step, distinct from the per-iteration snapshot in step 6.
    let mut snapshots: Vec<(Wave, Option<Compatibility>)> = vec![(wave.clone(), compatibility.clone())];
    let mut depth: u64 = 0;

    loop {
        if let Some(predicate) = feasibility.as_deref_mut() {
            if !predicate(&wave) {
                if unwind(
                    config.backtracking,
                    &mut snapshots,
                    &mut wave,
                    &mut compatibility,
                    &mut stack,
                    config.periodic,
                    adjacency,
                    config.propagator,
                    None,
                    feasibility.as_deref_mut(),
                    observers.on_propagate.as_deref_mut(),
                    observers.on_backtrack.as_deref_mut(),
                    depth,
                )? {
                    if wave.is_resolved() {
                        if let Some(cb) = observers.on_final.as_deref_mut() {
                            cb(&wave);
                        }
                        return Ok(wave.collapse().expect("is_resolved guarantees a collapse"));
                    }
                    snapshots.push((wave.clone(), compatibility.clone()));
                    continue;
                }
                if let Some(cb) = observers.on_final.as_deref_mut() {
                    cb(&wave);
                }
                return Err(Error::Contradiction);
            }
        }
        if let Some(limit) = config.depth_limit {
            if depth >= limit {
                return Err(Error::TimedOut(depth as u32));
            }
        }

        let (p, x, y) = observe(&wave, location_heuristic, pattern_heuristic, rng)
            .expect("an unresolved wave always has an open cell for the location heuristic to choose");
        debug!("depth {depth}: collapsing ({x}, {y}) to pattern {p}");
        if let Some(cb) = observers.on_choice.as_deref_mut() {
            if !cb(p, x, y) {
                return Err(Error::StopEarly);
            }
        }

        match config.propagator {
            PropagatorKind::Bulk => {
                for q in 0..num_patterns as PatternId {
                    if q != p {
                        wave.set(q, x, y, false);
                    }
                }
            }
            PropagatorKind::Incremental => {
                let compat = compatibility.as_mut().expect("incremental propagator requires a compatibility tensor");
                for q in 0..num_patterns as PatternId {
                    if q != p {
                        incremental_propagator::ban(&mut wave, compat, &mut stack, x, y, q);
                    }
                }
            }
        }
        if let Some(cb) = observers.on_observe.as_deref_mut() {
            if !cb(&wave) {
                return Err(Error::StopEarly);
            }
        }

        depth += 1;

        let propagate_result = propagate_checked(
            config.periodic,
            &mut wave,
            &mut compatibility,
            &mut stack,
            adjacency,
            config.propagator,
            observers.on_propagate.as_deref_mut(),
        );

        // A resolved wave that still fails the feasibility predicate is treated the same as a
        // propagation contradiction: a terminal state the caller has declared unacceptable is
        // not a success. This is what lets Scenario C's predicate (popcount must stay >= 20)
        // reject a fully-resolved 3x4 grid (popcount 12) instead of the check only ever firing
        // before a choice is made, when it could never observe the state that matters.
        let infeasible = match (&propagate_result, feasibility.as_deref_mut()) {
            (Ok(()), Some(predicate)) => !predicate(&wave),
            _ => false,
        };

        match (propagate_result, infeasible) {
            (Ok(()), false) => {
                if wave.is_resolved() {
                    if let Some(cb) = observers.on_final.as_deref_mut() {
                        cb(&wave);
                    }
                    return Ok(wave.collapse().expect("is_resolved guarantees a collapse"));
                }
                snapshots.push((wave.clone(), compatibility.clone()));
            }
            (Ok(()), true) | (Err(Error::Contradiction), _) => {
                if unwind(
                    config.backtracking,
                    &mut snapshots,
                    &mut wave,
                    &mut compatibility,
                    &mut stack,
                    config.periodic,
                    adjacency,
                    config.propagator,
                    Some((p, x, y)),
                    feasibility.as_deref_mut(),
                    observers.on_propagate.as_deref_mut(),
                    observers.on_backtrack.as_deref_mut(),
                    depth,
                )? {
                    if wave.is_resolved() {
                        if let Some(cb) = observers.on_final.as_deref_mut() {
                            cb(&wave);
                        }
                        return Ok(wave.collapse().expect("is_resolved guarantees a collapse"));
                    }
                    snapshots.push((wave.clone(), compatibility.clone()));
                    continue;
                }
                if let Some(cb) = observers.on_final.as_deref_mut() {
                    cb(&wave);
                }
                return Err(Error::Contradiction);
            }
            (Err(e), _) => return Err(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::adjacency::{cardinal_offsets, DirectionAdjacency};
    use crate::constraints::use_all_patterns;
    use crate::pattern_heuristic::LexicalPatternHeuristic;
    use crate::location_heuristic::LexicalLocationHeuristic;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn checkerboard_adjacency() -> AdjacencyTable {
        let lists = vec![vec![1u32], vec![0u32], vec![2u32]];
        let dirs: Vec<DirectionAdjacency> = cardinal_offsets()
            .iter()
            .map(|&offset| DirectionAdjacency { offset, allowed_neighbours: lists.clone() })
            .collect();
        AdjacencyTable::compile(3, dirs).unwrap()
    }

    fn rng() -> XorShiftRng {
        XorShiftRng::seed_from_u64(7)
    }

    // Scenario A: checkerboard only.
    #[test]
    fn scenario_a_checkerboard() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let config = SolverConfig { periodic: false, backtracking: false, propagator: PropagatorKind::Bulk, ..Default::default() };
        let grid = solve(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng, config, None, Observers::default()).unwrap();
        let expected = [
            [0u32, 1, 0, 1],
            [1, 0, 1, 0],
            [0, 1, 0, 1],
        ];
        for x in 0..3 {
            for y in 0..4 {
                assert_eq!(*grid.get_checked(coord_2d::Coord::new(x as i32, y as i32)), expected[x][y]);
            }
        }
    }

    // The builder assembles the same parameters `solve` takes directly and must agree with it
    // on Scenario A's result.
    #[test]
    fn builder_matches_direct_solve_call() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let grid = SolverBuilder::new(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng)
            .backtracking(false)
            .propagator(PropagatorKind::Bulk)
            .solve()
            .unwrap();
        let expected = [
            [0u32, 1, 0, 1],
            [1, 0, 1, 0],
            [0, 1, 0, 1],
        ];
        for x in 0..3 {
            for y in 0..4 {
                assert_eq!(*grid.get_checked(coord_2d::Coord::new(x as i32, y as i32)), expected[x][y]);
            }
        }
    }

    // A ground row of pattern 2, wired through the builder's `ground` method, is structurally
    // incompatible with an adjacency where only patterns 0 and 1 may border each other: row
    // `height - 2` can never find a supporting neighbour in the all-pattern-2 bottom row, so
    // the very first propagation contradicts before any choice is made to backtrack from.
    #[test]
    fn builder_applies_ground() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let ground = [2u32];
        let result = SolverBuilder::new(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng)
            .propagator(PropagatorKind::Bulk)
            .backtracking(true)
            .ground(&ground)
            .solve();
        assert_eq!(result, Err(Error::Contradiction));
    }

    // Scenario B: forced solid fill under periodicity; at least one backtrack occurs.
    #[test]
    fn scenario_b_periodic_forces_solid_fill() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let mut backtracks = 0u64;
        let mut on_backtrack = |_: u64| {
            backtracks += 1;
            true
        };
        let observers = Observers { on_backtrack: Some(&mut on_backtrack), ..Default::default() };
        let config = SolverConfig { periodic: true, backtracking: true, propagator: PropagatorKind::Bulk, ..Default::default() };
        let grid = solve(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng, config, None, observers).unwrap();
        for x in 0..3 {
            for y in 0..4 {
                assert_eq!(*grid.get_checked(coord_2d::Coord::new(x as i32, y as i32)), 2);
            }
        }
        assert!(backtracks >= 1);
    }

    // Scenario C: an early feasibility abort raises Contradiction to the caller.
    #[test]
    fn scenario_c_feasibility_abort() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let mut feasibility = |wave: &Wave| wave.total_popcount() >= 20;
        let config = SolverConfig { periodic: false, backtracking: true, propagator: PropagatorKind::Bulk, ..Default::default() };
        let result = solve(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng, config, Some(&mut feasibility), Observers::default());
        assert_eq!(result, Err(Error::Contradiction));
    }

    // Scenario F: observe dispatch composes the location and pattern choice as (p, i, j).
    #[test]
    fn scenario_f_observe_dispatch() {
        let wave = Wave::build(4, 3, 3, None);
        let mut location = |_: &Wave| Some((1usize, 2usize));
        let mut pattern = |_: &Wave, _: usize, _: usize, _: &mut dyn RngCore| 3u32;
        let mut rng = rng();
        assert_eq!(observe(&wave, &mut location, &mut pattern, &mut rng), Some((3, 1, 2)));
    }

    #[test]
    fn on_choice_can_cancel_with_stop_early() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let mut on_choice = |_: PatternId, _: usize, _: usize| false;
        let observers = Observers { on_choice: Some(&mut on_choice), ..Default::default() };
        let config = SolverConfig { periodic: false, backtracking: false, propagator: PropagatorKind::Bulk, ..Default::default() };
        let result = solve(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng, config, None, observers);
        assert_eq!(result, Err(Error::StopEarly));
    }

    #[test]
    fn use_all_patterns_holds_after_successful_solve() {
        let adjacency = checkerboard_adjacency();
        let mut location = LexicalLocationHeuristic;
        let mut pattern = LexicalPatternHeuristic;
        let mut rng = rng();
        let config = SolverConfig { periodic: false, backtracking: false, propagator: PropagatorKind::Incremental, ..Default::default() };
        let wave_before = Wave::build(3, 3, 4, None);
        assert!(use_all_patterns(&wave_before));
        let _ = solve(3, 3, 4, &adjacency, &mut location, &mut pattern, &mut rng, config, None, Observers::default()).unwrap();
    }
}
