//! Failure kinds distinguished by cause, not by origin (see crate docs).

/// Everything that can stop a [`crate::solver::solve`] call before it produces a grid.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The constraint graph admits no solution from the current state. Recoverable by
    /// backtracking when it is enabled; otherwise surfaced to the caller unchanged.
    #[error("no assignment satisfies the adjacency constraints from the current state")]
    Contradiction,

    /// The configured depth limit was exceeded. Never recoverable within the solver.
    #[error("depth limit exceeded after {0} observations")]
    TimedOut(u32),

    /// An observer callback requested cancellation. `on_final` is not emitted in this case.
    #[error("solve cancelled by caller")]
    StopEarly,

    /// A heuristic or caller violated a solver precondition (e.g. a location heuristic
    /// returned a resolved or empty cell, or an adjacency table's shape disagreed with the
    /// wave's pattern count). This is a programmer error, never a [`Error::Contradiction`].
    #[error("heuristic or caller violated a solver precondition: {0}")]
    Invariant(&'static str),
}

pub type Result<T> = ::std::result::Result<T, Error>;
