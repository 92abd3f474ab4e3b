//! Whole-solve retry strategies, independent of the per-cell backtracking `solve` does
//! internally. Useful when backtracking is disabled (cheaper per attempt, no snapshot stack)
//! or simply as a coarser recovery layer on top of it. Grounded on gridbugs-wfc's own
//! `Forever`/`NumTimes`/`ParNumTimes`, generalized from retrying a `RunOwn` to retrying any
//! `FnMut() -> Result<Grid<PatternId>>` closure, since this crate exposes a single free
//! `solve` function rather than a cloneable runner object.

use crate::error::{Error, Result};
use crate::wave::PatternId;
use grid_2d::Grid;

pub trait Retry: private::Sealed {
    fn retry<F>(&mut self, attempt: F) -> Result<Grid<PatternId>>
    where
        F: FnMut() -> Result<Grid<PatternId>>;
}

/// Retry until `solve` stops returning `Contradiction`. Non-`Contradiction` errors
/// (`TimedOut`, `StopEarly`, a programmer-error `Invariant`) are not retried: they indicate
/// the attempt itself is misconfigured or was cancelled, not that a different random seed
/// might succeed.
#[derive(Debug, Clone, Copy)]
pub struct Forever;

impl Retry for Forever {
    fn retry<F>(&mut self, mut attempt: F) -> Result<Grid<PatternId>>
    where
        F: FnMut() -> Result<Grid<PatternId>>,
    {
        loop {
            match attempt() {
                Ok(grid) => return Ok(grid),
                Err(Error::Contradiction) => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Retry up to a fixed number of times, sequentially, taking the first attempt that doesn't
/// raise `Contradiction`.
#[derive(Debug, Clone, Copy)]
pub struct NumTimes(pub usize);

impl Retry for NumTimes {
    fn retry<F>(&mut self, mut attempt: F) -> Result<Grid<PatternId>>
    where
        F: FnMut() -> Result<Grid<PatternId>>,
    {
        loop {
            match attempt() {
                Ok(grid) => return Ok(grid),
                Err(Error::Contradiction) => {
                    if self.0 == 0 {
                        return Err(Error::Contradiction);
                    }
                    self.0 -= 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Retry a fixed number of attempts in parallel, taking whichever completes without
/// contradiction first. A symptom of the parallelism: running this with a fixed seed can still
/// produce different results between runs, since thread scheduling decides which attempt wins.
/// Outperforms [`NumTimes`] exactly when the first sequential attempt is the one likely to fail.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy)]
pub struct ParNumTimes(pub usize);

#[cfg(feature = "parallel")]
pub trait RetryPar: private::Sealed {
    fn retry<F>(&mut self, attempt: F) -> Result<Grid<PatternId>>
    where
        F: Fn() -> Result<Grid<PatternId>> + Sync;
}

#[cfg(feature = "parallel")]
impl RetryPar for ParNumTimes {
    fn retry<F>(&mut self, attempt: F) -> Result<Grid<PatternId>>
    where
        F: Fn() -> Result<Grid<PatternId>> + Sync,
    {
        use rayon::prelude::*;
        (0..self.0)
            .into_par_iter()
            .find_map_any(|_| attempt().ok())
            .ok_or(Error::Contradiction)
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Forever {}
    impl Sealed for NumTimes {}

    #[cfg(feature = "parallel")]
    impl Sealed for ParNumTimes {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn num_times_gives_up_after_budget_exhausted() {
        let mut retry = NumTimes(2);
        let mut calls = 0;
        let result = retry.retry(|| {
            calls += 1;
            Err(Error::Contradiction)
        });
        assert_eq!(result, Err(Error::Contradiction));
        assert_eq!(calls, 3);
    }

    #[test]
    fn num_times_returns_first_success() {
        let mut retry = NumTimes(5);
        let mut calls = 0;
        let result = retry.retry(|| {
            calls += 1;
            if calls < 3 {
                Err(Error::Contradiction)
            } else {
                Ok(Grid::new_fn(coord_2d::Size::new(1, 1), |_| 0u32))
            }
        });
        assert!(result.is_ok());
        assert_eq!(calls, 3);
    }

    #[test]
    fn non_contradiction_errors_are_not_retried() {
        let mut retry = Forever;
        let mut calls = 0;
        let result = retry.retry(|| {
            calls += 1;
            Err(Error::StopEarly)
        });
        assert_eq!(result, Err(Error::StopEarly));
        assert_eq!(calls, 1);
    }
}
