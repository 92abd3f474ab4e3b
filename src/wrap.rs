//! Coordinate normalization for periodic vs. non-periodic grids.
//!
//! Generalized from gridbugs-wfc's `Wrap` trait (which offered `WrapX`/`WrapY`/`WrapXY`/
//! `WrapNone` for partial wrapping): spec.md's `periodic` flag only ever wraps both axes
//! together or neither, so only the two variants that case needs are kept.

use coord_2d::{Coord, Size};

pub trait Wrap: Clone + private::Sealed {
    #[doc(hidden)]
    fn normalize_coord(coord: Coord, size: Size) -> Option<Coord>;
}

/// Non-periodic topology: an out-of-bounds coordinate has no neighbour.
#[derive(Clone, Copy, Debug, Default)]
pub struct WrapNone;

/// Periodic (toroidal) topology: `x` and `y` wrap modulo the grid's width and height.
#[derive(Clone, Copy, Debug, Default)]
pub struct WrapXY;

impl Wrap for WrapNone {
    fn normalize_coord(coord: Coord, size: Size) -> Option<Coord> {
        if coord.is_valid(size) {
            Some(coord)
        } else {
            None
        }
    }
}

impl Wrap for WrapXY {
    fn normalize_coord(coord: Coord, size: Size) -> Option<Coord> {
        Some(coord.normalize(size))
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for WrapXY {}
    impl Sealed for WrapNone {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wraps() {
        assert_eq! {
            WrapNone::normalize_coord(Coord::new(2, 3), Size::new(4, 5)),
            Some(Coord::new(2, 3))
        };
        assert_eq! {
            WrapNone::normalize_coord(Coord::new(4, 3), Size::new(4, 5)),
            None,
        };
        assert_eq! {
            WrapXY::normalize_coord(Coord::new(2, 6), Size::new(4, 5)),
            Some(Coord::new(2, 1)),
        };
        assert_eq! {
            WrapXY::normalize_coord(Coord::new(-1, 3), Size::new(4, 5)),
            Some(Coord::new(3, 3)),
        };
    }
}
