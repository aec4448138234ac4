//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
    /// Width / height should be positive.
    NonPositiveError,
    /// A {0} x {1} grid is too large to address.
    SizeOverflow(usize, usize),
    /// Unable to allocate a grid of {0} cells.
    AllocError(usize),
}
