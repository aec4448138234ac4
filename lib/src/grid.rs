//! Storage of the cells.

use crate::{
    cells::{State, DEAD},
    error::Error,
};

/// The storage of a fixed-size grid.
///
/// Cells are stored one byte each, in row-major order.
///
/// There are two buffers of the same size. `current` holds the generation
/// that can be observed from outside; `scratch` is only meaningful in the
/// middle of a step. Neither buffer is moved or reallocated after its
/// creation, so the address returned by [`as_ptr`](Self::as_ptr) stays the
/// same for the whole lifetime of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Box<[u8]>,
    scratch: Box<[u8]>,
}

/// Allocates a zero-filled buffer, reporting failure instead of aborting.
fn zeroed(len: usize) -> Result<Box<[u8]>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocError(len))?;
    buf.resize(len, DEAD.0);
    Ok(buf.into_boxed_slice())
}

impl Grid {
    /// Creates a grid with all cells dead.
    ///
    /// Returns an error if either dimension is zero, or if the buffers
    /// cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::NonPositiveError);
        }
        let len = width
            .checked_mul(height)
            .ok_or(Error::SizeOverflow(width, height))?;
        // Coordinates are passed around as `i32`.
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(Error::SizeOverflow(width, height));
        }
        Ok(Grid {
            width,
            height,
            current: zeroed(len)?,
            scratch: zeroed(len)?,
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// The cells of the current generation, in row-major order.
    ///
    /// Every byte is either `0` (dead) or `1` (alive).
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.current
    }

    /// The address of the first byte of [`view`](Self::view).
    ///
    /// It is the same for the whole lifetime of the grid.
    /// The pointed memory must only be read, and never while the grid
    /// is being modified.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.current.as_ptr()
    }

    /// Whether the coordinates are inside the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Row-major index of an in-bounds cell.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    pub fn get(&self, x: i32, y: i32) -> Option<State> {
        self.index(x, y).map(|i| State(self.current[i]))
    }

    /// Sets the state of a cell.
    ///
    /// Any state other than [`DEAD`] is stored as alive.
    pub fn set(&mut self, x: i32, y: i32, state: State) -> Result<(), Error> {
        let i = self.index(x, y).ok_or(Error::SetCellError((x, y)))?;
        self.current[i] = u8::from(state != DEAD);
        Ok(())
    }

    /// Flips the state of a cell. Returns the new state,
    /// or `None` if there is no such cell.
    pub(crate) fn flip(&mut self, x: i32, y: i32) -> Option<State> {
        let i = self.index(x, y)?;
        let state = !State(self.current[i]);
        self.current[i] = state.0;
        Some(state)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.current.fill(DEAD.0);
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&c| State(c).is_alive()).count()
    }

    /// The current generation for reading, and the scratch buffer for writing.
    #[inline]
    pub(crate) fn buffers(&mut self) -> (&[u8], &mut [u8]) {
        (&self.current, &mut self.scratch)
    }

    /// Copies the scratch buffer into the current generation.
    ///
    /// The bytes are overwritten in place; the buffers are never swapped.
    #[inline]
    pub(crate) fn commit(&mut self) {
        self.current.copy_from_slice(&self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::ALIVE;

    #[test]
    fn new_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert!(!grid.is_empty());
        assert!(grid.view().iter().all(|&c| c == 0));
    }

    #[test]
    fn zero_size() {
        assert_eq!(Grid::new(0, 3), Err(Error::NonPositiveError));
        assert_eq!(Grid::new(3, 0), Err(Error::NonPositiveError));
    }

    #[test]
    fn overflow() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(Error::SizeOverflow(usize::MAX, 2))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn too_wide_for_coords() {
        assert_eq!(
            Grid::new(1 << 31, 1 << 28),
            Err(Error::SizeOverflow(1 << 31, 1 << 28))
        );
        assert_eq!(
            Grid::new(1 << 28, 1 << 31),
            Err(Error::SizeOverflow(1 << 28, 1 << 31))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn alloc_failure() {
        assert_eq!(Grid::new(1 << 30, 1 << 30), Err(Error::AllocError(1 << 60)));
    }

    #[test]
    fn row_major() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(3, 1, ALIVE).unwrap();
        assert_eq!(grid.view()[4 + 3], 1);
        assert_eq!(grid.get(3, 1), Some(ALIVE));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn out_of_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.set(0, 3, ALIVE), Err(Error::SetCellError((0, 3))));
        assert_eq!(grid.flip(-1, -1), None);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn commit_keeps_address() {
        let mut grid = Grid::new(3, 3).unwrap();
        let ptr = grid.as_ptr();
        let (_, scratch) = grid.buffers();
        scratch.fill(1);
        grid.commit();
        assert_eq!(grid.as_ptr(), ptr);
        assert_eq!(grid.population(), 9);
    }
}
