//! The character-cell display the game draws on.

use anyhow::Result;

/// A grid of character cells with an explicit present step.
///
/// Coordinates are signed; cells outside the surface are silently skipped so
/// callers can draw objects that are partly off-screen.
pub trait Surface {
    /// `(width, height)` in cells.
    fn size(&self) -> (u16, u16);

    /// Blank every cell.
    fn clear(&mut self);

    fn set_cell(&mut self, col: i32, row: i32, ch: char);

    /// Make everything drawn since the last present visible.
    fn present(&mut self) -> Result<()>;
}
