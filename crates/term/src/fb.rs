//! Framebuffer and style types for terminal rendering.

use anyhow::Result;

use crate::surface::Surface;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for CellStyle {
    /// White on black.
    fn default() -> Self {
        Self {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Every cell drawn through [`Surface`] uses the buffer's current style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    style: CellStyle,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            style: CellStyle::default(),
            cells: vec![Cell::default(); len],
        }
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self.cells.fill(Cell { ch: ' ', style });
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Characters of row `y`, or an empty string past the bottom.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        let blank = Cell { ch: ' ', style: self.style };
        self.cells.fill(blank);
    }

    fn set_cell(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 || col > u16::MAX as i32 || row > u16::MAX as i32 {
            return;
        }
        let style = self.style;
        self.put_char(col as u16, row as u16, ch, style);
    }

    /// Nothing to flush; the buffer is the display.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
