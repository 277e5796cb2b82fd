//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are written, which keeps a 20 Hz full-screen redraw cheap over slow ttys.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::Surface;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    ///
    /// Raw mode is switched back off if the screen setup fails, so an error
    /// here leaves the terminal as it was.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let entered = self.enter_screen();
        undo_on_err(entered, || {
            let _ = terminal::disable_raw_mode();
        })
    }

    fn enter_screen(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers so
    /// the caller gets the old one back to draw the next frame into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.buf.clear();
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                self.buf.clear();
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height()).with_style(fb.style())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// The real terminal as a [`Surface`]: a framebuffer plus the renderer that flushes it.
///
/// The terminal is acquired by [`TerminalSurface::enter`] and released exactly
/// once, by [`TerminalSurface::exit`] or on drop.
pub struct TerminalSurface {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
    active: bool,
}

impl TerminalSurface {
    /// Take over the terminal, sized to its current dimensions.
    pub fn enter(fallback: (u16, u16)) -> Result<Self> {
        let (width, height) = terminal::size().unwrap_or(fallback);
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            fb: FrameBuffer::new(width, height),
            renderer,
            active: true,
        })
    }

    /// Restore the terminal. Later calls are no-ops.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        self.fb.size()
    }

    fn clear(&mut self) {
        self.fb.clear();
    }

    fn set_cell(&mut self, col: i32, row: i32, ch: char) {
        self.fb.set_cell(col, row, ch);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    apply_style_into(out, fb.style())?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style = Some(fb.style());
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    Ok(())
}

fn undo_on_err<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
