//! Terminal screen: flushes frames with a changed-run diff.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Glyph, Rgb, Style};

/// Owns the raw-mode terminal and the previously flushed frame.
pub struct Screen {
    stdout: io::Stdout,
    last: Option<Frame>,
    queue: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            queue: Vec::with_capacity(64 * 1024),
        }
    }

    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.queue.clear();
        self.queue.queue(terminal::EnterAlternateScreen)?;
        self.queue.queue(cursor::Hide)?;
        self.queue.queue(terminal::DisableLineWrap)?;
        self.flush_queue()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn leave(&mut self) -> Result<()> {
        self.queue.clear();
        self.queue.queue(ResetColor)?;
        self.queue.queue(SetAttribute(Attribute::Reset))?;
        self.queue.queue(terminal::EnableLineWrap)?;
        self.queue.queue(cursor::Show)?;
        self.queue.queue(terminal::LeaveAlternateScreen)?;
        self.flush_queue()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, diffing against the previous one.
    ///
    /// The frame is swapped into internal state so the caller can keep
    /// reusing its buffer without cloning.
    pub fn present(&mut self, frame: &mut Frame) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => prev,
            _ => {
                // No usable previous frame: repaint from scratch.
                self.queue.clear();
                self.queue.queue(terminal::Clear(terminal::ClearType::All))?;
                encode_runs(frame, full_runs(frame), &mut self.queue)?;
                self.flush_queue()?;
                let mut fresh = Frame::new(frame.width(), frame.height());
                std::mem::swap(&mut fresh, frame);
                self.last = Some(fresh);
                return Ok(());
            }
        };

        self.queue.clear();
        encode_runs(frame, changed_runs(&prev, frame), &mut self.queue)?;
        self.flush_queue()?;

        std::mem::swap(&mut prev, frame);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_queue(&mut self) -> Result<()> {
        self.stdout.write_all(&self.queue)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal run of cells to repaint: `(x, y, len)`.
type Run = (u16, u16, u16);

fn full_runs(frame: &Frame) -> Vec<Run> {
    (0..frame.height()).map(|y| (0, y, frame.width())).collect()
}

/// Coalesce differing cells into horizontal runs, row by row.
fn changed_runs(prev: &Frame, next: &Frame) -> Vec<Run> {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));
    let mut runs = Vec::new();

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }

    runs
}

fn encode_runs(frame: &Frame, runs: Vec<Run>, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Style> = None;

    for (x, y, len) in runs {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = frame.get(x + dx, y).unwrap_or_else(Glyph::default);
            if current != Some(glyph.style) {
                encode_style(glyph.style, out)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_style(style: Style, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Style;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = Frame::new(6, 1);
        let mut b = Frame::new(6, 1);
        for x in 1..=3 {
            b.put(x, 0, 'X', Style::default());
        }
        b.put(5, 0, 'Y', Style::default());

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 0, 1)]);
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let a = Frame::new(4, 3);
        let b = a.clone();
        assert!(changed_runs(&a, &b).is_empty());
    }

    #[test]
    fn full_runs_cover_every_row() {
        let frame = Frame::new(7, 3);
        assert_eq!(full_runs(&frame), vec![(0, 0, 7), (0, 1, 7), (0, 2, 7)]);
    }

    #[test]
    fn encode_runs_emits_output_for_changes() {
        let mut frame = Frame::new(3, 1);
        frame.put(0, 0, 'A', Style::default());
        let mut out = Vec::new();
        encode_runs(&frame, full_runs(&frame), &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
