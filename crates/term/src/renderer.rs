//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; every other frame only rewrites runs of changed cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    title: String,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            stdout: io::stdout(),
            title: title.into(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(self.title.as_str()))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed frame.
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

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, keeping it as the base for the next diff.
    ///
    /// After the call `fb` holds the previous frame's buffer, so callers can
    /// render the next frame into it without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                log::debug!("full redraw at {}x{}", fb.width(), fb.height());
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
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

/// Tracks the terminal's current style so runs of same-styled cells are
/// written as bare characters.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn put_run(&mut self, cells: &[Cell]) -> io::Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                cell.style.queue_into(&mut *self.out)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut writer = CellWriter::new(out);
    for (y, row) in fb.rows().enumerate() {
        writer.out.queue(cursor::MoveTo(0, y as u16))?;
        writer.put_run(row)?;
    }
    writer.finish()?;
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Both framebuffers must have the same dimensions.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    debug_assert_eq!(
        (prev.width(), prev.height()),
        (next.width(), next.height())
    );
    let mut writer = CellWriter::new(out);
    for (y, (old, new)) in prev.rows().zip(next.rows()).enumerate() {
        for (x, run) in changed_runs(old, new) {
            writer.out.queue(cursor::MoveTo(x as u16, y as u16))?;
            writer.put_run(run)?;
        }
    }
    writer.finish()?;
    Ok(())
}

/// Maximal runs of `new` that differ from `old`, with their starting column.
fn changed_runs<'a>(
    old: &'a [Cell],
    new: &'a [Cell],
) -> impl Iterator<Item = (usize, &'a [Cell])> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let start = x + old[x..].iter().zip(&new[x..]).position(|(a, b)| a != b)?;
        let len = old[start..]
            .iter()
            .zip(&new[start..])
            .position(|(a, b)| a == b)
            .unwrap_or(new.len() - start);
        x = start + len;
        Some((start, &new[start..x]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_are_coalesced_per_row() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, style.cell('▼'));
        }
        b.set(5, 1, style.cell('▲'));

        let runs: Vec<(usize, usize, String)> = a
            .rows()
            .zip(b.rows())
            .enumerate()
            .flat_map(|(y, (old, new))| {
                changed_runs(old, new)
                    .map(move |(x, run)| (x, y, run.iter().map(|c| c.ch).collect()))
            })
            .collect();
        assert_eq!(
            runs,
            vec![(1, 0, "▼▼▼".to_string()), (5, 1, "▲".to_string())]
        );
    }

    #[test]
    fn identical_frames_encode_only_reset() {
        let a = FrameBuffer::new(4, 4);
        let mut diff = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut diff).unwrap();

        let mut full = Vec::new();
        encode_full_into(&a, &mut full).unwrap();
        assert!(diff.len() < full.len());
        assert!(!String::from_utf8_lossy(&diff).contains(' '));
    }

    #[test]
    fn diff_moves_to_each_changed_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(8, 3);
        let mut b = a.clone();
        b.set(2, 1, style.cell('x'));
        b.set(6, 2, style.dim().cell('y'));

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // MoveTo is 1-based: row;column
        let first = text.find("\x1b[2;3H").unwrap();
        let second = text.find("\x1b[3;7H").unwrap();
        assert!(first < second);
        assert!(text[first..second].ends_with('x'));
        assert!(text[second..].contains("\x1b[2my"));
    }
}
