//! ArenaView: maps a [`Scene`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scene::Scene;
use crate::types::{Rect, SpriteKind, Vec2};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SPACE: Rgb = Rgb::new(8, 8, 24);

/// Draw order, back to front.
const LAYERS: [SpriteKind; 4] = [
    SpriteKind::Explosion,
    SpriteKind::Enemy,
    SpriteKind::Bullet,
    SpriteKind::Ship,
];

/// A lightweight terminal renderer for the arena.
pub struct ArenaView {
    /// Arena units covered by one terminal column.
    unit_w: f32,
    /// Arena units covered by one terminal row.
    unit_h: f32,
    anchor_y: AnchorY,
}

impl Default for ArenaView {
    fn default() -> Self {
        // 10x20 keeps a 600x400 arena inside an 80x24 terminal and roughly
        // square on screen.
        Self::new(10.0, 20.0)
    }
}

/// Cell rectangle inside the play area: (x, y, w, h).
type CellRect = (u16, u16, u16, u16);

impl ArenaView {
    pub fn new(unit_w: f32, unit_h: f32) -> Self {
        Self {
            unit_w: unit_w.max(1.0),
            unit_h: unit_h.max(1.0),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Play area size in cells for a scene.
    pub fn play_area(&self, scene: &Scene) -> (u16, u16) {
        let w = (scene.arena.width / self.unit_w).ceil().max(1.0) as u16;
        let h = (scene.arena.height / self.unit_h).ceil().max(1.0) as u16;
        (w, h)
    }

    /// Render a scene into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, scene: &Scene, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (area_w, area_h) = self.play_area(scene);
        let frame_w = area_w.saturating_add(2);
        let frame_h = area_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x + 1, start_y + 1);

        self.draw_starfield(fb, origin, area_w, area_h);
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        for layer in LAYERS {
            for sprite in scene.sprites.values().filter(|s| s.kind == layer) {
                if let Some(cells) = self.cells_for(&sprite.rect, area_w, area_h) {
                    self.draw_sprite(fb, origin, cells, sprite.kind);
                }
            }
        }

        let label = CellStyle::plain(Rgb::new(240, 240, 240), SPACE).bold();
        let (sx, sy) = self.text_cell(scene.score_at, area_w, area_h);
        let text_x = origin.0 + sx;
        let text_y = origin.1 + sy;
        fb.put_str(text_x, text_y, "Score: ", label);
        fb.put_u32(text_x + 7, text_y, scene.score, label);

        if scene.game_over {
            let banner = CellStyle::plain(Rgb::new(255, 80, 80), SPACE).bold();
            let (gx, gy) = self.text_cell(scene.game_over_at, area_w, area_h);
            fb.put_str(origin.0 + gx, origin.1 + gy, "Game Over", banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    /// Cells covered by an arena rectangle, clipped to the play area.
    fn cells_for(&self, rect: &Rect, area_w: u16, area_h: u16) -> Option<CellRect> {
        let x0 = (rect.x / self.unit_w).floor().max(0.0);
        let y0 = (rect.y / self.unit_h).floor().max(0.0);
        let x1 = (rect.right() / self.unit_w).ceil().min(area_w as f32);
        let y1 = (rect.bottom() / self.unit_h).ceil().min(area_h as f32);
        if x0 >= area_w as f32 || y0 >= area_h as f32 {
            return None;
        }
        let w = (x1 - x0).max(1.0) as u16;
        let h = (y1 - y0).max(1.0) as u16;
        Some((x0 as u16, y0 as u16, w, h))
    }

    fn text_cell(&self, at: Vec2, area_w: u16, area_h: u16) -> (u16, u16) {
        let x = (at.x / self.unit_w).floor().max(0.0) as u16;
        let y = (at.y / self.unit_h).floor().max(0.0) as u16;
        (
            x.min(area_w.saturating_sub(1)),
            y.min(area_h.saturating_sub(1)),
        )
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, origin: (u16, u16), cells: CellRect, kind: SpriteKind) {
        let (fg, ch) = match kind {
            SpriteKind::Ship => (Rgb::new(90, 220, 120), '▲'),
            SpriteKind::Bullet => (Rgb::new(250, 230, 90), '│'),
            SpriteKind::Enemy => (Rgb::new(230, 80, 80), '▼'),
            SpriteKind::Explosion => (Rgb::new(255, 160, 40), '✶'),
        };
        let style = CellStyle::plain(fg, SPACE).bold();
        let (x, y, w, h) = cells;
        fb.fill_rect(origin.0 + x, origin.1 + y, w, h, ch, style);
    }

    fn draw_starfield(&self, fb: &mut FrameBuffer, origin: (u16, u16), w: u16, h: u16) {
        let space = CellStyle::plain(Rgb::new(110, 110, 140), SPACE);
        let star = space.dim();
        for y in 0..h {
            for x in 0..w {
                let seed = (x as u32).wrapping_mul(7919) ^ (y as u32).wrapping_mul(104_729);
                let (ch, style) = if seed % 37 == 0 { ('·', star) } else { (' ', space) };
                fb.put_char(origin.0 + x, origin.1 + y, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
