//! Rendering surface seam.
//!
//! The simulation publishes and retracts visual representations through
//! [`Surface`] and never learns how drawing happens. A terminal
//! implementation lives in the `term` crate; [`RecordingSurface`] is a
//! headless implementation that records every call.

use crate::types::{EntityId, Sprite};

/// Where the score label sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreAnchor {
    /// Corner HUD while the session is running
    Hud,
    /// End-of-game location next to the "Game Over" indicator
    Final,
}

/// Consumer of the simulation's visual output.
pub trait Surface {
    /// Publish (or update) a sprite.
    fn present(&mut self, sprite: &Sprite);

    /// Retract a previously presented sprite. Unknown ids are ignored.
    fn remove(&mut self, id: EntityId);

    /// Redraw the score label at `anchor`.
    fn show_score(&mut self, score: u32, anchor: ScoreAnchor);

    /// Reveal the "Game Over" indicator.
    fn show_game_over(&mut self);

    /// Flush pending changes to the viewer.
    fn refresh(&mut self);
}

/// Surface that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn present(&mut self, _sprite: &Sprite) {}
    fn remove(&mut self, _id: EntityId) {}
    fn show_score(&mut self, _score: u32, _anchor: ScoreAnchor) {}
    fn show_game_over(&mut self) {}
    fn refresh(&mut self) {}
}

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Present(Sprite),
    Remove(EntityId),
    Score(u32, ScoreAnchor),
    GameOver,
    Refresh,
}

/// Surface that keeps a log of everything it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn removed(&self) -> Vec<EntityId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Remove(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn presented(&self, id: EntityId) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, SurfaceCall::Present(s) if s.id == id))
    }

    pub fn refresh_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Refresh))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, sprite: &Sprite) {
        self.calls.push(SurfaceCall::Present(*sprite));
    }

    fn remove(&mut self, id: EntityId) {
        self.calls.push(SurfaceCall::Remove(id));
    }

    fn show_score(&mut self, score: u32, anchor: ScoreAnchor) {
        self.calls.push(SurfaceCall::Score(score, anchor));
    }

    fn show_game_over(&mut self) {
        self.calls.push(SurfaceCall::GameOver);
    }

    fn refresh(&mut self) {
        self.calls.push(SurfaceCall::Refresh);
    }
}
