use crate::types::{Rect, SessionState};

/// Read-only copy of the world at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldSnapshot {
    pub ship: Rect,
    pub bullets: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub explosions: Vec<Rect>,
    pub score: u32,
    pub state: SessionState,
    pub ticks: u64,
}

impl WorldSnapshot {
    pub fn playable(&self) -> bool {
        self.state.is_running()
    }

    pub fn entity_count(&self) -> usize {
        1 + self.bullets.len() + self.enemies.len()
    }
}
