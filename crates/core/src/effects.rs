//! Time-boxed cosmetic effects (hit explosions).
//!
//! Effects are tracked with an expiry deadline measured on the session clock
//! (time since session start). The simulation loop checks the timeline every
//! tick and retracts whatever has expired; effects never influence collisions.

use std::time::Duration;

use crate::types::{EntityId, Rect, Sprite, SpriteKind};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingEffect {
    sprite: Sprite,
    expires_at: Duration,
}

/// Pending effect expirations, kept in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct EffectTimeline {
    pending: Vec<PendingEffect>,
}

impl EffectTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new explosion until `expires_at`.
    pub fn schedule(&mut self, id: EntityId, rect: Rect, expires_at: Duration) -> Sprite {
        let sprite = Sprite {
            id,
            kind: SpriteKind::Explosion,
            rect,
        };
        self.pending.push(PendingEffect { sprite, expires_at });
        sprite
    }

    /// Remove every effect whose deadline is at or before `now`, returning their ids.
    pub fn expire(&mut self, now: Duration) -> Vec<EntityId> {
        let mut expired = Vec::new();
        self.pending.retain(|effect| {
            if effect.expires_at <= now {
                expired.push(effect.sprite.id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Earliest outstanding deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|e| e.expires_at).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.pending.iter().map(|e| &e.sprite)
    }
}
