//! Simulated entities and id allocation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::types::{EntityId, EntityKind, Rect, Size, Sprite, Vec2};

/// Session-wide id allocator.
///
/// Cloned into every activity that creates objects (the world itself and the
/// enemy factory), so ids stay unique even when created on different tasks.
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    next: Arc<AtomicU64>,
}

impl EntityIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> EntityId {
        EntityId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// A mutable simulated object: ship, bullet or enemy.
///
/// `active` can only ever go from `true` to `false`; there is no way to
/// re-activate an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    rect: Rect,
    velocity: Vec2,
    active: bool,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, position: Vec2, size: Size, velocity: Vec2) -> Self {
        Self {
            id,
            kind,
            rect: Rect::from_parts(position, size),
            velocity,
            active: true,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Advance by one tick of velocity. Inactive entities stay put.
    pub fn advance(&mut self) {
        if self.active {
            self.rect = self.rect.translated(self.velocity);
        }
    }

    pub(crate) fn move_to(&mut self, position: Vec2) {
        self.rect = self.rect.moved_to(position);
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            id: self.id,
            kind: self.kind.into(),
            rect: self.rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet() -> Entity {
        Entity::new(
            EntityId(7),
            EntityKind::Bullet,
            Vec2::new(10.0, 100.0),
            Size::new(5.0, 20.0),
            Vec2::new(0.0, -5.0),
        )
    }

    #[test]
    fn advance_applies_velocity() {
        let mut b = bullet();
        b.advance();
        b.advance();
        assert_eq!(b.position(), Vec2::new(10.0, 90.0));
        assert_eq!(b.rect().size(), Size::new(5.0, 20.0));
    }

    #[test]
    fn inactive_entity_does_not_move() {
        let mut b = bullet();
        b.deactivate();
        b.advance();
        assert!(!b.is_active());
        assert_eq!(b.position(), Vec2::new(10.0, 100.0));
    }

    #[test]
    fn ids_are_unique_across_clones() {
        let ids = EntityIds::new();
        let other = ids.clone();
        let a = ids.next_id();
        let b = other.next_id();
        let c = ids.next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a < b && b < c);
    }

    #[test]
    fn sprite_carries_kind_and_rect() {
        let b = bullet();
        let s = b.sprite();
        assert_eq!(s.id, EntityId(7));
        assert_eq!(s.kind, crate::types::SpriteKind::Bullet);
        assert_eq!(s.rect, b.rect());
    }
}
