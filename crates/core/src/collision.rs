//! Bullet/enemy hit resolution.

use crate::entity::Entity;
use crate::types::{EntityId, Vec2};

/// One confirmed bullet/enemy collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub bullet: EntityId,
    pub enemy: EntityId,
    /// Enemy top-left corner at the moment of the hit.
    pub enemy_position: Vec2,
}

/// Resolve hits between `bullets` and `enemies`, deactivating the pairs that collide.
///
/// For each active bullet the active enemies are scanned in order; the first
/// overlapping enemy is paired with it and both are deactivated, so a bullet
/// destroys at most one enemy and an enemy is claimed by at most one bullet.
/// Nothing is removed from the slices; compaction is the caller's job.
pub fn resolve_hits(bullets: &mut [Entity], enemies: &mut [Entity], mut on_hit: impl FnMut(Hit)) {
    for bullet in bullets.iter_mut() {
        if !bullet.is_active() {
            continue;
        }
        let bullet_rect = bullet.rect();
        let target = enemies
            .iter_mut()
            .find(|enemy| enemy.is_active() && bullet_rect.overlaps(&enemy.rect()));

        if let Some(enemy) = target {
            bullet.deactivate();
            enemy.deactivate();
            on_hit(Hit {
                bullet: bullet.id(),
                enemy: enemy.id(),
                enemy_position: enemy.position(),
            });
        }
    }
}
