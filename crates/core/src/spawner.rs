//! Enemy creation.
//!
//! [`EnemyFactory`] is the pure half of the spawner: it decides where the next
//! enemy appears. The timer that calls it lives in the engine crate.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::entity::{Entity, EntityIds};
use crate::types::{ArenaConfig, EntityKind, Size, Vec2};

/// Builds enemies at uniformly random x positions along the top edge.
///
/// Seeded, so a given seed always yields the same sequence of positions.
#[derive(Debug, Clone)]
pub struct EnemyFactory {
    rng: Pcg32,
    ids: EntityIds,
    max_x: f32,
    size: Size,
    velocity: Vec2,
}

impl EnemyFactory {
    pub fn new(config: &ArenaConfig, ids: EntityIds, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ids,
            max_x: config.enemy_spawn_max_x(),
            size: config.enemy_size,
            velocity: Vec2::new(0.0, config.enemy_speed),
        }
    }

    /// Next spawn x, uniform in `[0, arena_width - enemy_width]`.
    pub fn next_x(&mut self) -> f32 {
        self.rng.random_range(0.0..=self.max_x)
    }

    pub fn next_enemy(&mut self) -> Entity {
        let x = self.next_x();
        Entity::new(
            self.ids.next_id(),
            EntityKind::Enemy,
            Vec2::new(x, 0.0),
            self.size,
            self.velocity,
        )
    }
}
