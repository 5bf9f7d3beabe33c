//! Scene: the retained picture a [`Surface`] builds up between refreshes.
//!
//! [`SceneSurface`] is handed to the simulation loop. It records presents and
//! retractions into a pending [`Scene`] and publishes a copy over a `watch`
//! channel on every refresh, so the terminal thread always reads the latest
//! complete frame without touching the world.

use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::core::{ArenaConfig, ScoreAnchor, Surface};
use crate::types::{EntityId, Size, Sprite, Vec2};

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub arena: Size,
    pub sprites: BTreeMap<EntityId, Sprite>,
    pub score: u32,
    /// Arena position of the score label.
    pub score_at: Vec2,
    pub game_over: bool,
    pub game_over_at: Vec2,
}

impl Scene {
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            arena: config.arena_size(),
            sprites: BTreeMap::new(),
            score: 0,
            score_at: config.score_hud_anchor,
            game_over: false,
            game_over_at: config.game_over_anchor,
        }
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}

/// [`Surface`] that publishes [`Scene`]s through a `watch` channel.
pub struct SceneSurface {
    pending: Scene,
    hud_anchor: Vec2,
    final_anchor: Vec2,
    tx: watch::Sender<Scene>,
}

impl SceneSurface {
    /// Create a surface and the receiver the view reads from.
    pub fn channel(config: &ArenaConfig) -> (Self, watch::Receiver<Scene>) {
        let scene = Scene::new(config);
        let (tx, rx) = watch::channel(scene.clone());
        let surface = Self {
            pending: scene,
            hud_anchor: config.score_hud_anchor,
            final_anchor: config.score_final_anchor,
            tx,
        };
        (surface, rx)
    }

    pub fn pending(&self) -> &Scene {
        &self.pending
    }
}

impl Surface for SceneSurface {
    fn present(&mut self, sprite: &Sprite) {
        self.pending.sprites.insert(sprite.id, *sprite);
    }

    fn remove(&mut self, id: EntityId) {
        self.pending.sprites.remove(&id);
    }

    fn show_score(&mut self, score: u32, anchor: ScoreAnchor) {
        self.pending.score = score;
        self.pending.score_at = match anchor {
            ScoreAnchor::Hud => self.hud_anchor,
            ScoreAnchor::Final => self.final_anchor,
        };
    }

    fn show_game_over(&mut self) {
        self.pending.game_over = true;
    }

    fn refresh(&mut self) {
        // No receivers left just means nobody is watching.
        self.tx.send_replace(self.pending.clone());
    }
}
