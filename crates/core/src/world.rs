//! World module - owns the complete simulation state of one session
//!
//! The world holds the ship, the bullet and enemy collections, the score,
//! pending explosion effects and the session state. It is a plain value with
//! no timers and no locks: the engine's simulation loop owns it and is the
//! only code that advances it. Other activities reach it through [`Inbound`]
//! messages that the loop applies at the start of each tick.

use std::time::Duration;

use crate::collision::{resolve_hits, Hit};
use crate::effects::EffectTimeline;
use crate::entity::{Entity, EntityIds};
use crate::input::{bullet_origin, bullet_velocity, ship_target};
use crate::snapshot::WorldSnapshot;
use crate::surface::{ScoreAnchor, Surface};
use crate::types::{ArenaConfig, EntityId, EntityKind, InputCommand, Rect, SessionState};

/// Work queued for the simulation loop by other activities.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// A command from the input controller
    Input(InputCommand),
    /// A freshly created enemy from the spawner
    Enemy(Entity),
}

/// Result of a single [`World::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Bullet/enemy pairs destroyed this tick.
    pub hits: u32,
    /// Session state after the tick.
    pub state: SessionState,
}

impl TickOutcome {
    pub fn game_over(&self) -> bool {
        !self.state.is_running()
    }
}

/// Summary of a finished (or in-progress) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub score: u32,
    pub ticks: u64,
    pub bullets_fired: u32,
    pub enemies_spawned: u32,
    pub state: SessionState,
}

/// Complete simulation state for one session.
#[derive(Debug, Clone)]
pub struct World {
    config: ArenaConfig,
    ids: EntityIds,
    ship: Entity,
    bullets: Vec<Entity>,
    enemies: Vec<Entity>,
    effects: EffectTimeline,
    score: u32,
    state: SessionState,
    ticks: u64,
    bullets_fired: u32,
    enemies_spawned: u32,
}

impl World {
    /// Create a new world with the ship at its start position.
    pub fn new(config: ArenaConfig) -> Self {
        Self::with_ids(config, EntityIds::new())
    }

    /// Create a world that allocates ids from a shared allocator.
    pub fn with_ids(config: ArenaConfig, ids: EntityIds) -> Self {
        let ship = Entity::new(
            ids.next_id(),
            EntityKind::Ship,
            config.ship_start,
            config.ship_size,
            crate::types::Vec2::ZERO,
        );
        Self {
            config,
            ids,
            ship,
            bullets: Vec::new(),
            enemies: Vec::new(),
            effects: EffectTimeline::new(),
            score: 0,
            state: SessionState::Running,
            ticks: 0,
            bullets_fired: 0,
            enemies_spawned: 0,
        }
    }

    /// Publish the initial scene: the ship and the HUD score.
    pub fn start(&mut self, surface: &mut impl Surface) {
        surface.present(&self.ship.sprite());
        surface.show_score(self.score, ScoreAnchor::Hud);
        surface.refresh();
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn ids(&self) -> &EntityIds {
        &self.ids
    }

    pub fn ship(&self) -> &Entity {
        &self.ship
    }

    pub fn bullets(&self) -> &[Entity] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn effects(&self) -> &EffectTimeline {
        &self.effects
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            score: self.score,
            ticks: self.ticks,
            bullets_fired: self.bullets_fired,
            enemies_spawned: self.enemies_spawned,
            state: self.state,
        }
    }

    /// Apply one queued message. Returns whether it changed the world.
    pub fn accept(&mut self, message: Inbound, surface: &mut impl Surface) -> bool {
        match message {
            Inbound::Input(command) => self.apply_input(command, surface),
            Inbound::Enemy(enemy) => self.insert(enemy, surface),
        }
    }

    /// Apply an input command: move the ship or fire one bullet.
    ///
    /// Ignored once the session is over.
    pub fn apply_input(&mut self, command: InputCommand, surface: &mut impl Surface) -> bool {
        if !self.state.is_running() {
            return false;
        }
        if command == InputCommand::Fire {
            self.fire(surface);
            return true;
        }
        match ship_target(&self.config, self.ship.rect(), command) {
            Some(target) => {
                self.ship.move_to(target);
                surface.present(&self.ship.sprite());
                true
            }
            None => false,
        }
    }

    /// Append one bullet at the ship's horizontal center.
    pub fn fire(&mut self, surface: &mut impl Surface) -> EntityId {
        let bullet = Entity::new(
            self.ids.next_id(),
            EntityKind::Bullet,
            bullet_origin(&self.config, self.ship.rect()),
            self.config.bullet_size,
            bullet_velocity(&self.config),
        );
        let id = bullet.id();
        surface.present(&bullet.sprite());
        self.bullets.push(bullet);
        self.bullets_fired += 1;
        id
    }

    /// Append an externally created bullet or enemy.
    ///
    /// Refused when the session is over, when the entity is already inactive,
    /// or when it is a ship (there is only ever one).
    pub fn insert(&mut self, entity: Entity, surface: &mut impl Surface) -> bool {
        if !self.state.is_running() || !entity.is_active() {
            return false;
        }
        match entity.kind() {
            EntityKind::Bullet => {
                surface.present(&entity.sprite());
                self.bullets.push(entity);
            }
            EntityKind::Enemy => {
                log::debug!("enemy {:?} enters at x={:.1}", entity.id(), entity.position().x);
                surface.present(&entity.sprite());
                self.enemies.push(entity);
                self.enemies_spawned += 1;
            }
            EntityKind::Ship => return false,
        }
        true
    }

    /// Advance the simulation by one fixed step.
    ///
    /// `now` is the session clock (time since session start) and is only
    /// used to schedule and expire explosion effects.
    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome {
                hits: 0,
                state: self.state,
            };
        }
        self.ticks += 1;

        self.advance_bullets(surface);

        if let Some(id) = self.advance_enemies(surface) {
            log::info!(
                "enemy {:?} crossed the bottom edge at tick {}, final score {}",
                id,
                self.ticks,
                self.score
            );
            self.end_session(surface);
            return TickOutcome {
                hits: 0,
                state: self.state,
            };
        }

        let hits = self.resolve_collisions(now, surface);
        self.compact();
        self.expire_effects(now, surface);

        for entity in self.bullets.iter().chain(self.enemies.iter()) {
            surface.present(&entity.sprite());
        }
        surface.refresh();

        TickOutcome {
            hits,
            state: self.state,
        }
    }

    /// Move every bullet; those that leave the arena are deactivated.
    fn advance_bullets(&mut self, surface: &mut impl Surface) {
        let bounds = self.config.arena_size();
        for bullet in self.bullets.iter_mut().filter(|b| b.is_active()) {
            bullet.advance();
            if !bullet.rect().origin_within(bounds) {
                bullet.deactivate();
                surface.remove(bullet.id());
            }
        }
    }

    /// Move every enemy. Returns the first enemy whose bottom edge passed the
    /// arena floor; enemies after it are left unprocessed.
    fn advance_enemies(&mut self, surface: &mut impl Surface) -> Option<EntityId> {
        let bounds = self.config.arena_size();
        for enemy in self.enemies.iter_mut().filter(|e| e.is_active()) {
            enemy.advance();
            if enemy.rect().bottom() > bounds.height {
                return Some(enemy.id());
            }
            if !enemy.rect().origin_within(bounds) {
                enemy.deactivate();
                surface.remove(enemy.id());
            }
        }
        None
    }

    /// Pair bullets with enemies, score the hits and schedule explosions.
    fn resolve_collisions(&mut self, now: Duration, surface: &mut impl Surface) -> u32 {
        let mut hits: Vec<Hit> = Vec::new();
        resolve_hits(&mut self.bullets, &mut self.enemies, |hit| hits.push(hit));
        if hits.is_empty() {
            return 0;
        }

        let expires_at = now + self.config.explosion_duration();
        for hit in &hits {
            surface.remove(hit.bullet);
            surface.remove(hit.enemy);
            self.score += 1;

            let rect = Rect::from_parts(hit.enemy_position, self.config.explosion_size);
            let sprite = self.effects.schedule(self.ids.next_id(), rect, expires_at);
            surface.present(&sprite);
            log::debug!("bullet {:?} hit enemy {:?}, score {}", hit.bullet, hit.enemy, self.score);
        }
        surface.show_score(self.score, ScoreAnchor::Hud);
        hits.len() as u32
    }

    /// Drop every inactive entity.
    fn compact(&mut self) {
        self.bullets.retain(Entity::is_active);
        self.enemies.retain(Entity::is_active);
        debug_assert!(self.bullets.iter().all(Entity::is_active));
        debug_assert!(self.enemies.iter().all(Entity::is_active));
    }

    /// Retract explosions whose time is up. Works in any session state.
    pub fn expire_effects(&mut self, now: Duration, surface: &mut impl Surface) -> usize {
        let expired = self.effects.expire(now);
        for id in &expired {
            surface.remove(*id);
        }
        expired.len()
    }

    pub fn next_effect_deadline(&self) -> Option<Duration> {
        self.effects.next_deadline()
    }

    /// The loss transition: `Running -> GameOver`.
    ///
    /// Deactivates and retracts every bullet and enemy, reveals the game-over
    /// indicator and moves the score to its final position. Calling it again
    /// is a no-op.
    pub fn end_session(&mut self, surface: &mut impl Surface) {
        if !self.state.is_running() {
            return;
        }
        self.state = SessionState::GameOver;

        for entity in self.bullets.iter_mut().chain(self.enemies.iter_mut()) {
            entity.deactivate();
            surface.remove(entity.id());
        }
        self.bullets.clear();
        self.enemies.clear();

        surface.show_game_over();
        surface.show_score(self.score, ScoreAnchor::Final);
        surface.refresh();
    }

    /// Copy the current state into `out`, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        out.ship = self.ship.rect();
        out.bullets.clear();
        out.bullets.extend(self.bullets.iter().map(Entity::rect));
        out.enemies.clear();
        out.enemies.extend(self.enemies.iter().map(Entity::rect));
        out.explosions.clear();
        out.explosions.extend(self.effects.sprites().map(|s| s.rect));
        out.score = self.score;
        out.state = self.state;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut out = WorldSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
