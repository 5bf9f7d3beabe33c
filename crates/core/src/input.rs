//! Ship movement and bullet placement rules.

use crate::types::{ArenaConfig, InputCommand, Rect, Vec2};

/// Where a move command puts the ship, or `None` if the command does not move it.
///
/// Movement is clamped so the ship stays inside the configured margins.
/// Vertical commands are ignored unless `vertical_movement_enabled` is set.
pub fn ship_target(config: &ArenaConfig, ship: Rect, command: InputCommand) -> Option<Vec2> {
    let step = config.ship_speed_step;
    let (min_x, max_x) = config.ship_x_range();
    let (min_y, max_y) = config.ship_y_range();

    let target = match command {
        InputCommand::MoveLeft => Vec2::new((ship.x - step).clamp(min_x, max_x), ship.y),
        InputCommand::MoveRight => Vec2::new((ship.x + step).clamp(min_x, max_x), ship.y),
        InputCommand::MoveUp if config.vertical_movement_enabled => {
            Vec2::new(ship.x, (ship.y - step).clamp(min_y, max_y))
        }
        InputCommand::MoveDown if config.vertical_movement_enabled => {
            Vec2::new(ship.x, (ship.y + step).clamp(min_y, max_y))
        }
        _ => return None,
    };
    Some(target)
}

/// Top-left corner of a bullet fired from `ship`: horizontally centered, level with the ship's top.
pub fn bullet_origin(config: &ArenaConfig, ship: Rect) -> Vec2 {
    Vec2::new(ship.center_x() - config.bullet_size.width / 2.0, ship.y)
}

pub fn bullet_velocity(config: &ArenaConfig) -> Vec2 {
    Vec2::new(0.0, -config.bullet_speed)
}
