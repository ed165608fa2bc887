//! # Player Physics
//!
//! Frame-stepped player movement against a room's static geometry.
//! Positions are fractional; collisions use the hitbox with coordinates
//! truncated to whole pixels.

use crate::config::{GRAVITY, JUMP_STRENGTH, PLAYER_HEIGHT, PLAYER_WIDTH, TERMINAL_VELOCITY};
use crate::{Rect, Room};
use serde::{Deserialize, Serialize};

/// Horizontal offset of the player's spawn point from the left edge.
pub const SPAWN_X: f32 = 50.0;

/// Distance from the bottom of the scene to the player's spawn point.
pub const SPAWN_HEIGHT: f32 = 100.0;

/// The explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub on_ground: bool,
    pub has_key: bool,
    pub alive: bool,
    /// Whether jump was held on the previous frame
    pub jump_pressed: bool,
}

impl Player {
    /// Creates a player at `(x, y)`, at rest and not yet grounded.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vel_x: 0.0,
            vel_y: 0.0,
            on_ground: false,
            has_key: false,
            alive: true,
            jump_pressed: false,
        }
    }

    /// Creates a player at the spawn point of a scene of the given height.
    pub fn spawn(scene_height: i32) -> Self {
        Self::new(SPAWN_X, scene_height as f32 - SPAWN_HEIGHT)
    }

    /// The player's collision box.
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x as i32, self.y as i32, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Starts a jump if standing on something.
    pub fn jump(&mut self) {
        if self.on_ground {
            self.vel_y = JUMP_STRENGTH;
        }
    }

    /// Advances the player by one frame.
    ///
    /// Platform contacts are resolved against the hitbox taken right after
    /// integration, so a frame that touches two platforms resolves both
    /// against the same box. Feet flush with a surface count as landed.
    /// Touching an enemy or trap, or dropping below the scene, kills the
    /// player. Dead players do not move.
    pub fn update(&mut self, room: &Room, scene_width: i32, scene_height: i32) {
        if !self.alive {
            return;
        }

        self.vel_y = (self.vel_y + GRAVITY).min(TERMINAL_VELOCITY);
        self.x += self.vel_x;
        self.y += self.vel_y;

        self.on_ground = false;
        let hitbox = self.hitbox();

        for platform in &room.platforms {
            let resting = self.vel_y > 0.0
                && hitbox.bottom() == platform.rect.top()
                && hitbox.overlaps_horizontally(&platform.rect);
            if !hitbox.overlaps(&platform.rect) && !resting {
                continue;
            }
            if self.vel_y > 0.0 {
                self.y = (platform.rect.top() - PLAYER_HEIGHT) as f32;
                self.vel_y = 0.0;
                self.on_ground = true;
            } else if self.vel_y < 0.0 {
                self.y = platform.rect.bottom() as f32;
                self.vel_y = 0.0;
            }
        }

        if room.enemies.iter().any(|enemy| hitbox.overlaps(&enemy.rect)) {
            self.alive = false;
        }
        if room.traps.iter().any(|trap| hitbox.overlaps(&trap.rect)) {
            self.alive = false;
        }

        let max_x = (scene_width - PLAYER_WIDTH) as f32;
        if self.x < 0.0 {
            self.x = 0.0;
        } else if self.x > max_x {
            self.x = max_x;
        }

        if self.y > scene_height as f32 {
            self.alive = false;
        }
    }
}
