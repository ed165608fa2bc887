//! # Room Descriptors
//!
//! Everything a generated room contains. A [`Room`] owns its platforms,
//! enemies, traps, key and door outright; nothing is shared between rooms,
//! and a new room replaces the old one wholesale.

use crate::config::{
    DOOR_HEIGHT, DOOR_WIDTH, ENEMY_SIZE, ENEMY_SPEED, KEY_HEIGHT, KEY_WIDTH, TRAP_HEIGHT,
    TRAP_WIDTH,
};
use crate::{Facing, Rect};
use serde::{Deserialize, Serialize};

/// Index of the ground platform in every room's platform list.
pub const GROUND_INDEX: usize = 0;

/// Horizontal inset of the door from the right edge of the scene.
pub const DOOR_INSET_X: i32 = 80;

/// Vertical inset of the door's top edge from the bottom of the scene.
pub const DOOR_INSET_Y: i32 = 100;

/// A solid platform. Platforms are identified by their index in
/// [`Room::platforms`], never by their geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    /// Creates a platform occupying `rect`.
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Creates the ground: full scene width, `thickness` tall, flush with
    /// the bottom of the scene.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::{Platform, Rect};
    ///
    /// let ground = Platform::ground(1000, 600, 40);
    /// assert_eq!(ground.rect, Rect::new(0, 560, 1000, 40));
    /// ```
    pub fn ground(scene_width: i32, scene_height: i32, thickness: i32) -> Self {
        Self::new(Rect::new(
            0,
            scene_height - thickness,
            scene_width,
            thickness,
        ))
    }

    /// Y coordinate of the walkable surface.
    pub fn top(&self) -> i32 {
        self.rect.top()
    }
}

/// An enemy pacing back and forth across one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Index of the platform this enemy patrols
    pub platform: usize,
    /// Left end of the patrol span
    pub patrol_left: i32,
    /// Right end of the patrol span (exclusive)
    pub patrol_right: i32,
    /// Pixels moved per frame
    pub speed: i32,
    pub facing: Facing,
}

impl Enemy {
    /// Creates an enemy standing on `platform` at horizontal position `x`,
    /// patrolling exactly that platform's span. Enemies start heading right.
    pub fn on_platform(index: usize, platform: &Platform, x: i32) -> Self {
        Self {
            rect: Rect::new(x, platform.top() - ENEMY_SIZE, ENEMY_SIZE, ENEMY_SIZE),
            platform: index,
            patrol_left: platform.rect.left(),
            patrol_right: platform.rect.right(),
            speed: ENEMY_SPEED,
            facing: Facing::Right,
        }
    }

    /// Advances the patrol by one frame.
    ///
    /// The enemy turns around on the frame its leading edge reaches either
    /// end of the span.
    pub fn update(&mut self) {
        self.rect.x += self.speed * self.facing.sign();

        if self.rect.left() <= self.patrol_left || self.rect.right() >= self.patrol_right {
            self.facing = self.facing.reversed();
        }
    }
}

/// A strip of spikes resting on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trap {
    pub rect: Rect,
    /// Index of the platform the trap rests on
    pub platform: usize,
}

impl Trap {
    /// Creates a trap on top of `platform` at horizontal position `x`.
    pub fn on_platform(index: usize, platform: &Platform, x: i32) -> Self {
        Self {
            rect: Rect::new(x, platform.top() - TRAP_HEIGHT, TRAP_WIDTH, TRAP_HEIGHT),
            platform: index,
        }
    }
}

/// The key that unlocks the room's door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub rect: Rect,
    /// Platform the key floats above, `None` when it sits at the fallback
    /// spot over the ground
    pub platform: Option<usize>,
    pub collected: bool,
}

impl Key {
    /// Creates an uncollected key with its top-left corner at `(x, y)`.
    pub fn new(x: i32, y: i32, platform: Option<usize>) -> Self {
        Self {
            rect: Rect::new(x, y, KEY_WIDTH, KEY_HEIGHT),
            platform,
            collected: false,
        }
    }

    /// Top-left corner of the key.
    pub fn position(&self) -> (i32, i32) {
        (self.rect.x, self.rect.y)
    }

    /// Marks the key collected. Returns `true` only the first time.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

/// The exit. Its position depends only on the scene size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub rect: Rect,
}

impl Door {
    /// Places the door on the ground near the right edge of the scene.
    pub fn for_scene(scene_width: i32, scene_height: i32) -> Self {
        Self {
            rect: Rect::new(
                scene_width - DOOR_INSET_X,
                scene_height - DOOR_INSET_Y,
                DOOR_WIDTH,
                DOOR_HEIGHT,
            ),
        }
    }
}

/// One generated room.
///
/// `platforms[GROUND_INDEX]` is always the ground; elevated platforms follow
/// in the order they were placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub traps: Vec<Trap>,
    pub key: Key,
    pub door: Door,
}

impl Room {
    /// The ground platform, `None` only for a room with no platforms.
    pub fn ground(&self) -> Option<&Platform> {
        self.platforms.get(GROUND_INDEX)
    }

    /// Elevated platforms with their indices.
    pub fn elevated_platforms(&self) -> impl Iterator<Item = (usize, &Platform)> + '_ {
        self.platforms
            .iter()
            .enumerate()
            .skip(GROUND_INDEX + 1)
    }

    /// Gets a platform by index.
    pub fn platform(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    /// Advances every enemy patrol by one frame.
    pub fn update_enemies(&mut self) {
        for enemy in &mut self.enemies {
            enemy.update();
        }
    }
}
