//! # Cave Explorer
//!
//! An endless single-room platformer: every room is a procedurally generated
//! cave of platforms, patrolling enemies and spike traps, with a key that
//! unlocks the exit door.
//!
//! ## Architecture Overview
//!
//! - **Generation**: platform layout, jump reachability, key placement and
//!   hazard scatter. Everything random flows through an injected
//!   [`RandomSource`], so a seeded source always yields the same room.
//! - **Game**: the room descriptor types and a frame-stepped session that
//!   integrates the player, patrols enemies and tracks room progression.
//! - **Utils**: rectangle geometry and the random source abstraction.
//!
//! ## Quick start
//!
//! ```
//! use cave_explorer::generate_room;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let room = generate_room(1000, 600, &mut rng).unwrap();
//! assert_eq!(room.ground().unwrap().rect.width, 1000);
//! ```

pub mod game;
pub mod generation;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use utils::*;

pub use game::{
    Door, Enemy, Facing, GamePhase, GameState, Key, Platform, Player, PlayerIntent, Room, Trap,
};

pub use generation::{
    can_reach, generate_room, GenerationConfig, Generator, JumpEnvelope, PlatformLayout,
    PlatformLayoutGenerator, Reachability, RoomGenerator,
};

pub use utils::{RandomSource, Rect};

/// Core error type for Cave Explorer.
#[derive(thiserror::Error, Debug)]
pub enum CaveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation parameters cannot produce a well-formed room
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game or room state is invalid for the requested operation
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Cave Explorer codebase.
pub type CaveResult<T> = Result<T, CaveError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default scene width in pixels
    pub const DEFAULT_SCENE_WIDTH: i32 = 1000;

    /// Default scene height in pixels
    pub const DEFAULT_SCENE_HEIGHT: i32 = 600;

    /// Frames per second the session is stepped at
    pub const TARGET_FPS: u64 = 60;

    /// Downward acceleration applied to the player every frame
    pub const GRAVITY: f32 = 0.8;

    /// Upper bound on the player's falling speed
    pub const TERMINAL_VELOCITY: f32 = 20.0;

    /// Vertical velocity applied when the player jumps
    pub const JUMP_STRENGTH: f32 = -15.0;

    /// Horizontal player speed in pixels per frame
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Player hitbox size
    pub const PLAYER_WIDTH: i32 = 30;
    pub const PLAYER_HEIGHT: i32 = 40;

    /// Enemy patrol speed in pixels per frame
    pub const ENEMY_SPEED: i32 = 2;

    /// Enemy hitbox size (square)
    pub const ENEMY_SIZE: i32 = 25;

    /// Spike trap size
    pub const TRAP_WIDTH: i32 = 30;
    pub const TRAP_HEIGHT: i32 = 10;

    /// Key size
    pub const KEY_WIDTH: i32 = 20;
    pub const KEY_HEIGHT: i32 = 30;

    /// Door size
    pub const DOOR_WIDTH: i32 = 40;
    pub const DOOR_HEIGHT: i32 = 60;
}
