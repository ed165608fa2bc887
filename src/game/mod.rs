//! # Game Module
//!
//! Room descriptors and the frame-stepped session that plays them.
//!
//! - [`world`]: the room, its platforms, hazards, key and door
//! - [`player`]: player body physics against a room's static geometry
//! - [`state`]: room progression, key pickup, death and restarts

pub mod player;
pub mod state;
pub mod world;

pub use player::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Horizontal heading of a patrolling entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Converts the heading to a unit step along X.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::Facing;
    ///
    /// assert_eq!(Facing::Left.sign(), -1);
    /// assert_eq!(Facing::Right.sign(), 1);
    /// ```
    pub fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    /// Returns the opposite heading.
    pub fn reversed(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// What the player is asking for this frame.
///
/// The session does not care which device produced it; holding `jump`
/// across frames only jumps once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PlayerIntent {
    /// No buttons held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Holding left.
    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    /// Holding right.
    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    /// Holding jump.
    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }

    /// Adds jump to an existing intent.
    pub fn with_jump(self) -> Self {
        Self { jump: true, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_reversal() {
        assert_eq!(Facing::Left.reversed(), Facing::Right);
        assert_eq!(Facing::Right.reversed().reversed(), Facing::Right);
    }

    #[test]
    fn test_intent_builders() {
        assert_eq!(PlayerIntent::idle(), PlayerIntent::default());
        assert!(PlayerIntent::left().left);
        assert!(!PlayerIntent::left().right);

        let running_jump = PlayerIntent::right().with_jump();
        assert!(running_jump.right && running_jump.jump);
        assert!(!running_jump.left);
    }
}
