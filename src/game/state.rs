//! # Game State Module
//!
//! The play session: one room at a time, a player body moving through it,
//! and the progression from room to room.
//!
//! A session is stepped one frame at a time with [`GameState::update`]. It
//! never draws anything and never reads input devices; callers translate
//! whatever they have into a [`PlayerIntent`].

use crate::config::{PLAYER_SPEED, TARGET_FPS};
use crate::{
    CaveError, CaveResult, Generator, Player, PlayerIntent, RandomSource, Room, RoomGenerator,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// The player is exploring the current room
    Playing,
    /// The player touched a hazard or fell out of the scene
    GameOver,
    /// The player reached the door holding the key
    RoomComplete,
}

/// Central session state.
///
/// Holds the generator used for every room of the session so that a restart
/// or an advance produces rooms with the same tuning.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Generator for this session's rooms
    pub generator: RoomGenerator,
    /// The room being played
    pub room: Room,
    /// The player body
    pub player: Player,
    /// Current phase
    pub phase: GamePhase,
    /// One-based count of rooms entered since the last restart
    pub room_number: u32,
    /// Frames played in the current room
    pub frames_in_room: u64,
}

impl GameState {
    /// Starts a session in a freshly generated first room.
    pub fn new<R: RandomSource + ?Sized>(generator: RoomGenerator, rng: &mut R) -> CaveResult<Self> {
        let room = generator.generate(rng)?;
        Self::with_room(generator, room)
    }

    /// Starts a session in an existing room.
    ///
    /// The room is checked with the generator's validation first, so a
    /// session can never start in a room whose key is out of reach.
    pub fn with_room(generator: RoomGenerator, room: Room) -> CaveResult<Self> {
        generator.validate(&room)?;
        let player = Player::spawn(generator.config().scene_height);

        info!("room 1: {} platforms", room.platforms.len());

        Ok(Self {
            generator,
            room,
            player,
            phase: GamePhase::Playing,
            room_number: 1,
            frames_in_room: 0,
        })
    }

    /// Advances the session by one frame and returns the resulting phase.
    ///
    /// Frames outside [`GamePhase::Playing`] do nothing. When a frame both
    /// kills the player and touches the door, the death wins.
    pub fn update(&mut self, intent: PlayerIntent) -> GamePhase {
        if self.phase != GamePhase::Playing {
            return self.phase;
        }

        self.player.vel_x = if intent.right {
            PLAYER_SPEED
        } else if intent.left {
            -PLAYER_SPEED
        } else {
            0.0
        };

        if intent.jump && !self.player.jump_pressed {
            self.player.jump();
        }
        self.player.jump_pressed = intent.jump;

        self.frames_in_room += 1;

        let (scene_width, scene_height) = self.scene_size();
        self.player.update(&self.room, scene_width, scene_height);
        self.room.update_enemies();

        let hitbox = self.player.hitbox();

        if hitbox.overlaps(&self.room.key.rect) && self.room.key.collect() {
            self.player.has_key = true;
            debug!("key collected in room {}", self.room_number);
        }

        if !self.player.alive {
            self.phase = GamePhase::GameOver;
            info!("game over in room {}", self.room_number);
        } else if self.player.has_key && hitbox.overlaps(&self.room.door.rect) {
            self.phase = GamePhase::RoomComplete;
            info!(
                "room {} complete after {:.1}s",
                self.room_number,
                self.seconds_in_room()
            );
        }

        self.phase
    }

    /// Moves on to a fresh room after completing the current one.
    pub fn advance_room<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> CaveResult<()> {
        if self.phase != GamePhase::RoomComplete {
            return Err(CaveError::InvalidState(format!(
                "cannot advance from {:?}",
                self.phase
            )));
        }

        self.enter_room(self.room_number + 1, rng)
    }

    /// Starts over from the first room after a game over.
    pub fn restart<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> CaveResult<()> {
        if self.phase != GamePhase::GameOver {
            return Err(CaveError::InvalidState(format!(
                "cannot restart from {:?}",
                self.phase
            )));
        }

        self.enter_room(1, rng)
    }

    /// Whether the session is waiting on [`GameState::restart`].
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whether the session is waiting on [`GameState::advance_room`].
    pub fn is_room_complete(&self) -> bool {
        self.phase == GamePhase::RoomComplete
    }

    /// Time spent in the current room at the target frame rate.
    pub fn seconds_in_room(&self) -> f64 {
        self.frames_in_room as f64 / TARGET_FPS as f64
    }

    /// Scene bounds used by this session.
    pub fn scene_size(&self) -> (i32, i32) {
        let config = self.generator.config();
        (config.scene_width, config.scene_height)
    }

    fn enter_room<R: RandomSource + ?Sized>(
        &mut self,
        room_number: u32,
        rng: &mut R,
    ) -> CaveResult<()> {
        // A failed generation leaves the session untouched.
        let room = self.generator.generate(rng)?;

        self.room = room;
        self.player = Player::spawn(self.generator.config().scene_height);
        self.room_number = room_number;
        self.frames_in_room = 0;
        self.phase = GamePhase::Playing;

        info!(
            "room {}: {} platforms",
            self.room_number,
            self.room.platforms.len()
        );
        Ok(())
    }
}
