//! # Room Generation
//!
//! Ties layout, reachability and key placement together into a finished
//! [`Room`].

use crate::{
    CaveError, CaveResult, Door, GenerationConfig, Generator, JumpEnvelope, KeyPlacement,
    PlatformLayoutGenerator, RandomSource, Reachability, Rect, Room, GROUND_INDEX,
};
use log::debug;

/// Generator for complete rooms.
///
/// Every room it returns has the ground at index 0, no two overlapping
/// platforms, hazards only on elevated platforms, and a key the player can
/// get to from the ground.
#[derive(Debug, Clone)]
pub struct RoomGenerator {
    layout: PlatformLayoutGenerator,
    envelope: JumpEnvelope,
    key_placement: KeyPlacement,
}

impl RoomGenerator {
    /// Creates a room generator from a configuration, validating it first.
    pub fn new(config: GenerationConfig) -> CaveResult<Self> {
        let envelope = JumpEnvelope::from_config(&config);
        let key_placement = KeyPlacement::from_config(&config);
        let layout = PlatformLayoutGenerator::new(config)?;

        Ok(Self {
            layout,
            envelope,
            key_placement,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        self.layout.config()
    }

    pub fn envelope(&self) -> &JumpEnvelope {
        &self.envelope
    }

    /// Recomputes the reachable set for an existing room.
    pub fn reachability(&self, room: &Room) -> Reachability {
        Reachability::analyze(&room.platforms, &self.envelope)
    }

    /// A shortest chain of platforms from the ground to the key's platform.
    ///
    /// A key at the fallback spot sits over the ground, so its route is the
    /// ground alone.
    pub fn route_to_key(&self, room: &Room) -> Option<Vec<usize>> {
        let target = room.key.platform.unwrap_or(GROUND_INDEX);
        self.reachability(room)
            .route_to(&room.platforms, &self.envelope, target)
    }

    fn validate_key(&self, room: &Room) -> CaveResult<()> {
        let key = &room.key;
        if key.collected {
            return Err(CaveError::InvalidState(
                "freshly generated key is already collected".to_string(),
            ));
        }

        let config = self.config();
        let scene = Rect::new(0, 0, config.scene_width, config.scene_height);
        if !scene.contains_rect(&key.rect) {
            return Err(CaveError::InvalidState(format!(
                "key at {:?} lies outside the scene",
                key.rect
            )));
        }

        let reachability = self.reachability(room);

        match key.platform {
            Some(index) => {
                if index == GROUND_INDEX {
                    return Err(CaveError::InvalidState(
                        "key is assigned to the ground platform".to_string(),
                    ));
                }
                let platform = room.platform(index).ok_or_else(|| {
                    CaveError::InvalidState(format!("key references missing platform {}", index))
                })?;
                if !reachability.contains(index) {
                    return Err(CaveError::InvalidState(format!(
                        "key platform {} is not reachable from the ground",
                        index
                    )));
                }
                if key.position() != self.key_placement.position_over(platform) {
                    return Err(CaveError::InvalidState(format!(
                        "key at {:?} is not centered over platform {}",
                        key.position(),
                        index
                    )));
                }
            }
            None => {
                if !reachability.elevated().is_empty() {
                    return Err(CaveError::InvalidState(
                        "key fell back although elevated platforms are reachable".to_string(),
                    ));
                }
                if key.position() != self.key_placement.fallback_position() {
                    return Err(CaveError::InvalidState(format!(
                        "fallback key at {:?} is misplaced",
                        key.position()
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Generator<Room> for RoomGenerator {
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CaveResult<Room> {
        let layout = self.layout.generate(rng)?;
        let reachability = Reachability::analyze(&layout.platforms, &self.envelope);
        let key = self
            .key_placement
            .place(&layout.platforms, &reachability, rng);

        let config = self.config();
        let room = Room {
            platforms: layout.platforms,
            enemies: layout.enemies,
            traps: layout.traps,
            key,
            door: Door::for_scene(config.scene_width, config.scene_height),
        };

        self.validate(&room)?;

        debug!(
            "room: {} platforms ({} reachable), {} enemies, {} traps, key on {:?}",
            room.platforms.len(),
            reachability.len(),
            room.enemies.len(),
            room.traps.len(),
            room.key.platform
        );

        Ok(room)
    }

    fn validate(&self, room: &Room) -> CaveResult<()> {
        self.layout
            .validate_geometry(&room.platforms, &room.enemies, &room.traps)?;
        self.validate_key(room)?;

        let config = self.config();
        if room.door != Door::for_scene(config.scene_width, config.scene_height) {
            return Err(CaveError::InvalidState(format!(
                "door at {:?} is not at the scene exit",
                room.door.rect
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomGenerator"
    }
}
