//! # Encounter Generation
//!
//! Hazard scatter for elevated platforms. Each platform independently rolls
//! for a patrolling enemy and for a spike trap, so it may end up with both,
//! either or neither.

use crate::config::{ENEMY_SIZE, TRAP_WIDTH};
use crate::{Enemy, GenerationConfig, Platform, RandomSource, Trap};
use log::trace;

/// Hazards rolled for a single platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encounter {
    pub enemy: Option<Enemy>,
    pub trap: Option<Trap>,
}

/// Per-platform hazard rolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterScatter {
    /// Chance of an enemy per platform
    pub enemy_probability: f64,
    /// Chance of a trap per platform
    pub trap_probability: f64,
}

impl EncounterScatter {
    /// Creates a scatter policy with the given probabilities.
    pub fn new(enemy_probability: f64, trap_probability: f64) -> Self {
        Self {
            enemy_probability,
            trap_probability,
        }
    }

    /// Extracts the scatter probabilities from a generation config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.enemy_probability, config.trap_probability)
    }

    /// Rolls hazards for the platform at `index`.
    ///
    /// Draw order is fixed: the enemy roll, the enemy's offset if it spawns,
    /// the trap roll, then the trap's offset if it spawns. Offsets keep the
    /// hazard fully on the platform. The platform must be at least as wide
    /// as the hazards it may receive.
    pub fn scatter<R: RandomSource + ?Sized>(
        &self,
        index: usize,
        platform: &Platform,
        rng: &mut R,
    ) -> Encounter {
        let rect = platform.rect;
        let mut encounter = Encounter::default();

        if rng.chance(self.enemy_probability) {
            let x = rect.x + rng.next_int(0, rect.width - ENEMY_SIZE);
            encounter.enemy = Some(Enemy::on_platform(index, platform, x));
        }

        if rng.chance(self.trap_probability) {
            let x = rect.x + rng.next_int(0, rect.width - TRAP_WIDTH);
            encounter.trap = Some(Trap::on_platform(index, platform, x));
        }

        trace!(
            "platform {}: enemy={} trap={}",
            index,
            encounter.enemy.is_some(),
            encounter.trap.is_some()
        );

        encounter
    }
}

impl Default for EncounterScatter {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}
