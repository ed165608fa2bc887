//! # Key Placement
//!
//! Puts the room's key on a platform the player can actually get to.

use crate::config::KEY_WIDTH;
use crate::{GenerationConfig, Key, Platform, RandomSource, Reachability};
use log::debug;

/// Chooses where the key goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPlacement {
    /// Gap between the key's top edge and the surface below it
    pub key_hover: i32,
    /// Scene width, for the fallback spot
    pub scene_width: i32,
    /// Ground surface Y, for the fallback spot
    pub ground_top: i32,
}

impl KeyPlacement {
    /// Extracts the placement parameters from a generation config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            key_hover: config.key_hover,
            scene_width: config.scene_width,
            ground_top: config.ground_top(),
        }
    }

    /// Where the key goes when no elevated platform is reachable: the
    /// horizontal middle of the scene, `key_hover` above the ground surface.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::{GenerationConfig, KeyPlacement};
    ///
    /// let placement = KeyPlacement::from_config(&GenerationConfig::default());
    /// assert_eq!(placement.fallback_position(), (500, 530));
    /// ```
    pub fn fallback_position(&self) -> (i32, i32) {
        (self.scene_width / 2, self.ground_top - self.key_hover)
    }

    /// Where the key goes when it sits over `platform`: centered
    /// horizontally, `key_hover` above the platform's top.
    pub fn position_over(&self, platform: &Platform) -> (i32, i32) {
        let rect = platform.rect;
        (
            rect.x + rect.width / 2 - KEY_WIDTH / 2,
            rect.top() - self.key_hover,
        )
    }

    /// Places the key over a uniformly chosen reachable elevated platform,
    /// or at the fallback spot when there is none.
    ///
    /// Candidates are taken in ascending index order, so a seeded source
    /// always picks the same platform. No random draw happens in the
    /// fallback case.
    pub fn place<R: RandomSource + ?Sized>(
        &self,
        platforms: &[Platform],
        reachability: &Reachability,
        rng: &mut R,
    ) -> Key {
        let candidates: Vec<usize> = reachability
            .elevated()
            .into_iter()
            .filter(|&index| index < platforms.len())
            .collect();

        if candidates.is_empty() {
            let (x, y) = self.fallback_position();
            debug!("no reachable elevated platform, key falls back to ({}, {})", x, y);
            return Key::new(x, y, None);
        }

        let pick = rng.next_int(0, candidates.len() as i32 - 1) as usize;
        let index = candidates[pick];
        let (x, y) = self.position_over(&platforms[index]);
        debug!(
            "key placed over platform {} of {} candidates at ({}, {})",
            index,
            candidates.len(),
            x,
            y
        );

        Key::new(x, y, Some(index))
    }
}

impl Default for KeyPlacement {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}
