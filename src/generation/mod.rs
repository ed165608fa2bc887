//! # Generation Module
//!
//! Procedural room generation: platform layout, jump reachability, key
//! placement and hazard scatter.
//!
//! A room is built in one pass. The layout generator places the ground and a
//! random set of non-overlapping elevated platforms, rolling for an enemy and
//! a trap on each platform as it is accepted. The reachability analyzer then
//! walks jump arcs out from the ground, and the key goes on one of the
//! platforms that walk reached.

pub mod encounters;
pub mod items;
pub mod layout;
pub mod reachability;
pub mod room;

pub use encounters::*;
pub use items::*;
pub use layout::*;
pub use reachability::*;
pub use room::*;

use crate::config::{
    DEFAULT_SCENE_HEIGHT, DEFAULT_SCENE_WIDTH, ENEMY_SIZE, KEY_HEIGHT, KEY_WIDTH, TRAP_WIDTH,
};
use crate::{CaveError, CaveResult, RandomSource, Room};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for room generation.
///
/// Every tunable the generator uses lives here; nothing is read from globals.
/// Construct a generator with [`RoomGenerator::new`] to have the values
/// checked before any room is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Scene width in pixels
    pub scene_width: i32,
    /// Scene height in pixels
    pub scene_height: i32,
    /// Height of the ground platform
    pub ground_thickness: i32,
    /// Minimum number of elevated platform placement attempts
    pub min_platforms: u32,
    /// Maximum number of elevated platform placement attempts
    pub max_platforms: u32,
    /// Narrowest elevated platform
    pub min_platform_width: i32,
    /// Widest elevated platform
    pub max_platform_width: i32,
    /// Height of every elevated platform
    pub platform_height: i32,
    /// Gap kept between elevated platforms and the left/right scene edges
    pub side_margin: i32,
    /// Band excluded at the top and bottom of the scene when placing platforms
    pub band_margin: i32,
    /// Largest horizontal center-to-center distance a jump can cover
    pub max_jump_distance: i32,
    /// A jump fails when the target's center lies more than this far below
    /// the source's center
    pub max_jump_up_delta: i32,
    /// A jump fails when the target's center lies more than this far above
    /// the source's center
    pub max_fall_down_delta: i32,
    /// Chance of an enemy on each elevated platform (0.0 to 1.0)
    pub enemy_probability: f64,
    /// Chance of a spike trap on each elevated platform (0.0 to 1.0)
    pub trap_probability: f64,
    /// Gap between the key's top edge and the surface it floats over
    pub key_hover: i32,
}

impl GenerationConfig {
    /// Creates the default configuration for a 1000×600 scene.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::GenerationConfig;
    ///
    /// let config = GenerationConfig::new();
    /// assert!(config.validate().is_ok());
    /// assert!(config.min_platforms <= config.max_platforms);
    /// ```
    pub fn new() -> Self {
        Self {
            scene_width: DEFAULT_SCENE_WIDTH,
            scene_height: DEFAULT_SCENE_HEIGHT,
            ground_thickness: 40,
            min_platforms: 5,
            max_platforms: 8,
            min_platform_width: 80,
            max_platform_width: 200,
            platform_height: 20,
            side_margin: 50,
            band_margin: 150,
            max_jump_distance: 120,
            max_jump_up_delta: 100,
            max_fall_down_delta: 150,
            enemy_probability: 0.4,
            trap_probability: 0.3,
            key_hover: 30,
        }
    }

    /// Default tuning for a scene of the given size.
    pub fn for_scene(scene_width: i32, scene_height: i32) -> Self {
        Self {
            scene_width,
            scene_height,
            ..Self::new()
        }
    }

    /// Creates a configuration for testing: default layout, no hazards.
    pub fn for_testing() -> Self {
        Self {
            enemy_probability: 0.0,
            trap_probability: 0.0,
            ..Self::new()
        }
    }

    /// Y coordinate of the ground's walkable surface.
    pub fn ground_top(&self) -> i32 {
        self.scene_height - self.ground_thickness
    }

    /// Checks that these parameters can only produce well-formed rooms.
    pub fn validate(&self) -> CaveResult<()> {
        if self.scene_width <= 0 || self.scene_height <= 0 {
            return Err(invalid(format!(
                "scene bounds must be positive, got {}x{}",
                self.scene_width, self.scene_height
            )));
        }
        if self.ground_thickness <= 0 || self.ground_thickness >= self.scene_height {
            return Err(invalid(format!(
                "ground thickness {} must be positive and below the scene height {}",
                self.ground_thickness, self.scene_height
            )));
        }
        if self.max_platforms > i32::MAX as u32 {
            return Err(invalid(format!(
                "max_platforms ({}) exceeds {}",
                self.max_platforms,
                i32::MAX
            )));
        }
        if self.min_platforms > self.max_platforms {
            return Err(invalid(format!(
                "min_platforms ({}) exceeds max_platforms ({})",
                self.min_platforms, self.max_platforms
            )));
        }
        if self.min_platform_width <= 0 || self.min_platform_width > self.max_platform_width {
            return Err(invalid(format!(
                "platform width range [{}, {}] is empty or non-positive",
                self.min_platform_width, self.max_platform_width
            )));
        }
        if self.platform_height <= 0 {
            return Err(invalid(format!(
                "platform height must be positive, got {}",
                self.platform_height
            )));
        }
        let span = i64::from(self.max_platform_width) + 2 * i64::from(self.side_margin);
        if self.side_margin < 0 || span > i64::from(self.scene_width) {
            return Err(invalid(format!(
                "a {}px platform with {}px side margins does not fit a {}px scene",
                self.max_platform_width, self.side_margin, self.scene_width
            )));
        }
        if self.band_margin < self.platform_height
            || self.band_margin > self.scene_height - self.band_margin
        {
            return Err(invalid(format!(
                "vertical band margin {} leaves no room for {}px platforms in a {}px scene",
                self.band_margin, self.platform_height, self.scene_height
            )));
        }
        if self.max_jump_distance < 0 || self.max_jump_up_delta < 0 || self.max_fall_down_delta < 0
        {
            return Err(invalid("jump envelope limits must be non-negative".to_string()));
        }
        for (name, probability) in [
            ("enemy_probability", self.enemy_probability),
            ("trap_probability", self.trap_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(invalid(format!(
                    "{} must be within [0, 1], got {}",
                    name, probability
                )));
            }
        }
        if self.min_platform_width < ENEMY_SIZE.max(TRAP_WIDTH) {
            return Err(invalid(format!(
                "platforms narrower than {}px cannot hold an enemy or trap",
                ENEMY_SIZE.max(TRAP_WIDTH)
            )));
        }
        if self.key_hover < 0 {
            return Err(invalid(format!(
                "key hover must be non-negative, got {}",
                self.key_hover
            )));
        }

        // Keys over platforms hang between the highest and lowest band rows;
        // the fallback key hangs over the ground.
        let height = i64::from(self.scene_height);
        let hover = i64::from(self.key_hover);
        let band = i64::from(self.band_margin);
        let key_rows = [
            ("fallback", i64::from(self.ground_top()) - hover),
            ("highest platform", band - hover),
            ("lowest platform", height - band - hover),
        ];
        for (spot, top) in key_rows {
            if top < 0 || top + i64::from(KEY_HEIGHT) > height {
                return Err(invalid(format!(
                    "{} key at y={} with hover {} lies outside the {}px scene",
                    spot, top, self.key_hover, self.scene_height
                )));
            }
        }
        if i64::from(self.scene_width / 2) + i64::from(KEY_WIDTH) > i64::from(self.scene_width) {
            return Err(invalid(format!(
                "a {}px scene is too narrow for the fallback key",
                self.scene_width
            )));
        }

        Ok(())
    }

    /// Parses a configuration from JSON. Missing fields take default values.
    pub fn from_json(json: &str) -> CaveResult<Self> {
        serde_json::from_str(json).map_err(CaveError::from)
    }

    /// Serializes this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> CaveResult<String> {
        serde_json::to_string_pretty(self).map_err(CaveError::from)
    }

    /// Loads a configuration from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> CaveResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: String) -> CaveError {
    CaveError::InvalidConfig(message)
}

/// Trait for procedural generators.
///
/// Generators are built from a validated configuration and draw all their
/// randomness from the source passed to [`Generator::generate`].
pub trait Generator<T> {
    /// Generates content using the provided random source.
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CaveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T) -> CaveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Generates a room for a scene of the given size with default tuning.
///
/// # Examples
///
/// ```
/// use cave_explorer::generate_room;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let first = generate_room(1000, 600, &mut StdRng::seed_from_u64(3)).unwrap();
/// let second = generate_room(1000, 600, &mut StdRng::seed_from_u64(3)).unwrap();
/// assert_eq!(first, second);
///
/// assert!(generate_room(0, 600, &mut StdRng::seed_from_u64(3)).is_err());
/// ```
pub fn generate_room<R: RandomSource + ?Sized>(
    scene_width: i32,
    scene_height: i32,
    rng: &mut R,
) -> CaveResult<Room> {
    RoomGenerator::new(GenerationConfig::for_scene(scene_width, scene_height))?.generate(rng)
}
