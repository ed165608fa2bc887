//! # Platform Layout Generation
//!
//! Places the ground and a random set of elevated platforms.
//!
//! The generator draws a number of placement attempts, then for each attempt
//! draws a candidate platform inside the scene's placement band. A candidate
//! that overlaps anything already placed is thrown away for good: there is
//! no retry and no nudging, so a layout can end up with fewer platforms than
//! attempts, or with none at all. Every accepted platform immediately rolls
//! for hazards.

use crate::{
    CaveError, CaveResult, EncounterScatter, Enemy, GenerationConfig, Generator, Platform,
    RandomSource, Rect, Trap, GROUND_INDEX,
};
use log::{debug, trace};

/// The platforms of a room together with the hazards scattered on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLayout {
    /// Ground first, then accepted elevated platforms in placement order
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub traps: Vec<Trap>,
    /// Number of elevated placements attempted
    pub attempts: u32,
}

impl PlatformLayout {
    /// Number of candidates that were discarded for overlapping.
    pub fn discarded(&self) -> u32 {
        self.attempts
            .saturating_sub(self.platforms.len().saturating_sub(1) as u32)
    }
}

/// Generator for a room's platform layout.
#[derive(Debug, Clone)]
pub struct PlatformLayoutGenerator {
    config: GenerationConfig,
    scatter: EncounterScatter,
}

impl PlatformLayoutGenerator {
    /// Creates a layout generator, rejecting configurations that could
    /// produce malformed layouts.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::{GenerationConfig, PlatformLayoutGenerator};
    ///
    /// assert!(PlatformLayoutGenerator::new(GenerationConfig::default()).is_ok());
    ///
    /// let inverted = GenerationConfig {
    ///     min_platforms: 8,
    ///     max_platforms: 5,
    ///     ..GenerationConfig::default()
    /// };
    /// assert!(PlatformLayoutGenerator::new(inverted).is_err());
    /// ```
    pub fn new(config: GenerationConfig) -> CaveResult<Self> {
        config.validate()?;
        let scatter = EncounterScatter::from_config(&config);
        Ok(Self { config, scatter })
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The ground platform for this generator's scene.
    pub fn ground(&self) -> Platform {
        Platform::ground(
            self.config.scene_width,
            self.config.scene_height,
            self.config.ground_thickness,
        )
    }

    /// Draws one candidate platform rectangle.
    ///
    /// Width is drawn first, then the left edge so that the platform keeps
    /// its side margins, then the top edge within the vertical band.
    fn generate_candidate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Rect {
        let config = &self.config;
        let width = rng.next_int(config.min_platform_width, config.max_platform_width);
        let x = rng.next_int(
            config.side_margin,
            config.scene_width - width - config.side_margin,
        );
        let y = rng.next_int(config.band_margin, config.scene_height - config.band_margin);

        Rect::new(x, y, width, config.platform_height)
    }

    /// Checks a candidate against the platforms placed so far.
    fn overlaps_existing(candidate: &Rect, placed: &[Platform]) -> bool {
        placed
            .iter()
            .any(|platform| candidate.overlaps(&platform.rect))
    }

    /// Checks that an elevated platform respects the placement band.
    fn within_placement_band(&self, rect: &Rect) -> bool {
        let config = &self.config;
        rect.width >= config.min_platform_width
            && rect.width <= config.max_platform_width
            && rect.height == config.platform_height
            && rect.left() >= config.side_margin
            && rect.right() <= config.scene_width - config.side_margin
            && rect.top() >= config.band_margin
            && rect.top() <= config.scene_height - config.band_margin
    }

    /// Checks ground placement, the placement band, pairwise non-overlap
    /// and that every hazard sits on the elevated platform it names.
    pub fn validate_geometry(
        &self,
        platforms: &[Platform],
        enemies: &[Enemy],
        traps: &[Trap],
    ) -> CaveResult<()> {
        let ground = platforms
            .get(GROUND_INDEX)
            .ok_or_else(|| CaveError::InvalidState("no ground platform".to_string()))?;
        if *ground != self.ground() {
            return Err(CaveError::InvalidState(format!(
                "first platform {:?} is not the ground",
                ground.rect
            )));
        }

        if let Some(degenerate) = platforms.iter().find(|platform| !platform.rect.is_valid()) {
            return Err(CaveError::InvalidState(format!(
                "platform {:?} has no area",
                degenerate.rect
            )));
        }

        for (index, platform) in platforms.iter().enumerate().skip(GROUND_INDEX + 1) {
            if !self.within_placement_band(&platform.rect) {
                return Err(CaveError::InvalidState(format!(
                    "platform {} at {:?} lies outside the placement band",
                    index, platform.rect
                )));
            }
            if Self::overlaps_existing(&platform.rect, &platforms[..index]) {
                return Err(CaveError::InvalidState(format!(
                    "platform {} overlaps an earlier platform",
                    index
                )));
            }
        }

        for enemy in enemies {
            let platform = elevated_platform(platforms, enemy.platform)?;
            if enemy.rect.left() < platform.rect.left()
                || enemy.rect.right() > platform.rect.right()
                || enemy.rect.bottom() != platform.top()
            {
                return Err(CaveError::InvalidState(format!(
                    "enemy at {:?} is not standing on platform {}",
                    enemy.rect, enemy.platform
                )));
            }
        }

        for trap in traps {
            let platform = elevated_platform(platforms, trap.platform)?;
            if trap.rect.left() < platform.rect.left()
                || trap.rect.right() > platform.rect.right()
                || trap.rect.bottom() != platform.top()
            {
                return Err(CaveError::InvalidState(format!(
                    "trap at {:?} is not resting on platform {}",
                    trap.rect, trap.platform
                )));
            }
        }

        Ok(())
    }
}

impl Generator<PlatformLayout> for PlatformLayoutGenerator {
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CaveResult<PlatformLayout> {
        let mut platforms = vec![self.ground()];
        let mut enemies = Vec::new();
        let mut traps = Vec::new();

        let attempts = rng.next_int(
            self.config.min_platforms as i32,
            self.config.max_platforms as i32,
        ) as u32;

        for attempt in 0..attempts {
            let candidate = self.generate_candidate(rng);

            if Self::overlaps_existing(&candidate, &platforms) {
                trace!("attempt {}: discarded overlapping {:?}", attempt, candidate);
                continue;
            }

            let index = platforms.len();
            let platform = Platform::new(candidate);
            platforms.push(platform);

            let encounter = self.scatter.scatter(index, &platform, rng);
            enemies.extend(encounter.enemy);
            traps.extend(encounter.trap);
        }

        let layout = PlatformLayout {
            platforms,
            enemies,
            traps,
            attempts,
        };

        debug!(
            "layout: {} of {} platforms placed, {} enemies, {} traps",
            layout.platforms.len() - 1,
            attempts,
            layout.enemies.len(),
            layout.traps.len()
        );

        Ok(layout)
    }

    fn validate(&self, layout: &PlatformLayout) -> CaveResult<()> {
        self.validate_geometry(&layout.platforms, &layout.enemies, &layout.traps)?;

        let elevated = layout.platforms.len() - 1;
        if elevated > layout.attempts as usize {
            return Err(CaveError::InvalidState(format!(
                "{} elevated platforms from only {} attempts",
                elevated, layout.attempts
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "PlatformLayoutGenerator"
    }
}

/// Looks up a hazard's host platform, which must be elevated.
fn elevated_platform(platforms: &[Platform], index: usize) -> CaveResult<&Platform> {
    if index == GROUND_INDEX {
        return Err(CaveError::InvalidState(
            "hazards are only scattered on elevated platforms".to_string(),
        ));
    }
    platforms.get(index).ok_or_else(|| {
        CaveError::InvalidState(format!("hazard references missing platform {}", index))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_rng;

    fn generator() -> PlatformLayoutGenerator {
        PlatformLayoutGenerator::new(GenerationConfig::default()).unwrap()
    }

    #[test]
    fn test_layout_generator_creation() {
        let generator = generator();
        assert_eq!(generator.generator_type(), "PlatformLayoutGenerator");
        assert_eq!(generator.ground().rect, Rect::new(0, 560, 1000, 40));
        assert_eq!(generator.config(), &GenerationConfig::default());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GenerationConfig {
            scene_height: 0,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            PlatformLayoutGenerator::new(config),
            Err(CaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_candidates_stay_in_band() {
        let generator = generator();
        let mut rng = create_rng(12345);

        for _ in 0..500 {
            let candidate = generator.generate_candidate(&mut rng);
            assert!(generator.within_placement_band(&candidate), "{:?}", candidate);
        }
    }

    #[test]
    fn test_generated_layouts_validate() {
        let generator = generator();

        for seed in 0..200 {
            let layout = generator.generate(&mut create_rng(seed)).unwrap();
            assert_eq!(layout.platforms[GROUND_INDEX], generator.ground());
            assert!((5..=8).contains(&layout.attempts));
            assert!(layout.platforms.len() - 1 <= layout.attempts as usize);
            assert!(generator.validate(&layout).is_ok(), "seed {}", seed);
        }
    }

    #[test]
    fn test_overlapping_candidates_are_discarded() {
        // A single-row band and wide platforms force collisions.
        let config = GenerationConfig {
            min_platforms: 8,
            max_platforms: 8,
            min_platform_width: 400,
            max_platform_width: 400,
            band_margin: 300,
            ..GenerationConfig::default()
        };
        let generator = PlatformLayoutGenerator::new(config).unwrap();

        for seed in 0..50 {
            let layout = generator.generate(&mut create_rng(seed)).unwrap();
            assert_eq!(layout.attempts, 8);
            // At most two 400px platforms fit side by side in the 900px span.
            assert!(layout.platforms.len() - 1 <= 2);
            assert!(layout.discarded() >= 6);
            assert!(generator.validate(&layout).is_ok());
        }
    }

    #[test]
    fn test_zero_attempts_gives_ground_only() {
        let config = GenerationConfig {
            min_platforms: 0,
            max_platforms: 0,
            ..GenerationConfig::default()
        };
        let generator = PlatformLayoutGenerator::new(config).unwrap();
        let layout = generator.generate(&mut create_rng(1)).unwrap();

        assert_eq!(layout.platforms, vec![generator.ground()]);
        assert!(layout.enemies.is_empty());
        assert!(layout.traps.is_empty());
        assert_eq!(layout.discarded(), 0);
    }

    #[test]
    fn test_hazards_only_on_elevated_platforms() {
        let config = GenerationConfig {
            enemy_probability: 1.0,
            trap_probability: 1.0,
            ..GenerationConfig::default()
        };
        let generator = PlatformLayoutGenerator::new(config).unwrap();

        for seed in 0..50 {
            let layout = generator.generate(&mut create_rng(seed)).unwrap();
            let elevated = layout.platforms.len() - 1;
            assert_eq!(layout.enemies.len(), elevated);
            assert_eq!(layout.traps.len(), elevated);
            assert!(layout.enemies.iter().all(|e| e.platform != GROUND_INDEX));
            assert!(generator.validate(&layout).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let generator = generator();
        let layout = PlatformLayout {
            platforms: vec![
                generator.ground(),
                Platform::new(Rect::new(100, 200, 100, 20)),
                Platform::new(Rect::new(150, 210, 100, 20)),
            ],
            enemies: Vec::new(),
            traps: Vec::new(),
            attempts: 2,
        };
        assert!(matches!(
            generator.validate(&layout),
            Err(CaveError::InvalidState(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_ground() {
        let generator = generator();
        let layout = PlatformLayout {
            platforms: vec![Platform::new(Rect::new(100, 200, 100, 20))],
            enemies: Vec::new(),
            traps: Vec::new(),
            attempts: 1,
        };
        assert!(generator.validate(&layout).is_err());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let generator = generator();
        let first = generator.generate(&mut create_rng(777)).unwrap();
        let second = generator.generate(&mut create_rng(777)).unwrap();
        assert_eq!(first, second);
    }
}
