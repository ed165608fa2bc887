//! # Jump Reachability
//!
//! Which platforms a player can get to starting from the ground.
//!
//! Reachability is judged on platform centers with a rectangular jump
//! envelope: a bounded horizontal distance, a bounded drop and a bounded
//! climb. The relation is directed, since a platform you can drop onto is not
//! necessarily one you can climb back from, so the reachable set is
//! everything connected to the ground by some chain of allowed jumps.

use crate::{GenerationConfig, Platform, GROUND_INDEX};
use log::trace;
use pathfinding::prelude::bfs;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

/// Limits on a single jump between platform centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpEnvelope {
    /// Largest horizontal center distance
    pub max_jump_distance: i32,
    /// Largest amount the target may sit below the source
    pub max_jump_up_delta: i32,
    /// Largest amount the target may sit above the source
    pub max_fall_down_delta: i32,
}

impl JumpEnvelope {
    /// Creates an envelope from explicit limits.
    pub fn new(max_jump_distance: i32, max_jump_up_delta: i32, max_fall_down_delta: i32) -> Self {
        Self {
            max_jump_distance,
            max_jump_up_delta,
            max_fall_down_delta,
        }
    }

    /// Extracts the envelope from a generation config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            config.max_jump_distance,
            config.max_jump_up_delta,
            config.max_fall_down_delta,
        )
    }

    /// Checks whether a jump from `from` can land on `to`.
    ///
    /// `dy` is how much higher the target's center is than the source's
    /// (screen Y grows downward). The jump fails when `dy` is below
    /// `-max_jump_up_delta` or above `max_fall_down_delta`; both bounds are
    /// inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::{JumpEnvelope, Platform, Rect};
    ///
    /// let envelope = JumpEnvelope::new(120, 100, 150);
    /// let a = Platform::new(Rect::new(150, 390, 100, 20)); // center (200, 400)
    /// let b = Platform::new(Rect::new(250, 410, 100, 20)); // center (300, 420)
    /// assert!(envelope.can_reach(&a, &b));
    /// ```
    pub fn can_reach(&self, from: &Platform, to: &Platform) -> bool {
        let (from_x, from_y) = from.rect.center();
        let (to_x, to_y) = to.rect.center();

        let dx = (to_x - from_x).abs();
        if dx > self.max_jump_distance {
            return false;
        }

        let dy = from_y - to_y;
        if dy < -self.max_jump_up_delta {
            return false;
        }
        if dy > self.max_fall_down_delta {
            return false;
        }

        true
    }

    /// Indices of every other platform reachable in one jump from `from`.
    pub fn successors(&self, platforms: &[Platform], from: usize) -> Vec<usize> {
        let Some(source) = platforms.get(from) else {
            return Vec::new();
        };

        platforms
            .iter()
            .enumerate()
            .filter(|&(index, target)| index != from && self.can_reach(source, target))
            .map(|(index, _)| index)
            .collect()
    }
}

impl Default for JumpEnvelope {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

/// Checks whether a single jump from `from` can land on `to`.
pub fn can_reach(from: &Platform, to: &Platform, envelope: &JumpEnvelope) -> bool {
    envelope.can_reach(from, to)
}

/// The set of platform indices reachable from the ground.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reachability {
    visited: BTreeSet<usize>,
}

impl Reachability {
    /// Walks jump arcs breadth-first out from the ground platform.
    ///
    /// A platform may sit in the frontier more than once; it is expanded
    /// only the first time it is popped. The ground is always in the result
    /// unless `platforms` is empty.
    pub fn analyze(platforms: &[Platform], envelope: &JumpEnvelope) -> Self {
        let mut visited = BTreeSet::new();
        if platforms.is_empty() {
            return Self { visited };
        }

        let mut frontier = VecDeque::from([GROUND_INDEX]);

        while let Some(current) = frontier.pop_front() {
            if !visited.insert(current) {
                continue;
            }

            for (candidate, platform) in platforms.iter().enumerate() {
                if visited.contains(&candidate) {
                    continue;
                }
                if envelope.can_reach(&platforms[current], platform) {
                    frontier.push_back(candidate);
                }
            }
        }

        trace!("reachable platforms: {:?} of {}", visited, platforms.len());

        Self { visited }
    }

    /// Whether the platform at `index` is reachable.
    pub fn contains(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Number of reachable platforms, ground included.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Whether nothing at all is reachable.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Reachable platform indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited.iter().copied()
    }

    /// Reachable elevated platforms, ascending. These are the platforms a
    /// key may be placed on.
    pub fn elevated(&self) -> Vec<usize> {
        self.indices().filter(|&index| index != GROUND_INDEX).collect()
    }

    /// Finds a shortest chain of jumps from the ground to `target`.
    ///
    /// The route starts with the ground and ends with `target`. Returns
    /// `None` when `target` is not reachable.
    pub fn route_to(
        &self,
        platforms: &[Platform],
        envelope: &JumpEnvelope,
        target: usize,
    ) -> Option<Vec<usize>> {
        if !self.contains(target) {
            return None;
        }

        bfs(
            &GROUND_INDEX,
            |&index| envelope.successors(platforms, index),
            |&index| index == target,
        )
    }
}
