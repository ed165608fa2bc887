//! # Utilities Module
//!
//! Rectangle geometry and the random source abstraction shared by generation
//! and the game session.

pub mod math;
pub mod random;

pub use math::*;
pub use random::*;
