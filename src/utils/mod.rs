//! # Utilities Module
//!
//! Grid geometry and reachability helpers shared by the generators.

pub mod math;
pub mod pathfinding;

pub use self::math::*;
pub use self::pathfinding::*;
