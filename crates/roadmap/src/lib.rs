//! Roadmap synthesis and progress tracking.
//!
//! Maps a (skill, level) pair to an ordered milestone sequence through a
//! provider trait, and overlays user completion state on the immutable
//! milestone list.

mod curriculum;
mod provider;
mod tracker;

pub use curriculum::milestones_for;
pub use provider::{RoadmapError, RoadmapProvider, SimulatedProvider, GENERATION_DELAY};
pub use tracker::RoadmapTracker;
