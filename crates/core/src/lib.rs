//! SkillPath core data models.
//!
//! This crate defines the fundamental data structures that power the
//! learning-path platform: goals, roadmaps, resources and progress.

#![warn(missing_docs)]

// Core identities
mod id;

// Goal intake
mod goal;

// Roadmap
mod milestone;
mod resource;

// Progress and achievements
mod progress;

// Skill catalog
mod skill;

// Re-exports
pub use id::*;

// Goal
pub use goal::{LearningGoal, LearningStyle, ParseEnumError, SkillLevel, Timeframe};

// Roadmap
pub use milestone::{Difficulty, Milestone};
pub use resource::{Resource, ResourceType};

// Progress
pub use progress::{Achievement, ProgressStats, Rarity};

// Catalog
pub use skill::{Skill, SkillTier};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
