//! Milestone model - a discrete unit of a learning roadmap.

use crate::id::MilestoneId;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// A milestone on a learning roadmap.
///
/// The milestone list produced for a roadmap is immutable; completion is
/// tracked as an overlay (a set of completed ids) owned by the tracker,
/// not as a field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier within the roadmap
    pub id: MilestoneId,

    /// Milestone title
    pub title: String,

    /// What the learner will accomplish
    pub description: String,

    /// Estimated effort in hours, always positive
    pub estimated_hours: u32,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Skills covered, in teaching order
    pub skills: Vec<String>,

    /// Curated resources for this milestone
    pub resources: Vec<Resource>,
}

/// Milestone difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for newcomers
    Easy,
    /// Requires some grounding
    Medium,
    /// Demanding material
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}
