//! Catalog skill model - an entry in the browseable skill catalog.

use crate::id::SkillId;
use serde::{Deserialize, Serialize};

/// A skill the platform can build a roadmap for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier ("javascript", "data-science", ...)
    pub id: SkillId,

    /// Display name
    pub name: String,

    /// Category ("Programming", "Design", ...)
    pub category: String,

    /// Entry difficulty tier
    pub difficulty: SkillTier,

    /// Free-text estimate of time to proficiency ("3-6 months")
    pub estimated_time: String,

    /// Popularity score, 0-100
    pub popularity: u8,

    /// One-line pitch
    pub description: String,
}

/// Entry difficulty tier of a catalog skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTier {
    /// No prerequisites
    Beginner,
    /// Assumes general background
    Intermediate,
    /// Assumes substantial experience
    Advanced,
}

impl std::fmt::Display for SkillTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkillTier::Beginner => "Beginner",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}
