//! Progress statistics and achievements.

use crate::id::AchievementId;
use crate::Time;
use serde::{Deserialize, Serialize};

/// Aggregate learning statistics for one learner and skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Total estimated hours across the roadmap
    pub total_hours: u32,

    /// Hours of completed milestones
    pub completed_hours: u32,

    /// Consecutive days of recorded activity, current run
    pub current_streak: u32,

    /// Longest streak ever recorded
    pub longest_streak: u32,

    /// Milestones completed so far
    pub milestones_completed: usize,

    /// Milestones on the roadmap
    pub total_milestones: usize,

    /// Display name of the learner's current level
    pub skill_level: String,

    /// Weekly hour goal
    pub weekly_goal: u32,

    /// Hours logged this week
    pub weekly_progress: u32,

    /// Unlocked achievements, most relevant first
    pub achievements: Vec<Achievement>,
}

/// An unlocked achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier
    pub id: AchievementId,

    /// Achievement title
    pub title: String,

    /// What was accomplished
    pub description: String,

    /// Icon reference for the presentation layer
    pub icon: String,

    /// When it was unlocked
    pub unlocked_at: Time,

    /// Rarity tier
    pub rarity: Rarity,
}

/// Achievement rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Everyday accomplishment
    Common,
    /// Takes some persistence
    Rare,
    /// A real landmark
    Epic,
    /// Very few learners get here
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        f.write_str(s)
    }
}
