//! Dashboard derivations over a progress-statistics record.

use skillpath_core::{Achievement, ProgressStats};

/// How many achievements the dashboard shows.
pub const RECENT_ACHIEVEMENTS: usize = 4;

/// Read-only dashboard view over borrowed stats.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    stats: &'a ProgressStats,
}

impl<'a> Dashboard<'a> {
    /// View the given stats.
    pub fn new(stats: &'a ProgressStats) -> Self {
        Self { stats }
    }

    /// Hour-weighted overall completion, in percent.
    pub fn overall_progress(&self) -> f32 {
        percentage(self.stats.completed_hours, self.stats.total_hours)
    }

    /// Milestone-count completion, in percent.
    pub fn milestone_progress(&self) -> f32 {
        percentage(
            self.stats.milestones_completed as u32,
            self.stats.total_milestones as u32,
        )
    }

    /// Weekly goal progress, in percent. May exceed 100.
    pub fn weekly_progress(&self) -> f32 {
        percentage(self.stats.weekly_progress, self.stats.weekly_goal)
    }

    /// Weekly progress clamped to 100 for the progress bar. The clamp is
    /// display-only; [`Dashboard::weekly_goal_achieved`] uses the raw ratio.
    pub fn weekly_progress_display(&self) -> f32 {
        self.weekly_progress().min(100.0)
    }

    /// Fires whenever the unclamped weekly ratio reaches 100%.
    pub fn weekly_goal_achieved(&self) -> bool {
        self.weekly_progress() >= 100.0
    }

    /// The first achievements in their given order, truncated for display.
    pub fn recent_achievements(&self) -> &'a [Achievement] {
        let n = self.stats.achievements.len().min(RECENT_ACHIEVEMENTS);
        &self.stats.achievements[..n]
    }
}

/// Share of `done` in `total`, in percent; 0 when `total` is 0.
fn percentage(done: u32, total: u32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    done as f32 / total as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpath_core::{Achievement, AchievementId, Rarity};

    fn stats() -> ProgressStats {
        ProgressStats {
            total_hours: 120,
            completed_hours: 45,
            current_streak: 7,
            longest_streak: 21,
            milestones_completed: 3,
            total_milestones: 8,
            skill_level: "Intermediate".to_owned(),
            weekly_goal: 10,
            weekly_progress: 8,
            achievements: Vec::new(),
        }
    }

    fn achievement(id: &str) -> Achievement {
        Achievement {
            id: AchievementId::new(id),
            title: format!("Achievement {id}"),
            description: String::new(),
            icon: "star".to_owned(),
            unlocked_at: chrono::Utc::now(),
            rarity: Rarity::Common,
        }
    }

    #[test]
    fn percentages_match_the_sample_stats() {
        let stats = stats();
        let dash = Dashboard::new(&stats);
        assert!((dash.overall_progress() - 37.5).abs() < 1e-4);
        assert!((dash.milestone_progress() - 37.5).abs() < 1e-4);
        assert!((dash.weekly_progress() - 80.0).abs() < 1e-4);
        assert!(!dash.weekly_goal_achieved());
    }

    #[test]
    fn zero_totals_yield_zero_not_nan() {
        let mut stats = stats();
        stats.total_hours = 0;
        stats.total_milestones = 0;
        stats.weekly_goal = 0;
        let dash = Dashboard::new(&stats);
        assert_eq!(dash.overall_progress(), 0.0);
        assert_eq!(dash.milestone_progress(), 0.0);
        assert_eq!(dash.weekly_progress(), 0.0);
    }

    #[test]
    fn weekly_clamp_is_display_only() {
        let mut stats = stats();
        stats.weekly_progress = 14;
        let dash = Dashboard::new(&stats);
        assert!((dash.weekly_progress() - 140.0).abs() < 1e-4);
        assert_eq!(dash.weekly_progress_display(), 100.0);
        assert!(dash.weekly_goal_achieved());
    }

    #[test]
    fn goal_achieved_exactly_at_the_goal() {
        let mut stats = stats();
        stats.weekly_progress = 10;
        assert!(Dashboard::new(&stats).weekly_goal_achieved());
    }

    #[test]
    fn achievements_truncate_to_four_in_order() {
        let mut stats = stats();
        stats.achievements = (1..=6).map(|i| achievement(&i.to_string())).collect();
        let recent = Dashboard::new(&stats).recent_achievements();
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].id.as_str(), "1");
        assert_eq!(recent[3].id.as_str(), "4");
    }
}
