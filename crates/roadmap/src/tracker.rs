//! Completion tracking over an immutable milestone list.

use skillpath_core::{Milestone, MilestoneId};
use std::collections::HashSet;
use tracing::debug;

/// Tracks which milestones of a roadmap the learner has completed.
///
/// The milestone list is fixed at construction; completion lives in a
/// separate set of ids, so there is a single source of truth for it.
#[derive(Debug)]
pub struct RoadmapTracker {
    milestones: Vec<Milestone>,
    completed: HashSet<MilestoneId>,
}

impl RoadmapTracker {
    /// Wrap a generated milestone sequence with empty completion state.
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self {
            milestones,
            completed: HashSet::new(),
        }
    }

    /// The ordered milestone sequence.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Flip completion for a milestone: add if absent, remove if present.
    /// Returns the new completion state of the id.
    pub fn toggle(&mut self, id: &MilestoneId) -> bool {
        let now_completed = if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.clone());
            true
        };
        debug!(milestone = %id, completed = now_completed, "milestone toggled");
        now_completed
    }

    /// Whether a milestone is completed.
    pub fn is_completed(&self, id: &MilestoneId) -> bool {
        self.completed.contains(id)
    }

    /// Number of completed milestones.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Sum of estimated hours across all milestones.
    pub fn total_hours(&self) -> u32 {
        self.milestones.iter().map(|m| m.estimated_hours).sum()
    }

    /// Sum of estimated hours across completed milestones.
    pub fn completed_hours(&self) -> u32 {
        self.milestones
            .iter()
            .filter(|m| self.completed.contains(&m.id))
            .map(|m| m.estimated_hours)
            .sum()
    }

    /// Hour-weighted completion percentage; 0 for an empty roadmap.
    pub fn progress_percentage(&self) -> f32 {
        let total = self.total_hours();
        if total == 0 {
            return 0.0;
        }
        self.completed_hours() as f32 / total as f32 * 100.0
    }

    /// The next actionable milestone: the first incomplete milestone whose
    /// predecessor (if any) is completed. Models linear prerequisites with
    /// no skipping ahead.
    pub fn next_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().enumerate().find_map(|(i, m)| {
            if self.completed.contains(&m.id) {
                return None;
            }
            let unlocked = i == 0 || self.completed.contains(&self.milestones[i - 1].id);
            unlocked.then_some(m)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpath_core::{Difficulty, SkillLevel};

    fn tracker() -> RoadmapTracker {
        RoadmapTracker::new(crate::curriculum::milestones_for("Rust", SkillLevel::Basic))
    }

    #[test]
    fn toggle_twice_restores_the_original_state() {
        let mut t = tracker();
        let id = t.milestones()[1].id.clone();
        assert!(t.toggle(&id));
        assert!(t.is_completed(&id));
        assert!(!t.toggle(&id));
        assert!(!t.is_completed(&id));
        assert_eq!(t.completed_count(), 0);
    }

    #[test]
    fn hours_are_derived_from_the_completed_set() {
        let mut t = tracker();
        assert_eq!(t.total_hours(), 90);
        assert_eq!(t.completed_hours(), 0);
        let first = t.milestones()[0].id.clone();
        t.toggle(&first);
        assert_eq!(t.completed_hours(), 20);
        let pct = t.progress_percentage();
        assert!((pct - 100.0 * 20.0 / 90.0).abs() < 1e-4);
    }

    #[test]
    fn empty_roadmap_reports_zero_percent() {
        let t = RoadmapTracker::new(Vec::new());
        assert_eq!(t.progress_percentage(), 0.0);
        assert!(t.next_milestone().is_none());
    }

    #[test]
    fn next_milestone_follows_linear_prerequisites() {
        let mut t = tracker();
        let ids: Vec<_> = t.milestones().iter().map(|m| m.id.clone()).collect();

        // Nothing done yet: the first milestone is next.
        assert_eq!(t.next_milestone().map(|m| &m.id), Some(&ids[0]));

        // Completing the second out of order does not unlock the third.
        t.toggle(&ids[1]);
        assert_eq!(t.next_milestone().map(|m| &m.id), Some(&ids[0]));

        t.toggle(&ids[0]);
        assert_eq!(t.next_milestone().map(|m| &m.id), Some(&ids[2]));

        t.toggle(&ids[2]);
        assert!(t.next_milestone().is_none());
    }

    #[test]
    fn generic_template_escalates_difficulty() {
        let t = tracker();
        let difficulties: Vec<_> = t.milestones().iter().map(|m| m.difficulty).collect();
        assert_eq!(
            difficulties,
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }
}
