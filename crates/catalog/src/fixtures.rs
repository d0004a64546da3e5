//! Fixture data for demo sessions.
//!
//! Every session starts from these hard-coded records; there is no
//! persistence. The fixture stats are seeded independently of any live
//! roadmap tracker, matching the product's demo behavior.

use chrono::TimeZone;
use skillpath_core::{Achievement, AchievementId, ProgressStats, Rarity, Time};

/// Sample statistics shown on the dashboard before any real tracking.
pub fn sample_progress_stats() -> ProgressStats {
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
        achievements: vec![
            Achievement {
                id: AchievementId::new("1"),
                title: "First Steps".to_owned(),
                description: "Completed your first learning session".to_owned(),
                icon: "star".to_owned(),
                unlocked_at: day(2024, 1, 15),
                rarity: Rarity::Common,
            },
            Achievement {
                id: AchievementId::new("2"),
                title: "Week Warrior".to_owned(),
                description: "Maintained a 7-day learning streak".to_owned(),
                icon: "flame".to_owned(),
                unlocked_at: day(2024, 1, 22),
                rarity: Rarity::Rare,
            },
            Achievement {
                id: AchievementId::new("3"),
                title: "Milestone Master".to_owned(),
                description: "Completed 3 learning milestones".to_owned(),
                icon: "trophy".to_owned(),
                unlocked_at: day(2024, 1, 28),
                rarity: Rarity::Epic,
            },
        ],
    }
}

/// Skill suggestions offered on the first intake step.
pub fn suggested_skills() -> Vec<String> {
    [
        "JavaScript",
        "Python",
        "React",
        "Node.js",
        "TypeScript",
        "Machine Learning",
        "Data Science",
        "UI/UX Design",
        "Digital Marketing",
        "Product Management",
        "DevOps",
        "Cybersecurity",
        "Mobile Development",
        "Game Development",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn day(year: i32, month: u32, day: u32) -> Time {
    chrono::Utc
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stats_are_internally_consistent() {
        let stats = sample_progress_stats();
        assert!(stats.completed_hours <= stats.total_hours);
        assert!(stats.milestones_completed <= stats.total_milestones);
        assert!(stats.current_streak <= stats.longest_streak);
        assert_eq!(stats.achievements.len(), 3);
        // Unlocked in chronological order
        assert!(stats.achievements[0].unlocked_at < stats.achievements[1].unlocked_at);
        assert!(stats.achievements[1].unlocked_at < stats.achievements[2].unlocked_at);
    }

    #[test]
    fn suggested_skills_cover_the_intake_list() {
        let skills = suggested_skills();
        assert_eq!(skills.len(), 14);
        assert!(skills.contains(&"JavaScript".to_owned()));
    }
}
