//! Streak banding and motivational messages.

use serde::{Deserialize, Serialize};

/// Band a current streak falls into. Lower bounds are inclusive:
/// 0, 1-6, 7-29, 30-99, 100+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreakBand {
    /// No streak yet
    NotStarted,
    /// 1-6 days
    GreatStart,
    /// 7-29 days
    OnFire,
    /// 30-99 days
    Incredible,
    /// 100 days or more
    Legendary,
}

impl StreakBand {
    /// Band for a streak length in days.
    pub fn of(streak: u32) -> Self {
        match streak {
            0 => StreakBand::NotStarted,
            1..=6 => StreakBand::GreatStart,
            7..=29 => StreakBand::OnFire,
            30..=99 => StreakBand::Incredible,
            _ => StreakBand::Legendary,
        }
    }

    /// Headline message for the band.
    pub fn message(&self) -> &'static str {
        match self {
            StreakBand::NotStarted => "Start your learning streak today!",
            StreakBand::GreatStart => "Great start! Keep it going!",
            StreakBand::OnFire => "You're on fire! 🔥",
            StreakBand::Incredible => "Incredible dedication! 🚀",
            StreakBand::Legendary => "Legendary learner! 👑",
        }
    }
}

/// Secondary detail line under the streak headline.
pub fn streak_detail(streak: u32) -> String {
    if streak > 0 {
        format!("You've been learning consistently for {streak} days!")
    } else {
        "Start learning today to begin your streak!".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_have_inclusive_lower_bounds() {
        assert_eq!(StreakBand::of(0), StreakBand::NotStarted);
        assert_eq!(StreakBand::of(1), StreakBand::GreatStart);
        assert_eq!(StreakBand::of(6), StreakBand::GreatStart);
        assert_eq!(StreakBand::of(7), StreakBand::OnFire);
        assert_eq!(StreakBand::of(29), StreakBand::OnFire);
        assert_eq!(StreakBand::of(30), StreakBand::Incredible);
        assert_eq!(StreakBand::of(99), StreakBand::Incredible);
        assert_eq!(StreakBand::of(100), StreakBand::Legendary);
        assert_eq!(StreakBand::of(1000), StreakBand::Legendary);
    }

    #[test]
    fn detail_line_reflects_activity() {
        assert!(streak_detail(7).contains("7 days"));
        assert!(streak_detail(0).contains("Start learning today"));
    }
}
