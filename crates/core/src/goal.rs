//! Learning goal model - the finalized output of the intake flow.

use serde::{Deserialize, Serialize};

/// A learning goal captured by the intake flow.
///
/// Created once, when the final intake step is submitted; immutable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningGoal {
    /// Target skill, free text ("JavaScript", "Rust", ...)
    pub skill: String,

    /// Self-assessed current level
    pub current_level: SkillLevel,

    /// Target timeframe for the goal
    pub timeframe: Timeframe,

    /// Weekly time commitment in hours (1-40)
    pub hours_per_week: u8,

    /// Selected learning styles, in selection order, never empty
    pub learning_style: Vec<LearningStyle>,

    /// Specific outcomes the learner wants
    pub specific_goals: String,

    /// What drives the learner (optional, may be empty)
    pub motivation: String,
}

/// Self-assessed skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    /// Never touched the skill
    CompleteBeginner,
    /// Seen it, never practiced
    SomeExposure,
    /// Basic working knowledge
    Basic,
    /// Comfortable with everyday use
    Intermediate,
    /// Deep experience
    Advanced,
}

impl SkillLevel {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::CompleteBeginner => "Complete Beginner",
            SkillLevel::SomeExposure => "Some Exposure",
            SkillLevel::Basic => "Basic Knowledge",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::CompleteBeginner
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete-beginner" => Ok(SkillLevel::CompleteBeginner),
            "some-exposure" => Ok(SkillLevel::SomeExposure),
            "basic" => Ok(SkillLevel::Basic),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(ParseEnumError {
                kind: "skill level",
                value: s.to_owned(),
            }),
        }
    }
}

/// Target timeframe for achieving a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    /// One month
    #[serde(rename = "1-month")]
    OneMonth,
    /// Three months
    #[serde(rename = "3-months")]
    ThreeMonths,
    /// Six months
    #[serde(rename = "6-months")]
    SixMonths,
    /// One year
    #[serde(rename = "1-year")]
    OneYear,
    /// No fixed deadline
    #[serde(rename = "flexible")]
    Flexible,
}

impl Timeframe {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
            Timeframe::OneYear => "1 Year",
            Timeframe::Flexible => "Flexible Timeline",
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Flexible
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Timeframe {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-month" => Ok(Timeframe::OneMonth),
            "3-months" => Ok(Timeframe::ThreeMonths),
            "6-months" => Ok(Timeframe::SixMonths),
            "1-year" => Ok(Timeframe::OneYear),
            "flexible" => Ok(Timeframe::Flexible),
            _ => Err(ParseEnumError {
                kind: "timeframe",
                value: s.to_owned(),
            }),
        }
    }
}

/// How the learner prefers to learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    /// Diagrams, charts, visual material
    Visual,
    /// Hands-on practice
    HandsOn,
    /// Reading and documentation
    Reading,
    /// Video tutorials
    Video,
    /// Interactive courses
    Interactive,
    /// Learning with a community
    Community,
}

impl LearningStyle {
    /// All styles, in presentation order.
    pub const ALL: [LearningStyle; 6] = [
        LearningStyle::Visual,
        LearningStyle::HandsOn,
        LearningStyle::Reading,
        LearningStyle::Video,
        LearningStyle::Interactive,
        LearningStyle::Community,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual Learning",
            LearningStyle::HandsOn => "Hands-on Practice",
            LearningStyle::Reading => "Reading & Documentation",
            LearningStyle::Video => "Video Tutorials",
            LearningStyle::Interactive => "Interactive Courses",
            LearningStyle::Community => "Community Learning",
        }
    }
}

impl std::fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LearningStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visual" => Ok(LearningStyle::Visual),
            "hands-on" => Ok(LearningStyle::HandsOn),
            "reading" => Ok(LearningStyle::Reading),
            "video" => Ok(LearningStyle::Video),
            "interactive" => Ok(LearningStyle::Interactive),
            "community" => Ok(LearningStyle::Community),
            _ => Err(ParseEnumError {
                kind: "learning style",
                value: s.to_owned(),
            }),
        }
    }
}

/// Error parsing an enum from its wire string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Which enum was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_through_wire_form() {
        let level: SkillLevel = "complete-beginner".parse().unwrap();
        assert_eq!(level, SkillLevel::CompleteBeginner);
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, "\"complete-beginner\"");
    }

    #[test]
    fn timeframe_uses_numeric_wire_names() {
        let tf: Timeframe = "3-months".parse().unwrap();
        assert_eq!(tf, Timeframe::ThreeMonths);
        assert_eq!(serde_json::to_string(&tf).unwrap(), "\"3-months\"");
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = "osmosis".parse::<LearningStyle>().unwrap_err();
        assert!(err.to_string().contains("osmosis"));
    }
}
