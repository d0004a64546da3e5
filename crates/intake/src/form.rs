//! The intake wizard state machine.

use skillpath_core::{LearningGoal, LearningStyle, SkillLevel, Timeframe};
use tracing::{debug, info};

/// Number of steps in the intake flow.
pub const TOTAL_STEPS: u8 = 4;

/// Steps of the intake flow, strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Target skill and current level
    Skill,
    /// Timeframe and weekly hours
    Commitment,
    /// Learning styles
    Style,
    /// Specific goals and motivation
    Objectives,
}

impl Step {
    /// 1-based step number, for display.
    pub fn number(&self) -> u8 {
        match self {
            Step::Skill => 1,
            Step::Commitment => 2,
            Step::Style => 3,
            Step::Objectives => 4,
        }
    }

    fn next(&self) -> Option<Step> {
        match self {
            Step::Skill => Some(Step::Commitment),
            Step::Commitment => Some(Step::Style),
            Step::Style => Some(Step::Objectives),
            Step::Objectives => None,
        }
    }

    fn prev(&self) -> Option<Step> {
        match self {
            Step::Skill => None,
            Step::Commitment => Some(Step::Skill),
            Step::Style => Some(Step::Commitment),
            Step::Objectives => Some(Step::Style),
        }
    }
}

/// Outcome of a [`GoalIntake::advance`] call.
///
/// Blocking is ordinary data, not an error: the presentation layer is
/// expected to disable the control whenever [`GoalIntake::can_advance`]
/// is false, so `Blocked` only shows up when it did not.
#[derive(Debug)]
pub enum Advance {
    /// The current step's required fields are missing; nothing changed.
    Blocked,
    /// Moved forward to the given step.
    Moved(Step),
    /// The final step was valid; the goal has been emitted.
    Submitted(LearningGoal),
}

/// The four-step goal intake wizard.
///
/// Holds a partially-filled goal and a set of selected learning styles.
/// Emits a [`LearningGoal`] exactly once, on a valid advance out of the
/// last step; afterwards every further advance is `Blocked`.
#[derive(Debug)]
pub struct GoalIntake {
    step: Step,
    skill: Option<String>,
    current_level: Option<SkillLevel>,
    timeframe: Option<Timeframe>,
    hours_per_week: Option<u8>,
    styles: Vec<LearningStyle>,
    specific_goals: Option<String>,
    motivation: Option<String>,
    submitted: bool,
}

impl Default for GoalIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalIntake {
    /// Start a fresh intake at step 1.
    pub fn new() -> Self {
        Self {
            step: Step::Skill,
            skill: None,
            current_level: None,
            timeframe: None,
            hours_per_week: None,
            styles: Vec::new(),
            specific_goals: None,
            motivation: None,
            submitted: false,
        }
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Wizard progress for the step indicator, in percent.
    pub fn progress_percent(&self) -> f32 {
        f32::from(self.step().number()) / f32::from(TOTAL_STEPS) * 100.0
    }

    /// Whether the goal has already been emitted.
    pub fn has_submitted(&self) -> bool {
        self.submitted
    }

    /// Set the target skill.
    pub fn set_skill(&mut self, skill: impl Into<String>) {
        self.skill = Some(skill.into());
    }

    /// Set the self-assessed current level.
    pub fn set_current_level(&mut self, level: SkillLevel) {
        self.current_level = Some(level);
    }

    /// Set the target timeframe.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = Some(timeframe);
    }

    /// Set the weekly hour commitment. Validity (1-40) is checked when
    /// advancing, not here, so the presentation layer can echo raw input.
    pub fn set_hours_per_week(&mut self, hours: u8) {
        self.hours_per_week = Some(hours);
    }

    /// Toggle a learning style: add if absent, remove if present.
    pub fn toggle_style(&mut self, style: LearningStyle) {
        if let Some(pos) = self.styles.iter().position(|s| *s == style) {
            self.styles.remove(pos);
        } else {
            self.styles.push(style);
        }
        debug!(style = %style, selected = self.styles.len(), "style toggled");
    }

    /// Selected styles, in selection order.
    pub fn selected_styles(&self) -> &[LearningStyle] {
        &self.styles
    }

    /// Set the specific-goals text.
    pub fn set_specific_goals(&mut self, goals: impl Into<String>) {
        self.specific_goals = Some(goals.into());
    }

    /// Set the optional motivation text.
    pub fn set_motivation(&mut self, motivation: impl Into<String>) {
        self.motivation = Some(motivation.into());
    }

    /// Whether the current step's required fields are filled in.
    pub fn is_step_valid(&self) -> bool {
        match self.step() {
            Step::Skill => {
                self.skill.as_deref().is_some_and(|s| !s.is_empty())
                    && self.current_level.is_some()
            }
            Step::Commitment => {
                self.timeframe.is_some()
                    && self.hours_per_week.is_some_and(|h| (1..=40).contains(&h))
            }
            Step::Style => !self.styles.is_empty(),
            Step::Objectives => self
                .specific_goals
                .as_deref()
                .is_some_and(|g| !g.is_empty()),
        }
    }

    /// Whether the forward control should be enabled.
    pub fn can_advance(&self) -> bool {
        !self.submitted && self.is_step_valid()
    }

    /// Move forward one step, or submit from the last step.
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }
        match self.step().next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => {
                self.submitted = true;
                let goal = self.finalize();
                info!(skill = %goal.skill, "learning goal submitted");
                Advance::Submitted(goal)
            }
        }
    }

    /// Move back one step; a no-op at step 1.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    // Reaching here means steps 1-3 already validated; the fallbacks only
    // cover fields submission does not require.
    fn finalize(&self) -> LearningGoal {
        LearningGoal {
            skill: self.skill.clone().unwrap_or_default(),
            current_level: self.current_level.unwrap_or_default(),
            timeframe: self.timeframe.unwrap_or_default(),
            hours_per_week: self.hours_per_week.filter(|h| *h > 0).unwrap_or(5),
            learning_style: self.styles.clone(),
            specific_goals: self.specific_goals.clone().unwrap_or_default(),
            motivation: self.motivation.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_through_step3() -> GoalIntake {
        let mut intake = GoalIntake::new();
        intake.set_skill("Rust");
        intake.set_current_level(SkillLevel::Basic);
        assert!(matches!(intake.advance(), Advance::Moved(Step::Commitment)));
        intake.set_timeframe(Timeframe::ThreeMonths);
        intake.set_hours_per_week(10);
        assert!(matches!(intake.advance(), Advance::Moved(Step::Style)));
        intake.toggle_style(LearningStyle::HandsOn);
        intake.toggle_style(LearningStyle::Video);
        assert!(matches!(intake.advance(), Advance::Moved(Step::Objectives)));
        intake
    }

    #[test]
    fn advance_is_blocked_until_step_fields_are_present() {
        let mut intake = GoalIntake::new();
        assert!(matches!(intake.advance(), Advance::Blocked));
        intake.set_skill("Rust");
        assert!(matches!(intake.advance(), Advance::Blocked));
        intake.set_current_level(SkillLevel::Basic);
        assert!(matches!(intake.advance(), Advance::Moved(Step::Commitment)));
    }

    #[test]
    fn hours_out_of_range_block_step_two() {
        let mut intake = GoalIntake::new();
        intake.set_skill("Rust");
        intake.set_current_level(SkillLevel::Basic);
        intake.advance();
        intake.set_timeframe(Timeframe::OneMonth);
        intake.set_hours_per_week(0);
        assert!(matches!(intake.advance(), Advance::Blocked));
        intake.set_hours_per_week(41);
        assert!(matches!(intake.advance(), Advance::Blocked));
        intake.set_hours_per_week(40);
        assert!(matches!(intake.advance(), Advance::Moved(Step::Style)));
    }

    #[test]
    fn step_three_requires_at_least_one_style() {
        let mut intake = filled_through_step3();
        intake.retreat();
        assert_eq!(intake.step(), Step::Style);
        intake.toggle_style(LearningStyle::HandsOn);
        intake.toggle_style(LearningStyle::Video);
        // Both toggled off again
        assert!(matches!(intake.advance(), Advance::Blocked));
    }

    #[test]
    fn retreat_at_step_one_is_a_noop() {
        let mut intake = GoalIntake::new();
        intake.retreat();
        assert_eq!(intake.step(), Step::Skill);
    }

    #[test]
    fn submission_carries_the_accumulated_styles() {
        let mut intake = filled_through_step3();
        intake.set_specific_goals("Ship a CLI tool");
        let Advance::Submitted(goal) = intake.advance() else {
            panic!("expected submission");
        };
        assert_eq!(
            goal.learning_style,
            vec![LearningStyle::HandsOn, LearningStyle::Video]
        );
        assert_eq!(goal.skill, "Rust");
        assert_eq!(goal.hours_per_week, 10);
        assert_eq!(goal.specific_goals, "Ship a CLI tool");
        assert_eq!(goal.motivation, "");
    }

    #[test]
    fn submission_happens_exactly_once() {
        let mut intake = filled_through_step3();
        intake.set_specific_goals("Ship a CLI tool");
        assert!(matches!(intake.advance(), Advance::Submitted(_)));
        assert!(intake.has_submitted());
        assert!(matches!(intake.advance(), Advance::Blocked));
    }

    #[test]
    fn progress_tracks_the_step_indicator() {
        let mut intake = GoalIntake::new();
        assert_eq!(intake.progress_percent(), 25.0);
        intake.set_skill("Rust");
        intake.set_current_level(SkillLevel::Advanced);
        intake.advance();
        assert_eq!(intake.progress_percent(), 50.0);
    }
}
