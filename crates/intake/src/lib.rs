//! Goal intake flow.
//!
//! A four-step wizard that collects a learner's goal, time commitment,
//! learning styles and specific objectives, then emits a finalized
//! [`skillpath_core::LearningGoal`] exactly once.

mod form;

pub use form::{Advance, GoalIntake, Step, TOTAL_STEPS};
