//! Progress aggregation.
//!
//! Pure, read-only derivations over a [`skillpath_core::ProgressStats`]
//! record: percentages for the dashboard, streak banding, display styles
//! for closed enums, and star-rating breakdowns. Nothing here mutates
//! state.

mod dashboard;
mod display;
mod streak;

pub use dashboard::{Dashboard, RECENT_ACHIEVEMENTS};
pub use display::{
    difficulty_style, rarity_style, resource_type_icon, resource_type_style, BadgeStyle,
    StarBreakdown,
};
pub use streak::{streak_detail, StreakBand};
