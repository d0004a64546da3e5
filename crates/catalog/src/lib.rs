//! Skill catalog and fixture data.
//!
//! The browseable skill list is injected configuration: construct a
//! [`SkillCatalog`] from any skill set, or use [`SkillCatalog::builtin`]
//! for the stock one. Fixtures live behind constructors so tests can
//! substitute their own.

mod fixtures;
mod skills;

pub use fixtures::{sample_progress_stats, suggested_skills};
pub use skills::SkillCatalog;
