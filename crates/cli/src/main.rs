//! SkillPath CLI - demo harness for the learning-path core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillpath_catalog::{sample_progress_stats, SkillCatalog};
use skillpath_core::{LearningStyle, SkillLevel, Timeframe};
use skillpath_intake::{Advance, GoalIntake};
use skillpath_progress::{streak_detail, Dashboard, StarBreakdown, StreakBand};
use skillpath_roadmap::{RoadmapProvider, RoadmapTracker, SimulatedProvider};
use std::time::Duration;
use tracing::Level;

#[derive(Parser)]
#[command(name = "skillpath")]
#[command(about = "Learning-path planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the intake flow and generate a roadmap
    Plan {
        /// Target skill
        skill: String,
        /// Current level (complete-beginner, some-exposure, basic, intermediate, advanced)
        #[arg(long, default_value = "basic")]
        level: SkillLevelArg,
        /// Target timeframe (1-month, 3-months, 6-months, 1-year, flexible)
        #[arg(long, default_value = "flexible")]
        timeframe: TimeframeArg,
        /// Hours per week (1-40)
        #[arg(long, default_value = "5")]
        hours: u8,
        /// Learning styles, repeatable (visual, hands-on, reading, video, interactive, community)
        #[arg(long = "style", required = true)]
        styles: Vec<StyleArg>,
        /// Specific goals
        #[arg(long)]
        goals: String,
        /// Motivation
        #[arg(long)]
        motivation: Option<String>,
        /// Skip the simulated generation delay
        #[arg(long)]
        fast: bool,
    },
    /// Browse the skill catalog
    Skills {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Search term
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show the progress dashboard from sample data
    Dashboard,
}

// Thin parse wrappers so clap error messages name the bad value.
#[derive(Clone)]
struct SkillLevelArg(SkillLevel);
#[derive(Clone)]
struct TimeframeArg(Timeframe);
#[derive(Clone)]
struct StyleArg(LearningStyle);

impl std::str::FromStr for SkillLevelArg {
    type Err = skillpath_core::ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SkillLevelArg)
    }
}

impl std::str::FromStr for TimeframeArg {
    type Err = skillpath_core::ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TimeframeArg)
    }
}

impl std::str::FromStr for StyleArg {
    type Err = skillpath_core::ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StyleArg)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            skill,
            level,
            timeframe,
            hours,
            styles,
            goals,
            motivation,
            fast,
        } => {
            let mut intake = GoalIntake::new();
            intake.set_skill(skill);
            intake.set_current_level(level.0);
            step(&mut intake)?;
            intake.set_timeframe(timeframe.0);
            intake.set_hours_per_week(hours);
            step(&mut intake)?;
            for style in styles {
                intake.toggle_style(style.0);
            }
            step(&mut intake)?;
            intake.set_specific_goals(goals);
            if let Some(motivation) = motivation {
                intake.set_motivation(motivation);
            }
            let Advance::Submitted(goal) = intake.advance() else {
                anyhow::bail!("step {} is incomplete", intake.step().number());
            };

            let provider = if fast {
                SimulatedProvider::with_delay(Duration::ZERO)
            } else {
                SimulatedProvider::new()
            };
            println!("Generating your {} roadmap...", goal.skill);
            let milestones = provider.generate(&goal.skill, goal.current_level).await?;
            let tracker = RoadmapTracker::new(milestones);

            println!();
            println!(
                "Your {} Learning Roadmap ({} level, {} timeline)",
                goal.skill,
                goal.current_level.label(),
                goal.timeframe.label()
            );
            println!(
                "{} milestones, {} hours total",
                tracker.milestones().len(),
                tracker.total_hours()
            );
            for milestone in tracker.milestones() {
                println!();
                println!(
                    "  [{}] {} ({}, {}h)",
                    milestone.id, milestone.title, milestone.difficulty, milestone.estimated_hours
                );
                println!("      {}", milestone.description);
                println!("      Skills: {}", milestone.skills.join(", "));
                for resource in &milestone.resources {
                    let stars = StarBreakdown::of(resource.rating);
                    println!(
                        "      - {} | {} | {} | {:.1} ({} stars) | {}",
                        resource.title,
                        resource.provider,
                        resource.duration,
                        resource.rating,
                        stars.full,
                        if resource.free { "free" } else { "paid" },
                    );
                }
            }
            if let Some(next) = tracker.next_milestone() {
                println!();
                println!("Start here: {}", next.title);
            }
        }
        Commands::Skills { category, search } => {
            let catalog = SkillCatalog::builtin();
            let results = catalog.search(&search, category.as_deref());

            println!("Skills ({})", results.len());
            for skill in results {
                println!(
                    "  {} | {} | {} | {} | {}%",
                    skill.name, skill.category, skill.difficulty, skill.estimated_time,
                    skill.popularity,
                );
            }
            println!();
            println!("Categories: {}", catalog.categories().join(", "));
        }
        Commands::Dashboard => {
            let stats = sample_progress_stats();
            let dash = Dashboard::new(&stats);

            println!("Learning Progress ({})", stats.skill_level);
            println!(
                "  Overall:    {:>5.1}%  ({} / {} hours)",
                dash.overall_progress(),
                stats.completed_hours,
                stats.total_hours
            );
            println!(
                "  Milestones: {:>5.1}%  ({} / {})",
                dash.milestone_progress(),
                stats.milestones_completed,
                stats.total_milestones
            );
            println!(
                "  This week:  {:>5.1}%  ({} / {} hours){}",
                dash.weekly_progress_display(),
                stats.weekly_progress,
                stats.weekly_goal,
                if dash.weekly_goal_achieved() {
                    "  - weekly goal achieved!"
                } else {
                    ""
                }
            );
            println!();
            let band = StreakBand::of(stats.current_streak);
            println!("  Streak: {} days (best {})", stats.current_streak, stats.longest_streak);
            println!("  {}", band.message());
            println!("  {}", streak_detail(stats.current_streak));
            println!();
            println!("Recent achievements:");
            for achievement in dash.recent_achievements() {
                println!(
                    "  [{}] {} - {} ({})",
                    achievement.rarity,
                    achievement.title,
                    achievement.description,
                    achievement.unlocked_at.format("%Y-%m-%d"),
                );
            }
        }
    }

    Ok(())
}

fn step(intake: &mut GoalIntake) -> Result<()> {
    match intake.advance() {
        Advance::Blocked => anyhow::bail!("step {} is incomplete", intake.step().number()),
        _ => Ok(()),
    }
}
