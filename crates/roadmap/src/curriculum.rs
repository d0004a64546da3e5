//! Curriculum tables.
//!
//! A specialized hand-authored curriculum exists for JavaScript; every
//! other skill gets the generic three-milestone template with the skill
//! name interpolated into titles and descriptions.

use skillpath_core::{
    Difficulty, Milestone, MilestoneId, Resource, ResourceId, ResourceType, SkillLevel,
};

/// Build the milestone sequence for a skill.
///
/// Dispatch is a case-insensitive substring match on "javascript".
/// `level` is accepted for the call contract but does not vary the output
/// yet; it is a seam for future personalization.
pub fn milestones_for(skill: &str, level: SkillLevel) -> Vec<Milestone> {
    let _ = level;
    if skill.to_lowercase().contains("javascript") {
        javascript_curriculum()
    } else {
        generic_curriculum(skill)
    }
}

fn javascript_curriculum() -> Vec<Milestone> {
    vec![
        Milestone {
            id: MilestoneId::new("1"),
            title: "JavaScript Fundamentals".to_owned(),
            description: "Master variables, functions, and basic syntax".to_owned(),
            estimated_hours: 20,
            difficulty: Difficulty::Easy,
            skills: strings(&["Variables", "Functions", "Loops", "Conditionals"]),
            resources: vec![
                Resource {
                    id: ResourceId::new("js-1"),
                    title: "JavaScript Basics Course".to_owned(),
                    resource_type: ResourceType::Course,
                    provider: "freeCodeCamp".to_owned(),
                    duration: "8 hours".to_owned(),
                    rating: 4.8,
                    url: "#".to_owned(),
                    free: true,
                    description: "Complete introduction to JavaScript fundamentals".to_owned(),
                },
                Resource {
                    id: ResourceId::new("js-2"),
                    title: "JavaScript Tutorial for Beginners".to_owned(),
                    resource_type: ResourceType::Video,
                    provider: "YouTube".to_owned(),
                    duration: "3 hours".to_owned(),
                    rating: 4.7,
                    url: "#".to_owned(),
                    free: true,
                    description: "Comprehensive video tutorial covering all basics".to_owned(),
                },
            ],
        },
        Milestone {
            id: MilestoneId::new("2"),
            title: "DOM Manipulation".to_owned(),
            description: "Learn to interact with web pages dynamically".to_owned(),
            estimated_hours: 15,
            difficulty: Difficulty::Medium,
            skills: strings(&["DOM API", "Event Handling", "Dynamic Content"]),
            resources: vec![Resource {
                id: ResourceId::new("dom-1"),
                title: "DOM Manipulation Masterclass".to_owned(),
                resource_type: ResourceType::Course,
                provider: "Udemy".to_owned(),
                duration: "6 hours".to_owned(),
                rating: 4.6,
                url: "#".to_owned(),
                free: false,
                description: "Deep dive into DOM manipulation techniques".to_owned(),
            }],
        },
        Milestone {
            id: MilestoneId::new("3"),
            title: "Build Your First Project".to_owned(),
            description: "Create an interactive web application".to_owned(),
            estimated_hours: 25,
            difficulty: Difficulty::Medium,
            skills: strings(&["Project Planning", "Code Organization", "Debugging"]),
            resources: vec![Resource {
                id: ResourceId::new("proj-1"),
                title: "Build a Todo App".to_owned(),
                resource_type: ResourceType::Project,
                provider: "The Odin Project".to_owned(),
                duration: "10 hours".to_owned(),
                rating: 4.9,
                url: "#".to_owned(),
                free: true,
                description: "Step-by-step project to build a functional todo application"
                    .to_owned(),
            }],
        },
    ]
}

fn generic_curriculum(skill: &str) -> Vec<Milestone> {
    vec![
        Milestone {
            id: MilestoneId::new("1"),
            title: format!("{skill} Fundamentals"),
            description: format!("Learn the core concepts and basics of {skill}"),
            estimated_hours: 20,
            difficulty: Difficulty::Easy,
            skills: strings(&["Basics", "Core Concepts", "Syntax"]),
            resources: vec![Resource {
                id: ResourceId::new("gen-1"),
                title: format!("{skill} Complete Course"),
                resource_type: ResourceType::Course,
                provider: "Coursera".to_owned(),
                duration: "8 hours".to_owned(),
                rating: 4.5,
                url: "#".to_owned(),
                free: false,
                description: format!("Comprehensive introduction to {skill}"),
            }],
        },
        Milestone {
            id: MilestoneId::new("2"),
            title: "Intermediate Concepts".to_owned(),
            description: format!("Dive deeper into advanced {skill} topics"),
            estimated_hours: 30,
            difficulty: Difficulty::Medium,
            skills: strings(&["Advanced Topics", "Best Practices", "Tools"]),
            resources: Vec::new(),
        },
        Milestone {
            id: MilestoneId::new("3"),
            title: "Real-World Application".to_owned(),
            description: format!("Apply your {skill} knowledge to practical projects"),
            estimated_hours: 40,
            difficulty: Difficulty::Hard,
            skills: strings(&["Project Work", "Problem Solving", "Portfolio"]),
            resources: Vec::new(),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_gets_the_specialized_curriculum() {
        let milestones = milestones_for("JavaScript", SkillLevel::Basic);
        assert_eq!(milestones.len(), 3);
        let ids: Vec<&str> = milestones.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        let total: u32 = milestones.iter().map(|m| m.estimated_hours).sum();
        assert_eq!(total, 60);
        assert_eq!(milestones[0].resources.len(), 2);
    }

    #[test]
    fn dispatch_matches_substrings_case_insensitively() {
        let milestones = milestones_for("Modern JAVASCRIPT frameworks", SkillLevel::Advanced);
        assert_eq!(milestones[0].title, "JavaScript Fundamentals");
    }

    #[test]
    fn other_skills_get_the_interpolated_template() {
        let milestones = milestones_for("Rust", SkillLevel::Basic);
        assert_eq!(milestones.len(), 3);
        assert_eq!(milestones[0].title, "Rust Fundamentals");
        let total: u32 = milestones.iter().map(|m| m.estimated_hours).sum();
        assert_eq!(total, 90);
        assert_eq!(milestones[0].difficulty, Difficulty::Easy);
        assert_eq!(milestones[2].difficulty, Difficulty::Hard);
        // Only the first milestone carries resources
        assert_eq!(milestones[0].resources.len(), 1);
        assert!(milestones[1].resources.is_empty());
        assert!(milestones[2].resources.is_empty());
    }

    #[test]
    fn level_does_not_vary_the_output() {
        let a = milestones_for("Rust", SkillLevel::CompleteBeginner);
        let b = milestones_for("Rust", SkillLevel::Advanced);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.title, y.title);
            assert_eq!(x.estimated_hours, y.estimated_hours);
        }
    }
}
