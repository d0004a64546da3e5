//! Resource model - external learning material attached to a milestone.

use crate::id::ResourceId;
use serde::{Deserialize, Serialize};

/// An external learning resource.
///
/// Fully determined at roadmap-generation time; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier
    pub id: ResourceId,

    /// Resource title
    pub title: String,

    /// Kind of material
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Who publishes it ("freeCodeCamp", "Udemy", ...)
    pub provider: String,

    /// Free-text duration ("8 hours", "3 hours")
    pub duration: String,

    /// Community rating in [0, 5]
    pub rating: f32,

    /// Link to the material
    pub url: String,

    /// Whether the resource is free of charge
    pub free: bool,

    /// Short description
    pub description: String,
}

/// Kind of learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Structured course
    Course,
    /// Video tutorial
    Video,
    /// Written article
    Article,
    /// Exercises and drills
    Practice,
    /// Guided project
    Project,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResourceType::Course => "Course",
            ResourceType::Video => "Video",
            ResourceType::Article => "Article",
            ResourceType::Practice => "Practice",
            ResourceType::Project => "Project",
        };
        f.write_str(s)
    }
}
