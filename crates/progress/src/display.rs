//! Display-style mappings for closed enums.
//!
//! Every mapping is a total function over its enum, so there is no
//! fallback arm to drift out of date when variants change.

use skillpath_core::{Difficulty, Rarity, ResourceType};

/// Badge styling tokens handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Background token
    pub background: &'static str,
    /// Foreground token
    pub foreground: &'static str,
    /// Border token, where the design calls for one
    pub border: Option<&'static str>,
}

/// Styling for an achievement rarity badge.
pub fn rarity_style(rarity: Rarity) -> BadgeStyle {
    match rarity {
        Rarity::Common => BadgeStyle {
            background: "gray-100",
            foreground: "gray-800",
            border: Some("gray-300"),
        },
        Rarity::Rare => BadgeStyle {
            background: "blue-100",
            foreground: "blue-800",
            border: Some("blue-300"),
        },
        Rarity::Epic => BadgeStyle {
            background: "purple-100",
            foreground: "purple-800",
            border: Some("purple-300"),
        },
        Rarity::Legendary => BadgeStyle {
            background: "yellow-100",
            foreground: "yellow-800",
            border: Some("yellow-300"),
        },
    }
}

/// Styling for a milestone difficulty badge.
pub fn difficulty_style(difficulty: Difficulty) -> BadgeStyle {
    match difficulty {
        Difficulty::Easy => BadgeStyle {
            background: "green-100",
            foreground: "green-800",
            border: None,
        },
        Difficulty::Medium => BadgeStyle {
            background: "yellow-100",
            foreground: "yellow-800",
            border: None,
        },
        Difficulty::Hard => BadgeStyle {
            background: "red-100",
            foreground: "red-800",
            border: None,
        },
    }
}

/// Styling for a resource-type badge.
pub fn resource_type_style(resource_type: ResourceType) -> BadgeStyle {
    match resource_type {
        ResourceType::Course => BadgeStyle {
            background: "blue-100",
            foreground: "blue-800",
            border: None,
        },
        ResourceType::Video => BadgeStyle {
            background: "red-100",
            foreground: "red-800",
            border: None,
        },
        ResourceType::Article => BadgeStyle {
            background: "green-100",
            foreground: "green-800",
            border: None,
        },
        ResourceType::Practice => BadgeStyle {
            background: "purple-100",
            foreground: "purple-800",
            border: None,
        },
        ResourceType::Project => BadgeStyle {
            background: "orange-100",
            foreground: "orange-800",
            border: None,
        },
    }
}

/// Icon reference for a resource type.
pub fn resource_type_icon(resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Course => "book-open",
        ResourceType::Video => "video",
        ResourceType::Article => "file-text",
        ResourceType::Practice => "code",
        ResourceType::Project => "folder",
    }
}

/// Star counts for rendering a rating in [0, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    /// Fully filled stars
    pub full: u32,
    /// Whether a half star follows them
    pub half: bool,
    /// Trailing empty stars
    pub empty: u32,
}

impl StarBreakdown {
    /// Break a rating into full, half and empty stars.
    pub fn of(rating: f32) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        let full = rating.floor() as u32;
        let half = rating.fract() != 0.0;
        let empty = 5u32.saturating_sub(rating.ceil() as u32);
        Self { full, half, empty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_styles_are_distinct() {
        let styles: Vec<_> = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
            .into_iter()
            .map(rarity_style)
            .collect();
        assert_eq!(styles[1].background, "blue-100");
        assert!(styles.iter().all(|s| s.border.is_some()));
    }

    #[test]
    fn star_breakdown_handles_halves() {
        let stars = StarBreakdown::of(4.5);
        assert_eq!(stars.full, 4);
        assert!(stars.half);
        assert_eq!(stars.empty, 0);
    }

    #[test]
    fn star_breakdown_handles_whole_ratings() {
        let stars = StarBreakdown::of(3.0);
        assert_eq!(stars.full, 3);
        assert!(!stars.half);
        assert_eq!(stars.empty, 2);

        let perfect = StarBreakdown::of(5.0);
        assert_eq!(perfect.full, 5);
        assert!(!perfect.half);
        assert_eq!(perfect.empty, 0);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        let stars = StarBreakdown::of(7.2);
        assert_eq!(stars.full, 5);
        assert_eq!(stars.empty, 0);
        let none = StarBreakdown::of(-1.0);
        assert_eq!(none.full, 0);
        assert_eq!(none.empty, 5);
    }
}
