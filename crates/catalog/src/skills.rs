//! The browseable skill catalog.

use skillpath_core::{Skill, SkillId, SkillTier};

/// A catalog of skills the platform can plan roadmaps for.
///
/// The skill list is supplied at construction so tests and deployments
/// can swap it out; nothing here is a module-level global.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    /// Catalog over an injected skill list.
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// The stock ten-skill catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_skills())
    }

    /// All skills, in catalog order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up a skill by id.
    pub fn get(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| &s.id == id)
    }

    /// Distinct categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for skill in &self.skills {
            if !seen.contains(&skill.category.as_str()) {
                seen.push(skill.category.as_str());
            }
        }
        seen
    }

    /// Filter by free-text term and optional category.
    ///
    /// The term matches name or description, case-insensitively; the
    /// category must match exactly when given. Both filters are
    /// conjunctive, and an empty term matches everything.
    pub fn search(&self, term: &str, category: Option<&str>) -> Vec<&Skill> {
        let term = term.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| {
                let matches_term = term.is_empty()
                    || skill.name.to_lowercase().contains(&term)
                    || skill.description.to_lowercase().contains(&term);
                let matches_category = category.map_or(true, |c| skill.category == c);
                matches_term && matches_category
            })
            .collect()
    }
}

fn skill(
    id: &str,
    name: &str,
    category: &str,
    difficulty: SkillTier,
    estimated_time: &str,
    popularity: u8,
    description: &str,
) -> Skill {
    Skill {
        id: SkillId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        difficulty,
        estimated_time: estimated_time.to_owned(),
        popularity,
        description: description.to_owned(),
    }
}

fn builtin_skills() -> Vec<Skill> {
    vec![
        skill(
            "javascript",
            "JavaScript",
            "Programming",
            SkillTier::Beginner,
            "3-6 months",
            95,
            "The language of the web - essential for modern development",
        ),
        skill(
            "python",
            "Python",
            "Programming",
            SkillTier::Beginner,
            "2-4 months",
            92,
            "Versatile language perfect for beginners and data science",
        ),
        skill(
            "react",
            "React",
            "Frontend",
            SkillTier::Intermediate,
            "4-8 months",
            88,
            "Build modern, interactive user interfaces",
        ),
        skill(
            "ui-ux-design",
            "UI/UX Design",
            "Design",
            SkillTier::Beginner,
            "3-6 months",
            85,
            "Create beautiful, user-friendly digital experiences",
        ),
        skill(
            "data-science",
            "Data Science",
            "Analytics",
            SkillTier::Intermediate,
            "6-12 months",
            82,
            "Extract insights from data to drive business decisions",
        ),
        skill(
            "mobile-development",
            "Mobile Development",
            "Development",
            SkillTier::Intermediate,
            "4-8 months",
            78,
            "Build native and cross-platform mobile applications",
        ),
        skill(
            "cybersecurity",
            "Cybersecurity",
            "Security",
            SkillTier::Advanced,
            "8-12 months",
            75,
            "Protect systems and data from digital threats",
        ),
        skill(
            "game-development",
            "Game Development",
            "Development",
            SkillTier::Intermediate,
            "6-12 months",
            72,
            "Create engaging games and interactive experiences",
        ),
        skill(
            "digital-marketing",
            "Digital Marketing",
            "Marketing",
            SkillTier::Beginner,
            "2-4 months",
            80,
            "Grow businesses through online marketing strategies",
        ),
        skill(
            "product-management",
            "Product Management",
            "Business",
            SkillTier::Intermediate,
            "4-6 months",
            70,
            "Lead product development from concept to launch",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_ten_skills() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.skills().len(), 10);
        assert!(catalog.get(&SkillId::new("javascript")).is_some());
    }

    #[test]
    fn categories_keep_first_seen_order_without_duplicates() {
        let catalog = SkillCatalog::builtin();
        let categories = catalog.categories();
        assert_eq!(
            categories,
            [
                "Programming",
                "Frontend",
                "Design",
                "Analytics",
                "Development",
                "Security",
                "Marketing",
                "Business"
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let catalog = SkillCatalog::builtin();
        let by_name = catalog.search("PYTHON", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Python");

        // "web" appears only in descriptions
        let by_description = catalog.search("web", None);
        assert!(by_description.iter().any(|s| s.name == "JavaScript"));
    }

    #[test]
    fn category_filter_is_conjunctive_with_the_term() {
        let catalog = SkillCatalog::builtin();
        let development = catalog.search("", Some("Development"));
        assert_eq!(development.len(), 2);

        let games_in_dev = catalog.search("games", Some("Development"));
        assert_eq!(games_in_dev.len(), 1);
        assert_eq!(games_in_dev[0].name, "Game Development");

        let games_in_marketing = catalog.search("games", Some("Marketing"));
        assert!(games_in_marketing.is_empty());
    }

    #[test]
    fn empty_filters_return_the_whole_catalog() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.search("", None).len(), 10);
    }
}
