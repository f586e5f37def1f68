//! Birthday categories and their display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BdaysError;

/// Relationship category of a birthday record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Family,
    #[default]
    Friends,
    Colleagues,
    Classmates,
    Relatives,
    ChildhoodFriends,
    Neighbors,
    Mentors,
    Clients,
    Partners,
    Others,
}

/// Display metadata for a category.
struct CategoryInfo {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
}

const fn info(key: &'static str, label: &'static str, icon: &'static str) -> CategoryInfo {
    CategoryInfo { key, label, icon }
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Family,
        Category::Friends,
        Category::Colleagues,
        Category::Classmates,
        Category::Relatives,
        Category::ChildhoodFriends,
        Category::Neighbors,
        Category::Mentors,
        Category::Clients,
        Category::Partners,
        Category::Others,
    ];

    fn info(&self) -> CategoryInfo {
        match self {
            Category::Family => info("family", "Family", "👨‍👩‍👦"),
            Category::Friends => info("friends", "Friends", "🤝"),
            Category::Colleagues => info("colleagues", "Colleagues", "💼"),
            Category::Classmates => info("classmates", "Classmates", "🎓"),
            Category::Relatives => info("relatives", "Relatives", "👨‍👩‍👦"),
            Category::ChildhoodFriends => info("childhood_friends", "Childhood Friends", "🧸"),
            Category::Neighbors => info("neighbors", "Neighbors", "🏠"),
            Category::Mentors => info("mentors", "Mentors", "🎯"),
            Category::Clients => info("clients", "Clients", "🤝"),
            Category::Partners => info("partners", "Partners", "🤝"),
            Category::Others => info("others", "Others", "✨"),
        }
    }

    /// Key used by the API and on the command line (e.g. `childhood_friends`).
    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = BdaysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| BdaysError::UnknownCategory(s.to_string()))
    }
}

/// Category selection for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "👥",
            CategoryFilter::Only(c) => c.icon(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = BdaysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("Childhood Friends".parse::<Category>().unwrap(), Category::ChildhoodFriends);
        assert_eq!("childhood-friends".parse::<Category>().unwrap(), Category::ChildhoodFriends);
        assert!(matches!(
            "enemies".parse::<Category>(),
            Err(BdaysError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_labels_and_icons() {
        assert_eq!(Category::ChildhoodFriends.label(), "Childhood Friends");
        assert_eq!(Category::Colleagues.icon(), "💼");
        assert_eq!(Category::default(), Category::Friends);
    }

    #[test]
    fn test_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.label(), "All Categories");
        assert_eq!(CategoryFilter::All.icon(), "👥");

        let family: CategoryFilter = "family".parse().unwrap();
        assert!(family.matches(Category::Family));
        assert!(!family.matches(Category::Friends));
        assert!(CategoryFilter::All.matches(Category::Others));
    }
}
