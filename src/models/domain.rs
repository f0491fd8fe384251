use serde::{Deserialize, Serialize};
use crate::core::tokens::parse_tokens;

/// Internship eligible for recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    /// Lowercase skill tags, in declaration order
    pub skills: Vec<String>,
    pub category: String,
}

impl CatalogItem {
    pub fn new(id: &str, title: &str, skills: &[&str], category: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
        }
    }

    /// Trim and lower-case tags and category so scoring can compare directly
    pub fn normalized(mut self) -> Self {
        self.id = self.id.trim().to_string();
        self.title = self.title.trim().to_string();
        self.skills = self
            .skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self.category = self.category.trim().to_lowercase();
        self
    }
}

/// Normalized query derived from the requester's comma-separated fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryTokens {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl QueryTokens {
    pub fn new(skills: Option<&str>, interests: Option<&str>) -> Self {
        Self {
            skills: parse_tokens(skills),
            interests: parse_tokens(interests),
        }
    }

    /// Total number of query tokens across both fields
    pub fn len(&self) -> usize {
        self.skills.len() + self.interests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.interests.is_empty()
    }
}

/// Scored recommendation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub internship_id: String,
    pub title: String,
    pub match_score: f64,
}

/// Read-only listing filter over the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub category: Option<String>,
    /// Comma-separated skill tags; an item matches if it carries any of them
    #[serde(default)]
    pub skills: Option<String>,
}
