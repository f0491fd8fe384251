use crate::models::{CatalogItem, QueryTokens};

/// Calculate a match score (0-1) for a catalog item
///
/// Scoring formula:
/// score = min(matches / (skills + interests), 1.0)
///
/// where `matches` counts the query tokens that hit the item:
/// - a skill hits when it contains, or is contained by, any item tag
/// - an interest hits when it is contained by the category, the title
///   (case-insensitive) or any item tag
pub fn calculate_match_score(item: &CatalogItem, query: &QueryTokens) -> f64 {
    let total_terms = query.len();
    if total_terms == 0 {
        return 0.0;
    }

    let matches = count_matches(item, query);

    (matches as f64 / total_terms as f64).min(1.0)
}

/// Count query tokens that found at least one textual match in the item
pub fn count_matches(item: &CatalogItem, query: &QueryTokens) -> usize {
    let skill_hits = query
        .skills
        .iter()
        .filter(|skill| skill_matches(item, skill))
        .count();

    let title = item.title.to_lowercase();
    let interest_hits = query
        .interests
        .iter()
        .filter(|interest| interest_matches(item, &title, interest))
        .count();

    skill_hits + interest_hits
}

/// Bidirectional substring containment against the item's tags
///
/// Permissive on purpose: "react" hits "react native" and "reactjs" hits
/// "react", but single letters hit almost everything.
#[inline]
fn skill_matches(item: &CatalogItem, skill: &str) -> bool {
    item.skills
        .iter()
        .any(|tag| tag.contains(skill) || skill.contains(tag.as_str()))
}

/// `title_lower` is the item title, already lower-cased by the caller
#[inline]
fn interest_matches(item: &CatalogItem, title_lower: &str, interest: &str) -> bool {
    item.category.contains(interest)
        || title_lower.contains(interest)
        || item.skills.iter().any(|tag| tag.contains(interest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_stack() -> CatalogItem {
        CatalogItem::new(
            "int1",
            "Full Stack Web Developer",
            &["javascript", "react", "node.js", "mongodb"],
            "web development",
        )
    }

    fn designer() -> CatalogItem {
        CatalogItem::new("int8", "UI/UX Designer", &["figma", "design", "ui/ux", "prototyping"], "design")
    }

    #[test]
    fn test_all_skills_match() {
        let query = QueryTokens::new(Some("javascript,react"), None);
        assert_eq!(calculate_match_score(&full_stack(), &query), 1.0);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let item = CatalogItem::new("x", "Python Developer", &["python", "django"], "backend development");
        let query = QueryTokens::new(Some("javascript,react"), None);
        assert_eq!(calculate_match_score(&item, &query), 0.0);
    }

    #[test]
    fn test_skill_matching_is_bidirectional() {
        let mobile = CatalogItem::new("int6", "Mobile App Developer", &["react native"], "mobile development");

        // Token inside tag
        assert_eq!(count_matches(&mobile, &QueryTokens::new(Some("react"), None)), 1);
        // Tag inside token
        assert_eq!(count_matches(&full_stack(), &QueryTokens::new(Some("reactjs"), None)), 1);
    }

    #[test]
    fn test_interest_matches_category_title_and_tags() {
        let item = full_stack();

        assert_eq!(count_matches(&item, &QueryTokens::new(None, Some("web"))), 1);
        assert_eq!(count_matches(&item, &QueryTokens::new(None, Some("stack"))), 1);
        assert_eq!(count_matches(&item, &QueryTokens::new(None, Some("mongo"))), 1);
        assert_eq!(count_matches(&item, &QueryTokens::new(None, Some("cooking"))), 0);
    }

    #[test]
    fn test_interest_is_not_bidirectional() {
        // "design thinking" contains the tag "design" but interests only match one way
        let query = QueryTokens::new(None, Some("design thinking"));
        assert_eq!(count_matches(&designer(), &query), 0);
    }

    #[test]
    fn test_partial_score() {
        let query = QueryTokens::new(Some("react,python"), Some("design"));
        let score = calculate_match_score(&full_stack(), &query);
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(calculate_match_score(&full_stack(), &QueryTokens::default()), 0.0);
    }
}
