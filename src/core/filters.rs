use crate::core::tokens::{normalize_token, parse_tokens};
use crate::models::{CatalogItem, CatalogFilter};

/// List catalog items matching the filter, in catalog order
///
/// An empty filter returns the whole catalog.
pub fn filter_catalog<'a>(catalog: &'a [CatalogItem], filter: &CatalogFilter) -> Vec<&'a CatalogItem> {
    let category = filter
        .category
        .as_deref()
        .map(normalize_token)
        .filter(|c| !c.is_empty());
    let skills = parse_tokens(filter.skills.as_deref());

    catalog
        .iter()
        .filter(|item| matches_category(item, category.as_deref()))
        .filter(|item| matches_any_skill(item, &skills))
        .collect()
}

/// Exact category match; `None` accepts every item
#[inline]
pub fn matches_category(item: &CatalogItem, category: Option<&str>) -> bool {
    match category {
        Some(category) => item.category == category,
        None => true,
    }
}

/// True when the item carries at least one of the tags; no tags accepts every item
#[inline]
pub fn matches_any_skill(item: &CatalogItem, skills: &[String]) -> bool {
    skills.is_empty() || item.skills.iter().any(|tag| skills.contains(tag))
}
