use crate::core::{catalog::{default_catalog, Catalog}, scoring::calculate_match_score};
use crate::models::{QueryTokens, Recommendation};
use thiserror::Error;

/// Upper bound on the number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Errors that can occur when recommending
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("Please provide skills or interests")]
    MissingQueryInput,
}

/// Ranks catalog items against a requester's skills and interests
///
/// # Pipeline Stages
/// 1. Score every catalog item
/// 2. Drop items with no match
/// 3. Stable sort by descending score
/// 4. Truncate to the result limit
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    limit: usize,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            limit: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// Lower the result limit; values above `MAX_RECOMMENDATIONS` are capped
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_RECOMMENDATIONS);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Recommend internships for raw comma-separated fields
    pub fn recommend(
        &self,
        skills: Option<&str>,
        interests: Option<&str>,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.recommend_tokens(&QueryTokens::new(skills, interests))
    }

    /// Recommend internships for already-normalized tokens
    ///
    /// # Returns
    /// At most `limit` recommendations with a non-zero score, best first.
    /// Equal scores keep catalog order.
    pub fn recommend_tokens(&self, query: &QueryTokens) -> Result<Vec<Recommendation>, RecommendError> {
        if query.is_empty() {
            return Err(RecommendError::MissingQueryInput);
        }

        let mut recommendations: Vec<Recommendation> = self
            .catalog
            .iter()
            .filter_map(|item| {
                let match_score = calculate_match_score(item, query);

                if match_score > 0.0 {
                    Some(Recommendation {
                        internship_id: item.id.clone(),
                        title: item.title.clone(),
                        match_score,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, so ties stay in catalog order
        recommendations.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        recommendations.truncate(self.limit);

        Ok(recommendations)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}
