use crate::models::CatalogItem;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog contains no internships")]
    Empty,

    #[error("Duplicate internship id in catalog: {0}")]
    DuplicateId(String),
}

/// Shared read-only catalog
pub type Catalog = Arc<[CatalogItem]>;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    internships: Vec<CatalogItem>,
}

/// Built-in internship table, in ranking tie-break order
pub fn default_catalog() -> Catalog {
    vec![
        CatalogItem::new("int1", "Full Stack Web Developer", &["javascript", "react", "node.js", "mongodb"], "web development"),
        CatalogItem::new("int2", "Python Developer", &["python", "django", "flask", "sql"], "backend development"),
        CatalogItem::new("int3", "Data Science Intern", &["python", "machine learning", "pandas", "numpy"], "data science"),
        CatalogItem::new("int4", "React Frontend Developer", &["react", "javascript", "css", "html"], "web development"),
        CatalogItem::new("int5", "AI/ML Engineer", &["python", "machine learning", "tensorflow", "ai"], "artificial intelligence"),
        CatalogItem::new("int6", "Mobile App Developer", &["react native", "javascript", "mobile development"], "mobile development"),
        CatalogItem::new("int7", "DevOps Engineer", &["docker", "kubernetes", "aws", "linux"], "devops"),
        CatalogItem::new("int8", "UI/UX Designer", &["figma", "design", "ui/ux", "prototyping"], "design"),
    ]
    .into()
}

/// Load a catalog from a TOML file of `[[internships]]` tables
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = parse_catalog(&raw)?;
    tracing::info!("Loaded {} internships from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse and normalize catalog TOML
pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(raw)?;

    if file.internships.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(file.internships.len());
    for item in file.internships {
        let item = item.normalized();
        if !seen.insert(item.id.clone()) {
            return Err(CatalogError::DuplicateId(item.id));
        }
        items.push(item);
    }

    Ok(items.into())
}
