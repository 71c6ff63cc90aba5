use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static GLOBAL_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load().unwrap_or_else(|e| {
        log::error!("failed to load project catalog: {e}");
        Catalog::default()
    })
});

#[derive(Embed)]
#[folder = "projects"]
struct ProjectAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("project not found: {0}")]
    NotFound(String),
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
    #[error("couldn't parse project file {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Icon name in the site's icon set, rendered as `icon-<name>`.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// Which overlay a project card opens when it has no external website.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    #[default]
    Detail,
    Gallery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    pub full_description: String,
    pub problem: String,
    pub solution: String,
    pub target_market: String,
    pub unique_value: String,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub links: Option<Vec<ProjectLink>>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub presentation: Presentation,
}

impl ProjectRecord {
    /// Image shown inside the summary card.
    pub fn cover_image(&self) -> Option<&str> {
        self.cover.as_deref().or(self.images.first().map(String::as_str))
    }

    pub fn achievements(&self) -> &[String] {
        self.achievements.as_deref().unwrap_or_default()
    }

    pub fn links(&self) -> &[ProjectLink] {
        self.links.as_deref().unwrap_or_default()
    }
}

/// Read-only, ordered table of project records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Builds the catalog from the embedded `projects/*.json` files, ordered by file name.
    pub fn load() -> Result<Self, CatalogError> {
        let mut files = ProjectAssets::iter().collect::<Vec<_>>();
        files.sort();
        let entries = files
            .into_iter()
            .map(|file| {
                let content = ProjectAssets::get(&file).ok_or_else(|| CatalogError::Parse {
                    file: file.to_string(),
                    reason: "missing embedded file".to_string(),
                })?;
                serde_json::from_slice::<ProjectRecord>(&content.data).map_err(|e| {
                    CatalogError::Parse {
                        file: file.to_string(),
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    pub fn get(&self, id: &str) -> Result<&ProjectRecord, CatalogError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn catalog() -> &'static Catalog {
    &GLOBAL_CATALOG
}

#[cfg(test)]
pub(crate) fn test_record(id: &str, image_count: usize) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: id.to_uppercase(),
        subtitle: format!("{id} subtitle"),
        short_description: format!("{id} summary"),
        full_description: format!("{id} description"),
        problem: "problem".to_string(),
        solution: "solution".to_string(),
        target_market: "market".to_string(),
        unique_value: "value".to_string(),
        tags: vec!["AI".to_string()],
        technologies: vec!["Rust".to_string()],
        images: (1..=image_count).map(|i| format!("/{id}-{i}.png")).collect(),
        features: vec![Feature {
            title: "feature".to_string(),
            description: "does things".to_string(),
            icon: "cpu".to_string(),
        }],
        achievements: None,
        links: None,
        cover: None,
        website: None,
        presentation: Presentation::Detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["dalani", "artery", "metropolis"]);

        let dalani = catalog.get("dalani").unwrap();
        assert_eq!(dalani.images.len(), 5);
        assert_eq!(dalani.presentation, Presentation::Detail);
        assert!(dalani.website.is_none());

        let artery = catalog.get("artery").unwrap();
        assert_eq!(artery.images.len(), 6);

        assert!(catalog.iter().all(|p| p.achievements().is_empty()));
        assert_eq!(
            dalani.short_description,
            "Solving the 40% post-harvest loss in Philippine agriculture through ESP32-based IoT modules and AI-backed quality verification."
        );

        let metropolis = catalog.get("metropolis").unwrap();
        assert_eq!(
            metropolis.website.as_deref(),
            Some("https://reality13-metropolis.vercel.app")
        );
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = Catalog::from_entries(vec![test_record("a", 1)]).unwrap();
        assert_eq!(
            catalog.get("nope"),
            Err(CatalogError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let res = Catalog::from_entries(vec![
            test_record("a", 1),
            test_record("b", 1),
            test_record("a", 2),
        ]);
        assert_eq!(res.unwrap_err(), CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let catalog = Catalog::from_entries(vec![
            test_record("zeta", 1),
            test_record("alpha", 1),
            test_record("mid", 1),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "x", "title": "X", "subtitle": "", "short_description": "",
            "full_description": "", "problem": "", "solution": "", "target_market": "",
            "unique_value": "", "tags": [], "technologies": [], "images": ["/x.png"],
            "features": [], "presentation": "gallery"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.achievements().is_empty());
        assert!(record.links().is_empty());
        assert_eq!(record.cover_image(), Some("/x.png"));
        assert_eq!(record.presentation, Presentation::Gallery);
    }
}
