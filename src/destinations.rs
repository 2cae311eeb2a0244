//! Catalog of selectable destinations and their preview images.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// A selectable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub image_ref: String,
}

impl Destination {
    pub fn new(name: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
        }
    }
}

static POPULAR: Lazy<Vec<Destination>> = Lazy::new(|| {
    vec![
        Destination::new(
            "Paris, France",
            "https://images.pexels.com/photos/532826/pexels-photo-532826.jpeg",
        ),
        Destination::new(
            "Tokyo, Japan",
            "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg",
        ),
        Destination::new(
            "New York, USA",
            "https://images.pexels.com/photos/802024/pexels-photo-802024.jpeg",
        ),
        Destination::new(
            "Rome, Italy",
            "https://images.pexels.com/photos/2064827/pexels-photo-2064827.jpeg",
        ),
        Destination::new(
            "Bali, Indonesia",
            "https://images.pexels.com/photos/1822608/pexels-photo-1822608.jpeg",
        ),
    ]
});

/// Ordered, non-empty list of destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationCatalog {
    entries: Vec<Destination>,
}

impl DestinationCatalog {
    pub fn new(entries: Vec<Destination>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// The built-in list of popular destinations.
    pub fn popular() -> Self {
        Self {
            entries: POPULAR.clone(),
        }
    }

    pub fn entries(&self) -> &[Destination] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> &Destination {
        &self.entries[0]
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Destination> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Image for `name`, or the first entry's image when the name is unknown.
    pub fn image_for(&self, name: &str) -> &str {
        self.find(name).unwrap_or_else(|| self.first()).image_ref.as_str()
    }

    /// Entries whose name contains `query`, ignoring case. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Destination> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::popular()
    }
}
