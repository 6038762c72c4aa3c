use std::collections::{BTreeSet, HashSet};

use color_eyre::eyre::{bail, Result};
use serde::{Deserialize, Serialize};

/// A purchasable optional page component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit
    pub price: u64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub default_selected: bool,
}

impl CatalogItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        tags: &[&str],
        default_selected: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            default_selected,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Static list of components, constructed once at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            bail!("catalog must contain at least one component");
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                bail!("duplicate catalog id: {}", item.id);
            }
        }

        Ok(Self { items })
    }

    /// The stock component catalog
    pub fn builtin() -> Self {
        let items = vec![
            CatalogItem::new(
                1,
                "Animated Hero Section",
                "Headline with entrance animation",
                500,
                &["animation", "hero"],
                true,
            ),
            CatalogItem::new(
                2,
                "Features with Icons",
                "3-6 features with custom icons",
                400,
                &["icons", "grid"],
                true,
            ),
            CatalogItem::new(
                3,
                "Portfolio Gallery",
                "Work showcase with lightbox",
                700,
                &["gallery", "lightbox"],
                false,
            ),
            CatalogItem::new(
                4,
                "Pricing Table",
                "Package comparison table",
                600,
                &["table", "pricing"],
                false,
            ),
            CatalogItem::new(
                5,
                "Custom Contact Form",
                "Tailored contact form with validation",
                450,
                &["form", "validation"],
                true,
            ),
            CatalogItem::new(
                6,
                "Testimonials with Rating",
                "Customer reviews with star ratings",
                350,
                &["testimonials", "rating"],
                false,
            ),
            CatalogItem::new(
                7,
                "Chat Bot Integration",
                "Telegram/WhatsApp chat integration",
                800,
                &["integration", "chat"],
                false,
            ),
            CatalogItem::new(
                8,
                "Multilingual Support",
                "RTL and 3+ languages",
                1000,
                &["localization", "RTL"],
                false,
            ),
        ];

        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Item at a display position (grid order)
    pub fn at(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Ids flagged as selected by default
    pub fn default_selection(&self) -> BTreeSet<u32> {
        self.items
            .iter()
            .filter(|item| item.default_selected)
            .map(|item| item.id)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
