use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::{Category, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub category: Category,
    pub prompt_text: String,
    #[serde(default)]
    pub back_content: String,
    pub difficulty: Difficulty,
}

/// Cards grouped by category, in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_category: [Vec<Card>; Category::COUNT],
    count: usize,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank prompts.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<u32> = HashSet::with_capacity(cards.len());
        let mut catalog = Catalog::default();

        for card in cards {
            validate_card(&card)?;
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
            catalog.by_category[card.category.index()].push(card);
            catalog.count += 1;
        }
        Ok(catalog)
    }

    #[inline]
    pub fn cards(&self, category: Category) -> &[Card] {
        &self.by_category[category.index()]
    }

    pub fn get(&self, id: u32) -> Option<&Card> {
        self.iter().find(|c| c.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All cards, category by category in [`Category::all`] order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.by_category.iter().flatten()
    }
}

fn validate_card(card: &Card) -> Result<(), CatalogError> {
    if card.prompt_text.trim().is_empty() {
        return Err(CatalogError::EmptyPrompt(card.id));
    }
    Ok(())
}

/// Load a catalog from a JSON array of cards.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<Card> = serde_json::from_str(&data)?;
    Catalog::from_cards(raw)
}
