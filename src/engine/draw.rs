use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::cards::{Card, Catalog};
use crate::error::EngineError;
use crate::types::Category;

/// One optional card per category. `None` means the catalog had nothing to
/// offer for that category, which is a valid outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawResult {
    slots: [Option<Card>; Category::COUNT],
}

impl DrawResult {
    #[inline]
    pub fn get(&self, category: Category) -> Option<&Card> {
        self.slots[category.index()].as_ref()
    }

    /// Put `card` into its own category slot, returning the card it replaced.
    #[inline]
    pub fn replace(&mut self, card: Card) -> Option<Card> {
        let idx = card.category.index();
        self.slots[idx].replace(card)
    }

    /// True when every category holds a card.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// (category, slot) pairs in fixed category order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<&Card>)> {
        Category::all()
            .into_iter()
            .map(move |c| (c, self.slots[c.index()].as_ref()))
    }
}

impl Serialize for DrawResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<Category, Option<&Card>> = self.iter().collect();
        map.serialize(serializer)
    }
}

/// Draw one card per category, uniformly and independently.
pub fn draw_all<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> DrawResult {
    let mut result = DrawResult::default();
    for category in Category::all() {
        let picked = catalog.cards(category).choose(rng).cloned();
        debug!(%category, card_id = ?picked.as_ref().map(|c| c.id), "drew card");
        result.slots[category.index()] = picked;
    }
    result
}

/// Replace the card shown for `category` with a different one when the
/// category has an alternative; otherwise return a card from the full set
/// (with one card, that same card).
///
/// Every category always exists in a [`Catalog`]; one with no cards is
/// `NotFound`. `current` need not still be in the catalog.
pub fn reroll<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: Category,
    current: &Card,
    rng: &mut R,
) -> Result<Card, EngineError> {
    if current.category != category {
        return Err(EngineError::InvalidArgument(format!(
            "card {} belongs to {}, not {}",
            current.id, current.category, category
        )));
    }
    let candidates = catalog.cards(category);
    if candidates.is_empty() {
        return Err(EngineError::NotFound(format!("no cards in category {category}")));
    }

    let others: Vec<&Card> = candidates.iter().filter(|c| c.id != current.id).collect();
    let picked = match others.choose(rng) {
        Some(&card) => card,
        None => candidates
            .choose(rng)
            .ok_or_else(|| EngineError::NotFound(format!("no cards in category {category}")))?,
    };
    debug!(%category, from = current.id, to = picked.id, "rerolled card");
    Ok(picked.clone())
}
