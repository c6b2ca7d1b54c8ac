use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::fold_case;
use crate::error::ValidationError;

/// One inventory row. `id` is unique only within its category list.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub item: String,
    /// Written as a number; older data may hold it as text (`"42"`).
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub quantity: i64,
    pub description: String,
    pub notes: String,
}

impl Item {
    /// Case-insensitive substring match across item, description, notes and
    /// the printed quantity. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = fold_case(term);
        fold_case(&self.item).contains(&term)
            || fold_case(&self.description).contains(&term)
            || fold_case(&self.notes).contains(&term)
            || self.quantity.to_string().contains(&term)
    }
}

/// Editable copy of an [`Item`]. Fields hold raw form text until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    id: u32,
    pub item: String,
    pub quantity: String,
    pub description: String,
    pub notes: String,
}

impl ItemDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            item: item.item.clone(),
            quantity: item.quantity.to_string(),
            description: item.description.clone(),
            notes: item.notes.clone(),
        }
    }

    pub fn into_item(self) -> Result<Item, ValidationError> {
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidQuantity(self.quantity.clone()))?;

        Ok(Item {
            id: self.id,
            item: self.item,
            quantity,
            description: self.description,
            notes: self.notes,
        })
    }
}
