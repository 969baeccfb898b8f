use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;

pub type ItemId = i64;

/// A product as listed in the catalog and managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: ItemId,
    pub item_name: String,
    #[serde(with = "super::money::non_negative")]
    pub item_price: BigDecimal,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub active_state: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create/update payload for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub item_name: String,
    #[serde(with = "super::money")]
    pub item_price: BigDecimal,
    pub stock_quantity: i32,
    pub active_state: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ItemDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.item_name.trim().is_empty() {
            return Err(DomainError::InvalidInput("item name is required".into()));
        }
        if self.item_price < BigDecimal::from(0) {
            return Err(DomainError::InvalidInput("item price must not be negative".into()));
        }
        if self.stock_quantity < 0 {
            return Err(DomainError::InvalidInput("stock quantity must not be negative".into()));
        }
        Ok(())
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            item_name: item.item_name.clone(),
            item_price: item.item_price.clone(),
            stock_quantity: item.stock_quantity,
            active_state: item.active_state,
            image_url: item.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub item_name: String,
    pub current_stock: i32,
    pub min_stock_threshold: i32,
}

/// Case-insensitive client-side search over a fetched page.
pub trait Searchable {
    fn matches(&self, term: &str) -> bool;
}

impl Searchable for Item {
    fn matches(&self, term: &str) -> bool {
        self.item_name.to_lowercase().contains(&term.to_lowercase())
    }
}
