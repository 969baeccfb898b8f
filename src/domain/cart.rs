use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use super::catalog::{Item, ItemId};
use super::errors::DomainError;

/// Flat shipping fee charged on any non-empty cart.
pub const FLAT_SHIPPING_FEE: u32 = 480;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ItemId,
    pub product_name: String,
    #[serde(with = "super::money::non_negative")]
    pub unit_price: BigDecimal,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    pub subtotal: BigDecimal,
    pub shipping: BigDecimal,
    pub grand_total: BigDecimal,
}

/// Products selected by the shopper before checkout, unique by product id
/// and kept in insertion order.
#[derive(Debug, Clone)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    shipping_fee: BigDecimal,
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CartLedger {
    pub fn new() -> Self {
        Self::with_shipping_fee(BigDecimal::from(FLAT_SHIPPING_FEE))
    }

    pub fn with_shipping_fee(shipping_fee: BigDecimal) -> Self {
        Self {
            lines: Vec::new(),
            shipping_fee,
        }
    }

    /// Refuses a negatively priced item and leaves the cart unchanged.
    pub fn add(&mut self, item: &Item) -> Result<(), DomainError> {
        if item.item_price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "{} has a negative price",
                item.item_name
            )));
        }
        match self.line_mut(item.item_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: item.item_id,
                product_name: item.item_name.clone(),
                unit_price: item.item_price.clone(),
                quantity: 1,
            }),
        }
        Ok(())
    }

    pub fn remove(&mut self, product_id: ItemId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn increment(&mut self, product_id: ItemId) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity += 1;
        }
    }

    /// Never drops a line: quantity stays at 1 instead.
    pub fn decrement(&mut self, product_id: ItemId) {
        if let Some(line) = self.line_mut(product_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal = self
            .lines
            .iter()
            .fold(BigDecimal::zero(), |acc, l| acc + l.line_total());
        let shipping = if subtotal > BigDecimal::zero() {
            self.shipping_fee.clone()
        } else {
            BigDecimal::zero()
        };
        let grand_total = &subtotal + &shipping;
        CartTotals {
            subtotal,
            shipping,
            grand_total,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, product_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}
