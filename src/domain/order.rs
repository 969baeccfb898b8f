use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLedger;
use super::catalog::ItemId;
use super::errors::DomainError;
use super::user::UserId;

pub type OrderId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Processing")]
    Processing,
    #[serde(alias = "Shipped")]
    Shipped,
    #[serde(alias = "Completed")]
    Completed,
    #[serde(alias = "Cancelled")]
    Cancelled,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: OrderId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default, with = "super::money")]
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub item_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl ShippingAddress {
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("postal code", &self.postal_code),
        ];
        match fields.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(DomainError::InvalidInput(format!("{name} is required"))),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub item_id: ItemId,
    pub quantity: u32,
    #[serde(with = "super::money")]
    pub unit_price: BigDecimal,
}

/// Order-creation request built from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub user_id: UserId,
    pub order_items: Vec<OrderItemInput>,
    pub shipping_address: ShippingAddress,
    #[serde(with = "super::money")]
    pub subtotal: BigDecimal,
    #[serde(with = "super::money")]
    pub shipping_fee: BigDecimal,
    #[serde(with = "super::money")]
    pub total_amount: BigDecimal,
}

impl OrderDraft {
    pub fn from_cart(
        user_id: UserId,
        cart: &CartLedger,
        shipping_address: ShippingAddress,
    ) -> Result<Self, DomainError> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }
        shipping_address.validate()?;

        let totals = cart.totals();
        Ok(Self {
            user_id,
            order_items: cart
                .lines()
                .iter()
                .map(|l| OrderItemInput {
                    item_id: l.product_id,
                    quantity: l.quantity,
                    unit_price: l.unit_price.clone(),
                })
                .collect(),
            shipping_address,
            subtotal: totals.subtotal,
            shipping_fee: totals.shipping,
            total_amount: totals.grand_total,
        })
    }
}
