use crate::domain::cart::CartLedger;
use crate::domain::order::{OrderDraft, OrderRecord, ShippingAddress};
use crate::domain::ports::{OrderGateway, SessionStore};
use crate::errors::AppError;

use super::session_context::SessionContext;

pub struct CheckoutService<G> {
    gateway: G,
}

impl<G: OrderGateway> CheckoutService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Submits the cart as an order.
    ///
    /// Requires a signed-in user, a non-empty cart and a complete address;
    /// none of those failures send a request. The cart is cleared only once
    /// the backend accepts the order.
    pub async fn checkout<S: SessionStore>(
        &self,
        session: &mut SessionContext<S>,
        cart: &mut CartLedger,
        address: ShippingAddress,
    ) -> Result<OrderRecord, AppError> {
        let user_id = session.require_login()?.user.user_id;
        let draft = OrderDraft::from_cart(user_id, cart, address)?;

        match self.gateway.create_order(&draft).await {
            Ok(order) => {
                log::info!(
                    "Order {} placed with {} line(s)",
                    order.order_id,
                    draft.order_items.len()
                );
                cart.clear();
                Ok(order)
            }
            Err(e) => {
                log::warn!("Order submission failed: {}", e);
                session.observe(&e);
                Err(e)
            }
        }
    }
}
