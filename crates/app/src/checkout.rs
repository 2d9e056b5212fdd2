//! Checkout order assembly.
//!
//! Turns a non-empty cart, a validated shipping address and an
//! authenticated identity into persisted address/order/order-line records,
//! then resets the cart.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use verdant::{
    checkout::{ShippingAddress, ValidationError, validate},
    pricing::CheckoutTotals,
    storage::{CartStorage, CartStore},
};

use crate::{
    domain::orders::{
        OrdersService, OrdersServiceError,
        models::{NewAddress, NewOrder, NewOrderItem, Order},
    },
    identity::CustomerIdentity,
};

/// Why an order could not be placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to place order")]
    Orders(#[from] OrdersServiceError),
}

/// A successfully placed order, for the confirmation handoff.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub totals: CheckoutTotals,
}

/// Assembles orders against the orders service.
#[derive(Clone)]
pub struct OrderAssembler {
    orders: Arc<dyn OrdersService>,
}

impl OrderAssembler {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>) -> Self {
        Self { orders }
    }

    /// Place an order from the current cart.
    ///
    /// The three persistence steps run strictly in sequence, each depending
    /// on the previous step's generated id: address, then order, then order
    /// lines. They are separate inserts, not one transaction; a failure
    /// part-way can leave an orphaned address or an order without lines.
    /// The cart is cleared only after all three steps succeed, so a failed
    /// attempt can be retried without re-entering items.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when there is nothing to order.
    /// - [`CheckoutError::Validation`] when the address fails a check;
    ///   nothing reaches the persistence layer.
    /// - [`CheckoutError::Orders`] when a persistence step fails; the
    ///   remaining steps are skipped and the cart is left untouched.
    pub async fn place_order<S: CartStorage>(
        &self,
        customer: &CustomerIdentity,
        address: &ShippingAddress,
        cart: &mut CartStore<S>,
    ) -> Result<PlacedOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        validate(address)?;

        // Frozen at this moment; later product price changes never touch it.
        let totals = CheckoutTotals::for_subtotal(cart.total_price());

        let items: Vec<NewOrderItem> = cart
            .lines()
            .iter()
            .map(|line| NewOrderItem {
                product_id: line.product_id.clone(),
                product_name: line.name.clone(),
                quantity: line.quantity,
                price: line.unit_price,
            })
            .collect();

        let saved_address = self
            .orders
            .create_address(NewAddress::from_checkout(customer.user_uuid, address))
            .await?;

        let order = self
            .orders
            .create_order(NewOrder {
                user_uuid: customer.user_uuid,
                address_uuid: saved_address.uuid,
                total: totals.grand_total,
                customer_name: address.full_name.clone(),
                customer_email: customer.email.clone(),
                customer_phone: address.phone.clone(),
                shipping_address: address.clone(),
            })
            .await?;

        self.orders.create_order_items(order.uuid, items).await?;

        // The order exists regardless of whether the cart store can be
        // emptied, so a save failure here is not surfaced to the customer.
        if let Err(error) = cart.clear() {
            warn!(order = %order.uuid, "order placed but cart storage was not cleared: {error}");
        }

        info!(order = %order.uuid, total = totals.grand_total, "order placed");

        Ok(PlacedOrder { order, totals })
    }
}
