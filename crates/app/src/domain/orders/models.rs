//! Order Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use verdant::checkout::ShippingAddress;

/// Fulfilment status of a placed order.
///
/// Every order starts `pending`. An administrative actor may move an order
/// to any other status; no transition table is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in fulfilment order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Paid,
        Self::Packed,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// The lowercase storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Packed => "packed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a stored order status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status `{0}`")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "packed" => Ok(Self::Packed),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

/// Persisted shipping address record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
    pub created_at: Timestamp,
}

/// New address persistence payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub user_uuid: Uuid,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
}

impl NewAddress {
    /// Persistence payload for a validated checkout address.
    #[must_use]
    pub fn from_checkout(user_uuid: Uuid, address: &ShippingAddress) -> Self {
        Self {
            user_uuid,
            full_name: address.full_name.clone(),
            phone: address.phone.clone(),
            address_line1: address.address_line1.clone(),
            address_line2: address.address_line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            pincode: address.pincode.clone(),
            is_default: true,
        }
    }
}

/// Persisted order record.
///
/// `total` is frozen at creation time; later price changes to the
/// underlying products never alter it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub address_uuid: Uuid,
    /// Grand total in whole rupees (subtotal plus shipping fee).
    pub total: u64,
    pub status: OrderStatus,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Denormalized copy of the shipping address, for display.
    pub shipping_address: ShippingAddress,
    pub created_at: Timestamp,
}

/// New order persistence payload. Status always starts `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_uuid: Uuid,
    pub address_uuid: Uuid,
    pub total: u64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: ShippingAddress,
}

/// Frozen snapshot of one purchased product.
///
/// Name, price and quantity are copied at order-creation time and never
/// updated when the source product changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub uuid: Uuid,
    pub order_uuid: Uuid,
    /// Stale once the product is deleted; the snapshot fields remain.
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price in whole rupees at the moment of purchase.
    pub price: u64,
}

/// New order line persistence payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: u64,
}
