//! Pricing rules applied at order placement.

/// Cart subtotal (in whole rupees) at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 499;

/// Flat shipping fee (in whole rupees) below the free-shipping threshold.
pub const SHIPPING_FEE: u64 = 49;

/// Shipping fee for the given cart subtotal.
#[must_use]
pub fn shipping_fee(subtotal: u64) -> u64 {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        SHIPPING_FEE
    }
}

/// Totals computed once at order placement and frozen into the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTotals {
    pub subtotal: u64,
    pub shipping_fee: u64,
    pub grand_total: u64,
}

impl CheckoutTotals {
    /// Derive the shipping fee and grand total from a cart subtotal.
    #[must_use]
    pub fn for_subtotal(subtotal: u64) -> Self {
        let shipping_fee = shipping_fee(subtotal);

        Self {
            subtotal,
            shipping_fee,
            grand_total: subtotal + shipping_fee,
        }
    }
}
