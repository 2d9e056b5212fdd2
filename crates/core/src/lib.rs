//! Verdant
//!
//! Cart and checkout domain core for a direct-to-consumer nutrition
//! storefront: cart state and derived totals, shipping address validation,
//! pricing rules, and the durable cart storage contract.

pub mod cart;
pub mod checkout;
pub mod pricing;
pub mod storage;
