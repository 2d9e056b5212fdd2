//! Verdant storefront persistence services and checkout assembly.

pub mod checkout;
pub mod database;
pub mod domain;
pub mod identity;
pub mod notify;
