//! Verdant Domain Concerns

pub mod orders;
pub mod products;

pub(crate) mod rows;
