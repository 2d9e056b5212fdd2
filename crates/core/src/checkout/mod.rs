//! Checkout

pub mod address;
pub mod validator;

pub use address::{INDIAN_STATES, ShippingAddress, is_indian_state};
pub use validator::{ValidationError, validate};
