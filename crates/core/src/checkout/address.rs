//! Shipping address capture.

use serde::{Deserialize, Serialize};

/// Regions offered in the checkout state selector.
pub const INDIAN_STATES: [&str; 31] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
];

/// Whether the given region appears in the checkout state selector.
#[must_use]
pub fn is_indian_state(state: &str) -> bool {
    INDIAN_STATES.contains(&state)
}

/// A postal address plus contact info captured at checkout.
///
/// Immutable once an order is placed; the order keeps a denormalized copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub full_name: String,
    /// 10 digits, first digit 6-9.
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    /// One of [`INDIAN_STATES`] when selected through the UI.
    pub state: String,
    /// Exactly 6 digits.
    pub pincode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_state_is_recognised() {
        assert!(is_indian_state("Maharashtra"));
    }

    #[test]
    fn unknown_state_is_not_recognised() {
        assert!(!is_indian_state("Atlantis"));
    }

    #[test]
    fn address_round_trips_through_json() {
        let address = ShippingAddress {
            full_name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            address_line1: "12 MG Road".to_string(),
            address_line2: None,
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411001".to_string(),
        };

        let json = serde_json::to_string(&address).expect("address should serialize");
        let back: ShippingAddress =
            serde_json::from_str(&json).expect("address should deserialize");

        assert_eq!(back, address);
    }
}
