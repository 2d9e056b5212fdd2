//! Checkout form validation.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::checkout::address::ShippingAddress;

/// A user-correctable problem with the checkout form.
///
/// `Display` is the exact message shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,

    #[error("Valid 10-digit phone number is required")]
    PhoneInvalid,

    #[error("Address is required")]
    AddressRequired,

    #[error("City is required")]
    CityRequired,

    #[error("State is required")]
    StateRequired,

    #[error("Valid 6-digit pincode is required")]
    PincodeInvalid,
}

#[expect(clippy::expect_used, reason = "the pattern is a literal known to compile")]
fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();

    PHONE.get_or_init(|| Regex::new(r"^[6-9]\d{9}$").expect("phone pattern compiles"))
}

#[expect(clippy::expect_used, reason = "the pattern is a literal known to compile")]
fn pincode_pattern() -> &'static Regex {
    static PINCODE: OnceLock<Regex> = OnceLock::new();

    PINCODE.get_or_init(|| Regex::new(r"^\d{6}$").expect("pincode pattern compiles"))
}

/// Gate order submission on address completeness and format.
///
/// Pure function; checks run in a fixed order and short-circuit at the
/// first failure, so an address with several problems reports only the
/// first one.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`], if any.
pub fn validate(address: &ShippingAddress) -> Result<(), ValidationError> {
    if address.full_name.trim().is_empty() {
        return Err(ValidationError::FullNameRequired);
    }

    // The format checks run on the raw value; padding is not forgiven.
    if !phone_pattern().is_match(&address.phone) {
        return Err(ValidationError::PhoneInvalid);
    }

    if address.address_line1.trim().is_empty() {
        return Err(ValidationError::AddressRequired);
    }

    if address.city.trim().is_empty() {
        return Err(ValidationError::CityRequired);
    }

    if address.state.is_empty() {
        return Err(ValidationError::StateRequired);
    }

    if !pincode_pattern().is_match(&address.pincode) {
        return Err(ValidationError::PincodeInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            address_line1: "12 MG Road".to_string(),
            address_line2: None,
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411001".to_string(),
        }
    }

    #[test]
    fn complete_address_validates() {
        assert_eq!(validate(&valid_address()), Ok(()));
    }

    #[test]
    fn blank_full_name_is_reported_first() {
        let address = ShippingAddress {
            full_name: "  ".to_string(),
            phone: "12345".to_string(),
            ..valid_address()
        };

        // First-check-wins: the name error masks the bad phone number.
        assert_eq!(validate(&address), Err(ValidationError::FullNameRequired));
    }

    #[test]
    fn phone_must_be_ten_digits_starting_six_to_nine() {
        for phone in ["987654321", "98765432100", "5876543210", "98765abc10", ""] {
            let address = ShippingAddress {
                phone: phone.to_string(),
                ..valid_address()
            };

            assert_eq!(
                validate(&address),
                Err(ValidationError::PhoneInvalid),
                "phone {phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_with_surrounding_whitespace_is_rejected() {
        for phone in ["9876543210 ", " 9876543210", "98765 43210"] {
            let address = ShippingAddress {
                phone: phone.to_string(),
                ..valid_address()
            };

            assert_eq!(
                validate(&address),
                Err(ValidationError::PhoneInvalid),
                "phone {phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_starting_six_is_accepted() {
        let address = ShippingAddress {
            phone: "6000000000".to_string(),
            ..valid_address()
        };

        assert_eq!(validate(&address), Ok(()));
    }

    #[test]
    fn blank_address_line_is_rejected() {
        let address = ShippingAddress {
            address_line1: String::new(),
            ..valid_address()
        };

        assert_eq!(validate(&address), Err(ValidationError::AddressRequired));
    }

    #[test]
    fn blank_city_is_rejected() {
        let address = ShippingAddress {
            city: " ".to_string(),
            ..valid_address()
        };

        assert_eq!(validate(&address), Err(ValidationError::CityRequired));
    }

    #[test]
    fn unselected_state_is_rejected() {
        let address = ShippingAddress {
            state: String::new(),
            ..valid_address()
        };

        assert_eq!(validate(&address), Err(ValidationError::StateRequired));
    }

    #[test]
    fn pincode_must_be_six_digits() {
        for pincode in ["41100", "4110011", "41100a", ""] {
            let address = ShippingAddress {
                pincode: pincode.to_string(),
                ..valid_address()
            };

            assert_eq!(
                validate(&address),
                Err(ValidationError::PincodeInvalid),
                "pincode {pincode:?} should be rejected"
            );
        }
    }

    #[test]
    fn pincode_with_surrounding_whitespace_is_rejected() {
        for pincode in [" 411001", "411001 "] {
            let address = ShippingAddress {
                pincode: pincode.to_string(),
                ..valid_address()
            };

            assert_eq!(
                validate(&address),
                Err(ValidationError::PincodeInvalid),
                "pincode {pincode:?} should be rejected"
            );
        }
    }

    #[test]
    fn optional_second_address_line_is_not_checked() {
        let address = ShippingAddress {
            address_line2: Some("Near the river".to_string()),
            ..valid_address()
        };

        assert_eq!(validate(&address), Ok(()));
    }

    #[test]
    fn error_messages_match_the_checkout_form() {
        assert_eq!(
            ValidationError::FullNameRequired.to_string(),
            "Full name is required"
        );
        assert_eq!(
            ValidationError::PhoneInvalid.to_string(),
            "Valid 10-digit phone number is required"
        );
        assert_eq!(
            ValidationError::AddressRequired.to_string(),
            "Address is required"
        );
        assert_eq!(ValidationError::CityRequired.to_string(), "City is required");
        assert_eq!(
            ValidationError::StateRequired.to_string(),
            "State is required"
        );
        assert_eq!(
            ValidationError::PincodeInvalid.to_string(),
            "Valid 6-digit pincode is required"
        );
    }
}
