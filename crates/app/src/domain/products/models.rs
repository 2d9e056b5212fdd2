//! Product Models

use jiff::Timestamp;

/// Catalogue product.
///
/// Identity is a human-readable slug id (e.g. `moringa-capsules`), not a
/// generated uuid; order lines reference it but keep their own snapshot of
/// the fields below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub category: String,
    /// Selling price in whole rupees.
    pub price: u64,
    /// Strike-through price shown when discounted.
    pub original_price: Option<u64>,
    pub short_description: Option<String>,
    /// Pack size label, e.g. "100g".
    pub net_qty: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub stock: Option<u32>,
    pub created_at: Timestamp,
}

/// New catalogue entry from the admin panel.
///
/// Carries everything except the identity, which is derived from the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: u64,
    pub original_price: Option<u64>,
    pub short_description: Option<String>,
    pub net_qty: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub stock: Option<u32>,
}

impl NewProduct {
    /// The slug id under which this product will be stored: the lowercased
    /// name with whitespace runs collapsed to hyphens. Slug and id are the
    /// same value.
    #[must_use]
    pub fn storefront_id(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Partial update applied by the admin panel.
///
/// `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub price: Option<u64>,
    pub original_price: Option<u64>,
    pub short_description: Option<String>,
    pub net_qty: Option<String>,
    pub stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turmeric_latte() -> NewProduct {
        NewProduct {
            name: "Turmeric Latte Mix".to_string(),
            category: "Wellness Drinks".to_string(),
            price: 299,
            original_price: Some(349),
            short_description: None,
            net_qty: Some("150g".to_string()),
            image: None,
            featured: false,
            stock: Some(40),
        }
    }

    #[test]
    fn storefront_id_is_the_hyphenated_lowercase_name() {
        assert_eq!(turmeric_latte().storefront_id(), "turmeric-latte-mix");
    }

    #[test]
    fn storefront_id_collapses_whitespace_runs() {
        let product = NewProduct {
            name: "Daily  Moringa   Health Drink".to_string(),
            ..turmeric_latte()
        };

        assert_eq!(product.storefront_id(), "daily-moringa-health-drink");
    }
}
