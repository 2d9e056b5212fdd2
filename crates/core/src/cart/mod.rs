//! Cart

use serde::{Deserialize, Serialize};

/// One product entry in the cart, with quantity.
///
/// Lines are the storage wire format, so field names are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    /// Unit price in whole rupees.
    pub unit_price: u64,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
    pub image: String,
    pub net_qty: String,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// The strict product shape accepted by [`Cart::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartProduct {
    pub id: String,
    pub name: String,
    /// Unit price in whole rupees.
    pub price: u64,
    pub image: String,
    pub net_qty: String,
}

/// Ordered collection of cart lines for the current browsing session.
///
/// Lines keep insertion order. Totals are derived on read, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously stored lines.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// If a line for the same product already exists its quantity is
    /// incremented rather than a duplicate line appended. A requested
    /// quantity of 0 is clamped to 1.
    pub fn add_item(&mut self, product: &CartProduct, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
                image: product.image.clone(),
                net_qty: product.net_qty.clone(),
            });
        }
    }

    /// Remove a line entirely, regardless of quantity.
    ///
    /// No-op when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Set a line's quantity.
    ///
    /// A quantity of 0 removes the line; there is never a zero-quantity
    /// line in the cart. No-op when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart. Used once per successful order placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds a line for the given product.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.lines.iter().any(|line| line.product_id == product_id)
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of unit price times quantity over all lines, in whole rupees.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moringa_drink() -> CartProduct {
        CartProduct {
            id: "daily-moringa-health-drink".to_string(),
            name: "Daily Moringa Health Drink".to_string(),
            price: 349,
            image: "/products/moringa-drink.jpg".to_string(),
            net_qty: "200g".to_string(),
        }
    }

    fn moringa_capsules() -> CartProduct {
        CartProduct {
            id: "moringa-capsules".to_string(),
            name: "Moringa Capsules".to_string(),
            price: 549,
            image: "/products/moringa-capsules.jpg".to_string(),
            net_qty: "60 caps".to_string(),
        }
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let product = moringa_drink();

        cart.add_item(&product, 1);
        cart.add_item(&product, 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn adding_distinct_products_appends_in_insertion_order() {
        let mut cart = Cart::new();

        cart.add_item(&moringa_drink(), 1);
        cart.add_item(&moringa_capsules(), 1);

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product_id.as_str())
            .collect();

        assert_eq!(ids, vec!["daily-moringa-health-drink", "moringa-capsules"]);
    }

    #[test]
    fn add_item_clamps_zero_quantity_to_one() {
        let mut cart = Cart::new();

        cart.add_item(&moringa_drink(), 0);

        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        let product = moringa_drink();

        cart.add_item(&product, 3);
        cart.update_quantity(&product.id, 0);

        assert!(!cart.contains(&product.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_the_line_quantity() {
        let mut cart = Cart::new();
        let product = moringa_drink();

        cart.add_item(&product, 1);
        cart.update_quantity(&product.id, 5);

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), 5 * 349);
    }

    #[test]
    fn update_quantity_for_missing_product_is_a_noop() {
        let mut cart = Cart::new();

        cart.add_item(&moringa_drink(), 1);
        cart.update_quantity("moringa-tablets", 4);

        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn remove_item_for_missing_product_is_a_noop() {
        let mut cart = Cart::new();

        cart.add_item(&moringa_drink(), 2);
        cart.remove_item("moringa-tablets");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn totals_hold_after_every_operation() {
        let mut cart = Cart::new();
        let drink = moringa_drink();
        let capsules = moringa_capsules();

        let check = |cart: &Cart| {
            let items: u32 = cart.lines().iter().map(|line| line.quantity).sum();
            let price: u64 = cart.lines().iter().map(CartLine::line_total).sum();

            assert_eq!(cart.total_items(), items);
            assert_eq!(cart.total_price(), price);
        };

        cart.add_item(&drink, 2);
        check(&cart);

        cart.add_item(&capsules, 1);
        check(&cart);

        cart.update_quantity(&drink.id, 1);
        check(&cart);

        cart.remove_item(&capsules.id);
        check(&cart);

        cart.clear();
        check(&cart);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn clear_empties_all_lines() {
        let mut cart = Cart::new();

        cart.add_item(&moringa_drink(), 2);
        cart.add_item(&moringa_capsules(), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let mut cart = Cart::new();

        cart.add_item(&moringa_drink(), 2);

        assert_eq!(cart.lines()[0].line_total(), 698);
    }

    #[test]
    fn lines_round_trip_through_json() {
        let mut cart = Cart::new();
        cart.add_item(&moringa_drink(), 2);

        let json = serde_json::to_string(cart.lines()).expect("lines should serialize");
        let lines: Vec<CartLine> = serde_json::from_str(&json).expect("lines should deserialize");

        assert_eq!(Cart::from_lines(lines), cart);
    }
}
