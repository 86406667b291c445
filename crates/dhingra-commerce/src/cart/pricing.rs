//! Derived cart totals and the checkout summary.

use crate::cart::Cart;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Aggregates derived from the cart's lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: u64,
    /// Sum of effective unit price times quantity.
    pub total_price: Money,
}

impl CartTotals {
    /// Totals for an empty cart.
    pub fn zero(currency: Currency) -> Self {
        Self {
            item_count: 0,
            total_price: Money::zero(currency),
        }
    }

    /// Compute totals for `cart` in `currency`.
    ///
    /// Lines priced in another currency are left out of the price total and
    /// logged; the amount saturates instead of overflowing.
    pub fn of(cart: &Cart, currency: Currency) -> Self {
        let mut total = 0_i64;
        for line in cart.lines() {
            let line_total = line.line_total();
            if line_total.currency != currency {
                tracing::warn!(
                    product_id = %line.product_id(),
                    expected = %currency,
                    got = %line_total.currency,
                    "cart line priced in another currency, excluded from total"
                );
                continue;
            }
            total = total.saturating_add(line_total.amount_minor);
        }

        Self {
            item_count: cart.item_count(),
            total_price: Money::new(total, currency),
        }
    }
}

/// Shipping rule: free above a subtotal threshold, otherwise a flat fee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship free.
    pub free_over: Money,
    /// Fee charged otherwise.
    pub flat_fee: Money,
}

impl ShippingPolicy {
    pub fn new(free_over: Money, flat_fee: Money) -> Self {
        Self {
            free_over,
            flat_fee,
        }
    }

    /// Shipping charged for a subtotal. Nothing ships for an empty cart.
    pub fn shipping_for(&self, totals: &CartTotals) -> Money {
        let currency = totals.total_price.currency;
        if totals.item_count == 0
            || totals.total_price.amount_minor > self.free_over.amount_minor
        {
            Money::zero(currency)
        } else {
            Money::new(self.flat_fee.amount_minor, currency)
        }
    }
}

impl Default for ShippingPolicy {
    /// Free over ₹5,000, otherwise ₹250.
    fn default() -> Self {
        Self::new(
            Money::from_major(5000, Currency::INR),
            Money::from_major(250, Currency::INR),
        )
    }
}

/// Order summary shown next to the cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    pub item_count: u64,
    pub subtotal: Money,
    pub shipping: Money,
    pub grand_total: Money,
}

impl CartSummary {
    pub fn new(totals: &CartTotals, policy: &ShippingPolicy) -> Self {
        let shipping = policy.shipping_for(totals);
        let grand_total = Money::new(
            totals
                .total_price
                .amount_minor
                .saturating_add(shipping.amount_minor),
            totals.total_price.currency,
        );
        Self {
            item_count: totals.item_count,
            subtotal: totals.total_price,
            shipping,
            grand_total,
        }
    }

    /// Whether shipping is free for this order.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{reduce, CartAction};
    use crate::catalog::Product;
    use crate::ids::{CategoryId, ProductId};

    fn rupees(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    fn cart_with(price: i64, discount: Option<u8>, quantity: i64) -> Cart {
        let mut product =
            Product::new(ProductId::new(1), "Item", rupees(price), CategoryId::new(1));
        product.discount = discount;
        reduce(
            Cart::new(),
            CartAction::Add {
                product,
                quantity,
                color: None,
                size: None,
            },
        )
        .cart
    }

    #[test]
    fn test_totals_use_effective_price() {
        let totals = CartTotals::of(&cart_with(1000, Some(10), 3), Currency::INR);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total_price, rupees(2700));
    }

    #[test]
    fn test_totals_skip_foreign_currency() {
        let totals = CartTotals::of(&cart_with(1000, None, 2), Currency::USD);
        assert_eq!(totals.item_count, 2);
        assert!(totals.total_price.is_zero());
    }

    #[test]
    fn test_shipping_threshold_is_strict() {
        let policy = ShippingPolicy::default();

        let totals = CartTotals::of(&cart_with(5000, None, 1), Currency::INR);
        let at = CartSummary::new(&totals, &policy);
        assert_eq!(at.shipping, rupees(250));
        assert_eq!(at.grand_total, rupees(5250));

        let totals = CartTotals::of(&cart_with(5001, None, 1), Currency::INR);
        let over = CartSummary::new(&totals, &policy);
        assert!(over.ships_free());
        assert_eq!(over.grand_total, rupees(5001));
    }

    #[test]
    fn test_empty_cart_ships_nothing() {
        let summary =
            CartSummary::new(&CartTotals::zero(Currency::INR), &ShippingPolicy::default());
        assert!(summary.shipping.is_zero());
        assert!(summary.grand_total.is_zero());
    }
}
