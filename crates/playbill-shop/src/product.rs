//! # Product
//!
//! A listing owned by a seller. Fields are private; stock only changes
//! through [`crate::service::ShoppingService::purchase_product`].

use playbill_core::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product listed for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: Uuid,
    name: String,
    price: Money,
    quantity: u32,
    seller_nickname: String,
}

impl Product {
    /// Creates a product with a fresh UUID v4.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
        seller_nickname: impl Into<String>,
    ) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            quantity,
            seller_nickname: seller_nickname.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in cents.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units in stock.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn seller_nickname(&self) -> &str {
        &self.seller_nickname
    }

    /// Price for `quantity` units, or `None` if it does not fit in `i64` cents.
    pub fn total_price(&self, quantity: u32) -> Option<Money> {
        self.price.checked_mul_quantity(i64::from(quantity))
    }

    /// Checks whether `quantity` units can be taken from stock.
    pub fn can_sell(&self, quantity: u32) -> bool {
        self.quantity >= quantity
    }

    /// Caller must have checked [`Product::can_sell`].
    pub(crate) fn remove_stock(&mut self, quantity: u32) {
        self.quantity -= quantity;
    }
}
