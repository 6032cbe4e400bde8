//! # Actors
//!
//! Buyers and sellers. Balances and product lists are private and only
//! change through [`crate::service::ShoppingService`].
//!
//! ## Money Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Buyer                                         Seller                  │
//! │   balance −= price × qty  ──── purchase ────►   balance += price × qty  │
//! │   purchased.push(item)                          product.quantity −= qty │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use playbill_core::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ShopError, ShopResult, ValidationError};
use crate::product::Product;
use crate::validation::{validate_balance, validate_nickname};

// =============================================================================
// Purchased Item
// =============================================================================

/// A purchase recorded on the buyer.
///
/// Snapshot of the listing at purchase time; later restocks or price
/// changes on the seller side do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub total_price: Money,
    pub seller_nickname: String,
    pub purchased_at: DateTime<Utc>,
}

impl PurchasedItem {
    fn from_product(product: &Product, quantity: u32, total_price: Money) -> Self {
        PurchasedItem {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            total_price,
            seller_nickname: product.seller_nickname().to_string(),
            purchased_at: Utc::now(),
        }
    }
}

// =============================================================================
// Buyer
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    nickname: String,
    balance: Money,
    purchased: Vec<PurchasedItem>,
}

impl Buyer {
    /// Creates a buyer with an opening balance and no purchases.
    pub fn new(nickname: impl Into<String>, balance: Money) -> ShopResult<Self> {
        let nickname = nickname.into();
        validate_nickname(&nickname)?;
        validate_balance(balance)?;

        Ok(Buyer {
            nickname,
            balance,
            purchased: Vec::new(),
        })
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn products(&self) -> &[PurchasedItem] {
        &self.purchased
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Debits the buyer and records the purchase. Untouched on error.
    pub(crate) fn purchase(
        &mut self,
        product: &Product,
        quantity: u32,
        total_price: Money,
    ) -> ShopResult<PurchasedItem> {
        let balance = self
            .balance
            .checked_sub(total_price)
            .filter(|remaining| !remaining.is_negative())
            .ok_or_else(|| ShopError::InsufficientBalance {
                nickname: self.nickname.clone(),
                balance: self.balance,
                required: total_price,
            })?;

        let item = PurchasedItem::from_product(product, quantity, total_price);
        self.balance = balance;
        self.purchased.push(item.clone());
        Ok(item)
    }
}

// =============================================================================
// Seller
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    nickname: String,
    balance: Money,
    products: Vec<Product>,
}

impl Seller {
    /// Creates a seller with an opening balance and no listings.
    pub fn new(nickname: impl Into<String>, balance: Money) -> ShopResult<Self> {
        let nickname = nickname.into();
        validate_nickname(&nickname)?;
        validate_balance(balance)?;

        Ok(Seller {
            nickname,
            balance,
            products: Vec::new(),
        })
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Finds a listing by exact name.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Lists a new product. Names are unique per seller.
    pub(crate) fn register_product(
        &mut self,
        name: &str,
        price: Money,
        quantity: u32,
    ) -> ShopResult<Product> {
        if self.find_product(name).is_some() {
            return Err(ValidationError::Duplicate {
                field: "product".to_string(),
                value: name.to_string(),
            }
            .into());
        }

        let product = Product::new(name, price, quantity, self.nickname.clone());
        self.products.push(product.clone());
        Ok(product)
    }

    /// Takes stock off a listing and credits the seller. Untouched on error.
    pub(crate) fn sell_product(
        &mut self,
        product_id: Uuid,
        quantity: u32,
        total_price: Money,
    ) -> ShopResult<()> {
        let balance = self
            .balance
            .checked_add(total_price)
            .ok_or_else(|| ShopError::BalanceOverflow {
                nickname: self.nickname.clone(),
            })?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;

        if !product.can_sell(quantity) {
            return Err(ShopError::InsufficientStock {
                name: product.name().to_string(),
                available: product.quantity(),
                requested: quantity,
            });
        }

        product.remove_stock(quantity);
        self.balance = balance;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buyer_creation() {
        let buyer = Buyer::new("buyer123", Money::from_cents(2_000_000)).unwrap();

        assert_eq!(buyer.nickname(), "buyer123");
        assert_eq!(buyer.balance(), Money::from_cents(2_000_000));
        assert!(buyer.products().is_empty());
    }

    #[test]
    fn test_seller_creation() {
        let seller = Seller::new("seller123", Money::zero()).unwrap();

        assert_eq!(seller.nickname(), "seller123");
        assert!(seller.balance().is_zero());
        assert!(seller.products().is_empty());
    }

    #[test]
    fn test_actor_creation_validates() {
        assert!(matches!(
            Buyer::new("", Money::zero()),
            Err(ShopError::Validation(ValidationError::Required { .. }))
        ));
        assert!(Seller::new("seller123", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_seller_rejects_duplicate_listing() {
        let mut seller = Seller::new("seller123", Money::zero()).unwrap();
        seller
            .register_product("노트북", Money::from_cents(1_000_000), 5)
            .unwrap();

        let err = seller
            .register_product("노트북", Money::from_cents(900_000), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            ShopError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(seller.products().len(), 1);
    }

    #[test]
    fn test_registered_product_belongs_to_seller() {
        let mut seller = Seller::new("seller123", Money::zero()).unwrap();
        let product = seller
            .register_product("노트북", Money::from_cents(1_000_000), 5)
            .unwrap();

        assert_eq!(product.seller_nickname(), "seller123");
        assert_eq!(seller.find_product("노트북"), Some(&product));
        assert!(seller.find_product("마우스").is_none());
    }

    #[test]
    fn test_sell_unknown_product_leaves_seller() {
        let mut seller = Seller::new("seller123", Money::from_cents(500)).unwrap();
        seller
            .register_product("노트북", Money::from_cents(1_000_000), 5)
            .unwrap();

        let missing = Uuid::new_v4();
        let err = seller
            .sell_product(missing, 1, Money::from_cents(1_000_000))
            .unwrap_err();

        assert_eq!(err, ShopError::ProductNotFound(missing.to_string()));
        assert_eq!(seller.balance().cents(), 500);
        assert_eq!(seller.products()[0].quantity(), 5);
    }

    #[test]
    fn test_sell_product_balance_overflow() {
        let mut seller = Seller::new("seller123", Money::from_cents(i64::MAX - 10)).unwrap();
        let product = seller
            .register_product("노트북", Money::from_cents(100), 5)
            .unwrap();

        let err = seller
            .sell_product(product.id(), 1, Money::from_cents(100))
            .unwrap_err();

        assert_eq!(
            err,
            ShopError::BalanceOverflow {
                nickname: "seller123".to_string()
            }
        );
        assert_eq!(seller.balance().cents(), i64::MAX - 10);
        assert_eq!(seller.products()[0].quantity(), 5);
    }

    #[test]
    fn test_buyer_purchase_cannot_overdraw() {
        let mut buyer = Buyer::new("buyer123", Money::from_cents(500)).unwrap();
        let product = Product::new("마우스", Money::from_cents(1_000), 3, "seller123");

        let err = buyer
            .purchase(&product, 1, Money::from_cents(1_000))
            .unwrap_err();
        assert!(matches!(err, ShopError::InsufficientBalance { .. }));
        assert_eq!(buyer.balance().cents(), 500);
        assert!(buyer.products().is_empty());

        let item = buyer.purchase(&product, 1, Money::from_cents(500)).unwrap();
        assert!(buyer.balance().is_zero());
        assert_eq!(buyer.products(), &[item]);
    }
}
