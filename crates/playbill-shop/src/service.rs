//! # Shopping Service
//!
//! Registration and purchase between sellers and buyers.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase_product(buyer, seller, "노트북", 2)                           │
//! │       │                                                                 │
//! │       ├── qty == 0?              → Validation(MustBePositive)           │
//! │       ├── no listing?            → ProductNotFound                      │
//! │       ├── price × qty overflows? → PriceOverflow                        │
//! │       ├── balance < price × qty? → InsufficientBalance                  │
//! │       ├── stock < qty?           → InsufficientStock                    │
//! │       ├── seller balance full?   → BalanceOverflow                      │
//! │       │                                                                 │
//! │       └── OK → seller.sell_product(..) + buyer.purchase(..)             │
//! │                                                                         │
//! │  All checks run before either side is touched.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use playbill_core::Money;
use tracing::{info, warn};

use crate::actor::{Buyer, PurchasedItem, Seller};
use crate::error::{ShopError, ShopResult};
use crate::product::Product;
use crate::validation::{validate_price, validate_product_name, validate_quantity};

/// Stateless coordinator for shop operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShoppingService;

impl ShoppingService {
    pub fn new() -> Self {
        ShoppingService
    }

    /// Lists a product on the seller.
    ///
    /// Rejects non-positive price or quantity and duplicate names.
    pub fn register_product(
        &self,
        seller: &mut Seller,
        name: &str,
        price: Money,
        quantity: u32,
    ) -> ShopResult<Product> {
        let checked = validate_product_name(name)
            .and_then(|_| validate_price(price))
            .and_then(|_| validate_quantity(quantity));

        if let Err(err) = checked {
            warn!(seller = seller.nickname(), name, %err, "Product registration rejected");
            return Err(err.into());
        }

        let product = seller.register_product(name, price, quantity)?;
        info!(
            seller = seller.nickname(),
            name,
            price = price.cents(),
            quantity,
            "Product registered"
        );
        Ok(product)
    }

    /// Moves `quantity` units of `product_name` from seller to buyer.
    ///
    /// ## Returns
    /// The buyer-side purchase record.
    pub fn purchase_product(
        &self,
        buyer: &mut Buyer,
        seller: &mut Seller,
        product_name: &str,
        quantity: u32,
    ) -> ShopResult<PurchasedItem> {
        let result = Self::check_purchase(buyer, seller, product_name, quantity);
        let (product, total_price) = match result {
            Ok(ok) => ok,
            Err(err) => {
                warn!(
                    buyer = buyer.nickname(),
                    seller = seller.nickname(),
                    product_name,
                    quantity,
                    %err,
                    "Purchase rejected"
                );
                return Err(err);
            }
        };

        seller.sell_product(product.id(), quantity, total_price)?;
        let item = buyer.purchase(&product, quantity, total_price)?;

        info!(
            buyer = buyer.nickname(),
            seller = seller.nickname(),
            product_name,
            quantity,
            total = total_price.cents(),
            "Purchase completed"
        );
        Ok(item)
    }

    fn check_purchase(
        buyer: &Buyer,
        seller: &Seller,
        product_name: &str,
        quantity: u32,
    ) -> ShopResult<(Product, Money)> {
        validate_quantity(quantity)?;

        let product = seller
            .find_product(product_name)
            .ok_or_else(|| ShopError::ProductNotFound(product_name.to_string()))?;

        let total_price = product
            .total_price(quantity)
            .ok_or_else(|| ShopError::PriceOverflow {
                name: product.name().to_string(),
                quantity,
            })?;

        if !buyer.can_afford(total_price) {
            return Err(ShopError::InsufficientBalance {
                nickname: buyer.nickname().to_string(),
                balance: buyer.balance(),
                required: total_price,
            });
        }

        if !product.can_sell(quantity) {
            return Err(ShopError::InsufficientStock {
                name: product.name().to_string(),
                available: product.quantity(),
                requested: quantity,
            });
        }

        if seller.balance().checked_add(total_price).is_none() {
            return Err(ShopError::BalanceOverflow {
                nickname: seller.nickname().to_string(),
            });
        }

        Ok((product.clone(), total_price))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const LAPTOP: &str = "노트북";

    fn setup() -> (ShoppingService, Buyer, Seller) {
        let service = ShoppingService::new();
        let buyer = Buyer::new("buyer123", Money::from_cents(2_000_000)).unwrap();
        let mut seller = Seller::new("seller123", Money::from_cents(500_000)).unwrap();
        service
            .register_product(&mut seller, LAPTOP, Money::from_cents(1_000_000), 5)
            .unwrap();
        (service, buyer, seller)
    }

    #[test]
    fn test_register_product() {
        let (_, _, seller) = setup();

        let product = seller.find_product(LAPTOP).unwrap();
        assert_eq!(product.price().cents(), 1_000_000);
        assert_eq!(product.quantity(), 5);
        assert_eq!(product.seller_nickname(), "seller123");
    }

    #[test]
    fn test_register_rejects_non_positive_values() {
        let service = ShoppingService::new();
        let mut seller = Seller::new("seller123", Money::zero()).unwrap();

        let err = service
            .register_product(&mut seller, "무료", Money::zero(), 5)
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::Validation(ValidationError::MustBePositive {
                field: "price".to_string()
            })
        );

        let err = service
            .register_product(&mut seller, "품절", Money::from_cents(100), 0)
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::Validation(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );

        assert!(seller.products().is_empty());
    }

    #[test]
    fn test_purchase_moves_money_and_stock() {
        let (service, mut buyer, mut seller) = setup();

        let item = service
            .purchase_product(&mut buyer, &mut seller, LAPTOP, 2)
            .unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.total_price.cents(), 2_000_000);
        assert_eq!(item.seller_nickname, "seller123");

        assert!(buyer.balance().is_zero());
        assert_eq!(buyer.products().len(), 1);
        assert_eq!(seller.balance().cents(), 2_500_000);
        assert_eq!(seller.find_product(LAPTOP).unwrap().quantity(), 3);
    }

    #[test]
    fn test_purchase_unknown_product() {
        let (service, mut buyer, mut seller) = setup();

        let err = service
            .purchase_product(&mut buyer, &mut seller, "마우스", 1)
            .unwrap_err();
        assert_eq!(err, ShopError::ProductNotFound("마우스".to_string()));
    }

    #[test]
    fn test_purchase_insufficient_balance_leaves_state() {
        let (service, mut buyer, mut seller) = setup();

        let err = service
            .purchase_product(&mut buyer, &mut seller, LAPTOP, 3)
            .unwrap_err();
        assert!(matches!(err, ShopError::InsufficientBalance { .. }));

        assert_eq!(buyer.balance().cents(), 2_000_000);
        assert!(buyer.products().is_empty());
        assert_eq!(seller.balance().cents(), 500_000);
        assert_eq!(seller.find_product(LAPTOP).unwrap().quantity(), 5);
    }

    #[test]
    fn test_purchase_insufficient_stock() {
        let service = ShoppingService::new();
        let mut buyer = Buyer::new("rich", Money::from_cents(100_000_000)).unwrap();
        let (_, _, mut seller) = setup();

        let err = service
            .purchase_product(&mut buyer, &mut seller, LAPTOP, 6)
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientStock {
                name: LAPTOP.to_string(),
                available: 5,
                requested: 6,
            }
        );
        assert_eq!(buyer.balance().cents(), 100_000_000);
    }

    #[test]
    fn test_purchase_zero_quantity_rejected() {
        let (service, mut buyer, mut seller) = setup();

        let err = service
            .purchase_product(&mut buyer, &mut seller, LAPTOP, 0)
            .unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));
    }

    #[test]
    fn test_purchase_price_overflow_leaves_state() {
        let service = ShoppingService::new();
        let mut buyer = Buyer::new("rich", Money::from_cents(i64::MAX)).unwrap();
        let mut seller = Seller::new("seller123", Money::zero()).unwrap();
        service
            .register_product(&mut seller, "금괴", Money::from_cents(i64::MAX / 2), 5)
            .unwrap();

        let err = service
            .purchase_product(&mut buyer, &mut seller, "금괴", 3)
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::PriceOverflow {
                name: "금괴".to_string(),
                quantity: 3,
            }
        );

        assert_eq!(buyer.balance().cents(), i64::MAX);
        assert!(buyer.products().is_empty());
        assert!(seller.balance().is_zero());
        assert_eq!(seller.find_product("금괴").unwrap().quantity(), 5);
    }

    #[test]
    fn test_purchase_seller_balance_overflow_leaves_state() {
        let service = ShoppingService::new();
        let mut buyer = Buyer::new("buyer123", Money::from_cents(1_000)).unwrap();
        let mut seller = Seller::new("seller123", Money::from_cents(i64::MAX - 10)).unwrap();
        service
            .register_product(&mut seller, "마우스", Money::from_cents(100), 5)
            .unwrap();

        let err = service
            .purchase_product(&mut buyer, &mut seller, "마우스", 1)
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::BalanceOverflow {
                nickname: "seller123".to_string()
            }
        );

        assert_eq!(buyer.balance().cents(), 1_000);
        assert!(buyer.products().is_empty());
        assert_eq!(seller.balance().cents(), i64::MAX - 10);
        assert_eq!(seller.find_product("마우스").unwrap().quantity(), 5);
    }

    #[test]
    fn test_purchase_record_survives_sellout() {
        let service = ShoppingService::new();
        let mut buyer = Buyer::new("rich", Money::from_cents(100_000_000)).unwrap();
        let (_, _, mut seller) = setup();

        service
            .purchase_product(&mut buyer, &mut seller, LAPTOP, 5)
            .unwrap();

        assert_eq!(seller.find_product(LAPTOP).unwrap().quantity(), 0);
        assert_eq!(buyer.products()[0].unit_price.cents(), 1_000_000);

        let json = serde_json::to_value(&buyer.products()[0]).unwrap();
        assert_eq!(json["totalPrice"], 5_000_000);
    }
}
