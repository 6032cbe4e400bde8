//! # playbill-shop: Shopping Domain Model
//!
//! In-memory buyers, sellers and products, plus the [`ShoppingService`]
//! that registers listings and performs purchases.
//!
//! ## Modules
//!
//! - [`actor`] - `Buyer`, `Seller`, `PurchasedItem`
//! - [`product`] - `Product`
//! - [`service`] - `ShoppingService`
//! - [`validation`] - input checks
//! - [`error`] - `ShopError`, `ValidationError`
//!
//! ## Example Usage
//!
//! ```rust
//! use playbill_core::Money;
//! use playbill_shop::{Buyer, Seller, ShoppingService};
//!
//! let service = ShoppingService::new();
//! let mut seller = Seller::new("seller123", Money::zero()).unwrap();
//! let mut buyer = Buyer::new("buyer123", Money::from_cents(2_000_000)).unwrap();
//!
//! service.register_product(&mut seller, "노트북", Money::from_cents(1_000_000), 5).unwrap();
//! service.purchase_product(&mut buyer, &mut seller, "노트북", 1).unwrap();
//!
//! assert_eq!(buyer.balance().cents(), 1_000_000);
//! assert_eq!(seller.find_product("노트북").unwrap().quantity(), 4);
//! ```

pub mod actor;
pub mod error;
pub mod product;
pub mod service;
pub mod validation;

pub use actor::{Buyer, PurchasedItem, Seller};
pub use error::{ShopError, ShopResult, ValidationError};
pub use product::Product;
pub use service::ShoppingService;
