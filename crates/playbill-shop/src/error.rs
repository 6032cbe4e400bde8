//! # Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ShopError
//! ├── ProductNotFound       - seller has no listing with that name
//! ├── InsufficientBalance   - buyer cannot afford price × quantity
//! ├── InsufficientStock     - seller has fewer units than requested
//! ├── PriceOverflow         - price × quantity does not fit in i64 cents
//! ├── BalanceOverflow       - seller balance would not fit in i64 cents
//! └── Validation            - wraps ValidationError (bad input)
//! ```

use playbill_core::Money;
use thiserror::Error;

// =============================================================================
// Shop Error
// =============================================================================

/// Shopping operation errors.
///
/// Every rejection leaves buyer and seller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// ## User Workflow
    /// ```text
    /// purchase_product("노트북", qty: 2)
    ///      │
    ///      ▼
    /// total = $10,000.00 × 2, balance = $15,000.00
    ///      │
    ///      ▼
    /// InsufficientBalance { nickname: "buyer123", .. }
    /// ```
    #[error("Insufficient balance for {nickname}: balance {balance}, required {required}")]
    InsufficientBalance {
        nickname: String,
        balance: Money,
        required: Money,
    },

    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    #[error("Total price overflows for {name} × {quantity}")]
    PriceOverflow { name: String, quantity: u32 },

    #[error("Balance overflows for {nickname}")]
    BalanceOverflow { nickname: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., product name already listed by this seller).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
