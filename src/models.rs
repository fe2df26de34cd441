//! Wire types - the JSON bodies accepted and returned by the HTTP layer.
//!
//! These are kept apart from the persistence records in [`crate::entities`];
//! every conversion between the two is an explicit `From` impl below.

use crate::entities::{item, merchant, transaction, wallet};
use serde::{Deserialize, Serialize};

/// Price applied when an item payload omits one.
pub const DEFAULT_ITEM_PRICE: f64 = 0.12;

const fn default_price() -> f64 {
    DEFAULT_ITEM_PRICE
}

/// Body of `POST /items` and `PUT /items/{item_id}`.
///
/// A PUT is a full replacement: omitted optional fields reset to `null`
/// and an omitted price resets to [`DEFAULT_ITEM_PRICE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    /// Display name (required)
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price, [`DEFAULT_ITEM_PRICE`] when omitted
    #[serde(default = "default_price")]
    pub price: f64,
    /// Optional tax amount
    #[serde(default)]
    pub tax: Option<f64>,
}

/// An item as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Database-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Description, `null` when unset
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Tax amount, `null` when unset
    pub tax: Option<f64>,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            tax: model.tax,
        }
    }
}

/// Response of `GET /items`. Pagination is declared but not implemented,
/// so the three counters are always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    /// Every stored item, ordered by id
    pub items: Vec<Item>,
    /// Always 0
    pub page: u32,
    /// Always 0
    pub page_size: u32,
    /// Always 0
    pub size_per_page: u32,
}

impl ItemList {
    /// Wraps `items` with all pagination counters set to zero.
    #[must_use]
    pub fn unpaged(items: Vec<Item>) -> Self {
        Self {
            items,
            page: 0,
            page_size: 0,
            size_per_page: 0,
        }
    }
}

/// Body of `POST /wallets`. The caller chooses the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletPayload {
    /// Primary key for the new wallet
    pub id: i64,
    /// Opening balance
    pub balance: f64,
}

/// A wallet as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet identifier
    pub id: i64,
    /// Current balance
    pub balance: f64,
}

impl From<wallet::Model> for Wallet {
    fn from(model: wallet::Model) -> Self {
        Self {
            id: model.id,
            balance: model.balance,
        }
    }
}

/// Body of `POST /merchant/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantPayload {
    /// Primary key for the new merchant
    pub id: i64,
    /// Merchant name
    pub name: String,
}

/// A merchant as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    /// Merchant identifier
    pub id: i64,
    /// Merchant name
    pub name: String,
}

impl From<merchant::Model> for Merchant {
    fn from(model: merchant::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Body of `POST /transaction/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Primary key for the new transaction
    pub id: i64,
    /// Paying user
    pub user_id: i64,
    /// Amount paid
    pub amount: f64,
    /// Receiving merchant, not checked for existence
    pub merchant_id: i64,
}

/// A transaction as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier
    pub id: i64,
    /// Paying user
    pub user_id: i64,
    /// Amount paid
    pub amount: f64,
    /// Receiving merchant
    pub merchant_id: i64,
}

impl From<transaction::Model> for Transaction {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            amount: model.amount,
            merchant_id: model.merchant_id,
        }
    }
}

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Human-readable text
    pub message: String,
}

impl Message {
    /// Builds a message body from any string-like value.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
