//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities are the persistence records; the JSON shapes served over HTTP
//! live in [`crate::models`] and are mapped from these explicitly.

pub mod item;
pub mod merchant;
pub mod transaction;
pub mod wallet;

// Re-export specific types to avoid conflicts
pub use item::{Column as ItemColumn, Entity as Item, Model as ItemModel};
pub use merchant::{Column as MerchantColumn, Entity as Merchant, Model as MerchantModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
pub use wallet::{Column as WalletColumn, Entity as Wallet, Model as WalletModel};
