//! Wallet entity - A balance holder.
//!
//! No operation in the service adjusts `balance` after creation.

use sea_orm::entity::prelude::*;

/// Wallet database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    /// Unique identifier for the wallet
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Current balance
    pub balance: f64,
}

/// Wallets have no relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
