//! Transaction entity - A payment record between a user and a merchant.
//!
//! `user_id` and `merchant_id` are plain integers. No foreign keys are declared,
//! so a transaction may reference a merchant or wallet that does not exist, and
//! recording one never touches any wallet balance.

use sea_orm::entity::prelude::*;

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Paying user
    pub user_id: i64,
    /// Transaction amount
    pub amount: f64,
    /// Receiving merchant
    pub merchant_id: i64,
}

/// Transactions are deliberately unrelated to merchants and wallets
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
