//! Merchant entity.

use sea_orm::entity::prelude::*;

/// Merchant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "merchants")]
pub struct Model {
    /// Unique identifier for the merchant
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Merchant name
    pub name: String,
}

/// Merchants have no relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
