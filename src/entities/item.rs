//! Item entity - Represents a priced catalogue item.
//!
//! Items stand alone: they carry a name, an optional description, a price that
//! defaults to `0.12` at the wire layer, and an optional tax amount.

use sea_orm::entity::prelude::*;

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier assigned by the database
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the item
    pub name: String,
    /// Free-form description, if any
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Tax amount, if any
    pub tax: Option<f64>,
}

/// Items have no relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
