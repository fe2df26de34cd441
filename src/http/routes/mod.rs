//! Route handlers, organized by resource type:
//! - root: greeting and health check
//! - items: full CRUD
//! - wallets, merchants, transactions: create and read

pub mod items;
pub mod merchants;
pub mod root;
pub mod transactions;
pub mod wallets;
