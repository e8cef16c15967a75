//! Query modules for the catalog client.
//!
//! Each module provides a query struct that borrows from a
//! [`CatalogClient`](crate::CatalogClient) and exposes methods returning
//! `Result<T>`.

pub mod cards;

pub use cards::{CardQuery, SearchCardsParams};
