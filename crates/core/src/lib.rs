//! Domain logic for the Tiendita storefront and back-office client.
//!
//! This crate is pure: cart line management, catalog filtering,
//! featured-product selection, order statuses, form validation, and the
//! table helpers used by the back-office views. All I/O (HTTP, persisted
//! state) lives in `tiendita-client`.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod products;
pub mod table;
pub mod users;
pub mod validate;
