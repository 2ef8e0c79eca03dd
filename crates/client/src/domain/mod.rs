//! Per-resource services and stores over the storefront API.

pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;
pub mod statuses;
pub mod users;
