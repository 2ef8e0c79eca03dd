//! Categories: catalog listing and back-office CRUD.

mod errors;
mod service;

pub use errors::CategoriesError;
pub use service::{CategoriesService, HttpCategoriesService, MockCategoriesService};
