//! # Board Core
//!
//! The domain layer of the bulletin board.
//! This crate contains the post model, the repository port, and the
//! pagination and validation rules applied before a request reaches storage.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod validation;

pub use error::StorageError;
pub use pagination::{Page, PageRequest};
pub use validation::{Field, ValidationErrors};
