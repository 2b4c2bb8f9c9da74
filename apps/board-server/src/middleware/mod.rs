//! Middleware and response mapping.

pub mod error;
