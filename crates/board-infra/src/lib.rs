//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//! This crate owns the SQLite connection, the `posts` schema and seed data,
//! and the repository that runs post queries through them.

pub mod database;

pub use database::{DatabaseConfig, SqlitePostRepository, StorageGateway};
