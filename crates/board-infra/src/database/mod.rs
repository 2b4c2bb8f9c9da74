//! Post storage: the SQLite gateway and the repository built on it.

mod gateway;
mod post_repo;

pub mod entity;
pub mod seed;

pub use gateway::{DatabaseConfig, StorageGateway};
pub use post_repo::SqlitePostRepository;
