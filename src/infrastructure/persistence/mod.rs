//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Concurrent in-memory link registry

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
