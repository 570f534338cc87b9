//! # cdshelf-core — CD catalog domain model
//!
//! The record types, the store capability trait, and the in-memory store
//! shared by the API service and its tests.
//!
//! ## Crate Policy
//!
//! - No I/O beyond the in-memory store. Postgres lives in `cdshelf-api`.
//! - Every store outcome is either a value or a [`StoreError`]; there is
//!   deliberately no finer-grained error taxonomy at this boundary.

pub mod memory;
pub mod record;
pub mod store;

pub use memory::MemoryStore;
pub use record::{Cd, CdDraft};
pub use store::{CdStore, StoreError};
