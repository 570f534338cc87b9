//! # cdshelf-cli — terminal client for the cdshelf API
//!
//! A pure view over the three HTTP calls: it fetches, mutates, and renders
//! records, and holds no business rules. After every successful mutation
//! it re-fetches the full list rather than patching local state.

pub mod client;
pub mod render;
