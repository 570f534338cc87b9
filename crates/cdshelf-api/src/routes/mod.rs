//! # API Route Modules
//!
//! - `cds` — the record surface: list, create, delete under `/api/cds`.
//! - `health` — unauthenticated liveness/readiness probes.

pub mod cds;
pub mod health;
