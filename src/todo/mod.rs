//! Personal todo item management.
//!
//! Users create, read, edit, delete, search, and sort their own items. Every
//! lookup is scoped to the requesting owner. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
