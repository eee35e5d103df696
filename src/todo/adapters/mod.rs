//! Adapter implementations of the todo item ports.
//!
//! The in-memory adapter backs tests and database-less runs; the
//! `PostgreSQL` adapter is the production store.

pub mod memory;
pub mod postgres;
