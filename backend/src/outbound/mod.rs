//! Outbound adapters implementing the mineral repository port.
//!
//! - **persistence**: PostgreSQL via Diesel, `diesel-async` and `bb8`
//! - **memory**: process-local store for tests and database-less runs

pub mod memory;
pub mod persistence;
