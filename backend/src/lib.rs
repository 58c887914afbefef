//! Mineral catalogue backend.
//!
//! A server-rendered catalogue of minerals browsable by first letter,
//! category and streak, with free-text search and a detail page per record.
//! Storage is PostgreSQL via Diesel or an in-process store.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod server;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
