//! HTTP inbound adapter serving the catalogue pages.

pub mod error;
pub mod health;
pub mod minerals;
pub mod state;
pub mod templates;

pub use error::ApiResult;
