//! Domain primitives, ports and services.
//!
//! Purpose: define the mineral record model, the slug and selection rules
//! that drive browsing, and the services that implement the driving ports.
//! Adapters live in `inbound` and `outbound`; nothing here knows about HTTP
//! or SQL.
//!
//! Public surface:
//! - Mineral, MineralDraft, MineralId, MineralAttribute: the record model.
//! - ListSelection, ListFilter: selector precedence for list pages.
//! - slugify and friends: categorical value normalisation.
//! - MineralCatalogueService, MineralSeeder: port implementations.
//! - Error, ErrorCode, TraceId: transport-agnostic failures and correlation.

pub mod catalogue_service;
pub mod error;
pub mod list_selection;
pub mod mineral;
pub mod mineral_seeder;
pub mod ports;
pub mod slug;
pub mod trace_id;

pub use self::catalogue_service::MineralCatalogueService;
pub use self::error::{Error, ErrorCode};
pub use self::list_selection::{DEFAULT_LETTER, ListFilter, ListSelection};
pub use self::mineral::{
    DISPLAY_PRIORITY, Mineral, MineralAttribute, MineralDraft, MineralId, SEARCHABLE_ATTRIBUTES,
    UnknownAttribute,
};
pub use self::mineral_seeder::{MineralSeedOutcome, MineralSeeder, MineralSeedingError};
pub use self::slug::{raw_values_for_slug, slugify, slugify_all, unique_sorted_slugs};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
