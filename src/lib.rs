//! Minions Venues SDK
//!
//! Tent definitions, capacities, reservation rules, and opening schedules for
//! Oktoberfest, published as MinionType schemas for a host plugin framework.
//!
//! ## Features
//!
//! - **Custom Types**: four static schemas, see [`custom_types`]
//! - **Client Factory**: [`create_client`] stamps caller options with [`VERSION`]
//! - **Type Registry**: id/slug lookup with fuzzy suggestions
//! - **Catalog Export**: checksummed JSON snapshot of the types
//!
//! ## Example
//!
//! ```
//! use minions_venues::{create_client, custom_types, ClientOptions};
//!
//! let client = create_client(ClientOptions::new());
//! assert_eq!(client.version(), Some("0.1.0"));
//! assert_eq!(custom_types().len(), 4);
//! ```

pub mod catalog;
pub mod checksum;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod schema;
pub mod types;

pub use catalog::Catalog;
pub use checksum::Checksum;
pub use client::{create_client, ClientConfig, ClientOptions};
pub use config::VenuesConfig;
pub use error::{Result, VenuesError};
pub use registry::TypeRegistry;
pub use schema::{FieldDefinition, FieldType, MinionType};
pub use types::{
    custom_types, opening_schedule_type, reservation_rule_type, tent_area_type, tent_type,
};

/// SDK version
pub const VERSION: &str = "0.1.0";

/// Project description shown by the CLI
pub const DESCRIPTION: &str =
    "Tent definitions, capacities, reservation rules, and opening schedules for Oktoberfest";

/// Parsed SDK version
pub fn version() -> Result<semver::Version> {
    Ok(semver::Version::parse(VERSION)?)
}
