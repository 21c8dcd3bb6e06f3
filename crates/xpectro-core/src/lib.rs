//! # xpectro-core - Core Domain Types
//!
//! Foundation crate for the Xpectro console. Provides domain types, the
//! search/status filter evaluator, the domain registry, demo data providers,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ViewId`] - Identifier of a navigable view
//! - [`Theme`] - Light/Dark
//! - [`DomainRecord`], [`TaskRecord`] - Records shown by the views
//!
//! ### Filtering (`filter`)
//! - [`FilterQuery`], [`StatusFilter`] - Search text plus status filter
//! - [`filter()`] - Stable case-insensitive filter over any record list
//!
//! ### Registry (`domain_registry`)
//! - [`DomainRegistry`] - Ordered in-memory collection of monitored domains
//!
//! ### Data (`demo_data`)
//! - [`DataProvider`] - Fixed-shape view data source
//! - [`DemoData`] - Built-in demo dataset
//!
//! ## Prelude
//!
//! ```rust
//! use xpectro_core::prelude::*;
//! ```

pub mod demo_data;
pub mod domain_registry;
pub mod error;
pub mod filter;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Xpectro crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use demo_data::{
    DataProvider, DemoData, DetectionContent, DistributionSlice, PricingPlan, RadarAxis,
    ScanPoint, StatCard, ThreatPoint,
};
pub use domain_registry::DomainRegistry;
pub use error::{Error, Result, ResultExt};
pub use filter::{filter, FilterQuery, Searchable, StatusFilter};
pub use types::{
    DetectionKind, DomainRecord, DomainStatus, Protocol, TaskRecord, TaskStatus, Theme, ViewId,
};
