//! # spacedeck-core - Core Domain Types
//!
//! Foundation crate for Spacedeck. Provides the resource catalog, the record
//! and draft models, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Resource Catalog (`resource`)
//! - [`CATALOG`] - Static table describing every admin view
//! - [`ResourceSpec`] - One view: endpoint, fields, filters, actions, labels
//! - [`FieldSpec`], [`FieldKind`] - Field descriptions driving forms and tables
//! - [`RowActions`] - Which row actions (edit, delete, approve) a view offers
//!
//! ### Records (`record`)
//! - [`Record`] - One backend record: `_id` plus a flattened field map
//! - [`DELETED_FLAG`], [`APPROVED_FLAG`] - Marker field names
//!
//! ### Drafts (`draft`)
//! - [`Draft`] - Raw form input keyed by field name, with required-field checks
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use spacedeck_core::prelude::*;
//! ```

pub mod draft;
pub mod error;
pub mod logging;
pub mod record;
pub mod resource;

/// Prelude for common imports used throughout all Spacedeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use draft::Draft;
pub use error::{Error, Result, ResultExt};
pub use record::{Record, APPROVED_FLAG, DELETED_FLAG};
pub use resource::{
    resource_by_slug, FieldKind, FieldSpec, ResourceSpec, RowActions, CATALOG,
};
