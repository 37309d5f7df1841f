//! Import entrypoints and implementations.
//!
//! Most callers should use [`import`] (from [`unified`]) which:
//!
//! - decodes the input (file, in-memory text, or share-link `data` parameter)
//! - validates its structure and converts it into [`crate::types::Work`]s
//! - optionally reports success/failure/alerts to an [`ImportObserver`]
//!
//! Surface-specific functions are also available under:
//! - [`json`]
//! - [`url`]
//! - [`validate`]

pub mod json;
pub mod observability;
pub mod unified;
pub mod url;
pub mod validate;

pub use observability::{
    CompositeObserver, ImportContext, ImportObserver, ImportSeverity, ImportStats, LogObserver,
};
pub use unified::{ImportOptions, ImportSource, ImportSourceKind, import, import_from_path};
pub use validate::{DEFAULT_SAMPLE_SIZE, ValidationMode, is_valid_history, validate_history};
