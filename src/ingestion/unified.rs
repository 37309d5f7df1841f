//! Unified import entrypoint.
//!
//! Most callers should use [`import`], which reads an [`ImportSource`] into a `Vec<Work>`.
//!
//! - Every surface ends in the same structural validation, governed by
//!   [`ImportOptions::validation`].
//! - If an [`super::observability::ImportObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ImportError, ImportResult};
use crate::types::Work;

use super::observability::{ImportContext, ImportObserver, ImportSeverity, ImportStats};
use super::validate::ValidationMode;
use super::{json, url};

/// Where an import comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// A history export file on disk.
    File(PathBuf),
    /// Export JSON already held in memory (e.g. a dropped file's contents).
    Text(String),
    /// The raw value of a share link's `data` parameter.
    DataParam(String),
    /// A full share link (or query string) containing a `data` parameter.
    Url(String),
}

impl ImportSource {
    pub fn kind(&self) -> ImportSourceKind {
        match self {
            Self::File(_) => ImportSourceKind::File,
            Self::Text(_) => ImportSourceKind::Text,
            Self::DataParam(_) | Self::Url(_) => ImportSourceKind::Url,
        }
    }

    fn origin(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Text(text) => format!("<{} bytes of text>", text.len()),
            Self::DataParam(value) => format!("<data parameter, {} chars>", value.len()),
            Self::Url(_) => "<share link>".to_string(),
        }
    }
}

/// Import surface, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSourceKind {
    File,
    Text,
    Url,
}

/// Options controlling unified import behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ImportOptions {
    /// How many leading works are structurally validated.
    pub validation: ValidationMode,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ImportObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ImportSeverity,
}

impl fmt::Debug for ImportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportOptions")
            .field("validation", &self.validation)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            validation: ValidationMode::default(),
            observer: None,
            alert_at_or_above: ImportSeverity::Critical,
        }
    }
}

/// Unified import entry point.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with work counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use ao3_history::ingestion::{import, ImportOptions, ImportSource, LogObserver};
///
/// # fn main() -> Result<(), ao3_history::ImportError> {
/// let opts = ImportOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let works = import(&ImportSource::File("ao3_history.json".into()), &opts)?;
/// println!("works={}", works.len());
/// # Ok(())
/// # }
/// ```
pub fn import(source: &ImportSource, options: &ImportOptions) -> ImportResult<Vec<Work>> {
    let mode = options.validation;
    let result = match source {
        ImportSource::File(path) => json::import_json_from_path(path, mode),
        ImportSource::Text(text) => json::import_json_from_str(text, mode),
        ImportSource::DataParam(value) => url::import_from_data_param(value, mode),
        ImportSource::Url(link) => url::import_from_url(link, mode),
    };

    if let Some(obs) = options.observer.as_ref() {
        let ctx = ImportContext {
            kind: source.kind(),
            origin: source.origin(),
        };
        match &result {
            Ok(works) => obs.on_success(
                &ctx,
                ImportStats {
                    works: works.len(),
                    unavailable: works.iter().filter(|w| w.is_unavailable()).count(),
                    validated: mode.limit(works.len()),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Convenience wrapper for [`import`] with a file path.
pub fn import_from_path(path: impl AsRef<Path>, options: &ImportOptions) -> ImportResult<Vec<Work>> {
    import(&ImportSource::File(path.as_ref().to_path_buf()), options)
}

fn severity_for_error(e: &ImportError) -> ImportSeverity {
    match e {
        ImportError::Io(_) => ImportSeverity::Critical,
        ImportError::Decode { .. } => ImportSeverity::Error,
        ImportError::Schema { .. } => ImportSeverity::Error,
    }
}
