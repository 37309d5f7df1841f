//! Import outcome reporting.
//!
//! [`super::import`] reports every attempt to an optional [`ImportObserver`]: successes with
//! [`ImportStats`], failures with an [`ImportSeverity`], and an extra alert callback once the
//! severity reaches the configured threshold. [`LogObserver`] forwards all of it to the `log`
//! facade, which is what the binary installs.

use std::fmt;
use std::sync::Arc;

use crate::error::ImportError;

use super::unified::ImportSourceKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (import rejected).
    Error,
    /// Critical error (the input could not be read at all).
    Critical,
}

/// Context about an import attempt.
#[derive(Debug, Clone)]
pub struct ImportContext {
    /// Which surface the import came through.
    pub kind: ImportSourceKind,
    /// Human-readable origin: a file path, or a short description for in-memory inputs.
    pub origin: String,
}

/// Stats reported on a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Number of imported works.
    pub works: usize,
    /// How many of them are placeholders for unavailable works.
    pub unavailable: usize,
    /// How many leading works were structurally validated. Anything past this was converted
    /// without a check.
    pub validated: usize,
}

impl ImportStats {
    /// Whether every imported work went through validation.
    pub fn fully_validated(&self) -> bool {
        self.validated >= self.works
    }
}

/// Observer interface for import outcomes.
pub trait ImportObserver: Send + Sync {
    /// Called when an import succeeds.
    fn on_success(&self, _ctx: &ImportContext, _stats: ImportStats) {}

    /// Called when an import fails.
    fn on_failure(&self, _ctx: &ImportContext, _severity: ImportSeverity, _error: &ImportError) {}

    /// Called when an import failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ImportObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn ImportObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ImportObserver for CompositeObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Reports import events through the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ImportObserver for LogObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        log::info!(
            "[import][ok] source={:?} origin={} works={} unavailable={} validated={}",
            ctx.kind,
            ctx.origin,
            stats.works,
            stats.unavailable,
            stats.validated
        );
        if !stats.fully_validated() {
            log::debug!(
                "[import] origin={} only the first {} of {} works were validated",
                ctx.origin,
                stats.validated,
                stats.works
            );
        }
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        log::warn!(
            "[import][{:?}] source={:?} origin={} err={}",
            severity,
            ctx.kind,
            ctx.origin,
            error
        );
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        log::error!(
            "[ALERT][import][{:?}] source={:?} origin={} err={}",
            severity,
            ctx.kind,
            ctx.origin,
            error
        );
    }
}
