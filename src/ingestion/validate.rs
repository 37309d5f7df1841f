//! Structural validation of untrusted JSON before it is turned into [`crate::types::Work`]s.
//!
//! The check runs on the decoded [`serde_json::Value`], so it can name the first field that is
//! missing or has the wrong kind instead of surfacing a serde error.
//!
//! By default only the first [`DEFAULT_SAMPLE_SIZE`] elements are inspected. Exports are
//! produced by a single scraper run, so the shape of the leading elements is taken to hold for
//! the rest; [`ValidationMode::Exhaustive`] checks every element instead. Either way, one bad
//! element rejects the whole payload.

use serde_json::{Map, Value};

use crate::error::{ImportError, ImportResult};

/// Number of leading elements inspected by [`ValidationMode::Sampled`] by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// How much of the collection to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Validate at most this many leading elements.
    Sampled(usize),
    /// Validate every element.
    Exhaustive,
}

impl Default for ValidationMode {
    fn default() -> Self {
        Self::Sampled(DEFAULT_SAMPLE_SIZE)
    }
}

impl ValidationMode {
    /// How many of `len` elements this mode inspects.
    pub fn limit(self, len: usize) -> usize {
        match self {
            Self::Sampled(n) => len.min(n),
            Self::Exhaustive => len,
        }
    }
}

/// Returns `true` if `payload` looks like a reading-history export.
pub fn is_valid_history(payload: &Value, mode: ValidationMode) -> bool {
    validate_history(payload, mode).is_ok()
}

/// Validate `payload`, returning a [`ImportError::Schema`] naming the first violation.
pub fn validate_history(payload: &Value, mode: ValidationMode) -> ImportResult<()> {
    let items = payload
        .as_array()
        .ok_or_else(|| ImportError::schema("expected a JSON array of works"))?;

    let limit = mode.limit(items.len());
    for (idx0, item) in items.iter().take(limit).enumerate() {
        validate_work(item).map_err(|message| {
            ImportError::schema(format!("work {}: {message}", idx0 + 1))
        })?;
    }
    Ok(())
}

fn validate_work(item: &Value) -> Result<(), String> {
    let work = item
        .as_object()
        .ok_or_else(|| "not a JSON object".to_string())?;

    for key in ["id", "title", "author"] {
        require(work, key, Kind::String)?;
    }
    require(work, "fandoms", Kind::Array)?;
    for key in ["rating", "category", "completion"] {
        require(work, key, Kind::String)?;
    }

    let tags = require_object(work, "tags")?;
    for key in ["warnings", "relationships", "characters", "freeforms"] {
        require(tags, key, Kind::Array).map_err(|e| format!("tags.{e}"))?;
    }

    let stats = require_object(work, "stats")?;
    for key in ["wordCount", "kudos"] {
        require(stats, key, Kind::Number).map_err(|e| format!("stats.{e}"))?;
    }

    let user_stats = require_object(work, "userStats")?;
    require(user_stats, "lastVisited", Kind::String).map_err(|e| format!("userStats.{e}"))?;
    require(user_stats, "visits", Kind::Number).map_err(|e| format!("userStats.{e}"))?;

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    String,
    Number,
    Array,
}

impl Kind {
    fn matches(self, v: &Value) -> bool {
        match self {
            Self::String => v.is_string(),
            Self::Number => v.is_number(),
            Self::Array => v.is_array(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
        }
    }
}

fn require(obj: &Map<String, Value>, key: &str, kind: Kind) -> Result<(), String> {
    match obj.get(key) {
        None => Err(format!("{key} is missing")),
        Some(v) if kind.matches(v) => Ok(()),
        Some(v) => Err(format!("{key} must be a {}, got {}", kind.name(), kind_of(v))),
    }
}

fn require_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, String> {
    match obj.get(key) {
        Some(Value::Object(inner)) => Ok(inner),
        Some(v) => Err(format!("{key} must be an object, got {}", kind_of(v))),
        None => Err(format!("{key} is missing")),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
