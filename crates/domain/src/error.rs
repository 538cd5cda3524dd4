//! Common error types used across the workspace.
//!
//! Each failure kind is its own typed error, folded into [`SmartHomeError`]
//! via `#[from]`. Every variant is recoverable at the call site.

/// Base error for all smarthome operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    /// A named room (or device) does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The device factory does not recognise the type tag.
    #[error("invalid device type")]
    InvalidDeviceType(#[from] InvalidDeviceTypeError),

    /// A bounded collection is full.
    #[error("capacity exceeded")]
    CapacityExceeded(#[from] CapacityError),

    /// The device kind lacks the requested capability.
    #[error("unsupported operation")]
    Unsupported(#[from] UnsupportedError),
}

/// A lookup by name found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {name}")]
pub struct NotFoundError {
    /// Kind of thing that was looked up (e.g. `"Room"`).
    pub entity: &'static str,
    /// Name that was searched for.
    pub name: String,
}

/// A type tag that no device kind answers to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device type {tag:?}")]
pub struct InvalidDeviceTypeError {
    /// The rejected tag, verbatim.
    pub tag: String,
}

/// Insertion into a bounded collection that is already at its limit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{container} is full (limit {limit})")]
pub struct CapacityError {
    /// What is full (e.g. `"Room Kitchen"` or `"HomeController"`).
    pub container: String,
    /// The configured limit.
    pub limit: usize,
}

/// Capability operation invoked on a device kind that does not provide it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{device} ({kind}) does not support {capability}")]
pub struct UnsupportedError {
    /// Device name.
    pub device: String,
    /// Device kind, as displayed.
    pub kind: &'static str,
    /// The missing capability.
    pub capability: &'static str,
}
