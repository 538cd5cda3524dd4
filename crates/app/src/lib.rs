//! # smarthome-app
//!
//! Application layer — use-cases over the domain model.
//!
//! ## Responsibilities
//! - Own every [`Room`](smarthome_domain::room::Room) through the
//!   [`HomeController`](services::home_controller::HomeController)
//! - Route operations to the right room by name
//! - Expose one [`Command`](command::Command) per console menu choice and
//!   turn each into an [`Outcome`](command::Outcome) or a typed error
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only (plus `tracing`).
//! Never prints; every message travels back to the caller as a value.

pub mod command;
pub mod services;
