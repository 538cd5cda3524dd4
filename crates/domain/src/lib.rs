//! # smarthome-domain
//!
//! Pure domain model for the smarthome device tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (lights, thermostats, cameras) and their capabilities
//! - Define the **`DeviceFactory`** that builds a device from a type tag
//! - Define **Rooms** (bounded, insertion-ordered device collections)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the binary.

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod factory;
pub mod room;
