//! Application services — use-case implementations.

pub mod home_controller;
