//! # smarthome — console front end
//!
//! Composition root that wires configuration, logging and the controller
//! together and hands the console to the menu loop.
//!
//! ## Responsibilities
//! - Load configuration (`smarthome.toml`, env vars)
//! - Install the `tracing` subscriber (stderr, so it never mixes with menu output)
//! - Construct the [`HomeController`] with the configured limits
//! - Run the [`Menu`] on stdin/stdout until Exit or end of input
//!
//! ## Dependency rule
//! This is the **only** crate that does console IO.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod menu;

use anyhow::Context;
use smarthome_app::services::home_controller::HomeController;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::menu::Menu;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        max_rooms = config.limits.max_rooms,
        max_devices_per_room = config.limits.max_devices_per_room,
        "smarthome starting"
    );

    let mut controller = HomeController::new(config.limits);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), config.output.format)
        .run(&mut controller)
        .context("console I/O failed")?;

    tracing::info!(rooms = controller.room_count(), "smarthome stopped");
    Ok(())
}
