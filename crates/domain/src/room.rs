//! Room — a named, bounded collection of devices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceKind};
use crate::error::{CapacityError, SmartHomeError};
use crate::id::RoomId;

/// Devices a room holds unless configured otherwise.
pub const DEFAULT_DEVICE_CAPACITY: usize = 10;

/// When [`Room::schedule_all`] announces lights turning on.
pub const LIGHT_SCHEDULE_ON_AT: &str = "6:00 PM";
/// When [`Room::schedule_all`] announces thermostats turning off.
pub const THERMOSTAT_SCHEDULE_OFF_AT: &str = "10:00 PM";
/// Set point [`Room::schedule_all`] gives every thermostat.
pub const THERMOSTAT_SCHEDULED_TEMPERATURE: i32 = 23;

/// A room and the devices it owns, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    capacity: usize,
    devices: Vec<Device>,
}

impl Room {
    /// Create an empty room holding up to [`DEFAULT_DEVICE_CAPACITY`] devices.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, DEFAULT_DEVICE_CAPACITY)
    }

    /// Create an empty room holding up to `capacity` devices.
    #[must_use]
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: RoomId::new(),
            name: name.into(),
            capacity,
            devices: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// First device called `name`.
    #[must_use]
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name() == name)
    }

    /// First device called `name`, mutably.
    pub fn device_mut(&mut self, name: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.name() == name)
    }

    /// Append a device.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::CapacityExceeded`] when the room is full;
    /// the room is left untouched.
    pub fn add_device(&mut self, device: Device) -> Result<(), SmartHomeError> {
        if self.devices.len() >= self.capacity {
            return Err(CapacityError {
                container: format!("Room {}", self.name),
                limit: self.capacity,
            }
            .into());
        }
        self.devices.push(device);
        Ok(())
    }

    /// Switch every device on, returning one message per device.
    pub fn turn_all_on(&mut self) -> Vec<String> {
        let mut messages = Vec::with_capacity(self.devices.len());
        for kind in DeviceKind::ALL {
            for device in self.devices.iter_mut().filter(|d| d.kind() == kind) {
                messages.push(device.turn_on());
            }
        }
        messages
    }

    /// Run the per-kind evening routine on every device.
    ///
    /// Lights announce turning on at [`LIGHT_SCHEDULE_ON_AT`]; thermostats
    /// announce turning off at [`THERMOSTAT_SCHEDULE_OFF_AT`] and are set to
    /// [`THERMOSTAT_SCHEDULED_TEMPERATURE`]; cameras start recording.
    ///
    /// # Errors
    ///
    /// Propagates [`SmartHomeError::Unsupported`], which the per-kind
    /// dispatch never triggers.
    pub fn schedule_all(&mut self) -> Result<Vec<String>, SmartHomeError> {
        let mut messages = Vec::new();
        for kind in DeviceKind::ALL {
            for device in self.devices.iter_mut().filter(|d| d.kind() == kind) {
                match kind {
                    DeviceKind::Light => {
                        messages.push(device.schedule_on(LIGHT_SCHEDULE_ON_AT)?);
                    }
                    DeviceKind::Thermostat => {
                        messages.push(device.schedule_off(THERMOSTAT_SCHEDULE_OFF_AT)?);
                        messages.push(device.set_temperature(THERMOSTAT_SCHEDULED_TEMPERATURE)?);
                    }
                    DeviceKind::Camera => messages.push(device.start_recording()?),
                }
            }
        }
        Ok(messages)
    }

    /// Status line of every device: lights, then thermostats, then cameras,
    /// each group in insertion order.
    #[must_use]
    pub fn show_devices(&self) -> Vec<String> {
        DeviceKind::ALL
            .iter()
            .flat_map(|kind| self.devices.iter().filter(move |d| d.kind() == *kind))
            .map(Device::status)
            .collect()
    }

    /// Snapshot of [`show_devices`](Self::show_devices) labelled with the room.
    #[must_use]
    pub fn status(&self) -> RoomStatus {
        RoomStatus {
            id: self.id,
            room: self.name.clone(),
            devices: self.show_devices(),
        }
    }
}

/// One room's block in a "show all" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    pub id: RoomId,
    pub room: String,
    pub devices: Vec<String>,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Devices in Room: {}", self.room)?;
        for line in &self.devices {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
