//! Home controller — the registry of rooms and the entry point for every
//! room-level operation.

use serde::Deserialize;

use smarthome_domain::device::Device;
use smarthome_domain::error::{CapacityError, InvalidDeviceTypeError, NotFoundError, SmartHomeError};
use smarthome_domain::factory::DeviceFactory;
use smarthome_domain::room::{DEFAULT_DEVICE_CAPACITY, Room, RoomStatus};

/// Rooms a controller holds unless configured otherwise.
pub const DEFAULT_MAX_ROOMS: usize = 5;

/// Size bounds applied by a [`HomeController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of rooms.
    pub max_rooms: usize,
    /// Maximum number of devices in a single room.
    pub max_devices_per_room: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rooms: DEFAULT_MAX_ROOMS,
            max_devices_per_room: DEFAULT_DEVICE_CAPACITY,
        }
    }
}

/// Owns every room, in insertion order.
///
/// Room names are not required to be unique; lookups return the first room
/// with a matching name.
#[derive(Debug, Default)]
pub struct HomeController {
    limits: Limits,
    rooms: Vec<Room>,
}

impl HomeController {
    /// Create an empty controller with the given limits.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            rooms: Vec::new(),
        }
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Rooms in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// First room called `name`.
    #[must_use]
    pub fn get_room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name() == name)
    }

    /// First room called `name`, mutably.
    pub fn get_room_by_name_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.name() == name)
    }

    /// Append a new empty room.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::CapacityExceeded`] once `max_rooms` rooms
    /// exist; nothing is added.
    #[tracing::instrument(skip(self))]
    pub fn add_room(&mut self, name: &str) -> Result<&Room, SmartHomeError> {
        if self.rooms.len() >= self.limits.max_rooms {
            tracing::warn!(limit = self.limits.max_rooms, "maximum room limit reached");
            return Err(CapacityError {
                container: "HomeController".to_string(),
                limit: self.limits.max_rooms,
            }
            .into());
        }

        let room = Room::with_capacity(name, self.limits.max_devices_per_room);
        tracing::debug!(room_id = %room.id(), "room added");
        self.rooms.push(room);
        Ok(&self.rooms[self.rooms.len() - 1])
    }

    /// Build a device from `tag` and place it in the room called `room`.
    ///
    /// The room is resolved before the tag is parsed. The device's location
    /// is the room name.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] for an unknown room,
    /// [`SmartHomeError::InvalidDeviceType`] for an unknown tag, and
    /// [`SmartHomeError::CapacityExceeded`] for a full room. State is only
    /// changed on success.
    #[tracing::instrument(skip(self))]
    pub fn add_device(
        &mut self,
        room: &str,
        tag: &str,
        device_name: &str,
    ) -> Result<&Device, SmartHomeError> {
        let target = self.room_mut(room)?;

        let Some(device) = DeviceFactory::create(tag, device_name, room) else {
            tracing::warn!("invalid device type");
            return Err(InvalidDeviceTypeError {
                tag: tag.to_string(),
            }
            .into());
        };

        let device_id = device.id();
        if let Err(err) = target.add_device(device) {
            tracing::warn!(%err, "room is full");
            return Err(err);
        }
        tracing::debug!(%device_id, "device added");

        let devices = target.devices();
        Ok(&devices[devices.len() - 1])
    }

    /// Switch on every device in the room called `room`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] for an unknown room.
    #[tracing::instrument(skip(self))]
    pub fn turn_all_on(&mut self, room: &str) -> Result<Vec<String>, SmartHomeError> {
        let messages = self.room_mut(room)?.turn_all_on();
        tracing::debug!(devices = messages.len(), "room switched on");
        Ok(messages)
    }

    /// Run the evening routine on every device in the room called `room`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] for an unknown room.
    #[tracing::instrument(skip(self))]
    pub fn schedule_all(&mut self, room: &str) -> Result<Vec<String>, SmartHomeError> {
        let messages = self.room_mut(room)?.schedule_all()?;
        tracing::debug!(messages = messages.len(), "room scheduled");
        Ok(messages)
    }

    /// Status block of every room, in insertion order.
    #[must_use]
    pub fn show_all_rooms(&self) -> Vec<RoomStatus> {
        self.rooms.iter().map(Room::status).collect()
    }

    fn room_mut(&mut self, name: &str) -> Result<&mut Room, SmartHomeError> {
        match self.rooms.iter_mut().find(|r| r.name() == name) {
            Some(room) => Ok(room),
            None => {
                tracing::warn!(room = name, "room not found");
                Err(NotFoundError {
                    entity: "Room",
                    name: name.to_string(),
                }
                .into())
            }
        }
    }
}
