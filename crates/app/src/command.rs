//! Command interface — one [`Command`] per console menu choice.
//!
//! The console layer builds a command from user input, hands it to
//! [`HomeController::execute`] and renders the [`Outcome`] or error.

use smarthome_domain::device::DeviceKind;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::DeviceId;
use smarthome_domain::room::RoomStatus;

use crate::services::home_controller::HomeController;

/// A request from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddRoom {
        room: String,
    },
    AddDevice {
        room: String,
        kind: String,
        name: String,
    },
    ShowAll,
    TurnAllOn {
        room: String,
    },
    ScheduleAll {
        room: String,
    },
    Exit,
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    RoomAdded {
        room: String,
    },
    DeviceAdded {
        room: String,
        device: String,
        id: DeviceId,
        kind: DeviceKind,
    },
    /// Status block per room, in room insertion order.
    Rooms(Vec<RoomStatus>),
    /// Confirmation messages from a bulk room operation.
    Messages(Vec<String>),
    /// The caller should leave its loop. The core holds nothing to tear down.
    Exit,
}

impl HomeController {
    /// Run a single command.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying operation returns: not found, invalid
    /// device type, or capacity exceeded.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, SmartHomeError> {
        match command {
            Command::AddRoom { room } => {
                self.add_room(&room)?;
                Ok(Outcome::RoomAdded { room })
            }
            Command::AddDevice { room, kind, name } => {
                let device = self.add_device(&room, &kind, &name)?;
                let (id, kind) = (device.id(), device.kind());
                Ok(Outcome::DeviceAdded {
                    room,
                    device: name,
                    id,
                    kind,
                })
            }
            Command::ShowAll => Ok(Outcome::Rooms(self.show_all_rooms())),
            Command::TurnAllOn { room } => self.turn_all_on(&room).map(Outcome::Messages),
            Command::ScheduleAll { room } => self.schedule_all(&room).map(Outcome::Messages),
            Command::Exit => Ok(Outcome::Exit),
        }
    }
}
