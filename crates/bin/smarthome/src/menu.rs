//! Numbered console menu — reads choices and names, turns them into
//! [`Command`]s and prints what comes back.

use std::io::{self, BufRead, Write};

use smarthome_app::command::{Command, Outcome};
use smarthome_app::services::home_controller::HomeController;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::room::RoomStatus;

use crate::config::OutputFormat;

const MENU: &str = "
========== SMART HOME MENU ==========
1) Add Room
2) Add Device to Room
3) Show All Devices
4) Turn All Devices ON Room
5) Schedule All Devices Room
6) Exit
Enter your choice: ";

/// Interactive loop over a line-based input and an output sink.
pub struct Menu<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// Run until the user picks Exit or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing the console fails.
    pub fn run(&mut self, controller: &mut HomeController) -> anyhow::Result<()> {
        loop {
            self.prompt(MENU)?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            let Some(command) = self.read_command(choice.trim(), controller)? else {
                continue;
            };

            tracing::debug!(?command, "executing command");
            match controller.execute(command) {
                Ok(Outcome::Exit) => {
                    writeln!(self.output, "Exiting program")?;
                    return Ok(());
                }
                Ok(outcome) => self.render(&outcome)?,
                Err(err) => writeln!(self.output, "{}", describe(&err))?,
            }
        }
    }

    /// Ask the follow-up questions for `choice`. `None` means nothing to run.
    fn read_command(
        &mut self,
        choice: &str,
        controller: &HomeController,
    ) -> anyhow::Result<Option<Command>> {
        let command = match choice {
            "1" => Command::AddRoom {
                room: self.ask("Enter Room Name: ")?,
            },
            "2" => {
                let room = self.ask("Enter Room Name: ")?;
                if controller.get_room_by_name(&room).is_none() {
                    writeln!(self.output, "Room not found!")?;
                    return Ok(None);
                }
                let kind = self.ask("Enter Device Type (Light/Thermostat/Camera): ")?;
                let name = self.ask("Enter Device Name: ")?;
                Command::AddDevice { room, kind, name }
            }
            "3" => Command::ShowAll,
            "4" => Command::TurnAllOn {
                room: self.ask("Enter Room Name: ")?,
            },
            "5" => Command::ScheduleAll {
                room: self.ask("Enter Room Name: ")?,
            },
            "6" => Command::Exit,
            _ => {
                writeln!(self.output, "Invalid choice. Try again")?;
                return Ok(None);
            }
        };
        Ok(Some(command))
    }

    fn render(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        match outcome {
            Outcome::RoomAdded { room } => writeln!(self.output, "Room {room} added")?,
            Outcome::DeviceAdded {
                room, device, kind, ..
            } => writeln!(self.output, "{kind} {device} added to {room}")?,
            Outcome::Rooms(rooms) => self.render_rooms(rooms)?,
            Outcome::Messages(messages) => {
                for message in messages {
                    writeln!(self.output, "{message}")?;
                }
            }
            Outcome::Exit => {}
        }
        Ok(())
    }

    fn render_rooms(&mut self, rooms: &[RoomStatus]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for room in rooms {
                    writeln!(self.output, "\n{room}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.output, rooms)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    /// Prompt and read one line. End of input reads as an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.prompt(question)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn describe(err: &SmartHomeError) -> String {
    match err {
        SmartHomeError::NotFound(_) => "Room not found!".to_string(),
        SmartHomeError::InvalidDeviceType(_) => "Invalid device type!".to_string(),
        SmartHomeError::CapacityExceeded(inner) => inner.to_string(),
        SmartHomeError::Unsupported(inner) => inner.to_string(),
    }
}
