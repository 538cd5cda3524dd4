//! Device — a simulated home appliance with on/off state and kind-specific
//! behaviour.
//!
//! All kinds share one struct. The [`DeviceKind`] tag is fixed at
//! construction and gates the capability operations: scheduling for lights
//! and thermostats, temperature for thermostats, recording for cameras.
//! Every operation returns the confirmation message instead of printing it.

mod kind;

pub use kind::DeviceKind;

use serde::{Deserialize, Serialize};

use crate::error::{SmartHomeError, UnsupportedError};
use crate::id::DeviceId;
use crate::time::{Timestamp, now};

/// Temperature a new thermostat starts at, in °C.
pub const DEFAULT_TEMPERATURE: i32 = 24;

/// Per-kind state. Only thermostats carry anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Variant {
    Light,
    Thermostat { temperature: i32 },
    Camera,
}

/// A device registered in a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    id: DeviceId,
    name: String,
    location: String,
    is_on: bool,
    #[serde(flatten)]
    variant: Variant,
    last_changed: Timestamp,
}

impl Device {
    /// Create a switched-off device of the given kind.
    #[must_use]
    pub fn new(kind: DeviceKind, name: impl Into<String>, location: impl Into<String>) -> Self {
        let variant = match kind {
            DeviceKind::Light => Variant::Light,
            DeviceKind::Thermostat => Variant::Thermostat {
                temperature: DEFAULT_TEMPERATURE,
            },
            DeviceKind::Camera => Variant::Camera,
        };
        Self {
            id: DeviceId::new(),
            name: name.into(),
            location: location.into(),
            is_on: false,
            variant,
            last_changed: now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// When the on/off flag was last written.
    #[must_use]
    pub fn last_changed(&self) -> Timestamp {
        self.last_changed
    }

    /// The fixed variant tag.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self.variant {
            Variant::Light => DeviceKind::Light,
            Variant::Thermostat { .. } => DeviceKind::Thermostat,
            Variant::Camera => DeviceKind::Camera,
        }
    }

    /// Current set point, `None` unless this is a thermostat.
    #[must_use]
    pub fn temperature(&self) -> Option<i32> {
        match self.variant {
            Variant::Thermostat { temperature } => Some(temperature),
            _ => None,
        }
    }

    /// Switch on. Always succeeds.
    pub fn turn_on(&mut self) -> String {
        self.set_power(true);
        format!("{} is ON", self.name)
    }

    /// Switch off. Always succeeds.
    pub fn turn_off(&mut self) -> String {
        self.set_power(false);
        format!("{} is OFF", self.name)
    }

    /// `"<name> in <location> is ON|OFF"`.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "{} in {} is {}",
            self.name,
            self.location,
            if self.is_on { "ON" } else { "OFF" }
        )
    }

    /// Announce that the device will turn on at `time`.
    ///
    /// Nothing is armed and `is_on` is untouched; `time` is not parsed.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Unsupported`] for cameras.
    pub fn schedule_on(&self, time: &str) -> Result<String, SmartHomeError> {
        self.require_scheduling()?;
        Ok(format!("{} will turn ON at {time}", self.name))
    }

    /// Announce that the device will turn off at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Unsupported`] for cameras.
    pub fn schedule_off(&self, time: &str) -> Result<String, SmartHomeError> {
        self.require_scheduling()?;
        Ok(format!("{} will turn OFF at {time}", self.name))
    }

    /// Overwrite the thermostat set point. Any value is accepted as is.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Unsupported`] unless this is a thermostat.
    pub fn set_temperature(&mut self, value: i32) -> Result<String, SmartHomeError> {
        if let Variant::Thermostat { temperature } = &mut self.variant {
            *temperature = value;
            return Ok(format!("{} set to {value}°C", self.name));
        }
        Err(self.unsupported("temperature control"))
    }

    /// Start a recording. Nothing is remembered about it afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Unsupported`] unless this is a camera.
    pub fn start_recording(&self) -> Result<String, SmartHomeError> {
        match self.variant {
            Variant::Camera => Ok(format!("{} camera is recording", self.name)),
            _ => Err(self.unsupported("recording")),
        }
    }

    fn set_power(&mut self, on: bool) {
        self.is_on = on;
        self.last_changed = now();
    }

    fn require_scheduling(&self) -> Result<(), SmartHomeError> {
        if self.kind().supports_scheduling() {
            Ok(())
        } else {
            Err(self.unsupported("scheduling"))
        }
    }

    fn unsupported(&self, capability: &'static str) -> SmartHomeError {
        UnsupportedError {
            device: self.name.clone(),
            kind: self.kind().as_str(),
            capability,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> Device {
        Device::new(DeviceKind::Light, "Lamp1", "Living Room")
    }

    fn thermostat() -> Device {
        Device::new(DeviceKind::Thermostat, "Nest", "Hallway")
    }

    fn camera() -> Device {
        Device::new(DeviceKind::Camera, "Cam1", "Garage")
    }

    #[test]
    fn should_start_switched_off() {
        let device = light();
        assert!(!device.is_on());
        assert_eq!(device.status(), "Lamp1 in Living Room is OFF");
    }

    #[test]
    fn should_start_thermostat_at_default_temperature() {
        assert_eq!(thermostat().temperature(), Some(24));
        assert_eq!(light().temperature(), None);
        assert_eq!(camera().temperature(), None);
    }

    #[test]
    fn should_report_on_after_turn_on() {
        let mut device = light();
        let message = device.turn_on();
        assert_eq!(message, "Lamp1 is ON");
        assert!(device.is_on());
        assert_eq!(device.status(), "Lamp1 in Living Room is ON");
    }

    #[test]
    fn should_be_off_after_turn_on_then_turn_off() {
        let mut device = camera();
        device.turn_on();
        let message = device.turn_off();
        assert_eq!(message, "Cam1 is OFF");
        assert!(!device.is_on());
    }

    #[test]
    fn should_stay_on_when_turned_on_twice() {
        let mut device = thermostat();
        device.turn_on();
        device.turn_on();
        assert!(device.is_on());
    }

    #[test]
    fn should_advance_last_changed_on_power_change() {
        let mut device = light();
        let created = device.last_changed();
        device.turn_on();
        assert!(device.last_changed() >= created);
    }

    #[test]
    fn should_announce_schedule_without_changing_state() {
        let device = light();
        assert_eq!(
            device.schedule_on("6:00 PM").unwrap(),
            "Lamp1 will turn ON at 6:00 PM"
        );
        assert_eq!(
            device.schedule_off("whenever").unwrap(),
            "Lamp1 will turn OFF at whenever"
        );
        assert!(!device.is_on());
    }

    #[test]
    fn should_reject_scheduling_on_camera() {
        let result = camera().schedule_on("6:00 PM");
        assert!(matches!(
            result,
            Err(SmartHomeError::Unsupported(UnsupportedError {
                capability: "scheduling",
                ..
            }))
        ));
    }

    #[test]
    fn should_store_any_temperature_verbatim() {
        let mut device = thermostat();
        for value in [23, -40, 0, i32::MAX, i32::MIN] {
            device.set_temperature(value).unwrap();
            assert_eq!(device.temperature(), Some(value));
        }
    }

    #[test]
    fn should_confirm_temperature_change() {
        let mut device = thermostat();
        assert_eq!(device.set_temperature(21).unwrap(), "Nest set to 21°C");
    }

    #[test]
    fn should_reject_temperature_on_light() {
        let mut device = light();
        assert!(matches!(
            device.set_temperature(20),
            Err(SmartHomeError::Unsupported(_))
        ));
    }

    #[test]
    fn should_confirm_recording_on_camera_only() {
        assert_eq!(camera().start_recording().unwrap(), "Cam1 camera is recording");
        assert!(thermostat().start_recording().is_err());
    }

    #[test]
    fn should_keep_kind_through_serde_roundtrip() {
        let mut device = thermostat();
        device.set_temperature(19).unwrap();
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["kind"], "thermostat");
        assert_eq!(json["temperature"], 19);

        let parsed: Device = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.kind(), DeviceKind::Thermostat);
        assert_eq!(parsed.temperature(), Some(19));
        assert_eq!(parsed.id(), device.id());
    }
}
