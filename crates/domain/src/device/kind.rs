//! Device kind — the fixed variant tag that decides which capabilities apply.

use serde::{Deserialize, Serialize};

/// The three device variants a room can hold.
///
/// Declaration order is also display order: rooms list lights first, then
/// thermostats, then cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Thermostat,
    Camera,
}

impl DeviceKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Thermostat, Self::Camera];

    /// Resolve a user-supplied type tag.
    ///
    /// Only the capitalised and the all-lowercase spelling are accepted
    /// (`"Light"` / `"light"`), anything else is `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Light" | "light" => Some(Self::Light),
            "Thermostat" | "thermostat" => Some(Self::Thermostat),
            "Camera" | "camera" => Some(Self::Camera),
            _ => None,
        }
    }

    /// Canonical tag, as accepted by [`from_tag`](Self::from_tag).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Thermostat => "Thermostat",
            Self::Camera => "Camera",
        }
    }

    /// Whether devices of this kind accept `schedule_on` / `schedule_off`.
    #[must_use]
    pub fn supports_scheduling(self) -> bool {
        matches!(self, Self::Light | Self::Thermostat)
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
