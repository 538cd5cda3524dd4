//! Device factory — turns a user-supplied type tag into a [`Device`].

use crate::device::{Device, DeviceKind};

/// Builds devices from the type tags typed at the console.
pub struct DeviceFactory;

impl DeviceFactory {
    /// Create a switched-off device, or `None` when `tag` names no kind.
    ///
    /// See [`DeviceKind::from_tag`] for the accepted spellings.
    #[must_use]
    pub fn create(tag: &str, name: &str, location: &str) -> Option<Device> {
        DeviceKind::from_tag(tag).map(|kind| Device::new(kind, name, location))
    }
}
