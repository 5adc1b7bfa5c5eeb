//! Build errors for the remote control builder.

use crate::core::{DeviceFamily, DeviceId, Slot};
use thiserror::Error;

/// Errors that can occur when building a remote control.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Slot '{0}' has no command bound. Bind one before .build()")]
    MissingSlot(Slot),

    #[error("Slot '{slot}' refers to {device}, which is not in the registry")]
    UnknownDevice { slot: Slot, device: DeviceId },

    #[error("Slot '{slot}' controls {expected} devices but {device} is a {found} device")]
    FamilyMismatch {
        slot: Slot,
        device: DeviceId,
        expected: DeviceFamily,
        found: DeviceFamily,
    },
}
