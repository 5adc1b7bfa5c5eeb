//! Devices, commands, and command history.
//!
//! This module contains the parts of the remote that know nothing about
//! each other's ownership:
//! - Devices and the registry arena that owns them
//! - Commands bound to devices by handle
//! - The LIFO history of executed slots
//!
//! Nothing here prints. Device actions are returned as values.

mod command;
mod device;
mod history;

pub use command::{Command, Slot};
pub use device::{
    CeilingFan, Device, DeviceEvent, DeviceFamily, DeviceId, DeviceKind, DeviceRegistry, Lamp,
    Power,
};
pub use history::{CommandHistory, HistoryEntry};
