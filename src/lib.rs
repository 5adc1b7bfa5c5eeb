//! Switchboard: an undoable command remote for household devices
//!
//! A remote control binds four commands (light on/off, fan on/off) to
//! devices and keeps a single linear undo stack. Devices live in an arena
//! owned by the remote; commands and history refer to them by handle, so
//! nothing dangles.
//!
//! # Core Concepts
//!
//! - **Device**: a controllable lamp or ceiling fan with explicit power state
//! - **Command**: an immutable request to switch one device, with an exact inverse
//! - **RemoteControl**: runs slot commands and undoes them in LIFO order
//!
//! The [`patterns`] module holds small companion examples of the Strategy,
//! Decorator, Bridge and Abstract Factory patterns.
//!
//! # Example
//!
//! ```rust
//! use switchboard::config::HomeConfig;
//!
//! let mut remote = HomeConfig::default().into_remote().unwrap();
//!
//! remote.light_on();
//! remote.fan_on();
//!
//! let undone = remote.undo();
//! assert_eq!(undone.to_string(), "Undoing last command...\nBedroom Ceiling Fan is OFF");
//! assert_eq!(remote.history().len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod patterns;
pub mod remote;

// Re-export commonly used types
pub use crate::config::HomeConfig;
pub use crate::core::{Command, Device, DeviceEvent, DeviceId, DeviceRegistry, Power, Slot};
pub use crate::remote::{RemoteControl, RemoteControlBuilder, UndoOutcome};
