//! The remote control: an invoker with four slots and single-step undo.

pub mod builder;
pub mod error;

pub use builder::RemoteControlBuilder;
pub use error::BuildError;

use crate::core::{Command, CommandHistory, Device, DeviceEvent, DeviceId, DeviceRegistry, Slot};
use std::fmt::{self, Display};
use tracing::{debug, info};

/// Result of asking the remote to undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent command was inverted.
    Undone { slot: Slot, event: DeviceEvent },

    /// History was empty. Nothing changed.
    NothingToUndo,
}

impl UndoOutcome {
    pub fn is_undone(&self) -> bool {
        matches!(self, Self::Undone { .. })
    }
}

impl Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undone { event, .. } => write!(f, "Undoing last command...\n{event}"),
            Self::NothingToUndo => f.write_str("No commands to undo."),
        }
    }
}

/// Invoker that owns its devices, one command per slot, and an undo stack.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{CeilingFan, DeviceRegistry, Lamp};
/// use switchboard::remote::{RemoteControlBuilder, UndoOutcome};
///
/// let mut devices = DeviceRegistry::new();
/// let lamp = devices.register(Lamp::new("Living room"));
/// let fan = devices.register(CeilingFan::new("Bedroom"));
///
/// let mut remote = RemoteControlBuilder::new(devices)
///     .light_on(lamp)
///     .light_off(lamp)
///     .fan_on(fan)
///     .fan_off(fan)
///     .build()
///     .unwrap();
///
/// assert_eq!(remote.light_on().to_string(), "Living room Lamp is ON");
/// assert_eq!(
///     remote.undo().to_string(),
///     "Undoing last command...\nLiving room Lamp is OFF"
/// );
/// assert_eq!(remote.undo(), UndoOutcome::NothingToUndo);
/// ```
#[derive(Debug)]
pub struct RemoteControl {
    devices: DeviceRegistry,
    commands: [Command; 4],
    history: CommandHistory,
}

impl RemoteControl {
    /// Commands must already be validated against `devices`; use
    /// [`RemoteControlBuilder`] from outside the module.
    pub(crate) fn new(devices: DeviceRegistry, commands: [Command; 4]) -> Self {
        Self {
            devices,
            commands,
            history: CommandHistory::new(),
        }
    }

    /// Execute the command bound to `slot` and remember it for undo.
    pub fn run(&mut self, slot: Slot) -> DeviceEvent {
        let command = self.command(slot);
        let event = command.execute(&mut self.devices[command.device()]);
        self.history.push(slot);

        debug!(
            slot = %slot,
            device = %command.device(),
            power = %event.power,
            depth = self.history.len(),
            "command executed"
        );
        event
    }

    pub fn light_on(&mut self) -> DeviceEvent {
        self.run(Slot::LightOn)
    }

    pub fn light_off(&mut self) -> DeviceEvent {
        self.run(Slot::LightOff)
    }

    pub fn fan_on(&mut self) -> DeviceEvent {
        self.run(Slot::FanOn)
    }

    pub fn fan_off(&mut self) -> DeviceEvent {
        self.run(Slot::FanOff)
    }

    /// Invert the most recently executed command.
    ///
    /// An empty history is not an error: the remote reports
    /// [`UndoOutcome::NothingToUndo`] and leaves every device untouched.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(entry) = self.history.pop() else {
            info!("undo requested with empty history");
            return UndoOutcome::NothingToUndo;
        };

        let command = self.command(entry.slot);
        let event = command.undo(&mut self.devices[command.device()]);

        debug!(
            slot = %entry.slot,
            device = %command.device(),
            power = %event.power,
            depth = self.history.len(),
            "command undone"
        );
        UndoOutcome::Undone {
            slot: entry.slot,
            event,
        }
    }

    /// The command bound to `slot`.
    pub fn command(&self, slot: Slot) -> Command {
        self.commands[slot.index()]
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn device(&self, id: DeviceId) -> Option<&dyn Device> {
        self.devices.get(id)
    }

    pub fn devices(&self) -> &DeviceRegistry {
        &self.devices
    }
}
