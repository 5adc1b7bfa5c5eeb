//! Undoable device commands and the remote slots they occupy.

use super::device::{Device, DeviceEvent, DeviceFamily, DeviceId, Power};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// One of the fixed command bindings on a remote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    LightOn,
    LightOff,
    FanOn,
    FanOff,
}

impl Slot {
    /// Every slot, in button order.
    pub const ALL: [Slot; 4] = [Slot::LightOn, Slot::LightOff, Slot::FanOn, Slot::FanOff];

    /// Position of this slot in a remote's command table.
    pub fn index(self) -> usize {
        match self {
            Self::LightOn => 0,
            Self::LightOff => 1,
            Self::FanOn => 2,
            Self::FanOff => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LightOn => "light_on",
            Self::LightOff => "light_off",
            Self::FanOn => "fan_on",
            Self::FanOff => "fan_off",
        }
    }

    /// Family of device this slot controls.
    pub fn family(self) -> DeviceFamily {
        match self {
            Self::LightOn | Self::LightOff => DeviceFamily::Lighting,
            Self::FanOn | Self::FanOff => DeviceFamily::Fanning,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request to switch one device in one direction.
///
/// Commands are bound to their device at construction and never change.
/// `undo` is the exact inverse of `execute`, and each call touches the
/// device exactly once.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{Command, Device, DeviceRegistry, Lamp, Power};
///
/// let mut devices = DeviceRegistry::new();
/// let lamp = devices.register(Lamp::new("Living room"));
/// let command = Command::LightOn(lamp);
///
/// let event = command.execute(&mut devices[lamp]);
/// assert_eq!(event.to_string(), "Living room Lamp is ON");
///
/// command.undo(&mut devices[lamp]);
/// assert_eq!(devices[lamp].power(), Power::Off);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    LightOn(DeviceId),
    LightOff(DeviceId),
    FanOn(DeviceId),
    FanOff(DeviceId),
}

impl Command {
    /// Build the command that belongs in `slot`, bound to `device`.
    pub fn for_slot(slot: Slot, device: DeviceId) -> Self {
        match slot {
            Slot::LightOn => Self::LightOn(device),
            Slot::LightOff => Self::LightOff(device),
            Slot::FanOn => Self::FanOn(device),
            Slot::FanOff => Self::FanOff(device),
        }
    }

    pub fn device(&self) -> DeviceId {
        match *self {
            Self::LightOn(id) | Self::LightOff(id) | Self::FanOn(id) | Self::FanOff(id) => id,
        }
    }

    pub fn slot(&self) -> Slot {
        match self {
            Self::LightOn(_) => Slot::LightOn,
            Self::LightOff(_) => Slot::LightOff,
            Self::FanOn(_) => Slot::FanOn,
            Self::FanOff(_) => Slot::FanOff,
        }
    }

    pub fn family(&self) -> DeviceFamily {
        self.slot().family()
    }

    /// Power state `execute` drives the device to.
    pub fn target(&self) -> Power {
        match self {
            Self::LightOn(_) | Self::FanOn(_) => Power::On,
            Self::LightOff(_) | Self::FanOff(_) => Power::Off,
        }
    }

    pub fn execute(&self, device: &mut dyn Device) -> DeviceEvent {
        switch(device, self.target())
    }

    pub fn undo(&self, device: &mut dyn Device) -> DeviceEvent {
        switch(device, self.target().inverse())
    }
}

fn switch(device: &mut dyn Device, power: Power) -> DeviceEvent {
    match power {
        Power::On => device.turn_on(),
        Power::Off => device.turn_off(),
    }
}
