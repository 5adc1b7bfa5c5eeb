//! Builder for constructing remote controls.

use crate::core::{Command, DeviceId, DeviceRegistry, Slot};
use crate::remote::error::BuildError;
use crate::remote::RemoteControl;
use tracing::debug;

/// Builder for constructing a [`RemoteControl`] with a fluent API.
///
/// Every slot must be bound before `build`, and each command must target a
/// device of the slot's family that lives in the builder's registry.
pub struct RemoteControlBuilder {
    devices: DeviceRegistry,
    commands: [Option<Command>; 4],
}

impl RemoteControlBuilder {
    /// Start a builder that will own `devices`.
    pub fn new(devices: DeviceRegistry) -> Self {
        Self {
            devices,
            commands: [None; 4],
        }
    }

    /// Bind a command to the slot it belongs in, replacing any earlier binding.
    pub fn bind(mut self, command: Command) -> Self {
        self.commands[command.slot().index()] = Some(command);
        self
    }

    pub fn light_on(self, device: DeviceId) -> Self {
        self.bind(Command::LightOn(device))
    }

    pub fn light_off(self, device: DeviceId) -> Self {
        self.bind(Command::LightOff(device))
    }

    pub fn fan_on(self, device: DeviceId) -> Self {
        self.bind(Command::FanOn(device))
    }

    pub fn fan_off(self, device: DeviceId) -> Self {
        self.bind(Command::FanOff(device))
    }

    /// Build the remote.
    /// Returns an error for the first slot that is unbound or misbound.
    pub fn build(self) -> Result<RemoteControl, BuildError> {
        let [light_on, light_off, fan_on, fan_off] = Slot::ALL.map(|slot| self.checked(slot));
        let commands = [light_on?, light_off?, fan_on?, fan_off?];

        debug!(devices = self.devices.len(), "remote control built");
        Ok(RemoteControl::new(self.devices, commands))
    }

    /// The command bound to `slot`, if it targets a registered device of the
    /// slot's family.
    fn checked(&self, slot: Slot) -> Result<Command, BuildError> {
        let command = self.commands[slot.index()].ok_or(BuildError::MissingSlot(slot))?;
        let device = command.device();
        let found = self
            .devices
            .get(device)
            .ok_or(BuildError::UnknownDevice { slot, device })?
            .family();

        if found != slot.family() {
            return Err(BuildError::FamilyMismatch {
                slot,
                device,
                expected: slot.family(),
                found,
            });
        }

        Ok(command)
    }
}
