//! Controllable devices and the arena that owns them.
//!
//! Devices hold their own power state. Switching a device returns a
//! [`DeviceEvent`] describing what happened instead of printing it, so the
//! caller decides where the description goes.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::ops::{Index, IndexMut};

/// Power state of a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Power {
    On,
    Off,
}

impl Power {
    /// The opposite power state.
    pub fn inverse(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// Family a device belongs to. Commands target exactly one family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFamily {
    Lighting,
    Fanning,
}

impl Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lighting => f.write_str("lighting"),
            Self::Fanning => f.write_str("fanning"),
        }
    }
}

/// Concrete device kinds that can be built by name.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{DeviceFamily, DeviceKind, Power};
///
/// let fan = DeviceKind::CeilingFan.build("Bedroom");
/// assert_eq!(fan.name(), "Ceiling Fan");
/// assert_eq!(fan.family(), DeviceFamily::Fanning);
/// assert_eq!(fan.power(), Power::Off);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Lamp,
    CeilingFan,
}

impl DeviceKind {
    /// Human-readable device name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lamp => "Lamp",
            Self::CeilingFan => "Ceiling Fan",
        }
    }

    pub fn family(self) -> DeviceFamily {
        match self {
            Self::Lamp => DeviceFamily::Lighting,
            Self::CeilingFan => DeviceFamily::Fanning,
        }
    }

    /// Build a switched-off device of this kind at `location`.
    pub fn build(self, location: impl Into<String>) -> Box<dyn Device> {
        match self {
            Self::Lamp => Box::new(Lamp::new(location)),
            Self::CeilingFan => Box::new(CeilingFan::new(location)),
        }
    }
}

/// Description of a single device action.
///
/// Renders as `<location> <name> is <ON|OFF>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEvent {
    pub location: String,
    pub device: String,
    pub power: Power,
}

impl Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} is {}", self.location, self.device, self.power)
    }
}

/// A controllable physical device.
///
/// `turn_on` and `turn_off` always succeed. They update the stored power
/// state and describe the action taken.
pub trait Device: Debug + Send {
    /// Name derived from the device kind, e.g. "Lamp".
    fn name(&self) -> &str;

    fn location(&self) -> &str;

    fn family(&self) -> DeviceFamily;

    /// Current power state.
    fn power(&self) -> Power;

    fn turn_on(&mut self) -> DeviceEvent;

    fn turn_off(&mut self) -> DeviceEvent;
}

/// State shared by every concrete device.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Switch {
    location: String,
    power: Power,
}

impl Switch {
    fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            power: Power::Off,
        }
    }

    fn set(&mut self, name: &str, power: Power) -> DeviceEvent {
        self.power = power;
        DeviceEvent {
            location: self.location.clone(),
            device: name.to_string(),
            power,
        }
    }
}

/// Lighting device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lamp {
    switch: Switch,
}

impl Lamp {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            switch: Switch::new(location),
        }
    }
}

impl Device for Lamp {
    fn name(&self) -> &str {
        DeviceKind::Lamp.name()
    }

    fn location(&self) -> &str {
        &self.switch.location
    }

    fn family(&self) -> DeviceFamily {
        DeviceFamily::Lighting
    }

    fn power(&self) -> Power {
        self.switch.power
    }

    fn turn_on(&mut self) -> DeviceEvent {
        self.switch.set(DeviceKind::Lamp.name(), Power::On)
    }

    fn turn_off(&mut self) -> DeviceEvent {
        self.switch.set(DeviceKind::Lamp.name(), Power::Off)
    }
}

/// Fanning device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CeilingFan {
    switch: Switch,
}

impl CeilingFan {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            switch: Switch::new(location),
        }
    }
}

impl Device for CeilingFan {
    fn name(&self) -> &str {
        DeviceKind::CeilingFan.name()
    }

    fn location(&self) -> &str {
        &self.switch.location
    }

    fn family(&self) -> DeviceFamily {
        DeviceFamily::Fanning
    }

    fn power(&self) -> Power {
        self.switch.power
    }

    fn turn_on(&mut self) -> DeviceEvent {
        self.switch.set(DeviceKind::CeilingFan.name(), Power::On)
    }

    fn turn_off(&mut self) -> DeviceEvent {
        self.switch.set(DeviceKind::CeilingFan.name(), Power::Off)
    }
}

/// Handle to a device stored in a [`DeviceRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(usize);

impl DeviceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device#{}", self.0)
    }
}

/// Append-only arena of devices.
///
/// Devices are never removed, so a [`DeviceId`] issued by a registry stays
/// valid for as long as that registry lives.
///
/// # Panics
///
/// Indexing with `registry[id]` panics if `id` was issued by a different
/// registry and is out of range here. Use [`DeviceRegistry::get`] or
/// [`DeviceRegistry::get_mut`] for handles of unknown origin.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{DeviceRegistry, Lamp};
///
/// let mut devices = DeviceRegistry::new();
/// let lamp = devices.register(Lamp::new("Living room"));
///
/// assert!(devices.contains(lamp));
/// assert_eq!(devices[lamp].location(), "Living room");
/// ```
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Box<dyn Device>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `device` and return its handle.
    pub fn register<D: Device + 'static>(&mut self, device: D) -> DeviceId {
        self.register_boxed(Box::new(device))
    }

    pub fn register_boxed(&mut self, device: Box<dyn Device>) -> DeviceId {
        let id = DeviceId(self.devices.len());
        self.devices.push(device);
        id
    }

    pub fn contains(&self, id: DeviceId) -> bool {
        id.0 < self.devices.len()
    }

    pub fn get(&self, id: DeviceId) -> Option<&dyn Device> {
        self.devices.get(id.0).map(|d| &**d)
    }

    pub fn get_mut(&mut self, id: DeviceId) -> Option<&mut (dyn Device + 'static)> {
        self.devices.get_mut(id.0).map(|d| &mut **d)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterate over all devices with their handles, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (DeviceId, &dyn Device)> {
        self.devices
            .iter()
            .enumerate()
            .map(|(i, d)| (DeviceId(i), &**d))
    }
}

impl Index<DeviceId> for DeviceRegistry {
    type Output = dyn Device;

    fn index(&self, id: DeviceId) -> &Self::Output {
        &*self.devices[id.0]
    }
}

impl IndexMut<DeviceId> for DeviceRegistry {
    fn index_mut(&mut self, id: DeviceId) -> &mut Self::Output {
        &mut *self.devices[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devices_start_switched_off() {
        assert_eq!(Lamp::new("Hall").power(), Power::Off);
        assert_eq!(CeilingFan::new("Hall").power(), Power::Off);
    }

    #[test]
    fn turn_on_updates_power_and_describes_action() {
        let mut lamp = Lamp::new("Living room");
        let event = lamp.turn_on();

        assert_eq!(lamp.power(), Power::On);
        assert_eq!(event.to_string(), "Living room Lamp is ON");
    }

    #[test]
    fn turn_off_describes_action() {
        let mut fan = CeilingFan::new("Bedroom");
        fan.turn_on();
        let event = fan.turn_off();

        assert_eq!(fan.power(), Power::Off);
        assert_eq!(event.to_string(), "Bedroom Ceiling Fan is OFF");
    }

    #[test]
    fn kinds_map_to_families() {
        assert_eq!(DeviceKind::Lamp.family(), DeviceFamily::Lighting);
        assert_eq!(DeviceKind::CeilingFan.family(), DeviceFamily::Fanning);
        assert_eq!(DeviceKind::Lamp.build("Den").family(), DeviceFamily::Lighting);
    }

    #[test]
    fn power_inverse_flips() {
        assert_eq!(Power::On.inverse(), Power::Off);
        assert_eq!(Power::Off.inverse(), Power::On);
    }

    #[test]
    fn registry_issues_sequential_handles() {
        let mut devices = DeviceRegistry::new();
        let lamp = devices.register(Lamp::new("Living room"));
        let fan = devices.register(CeilingFan::new("Bedroom"));

        assert_eq!(lamp.index(), 0);
        assert_eq!(fan.index(), 1);
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[fan].name(), "Ceiling Fan");
    }

    #[test]
    fn registry_rejects_foreign_handles() {
        let mut other = DeviceRegistry::new();
        other.register(Lamp::new("Attic"));
        let foreign = other.register(Lamp::new("Cellar"));

        let devices = DeviceRegistry::new();
        assert!(!devices.contains(foreign));
        assert!(devices.get(foreign).is_none());
    }

    #[test]
    #[should_panic]
    fn indexing_with_foreign_handle_panics() {
        let mut other = DeviceRegistry::new();
        other.register(Lamp::new("Attic"));
        let foreign = other.register(Lamp::new("Cellar"));

        let devices = DeviceRegistry::new();
        let _ = devices[foreign].name();
    }

    #[test]
    fn event_serializes_power_as_snake_case() {
        let mut lamp = Lamp::new("Hall");
        let json = serde_json::to_string(&lamp.turn_on()).unwrap();

        assert!(json.contains("\"power\":\"on\""), "{json}");
        assert_eq!(serde_json::to_string(&Power::Off).unwrap(), "\"off\"");
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&DeviceKind::CeilingFan).unwrap();
        assert_eq!(json, "\"ceiling_fan\"");
    }
}
