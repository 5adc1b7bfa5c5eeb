//! Declarative description of the devices wired to a remote.
//!
//! A [`HomeConfig`] names one lighting device and one fanning device.
//! Validation uses Stillwater's `Validation` so a config with several
//! problems reports all of them at once.
//!
//! # Example
//!
//! ```rust
//! use switchboard::config::HomeConfig;
//!
//! let config = HomeConfig::from_json(
//!     r#"{
//!         "light": { "kind": "lamp", "location": "Study" },
//!         "fan": { "kind": "ceiling_fan", "location": "Porch" }
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut remote = config.into_remote().unwrap();
//! assert_eq!(remote.fan_on().to_string(), "Porch Ceiling Fan is ON");
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{DeviceFamily, DeviceKind, DeviceRegistry};
use crate::remote::{RemoteControl, RemoteControlBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// One device: what it is and where it lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub kind: DeviceKind,
    pub location: String,
}

impl DeviceSpec {
    pub fn new(kind: DeviceKind, location: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
        }
    }

    fn check(
        &self,
        role: &'static str,
        expected: DeviceFamily,
    ) -> Vec<Validation<(), NonEmptyVec<ConfigViolation>>> {
        let location = if self.location.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyLocation { role })
        } else {
            Validation::success(())
        };

        let family = if self.kind.family() != expected {
            Validation::fail(ConfigViolation::WrongFamily {
                role,
                kind: self.kind,
                expected,
            })
        } else {
            Validation::success(())
        };

        vec![location, family]
    }
}

/// The devices behind a remote's light and fan buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeConfig {
    pub light: DeviceSpec,
    pub fan: DeviceSpec,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            light: DeviceSpec::new(DeviceKind::Lamp, "Living room"),
            fan: DeviceSpec::new(DeviceKind::CeilingFan, "Bedroom"),
        }
    }
}

impl HomeConfig {
    /// Parse a config from JSON. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file. Does not validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Self::from_json(&json)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks = self.light.check("light", DeviceFamily::Lighting);
        checks.extend(self.fan.check("fan", DeviceFamily::Fanning));

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, register both devices, and wire them to every slot.
    pub fn into_remote(self) -> Result<RemoteControl, ConfigError> {
        if let Validation::Failure(violations) = self.validate() {
            let violations: Vec<ConfigViolation> = violations.iter().cloned().collect();
            warn!(count = violations.len(), "config rejected");
            return Err(ConfigError::Invalid(violations));
        }

        let mut devices = DeviceRegistry::new();
        let light = devices.register_boxed(self.light.kind.build(self.light.location));
        let fan = devices.register_boxed(self.fan.kind.build(self.fan.location));

        let remote = RemoteControlBuilder::new(devices)
            .light_on(light)
            .light_off(light)
            .fan_on(fan)
            .fan_off(fan)
            .build()?;
        Ok(remote)
    }
}
