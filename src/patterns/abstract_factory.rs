//! Abstract Factory: a family of widgets chosen by platform name.

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when selecting a widget factory
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactoryError {
    #[error("Unsupported platform '{0}'. Expected one of: windows_os, linux_os")]
    UnsupportedPlatform(String),
}

/// Platforms with a widget family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    pub fn id(self) -> &'static str {
        match self {
            Self::Windows => "windows_os",
            Self::Linux => "linux_os",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows_os" => Ok(Self::Windows),
            "linux_os" => Ok(Self::Linux),
            other => {
                warn!(platform = other, "no widget factory for platform");
                Err(FactoryError::UnsupportedPlatform(other.to_string()))
            }
        }
    }
}

pub trait Button {
    fn paint(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

/// Creates widgets that belong to one platform family.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsButton;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        "Rendering a button in Windows OS style.".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Rendering a checkbox in Windows OS style.".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxButton;

impl Button for LinuxButton {
    fn paint(&self) -> String {
        "Rendering a button in Linux OS style.".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxCheckbox;

impl Checkbox for LinuxCheckbox {
    fn render(&self) -> String {
        "Rendering a checkbox in Linux OS style.".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxFactory;

impl GuiFactory for LinuxFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LinuxCheckbox)
    }
}

pub fn factory_for(platform: Platform) -> Box<dyn GuiFactory> {
    match platform {
        Platform::Windows => Box::new(WindowsFactory),
        Platform::Linux => Box::new(LinuxFactory),
    }
}

/// Application that only knows the abstract widget interfaces.
///
/// # Example
///
/// ```rust
/// use switchboard::patterns::abstract_factory::{factory_for, Application, Platform};
///
/// let platform: Platform = "linux_os".parse().unwrap();
/// let app = Application::new(factory_for(platform).as_ref());
/// assert_eq!(app.render_ui()[0], "Rendering a button in Linux OS style.");
///
/// assert!("beos".parse::<Platform>().is_err());
/// ```
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn render_ui(&self) -> Vec<String> {
        vec![self.button.paint(), self.checkbox.render()]
    }
}
