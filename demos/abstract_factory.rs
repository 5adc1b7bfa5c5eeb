//! Abstract Factory Pattern
//!
//! This example picks a widget family by platform name.
//!
//! Run with: cargo run --example abstract_factory

use switchboard::patterns::abstract_factory::{factory_for, Application, FactoryError, Platform};

const OS_TYPE: &str = "linux_os";

fn main() -> Result<(), FactoryError> {
    let platform: Platform = OS_TYPE.parse()?;
    let app = Application::new(factory_for(platform).as_ref());

    for line in app.render_ui() {
        println!("{line}");
    }
    Ok(())
}
