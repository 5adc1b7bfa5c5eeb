//! Companion design pattern modules.
//!
//! Each module is independent of the remote and of the others. Operations
//! return the text they would display rather than printing it.

pub mod abstract_factory;
pub mod bridge;
pub mod decorator;
pub mod strategy;
