//! Polymorphic device abstractions
//!
//! This module defines the `Device` trait and the built-in device stubs
//! (`Gps`, `Imu`). A device exposes a single `run` action; new variants are
//! added by implementing the trait and registering a constructor, never by
//! touching the registry itself.

mod gps;
mod imu;

use std::fmt;

pub use gps::Gps;
pub use imu::Imu;

/// Trait for one hardware abstraction
///
/// Implementations own their state outright; the registry never retains a
/// reference to a constructed device. `Debug` is required so device handles
/// stay inspectable through trait objects.
pub trait Device: fmt::Debug {
    /// Stable identity of this device type
    fn name(&self) -> &'static str;

    /// Perform the device's single action.
    ///
    /// Side-effect only: the built-in variants report their identity (and
    /// configuration, when present) through the `log` facade.
    fn run(&mut self);
}
