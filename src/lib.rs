//! # devreg
//!
//! **Runtime device factory with validated construction input.**
//!
//! devreg maps device-type names to constructor functions and builds
//! polymorphic device handles on demand. It replaces the usual factory
//! pitfalls with explicit outcomes:
//!
//! - **No null-as-failure**: an unknown name is a named error, not an empty
//!   handle the caller can forget to check.
//! - **No silent overwrite**: registering a name twice is a named error; the
//!   first registration stays active.
//! - **No sentinel parsing**: configuration values are validated by a parser
//!   that distinguishes malformed input from out-of-range input, so `0`
//!   always means zero.
//! - **No global factory**: each `DeviceRegistry` is an owned value with an
//!   explicit lifecycle, so independent registries (e.g. per test) are free.
//!
//! ## Quick Start
//!
//! ```
//! use devreg::prelude::*;
//!
//! let mut registry = DeviceRegistry::new();
//! registry.register_device("gps", |cfg| Box::new(Gps::new(cfg)))?;
//! registry.register_device("imu", |cfg| Box::new(Imu::new(cfg)))?;
//!
//! let mut device = registry.create_with_config("gps", "10")?;
//! device.run();
//!
//! assert!(matches!(
//!     registry.create("radar"),
//!     Err(Error::UnknownDeviceType { .. })
//! ));
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod device;
pub mod error;
pub mod parse;
pub mod registry;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::device::{Device, Gps, Imu};
    pub use crate::error::{Error, Result};
    pub use crate::registry::{DeviceCtor, DeviceRegistry};
}
