//! Name-to-constructor device registry
//!
//! This module provides `DeviceRegistry`, the owner of the mapping from
//! device-type names to constructors.
//!
//! # Architecture
//!
//! ```text
//! DeviceRegistry (owns the mapping)
//! ├── register_device (only mutation point, rejects duplicates)
//! ├── create / create_with_config (constructs, ownership moves to caller)
//! └── list_registered (introspection)
//! ```
//!
//! The registry does not depend on a specific dispatch mechanism: anything
//! callable with the [`DeviceCtor`] signature can be registered. It holds no
//! reference to constructed devices and is unchanged by `create`.

use std::collections::HashMap;
use std::fmt;

use crate::device::{Device, Gps, Imu};
use crate::error::{Error, Result};
use crate::parse::parse;

/// Constructor stored per registered device type
///
/// The `Option<i64>` is a validated configuration value: `None` for plain
/// [`DeviceRegistry::create`], `Some` for
/// [`DeviceRegistry::create_with_config`]. Constructors must be `Send + Sync`
/// so a caller may share the registry behind an external lock.
pub type DeviceCtor = Box<dyn Fn(Option<i64>) -> Box<dyn Device> + Send + Sync>;

/// Owner of the name-to-constructor mapping
///
/// Created empty (or via [`DeviceRegistry::with_default_devices`]), mutated
/// only through [`DeviceRegistry::register_device`], and dropped with its
/// owner. Dropping the registry drops the registrations, never the devices
/// it constructed; those are owned solely by the callers that requested
/// them.
///
/// All operations are synchronous and complete in bounded time. Concurrent
/// mutation must be synchronized externally by the caller.
///
/// # Example
///
/// ```
/// use devreg::prelude::*;
///
/// let mut registry = DeviceRegistry::new();
/// registry.register_device("gps", |cfg| Box::new(Gps::new(cfg)))?;
///
/// let mut device = registry.create("gps")?;
/// device.run();
/// # Ok::<(), Error>(())
/// ```
#[derive(Default)]
pub struct DeviceRegistry {
    ctors: HashMap<String, DeviceCtor>,
}

impl DeviceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            ctors: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in device types
    ///
    /// Registers [`Gps`] under `"gps"` and [`Imu`] under `"imu"`. Further
    /// types can still be registered afterwards.
    pub fn with_default_devices() -> Self {
        let mut ctors: HashMap<String, DeviceCtor> = HashMap::new();
        ctors.insert("gps".to_owned(), Box::new(|cfg| Box::new(Gps::new(cfg))));
        ctors.insert("imu".to_owned(), Box::new(|cfg| Box::new(Imu::new(cfg))));
        Self { ctors }
    }

    /// Register a constructor under `name`
    ///
    /// Fails with [`Error::InvalidName`] if `name` is empty and with
    /// [`Error::DuplicateRegistration`] if `name` is already taken; in the
    /// duplicate case the existing registration stays active. This is the
    /// registry's only mutation point.
    pub fn register_device<F>(&mut self, name: &str, ctor: F) -> Result<()>
    where
        F: Fn(Option<i64>) -> Box<dyn Device> + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        if self.ctors.contains_key(name) {
            return Err(Error::duplicate_registration(name));
        }
        self.ctors.insert(name.to_owned(), Box::new(ctor));
        Ok(())
    }

    /// Construct the device registered under `name`
    ///
    /// Fails with [`Error::UnknownDeviceType`] if no such registration
    /// exists. On success, sole ownership of the new device transfers to
    /// the caller; the registry itself is unchanged.
    pub fn create(&self, name: &str) -> Result<Box<dyn Device>> {
        let ctor = self
            .ctors
            .get(name)
            .ok_or_else(|| Error::unknown_device(name))?;
        Ok(ctor(None))
    }

    /// Construct the device registered under `name` with a configuration value
    ///
    /// `raw` is validated with [`parse`] before the constructor runs; a
    /// malformed or out-of-range value fails with [`Error::NotANumber`] or
    /// [`Error::OutOfRange`] and no device is constructed.
    pub fn create_with_config(&self, name: &str, raw: &str) -> Result<Box<dyn Device>> {
        let value = parse(raw)?;
        let ctor = self
            .ctors
            .get(name)
            .ok_or_else(|| Error::unknown_device(name))?;
        Ok(ctor(Some(value)))
    }

    /// Iterate over the registered names
    ///
    /// Lazy and finite; each call returns a fresh iterator over the current
    /// registrations. Order is unspecified. Intended for introspection and
    /// diagnostics only.
    pub fn list_registered(&self) -> impl Iterator<Item = &str> {
        self.ctors.keys().map(String::as_str)
    }

    /// Check whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    /// Number of registered device types
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Check whether no device type is registered
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }
}

impl fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.list_registered().collect();
        names.sort_unstable();
        f.debug_struct("DeviceRegistry")
            .field("registered", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gps_ctor(cfg: Option<i64>) -> Box<dyn Device> {
        Box::new(Gps::new(cfg))
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = DeviceRegistry::new();
        registry.register_device("gps", gps_ctor).unwrap();

        let device = registry.create("gps").unwrap();
        assert_eq!(device.name(), "gps");
        // create leaves the registry unchanged
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut registry = DeviceRegistry::new();
        registry.register_device("gps", gps_ctor).unwrap();

        let err = registry
            .register_device("gps", |cfg| Box::new(Imu::new(cfg)))
            .unwrap_err();
        assert_eq!(err, Error::duplicate_registration("gps"));

        // First registration still active: the device is a Gps, not an Imu.
        assert_eq!(registry.create("gps").unwrap().name(), "gps");
    }

    #[test]
    fn test_unknown_device_type() {
        let registry = DeviceRegistry::with_default_devices();
        let err = registry.create("radar").unwrap_err();
        assert_eq!(err, Error::unknown_device("radar"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = DeviceRegistry::new();
        let err = registry.register_device("", gps_ctor).unwrap_err();
        assert_eq!(err, Error::InvalidName);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_with_config_validates_first() {
        let registry = DeviceRegistry::with_default_devices();

        let mut device = registry.create_with_config("gps", "10").unwrap();
        device.run();

        assert_eq!(
            registry.create_with_config("gps", "abc").unwrap_err(),
            Error::not_a_number("abc")
        );
        assert_eq!(
            registry
                .create_with_config("gps", "99999999999999999999")
                .unwrap_err(),
            Error::out_of_range("99999999999999999999")
        );
    }

    #[test]
    fn test_list_registered_is_restartable() {
        let registry = DeviceRegistry::with_default_devices();

        let mut first: Vec<&str> = registry.list_registered().collect();
        let mut second: Vec<&str> = registry.list_registered().collect();
        first.sort_unstable();
        second.sort_unstable();

        assert_eq!(first, vec!["gps", "imu"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_to_populated() {
        let mut registry = DeviceRegistry::new();
        assert!(registry.is_empty());

        registry.register_device("gps", gps_ctor).unwrap();
        assert!(!registry.is_empty());
        assert!(registry.contains("gps"));
        assert!(!registry.contains("imu"));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DeviceRegistry>();
    }
}
