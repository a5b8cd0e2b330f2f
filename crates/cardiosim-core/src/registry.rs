//! Device registry: an explicit catalog of device kinds.
//!
//! The catalog is passed around as a value; nothing registers itself into
//! process-wide state. Registration order is preserved because a host UI
//! lists device kinds in the order they were added.

use std::collections::HashMap;

use crate::device::DeviceDefinition;
use crate::error::{DeviceError, Result};

/// Catalog of device kinds, keyed by device id.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    order: Vec<String>,
    devices: HashMap<String, DeviceDefinition>,
}

impl DeviceRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device kind.
    ///
    /// Returns an error if a kind with the same id already exists.
    pub fn register(&mut self, device: DeviceDefinition) -> Result<()> {
        let id = device.id().to_string();
        if self.devices.contains_key(&id) {
            return Err(DeviceError::DeviceExists(id));
        }
        log::debug!("registered device kind '{id}'");
        self.order.push(id.clone());
        self.devices.insert(id, device);
        Ok(())
    }

    /// Gets a device kind by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DeviceDefinition> {
        self.devices.get(id)
    }

    /// Checks whether a device kind with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.devices.contains_key(id)
    }

    /// Removes a device kind by id.
    pub fn remove(&mut self, id: &str) -> Option<DeviceDefinition> {
        self.order.retain(|existing| existing != id);
        self.devices.remove(id)
    }

    /// Removes all device kinds from the registry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.devices.clear();
    }

    /// Iterates over the device kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceDefinition> {
        self.order.iter().filter_map(|id| self.devices.get(id))
    }

    /// Returns the ids of all device kinds in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of registered device kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
