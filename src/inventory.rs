//! Device stock levels.
//!
//! Labs declare the consumables they use per student; completing a session
//! draws them from this inventory. Stock at or below the alert threshold is
//! reported as low.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::InventoryError;

/// Default low-stock alert threshold.
pub const DEFAULT_ALERT_THRESHOLD: u32 = 50;

fn default_alert_threshold() -> u32 {
    DEFAULT_ALERT_THRESHOLD
}

/// Stock level per device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInventory {
    levels: BTreeMap<String, u32>,
    #[serde(default = "default_alert_threshold")]
    alert_threshold: u32,
}

impl Default for DeviceInventory {
    fn default() -> Self {
        Self {
            levels: BTreeMap::new(),
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

impl DeviceInventory {
    /// Creates an empty inventory with the default alert threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the low-stock alert threshold.
    pub fn with_alert_threshold(mut self, threshold: u32) -> Self {
        self.alert_threshold = threshold;
        self
    }

    /// Alert threshold.
    pub fn alert_threshold(&self) -> u32 {
        self.alert_threshold
    }

    /// Adds stock, registering the device if new. Returns the new level.
    pub fn add(&mut self, device: impl Into<String>, quantity: u32) -> u32 {
        let level = self.levels.entry(device.into()).or_insert(0);
        *level = level.saturating_add(quantity);
        *level
    }

    /// Current level of a device.
    pub fn level(&self, device: &str) -> Option<u32> {
        self.levels.get(device).copied()
    }

    /// Whether the device is registered.
    pub fn contains(&self, device: &str) -> bool {
        self.levels.contains_key(device)
    }

    /// Checks that `quantity` units are available without drawing them.
    ///
    /// # Errors
    /// [`InventoryError::UnknownDevice`] or [`InventoryError::InsufficientStock`].
    pub fn check(&self, device: &str, quantity: u32) -> Result<(), InventoryError> {
        let available = self
            .level(device)
            .ok_or_else(|| InventoryError::UnknownDevice(device.to_string()))?;
        if available < quantity {
            return Err(InventoryError::InsufficientStock {
                device: device.to_string(),
                required: quantity,
                available,
            });
        }
        Ok(())
    }

    /// Draws `quantity` units. Returns the remaining level.
    ///
    /// # Errors
    /// Same as [`check`](Self::check); stock is unchanged on error.
    pub fn consume(&mut self, device: &str, quantity: u32) -> Result<u32, InventoryError> {
        self.check(device, quantity)?;
        let level = self
            .levels
            .get_mut(device)
            .ok_or_else(|| InventoryError::UnknownDevice(device.to_string()))?;
        *level -= quantity;

        if *level <= self.alert_threshold {
            tracing::warn!(device, level = *level, "Low stock");
        }
        Ok(*level)
    }

    /// Devices at or below the alert threshold, in name order.
    pub fn low_stock(&self) -> Vec<(&str, u32)> {
        self.levels
            .iter()
            .map(|(name, &level)| (name.as_str(), level))
            .filter(|&(_, level)| level <= self.alert_threshold)
            .collect()
    }

    /// All devices with their levels, in name order.
    pub fn levels(&self) -> impl Iterator<Item = (&str, u32)> {
        self.levels.iter().map(|(name, &level)| (name.as_str(), level))
    }
}
