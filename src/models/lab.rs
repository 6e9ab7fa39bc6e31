//! Lab activity model.
//!
//! A lab is a practical session every group of the required policy must
//! attend once. Optional duration and room restrictions narrow the slots a
//! lab can take; device requirements are only passed through to inventory.

use serde::{Deserialize, Serialize};

use super::{GroupPolicy, TimeWindow};

/// Lab identifier.
pub type LabId = u32;

/// A device a lab consumes, per attending student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRequirement {
    /// Device name (inventory key).
    pub device: String,
    /// Units consumed per student.
    pub quantity_per_student: u32,
}

impl DeviceRequirement {
    /// Creates a device requirement.
    pub fn new(device: impl Into<String>, quantity_per_student: u32) -> Self {
        Self {
            device: device.into(),
            quantity_per_student,
        }
    }

    /// Units needed for a group of `students`.
    pub fn total_for(&self, students: usize) -> u32 {
        self.quantity_per_student
            .saturating_mul(u32::try_from(students).unwrap_or(u32::MAX))
    }
}

/// A lab activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    /// Unique lab identifier.
    pub id: LabId,
    /// Display name.
    pub name: String,
    /// Group policy attending this lab.
    pub policy: GroupPolicy,
    /// Session length (minutes). `None` = fits any window.
    #[serde(default)]
    pub duration_min: Option<u32>,
    /// Rooms this lab may use. Empty = every room serving the policy.
    #[serde(default)]
    pub allowed_rooms: Vec<String>,
    /// Devices consumed when a session is completed.
    #[serde(default)]
    pub devices: Vec<DeviceRequirement>,
}

impl Lab {
    /// Creates a lab with no duration, room or device restrictions.
    pub fn new(id: LabId, name: impl Into<String>, policy: GroupPolicy) -> Self {
        Self {
            id,
            name: name.into(),
            policy,
            duration_min: None,
            allowed_rooms: Vec::new(),
            devices: Vec::new(),
        }
    }

    /// Creates a standard-policy lab.
    pub fn standard(id: LabId, name: impl Into<String>) -> Self {
        Self::new(id, name, GroupPolicy::Standard)
    }

    /// Creates a reduced-policy lab.
    pub fn reduced(id: LabId, name: impl Into<String>) -> Self {
        Self::new(id, name, GroupPolicy::Reduced)
    }

    /// Sets the session length.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_min = Some(minutes);
        self
    }

    /// Restricts the lab to the given rooms.
    pub fn with_allowed_rooms<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_rooms = rooms.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a device requirement.
    pub fn with_device(mut self, device: impl Into<String>, quantity_per_student: u32) -> Self {
        self.devices
            .push(DeviceRequirement::new(device, quantity_per_student));
        self
    }

    /// Whether a session of this lab fits the window.
    pub fn fits_window(&self, window: &TimeWindow) -> bool {
        match self.duration_min {
            None => true,
            Some(d) => window.duration_min() == d,
        }
    }

    /// Whether the lab may use the named room (policy is checked separately).
    pub fn allows_room(&self, room_id: &str) -> bool {
        self.allowed_rooms.is_empty() || self.allowed_rooms.iter().any(|r| r == room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_builder() {
        let lab = Lab::standard(1, "Igiene mani")
            .with_duration(150)
            .with_device("Guanti", 2);
        assert_eq!(lab.policy, GroupPolicy::Standard);
        assert_eq!(lab.duration_min, Some(150));
        assert_eq!(lab.devices, vec![DeviceRequirement::new("Guanti", 2)]);
    }

    #[test]
    fn test_fits_window() {
        let morning = TimeWindow::hm(8, 30, 11, 0);
        let afternoon = TimeWindow::hm(14, 10, 17, 10);
        let lab = Lab::reduced(2, "Gestione terapia").with_duration(150);
        assert!(lab.fits_window(&morning));
        assert!(!lab.fits_window(&afternoon));
        assert!(Lab::reduced(3, "Any").fits_window(&afternoon));
    }

    #[test]
    fn test_allowed_rooms() {
        let open = Lab::standard(1, "Open");
        assert!(open.allows_room("Florence"));

        let narrow = Lab::standard(2, "Narrow").with_allowed_rooms(["Florence"]);
        assert!(narrow.allows_room("Florence"));
        assert!(!narrow.allows_room("Leininger 1"));
    }

    #[test]
    fn test_device_total() {
        let req = DeviceRequirement::new("Siringhe", 3);
        assert_eq!(req.total_for(15), 45);
        assert_eq!(req.total_for(0), 0);
    }
}
