//! Error types.
//!
//! Only malformed input and ledger inconsistencies are errors. A group
//! that finds no slot is reported in the schedule, not raised.

use thiserror::Error;

use crate::models::{GroupLabel, LabId, Slot};
use crate::validation::ValidationError;

/// Errors that abort a scheduling run.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid roster size: the roster has no students")]
    InvalidRosterSize,
    #[error("Invalid catalog: {}", join_messages(.0))]
    InvalidCatalog(Vec<ValidationError>),
    #[error("Slot already taken: group {group} at {slot:?}")]
    SlotAlreadyTaken { group: GroupLabel, slot: Slot },
    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Errors raised by inventory and completion tracking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Unknown device: {0}")]
    UnknownDevice(String),
    #[error("Insufficient stock of {device}: required {required}, available {available}")]
    InsufficientStock {
        device: String,
        required: u32,
        available: u32,
    },
    #[error("Lab {lab_id} is already completed for group {group}")]
    AlreadyCompleted { lab_id: LabId, group: GroupLabel },
    #[error("Lab not found in catalog: {0}")]
    UnknownLab(LabId),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_catalog_message_lists_all() {
        let err = ScheduleError::InvalidCatalog(vec![
            ValidationError::new(ValidationErrorKind::NoLabs, "Catalog has no labs"),
            ValidationError::new(ValidationErrorKind::NoRooms, "Catalog has no rooms"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid catalog: Catalog has no labs; Catalog has no rooms"
        );
    }

    #[test]
    fn test_inventory_error_message() {
        let err = InventoryError::InsufficientStock {
            device: "Guanti".into(),
            required: 30,
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock of Guanti: required 30, available 12"
        );
    }
}
