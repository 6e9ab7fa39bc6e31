//! Input validation for lab rotation catalogs.
//!
//! Checks structural integrity of labs, rooms and windows before a
//! catalog is accepted. Detects:
//! - Empty lab, room or window lists
//! - A zero or implausibly long day horizon
//! - Duplicate lab or room IDs
//! - Empty or inverted time windows
//! - Labs restricted to rooms that don't exist
//!
//! Feasibility is not checked here: a lab no room can host is valid input
//! and simply ends up unscheduled.

use crate::models::{Lab, Room, TimeWindow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Longest accepted explicit day horizon.
pub const MAX_DAYS: u32 = 366;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No labs declared.
    NoLabs,
    /// No rooms declared.
    NoRooms,
    /// No daily windows declared.
    NoWindows,
    /// Day horizon explicitly set to zero.
    NoDays,
    /// Day horizon longer than [`MAX_DAYS`].
    TooManyDays,
    /// Two entities share the same ID.
    DuplicateId,
    /// A window ends at or before its start.
    InvalidWindow,
    /// A lab references a room that doesn't exist.
    InvalidRoomReference,
    /// A lab selection names a lab that doesn't exist.
    InvalidLabReference,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the parts of a catalog.
///
/// Checks:
/// 1. At least one lab, room and window
/// 2. An explicit day count between 1 and [`MAX_DAYS`]
/// 3. No duplicate lab IDs
/// 4. No duplicate room IDs
/// 5. Every window has a positive length
/// 6. Every allowed-room reference points to an existing room
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    labs: &[Lab],
    rooms: &[Room],
    windows: &[TimeWindow],
    days: Option<u32>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if labs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoLabs,
            "Catalog has no labs",
        ));
    }
    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "Catalog has no rooms",
        ));
    }
    if windows.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWindows,
            "Catalog has no time windows",
        ));
    }
    match days {
        Some(0) => errors.push(ValidationError::new(
            ValidationErrorKind::NoDays,
            "Catalog schedules over zero days",
        )),
        Some(d) if d > MAX_DAYS => errors.push(ValidationError::new(
            ValidationErrorKind::TooManyDays,
            format!("Catalog schedules over {d} days (at most {MAX_DAYS})"),
        )),
        _ => {}
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut lab_ids = HashSet::new();
    for lab in labs {
        if !lab_ids.insert(lab.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate lab ID: {}", lab.id),
            ));
        }
    }

    for (idx, w) in windows.iter().enumerate() {
        if !w.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!("Window {idx} ({w}) does not end after it starts"),
            ));
        }
    }

    for lab in labs {
        for room in &lab.allowed_rooms {
            if !room_ids.contains(room.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRoomReference,
                    format!("Lab '{}' references unknown room '{}'", lab.name, room),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
