//! Resource catalog: the static configuration a run schedules against.
//!
//! The catalog is an immutable value (rooms, daily windows, labs, day
//! horizon) passed into the engine. Independent runs can share one catalog
//! across threads.
//!
//! # Candidate order
//! Candidate slots are enumerated day-major, then window, then room, each in
//! declaration order. This order is the scheduling priority: first-fit takes
//! the earliest free candidate.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScheduleError;
use crate::models::{GroupPolicy, Lab, LabId, Room, Slot, TimeWindow};
use crate::validation::{validate_catalog, ValidationError, ValidationErrorKind};

/// Serializable catalog description.
///
/// `days` may be omitted, in which case the horizon is derived from demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Labs in scheduling order.
    pub labs: Vec<Lab>,
    /// Rooms in priority order.
    pub rooms: Vec<Room>,
    /// Daily windows in priority order.
    pub windows: Vec<TimeWindow>,
    /// Explicit day horizon.
    #[serde(default)]
    pub days: Option<u32>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCatalog {
    labs: Vec<Lab>,
    rooms: Vec<Room>,
    windows: Vec<TimeWindow>,
    explicit_days: Option<u32>,
    days: u32,
}

impl ResourceCatalog {
    /// Creates a catalog, validating its structure.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCatalog`] listing every detected problem.
    pub fn new(
        labs: Vec<Lab>,
        rooms: Vec<Room>,
        windows: Vec<TimeWindow>,
        days: Option<u32>,
    ) -> Result<Self, ScheduleError> {
        validate_catalog(&labs, &rooms, &windows, days).map_err(ScheduleError::InvalidCatalog)?;
        let derived = days.unwrap_or_else(|| derive_days(&labs, rooms.len(), windows.len()));
        Ok(Self {
            labs,
            rooms,
            windows,
            explicit_days: days,
            days: derived,
        })
    }

    /// Creates a catalog from its serializable description.
    pub fn from_config(config: CatalogConfig) -> Result<Self, ScheduleError> {
        Self::new(config.labs, config.rooms, config.windows, config.days)
    }

    /// Parses and validates a JSON catalog description.
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Reads, parses and validates a JSON catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded catalog file");
        Self::from_json_str(&text)
    }

    /// Serializable description of this catalog.
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            labs: self.labs.clone(),
            rooms: self.rooms.clone(),
            windows: self.windows.clone(),
            days: self.explicit_days,
        }
    }

    /// The reference deployment: 16 labs, 5 rooms, 3 windows, 14 days.
    pub fn reference() -> Self {
        let labs = vec![
            Lab::standard(1, "Igiene mani").with_duration(150),
            Lab::standard(2, "Gestione DPI").with_duration(150),
            Lab::standard(3, "Ergonomia").with_duration(150),
            Lab::standard(4, "Mobilizzazione").with_duration(300),
            Lab::standard(5, "Cura di sé").with_duration(300),
            Lab::standard(6, "Gestione ferita chirurgica").with_duration(150),
            Lab::standard(7, "Gestione lesioni cutanee").with_duration(150),
            Lab::standard(8, "Rilevazione PV").with_duration(300),
            Lab::standard(9, "Gestione dispositivi di eliminazione urinaria").with_duration(300),
            Lab::standard(10, "Venipuntura").with_duration(150),
            Lab::standard(11, "Ragionamento diagnostico").with_duration(450),
            Lab::standard(12, "Valutazione ABC").with_duration(150),
            Lab::reduced(13, "Gestione mobilizzazione").with_duration(150),
            Lab::reduced(14, "Gestione terapia").with_duration(150),
            Lab::reduced(15, "Valutazione respiratoria").with_duration(150),
            Lab::reduced(16, "Valutazione cardiocircolatoria").with_duration(150),
        ];
        let rooms = vec![
            Room::new("Florence"),
            Room::new("Esercitazione 1"),
            Room::new("Esercitazione 2"),
            Room::new("Leininger 1"),
            Room::new("Leininger 2"),
        ];
        let windows = vec![
            TimeWindow::hm(8, 30, 11, 0),
            TimeWindow::hm(11, 10, 13, 40),
            TimeWindow::hm(14, 10, 17, 10),
        ];
        Self {
            labs,
            rooms,
            windows,
            explicit_days: Some(14),
            days: 14,
        }
    }

    /// Restricts the catalog to the selected labs, keeping catalog order.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCatalog`] if a selected id is unknown or the
    /// selection is empty.
    pub fn select_labs(&self, ids: &[LabId]) -> Result<Self, ScheduleError> {
        let unknown: Vec<ValidationError> = ids
            .iter()
            .filter(|id| self.lab(**id).is_none())
            .map(|id| {
                ValidationError::new(
                    ValidationErrorKind::InvalidLabReference,
                    format!("Selected lab {id} is not in the catalog"),
                )
            })
            .collect();
        if !unknown.is_empty() {
            return Err(ScheduleError::InvalidCatalog(unknown));
        }

        let labs = self
            .labs
            .iter()
            .filter(|lab| ids.contains(&lab.id))
            .cloned()
            .collect();
        Self::new(
            labs,
            self.rooms.clone(),
            self.windows.clone(),
            self.explicit_days,
        )
    }

    /// Labs in scheduling order.
    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    /// Rooms in priority order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Daily windows in priority order.
    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    /// Number of schedulable days.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Finds a lab by id.
    pub fn lab(&self, id: LabId) -> Option<&Lab> {
        self.labs.iter().find(|lab| lab.id == id)
    }

    /// Room at a slot's room index.
    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Window at a slot's window index.
    pub fn window(&self, index: usize) -> Option<&TimeWindow> {
        self.windows.get(index)
    }

    /// Total number of (day, window, room) slots.
    pub fn slot_count(&self) -> usize {
        self.days as usize * self.windows.len() * self.rooms.len()
    }

    /// Candidate slots for a policy, in priority order.
    pub fn candidate_slots(&self, policy: GroupPolicy) -> Vec<Slot> {
        self.enumerate(|_, room| room.serves(policy))
    }

    /// Candidate slots for a lab: the policy's candidates narrowed to the
    /// lab's duration and allowed rooms.
    pub fn candidate_slots_for(&self, lab: &Lab) -> Vec<Slot> {
        self.enumerate(|window, room| {
            room.serves(lab.policy) && lab.allows_room(&room.id) && lab.fits_window(window)
        })
    }

    fn enumerate<F>(&self, eligible: F) -> Vec<Slot>
    where
        F: Fn(&TimeWindow, &Room) -> bool,
    {
        let mut slots = Vec::new();
        for day in 0..self.days {
            for (w, window) in self.windows.iter().enumerate() {
                for (r, room) in self.rooms.iter().enumerate() {
                    if eligible(window, room) {
                        slots.push(Slot::new(day, w, r));
                    }
                }
            }
        }
        slots
    }
}

/// Day horizon large enough for every lab's largest possible group set.
fn derive_days(labs: &[Lab], rooms: usize, windows: usize) -> u32 {
    let demand: usize = labs.iter().map(|lab| lab.policy.max_groups()).sum();
    let per_day = (rooms * windows).max(1);
    let days = demand.div_ceil(per_day).max(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}
