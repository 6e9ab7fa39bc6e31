//! Slot selection strategies.
//!
//! The engine asks a strategy which candidate slot a (group, lab) pair
//! should take. The strategy only chooses; the engine commits. Swapping the
//! strategy leaves the ledger and the partitioner untouched.

use std::fmt::Debug;

use crate::catalog::ResourceCatalog;
use crate::ledger::SlotLedger;
use crate::models::{Group, Lab, Slot};

/// Chooses a slot for one (group, lab) requirement.
pub trait AssignmentStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "first-fit").
    fn name(&self) -> &'static str;

    /// Picks a slot among `candidates` (in catalog priority order), or
    /// `None` if the requirement cannot be met.
    ///
    /// A returned slot must be free for the group in `ledger` and its room
    /// must seat the group.
    fn select(
        &self,
        group: &Group,
        lab: &Lab,
        candidates: &[Slot],
        ledger: &SlotLedger,
        catalog: &ResourceCatalog,
    ) -> Option<Slot>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Takes the first free candidate in priority order.
///
/// No look-ahead and no backtracking: later labs get whatever earlier labs
/// left over.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl AssignmentStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn select(
        &self,
        group: &Group,
        _lab: &Lab,
        candidates: &[Slot],
        ledger: &SlotLedger,
        catalog: &ResourceCatalog,
    ) -> Option<Slot> {
        candidates.iter().copied().find(|&slot| {
            ledger.is_free(group, slot)
                && catalog
                    .room(slot.room)
                    .is_some_and(|room| room.fits(group.size()))
        })
    }

    fn description(&self) -> &'static str {
        "First free slot in day, window, room order"
    }
}
