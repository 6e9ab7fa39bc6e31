//! Schedule projections and completion statistics.
//!
//! Every view is computed on demand from a [`Schedule`] and the catalog it
//! was built from; the report holds no state of its own.
//!
//! # Views
//!
//! | View | Key | Entries ordered by |
//! |------|-----|--------------------|
//! | By room | room (catalog order) | day, window |
//! | By lab | lab (catalog order) | group |
//! | By day | day (ascending) | window, room |
//! | By student | student | day, window |

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::ResourceCatalog;
use crate::models::{
    Assignment, DeviceRequirement, GroupLabel, LabId, Schedule, Slot, StudentId,
};

const UNKNOWN: &str = "?";

/// Aggregate completion of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStats {
    /// Committed assignments.
    pub scheduled: usize,
    /// Requested (group, lab) pairs.
    pub total_requested: usize,
    /// Requirements left without a slot.
    pub unscheduled: usize,
    /// `scheduled / total_requested` in percent, one decimal, ties to even.
    pub percentage: f64,
}

impl CompletionStats {
    /// Computes completion from a schedule.
    ///
    /// An empty request set counts as complete (100.0). A schedule with any
    /// unscheduled requirement never reports 100.0.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let scheduled = schedule.assignment_count();
        let unscheduled = schedule.unscheduled.len();
        let total_requested = scheduled + unscheduled;

        let percentage = if total_requested == 0 {
            100.0
        } else {
            let tenths = tenths_of_percent(scheduled, total_requested);
            let tenths = if unscheduled > 0 { tenths.min(999) } else { tenths };
            tenths as f64 / 10.0
        };

        Self {
            scheduled,
            total_requested,
            unscheduled,
            percentage,
        }
    }

    /// Whether every requirement was satisfied.
    pub fn is_complete(&self) -> bool {
        self.unscheduled == 0
    }
}

/// `1000 * part / whole` rounded to the nearest integer, ties to even.
fn tenths_of_percent(part: usize, whole: usize) -> u64 {
    let num = 1000 * part as u64;
    let whole = whole as u64;
    let (q, rem) = (num / whole, num % whole);
    match (2 * rem).cmp(&whole) {
        Ordering::Greater => q + 1,
        Ordering::Equal => q + (q & 1),
        Ordering::Less => q,
    }
}

impl fmt::Display for CompletionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.scheduled, self.total_requested, self.percentage
        )
    }
}

/// One session in a room's timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomEntry<'a> {
    /// Day index.
    pub day: u32,
    /// Window index within the day.
    pub window: usize,
    /// Lab name.
    pub lab: &'a str,
    /// Attending group.
    pub group: GroupLabel,
}

/// A room's timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView<'a> {
    /// Room id.
    pub room: &'a str,
    /// Sessions ordered by (day, window).
    pub entries: Vec<RoomEntry<'a>>,
}

/// One group's session of a lab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabEntry {
    /// Attending group.
    pub group: GroupLabel,
    /// Booked slot.
    pub slot: Slot,
}

/// A lab's sessions and the groups left without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabView<'a> {
    /// Lab identifier.
    pub lab_id: LabId,
    /// Lab name.
    pub lab: &'a str,
    /// Sessions ordered by group.
    pub entries: Vec<LabEntry>,
    /// Groups without a session, in label order.
    pub unscheduled: Vec<GroupLabel>,
}

/// One session on a day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry<'a> {
    /// Window index within the day.
    pub window: usize,
    /// Room id.
    pub room: &'a str,
    /// Lab name.
    pub lab: &'a str,
    /// Attending group.
    pub group: GroupLabel,
}

/// Whether a (lab, group) requirement was met.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Satisfaction<'a> {
    /// Lab identifier.
    pub lab_id: LabId,
    /// Lab name.
    pub lab: &'a str,
    /// Required group.
    pub group: GroupLabel,
    /// Whether the group got a session.
    pub satisfied: bool,
}

/// Devices a lab consumes, passed through for inventory planning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceHint<'a> {
    /// Lab identifier.
    pub lab_id: LabId,
    /// Lab name.
    pub lab: &'a str,
    /// Per-student device requirements, as declared.
    pub devices: &'a [DeviceRequirement],
}

/// Read-only projections over one schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleReport<'a> {
    catalog: &'a ResourceCatalog,
    schedule: &'a Schedule,
}

impl<'a> ScheduleReport<'a> {
    /// Creates a report over a schedule and its catalog.
    pub fn new(catalog: &'a ResourceCatalog, schedule: &'a Schedule) -> Self {
        Self { catalog, schedule }
    }

    /// Completion statistics.
    pub fn completion(&self) -> CompletionStats {
        CompletionStats::from_schedule(self.schedule)
    }

    /// Timetable per room, in catalog room order.
    pub fn by_room(&self) -> Vec<RoomView<'a>> {
        self.catalog
            .rooms()
            .iter()
            .enumerate()
            .map(|(idx, room)| {
                let mut entries: Vec<RoomEntry<'a>> = self
                    .schedule
                    .assignments_for_room(idx)
                    .into_iter()
                    .map(|a| RoomEntry {
                        day: a.slot.day,
                        window: a.slot.window,
                        lab: self.lab_name(a.lab_id),
                        group: a.group,
                    })
                    .collect();
                entries.sort_by_key(|e| (e.day, e.window));
                RoomView {
                    room: room.id.as_str(),
                    entries,
                }
            })
            .collect()
    }

    /// Sessions per lab, in catalog lab order.
    pub fn by_lab(&self) -> Vec<LabView<'a>> {
        self.catalog
            .labs()
            .iter()
            .map(|lab| {
                let mut entries: Vec<LabEntry> = self
                    .schedule
                    .assignments_for_lab(lab.id)
                    .into_iter()
                    .map(|a| LabEntry {
                        group: a.group,
                        slot: a.slot,
                    })
                    .collect();
                entries.sort_by_key(|e| e.group);
                let mut unscheduled: Vec<GroupLabel> = self
                    .schedule
                    .unscheduled_for_lab(lab.id)
                    .into_iter()
                    .map(|u| u.group)
                    .collect();
                unscheduled.sort();
                LabView {
                    lab_id: lab.id,
                    lab: lab.name.as_str(),
                    entries,
                    unscheduled,
                }
            })
            .collect()
    }

    /// Sessions per day, ascending.
    pub fn by_day(&self) -> BTreeMap<u32, Vec<DayEntry<'a>>> {
        let mut days: BTreeMap<u32, Vec<(Slot, DayEntry<'a>)>> = BTreeMap::new();
        for a in &self.schedule.assignments {
            days.entry(a.slot.day).or_default().push((
                a.slot,
                DayEntry {
                    window: a.slot.window,
                    room: self.room_name(a.slot.room),
                    lab: self.lab_name(a.lab_id),
                    group: a.group,
                },
            ));
        }

        days.into_iter()
            .map(|(day, mut entries)| {
                entries.sort_by_key(|(slot, _)| *slot);
                (day, entries.into_iter().map(|(_, e)| e).collect())
            })
            .collect()
    }

    /// A student's sessions, ordered by (day, window).
    pub fn for_student(&self, student: StudentId) -> Vec<&'a Assignment> {
        let mut sessions: Vec<&'a Assignment> = self
            .schedule
            .assignments
            .iter()
            .filter(|a| a.students.contains(&student))
            .collect();
        sessions.sort_by_key(|a| (a.slot.day, a.slot.window));
        sessions
    }

    /// Satisfied/unsatisfied table, in catalog lab order then group order.
    pub fn satisfaction(&self) -> Vec<Satisfaction<'a>> {
        self.by_lab()
            .into_iter()
            .flat_map(|view| {
                let mut rows: Vec<Satisfaction<'a>> = view
                    .entries
                    .iter()
                    .map(|e| (e.group, true))
                    .chain(view.unscheduled.iter().map(|g| (*g, false)))
                    .map(|(group, satisfied)| Satisfaction {
                        lab_id: view.lab_id,
                        lab: view.lab,
                        group,
                        satisfied,
                    })
                    .collect();
                rows.sort_by_key(|r| r.group);
                rows
            })
            .collect()
    }

    /// Device requirements of every lab that declares any.
    pub fn device_hints(&self) -> Vec<DeviceHint<'a>> {
        self.catalog
            .labs()
            .iter()
            .filter(|lab| !lab.devices.is_empty())
            .map(|lab| DeviceHint {
                lab_id: lab.id,
                lab: lab.name.as_str(),
                devices: lab.devices.as_slice(),
            })
            .collect()
    }

    fn lab_name(&self, id: LabId) -> &'a str {
        self.catalog
            .lab(id)
            .map(|lab| lab.name.as_str())
            .unwrap_or(UNKNOWN)
    }

    fn room_name(&self, index: usize) -> &'a str {
        self.catalog
            .room(index)
            .map(|room| room.id.as_str())
            .unwrap_or(UNKNOWN)
    }
}

/// Plain-text summary: completion ratio, then every lab with its groups.
/// Unscheduled pairs are always listed.
impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scheduled sessions: {}", self.completion())?;
        for view in self.by_lab() {
            writeln!(f, "Lab {}:", view.lab)?;
            for e in &view.entries {
                let window = self
                    .catalog
                    .window(e.slot.window)
                    .map(ToString::to_string)
                    .unwrap_or_else(|| UNKNOWN.to_string());
                writeln!(
                    f,
                    "  Group {}: day {} {} {}",
                    e.group,
                    e.slot.day,
                    window,
                    self.room_name(e.slot.room)
                )?;
            }
            for g in &view.unscheduled {
                writeln!(f, "  Group {g}: UNSCHEDULED")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lab, Roster, Room, TimeWindow, UnscheduledRequirement};
    use crate::scheduler::AssignmentEngine;

    fn two_lab_catalog() -> ResourceCatalog {
        ResourceCatalog::new(
            vec![
                Lab::standard(1, "Igiene mani").with_device("Gel", 1),
                Lab::standard(2, "Venipuntura"),
            ],
            vec![Room::new("Florence"), Room::new("Leininger 1")],
            vec![TimeWindow::hm(8, 30, 11, 0), TimeWindow::hm(11, 10, 13, 40)],
            Some(2),
        )
        .unwrap()
    }

    fn schedule_for(catalog: &ResourceCatalog, students: usize) -> Schedule {
        AssignmentEngine::new()
            .run(&Roster::anonymous(students), catalog)
            .unwrap()
    }

    #[test]
    fn test_completion_reference() {
        let catalog = ResourceCatalog::reference();
        let schedule = schedule_for(&catalog, 75);
        let stats = ScheduleReport::new(&catalog, &schedule).completion();
        assert_eq!(stats.scheduled, 67);
        assert_eq!(stats.total_requested, 92);
        assert_eq!(stats.unscheduled, 25);
        assert!((stats.percentage - 72.8).abs() < 1e-9);
        assert!(!stats.is_complete());
        assert_eq!(stats.to_string(), "67/92 (72.8%)");
    }

    #[test]
    fn test_completion_arithmetic() {
        let mut schedule = Schedule::new();
        for i in 0..2 {
            schedule.add_assignment(Assignment::new(
                GroupLabel::Standard(i),
                1,
                Slot::new(0, 0, i as usize),
                vec![],
            ));
        }
        schedule.add_unscheduled(UnscheduledRequirement {
            group: GroupLabel::Standard(2),
            lab_id: 1,
        });
        let stats = CompletionStats::from_schedule(&schedule);
        // round(100 * 2 / 3, 1)
        assert!((stats.percentage - 66.7).abs() < 1e-9);
    }

    fn stats_for(scheduled: usize, unscheduled: usize) -> CompletionStats {
        let mut schedule = Schedule::new();
        for i in 0..scheduled {
            schedule.add_assignment(Assignment::new(
                GroupLabel::Unified,
                i as LabId,
                Slot::new(i as u32, 0, 0),
                vec![],
            ));
        }
        for i in 0..unscheduled {
            schedule.add_unscheduled(UnscheduledRequirement {
                group: GroupLabel::Unified,
                lab_id: (scheduled + i) as LabId,
            });
        }
        CompletionStats::from_schedule(&schedule)
    }

    #[test]
    fn test_completion_ties_round_to_even() {
        // 12.25% and 12.75%
        assert!((stats_for(49, 351).percentage - 12.2).abs() < 1e-9);
        assert!((stats_for(51, 349).percentage - 12.8).abs() < 1e-9);
        assert_eq!(stats_for(49, 351).to_string(), "49/400 (12.2%)");
        // 0.25% rounds down, 0.35% rounds up
        assert!((stats_for(1, 399).percentage - 0.2).abs() < 1e-9);
        assert!((stats_for(7, 1993).percentage - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_completion_never_rounds_to_full() {
        let mut schedule = Schedule::new();
        for i in 0..2000 {
            schedule.add_assignment(Assignment::new(
                GroupLabel::Unified,
                i,
                Slot::new(i, 0, 0),
                vec![],
            ));
        }
        schedule.add_unscheduled(UnscheduledRequirement {
            group: GroupLabel::Unified,
            lab_id: 9999,
        });
        let stats = CompletionStats::from_schedule(&schedule);
        assert!(stats.percentage < 100.0);
    }

    #[test]
    fn test_completion_empty_and_partial() {
        assert!((CompletionStats::from_schedule(&Schedule::new()).percentage - 100.0).abs() < 1e-9);

        let catalog = two_lab_catalog();
        let schedule = schedule_for(&catalog, 10);
        let stats = CompletionStats::from_schedule(&schedule);
        assert_eq!(stats.total_requested, 10);
        assert_eq!(stats.scheduled, 8);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_by_room() {
        let catalog = two_lab_catalog();
        let schedule = schedule_for(&catalog, 10);
        let views = ScheduleReport::new(&catalog, &schedule).by_room();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].room, "Florence");
        assert_eq!(views[0].entries.len(), 4);
        assert_eq!(
            views[0].entries[0],
            RoomEntry {
                day: 0,
                window: 0,
                lab: "Igiene mani",
                group: GroupLabel::Standard(0),
            }
        );
        let keys: Vec<(u32, usize)> = views[0].entries.iter().map(|e| (e.day, e.window)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_by_lab_and_satisfaction() {
        let catalog = two_lab_catalog();
        let schedule = schedule_for(&catalog, 10);
        let report = ScheduleReport::new(&catalog, &schedule);

        let views = report.by_lab();
        assert_eq!(views[0].lab, "Igiene mani");
        assert_eq!(views[0].entries.len(), 5);
        assert!(views[0].unscheduled.is_empty());
        // 8 slots total; the second lab keeps 3 of them for its 5 groups
        assert_eq!(views[1].entries.len(), 3);
        assert_eq!(views[1].unscheduled.len(), 2);

        let table = report.satisfaction();
        assert_eq!(table.len(), 10);
        assert_eq!(table.iter().filter(|r| r.satisfied).count(), 8);
        assert!(table[..5].iter().all(|r| r.lab_id == 1 && r.satisfied));
        let groups: Vec<GroupLabel> = table[5..].iter().map(|r| r.group).collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
    }

    #[test]
    fn test_by_day() {
        let catalog = two_lab_catalog();
        let schedule = schedule_for(&catalog, 10);
        let days = ScheduleReport::new(&catalog, &schedule).by_day();

        assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
        let day0 = &days[&0];
        assert_eq!(day0.len(), 4);
        assert_eq!(day0[0].window, 0);
        assert_eq!(day0[0].room, "Florence");
        assert_eq!(day0[1].room, "Leininger 1");
        assert_eq!(days.values().map(Vec::len).sum::<usize>(), 8);
    }

    #[test]
    fn test_for_student() {
        let catalog = ResourceCatalog::reference();
        let schedule = schedule_for(&catalog, 75);
        let report = ScheduleReport::new(&catalog, &schedule);

        // student 1 is in standard group A and reduced group 1
        let sessions = report.for_student(1);
        assert_eq!(sessions.len(), 7 + 4);
        assert!(sessions
            .windows(2)
            .all(|w| (w[0].slot.day, w[0].slot.window) <= (w[1].slot.day, w[1].slot.window)));
        assert!(report.for_student(999).is_empty());
    }

    #[test]
    fn test_device_hints() {
        let catalog = two_lab_catalog();
        let schedule = Schedule::new();
        let hints = ScheduleReport::new(&catalog, &schedule).device_hints();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].lab, "Igiene mani");
        assert_eq!(hints[0].devices[0].device, "Gel");
    }

    #[test]
    fn test_text_summary_lists_unscheduled() {
        let catalog = ResourceCatalog::reference();
        let schedule = schedule_for(&catalog, 75);
        let text = ScheduleReport::new(&catalog, &schedule).to_string();

        assert!(text.starts_with("Scheduled sessions: 67/92 (72.8%)"));
        assert!(text.contains("  Group A: day 0 08:30-11:00 Florence"));
        assert_eq!(text.matches("UNSCHEDULED").count(), 25);
    }
}
