//! Typed domain entities and the pure functions that bind them together.
//!
//! Modality is a closed enumeration; day-pattern, block duration, and shift
//! are all pure functions of `(modality, start_hour)`, never stored
//! redundantly anywhere a caller could let them drift out of sync.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a Subject: `(name, level)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubjectId {
    pub name: String,
    pub level: i32,
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Nivel {}", self.name, self.level)
    }
}

/// A teacher's unique name, used as their identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeacherId(pub String);

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-modality count of sections demanded at each start hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandDescriptor {
    pub presential: BTreeMap<i64, i64>,
    pub online_weekday: BTreeMap<i64, i64>,
    pub online_weekend: BTreeMap<i64, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub demand: DemandDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub max_hours_week: i64,
    pub max_hours_day: i64,
}

/// Authorization relation: `teacher` may teach `subject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competence {
    pub teacher: TeacherId,
    pub subject: SubjectId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Presential,
    OnlineWeekday,
    OnlineWeekend,
}

impl Modality {
    pub fn day_pattern(self) -> DayPattern {
        match self {
            Modality::Presential | Modality::OnlineWeekday => DayPattern::Weekday,
            Modality::OnlineWeekend => DayPattern::Weekend,
        }
    }

    pub fn is_online(self) -> bool {
        matches!(self, Modality::OnlineWeekday | Modality::OnlineWeekend)
    }
}

/// The set of weekdays a section occupies: Mon–Thu, or Saturday alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayPattern {
    Weekday,
    Weekend,
}

impl DayPattern {
    pub fn days(self) -> &'static [Day] {
        match self {
            DayPattern::Weekday => &[Day::Mon, Day::Tue, Day::Wed, Day::Thu],
            DayPattern::Weekend => &[Day::Sat],
        }
    }

    pub fn block_hours(self) -> i64 {
        match self {
            DayPattern::Weekday => 2,
            DayPattern::Weekend => 8,
        }
    }

    pub fn label(self, start_hour: i64) -> String {
        match self {
            DayPattern::Weekday => format!("Mon–Thu {:02}:00", start_hour),
            DayPattern::Weekend => format!("Sat {:02}:00", start_hour),
        }
    }
}

/// Day encoding per spec §6: 0=Mon .. 6=Sun (Fri and Sun are never produced
/// by either day-pattern used here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon = 0,
    Tue = 1,
    Wed = 2,
    Thu = 3,
    Fri = 4,
    Sat = 5,
    Sun = 6,
}

impl Day {
    pub fn index(self) -> i64 {
        self as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
    Weekend,
}

/// Derive Shift from modality and start hour, per §3.
pub fn derive_shift(modality: Modality, start_hour: i64) -> Shift {
    if modality == Modality::OnlineWeekend {
        return Shift::Weekend;
    }
    if start_hour < 13 {
        Shift::Morning
    } else if start_hour <= 18 {
        Shift::Afternoon
    } else {
        Shift::Evening
    }
}

/// A concrete instance of a subject to be taught, produced by the
/// instantiator. Ephemeral: rebuilt wholesale on every generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub subject: SubjectId,
    pub level: i32,
    pub shift: Shift,
    pub modality: Modality,
    pub start_hour: i64,
    pub day_pattern: DayPattern,
}

impl Section {
    pub fn slot(&self) -> Slot {
        Slot {
            day_pattern: self.day_pattern,
            start_hour: self.start_hour,
        }
    }
}

/// `(day_pattern, start_hour)` — the atomic unit of scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub day_pattern: DayPattern,
    pub start_hour: i64,
}

/// One concrete weekday occurrence of a Section, assigned to a Teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub day: Day,
    pub start_hour: i64,
    pub end_hour: i64,
    pub teacher: TeacherId,
    pub subject: SubjectId,
    pub section_label: String,
}
