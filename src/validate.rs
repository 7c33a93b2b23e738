//! Feasibility Validator (spec §4.2): rejects demonstrably infeasible
//! demand before the solver runs, with actionable diagnostics.
//!
//! Grounded almost line for line on `solver.py`'s `validar_recursos`:
//! a slot-keyed demand map for the coverage check, then per-subject hour
//! totals for the capacity check.

use std::collections::HashMap;

use crate::competence::Competences;
use crate::domain::{Section, Slot, SubjectId, Teacher};
use crate::error::ScheduleError;

/// Hours a single section contributes to a subject's weekly load,
/// regardless of modality (4 days × 2h or 1 day × 8h both equal 8).
const HOURS_PER_SECTION: i64 = 8;

/// Runs both checks in order, returning the first failure.
pub fn validate(sections: &[Section], teachers: &[Teacher], competences: &Competences) -> Result<(), ScheduleError> {
    check_per_slot_coverage(sections, competences)?;
    check_per_subject_capacity(sections, teachers, competences)?;
    Ok(())
}

fn check_per_slot_coverage(sections: &[Section], competences: &Competences) -> Result<(), ScheduleError> {
    let mut demand: HashMap<Slot, HashMap<SubjectId, usize>> = HashMap::new();
    for section in sections {
        *demand
            .entry(section.slot())
            .or_default()
            .entry(section.subject.clone())
            .or_insert(0) += 1;
    }

    // Deterministic iteration order for reproducible diagnostics.
    let mut slots: Vec<&Slot> = demand.keys().collect();
    slots.sort();
    for slot in slots {
        let per_subject = &demand[slot];
        let mut subject_ids: Vec<&SubjectId> = per_subject.keys().collect();
        subject_ids.sort();
        for subject in subject_ids {
            let required = per_subject[subject];
            let available = competences.competent_teachers(subject).len();
            if available < required {
                return Err(ScheduleError::InsufficientCoverage {
                    subject: subject.clone(),
                    slot: slot.day_pattern.label(slot.start_hour),
                    required,
                    available,
                });
            }
        }
    }
    Ok(())
}

fn check_per_subject_capacity(
    sections: &[Section],
    teachers: &[Teacher],
    competences: &Competences,
) -> Result<(), ScheduleError> {
    let mut section_count: HashMap<SubjectId, i64> = HashMap::new();
    for section in sections {
        *section_count.entry(section.subject.clone()).or_insert(0) += 1;
    }

    let hours_by_teacher: HashMap<_, _> = teachers.iter().map(|t| (t.id.clone(), t.max_hours_week)).collect();

    let mut subject_ids: Vec<&SubjectId> = section_count.keys().collect();
    subject_ids.sort();
    for subject in subject_ids {
        let required_hours = section_count[subject] * HOURS_PER_SECTION;
        let available_hours: i64 = competences
            .competent_teachers(subject)
            .iter()
            .filter_map(|t| hours_by_teacher.get(t))
            .sum();
        if available_hours < required_hours {
            return Err(ScheduleError::InsufficientCapacity {
                subject: subject.clone(),
                hours_need: required_hours,
                hours_have: available_hours,
            });
        }
    }
    Ok(())
}
