//! Standalone invariant checks (spec §8) used by scenario tests to assert
//! a solved-and-persisted schedule is actually well-formed, independent of
//! however the model happened to get there.

use std::collections::HashMap;

use crate::competence::Competences;
use crate::domain::{Assignment, Day, DayPattern, Section};

#[derive(Debug, PartialEq, Eq)]
pub enum Violation {
    Coverage { section_label: String, day: Day },
    Competence { section_label: String },
    Overlap { teacher: String, day: Day, start_hour: i64 },
    WeeklyCap { teacher: String },
    DailyCap { teacher: String, day: Day },
    ModalityGap { teacher: String, presential_hour: i64, online_hour: i64 },
    WeekendShape { section_label: String },
}

/// Invariant 1: exactly one Assignment per section per day in its pattern.
pub fn check_coverage(sections: &[Section], assignments: &[Assignment]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for section in sections {
        for &day in section.day_pattern.days() {
            let count = assignments
                .iter()
                .filter(|a| a.section_label == section.label && a.subject == section.subject && a.day == day)
                .count();
            if count != 1 {
                violations.push(Violation::Coverage {
                    section_label: section.label.clone(),
                    day,
                });
            }
        }
    }
    violations
}

/// Invariant 2: every Assignment's teacher holds Competence for its subject.
pub fn check_competence(assignments: &[Assignment], competences: &Competences) -> Vec<Violation> {
    assignments
        .iter()
        .filter(|a| !competences.is_competent(&a.subject, &a.teacher))
        .map(|a| Violation::Competence {
            section_label: a.section_label.clone(),
        })
        .collect()
}

/// Invariant 3: at most one Assignment per `(teacher, day, start_hour)`.
pub fn check_non_overlap(assignments: &[Assignment]) -> Vec<Violation> {
    let mut seen: HashMap<(String, Day, i64), usize> = HashMap::new();
    for a in assignments {
        *seen.entry((a.teacher.0.clone(), a.day, a.start_hour)).or_insert(0) += 1;
    }
    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((teacher, day, start_hour), _)| Violation::Overlap { teacher, day, start_hour })
        .collect()
}

/// Invariants 4 and 5: weekly and per-day hour caps, keyed by teacher
/// `max_hours_week`/`max_hours_day` looked up from `caps`.
pub fn check_hour_caps(assignments: &[Assignment], caps: &HashMap<String, (i64, i64)>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut weekly: HashMap<String, i64> = HashMap::new();
    let mut daily: HashMap<(String, Day), i64> = HashMap::new();

    for a in assignments {
        let hours = a.end_hour - a.start_hour;
        *weekly.entry(a.teacher.0.clone()).or_insert(0) += hours;
        *daily.entry((a.teacher.0.clone(), a.day)).or_insert(0) += hours;
    }

    for (teacher, total) in &weekly {
        if let Some((max_week, _)) = caps.get(teacher) {
            if total > max_week {
                violations.push(Violation::WeeklyCap { teacher: teacher.clone() });
            }
        }
    }
    for ((teacher, day), total) in &daily {
        if matches!(day, Day::Fri | Day::Sun) {
            continue;
        }
        if let Some((_, max_day)) = caps.get(teacher) {
            if total > max_day {
                violations.push(Violation::DailyCap {
                    teacher: teacher.clone(),
                    day: *day,
                });
            }
        }
    }
    violations
}

/// Invariant 6: modality gap — a teacher's presential and online weekday
/// hours must differ by exactly 4 (one empty 2h slot between); any other
/// distance, including identical hours, is a violation.
pub fn check_modality_gap(sections: &[Section], assignments: &[Assignment]) -> Vec<Violation> {
    let modality_by_section: HashMap<(&str, &crate::domain::SubjectId), crate::domain::Modality> = sections
        .iter()
        .map(|s| ((s.label.as_str(), &s.subject), s.modality))
        .collect();

    let mut by_teacher_day: HashMap<(String, Day), (Vec<i64>, Vec<i64>)> = HashMap::new();
    for a in assignments {
        if a.day == Day::Sat {
            continue;
        }
        let Some(&modality) = modality_by_section.get(&(a.section_label.as_str(), &a.subject)) else {
            continue;
        };
        let entry = by_teacher_day.entry((a.teacher.0.clone(), a.day)).or_default();
        match modality {
            crate::domain::Modality::Presential => entry.0.push(a.start_hour),
            crate::domain::Modality::OnlineWeekday => entry.1.push(a.start_hour),
            crate::domain::Modality::OnlineWeekend => {}
        }
    }

    let mut violations = Vec::new();
    for ((teacher, _day), (presential, online)) in by_teacher_day {
        for &h1 in &presential {
            for &h2 in &online {
                if (h1 - h2).abs() != 4 {
                    violations.push(Violation::ModalityGap {
                        teacher: teacher.clone(),
                        presential_hour: h1,
                        online_hour: h2,
                    });
                }
            }
        }
    }
    violations
}

/// Invariant 7: ONLINE_WEEKEND sections produce exactly one Saturday
/// Assignment of 8h duration.
pub fn check_weekend_shape(sections: &[Section], assignments: &[Assignment]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for section in sections.iter().filter(|s| s.day_pattern == DayPattern::Weekend) {
        let matches: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.section_label == section.label && a.subject == section.subject)
            .collect();
        let ok = matches.len() == 1
            && matches[0].day == Day::Sat
            && matches[0].end_hour - matches[0].start_hour == 8;
        if !ok {
            violations.push(Violation::WeekendShape {
                section_label: section.label.clone(),
            });
        }
    }
    violations
}
