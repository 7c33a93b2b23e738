//! Hour bookkeeping shared by the gap-rule and consecutive-bonus builders.

use std::collections::BTreeSet;

use crate::domain::{DayPattern, Section};

/// Sorted, distinct start hours among weekday sections (Presential and
/// Online-Weekday alike) — generalizes the original's fixed 7-slot array
/// (`slots_lj_map = {7:0, 9:1, ...}`) to whatever hours the demand actually
/// uses.
pub fn weekday_hours(sections: &[Section]) -> Vec<i64> {
    sections
        .iter()
        .filter(|s| s.day_pattern == DayPattern::Weekday)
        .map(|s| s.start_hour)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive_shift, Modality, SubjectId};

    fn section(modality: Modality, day_pattern: DayPattern, hour: i64) -> Section {
        Section {
            label: "A".into(),
            subject: SubjectId { name: "X".into(), level: 1 },
            level: 1,
            shift: derive_shift(modality, hour),
            modality,
            start_hour: hour,
            day_pattern,
        }
    }

    #[test]
    fn dedups_and_sorts_weekday_hours_only() {
        let sections = vec![
            section(Modality::Presential, DayPattern::Weekday, 11),
            section(Modality::OnlineWeekday, DayPattern::Weekday, 7),
            section(Modality::Presential, DayPattern::Weekday, 7),
            section(Modality::OnlineWeekend, DayPattern::Weekend, 8),
        ];
        assert_eq!(weekday_hours(&sections), vec![7, 11]);
    }
}
