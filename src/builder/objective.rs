//! Soft objective (spec §4.3): a weighted sum of teacher-level indicators
//! plus a handful of terms that turn out to be constants of the
//! instantiated sections rather than genuine decision-variable sums —
//! `balance_morning`/`balance_afternoon`/`pref_online_*` only count where
//! sections landed, not who teaches them, so they're folded in as a plain
//! `i64` added to the maximized expression rather than built from BoolVars.

use std::collections::HashMap;

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

use super::gap::HourIndicators;
use super::linking::{and_indicator, at_least_one_indicator};
use super::DecisionMatrix;
use crate::config::SchedulingConfig;
use crate::domain::{DayPattern, Modality, Section, Shift, Teacher};

/// The terms that depend only on where sections were instantiated, not on
/// which teacher ends up assigned to them.
pub struct PreferenceConstants {
    pub balance_morning: i64,
    pub balance_afternoon: i64,
    pub pref_online_high: i64,
    pub pref_online_med: i64,
    pub pref_online_low: i64,
}

pub fn preference_constants(sections: &[Section], config: &SchedulingConfig) -> PreferenceConstants {
    let boundaries = &config.shift_boundaries;
    let tiers = &config.online_preference_tiers;

    let mut morning_presential: HashMap<i64, i64> = HashMap::new();
    let mut afternoon_presential: HashMap<i64, i64> = HashMap::new();
    let mut pref_online_high = 0i64;
    let mut pref_online_med = 0i64;
    let mut pref_online_low = 0i64;

    for section in sections {
        if section.day_pattern != DayPattern::Weekday {
            continue;
        }
        match section.modality {
            Modality::Presential => {
                if section.start_hour < boundaries.afternoon_starts_at {
                    *morning_presential.entry(section.start_hour).or_insert(0) += 1;
                } else if section.start_hour < boundaries.evening_starts_at {
                    *afternoon_presential.entry(section.start_hour).or_insert(0) += 1;
                }
            }
            Modality::OnlineWeekday => match section.shift {
                Shift::Morning => {
                    if tiers.morning_tier1.contains(&section.start_hour) {
                        pref_online_high += 1;
                    } else if tiers.morning_tier2.contains(&section.start_hour) {
                        pref_online_med += 1;
                    } else if tiers.morning_tier3.contains(&section.start_hour) {
                        pref_online_low += 1;
                    }
                }
                Shift::Evening => {
                    if tiers.evening_tier1.contains(&section.start_hour) {
                        pref_online_high += 1;
                    } else if tiers.evening_tier2.contains(&section.start_hour) {
                        pref_online_med += 1;
                    }
                }
                Shift::Afternoon | Shift::Weekend => {}
            },
            Modality::OnlineWeekend => {}
        }
    }

    PreferenceConstants {
        balance_morning: morning_presential.values().copied().min().unwrap_or(0),
        balance_afternoon: afternoon_presential.values().copied().min().unwrap_or(0),
        pref_online_high,
        pref_online_med,
        pref_online_low,
    }
}

/// Per-teacher `assigned_any_t`, `has_presential_t`, `has_online_t`,
/// `virtual_only_t` (spec §4.3 "Auxiliary indicators"), indexed by
/// teacher index.
pub struct TeacherIndicators {
    pub assigned_any: Vec<BoolVar>,
    pub virtual_only: Vec<BoolVar>,
}

pub fn build_teacher_indicators(
    model: &mut CpModelBuilder,
    sections: &[Section],
    teachers: &[Teacher],
    vars: &DecisionMatrix,
) -> TeacherIndicators {
    let mut assigned_any = Vec::with_capacity(teachers.len());
    let mut virtual_only = Vec::with_capacity(teachers.len());

    for (t_idx, _teacher) in teachers.iter().enumerate() {
        let all_terms: Vec<BoolVar> = sections
            .iter()
            .enumerate()
            .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone())
            .collect();
        assigned_any.push(at_least_one_indicator(model, &all_terms));

        let presential_terms: Vec<BoolVar> = sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.modality == Modality::Presential)
            .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone())
            .collect();
        let has_presential = at_least_one_indicator(model, &presential_terms);

        let online_terms: Vec<BoolVar> = sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.modality.is_online())
            .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone())
            .collect();
        let has_online = at_least_one_indicator(model, &online_terms);

        let not_presential = LinearExpr::from(1) - LinearExpr::from(has_presential);
        virtual_only.push(and_indicator(model, LinearExpr::from(has_online), not_presential));
    }

    TeacherIndicators { assigned_any, virtual_only }
}

/// Builds the `consec` term's indicators (one `and_indicator` per
/// teacher per adjacent weekday-hour pair) and assembles the full weighted
/// objective, folding in the section-placement constants computed by
/// [`preference_constants`].
pub fn build_objective(
    model: &mut CpModelBuilder,
    teachers: &[Teacher],
    hour_indicators: &HourIndicators,
    teacher_indicators: &TeacherIndicators,
    preference_constants: &PreferenceConstants,
    config: &SchedulingConfig,
) -> LinearExpr {
    let weights = &config.weights;
    let hours = hour_indicators.hours();
    // Adjacent means "next 2h block", not merely consecutive in the
    // (possibly sparse) list of hours actually in use.
    let adjacent_pairs: Vec<(i64, i64)> = hours
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|(h1, h2)| h2 - h1 == 2)
        .collect();

    let mut weighted_terms: Vec<(i64, BoolVar)> = Vec::new();

    for (t_idx, _teacher) in teachers.iter().enumerate() {
        weighted_terms.push((weights.assigned, teacher_indicators.assigned_any[t_idx].clone()));
        weighted_terms.push((-weights.virtual_only_penalty, teacher_indicators.virtual_only[t_idx].clone()));

        for &(h1, h2) in &adjacent_pairs {
            let active_h1 = hour_indicators.active_expr(t_idx, h1);
            let active_h2 = hour_indicators.active_expr(t_idx, h2);
            let pair_active = and_indicator(model, active_h1, active_h2);
            // Every weekday Section's assignment is identical across its four
            // occurrences (Mon-Thu), so one indicator stands for the pair on
            // all four days at once.
            weighted_terms.push((weights.consecutive * 4, pair_active));
        }
    }

    let decision_dependent: LinearExpr = weighted_terms.into_iter().collect();

    let constant = weights.balance_morning * preference_constants.balance_morning
        + weights.balance_afternoon * preference_constants.balance_afternoon
        + weights.pref_online_high * preference_constants.pref_online_high
        + weights.pref_online_med * preference_constants.pref_online_med
        + weights.pref_online_low * preference_constants.pref_online_low;

    decision_dependent + LinearExpr::from(constant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{derive_shift, SubjectId};

    fn section(modality: Modality, hour: i64) -> Section {
        Section {
            label: "A".into(),
            subject: SubjectId { name: "X".into(), level: 1 },
            level: 1,
            shift: derive_shift(modality, hour),
            modality,
            start_hour: hour,
            day_pattern: modality.day_pattern(),
        }
    }

    #[test]
    fn balance_is_the_floor_across_distinct_presential_hours() {
        // Two sections at 7 (min must count occurrences, not distinct hours),
        // one at 9: the floor is min(2, 1) = 1.
        let sections = vec![
            section(Modality::Presential, 7),
            section(Modality::Presential, 7),
            section(Modality::Presential, 9),
        ];
        let constants = preference_constants(&sections, &SchedulingConfig::default());
        assert_eq!(constants.balance_morning, 1);
        assert_eq!(constants.balance_afternoon, 0);
    }

    #[test]
    fn online_weekday_hours_bucket_into_tiers_by_shift() {
        let sections = vec![
            section(Modality::OnlineWeekday, 7),  // morning tier1
            section(Modality::OnlineWeekday, 11), // morning tier2
            section(Modality::OnlineWeekday, 19), // evening tier1 (wins over morning tier3)
        ];
        let constants = preference_constants(&sections, &SchedulingConfig::default());
        assert_eq!(constants.pref_online_high, 2);
        assert_eq!(constants.pref_online_med, 1);
        assert_eq!(constants.pref_online_low, 0);
    }

    #[test]
    fn weekend_sections_never_feed_weekday_preference_terms() {
        let sections = vec![section(Modality::OnlineWeekend, 8)];
        let constants = preference_constants(&sections, &SchedulingConfig::default());
        assert_eq!(constants.balance_morning, 0);
        assert_eq!(constants.pref_online_high, 0);
    }
}
