//! Constraint Model Builder (spec §4.3): turns instantiated sections, the
//! teacher roster, and the competence index into a CP-SAT model whose
//! optimal solution is the published schedule.
//!
//! Grounded on `model_geneds.rs`'s decision-variable-matrix-plus-constraint-
//! functions shape, generalized from a single gen-ed slot to the full
//! section × teacher matrix this domain needs, and on `two_stage_schedule.rs`
//! for the `(coeff, BoolVar)` weighted-sum idiom used throughout.

mod gap;
mod hours;
mod linking;
mod objective;

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

pub use gap::HourIndicators;
pub use objective::PreferenceConstants;

use crate::competence::Competences;
use crate::config::SchedulingConfig;
use crate::domain::{DayPattern, Section, Slot, Teacher};
use crate::error::ScheduleError;

/// `vars[section_idx][teacher_idx]`: `Some(var)` iff that teacher is
/// competent for that section's subject, `None` otherwise. Dense rather
/// than sparse per the Design Notes recommendation: section and teacher
/// counts are small enough that the wasted cells cost nothing.
pub type DecisionMatrix = Vec<Vec<Option<BoolVar>>>;

pub struct BuiltModel {
    pub model: CpModelBuilder,
    pub vars: DecisionMatrix,
}

pub fn build_model(
    sections: &[Section],
    teachers: &[Teacher],
    competences: &Competences,
    config: &SchedulingConfig,
) -> Result<BuiltModel, ScheduleError> {
    let mut model = CpModelBuilder::default();
    let vars = build_decision_variables(&mut model, sections, teachers, competences)?;

    add_coverage_constraints(&mut model, sections, &vars);
    add_non_overlap_constraints(&mut model, sections, teachers, &vars);
    add_hour_caps(&mut model, sections, teachers, &vars);

    let hour_indicators = gap::build_hour_indicators(&mut model, sections, teachers, &vars);
    gap::add_modality_gap_constraints(&mut model, teachers, &hour_indicators);

    let teacher_indicators = objective::build_teacher_indicators(&mut model, sections, teachers, &vars);
    let preference_constants = objective::preference_constants(sections, config);
    let objective_expr = objective::build_objective(
        &mut model,
        teachers,
        &hour_indicators,
        &teacher_indicators,
        &preference_constants,
        config,
    );
    model.maximize(objective_expr);

    Ok(BuiltModel { model, vars })
}

fn build_decision_variables(
    model: &mut CpModelBuilder,
    sections: &[Section],
    teachers: &[Teacher],
    competences: &Competences,
) -> Result<DecisionMatrix, ScheduleError> {
    let mut vars = Vec::with_capacity(sections.len());
    for section in sections {
        let mut row = Vec::with_capacity(teachers.len());
        let mut has_candidate = false;
        for teacher in teachers {
            if competences.is_competent(&section.subject, &teacher.id) {
                row.push(Some(model.new_bool_var()));
                has_candidate = true;
            } else {
                row.push(None);
            }
        }
        if !has_candidate {
            return Err(ScheduleError::NoCandidates {
                subject: section.subject.clone(),
                section_label: section.label.clone(),
            });
        }
        vars.push(row);
    }
    Ok(vars)
}

/// Hard constraint 1: every section is covered by exactly one teacher.
fn add_coverage_constraints(model: &mut CpModelBuilder, sections: &[Section], vars: &DecisionMatrix) {
    for (s_idx, _section) in sections.iter().enumerate() {
        let sum: LinearExpr = vars[s_idx]
            .iter()
            .filter_map(|v| v.clone())
            .map(|v| (1i64, v))
            .collect();
        model.add_eq(sum, LinearExpr::from(1));
    }
}

/// Hard constraint 2: a teacher cannot hold two sections in the same slot.
/// Grouping by `Slot` subsumes the same-hour presential/online overlap case
/// of the modality-gap rule, since both share one `Slot` at that hour.
fn add_non_overlap_constraints(
    model: &mut CpModelBuilder,
    sections: &[Section],
    teachers: &[Teacher],
    vars: &DecisionMatrix,
) {
    let mut by_teacher_slot: std::collections::HashMap<(usize, Slot), Vec<BoolVar>> = std::collections::HashMap::new();
    for (s_idx, section) in sections.iter().enumerate() {
        for (t_idx, _teacher) in teachers.iter().enumerate() {
            if let Some(var) = &vars[s_idx][t_idx] {
                by_teacher_slot.entry((t_idx, section.slot())).or_default().push(var.clone());
            }
        }
    }
    for terms in by_teacher_slot.into_values() {
        if terms.len() > 1 {
            let sum: LinearExpr = terms.into_iter().map(|v| (1i64, v)).collect();
            model.add_le(sum, LinearExpr::from(1));
        }
    }
}

/// Hard constraints 3 and 4: weekly and daily (weekday-only) hour caps.
/// A weekday Section's assignment repeats identically on all four of its
/// days, so one global `2 * sum <= max_hours_day` already bounds every
/// single day — there is no way for one day to carry more load than
/// another.
fn add_hour_caps(model: &mut CpModelBuilder, sections: &[Section], teachers: &[Teacher], vars: &DecisionMatrix) {
    const HOURS_PER_SECTION: i64 = 8;
    const HOURS_PER_WEEKDAY_BLOCK: i64 = 2;

    for (t_idx, teacher) in teachers.iter().enumerate() {
        let weekly_terms: Vec<(i64, BoolVar)> = sections
            .iter()
            .enumerate()
            .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone().map(|v| (HOURS_PER_SECTION, v)))
            .collect();
        if !weekly_terms.is_empty() {
            let expr: LinearExpr = weekly_terms.into_iter().collect();
            model.add_le(expr, LinearExpr::from(teacher.max_hours_week));
        }

        let daily_terms: Vec<(i64, BoolVar)> = sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.day_pattern == DayPattern::Weekday)
            .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone().map(|v| (HOURS_PER_WEEKDAY_BLOCK, v)))
            .collect();
        if !daily_terms.is_empty() {
            let expr: LinearExpr = daily_terms.into_iter().collect();
            model.add_le(expr, LinearExpr::from(teacher.max_hours_day));
        }
    }
}
