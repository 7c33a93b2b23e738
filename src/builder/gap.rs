//! Modality-gap rule (hard constraint 5, spec §4.3) and the per-hour
//! presential/online indicators it and the objective both need.
//!
//! Grounded directly on `solver.py`'s `slots_lj_map` (hour -> slot index,
//! two hours apart per index) + the `(t1, t2)` double loop that forbids
//! mixing unless the *slot-index* distance is exactly 2 — i.e. exactly one
//! empty 2h slot between the two hours, a start-hour difference of 4 on
//! this grid. Ported without hardcoding the 7-hour array, so it holds for
//! whatever weekday hours the demand actually instantiates.

use std::collections::HashMap;

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

use super::hours::weekday_hours;
use super::linking::at_least_one_indicator;
use super::DecisionMatrix;
use crate::domain::{DayPattern, Modality, Section, Teacher};

/// `p_t_h` / `o_t_h`: 1 iff teacher `t` has a presential/online section
/// starting at weekday hour `h`.
pub struct HourIndicators {
    presential: HashMap<(usize, i64), BoolVar>,
    online: HashMap<(usize, i64), BoolVar>,
}

impl HourIndicators {
    pub fn presential_at(&self, teacher_idx: usize, hour: i64) -> Option<&BoolVar> {
        self.presential.get(&(teacher_idx, hour))
    }

    pub fn online_at(&self, teacher_idx: usize, hour: i64) -> Option<&BoolVar> {
        self.online.get(&(teacher_idx, hour))
    }

    /// `active_t,h` as a 0/1-valued expression: `p_t_h + o_t_h`. The two
    /// are mutually exclusive (both channel from the same overlap-bounded
    /// slot sum), so their sum is itself 0/1.
    pub fn active_expr(&self, teacher_idx: usize, hour: i64) -> LinearExpr {
        let mut expr = LinearExpr::from(0);
        if let Some(p) = self.presential_at(teacher_idx, hour) {
            expr = expr + LinearExpr::from(p.clone());
        }
        if let Some(o) = self.online_at(teacher_idx, hour) {
            expr = expr + LinearExpr::from(o.clone());
        }
        expr
    }

    pub fn hours(&self) -> Vec<i64> {
        self.presential
            .keys()
            .chain(self.online.keys())
            .map(|(_, h)| *h)
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

pub fn build_hour_indicators(
    model: &mut CpModelBuilder,
    sections: &[Section],
    teachers: &[Teacher],
    vars: &DecisionMatrix,
) -> HourIndicators {
    let hours = weekday_hours(sections);
    let mut presential = HashMap::new();
    let mut online = HashMap::new();

    for (t_idx, _teacher) in teachers.iter().enumerate() {
        for &hour in &hours {
            let presential_terms: Vec<BoolVar> = sections
                .iter()
                .enumerate()
                .filter(|(_, s)| {
                    s.day_pattern == DayPattern::Weekday && s.modality == Modality::Presential && s.start_hour == hour
                })
                .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone())
                .collect();
            if !presential_terms.is_empty() {
                presential.insert((t_idx, hour), at_least_one_indicator(model, &presential_terms));
            }

            let online_terms: Vec<BoolVar> = sections
                .iter()
                .enumerate()
                .filter(|(_, s)| {
                    s.day_pattern == DayPattern::Weekday
                        && s.modality == Modality::OnlineWeekday
                        && s.start_hour == hour
                })
                .filter_map(|(s_idx, _)| vars[s_idx][t_idx].clone())
                .collect();
            if !online_terms.is_empty() {
                online.insert((t_idx, hour), at_least_one_indicator(model, &online_terms));
            }
        }
    }

    HourIndicators { presential, online }
}

/// Forbids mixing presential and online at every weekday-hour pair except
/// the one separated by exactly one empty 2h slot (start-hour difference
/// of 4, e.g. presential@7 with online@11). Same-hour mixing is covered
/// here too (and redundantly by the non-overlap constraint, since both
/// share one `Slot`); every other distance — adjacent (diff 2), further
/// apart (diff 6, 8, ...), or identical — is forbidden.
pub fn add_modality_gap_constraints(model: &mut CpModelBuilder, teachers: &[Teacher], indicators: &HourIndicators) {
    const ALLOWED_GAP_HOURS: i64 = 4;

    let hours = indicators.hours();
    for (t_idx, _teacher) in teachers.iter().enumerate() {
        for &h1 in &hours {
            for &h2 in &hours {
                if (h1 - h2).abs() == ALLOWED_GAP_HOURS {
                    continue;
                }
                if let (Some(p1), Some(o2)) = (indicators.presential_at(t_idx, h1), indicators.online_at(t_idx, h2)) {
                    let sum: LinearExpr = LinearExpr::from(p1.clone()) + LinearExpr::from(o2.clone());
                    model.add_le(sum, LinearExpr::from(1));
                }
            }
        }
    }
}
