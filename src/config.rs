//! Explicit configuration record (spec §9 "Configuration"): the solver time
//! budget, objective weights, preferred-hour tiers, and shift boundaries
//! the teacher's `two_stage_schedule.rs` instead hardcodes as inline
//! literals. Kept as plain data so an embedding binary can load overrides
//! without the core knowing about file formats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    pub balance_morning: i64,
    pub balance_afternoon: i64,
    pub assigned: i64,
    pub pref_online_high: i64,
    pub pref_online_med: i64,
    pub pref_online_low: i64,
    pub consecutive: i64,
    pub virtual_only_penalty: i64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        ObjectiveWeights {
            balance_morning: 5000,
            balance_afternoon: 5000,
            assigned: 1000,
            pref_online_high: 100,
            pref_online_med: 50,
            pref_online_low: 45,
            consecutive: 10,
            virtual_only_penalty: 100,
        }
    }
}

/// Preferred-hour tiers for ONLINE_WEEKDAY sections, per shift (§4.3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlinePreferenceTiers {
    pub morning_tier1: Vec<i64>,
    pub morning_tier2: Vec<i64>,
    pub morning_tier3: Vec<i64>,
    pub evening_tier1: Vec<i64>,
    pub evening_tier2: Vec<i64>,
}

impl Default for OnlinePreferenceTiers {
    fn default() -> Self {
        OnlinePreferenceTiers {
            morning_tier1: vec![7, 9],
            morning_tier2: vec![11, 13],
            morning_tier3: vec![19],
            evening_tier1: vec![19],
            evening_tier2: vec![17],
        }
    }
}

/// Hour boundaries used to derive Shift and to classify morning/afternoon
/// slots for the load-balancing objective terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftBoundaries {
    /// Hours strictly below this start the Morning shift.
    pub afternoon_starts_at: i64,
    /// Hours at or above this start the Evening shift.
    pub evening_starts_at: i64,
}

impl Default for ShiftBoundaries {
    fn default() -> Self {
        ShiftBoundaries {
            afternoon_starts_at: 13,
            evening_starts_at: 19,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Solver wall-clock budget, in seconds (§6).
    pub solver_time_budget_secs: f64,
    pub weights: ObjectiveWeights,
    pub online_preference_tiers: OnlinePreferenceTiers,
    pub shift_boundaries: ShiftBoundaries,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        SchedulingConfig {
            solver_time_budget_secs: 60.0,
            weights: ObjectiveWeights::default(),
            online_preference_tiers: OnlinePreferenceTiers::default(),
            shift_boundaries: ShiftBoundaries::default(),
        }
    }
}
