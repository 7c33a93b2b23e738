//! Solver seam (spec §9 Design Notes: "solver swappable behind a trait").
//! Grounded on `two_stage_schedule.rs`'s `SatParameters`/`solve_with_parameters`
//! usage, wrapped behind a trait so the generation pipeline doesn't depend on
//! `cp_sat` directly.

use cp_sat::builder::{BoolVar, CpModelBuilder};
use cp_sat::proto::{CpSolverResponse, CpSolverStatus, SatParameters};

use crate::config::SchedulingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Optimal,
    Feasible,
    Infeasible,
    TimeLimit,
}

pub struct Solution {
    response: CpSolverResponse,
    pub outcome: SolveOutcome,
}

impl Solution {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Optimal | SolveOutcome::Feasible)
    }

    pub fn value(&self, var: &BoolVar) -> bool {
        var.solution_value(&self.response)
    }
}

/// Abstraction over "submit a built model, get a solution back" so tests
/// can swap in a stub without linking a real CP-SAT backend.
pub trait ModelSolver {
    fn solve(&self, model: CpModelBuilder, config: &SchedulingConfig) -> Solution;
}

pub struct CpSatSolver;

impl ModelSolver for CpSatSolver {
    fn solve(&self, mut model: CpModelBuilder, config: &SchedulingConfig) -> Solution {
        let mut params = SatParameters::default();
        params.max_time_in_seconds = Some(config.solver_time_budget_secs);
        params.random_seed = Some(42);

        let response = model.solve_with_parameters(&params);
        let outcome = match response.status() {
            CpSolverStatus::Optimal => SolveOutcome::Optimal,
            CpSolverStatus::Feasible => SolveOutcome::Feasible,
            CpSolverStatus::Infeasible => SolveOutcome::Infeasible,
            _ => SolveOutcome::TimeLimit,
        };
        Solution { response, outcome }
    }
}
