//! Top-level orchestration (spec §4.5 state machine, §6 entry point):
//! `Idle -> Preparing -> Validating -> Modeling -> Solving -> Persisting ->
//! Done`, short-circuiting to `Failed` on the first error.

use log::{info, warn};

use crate::builder::build_model;
use crate::competence::Competences;
use crate::config::SchedulingConfig;
use crate::error::ScheduleError;
use crate::instantiate::instantiate;
use crate::persist::persist;
use crate::solver::{ModelSolver, SolveOutcome};
use crate::store::Store;
use crate::validate::validate;

/// The entry point's success payload; `message` at the call site is
/// rendered from this, per §6 ("message includes the assignment count").
pub struct GenerationReport {
    pub assignments_written: usize,
}

pub fn generate_schedule<S: Store>(
    store: &S,
    config: &SchedulingConfig,
    solver: &dyn ModelSolver,
) -> Result<GenerationReport, ScheduleError> {
    info!("generation: preparing");
    let subjects = store.list_subjects().map_err(anyhow::Error::from)?;
    if subjects.is_empty() {
        return Err(ScheduleError::NoSubjects);
    }
    let teachers = store.list_teachers().map_err(anyhow::Error::from)?;
    let competences = Competences::build(store, &teachers).map_err(anyhow::Error::from)?;

    let sections = instantiate(&subjects);

    info!("generation: validating ({} sections, {} teachers)", sections.len(), teachers.len());
    validate(&sections, &teachers, &competences)?;

    info!("generation: modeling");
    let built = build_model(&sections, &teachers, &competences, config)?;

    info!("generation: solving (budget {}s)", config.solver_time_budget_secs);
    let solution = solver.solve(built.model, config);
    if !solution.is_success() {
        return match solution.outcome {
            SolveOutcome::Infeasible => {
                warn!("generation: solver reported infeasible");
                Err(ScheduleError::Infeasible)
            }
            _ => {
                warn!("generation: solver exceeded time budget");
                Err(ScheduleError::TimeLimit)
            }
        };
    }

    info!("generation: persisting");
    let assignments_written =
        persist(store, &sections, &teachers, &built.vars, &solution).map_err(anyhow::Error::from)?;

    info!("generation: done ({assignments_written} assignments written)");
    Ok(GenerationReport { assignments_written })
}
