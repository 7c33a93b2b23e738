//! Weekly teaching schedule generator core: demand expansion, feasibility
//! pre-validation, the CP-SAT constraint model, and persistence of the
//! resulting Section -> Teacher assignment.

pub mod builder;
pub mod competence;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod generate;
pub mod instantiate;
pub mod memory_store;
pub mod persist;
pub mod solver;
pub mod store;
pub mod validate;
pub mod verify;

pub use config::SchedulingConfig;
pub use error::ScheduleError;
pub use generate::{generate_schedule, GenerationReport};
pub use solver::{CpSatSolver, ModelSolver};
pub use store::Store;
