//! The Store interface consumed by the core (spec §6), given Rust types.
//! The excluded, external relational store implements this trait; the
//! crate ships one in-memory implementation (`MemoryStore`) for tests.

use crate::domain::{Assignment, Section, Subject, SubjectId, Teacher, TeacherId};

pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stable ordering by identity.
    fn list_subjects(&self) -> Result<Vec<Subject>, Self::Error>;
    fn list_teachers(&self) -> Result<Vec<Teacher>, Self::Error>;
    fn competences_of(&self, teacher: &TeacherId) -> Result<Vec<SubjectId>, Self::Error>;

    fn delete_all_assignments(&self) -> Result<(), Self::Error>;
    fn delete_all_sections(&self) -> Result<(), Self::Error>;

    fn insert_section(&self, section: &Section) -> Result<(), Self::Error>;
    fn insert_assignment(&self, assignment: &Assignment) -> Result<(), Self::Error>;

    /// Atomic scope: `f` runs under a single transaction; any `Err` rolls
    /// back everything `f` did.
    fn transaction<F, T>(&self, f: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&Self) -> Result<T, Self::Error>;
}
