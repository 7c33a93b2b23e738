//! In-memory `Store` implementation. Stands in for the excluded external
//! relational store; used by unit and integration tests, in the same spirit
//! as other pack repos that keep a storage trait separate from its backend
//! (e.g. `iqrahapp-iqrah-mobile`'s `crates/storage`).

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{Assignment, Competence, Section, Subject, SubjectId, Teacher, TeacherId};
use crate::store::Store;

#[derive(Debug, Error)]
pub enum MemoryStoreError {
    #[error("transaction body failed: {0}")]
    Transaction(String),
}

#[derive(Default)]
pub struct MemoryStore {
    subjects: Vec<Subject>,
    teachers: Vec<Teacher>,
    competences: Vec<Competence>,
    sections: RefCell<Vec<Section>>,
    assignments: RefCell<Vec<Assignment>>,
}

impl MemoryStore {
    pub fn new(subjects: Vec<Subject>, teachers: Vec<Teacher>, competences: Vec<Competence>) -> Self {
        MemoryStore {
            subjects,
            teachers,
            competences,
            sections: RefCell::new(Vec::new()),
            assignments: RefCell::new(Vec::new()),
        }
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        self.assignments.borrow().clone()
    }

    pub fn sections(&self) -> Vec<Section> {
        self.sections.borrow().clone()
    }
}

impl Store for MemoryStore {
    type Error = MemoryStoreError;

    fn list_subjects(&self) -> Result<Vec<Subject>, Self::Error> {
        let mut subjects = self.subjects.clone();
        subjects.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(subjects)
    }

    fn list_teachers(&self) -> Result<Vec<Teacher>, Self::Error> {
        Ok(self.teachers.clone())
    }

    fn competences_of(&self, teacher: &TeacherId) -> Result<Vec<SubjectId>, Self::Error> {
        let by_teacher: HashMap<&TeacherId, Vec<&SubjectId>> =
            self.competences.iter().fold(HashMap::new(), |mut acc, c| {
                acc.entry(&c.teacher).or_default().push(&c.subject);
                acc
            });
        Ok(by_teacher
            .get(teacher)
            .map(|subjects| subjects.iter().map(|s| (*s).clone()).collect())
            .unwrap_or_default())
    }

    fn delete_all_assignments(&self) -> Result<(), Self::Error> {
        self.assignments.borrow_mut().clear();
        Ok(())
    }

    fn delete_all_sections(&self) -> Result<(), Self::Error> {
        self.sections.borrow_mut().clear();
        Ok(())
    }

    fn insert_section(&self, section: &Section) -> Result<(), Self::Error> {
        self.sections.borrow_mut().push(section.clone());
        Ok(())
    }

    fn insert_assignment(&self, assignment: &Assignment) -> Result<(), Self::Error> {
        self.assignments.borrow_mut().push(assignment.clone());
        Ok(())
    }

    fn transaction<F, T>(&self, f: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&Self) -> Result<T, Self::Error>,
    {
        let sections_snapshot = self.sections.borrow().clone();
        let assignments_snapshot = self.assignments.borrow().clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self.sections.borrow_mut() = sections_snapshot;
                *self.assignments.borrow_mut() = assignments_snapshot;
                Err(err)
            }
        }
    }
}
