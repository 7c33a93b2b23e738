//! Builds the teacher ↔ subject authorization index from the store, once
//! per generation, for reuse by the validator and the model builder.

use std::collections::HashMap;

use crate::domain::{SubjectId, Teacher, TeacherId};
use crate::store::Store;

/// `subject -> [teacher]`, teachers listed in store order (deterministic).
pub struct Competences {
    by_subject: HashMap<SubjectId, Vec<TeacherId>>,
}

impl Competences {
    pub fn build<S: Store>(store: &S, teachers: &[Teacher]) -> Result<Self, S::Error> {
        let mut by_subject: HashMap<SubjectId, Vec<TeacherId>> = HashMap::new();
        for teacher in teachers {
            for subject in store.competences_of(&teacher.id)? {
                by_subject.entry(subject).or_default().push(teacher.id.clone());
            }
        }
        Ok(Competences { by_subject })
    }

    pub fn competent_teachers(&self, subject: &SubjectId) -> &[TeacherId] {
        self.by_subject.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_competent(&self, subject: &SubjectId, teacher: &TeacherId) -> bool {
        self.competent_teachers(subject).contains(teacher)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(by_subject: HashMap<SubjectId, Vec<TeacherId>>) -> Self {
        Competences { by_subject }
    }
}
