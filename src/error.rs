//! Error taxonomy (spec §7), one variant per row of the table. Each variant
//! carries exactly the fields its diagnostic message needs.

use crate::domain::SubjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("No hay materias configuradas.")]
    NoSubjects,

    #[error("Error leyendo el desglose horario de {subject}: {detail}")]
    MalformedDescriptor { subject: SubjectId, detail: String },

    #[error(
        "Imposible generar: No hay suficientes profesores con disponibilidad para cubrir la demanda en {subject} en el horario {slot}. (Se necesitan {required}, hay {available} competentes en total)."
    )]
    InsufficientCoverage {
        subject: SubjectId,
        slot: String,
        required: usize,
        available: usize,
    },

    #[error(
        "Imposible generar: La carga horaria solicitada para {subject} ({hours_need} horas) supera la capacidad máxima combinada de los profesores disponibles ({hours_have} horas). Es necesario subir horas a los profesores."
    )]
    InsufficientCapacity {
        subject: SubjectId,
        hours_need: i64,
        hours_have: i64,
    },

    #[error("Error: sección {section_label} de {subject} sin candidatos.")]
    NoCandidates {
        subject: SubjectId,
        section_label: String,
    },

    #[error("Imposible generar: conflicto insalvable de restricciones. Intente añadir profesores.")]
    Infeasible,

    #[error("Tiempo de espera agotado sin solución óptima.")]
    TimeLimit,

    #[error("Error interno: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ScheduleError {
    /// Maps each error to the HTTP-style status code the external
    /// collaborator (§6) should return.
    pub fn status_code(&self) -> u16 {
        match self {
            ScheduleError::Internal(_) => 500,
            _ => 400,
        }
    }
}
