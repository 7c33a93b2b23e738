//! Course Instantiator (spec §4.1): expands each Subject's demand
//! descriptor into concrete Sections.
//!
//! Grounded on `solver.py`'s `generar_etiqueta_curso` (base-26 label
//! generator) and its `FASE 1` loop, which walks `PRESENCIAL` →
//! `ONLINE_LJ` → `ONLINE_FDS` in that fixed order with `sorted` hour keys.

use crate::domain::{derive_shift, DayPattern, Modality, Section, Subject};

/// Generates A, B, …, Z, AA, AB, … for index 0, 1, ….
pub fn section_label(mut index: usize) -> String {
    let mut chars = Vec::new();
    loop {
        let rem = index % 26;
        chars.push((b'A' + rem as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    chars.iter().rev().collect()
}

/// Expands every subject's demand descriptor into an ordered list of
/// Sections. Deterministic: identical inputs produce byte-identical output.
pub fn instantiate(subjects: &[Subject]) -> Vec<Section> {
    let mut ordered: Vec<&Subject> = subjects.iter().collect();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));

    let mut sections = Vec::new();
    for subject in ordered {
        let mut index = 0usize;
        for (modality, bucket) in [
            (Modality::Presential, &subject.demand.presential),
            (Modality::OnlineWeekday, &subject.demand.online_weekday),
            (Modality::OnlineWeekend, &subject.demand.online_weekend),
        ] {
            for (&start_hour, &count) in bucket.iter() {
                for _ in 0..count {
                    sections.push(Section {
                        label: section_label(index),
                        subject: subject.id.clone(),
                        level: subject.id.level,
                        shift: derive_shift(modality, start_hour),
                        modality,
                        start_hour,
                        day_pattern: modality.day_pattern(),
                    });
                    index += 1;
                }
            }
        }
    }
    sections
}
