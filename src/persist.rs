//! Assignment Persistor (spec §4.4): turns a solved decision matrix into
//! concrete per-day `Assignment` rows and writes them through the `Store`.

use crate::builder::DecisionMatrix;
use crate::domain::{Assignment, Section, Teacher};
use crate::solver::Solution;
use crate::store::Store;

/// Materializes every `x[s,t] = 1` cell into one `Assignment` row per day
/// the section's day-pattern covers, through `store`'s single atomic
/// transaction. Returns the number of rows inserted.
pub fn persist<S: Store>(
    store: &S,
    sections: &[Section],
    teachers: &[Teacher],
    vars: &DecisionMatrix,
    solution: &Solution,
) -> Result<usize, S::Error> {
    store.transaction(|store| {
        store.delete_all_assignments()?;
        store.delete_all_sections()?;

        let mut count = 0usize;
        for (s_idx, section) in sections.iter().enumerate() {
            store.insert_section(section)?;

            let block_duration = section.day_pattern.block_hours();
            for (t_idx, teacher) in teachers.iter().enumerate() {
                let Some(var) = &vars[s_idx][t_idx] else { continue };
                if !solution.value(var) {
                    continue;
                }
                for &day in section.day_pattern.days() {
                    store.insert_assignment(&Assignment {
                        day,
                        start_hour: section.start_hour,
                        end_hour: section.start_hour + block_duration,
                        teacher: teacher.id.clone(),
                        subject: section.subject.clone(),
                        section_label: section.label.clone(),
                    })?;
                    count += 1;
                }
            }
        }
        Ok(count)
    })
}
