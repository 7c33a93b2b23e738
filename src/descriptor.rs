//! Decodes the demand descriptor wire format (spec §6): a JSON document
//! mapping modality name to a map of start-hour string to count.
//!
//! Grounded on `solver.py`'s `json.loads(m.desglose_horarios)`; unlike the
//! original (which logs and skips a malformed subject), §4.1 treats a
//! malformed descriptor as a fatal validation error that aborts the run
//! before any mutation.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{DemandDescriptor, Subject, SubjectId};
use crate::error::ScheduleError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    #[serde(default, rename = "PRESENTIAL")]
    presential: BTreeMap<String, Value>,
    #[serde(default, rename = "ONLINE_WEEKDAY")]
    online_weekday: BTreeMap<String, Value>,
    #[serde(default, rename = "ONLINE_WEEKEND")]
    online_weekend: BTreeMap<String, Value>,
}

/// Parses the raw JSON text stored alongside a Subject into a structured
/// descriptor, failing with `MalformedDescriptor` on any non-integer or
/// negative count, or on unparseable JSON.
pub fn parse_descriptor(subject: &SubjectId, raw: &str) -> Result<DemandDescriptor, ScheduleError> {
    let raw = if raw.trim().is_empty() { "{}" } else { raw };
    let parsed: RawDescriptor = serde_json::from_str(raw).map_err(|e| ScheduleError::MalformedDescriptor {
        subject: subject.clone(),
        detail: e.to_string(),
    })?;

    Ok(DemandDescriptor {
        presential: convert_bucket(subject, &parsed.presential)?,
        online_weekday: convert_bucket(subject, &parsed.online_weekday)?,
        online_weekend: convert_bucket(subject, &parsed.online_weekend)?,
    })
}

/// Decodes a full `Subject` row (identity plus raw descriptor JSON). The
/// excluded relational-store adapter (§1: "Persistent storage engine" is
/// out of scope) is expected to call this when materializing the `Vec<Subject>`
/// it hands back from `Store::list_subjects`, so a `MalformedDescriptor`
/// surfaces at the same "Preparing" point §4.1 describes, before any store
/// mutation — `Store::list_subjects` itself returns already-typed `Subject`s
/// so the core never re-parses JSON it didn't store.
pub fn decode_subject(id: SubjectId, raw_demand: &str) -> Result<Subject, ScheduleError> {
    let demand = parse_descriptor(&id, raw_demand)?;
    Ok(Subject { id, demand })
}

fn convert_bucket(
    subject: &SubjectId,
    bucket: &BTreeMap<String, Value>,
) -> Result<BTreeMap<i64, i64>, ScheduleError> {
    let mut out = BTreeMap::new();
    for (hour_str, count_value) in bucket {
        let hour: i64 = hour_str.parse().map_err(|_| ScheduleError::MalformedDescriptor {
            subject: subject.clone(),
            detail: format!("start hour '{hour_str}' is not an integer"),
        })?;
        let count = count_value
            .as_i64()
            .filter(|_| count_value.is_i64() || count_value.is_u64())
            .ok_or_else(|| ScheduleError::MalformedDescriptor {
                subject: subject.clone(),
                detail: format!("count for hour {hour} is not an integer"),
            })?;
        if count < 0 {
            return Err(ScheduleError::MalformedDescriptor {
                subject: subject.clone(),
                detail: format!("count for hour {hour} is negative"),
            });
        }
        out.insert(hour, count);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid() -> SubjectId {
        SubjectId {
            name: "English".into(),
            level: 1,
        }
    }

    #[test]
    fn parses_full_descriptor() {
        let raw = r#"{"PRESENTIAL": {"7": 2, "11": 1}, "ONLINE_WEEKDAY": {"19": 1}, "ONLINE_WEEKEND": {"8": 1}}"#;
        let d = parse_descriptor(&sid(), raw).unwrap();
        assert_eq!(d.presential.get(&7), Some(&2));
        assert_eq!(d.presential.get(&11), Some(&1));
        assert_eq!(d.online_weekday.get(&19), Some(&1));
        assert_eq!(d.online_weekend.get(&8), Some(&1));
    }

    #[test]
    fn missing_keys_are_empty() {
        let d = parse_descriptor(&sid(), "{}").unwrap();
        assert!(d.presential.is_empty());
        assert!(d.online_weekday.is_empty());
        assert!(d.online_weekend.is_empty());
    }

    #[test]
    fn empty_string_treated_as_empty_object() {
        let d = parse_descriptor(&sid(), "").unwrap();
        assert!(d.presential.is_empty());
    }

    #[test]
    fn rejects_negative_count() {
        let raw = r#"{"PRESENTIAL": {"7": -1}}"#;
        let err = parse_descriptor(&sid(), raw).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedDescriptor { .. }));
    }

    #[test]
    fn rejects_non_integer_count() {
        let raw = r#"{"PRESENTIAL": {"7": 1.5}}"#;
        let err = parse_descriptor(&sid(), raw).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedDescriptor { .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_descriptor(&sid(), "not json").unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedDescriptor { .. }));
    }

    #[test]
    fn decode_subject_builds_a_ready_to_instantiate_subject() {
        let raw = r#"{"PRESENTIAL": {"7": 1}}"#;
        let subject = decode_subject(sid(), raw).unwrap();
        assert_eq!(subject.id, sid());
        assert_eq!(subject.demand.presential.get(&7), Some(&1));
    }

    #[test]
    fn decode_subject_propagates_malformed_descriptor_before_any_mutation() {
        let err = decode_subject(sid(), r#"{"PRESENTIAL": {"7": -1}}"#).unwrap_err();
        match err {
            ScheduleError::MalformedDescriptor { subject, .. } => assert_eq!(subject, sid()),
            other => panic!("expected MalformedDescriptor, got {other:?}"),
        }
    }
}
