//! End-to-end scenarios against an in-memory `Store`, one per §8 scenario.

use weekly_scheduler_core::competence::Competences;
use weekly_scheduler_core::config::SchedulingConfig;
use weekly_scheduler_core::domain::{Competence, DemandDescriptor, Subject, SubjectId, Teacher, TeacherId};
use weekly_scheduler_core::error::ScheduleError;
use weekly_scheduler_core::instantiate::instantiate;
use weekly_scheduler_core::memory_store::MemoryStore;
use weekly_scheduler_core::solver::CpSatSolver;
use weekly_scheduler_core::verify;
use weekly_scheduler_core::{generate_schedule, Store};

fn subject(name: &str, level: i32, demand: DemandDescriptor) -> Subject {
    Subject {
        id: SubjectId { name: name.into(), level },
        demand,
    }
}

fn teacher(id: &str, max_week: i64, max_day: i64) -> Teacher {
    Teacher {
        id: TeacherId(id.into()),
        max_hours_week: max_week,
        max_hours_day: max_day,
    }
}

fn competence(teacher: &str, subject: &str, level: i32) -> Competence {
    Competence {
        teacher: TeacherId(teacher.into()),
        subject: SubjectId { name: subject.into(), level },
    }
}

fn demand(presential: &[(i64, i64)], online_weekday: &[(i64, i64)], online_weekend: &[(i64, i64)]) -> DemandDescriptor {
    DemandDescriptor {
        presential: presential.iter().copied().collect(),
        online_weekday: online_weekday.iter().copied().collect(),
        online_weekend: online_weekend.iter().copied().collect(),
    }
}

/// Surfaces `generate_schedule`'s `log` output under `RUST_LOG=debug cargo
/// test -- --nocapture`; harmless to call more than once per process.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn s1_trivial_feasible() {
    init_logging();
    let subjects = vec![subject("English", 1, demand(&[(7, 1)], &[], &[]))];
    let teachers = vec![teacher("T1", 32, 8)];
    let competences = vec![competence("T1", "English", 1)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let report = generate_schedule(&store, &config, &CpSatSolver).unwrap();
    assert_eq!(report.assignments_written, 4);

    let assignments = store.assignments();
    assert_eq!(assignments.len(), 4);
    for a in &assignments {
        assert_eq!(a.teacher, TeacherId("T1".into()));
        assert_eq!(a.start_hour, 7);
        assert_eq!(a.end_hour, 9);
    }
}

#[test]
fn s2_coverage_failure() {
    init_logging();
    let subjects = vec![subject("English", 1, demand(&[(7, 2)], &[], &[]))];
    let teachers = vec![teacher("T1", 32, 8)];
    let competences = vec![competence("T1", "English", 1)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let err = generate_schedule(&store, &config, &CpSatSolver).unwrap_err();
    match err {
        ScheduleError::InsufficientCoverage { required, available, .. } => {
            assert_eq!(required, 2);
            assert_eq!(available, 1);
        }
        other => panic!("expected InsufficientCoverage, got {other:?}"),
    }
}

#[test]
fn s3_capacity_failure() {
    init_logging();
    let subjects = vec![subject(
        "English",
        1,
        demand(&[(7, 1), (9, 1), (11, 1), (13, 1), (15, 1)], &[], &[]),
    )];
    let teachers = vec![teacher("T1", 16, 8), teacher("T2", 16, 8)];
    let competences = vec![competence("T1", "English", 1), competence("T2", "English", 1)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let err = generate_schedule(&store, &config, &CpSatSolver).unwrap_err();
    match err {
        ScheduleError::InsufficientCapacity { hours_need, hours_have, .. } => {
            assert_eq!(hours_need, 40);
            assert_eq!(hours_have, 32);
        }
        other => panic!("expected InsufficientCapacity, got {other:?}"),
    }
}

#[test]
fn s4_modality_gap_forces_infeasible() {
    init_logging();
    let subjects = vec![subject("X", 1, demand(&[(7, 1)], &[(9, 1)], &[]))];
    let teachers = vec![teacher("T1", 32, 8)];
    let competences = vec![competence("T1", "X", 1)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let err = generate_schedule(&store, &config, &CpSatSolver).unwrap_err();
    assert!(matches!(err, ScheduleError::Infeasible));
}

#[test]
fn s5_modality_gap_satisfied_with_second_teacher() {
    init_logging();
    let subjects = vec![subject("X", 1, demand(&[(7, 1)], &[(9, 1)], &[]))];
    let teachers = vec![teacher("T1", 32, 8), teacher("T2", 32, 8)];
    let competences = vec![competence("T1", "X", 1), competence("T2", "X", 1)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let report = generate_schedule(&store, &config, &CpSatSolver).unwrap();
    assert_eq!(report.assignments_written, 8);

    let sections = store.sections();
    let assignments = store.assignments();
    let competences = Competences::build(&store, &store.list_teachers().unwrap()).unwrap();

    assert!(verify::check_coverage(&sections, &assignments).is_empty());
    assert!(verify::check_competence(&assignments, &competences).is_empty());
    assert!(verify::check_non_overlap(&assignments).is_empty());
    assert!(verify::check_modality_gap(&sections, &assignments).is_empty());

    // The presential@7 and online@9 sections must land on two different
    // teachers; no single teacher can legally hold both (gap rule).
    let presential_teacher = assignments.iter().find(|a| a.start_hour == 7).unwrap().teacher.clone();
    let online_teacher = assignments.iter().find(|a| a.start_hour == 9).unwrap().teacher.clone();
    assert_ne!(presential_teacher, online_teacher);
}

#[test]
fn s6_load_balance_spreads_across_three_teachers() {
    init_logging();
    let subjects = vec![subject("X", 1, demand(&[(7, 1), (9, 1), (11, 1)], &[], &[]))];
    let teachers = vec![teacher("T1", 32, 8), teacher("T2", 32, 8), teacher("T3", 32, 8)];
    let competences = vec![
        competence("T1", "X", 1),
        competence("T2", "X", 1),
        competence("T3", "X", 1),
    ];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let report = generate_schedule(&store, &config, &CpSatSolver).unwrap();
    assert_eq!(report.assignments_written, 12);

    let assignments = store.assignments();
    let mut teachers_used: Vec<String> = assignments.iter().map(|a| a.teacher.0.clone()).collect();
    teachers_used.sort();
    teachers_used.dedup();
    assert_eq!(teachers_used.len(), 3, "balance_morning should spread one section per teacher");
}

#[test]
fn s7_online_weekend_produces_single_saturday_block() {
    init_logging();
    let subjects = vec![subject("Business", 2, demand(&[], &[], &[(8, 1)]))];
    let teachers = vec![teacher("T1", 32, 8)];
    let competences = vec![competence("T1", "Business", 2)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let report = generate_schedule(&store, &config, &CpSatSolver).unwrap();
    assert_eq!(report.assignments_written, 1);

    let sections = store.sections();
    let assignments = store.assignments();
    assert!(verify::check_weekend_shape(&sections, &assignments).is_empty());

    let mut caps = std::collections::HashMap::new();
    caps.insert("T1".to_string(), (32i64, 8i64));
    assert!(verify::check_hour_caps(&assignments, &caps).is_empty());

    assert_eq!(assignments.len(), 1);
    let a = &assignments[0];
    assert_eq!(a.day, weekly_scheduler_core::domain::Day::Sat);
    assert_eq!(a.start_hour, 8);
    assert_eq!(a.end_hour, 16);
}

#[test]
fn s8_modality_gap_allows_one_empty_slot_between() {
    init_logging();
    // presential@7 and online@11: a start-hour difference of 4, i.e. exactly
    // one empty 2h slot (9-11) between the two — the one distance the gap
    // rule permits a single teacher to hold both modalities at.
    let subjects = vec![subject("X", 1, demand(&[(7, 1)], &[(11, 1)], &[]))];
    let teachers = vec![teacher("T1", 32, 8)];
    let competences = vec![competence("T1", "X", 1)];
    let store = MemoryStore::new(subjects, teachers, competences);
    let config = SchedulingConfig::default();

    let report = generate_schedule(&store, &config, &CpSatSolver).unwrap();
    assert_eq!(report.assignments_written, 8);

    let sections = store.sections();
    let assignments = store.assignments();
    let competences = Competences::build(&store, &store.list_teachers().unwrap()).unwrap();

    assert!(verify::check_coverage(&sections, &assignments).is_empty());
    assert!(verify::check_competence(&assignments, &competences).is_empty());
    assert!(verify::check_non_overlap(&assignments).is_empty());
    assert!(verify::check_modality_gap(&sections, &assignments).is_empty());

    // Only one teacher is competent, so both the presential and the online
    // section must land on it.
    let presential_teacher = assignments.iter().find(|a| a.start_hour == 7).unwrap().teacher.clone();
    let online_teacher = assignments.iter().find(|a| a.start_hour == 11).unwrap().teacher.clone();
    assert_eq!(presential_teacher, TeacherId("T1".into()));
    assert_eq!(online_teacher, TeacherId("T1".into()));
}

#[test]
fn instantiation_is_deterministic_across_runs() {
    let subjects = vec![
        subject("B", 2, demand(&[(7, 1)], &[], &[])),
        subject("A", 1, demand(&[(7, 1)], &[], &[])),
    ];
    let first = instantiate(&subjects);
    let second = instantiate(&subjects);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.start_hour, b.start_hour);
    }
}
