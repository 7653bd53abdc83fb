use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rusqlite::{Connection, params};

use super::*;
use crate::matching::{DataLevel, MatchRequest, run_matching};
use crate::model::{
    DEFAULT_GTQ, DEFAULT_IQ, DEFAULT_PERFORMANCE_RATING, DEFAULT_WORK_EFFICIENCY_SCORE,
};

fn seeded_connection() -> (Connection, DemoCounts) {
    let mut connection = Connection::open_in_memory().expect("in-memory db");
    ensure_schema(&connection).expect("schema");
    let counts = seed_demo_dataset(&mut connection).expect("demo seed");
    (connection, counts)
}

fn cohort() -> BenchmarkCohort {
    BenchmarkCohort::new(["EMP100001", "EMP100002"]).expect("valid cohort")
}

fn find<'a>(records: &'a [EmployeeRecord], employee_id: &str) -> &'a EmployeeRecord {
    records
        .iter()
        .find(|record| record.employee_id == employee_id)
        .expect("employee present")
}

#[test]
fn demo_seed_counts_match_table_counts() {
    let (connection, counts) = seeded_connection();

    assert_eq!(counts.employees, 12);
    assert_eq!(table_count(&connection, "employees").expect("count"), 12);
    assert_eq!(
        table_count(&connection, "competencies_yearly").expect("count") as usize,
        counts.competency_rows
    );
    assert_eq!(
        table_count(&connection, "profiles_psych").expect("count") as usize,
        counts.psych_profiles
    );
    assert_eq!(
        table_count(&connection, "strengths").expect("count") as usize,
        counts.strength_rows
    );
}

#[test]
fn demo_seed_is_idempotent() {
    let (mut connection, first) = seeded_connection();
    let second = seed_demo_dataset(&mut connection).expect("second seed");

    assert_eq!(first.employees, second.employees);
    assert_eq!(table_count(&connection, "employees").expect("count"), 12);
    assert_eq!(
        table_count(&connection, "competencies_yearly").expect("count") as usize,
        first.competency_rows
    );
}

#[test]
fn table_count_rejects_unknown_tables() {
    let (connection, _) = seeded_connection();
    let err = table_count(&connection, "metadata").expect_err("metadata is not counted");
    assert!(err.to_string().contains("unknown table"));
    assert!(counted_tables().contains(&"employees"));
}

#[test]
fn schema_records_version_metadata() {
    let (connection, _) = seeded_connection();
    let version: String = connection
        .query_row(
            "SELECT value FROM metadata WHERE key = 'db_schema_version'",
            [],
            |row| row.get(0),
        )
        .expect("version row");
    assert_eq!(version, DB_SCHEMA_VERSION);
}

#[test]
fn population_is_ordered_by_name_with_joined_labels() {
    let (connection, _) = seeded_connection();
    let source = SqliteSource::from_connection(connection);

    let population = source.fetch_population().expect("population");
    assert_eq!(population.len(), 12);
    assert_eq!(population[0].full_name, "Adi Nugraha");
    assert_eq!(population[0].position, "Data Scientist");
    assert_eq!(population[0].grade, "Senior");
    assert_eq!(population[0].company, "PT Nusantara Digital");
    assert_eq!(population[0].tenure_months, 72);

    let names = population
        .iter()
        .map(|entry| entry.full_name.as_str())
        .collect::<Vec<_>>();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn population_labels_missing_dimensions() {
    let (connection, _) = seeded_connection();
    connection
        .execute(
            "INSERT INTO employees(employee_id, fullname, years_of_service_months)
             VALUES('EMP200001', 'Zaki Ramadhan', NULL)",
            [],
        )
        .expect("insert bare employee");
    let source = SqliteSource::from_connection(connection);

    let population = source.fetch_population().expect("population");
    let bare = population
        .iter()
        .find(|entry| entry.employee_id == "EMP200001")
        .expect("bare employee");
    assert_eq!(bare.position, "N/A");
    assert_eq!(bare.directorate, "N/A");
    assert_eq!(bare.tenure_months, 0);
}

#[test]
fn match_inputs_use_latest_competency_year_and_average_ratings() {
    let (connection, _) = seeded_connection();
    let source = SqliteSource::from_connection(connection);
    let request = MatchRequest::new("VACANCY_TEST", cohort());

    let records = source.fetch_match_inputs(&request).expect("match inputs");
    assert_eq!(records.len(), 12);

    let top = find(&records, "EMP100001");
    assert!((top.competency_score - 4.6).abs() < 1e-9);
    assert!((top.performance_rating - 4.55).abs() < 1e-9);
    assert_eq!(top.iq, 128.0);
    assert_eq!(top.work_efficiency_score, 62.0);
    assert_eq!(top.top_strengths, vec!["Analytical", "Achiever", "Learner"]);
}

#[test]
fn match_inputs_fill_defaults_for_missing_assessments() {
    let (connection, _) = seeded_connection();
    connection
        .execute(
            "INSERT INTO employees(employee_id, fullname, position_id, grade_id)
             VALUES('EMP200002', 'Yusuf Maulana', 1, 1)",
            [],
        )
        .expect("insert unassessed employee");
    let source = SqliteSource::from_connection(connection);
    let request = MatchRequest::new("VACANCY_TEST", cohort());

    let records = source.fetch_match_inputs(&request).expect("match inputs");

    let no_psych = find(&records, "EMP100009");
    assert_eq!(no_psych.iq, DEFAULT_IQ);
    assert_eq!(no_psych.gtq, DEFAULT_GTQ);
    assert_eq!(no_psych.work_efficiency_score, DEFAULT_WORK_EFFICIENCY_SCORE);
    assert_eq!(no_psych.top_strengths, vec!["Adaptable", "Learner", "Collaborative"]);

    let no_rating = find(&records, "EMP100010");
    assert_eq!(no_rating.performance_rating, DEFAULT_PERFORMANCE_RATING);

    let unassessed = find(&records, "EMP200002");
    assert_eq!(unassessed.competency_score, 3.0);
    assert_eq!(unassessed.role, "Data Analyst");
    assert_eq!(unassessed.division, "N/A");
    assert_eq!(unassessed.tenure_months, 0);
}

#[test]
fn match_inputs_keep_only_top_three_strengths() {
    let (connection, _) = seeded_connection();
    connection
        .execute(
            "INSERT INTO strengths(employee_id, rank, theme) VALUES(?1, 4, ?2)",
            params!["EMP100001", "Restorative"],
        )
        .expect("insert fourth strength");
    let source = SqliteSource::from_connection(connection);
    let request = MatchRequest::new("VACANCY_TEST", cohort());

    let records = source.fetch_match_inputs(&request).expect("match inputs");
    let top = find(&records, "EMP100001");
    assert_eq!(top.top_strengths.len(), 3);
    assert!(!top.top_strengths.contains(&"Restorative".to_string()));
}

#[test]
fn candidate_pool_excludes_cohort_and_orders_by_competency() {
    let (connection, _) = seeded_connection();
    let source = SqliteSource::from_connection(connection);

    let pool = source
        .fetch_candidate_pool(&cohort(), 3)
        .expect("candidate pool");
    let ids = pool
        .iter()
        .map(|candidate| candidate.employee_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["EMP100006", "EMP100005", "EMP100012"]);
    assert!((pool[0].competency_score - 4.3).abs() < 1e-9);
    assert_eq!(pool[0].role, "Engineering Lead");
}

#[test]
fn candidate_pool_defaults_missing_competency() {
    let (connection, _) = seeded_connection();
    connection
        .execute(
            "INSERT INTO employees(employee_id, fullname) VALUES('EMP200003', 'Wulan Sari')",
            [],
        )
        .expect("insert employee without competencies");
    let source = SqliteSource::from_connection(connection);

    let pool = source
        .fetch_candidate_pool(&cohort(), SYNTHETIC_POOL_LIMIT)
        .expect("candidate pool");
    assert_eq!(pool.len(), 11);
    let unassessed = pool
        .iter()
        .find(|candidate| candidate.employee_id == "EMP200003")
        .expect("unassessed candidate");
    assert_eq!(unassessed.competency_score, 3.0);
    assert!(pool.iter().all(|candidate| !cohort().contains(&candidate.employee_id)));
}

#[test]
fn offline_source_fails_every_call() {
    let source = OfflineSource::new("no database");
    let request = MatchRequest::new("VACANCY_TEST", cohort());

    let err = source.fetch_population().expect_err("offline");
    assert!(err.to_string().contains("no database"));
    assert!(source.fetch_match_inputs(&request).is_err());
    assert!(source.fetch_candidate_pool(&cohort(), 5).is_err());
}

#[test]
fn demo_database_ranks_at_live_level() {
    let (connection, _) = seeded_connection();
    let source = SqliteSource::from_connection(connection);
    let request =
        MatchRequest::new("VACANCY_TEST", cohort()).with_role("Data Analyst", "Senior");
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let outcome = run_matching(&source, &request, &mut rng);

    assert_eq!(outcome.level, DataLevel::Live);
    assert!(!outcome.is_degraded());
    assert_eq!(outcome.candidates.len(), 10);
    let benchmark = outcome.benchmark.expect("live benchmark");
    assert_eq!(benchmark.member_count, 2);
    assert!((benchmark.competency_avg - 4.55).abs() < 1e-9);

    let ranks = outcome
        .candidates
        .iter()
        .map(|candidate| candidate.rank)
        .collect::<Vec<_>>();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    assert!(
        outcome
            .candidates
            .windows(2)
            .all(|pair| pair[0].match_rate >= pair[1].match_rate)
    );
    assert!(
        outcome
            .candidates
            .iter()
            .all(|candidate| !request.cohort.contains(&candidate.profile.employee_id))
    );
}
