use super::common::*;
use crate::exchange::domain::RecordId;
use crate::exchange::matching::{MatchConfig, MatchEngine};

fn engine() -> MatchEngine {
    MatchEngine::default()
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn ranks_vacancies_for_resume_by_descending_coverage() {
    let company_id = RecordId::from("c1");
    let resume = resume_with("Python, SQL, Git");
    let vacancies = vec![
        vacancy("Python Dev", "Python, SQL, Git", &company_id),
        vacancy("Data Analyst", "SQL, Python, Pandas", &company_id),
        vacancy("Frontend Dev", "JavaScript, React", &company_id),
        vacancy("Python Junior", "Python", &company_id),
    ];

    let matches = engine().matches_for_resume(&resume, &vacancies);

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].record.title, "Python Dev");
    approx(matches[0].score, 1.0);
    assert_eq!(matches[1].record.title, "Data Analyst");
    approx(matches[1].score, 2.0 / 3.0);
    assert_eq!(matches[2].record.title, "Python Junior");
    approx(matches[2].score, 1.0 / 3.0);
}

#[test]
fn equal_scores_keep_candidate_input_order() {
    let company_id = RecordId::from("c1");
    let resume = resume_with("python, sql");
    let vacancies = vec![
        vacancy("First half", "python", &company_id),
        vacancy("Full", "python, sql", &company_id),
        vacancy("Second half", "sql", &company_id),
        vacancy("Third half", "python, rust", &company_id),
    ];

    let matches = engine().matches_for_resume(&resume, &vacancies);

    let titles: Vec<&str> = matches
        .iter()
        .map(|ranked| ranked.record.title.as_str())
        .collect();
    assert_eq!(titles, ["Full", "First half", "Second half", "Third half"]);
    for window in matches.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
}

#[test]
fn boundary_score_is_retained_and_below_boundary_dropped() {
    let company_id = RecordId::from("c1");
    let resume = resume_with("a, b, c, d");
    let on_boundary = vec![vacancy("Quarter", "a", &company_id)];
    let matches = engine().matches_for_resume(&resume, &on_boundary);
    assert_eq!(matches.len(), 1);
    approx(matches[0].score, 0.25);

    let resume = resume_with("a, b, c, d, e");
    let below = vec![vacancy("Fifth", "a", &company_id)];
    assert!(engine().matches_for_resume(&resume, &below).is_empty());
}

#[test]
fn empty_candidate_list_yields_empty_ranking() {
    let resume = resume_with("Python, SQL");
    assert!(engine().matches_for_resume(&resume, &[]).is_empty());
}

#[test]
fn anchor_without_tags_matches_nothing_at_positive_threshold() {
    let company_id = RecordId::from("c1");
    let resume = resume_with("   ,  ");
    let vacancies = vec![
        vacancy("Python Dev", "Python", &company_id),
        vacancy("Analyst", "", &company_id),
    ];

    assert!(engine().matches_for_resume(&resume, &vacancies).is_empty());
}

#[test]
fn zero_threshold_admits_zero_score_candidates() {
    let company_id = RecordId::from("c1");
    let resume = resume_with("");
    let vacancies = vec![vacancy("Python Dev", "Python", &company_id)];

    let engine = MatchEngine::new(MatchConfig { min_score: 0.0 });
    let matches = engine.matches_for_resume(&resume, &vacancies);
    assert_eq!(matches.len(), 1);
    approx(matches[0].score, 0.0);
}

#[test]
fn vacancy_direction_divides_by_vacancy_tags() {
    let company_id = RecordId::from("c1");
    let anchor = vacancy("Python Junior", "Python", &company_id);
    let resumes = vec![resume_with("Python, SQL, Git")];

    let matches = engine().matches_for_vacancy(&anchor, &resumes);

    // The single required tag is fully covered even though the resume lists
    // more skills; the opposite direction would score 1/3.
    assert_eq!(matches.len(), 1);
    approx(matches[0].score, 1.0);

    let reverse = engine().matches_for_resume(&resumes[0], &[anchor]);
    approx(reverse[0].score, 1.0 / 3.0);
}
