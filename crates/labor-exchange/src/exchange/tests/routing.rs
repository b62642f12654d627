use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn post_unemployed_returns_created_record() {
    let router = exchange_router_with_services(build_services().0);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/unemployed",
            json!({ "name": "Ivan", "surname": "Shevchenko", "qualifications": "Python, SQL" }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").is_some());
    assert_eq!(payload.get("name"), Some(&json!("Ivan")));
}

#[tokio::test]
async fn post_unemployed_with_blank_name_is_unprocessable() {
    let router = exchange_router_with_services(build_services().0);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/unemployed",
            json!({ "name": "  ", "surname": "Shevchenko" }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload.get("error").is_some());
}

#[tokio::test]
async fn get_unknown_record_is_not_found() {
    let router = exchange_router_with_services(build_services().0);

    let response = router
        .oneshot(get_request("/api/v1/vacancies/no-such-id"))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_returns_not_found() {
    let (services, _) = build_services();
    let person = services
        .unemployed
        .add("Ivan", "Shevchenko", "")
        .expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/unemployed/{}", person.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(get_request(&format!("/api/v1/unemployed/{}", person.id)))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_unemployed_honors_sort_and_keyword_params() {
    let (services, _) = build_services();
    services
        .unemployed
        .add("Borys", "Tkachenko", "")
        .expect("add");
    services.unemployed.add("Anna", "Melnyk", "").expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .clone()
        .oneshot(get_request("/api/v1/unemployed?sort=name"))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["name"], json!("Anna"));

    let response = router
        .oneshot(get_request("/api/v1/unemployed?keyword=tkach"))
        .await
        .expect("router dispatch");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
    assert_eq!(payload[0]["surname"], json!("Tkachenko"));
}

#[tokio::test]
async fn statistics_endpoint_reports_totals() {
    let (services, _) = build_services();
    services
        .unemployed
        .add("Ivan", "A", "Python, SQL")
        .expect("add");
    services.unemployed.add("Maria", "B", "SQL").expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .oneshot(get_request("/api/v1/unemployed/statistics"))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], json!(2));
    assert_eq!(payload["top_qualification"], json!("sql"));
}

#[tokio::test]
async fn resume_matching_flow_over_the_api() {
    let (services, _) = build_services();
    let company = services.companies.add("Acme Staffing").expect("add");
    services
        .vacancies
        .add("Python Dev", "", "Python, SQL, Git", company.id.clone())
        .expect("add");
    services
        .vacancies
        .add("Data Analyst", "", "SQL, Python, Pandas", company.id.clone())
        .expect("add");
    services
        .vacancies
        .add("Frontend Dev", "", "JavaScript, React", company.id.clone())
        .expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/unemployed",
            json!({ "name": "Ivan", "surname": "Shevchenko", "qualifications": "Python, SQL, Git" }),
        ))
        .await
        .expect("router dispatch");
    let person = read_json_body(response).await;
    let person_id = person["id"].as_str().expect("person id").to_string();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/resumes",
            json!({ "title": "Backend resume", "unemployed_id": person_id }),
        ))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);
    let resume = read_json_body(response).await;
    assert_eq!(resume["qualifications"], json!("Python, SQL, Git"));
    let resume_id = resume["id"].as_str().expect("resume id").to_string();

    let response = router
        .clone()
        .oneshot(get_request(&format!("/api/v1/resumes/{resume_id}/matches")))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let matches = read_json_body(response).await;
    let matches = matches.as_array().expect("match list");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["record"]["title"], json!("Python Dev"));
    assert_eq!(matches[0]["score"], json!(1.0));
    assert_eq!(matches[1]["record"]["title"], json!("Data Analyst"));

    // Raising the threshold over the API trims the tail.
    let response = router
        .oneshot(get_request(&format!(
            "/api/v1/resumes/{resume_id}/matches?min_score=0.9"
        )))
        .await
        .expect("router dispatch");
    let strict = read_json_body(response).await;
    assert_eq!(strict.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn vacancy_matches_endpoint_ranks_resumes() {
    let (services, _) = build_services();
    let company = services.companies.add("Acme Staffing").expect("add");
    let vacancy = services
        .vacancies
        .add("Python Junior", "", "Python", company.id.clone())
        .expect("add");
    let owner = services
        .unemployed
        .add("Ivan", "Shevchenko", "Python, SQL, Git")
        .expect("add");
    services
        .resumes
        .add("Backend resume", "", owner.id.clone())
        .expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .oneshot(get_request(&format!(
            "/api/v1/vacancies/{}/matches",
            vacancy.id
        )))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let matches = read_json_body(response).await;
    assert_eq!(matches[0]["score"], json!(1.0));
}

#[tokio::test]
async fn company_vacancy_listing_requires_known_company() {
    let (services, _) = build_services();
    let company = services.companies.add("Acme Staffing").expect("add");
    services
        .vacancies
        .add("Dev", "", "", company.id.clone())
        .expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .clone()
        .oneshot(get_request(&format!(
            "/api/v1/companies/{}/vacancies",
            company.id
        )))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));

    let response = router
        .oneshot(get_request("/api/v1/companies/unknown/vacancies"))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_updates_persisted_vacancy() {
    let (services, _) = build_services();
    let company = services.companies.add("Acme Staffing").expect("add");
    let vacancy = services
        .vacancies
        .add("Dev", "Old description", "Python", company.id.clone())
        .expect("add");
    let router = exchange_router_with_services(services);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/vacancies/{}", vacancy.id),
            json!({
                "title": "Senior Dev",
                "description": "New description",
                "qualifications": "Python, Rust",
                "company_id": company.id.0,
            }),
        ))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(get_request(&format!("/api/v1/vacancies/{}", vacancy.id)))
        .await
        .expect("router dispatch");
    let payload = read_json_body(response).await;
    assert_eq!(payload["title"], json!("Senior Dev"));
    assert_eq!(payload["qualifications"], json!("Python, Rust"));
}
