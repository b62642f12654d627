use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RecordId, UnemployedSort};
use super::repository::ExchangeRepository;
use super::service::{ExchangeServices, ServiceError};

/// Router builder exposing the exchange collections and the matching
/// endpoints.
pub fn exchange_router<R>(services: Arc<ExchangeServices<R>>) -> Router
where
    R: ExchangeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/unemployed",
            get(list_unemployed::<R>).post(create_unemployed::<R>),
        )
        .route(
            "/api/v1/unemployed/statistics",
            get(unemployed_statistics::<R>),
        )
        .route(
            "/api/v1/unemployed/:id",
            get(get_unemployed::<R>)
                .put(update_unemployed::<R>)
                .delete(delete_unemployed::<R>),
        )
        .route(
            "/api/v1/unemployed/:id/resumes",
            get(resumes_for_unemployed::<R>),
        )
        .route(
            "/api/v1/companies",
            get(list_companies::<R>).post(create_company::<R>),
        )
        .route(
            "/api/v1/companies/:id",
            get(get_company::<R>)
                .put(update_company::<R>)
                .delete(delete_company::<R>),
        )
        .route(
            "/api/v1/companies/:id/vacancies",
            get(vacancies_for_company::<R>),
        )
        .route(
            "/api/v1/vacancies",
            get(list_vacancies::<R>).post(create_vacancy::<R>),
        )
        .route(
            "/api/v1/vacancies/:id",
            get(get_vacancy::<R>)
                .put(update_vacancy::<R>)
                .delete(delete_vacancy::<R>),
        )
        .route("/api/v1/vacancies/:id/matches", get(matches_for_vacancy::<R>))
        .route(
            "/api/v1/resumes",
            get(list_resumes::<R>).post(create_resume::<R>),
        )
        .route(
            "/api/v1/resumes/:id",
            get(get_resume::<R>)
                .put(update_resume::<R>)
                .delete(delete_resume::<R>),
        )
        .route("/api/v1/resumes/:id/matches", get(matches_for_resume::<R>))
        .with_state(services)
}

fn error_response(error: ServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}

fn ok<T: serde::Serialize>(value: T) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

fn created<T: serde::Serialize>(value: T) -> Response {
    (StatusCode::CREATED, Json(value)).into_response()
}

#[derive(Debug, Deserialize)]
struct UnemployedListQuery {
    sort: Option<UnemployedSort>,
    keyword: Option<String>,
    qualification: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyListQuery {
    #[serde(default)]
    sorted: bool,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KeywordQuery {
    keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MatchQuery {
    min_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct UnemployedPayload {
    name: String,
    surname: String,
    #[serde(default)]
    qualifications: String,
}

#[derive(Debug, Deserialize)]
struct CompanyPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct VacancyPayload {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    qualifications: String,
    company_id: String,
}

#[derive(Debug, Deserialize)]
struct ResumePayload {
    title: String,
    #[serde(default)]
    skills_description: String,
    unemployed_id: String,
}

async fn list_unemployed<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Query(query): Query<UnemployedListQuery>,
) -> Response {
    let result = if let Some(keyword) = query.keyword.as_deref() {
        services.unemployed.find_by_keyword(keyword)
    } else if let Some(qualification) = query.qualification.as_deref() {
        services.unemployed.find_by_qualification(qualification)
    } else {
        services.unemployed.get_all(query.sort)
    };

    match result {
        Ok(list) => ok(list),
        Err(error) => error_response(error),
    }
}

async fn create_unemployed<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Json(payload): Json<UnemployedPayload>,
) -> Response {
    match services
        .unemployed
        .add(&payload.name, &payload.surname, &payload.qualifications)
    {
        Ok(person) => created(person),
        Err(error) => error_response(error),
    }
}

async fn unemployed_statistics<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
) -> Response {
    match services.unemployed.statistics() {
        Ok(statistics) => ok(statistics),
        Err(error) => error_response(error),
    }
}

async fn get_unemployed<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.unemployed.get(&RecordId(id)) {
        Ok(person) => ok(person),
        Err(error) => error_response(error),
    }
}

async fn update_unemployed<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
    Json(payload): Json<UnemployedPayload>,
) -> Response {
    let mut person = match services.unemployed.get(&RecordId(id)) {
        Ok(person) => person,
        Err(error) => return error_response(error),
    };

    person.name = payload.name;
    person.surname = payload.surname;
    person.qualifications = payload.qualifications;

    match services.unemployed.update(person) {
        Ok(person) => ok(person),
        Err(error) => error_response(error),
    }
}

async fn delete_unemployed<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.unemployed.delete(&RecordId(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn resumes_for_unemployed<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    let id = RecordId(id);
    if let Err(error) = services.unemployed.get(&id) {
        return error_response(error);
    }

    match services.resumes.for_unemployed(&id) {
        Ok(resumes) => ok(resumes),
        Err(error) => error_response(error),
    }
}

async fn list_companies<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Query(query): Query<CompanyListQuery>,
) -> Response {
    let result = if let Some(name) = query.name.as_deref() {
        services.companies.find_by_name(name)
    } else {
        services.companies.get_all(query.sorted)
    };

    match result {
        Ok(list) => ok(list),
        Err(error) => error_response(error),
    }
}

async fn create_company<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Json(payload): Json<CompanyPayload>,
) -> Response {
    match services.companies.add(&payload.name) {
        Ok(company) => created(company),
        Err(error) => error_response(error),
    }
}

async fn get_company<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.companies.get(&RecordId(id)) {
        Ok(company) => ok(company),
        Err(error) => error_response(error),
    }
}

async fn update_company<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
    Json(payload): Json<CompanyPayload>,
) -> Response {
    let mut company = match services.companies.get(&RecordId(id)) {
        Ok(company) => company,
        Err(error) => return error_response(error),
    };

    company.name = payload.name;

    match services.companies.update(company) {
        Ok(company) => ok(company),
        Err(error) => error_response(error),
    }
}

async fn delete_company<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.companies.delete(&RecordId(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn vacancies_for_company<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    let id = RecordId(id);
    if let Err(error) = services.companies.get(&id) {
        return error_response(error);
    }

    match services.vacancies.for_company(&id) {
        Ok(vacancies) => ok(vacancies),
        Err(error) => error_response(error),
    }
}

async fn list_vacancies<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Query(query): Query<KeywordQuery>,
) -> Response {
    let result = if let Some(keyword) = query.keyword.as_deref() {
        services.vacancies.find_by_keyword(keyword)
    } else {
        services.vacancies.get_all()
    };

    match result {
        Ok(list) => ok(list),
        Err(error) => error_response(error),
    }
}

async fn create_vacancy<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Json(payload): Json<VacancyPayload>,
) -> Response {
    match services.vacancies.add(
        &payload.title,
        &payload.description,
        &payload.qualifications,
        RecordId(payload.company_id),
    ) {
        Ok(vacancy) => created(vacancy),
        Err(error) => error_response(error),
    }
}

async fn get_vacancy<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.vacancies.get(&RecordId(id)) {
        Ok(vacancy) => ok(vacancy),
        Err(error) => error_response(error),
    }
}

async fn update_vacancy<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
    Json(payload): Json<VacancyPayload>,
) -> Response {
    let mut vacancy = match services.vacancies.get(&RecordId(id)) {
        Ok(vacancy) => vacancy,
        Err(error) => return error_response(error),
    };

    vacancy.title = payload.title;
    vacancy.description = payload.description;
    vacancy.qualifications = payload.qualifications;
    vacancy.company_id = RecordId(payload.company_id);

    match services.vacancies.update(vacancy) {
        Ok(vacancy) => ok(vacancy),
        Err(error) => error_response(error),
    }
}

async fn delete_vacancy<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.vacancies.delete(&RecordId(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn matches_for_vacancy<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
    Query(query): Query<MatchQuery>,
) -> Response {
    let vacancy = match services.vacancies.get(&RecordId(id)) {
        Ok(vacancy) => vacancy,
        Err(error) => return error_response(error),
    };

    match services.resumes.matches_for_vacancy(&vacancy, query.min_score) {
        Ok(matches) => ok(matches),
        Err(error) => error_response(error),
    }
}

async fn list_resumes<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Query(query): Query<KeywordQuery>,
) -> Response {
    let result = if let Some(keyword) = query.keyword.as_deref() {
        services.resumes.find_by_keyword(keyword)
    } else {
        services.resumes.get_all()
    };

    match result {
        Ok(list) => ok(list),
        Err(error) => error_response(error),
    }
}

async fn create_resume<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Json(payload): Json<ResumePayload>,
) -> Response {
    match services.resumes.add(
        &payload.title,
        &payload.skills_description,
        RecordId(payload.unemployed_id),
    ) {
        Ok(resume) => created(resume),
        Err(error) => error_response(error),
    }
}

async fn get_resume<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.resumes.get(&RecordId(id)) {
        Ok(resume) => ok(resume),
        Err(error) => error_response(error),
    }
}

async fn update_resume<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
    Json(payload): Json<ResumePayload>,
) -> Response {
    let mut resume = match services.resumes.get(&RecordId(id)) {
        Ok(resume) => resume,
        Err(error) => return error_response(error),
    };

    resume.title = payload.title;
    resume.skills_description = payload.skills_description;
    resume.unemployed_id = RecordId(payload.unemployed_id);

    match services.resumes.update(resume) {
        Ok(resume) => ok(resume),
        Err(error) => error_response(error),
    }
}

async fn delete_resume<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
) -> Response {
    match services.resumes.delete(&RecordId(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn matches_for_resume<R: ExchangeRepository>(
    State(services): State<Arc<ExchangeServices<R>>>,
    Path(id): Path<String>,
    Query(query): Query<MatchQuery>,
) -> Response {
    let resume = match services.resumes.get(&RecordId(id)) {
        Ok(resume) => resume,
        Err(error) => return error_response(error),
    };

    match services
        .vacancies
        .matches_for_resume(&resume, query.min_score)
    {
        Ok(matches) => ok(matches),
        Err(error) => error_response(error),
    }
}
