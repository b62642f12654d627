use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::exchange::domain::{RecordId, Resume, Unemployed, Vacancy};
use crate::exchange::repository::{ExchangeRepository, ExchangeStore, RepositoryError};
use crate::exchange::router::exchange_router;
use crate::exchange::service::ExchangeServices;

#[derive(Default)]
pub(super) struct MemoryRepository {
    store: Mutex<ExchangeStore>,
}

impl MemoryRepository {
    pub(super) fn snapshot(&self) -> ExchangeStore {
        self.store.lock().expect("store mutex poisoned").clone()
    }
}

impl ExchangeRepository for MemoryRepository {
    fn load(&self) -> Result<ExchangeStore, RepositoryError> {
        Ok(self.snapshot())
    }

    fn save(&self, store: &ExchangeStore) -> Result<(), RepositoryError> {
        *self.store.lock().expect("store mutex poisoned") = store.clone();
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ExchangeRepository for UnavailableRepository {
    fn load(&self) -> Result<ExchangeStore, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn save(&self, _store: &ExchangeStore) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_services() -> (Arc<ExchangeServices<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let services = Arc::new(ExchangeServices::new(Arc::clone(&repository)));
    (services, repository)
}

pub(super) fn exchange_router_with_services(
    services: Arc<ExchangeServices<MemoryRepository>>,
) -> axum::Router {
    exchange_router(services)
}

pub(super) fn vacancy(title: &str, qualifications: &str, company_id: &RecordId) -> Vacancy {
    Vacancy::new(title, "", qualifications, company_id.clone())
}

pub(super) fn resume_with(qualifications: &str) -> Resume {
    Resume::new(
        "Applicant resume",
        "",
        qualifications,
        RecordId::from("person-1"),
    )
}

pub(super) fn person(name: &str, surname: &str, qualifications: &str) -> Unemployed {
    Unemployed::new(name, surname, qualifications)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
