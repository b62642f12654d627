mod company;
mod resume;
mod unemployed;
mod vacancy;

pub use company::CompanyService;
pub use resume::ResumeService;
pub use unemployed::{UnemployedService, UnemployedStatistics};
pub use vacancy::VacancyService;

use std::sync::Arc;

use axum::http::StatusCode;

use super::domain::RecordId;
use super::matching::MatchConfig;
use super::repository::{ExchangeRepository, RepositoryError};

/// Error raised by the exchange services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: &RecordId) -> Self {
        Self::NotFound {
            entity,
            id: id.0.clone(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServiceError::Repository(RepositoryError::Malformed(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// The four entity services over one shared repository, bundled for the
/// router and the CLI.
pub struct ExchangeServices<R> {
    pub unemployed: UnemployedService<R>,
    pub companies: CompanyService<R>,
    pub vacancies: VacancyService<R>,
    pub resumes: ResumeService<R>,
}

impl<R: ExchangeRepository> ExchangeServices<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_match_config(repository, MatchConfig::default())
    }

    pub fn with_match_config(repository: Arc<R>, config: MatchConfig) -> Self {
        Self {
            unemployed: UnemployedService::new(Arc::clone(&repository)),
            companies: CompanyService::new(Arc::clone(&repository)),
            vacancies: VacancyService::with_match_config(Arc::clone(&repository), config),
            resumes: ResumeService::with_match_config(repository, config),
        }
    }
}

/// Case-insensitive substring check shared by the keyword searches.
pub(crate) fn contains_keyword(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Normalizes a search keyword; `None` means "match nothing", mirroring the
/// empty-keyword behavior of the search forms.
pub(crate) fn normalized_keyword(keyword: &str) -> Option<String> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}
