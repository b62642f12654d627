use serde::{Deserialize, Serialize};

use super::domain::{Company, Resume, Unemployed, Vacancy};

/// One full snapshot of the exchange: every collection the flat store holds.
/// Collections default to empty so files written by older revisions (or a
/// hand-seeded subset) still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeStore {
    #[serde(default)]
    pub unemployed: Vec<Unemployed>,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub vacancies: Vec<Vacancy>,
    #[serde(default)]
    pub resumes: Vec<Resume>,
}

/// Storage abstraction so the service modules can be exercised in isolation.
/// Mutations are whole-snapshot read-modify-write; the services own the
/// modify step.
pub trait ExchangeRepository: Send + Sync {
    fn load(&self) -> Result<ExchangeStore, RepositoryError>;
    fn save(&self, store: &ExchangeStore) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store malformed: {0}")]
    Malformed(String),
}
