//! Labor exchange record management: domain records, the flat JSON store,
//! per-entity services, and the qualification-overlap matching engine.

pub mod domain;
pub mod intake;
pub mod json_store;
pub mod matching;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Company, RecordId, Resume, Unemployed, UnemployedSort, Vacancy};
pub use intake::{IntakeError, IntakeRow, UnemployedCsvIntake};
pub use json_store::JsonFileRepository;
pub use matching::{
    overlap_score, qualification_tags, MatchConfig, MatchEngine, RankedMatch, DEFAULT_MIN_SCORE,
};
pub use repository::{ExchangeRepository, ExchangeStore, RepositoryError};
pub use router::exchange_router;
pub use service::{
    CompanyService, ExchangeServices, ResumeService, ServiceError, UnemployedService,
    UnemployedStatistics, VacancyService,
};
