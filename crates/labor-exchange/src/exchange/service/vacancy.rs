use std::sync::Arc;

use tracing::info;

use super::{contains_keyword, normalized_keyword, ServiceError};
use crate::exchange::domain::{RecordId, Resume, Vacancy};
use crate::exchange::matching::{MatchConfig, MatchEngine, RankedMatch};
use crate::exchange::repository::ExchangeRepository;

/// CRUD, search, and resume-anchored matching over posted vacancies.
pub struct VacancyService<R> {
    repository: Arc<R>,
    engine: MatchEngine,
}

impl<R: ExchangeRepository> VacancyService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_match_config(repository, MatchConfig::default())
    }

    pub fn with_match_config(repository: Arc<R>, config: MatchConfig) -> Self {
        Self {
            repository,
            engine: MatchEngine::new(config),
        }
    }

    pub fn add(
        &self,
        title: &str,
        description: &str,
        qualifications: &str,
        company_id: RecordId,
    ) -> Result<Vacancy, ServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ServiceError::Validation(
                "vacancy title must not be empty".to_string(),
            ));
        }

        let mut store = self.repository.load()?;
        if !store.companies.iter().any(|company| company.id == company_id) {
            return Err(ServiceError::not_found("company", &company_id));
        }

        let vacancy = Vacancy::new(title, description.trim(), qualifications.trim(), company_id);
        store.vacancies.push(vacancy.clone());
        self.repository.save(&store)?;

        info!(id = %vacancy.id, "posted vacancy");
        Ok(vacancy)
    }

    pub fn get_all(&self) -> Result<Vec<Vacancy>, ServiceError> {
        Ok(self.repository.load()?.vacancies)
    }

    pub fn get(&self, id: &RecordId) -> Result<Vacancy, ServiceError> {
        self.repository
            .load()?
            .vacancies
            .into_iter()
            .find(|vacancy| &vacancy.id == id)
            .ok_or_else(|| ServiceError::not_found("vacancy", id))
    }

    pub fn update(&self, vacancy: Vacancy) -> Result<Vacancy, ServiceError> {
        if vacancy.title.trim().is_empty() {
            return Err(ServiceError::Validation(
                "vacancy title must not be empty".to_string(),
            ));
        }

        let mut store = self.repository.load()?;
        if !store
            .companies
            .iter()
            .any(|company| company.id == vacancy.company_id)
        {
            return Err(ServiceError::not_found("company", &vacancy.company_id));
        }

        let slot = store
            .vacancies
            .iter_mut()
            .find(|stored| stored.id == vacancy.id)
            .ok_or_else(|| ServiceError::not_found("vacancy", &vacancy.id))?;
        *slot = vacancy.clone();
        self.repository.save(&store)?;
        Ok(vacancy)
    }

    pub fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        let mut store = self.repository.load()?;
        let before = store.vacancies.len();
        store.vacancies.retain(|vacancy| &vacancy.id != id);
        if store.vacancies.len() == before {
            return Err(ServiceError::not_found("vacancy", id));
        }
        self.repository.save(&store)?;

        info!(%id, "deleted vacancy");
        Ok(())
    }

    pub fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Vacancy>, ServiceError> {
        let Some(keyword) = normalized_keyword(keyword) else {
            return Ok(Vec::new());
        };

        Ok(self
            .repository
            .load()?
            .vacancies
            .into_iter()
            .filter(|vacancy| {
                contains_keyword(&vacancy.title, &keyword)
                    || contains_keyword(&vacancy.description, &keyword)
                    || contains_keyword(&vacancy.qualifications, &keyword)
            })
            .collect())
    }

    pub fn for_company(&self, company_id: &RecordId) -> Result<Vec<Vacancy>, ServiceError> {
        Ok(self
            .repository
            .load()?
            .vacancies
            .into_iter()
            .filter(|vacancy| &vacancy.company_id == company_id)
            .collect())
    }

    /// Rank every posted vacancy against the resume's qualification profile.
    /// The caller resolves the anchor resume first; an unknown resume id never
    /// reaches this method.
    pub fn matches_for_resume(
        &self,
        resume: &Resume,
        min_score: Option<f64>,
    ) -> Result<Vec<RankedMatch<Vacancy>>, ServiceError> {
        let vacancies = self.repository.load()?.vacancies;
        Ok(self
            .engine_with(min_score)
            .matches_for_resume(resume, &vacancies))
    }

    fn engine_with(&self, min_score: Option<f64>) -> MatchEngine {
        match min_score {
            Some(min_score) => MatchEngine::new(MatchConfig { min_score }),
            None => self.engine.clone(),
        }
    }
}
