use std::sync::Arc;

use tracing::info;

use super::{contains_keyword, normalized_keyword, ServiceError};
use crate::exchange::domain::{RecordId, Resume, Vacancy};
use crate::exchange::matching::{MatchConfig, MatchEngine, RankedMatch};
use crate::exchange::repository::ExchangeRepository;

/// CRUD, search, and vacancy-anchored matching over filed resumes.
pub struct ResumeService<R> {
    repository: Arc<R>,
    engine: MatchEngine,
}

impl<R: ExchangeRepository> ResumeService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_match_config(repository, MatchConfig::default())
    }

    pub fn with_match_config(repository: Arc<R>, config: MatchConfig) -> Self {
        Self {
            repository,
            engine: MatchEngine::new(config),
        }
    }

    /// File a resume for a registered person. The qualification string is
    /// copied from the owner's profile here; the resume form never supplies
    /// it directly.
    pub fn add(
        &self,
        title: &str,
        skills_description: &str,
        unemployed_id: RecordId,
    ) -> Result<Resume, ServiceError> {
        let title = title.trim();
        if title.is_empty() || unemployed_id.0.trim().is_empty() {
            return Err(ServiceError::Validation(
                "resume title and owner id are required".to_string(),
            ));
        }

        let mut store = self.repository.load()?;
        let owner = store
            .unemployed
            .iter()
            .find(|person| person.id == unemployed_id)
            .ok_or_else(|| ServiceError::not_found("unemployed person", &unemployed_id))?;

        let resume = Resume::new(
            title,
            skills_description.trim(),
            &owner.qualifications,
            unemployed_id,
        );
        store.resumes.push(resume.clone());
        self.repository.save(&store)?;

        info!(id = %resume.id, owner = %resume.unemployed_id, "filed resume");
        Ok(resume)
    }

    pub fn get_all(&self) -> Result<Vec<Resume>, ServiceError> {
        Ok(self.repository.load()?.resumes)
    }

    pub fn get(&self, id: &RecordId) -> Result<Resume, ServiceError> {
        self.repository
            .load()?
            .resumes
            .into_iter()
            .find(|resume| &resume.id == id)
            .ok_or_else(|| ServiceError::not_found("resume", id))
    }

    pub fn update(&self, resume: Resume) -> Result<Resume, ServiceError> {
        if resume.title.trim().is_empty() {
            return Err(ServiceError::Validation(
                "resume title must not be empty".to_string(),
            ));
        }

        let mut store = self.repository.load()?;
        if !store
            .unemployed
            .iter()
            .any(|person| person.id == resume.unemployed_id)
        {
            return Err(ServiceError::not_found(
                "unemployed person",
                &resume.unemployed_id,
            ));
        }

        let slot = store
            .resumes
            .iter_mut()
            .find(|stored| stored.id == resume.id)
            .ok_or_else(|| ServiceError::not_found("resume", &resume.id))?;
        *slot = resume.clone();
        self.repository.save(&store)?;
        Ok(resume)
    }

    pub fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        let mut store = self.repository.load()?;
        let before = store.resumes.len();
        store.resumes.retain(|resume| &resume.id != id);
        if store.resumes.len() == before {
            return Err(ServiceError::not_found("resume", id));
        }
        self.repository.save(&store)?;

        info!(%id, "deleted resume");
        Ok(())
    }

    pub fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Resume>, ServiceError> {
        let Some(keyword) = normalized_keyword(keyword) else {
            return Ok(Vec::new());
        };

        Ok(self
            .repository
            .load()?
            .resumes
            .into_iter()
            .filter(|resume| {
                contains_keyword(&resume.title, &keyword)
                    || contains_keyword(&resume.skills_description, &keyword)
            })
            .collect())
    }

    pub fn for_unemployed(&self, unemployed_id: &RecordId) -> Result<Vec<Resume>, ServiceError> {
        Ok(self
            .repository
            .load()?
            .resumes
            .into_iter()
            .filter(|resume| &resume.unemployed_id == unemployed_id)
            .collect())
    }

    /// Rank every filed resume against the vacancy's required tags. The
    /// caller resolves the anchor vacancy first.
    pub fn matches_for_vacancy(
        &self,
        vacancy: &Vacancy,
        min_score: Option<f64>,
    ) -> Result<Vec<RankedMatch<Resume>>, ServiceError> {
        let resumes = self.repository.load()?.resumes;
        Ok(self
            .engine_with(min_score)
            .matches_for_vacancy(vacancy, &resumes))
    }

    fn engine_with(&self, min_score: Option<f64>) -> MatchEngine {
        match min_score {
            Some(min_score) => MatchEngine::new(MatchConfig { min_score }),
            None => self.engine.clone(),
        }
    }
}
