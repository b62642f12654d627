use std::sync::Arc;

use tracing::info;

use super::{contains_keyword, normalized_keyword, ServiceError};
use crate::exchange::domain::{Company, RecordId};
use crate::exchange::repository::ExchangeRepository;

/// CRUD and name search for ordering companies.
pub struct CompanyService<R> {
    repository: Arc<R>,
}

impl<R: ExchangeRepository> CompanyService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn add(&self, name: &str) -> Result<Company, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Validation(
                "company name must not be empty".to_string(),
            ));
        }

        let company = Company::new(name);

        let mut store = self.repository.load()?;
        store.companies.push(company.clone());
        self.repository.save(&store)?;

        info!(id = %company.id, "registered company");
        Ok(company)
    }

    pub fn get_all(&self, sorted: bool) -> Result<Vec<Company>, ServiceError> {
        let mut list = self.repository.load()?.companies;
        if sorted {
            list.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(list)
    }

    pub fn get(&self, id: &RecordId) -> Result<Company, ServiceError> {
        self.repository
            .load()?
            .companies
            .into_iter()
            .find(|company| &company.id == id)
            .ok_or_else(|| ServiceError::not_found("company", id))
    }

    pub fn update(&self, company: Company) -> Result<Company, ServiceError> {
        if company.name.trim().is_empty() {
            return Err(ServiceError::Validation(
                "company name must not be empty".to_string(),
            ));
        }

        let mut store = self.repository.load()?;
        let slot = store
            .companies
            .iter_mut()
            .find(|stored| stored.id == company.id)
            .ok_or_else(|| ServiceError::not_found("company", &company.id))?;
        *slot = company.clone();
        self.repository.save(&store)?;
        Ok(company)
    }

    pub fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        let mut store = self.repository.load()?;
        let before = store.companies.len();
        store.companies.retain(|company| &company.id != id);
        if store.companies.len() == before {
            return Err(ServiceError::not_found("company", id));
        }
        self.repository.save(&store)?;

        info!(%id, "deleted company");
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Result<Vec<Company>, ServiceError> {
        let Some(keyword) = normalized_keyword(name) else {
            return Ok(Vec::new());
        };

        Ok(self
            .repository
            .load()?
            .companies
            .into_iter()
            .filter(|company| contains_keyword(&company.name, &keyword))
            .collect())
    }
}
