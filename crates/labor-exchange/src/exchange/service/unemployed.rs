use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::{contains_keyword, normalized_keyword, ServiceError};
use crate::exchange::domain::{RecordId, Unemployed, UnemployedSort};
use crate::exchange::intake::IntakeRow;
use crate::exchange::matching::qualification_tags;
use crate::exchange::repository::ExchangeRepository;

/// Aggregate counters shown on the statistics page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnemployedStatistics {
    pub total: usize,
    /// Most widespread normalized tag; ties resolve to the lexicographically
    /// smallest tag, `None` when nobody lists any qualification.
    pub top_qualification: Option<String>,
}

/// Registration, search, and statistics for job seekers.
pub struct UnemployedService<R> {
    repository: Arc<R>,
}

impl<R: ExchangeRepository> UnemployedService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn add(
        &self,
        name: &str,
        surname: &str,
        qualifications: &str,
    ) -> Result<Unemployed, ServiceError> {
        let name = name.trim();
        let surname = surname.trim();
        if name.is_empty() || surname.is_empty() {
            return Err(ServiceError::Validation(
                "name and surname must not be empty".to_string(),
            ));
        }

        let person = Unemployed::new(name, surname, qualifications.trim());

        let mut store = self.repository.load()?;
        store.unemployed.push(person.clone());
        self.repository.save(&store)?;

        info!(id = %person.id, "registered unemployed person");
        Ok(person)
    }

    /// Register a batch of intake rows in a single store write.
    pub fn register_bulk(&self, rows: &[IntakeRow]) -> Result<Vec<Unemployed>, ServiceError> {
        let persons: Vec<Unemployed> = rows
            .iter()
            .map(|row| Unemployed::new(&row.name, &row.surname, row.qualifications.trim()))
            .collect();

        let mut store = self.repository.load()?;
        store.unemployed.extend(persons.iter().cloned());
        self.repository.save(&store)?;

        info!(count = persons.len(), "registered intake batch");
        Ok(persons)
    }

    pub fn get_all(&self, sort: Option<UnemployedSort>) -> Result<Vec<Unemployed>, ServiceError> {
        let mut list = self.repository.load()?.unemployed;
        match sort {
            Some(UnemployedSort::Name) => list.sort_by(|a, b| a.name.cmp(&b.name)),
            Some(UnemployedSort::Surname) => list.sort_by(|a, b| a.surname.cmp(&b.surname)),
            None => {}
        }
        Ok(list)
    }

    pub fn get(&self, id: &RecordId) -> Result<Unemployed, ServiceError> {
        self.repository
            .load()?
            .unemployed
            .into_iter()
            .find(|person| &person.id == id)
            .ok_or_else(|| ServiceError::not_found("unemployed person", id))
    }

    pub fn update(&self, person: Unemployed) -> Result<Unemployed, ServiceError> {
        if person.name.trim().is_empty() || person.surname.trim().is_empty() {
            return Err(ServiceError::Validation(
                "name and surname must not be empty".to_string(),
            ));
        }

        let mut store = self.repository.load()?;
        let slot = store
            .unemployed
            .iter_mut()
            .find(|stored| stored.id == person.id)
            .ok_or_else(|| ServiceError::not_found("unemployed person", &person.id))?;
        *slot = person.clone();
        self.repository.save(&store)?;
        Ok(person)
    }

    pub fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        let mut store = self.repository.load()?;
        let before = store.unemployed.len();
        store.unemployed.retain(|person| &person.id != id);
        if store.unemployed.len() == before {
            return Err(ServiceError::not_found("unemployed person", id));
        }
        self.repository.save(&store)?;

        info!(%id, "deleted unemployed person");
        Ok(())
    }

    pub fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Unemployed>, ServiceError> {
        let Some(keyword) = normalized_keyword(keyword) else {
            return Ok(Vec::new());
        };

        Ok(self
            .repository
            .load()?
            .unemployed
            .into_iter()
            .filter(|person| {
                contains_keyword(&person.name, &keyword)
                    || contains_keyword(&person.surname, &keyword)
            })
            .collect())
    }

    pub fn find_by_qualification(&self, keyword: &str) -> Result<Vec<Unemployed>, ServiceError> {
        let Some(keyword) = normalized_keyword(keyword) else {
            return Ok(Vec::new());
        };

        Ok(self
            .repository
            .load()?
            .unemployed
            .into_iter()
            .filter(|person| contains_keyword(&person.qualifications, &keyword))
            .collect())
    }

    /// Total head count plus the tag held by the most persons. A tag listed
    /// twice by one person counts once for that person.
    pub fn statistics(&self) -> Result<UnemployedStatistics, ServiceError> {
        let all = self.repository.load()?.unemployed;
        let total = all.len();

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for person in &all {
            for tag in qualification_tags(&person.qualifications) {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let top_qualification = counts
            .into_iter()
            .fold(None::<(String, usize)>, |best, (tag, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((tag, count)),
            })
            .map(|(tag, _)| tag);

        Ok(UnemployedStatistics {
            total,
            top_qualification,
        })
    }
}
