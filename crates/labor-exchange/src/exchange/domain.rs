use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper shared by all exchange records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A registered job seeker. `qualifications` is a free-form comma-separated
/// tag string and is the source profile copied onto new resumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unemployed {
    pub id: RecordId,
    pub name: String,
    pub surname: String,
    pub qualifications: String,
    pub registered_at: DateTime<Utc>,
}

impl Unemployed {
    pub fn new(name: &str, surname: &str, qualifications: &str) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.to_string(),
            surname: surname.to_string(),
            qualifications: qualifications.to_string(),
            registered_at: Utc::now(),
        }
    }

    /// Human-facing label for selection lists.
    pub fn selection_label(&self) -> String {
        format!("{} {} (ID: {})", self.surname, self.name, self.id)
    }
}

/// A company that posts vacancies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

impl Company {
    pub fn new(name: &str) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.to_string(),
            registered_at: Utc::now(),
        }
    }

    pub fn selection_label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

/// An open position. `qualifications` lists the required skill tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub qualifications: String,
    pub company_id: RecordId,
    pub posted_at: DateTime<Utc>,
}

impl Vacancy {
    pub fn new(title: &str, description: &str, qualifications: &str, company_id: RecordId) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.to_string(),
            description: description.to_string(),
            qualifications: qualifications.to_string(),
            company_id,
            posted_at: Utc::now(),
        }
    }

    pub fn selection_label(&self) -> String {
        format!("{} (ID: {})", self.title, self.id)
    }
}

/// A resume filed by a job seeker. `qualifications` is copied from the
/// owner's profile when the resume is created, never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: RecordId,
    pub title: String,
    pub skills_description: String,
    pub qualifications: String,
    pub unemployed_id: RecordId,
    pub created_at: DateTime<Utc>,
}

impl Resume {
    pub fn new(
        title: &str,
        skills_description: &str,
        qualifications: &str,
        unemployed_id: RecordId,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.to_string(),
            skills_description: skills_description.to_string(),
            qualifications: qualifications.to_string(),
            unemployed_id,
            created_at: Utc::now(),
        }
    }

    pub fn selection_label(&self) -> String {
        format!("{} (ID: {})", self.title, self.id)
    }
}

/// Sort orders accepted by the unemployed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnemployedSort {
    Surname,
    Name,
}
