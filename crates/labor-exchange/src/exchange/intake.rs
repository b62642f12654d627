use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read intake export: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid intake CSV data: {}", err),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One parsed registration row from an intake export.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeRow {
    pub name: String,
    pub surname: String,
    pub qualifications: String,
}

/// Bulk registration source: a CSV export with `Name,Surname,Qualifications`
/// headers. Rows missing a name or surname are skipped, not fatal.
pub struct UnemployedCsvIntake;

impl UnemployedCsvIntake {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeRow>, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<IntakeRow>, IntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for record in csv_reader.deserialize::<CsvRow>() {
            let row = record?;
            if row.name.is_empty() || row.surname.is_empty() {
                skipped += 1;
                continue;
            }

            rows.push(IntakeRow {
                name: row.name,
                surname: row.surname,
                qualifications: row.qualifications,
            });
        }

        if skipped > 0 {
            warn!(skipped, "intake export contained incomplete rows");
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Surname")]
    surname: String,
    #[serde(rename = "Qualifications", default)]
    qualifications: String,
}
