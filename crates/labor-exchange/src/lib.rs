//! Labor exchange record management.
//!
//! The crate tracks unemployed persons, companies, vacancies, and resumes in
//! a flat JSON store and ranks vacancies against resumes (and vice versa) by
//! qualification-tag overlap. The HTTP surface lives in
//! [`exchange::exchange_router`]; the `labor-exchange-api` binary wires it to
//! a configured store.

pub mod config;
pub mod error;
pub mod exchange;
pub mod telemetry;
