use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, DemoArgs};
use crate::server;
use labor_exchange::config::AppConfig;
use labor_exchange::error::AppError;
use labor_exchange::exchange::{
    ExchangeServices, JsonFileRepository, RecordId, ServiceError, UnemployedCsvIntake,
};

#[derive(Parser, Debug)]
#[command(
    name = "Labor Exchange",
    about = "Run and inspect the labor exchange record service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked matches for a stored resume or vacancy
    Matches(MatchesArgs),
    /// Register unemployed persons from a CSV export
    Import(ImportArgs),
    /// Run an in-memory demo covering registration, search, and matching
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured JSON store location
    #[arg(long)]
    pub(crate) data_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct MatchesArgs {
    /// Resume id to rank vacancies for
    #[arg(long, conflicts_with = "vacancy")]
    resume: Option<String>,
    /// Vacancy id to rank resumes for
    #[arg(long)]
    vacancy: Option<String>,
    /// Override the minimum overlap ratio (default 0.25)
    #[arg(long)]
    min_score: Option<f64>,
    /// Override the configured JSON store location
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV export with Name,Surname,Qualifications headers
    #[arg(long)]
    csv: PathBuf,
    /// Override the configured JSON store location
    #[arg(long)]
    data_file: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Matches(args) => run_matches(args),
        Command::Import(args) => run_import(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn open_services(
    data_file: Option<PathBuf>,
) -> Result<Arc<ExchangeServices<JsonFileRepository>>, AppError> {
    let config = AppConfig::load()?;
    let path = data_file.unwrap_or(config.storage.data_file);
    let repository = Arc::new(JsonFileRepository::new(path));
    Ok(Arc::new(ExchangeServices::new(repository)))
}

fn run_matches(args: MatchesArgs) -> Result<(), AppError> {
    let services = open_services(args.data_file)?;

    match (args.resume, args.vacancy) {
        (Some(resume_id), None) => {
            let resume = services.resumes.get(&RecordId(resume_id))?;
            println!(
                "Vacancies for resume {} (qualifications: {})",
                resume.selection_label(),
                if resume.qualifications.is_empty() {
                    "n/a"
                } else {
                    &resume.qualifications
                }
            );
            let matches = services.vacancies.matches_for_resume(&resume, args.min_score)?;
            if matches.is_empty() {
                println!("No vacancies reach the threshold.");
            }
            for ranked in matches {
                println!(
                    "  {:>3.0}%  {}  [{}]",
                    ranked.score * 100.0,
                    ranked.record.selection_label(),
                    ranked.record.qualifications
                );
            }
            Ok(())
        }
        (None, Some(vacancy_id)) => {
            let vacancy = services.vacancies.get(&RecordId(vacancy_id))?;
            println!(
                "Resumes for vacancy {} (required: {})",
                vacancy.selection_label(),
                if vacancy.qualifications.is_empty() {
                    "n/a"
                } else {
                    &vacancy.qualifications
                }
            );
            let matches = services.resumes.matches_for_vacancy(&vacancy, args.min_score)?;
            if matches.is_empty() {
                println!("No resumes reach the threshold.");
            }
            for ranked in matches {
                println!(
                    "  {:>3.0}%  {}  [{}]",
                    ranked.score * 100.0,
                    ranked.record.selection_label(),
                    ranked.record.qualifications
                );
            }
            Ok(())
        }
        _ => Err(AppError::Exchange(ServiceError::Validation(
            "pass exactly one of --resume or --vacancy".to_string(),
        ))),
    }
}

fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let services = open_services(args.data_file)?;
    let rows = UnemployedCsvIntake::from_path(&args.csv)?;
    let registered = services.unemployed.register_bulk(&rows)?;

    println!(
        "Registered {} person(s) from {}",
        registered.len(),
        args.csv.display()
    );
    for person in registered {
        println!("- {}", person.selection_label());
    }
    Ok(())
}
