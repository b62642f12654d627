use std::sync::Arc;

use clap::Args;

use crate::infra::InMemoryExchangeRepository;
use labor_exchange::error::AppError;
use labor_exchange::exchange::{ExchangeServices, RankedMatch, Resume, Vacancy};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Minimum overlap ratio for the matching portion of the demo
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Skip the matching portion of the demo
    #[arg(long)]
    pub(crate) skip_matching: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryExchangeRepository::default());
    let services = ExchangeServices::new(repository);

    println!("Labor exchange demo (volatile in-memory store)");

    let acme = services.companies.add("Acme Staffing")?;
    let globex = services.companies.add("Globex Recruiting")?;

    let ivan = services
        .unemployed
        .add("Ivan", "Shevchenko", "Python, SQL, Git")?;
    services.unemployed.add("Maria", "Bondar", "Java, SQL")?;
    let petro = services
        .unemployed
        .add("Petro", "Melnyk", "JavaScript, React")?;

    for (title, qualifications, company) in [
        ("Python Dev", "Python, SQL, Git", &acme),
        ("Data Analyst", "SQL, Python, Pandas", &acme),
        ("Frontend Dev", "JavaScript, React", &globex),
        ("Python Junior", "Python", &globex),
    ] {
        services
            .vacancies
            .add(title, "", qualifications, company.id.clone())?;
    }

    let backend_resume = services
        .resumes
        .add("Backend engineer", "Five years of services work", ivan.id.clone())?;
    let frontend_resume = services
        .resumes
        .add("Frontend engineer", "SPA heavy background", petro.id.clone())?;

    println!("\nRegistered persons");
    for person in services.unemployed.get_all(None)? {
        println!(
            "- {} | qualifications: {}",
            person.selection_label(),
            if person.qualifications.is_empty() {
                "n/a"
            } else {
                &person.qualifications
            }
        );
    }

    let hits = services.unemployed.find_by_qualification("sql")?;
    println!("\nQualification search 'sql': {} hit(s)", hits.len());
    for person in hits {
        println!("- {}", person.selection_label());
    }

    let statistics = services.unemployed.statistics()?;
    println!(
        "\nStatistics: {} registered | top qualification: {}",
        statistics.total,
        statistics.top_qualification.as_deref().unwrap_or("n/a")
    );

    if args.skip_matching {
        return Ok(());
    }

    println!("\nVacancy matching");
    for resume in [&backend_resume, &frontend_resume] {
        println!(
            "Resume '{}' (qualifications: {})",
            resume.title, resume.qualifications
        );
        let matches = services.vacancies.matches_for_resume(resume, args.min_score)?;
        if matches.is_empty() {
            println!("  no vacancies reach the threshold");
        }
        for ranked in &matches {
            print_vacancy_match(&services, ranked);
        }
    }

    let anchor = services
        .vacancies
        .find_by_keyword("Python Junior")?
        .into_iter()
        .next();
    if let Some(anchor) = anchor {
        println!(
            "\nResumes covering vacancy '{}' (required: {})",
            anchor.title, anchor.qualifications
        );
        let matches = services.resumes.matches_for_vacancy(&anchor, args.min_score)?;
        if matches.is_empty() {
            println!("  no resumes reach the threshold");
        }
        for ranked in &matches {
            print_resume_match(ranked);
        }
    }

    Ok(())
}

fn print_vacancy_match(
    services: &ExchangeServices<InMemoryExchangeRepository>,
    ranked: &RankedMatch<Vacancy>,
) {
    // A dangling company id degrades to a placeholder instead of failing the
    // whole listing.
    let company_name = services
        .companies
        .get(&ranked.record.company_id)
        .map(|company| company.name)
        .unwrap_or_else(|_| "company not found".to_string());

    println!(
        "  {:>3.0}%  {} | {} | requires: {}",
        ranked.score * 100.0,
        ranked.record.title,
        company_name,
        ranked.record.qualifications
    );
}

fn print_resume_match(ranked: &RankedMatch<Resume>) {
    println!(
        "  {:>3.0}%  {} | offers: {}",
        ranked.score * 100.0,
        ranked.record.title,
        ranked.record.qualifications
    );
}
