use newsfetch::config::Config;
use newsfetch::errors::NewsResult;
use newsfetch::services::{ReportOutcome, ReportService};
use newsfetch::sources::GoogleNewsSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> NewsResult<()> {
    let config = Config::builtin();
    let output_file = config.output_file.clone();

    let url = GoogleNewsSource::search_url(&config.query)?;
    println!("[*] Fetching RSS: {}", url);

    let service = ReportService::new(GoogleNewsSource::new(), config);

    match service.generate(&url)? {
        ReportOutcome::EmptyFeed => {}
        ReportOutcome::Saved(saved) => {
            println!("[✓] Done. {} articles saved to {}", saved, output_file);
        }
    }

    Ok(())
}
