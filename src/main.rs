use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = match args.to_settings() {
        Ok(settings) => settings,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Starting crawl of {}", settings.category_url);
    println!("Note: crawling requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL or --webdriver-url if not using the default http://localhost:4444"
    );

    let start_time = std::time::Instant::now();
    match listing_harvest::run(&settings).await {
        Ok(report) => {
            ::log::info!(
                "Crawl complete - {} of {} businesses exported in {:.2} seconds",
                report.records.len(),
                report.links_found,
                start_time.elapsed().as_secs_f64()
            );
            for skipped in &report.skipped {
                ::log::info!("Skipped {}: {}", skipped.url, skipped.reason);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
