use clap::Parser;
use party_planner::core::config;
use party_planner::planner::Planner;
use party_planner::repository::{EventId, HttpEventRepository};
use party_planner::tui;
use party_planner::view::html::HtmlPage;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "party-planner", about = "Browse upcoming parties from the events API")]
struct Args {
    /// Events collection URL (overrides config file and PARTY_PLANNER_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Load once, print the page as HTML and exit
    #[arg(long)]
    snapshot: bool,

    /// With --snapshot: also load and show this event
    #[arg(long, requires = "snapshot")]
    select: Option<EventId>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to party-planner.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("party-planner.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("warning: {e}; using defaults");
        config::PlannerConfig::default()
    });
    let resolved = config::resolve(&file_config, args.api_url.as_deref());

    log::info!("Party Planner starting up with endpoint: {}", resolved.endpoint);

    let repository = Arc::new(HttpEventRepository::new(resolved.endpoint));

    if args.snapshot {
        let mut planner = Planner::new(repository, HtmlPage::new());
        planner.init().await;
        if let Some(id) = args.select {
            planner.select(id).await;
        }
        print!("{}", planner.mount().to_html());
        return Ok(());
    }

    tui::run(repository)
}
