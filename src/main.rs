use assignment_sync::app::{self, AppConfig, RunOutcome};
use assignment_sync::config::DEFAULT_COURSE_FILE;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Copy Canvas assignments into a Notion task database
#[derive(Parser)]
#[command(name = "assignment-sync", version)]
#[command(about = "Copy Canvas assignments into a Notion task database", long_about = None)]
struct Cli {
    /// Course mapping file (JSON array of canvas_id / notion_relation_id pairs)
    #[arg(short = 'c', long, default_value = DEFAULT_COURSE_FILE)]
    config: PathBuf,

    /// Show what would be created without writing to Notion
    #[arg(long)]
    dry_run: bool,

    /// Read every page of existing Notion tasks, not just the first
    #[arg(long)]
    all_pages: bool,

    /// Exit non-zero when the mapping file is missing or a title lookup fails
    #[arg(long)]
    strict: bool,

    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        AppConfig::new(self.verbose)
            .with_course_file(self.config.clone())
            .with_dry_run(self.dry_run)
            .with_all_pages(self.all_pages)
            .with_strict(self.strict)
    }
}

#[tokio::main]
async fn main() {
    // Variables already set in the environment win over `.env`.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.app_config();
    app::initialize_app(&config);

    match app::run(&config).await {
        Ok(RunOutcome::Completed(report)) => {
            debug!("Run finished: {}", report.summary());
        }
        Ok(RunOutcome::MissingCourseFile) => {
            debug!("No course mapping file, nothing to do");
        }
        Err(e) => app::handle_fatal_error(e, config.verbose),
    }
}
