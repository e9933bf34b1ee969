use tracing::info;
use tracing_subscriber::EnvFilter;

use tube_board::config::{BoardConfig, SourceConfig};
use tube_board::display::TerminalDisplay;
use tube_board::scheduler::{Scheduler, SchedulerConfig, TokioClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig::from_env()?;
    match &config.source {
        SourceConfig::Live {
            line, station_id, ..
        } => info!(%line, %station_id, "Using TfL API"),
        SourceConfig::Mock { data_dir } => {
            info!(data_dir = %data_dir.display(), "Using mock data")
        }
    }

    let source = config.source.build()?;
    let display = TerminalDisplay::stdout(&config.title);

    let mut scheduler = Scheduler::new(source, display, TokioClock, SchedulerConfig::default());
    scheduler.run().await;

    Ok(())
}
