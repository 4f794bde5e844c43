use airmouse_core::MouseBackend;
use airmouse_input::{EnigoBackend, MockBackend, MouseDispatcher};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "airmouse")]
#[command(about = "HTTP mouse control server — moves and clicks the OS cursor from normalized coordinates")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "AIRMOUSE_BIND")]
    bind: String,

    /// Use the in-memory mock backend instead of injecting real OS input
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let backend: Box<dyn MouseBackend> = if cli.mock {
        tracing::warn!("Mock backend selected; no real input will be injected");
        Box::new(MockBackend::new())
    } else {
        Box::new(EnigoBackend::new()?)
    };

    // The resolution probe is the only startup dependency; failure here
    // ends the process.
    let dispatcher = MouseDispatcher::new(backend)?;
    let screen = dispatcher.screen();

    println!(
        "Mouse control server starting on screen {}x{}...",
        screen.width, screen.height
    );
    println!("Safety: there is no corner abort; stop the process to halt automation.");

    airmouse_api::start_server(dispatcher, &cli.bind).await?;

    Ok(())
}
