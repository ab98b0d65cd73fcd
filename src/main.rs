use config::Environment;
use sheet_sync::cli_adapter::CliAdapter;
use sheet_sync::prettyprint::prettyprint::PrettyFormatter;
use std::env;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

const LOG_LEVEL: &str = "LOG_LEVEL";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();

    setup_tracing()?;
    setup_panic_hook();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => debug!("No .env file found"),
        Err(err) => warn!("Could not load .env file: {}", err),
    }

    let args: Vec<String> = env::args().collect();
    let command = CliAdapter::parse_args(&args)?;

    info!("Starting sheet-sync ({:?})", command);

    let result = match CliAdapter::from_environment(Environment::default()) {
        Ok(cli_adapter) => cli_adapter.run(command).await,
        Err(report) => Err(report),
    };

    match result {
        Ok(()) => Ok(()),
        Err(report) => {
            error!("Error processing sheet data: {:?}", report);
            Err(format!("{}", report.current_context()).into())
        }
    }
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let level = match env::var(LOG_LEVEL) {
        Ok(level) => level.parse::<tracing::Level>()?,
        Err(_) => tracing::Level::INFO,
    };

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stdout);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("sheet_sync", level),
        )
        .with(stdout_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
