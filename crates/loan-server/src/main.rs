use anyhow::Context;
use clap::Parser;
use loan_config::{LoanConfig, collect_unconfigured_warnings};
use loan_server::{AppState, build_router};

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("loantrack error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // `.env` is read before the subscriber so LOANTRACK_LOG can come from it.
    let mut config = LoanConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load loantrack configuration")?;
    init_tracing(cli.quiet, cli.verbose)?;

    for warning in collect_unconfigured_warnings(&config, std::env::vars()) {
        tracing::warn!("{warning}");
    }

    match cli.command {
        cli::Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config.redacted())?);
            Ok(())
        }
        cli::Commands::Serve(args) => {
            if let Some(bind) = args.bind {
                config.server.bind = bind;
                config.validate()?;
            }
            serve(&config).await
        }
    }
}

async fn serve(config: &LoanConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(config)
        .await
        .context("failed to initialize application state")?;
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "loantrack listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;
    tracing::info!("loantrack stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LOANTRACK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
