use clap::Parser;

use import_fixture_server::config::{load_config, Cli};
use import_fixture_server::http::HttpServer;
use import_fixture_server::lifecycle::{signals, Shutdown};
use import_fixture_server::{net, observability};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) if e.is_missing_port() => {
            println!("must supply --port");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    observability::logging::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.listener.port,
        mode = %config.content.mode,
        grace_period_secs = config.shutdown.grace_period_secs,
        "import-fixture-server starting"
    );

    let listener = match net::bind_listener(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind listener");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
