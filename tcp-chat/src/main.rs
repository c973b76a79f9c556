use dotenvy::dotenv;
use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;
use tcp_chat::{config::Config, server::ChatServer};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let server = match ChatServer::bind(config).await {
        Ok(server) => server,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("Could not listen for shutdown signal: {error}");
            return;
        }

        info!("Received shutdown signal");
        shutdown.cancel();
    });

    server.run(cancel).await;
    ExitCode::SUCCESS
}
