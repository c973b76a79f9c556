use crate::message::Message;
use axum::{Router, routing::get};
use log::{error, info};
use tokio::{net::TcpListener, sync::mpsc};
use tokio_util::sync::CancellationToken;

mod stats;

/// Serves the read-only stats endpoint until cancelled.
pub async fn listen(
    listener: TcpListener,
    broker_tx: mpsc::Sender<Message>,
    cancel: CancellationToken,
) {
    let app = Router::new()
        .route("/stats", get(stats::stats))
        .with_state(broker_tx);

    match listener.local_addr() {
        Ok(address) => info!("Stats endpoint listening on {address}"),
        Err(error) => error!("Could not get address of stats listener: {error}"),
    }

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
    {
        error!("Stats endpoint failed: {error}");
    }

    info!("Stats endpoint stopped");
}
