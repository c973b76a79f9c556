use crate::{message::Message, models::stats::Stats};
use axum::{Json, extract::State, http::StatusCode};
use log::error;
use tokio::sync::{mpsc, oneshot};

pub(crate) async fn stats(
    State(broker_tx): State<mpsc::Sender<Message>>,
) -> Result<Json<Stats>, (StatusCode, Json<String>)> {
    let (reply_tx, reply_rx) = oneshot::channel();

    if broker_tx.send(Message::GetStats(reply_tx)).await.is_err() {
        error!("Could not send GetStats Message, broker is gone");
        return Err(unavailable());
    }

    reply_rx.await.map(Json).map_err(|_| {
        error!("Broker dropped GetStats reply");
        unavailable()
    })
}

fn unavailable() -> (StatusCode, Json<String>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(String::from("Server is shutting down")),
    )
}
