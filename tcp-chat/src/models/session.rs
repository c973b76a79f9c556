use tokio::sync::mpsc::{self, error::TrySendError};
use tokio_util::sync::CancellationToken;

pub type SessionId = String;

/// Handle the broker keeps for one connected client: a capability to push
/// lines into the connection's outbound queue and a signal that tells the
/// connection to shut down.
#[derive(Debug)]
pub struct Session {
    pub id: SessionId,
    outbound_tx: mpsc::Sender<String>,
    close: CancellationToken,
}

impl Session {
    pub fn new(outbound_tx: mpsc::Sender<String>, close: CancellationToken) -> Self {
        Session::with_id(
            guid_create::GUID::rand().to_string().to_lowercase(),
            outbound_tx,
            close,
        )
    }

    pub fn with_id(
        id: SessionId,
        outbound_tx: mpsc::Sender<String>,
        close: CancellationToken,
    ) -> Self {
        Session {
            id,
            outbound_tx,
            close,
        }
    }

    /// Queues a line without waiting. Fails when the queue is full or the
    /// connection has stopped reading from it.
    pub fn send(&self, line: String) -> Result<(), TrySendError<String>> {
        self.outbound_tx.try_send(line)
    }

    pub fn close(&self) {
        self.close.cancel();
    }
}
