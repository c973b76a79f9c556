use crate::{
    codec::BoundedLineCodec,
    message::{InboundLine, Message},
    models::session::{Session, SessionId},
};
use futures::{SinkExt, StreamExt};
use log::{info, trace, warn};
use std::net::SocketAddr;
use tokio::{
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::mpsc,
};
use tokio_util::{
    codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError},
    sync::CancellationToken,
};

pub struct ConnectionSettings {
    pub outbound_capacity: usize,
    pub max_line_length: usize,
}

/// Drives one client socket until either side goes away. Reading and
/// writing run concurrently; the broker sees the session before any of its
/// lines.
pub async fn handle_connection(
    socket: TcpStream,
    peer: SocketAddr,
    inbound_tx: mpsc::Sender<InboundLine>,
    broker_tx: mpsc::Sender<Message>,
    cancel: CancellationToken,
    settings: ConnectionSettings,
) {
    let (outbound_tx, outbound_rx) = mpsc::channel(settings.outbound_capacity.max(1));
    let close = cancel.child_token();
    let session = Session::new(outbound_tx, close.clone());
    let session_id = session.id.clone();

    if broker_tx.send(Message::NewSession(session)).await.is_err() {
        warn!("Dropping client {peer}, broker is gone");
        return;
    }

    info!("Client {peer} connected as session {session_id}");

    let (read_half, write_half) = socket.into_split();
    let lines = FramedRead::new(
        read_half,
        BoundedLineCodec::new(settings.max_line_length, session_id.clone()),
    );
    let writer = FramedWrite::new(write_half, LinesCodec::new());

    tokio::join!(
        read_lines(lines, &session_id, &inbound_tx, &close),
        write_lines(writer, &session_id, outbound_rx, &close),
    );

    info!("Client {peer} with session {session_id} disconnected");
}

async fn read_lines(
    mut lines: FramedRead<OwnedReadHalf, BoundedLineCodec>,
    session_id: &SessionId,
    inbound_tx: &mpsc::Sender<InboundLine>,
    close: &CancellationToken,
) {
    loop {
        let next = tokio::select! {
            _ = close.cancelled() => return,
            next = lines.next() => next,
        };

        let line = match next {
            Some(Ok(line)) => Some(line),

            Some(Err(LinesCodecError::Io(error))) => {
                warn!("Could not read from session {session_id}: {error}");
                None
            }

            Some(Err(LinesCodecError::MaxLineLengthExceeded)) | None => None,
        };

        let end_of_stream = line.is_none();
        let inbound = InboundLine {
            session_id: session_id.clone(),
            line,
        };

        tokio::select! {
            _ = close.cancelled() => return,
            sent = inbound_tx.send(inbound) => {
                if sent.is_err() {
                    warn!("Could not forward line from session {session_id}, translator is gone");
                    return;
                }
            }
        }

        if end_of_stream {
            trace!("Session {session_id} reached end of stream");
            return;
        }
    }
}

async fn write_lines(
    mut writer: FramedWrite<OwnedWriteHalf, LinesCodec>,
    session_id: &SessionId,
    mut outbound_rx: mpsc::Receiver<String>,
    close: &CancellationToken,
) {
    loop {
        // Queued lines go out before a close is honoured.
        let line = tokio::select! {
            biased;
            line = outbound_rx.recv() => line,
            _ = close.cancelled() => None,
        };

        let Some(line) = line else {
            break;
        };

        if let Err(error) = writer.send(line).await {
            warn!("Could not write to session {session_id}: {error}");
            return;
        }
    }

    if let Err(error) = SinkExt::<String>::close(&mut writer).await {
        trace!("Could not shut down socket of session {session_id}: {error}");
    }
}
