use crate::{
    message::{InboundLine, Message},
    models::{
        command::{Command, Verb},
        text_message::TextMessage,
    },
};
use log::{error, trace};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Classifies a line read from a client. Lines starting with `/` are
/// commands, blank lines are dropped and everything else is broadcast.
pub fn translate(inbound: InboundLine) -> Option<Message> {
    let InboundLine { session_id, line } = inbound;

    let Some(line) = line else {
        return Some(Message::Command(Command::quit(session_id)));
    };

    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(command) = line.strip_prefix('/') {
        let mut words = command.split_whitespace();
        let verb = Verb::parse(words.next().unwrap_or_default());
        let arguments = words.map(str::to_string).collect();

        return Some(Message::Command(Command::new(session_id, verb, arguments)));
    }

    Some(Message::TextMessage(TextMessage::new(session_id, line)))
}

/// Forwards every line from the connections to the broker until cancelled.
pub async fn run(
    mut inbound_rx: mpsc::Receiver<InboundLine>,
    broker_tx: mpsc::Sender<Message>,
    cancel: CancellationToken,
) {
    loop {
        let inbound = tokio::select! {
            _ = cancel.cancelled() => break,
            inbound = inbound_rx.recv() => inbound,
        };

        let Some(inbound) = inbound else {
            break;
        };

        let Some(message) = translate(inbound) else {
            continue;
        };

        tokio::select! {
            _ = cancel.cancelled() => break,
            sent = broker_tx.send(message) => {
                if sent.is_err() {
                    error!("Could not forward message, broker is gone");
                    break;
                }
            }
        }
    }

    trace!("Translator stopped");
}
