use crate::models::{
    command::Command,
    session::{Session, SessionId},
    stats::Stats,
    text_message::TextMessage,
};
use tokio::sync::oneshot;

/// Everything the broker reacts to. All events share one queue so lines
/// from the same session are applied in the order they were read.
#[derive(Debug)]
pub enum Message {
    NewSession(Session),
    TextMessage(TextMessage),
    Command(Command),
    GetStats(oneshot::Sender<Stats>),
}

/// A raw line read from a connection; `None` once the client went away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundLine {
    pub session_id: SessionId,
    pub line: Option<String>,
}
