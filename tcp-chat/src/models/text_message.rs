use super::session::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub session_id: SessionId,
    pub text: String,
}

impl TextMessage {
    pub fn new(session_id: SessionId, text: impl Into<String>) -> Self {
        TextMessage {
            session_id,
            text: text.into(),
        }
    }
}
