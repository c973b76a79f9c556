use crate::{
    chat_service::ChatService,
    handlers::{
        handle_command::handle_command, handle_new_session::handle_new_session,
        handle_text_message::handle_text_message,
    },
    message::Message,
};
use log::{error, info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Single owner of all chat state. Events are applied one at a time in the
/// order they arrive on the queue.
pub struct Broker {
    chat_service: ChatService,
    rx: mpsc::Receiver<Message>,
}

impl Broker {
    pub fn new(rx: mpsc::Receiver<Message>) -> Self {
        Broker {
            chat_service: ChatService::new(),
            rx,
        }
    }

    pub async fn run(mut self, cancel: CancellationToken) {
        info!("Broker started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,

                message = self.rx.recv() => {
                    let Some(message) = message else {
                        break;
                    };

                    self.dispatch(message);
                }
            }
        }

        info!("Broker stopped with {:?}", self.chat_service.stats());
    }

    fn dispatch(&mut self, message: Message) {
        match message {
            Message::NewSession(session) => handle_new_session(&mut self.chat_service, session),

            Message::TextMessage(text_message) => {
                handle_text_message(&mut self.chat_service, text_message)
            }

            Message::Command(command) => handle_command(&mut self.chat_service, command),

            Message::GetStats(reply_tx) => {
                if reply_tx.send(self.chat_service.stats()).is_err() {
                    error!("Could not reply with stats, requester is gone");
                }
            }
        }
    }
}
