use crate::{
    broker::Broker,
    config::Config,
    connection::{ConnectionSettings, handle_connection},
    errors::server_error::ServerError,
    http, translator,
};
use log::{error, info};
use std::net::SocketAddr;
use tokio::{net::TcpListener, sync::mpsc};
use tokio_util::{sync::CancellationToken, task::TaskTracker};

const INBOUND_CAPACITY: usize = 5;
const BROKER_CAPACITY: usize = 64;

pub struct ChatServer {
    listener: TcpListener,
    stats_listener: Option<TcpListener>,
    config: Config,
}

impl ChatServer {
    /// Binds the chat port and, when configured, the stats port.
    pub async fn bind(config: Config) -> Result<Self, ServerError> {
        let listener = bind(config.address()).await?;

        let stats_listener = match config.stats_address() {
            Some(address) => Some(bind(address).await?),
            None => None,
        };

        Ok(ChatServer {
            listener,
            stats_listener,
            config,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::LocalAddr)
    }

    pub fn stats_addr(&self) -> Option<Result<SocketAddr, ServerError>> {
        self.stats_listener
            .as_ref()
            .map(|listener| listener.local_addr().map_err(ServerError::LocalAddr))
    }

    /// Accepts clients until the token is cancelled, then waits for every
    /// task it started to finish.
    pub async fn run(self, cancel: CancellationToken) {
        let ChatServer {
            listener,
            stats_listener,
            config,
        } = self;

        let tracker = TaskTracker::new();
        let (broker_tx, broker_rx) = mpsc::channel(BROKER_CAPACITY);
        let (inbound_tx, inbound_rx) = mpsc::channel(INBOUND_CAPACITY);

        tracker.spawn(Broker::new(broker_rx).run(cancel.clone()));
        tracker.spawn(translator::run(inbound_rx, broker_tx.clone(), cancel.clone()));

        if let Some(stats_listener) = stats_listener {
            tracker.spawn(http::listen(stats_listener, broker_tx.clone(), cancel.clone()));
        }

        match listener.local_addr() {
            Ok(address) => info!("Chat server listening on {address}"),
            Err(error) => error!("Could not get address of chat listener: {error}"),
        }

        loop {
            let client = tokio::select! {
                _ = cancel.cancelled() => break,
                client = listener.accept() => client,
            };

            let (socket, peer) = match client {
                Ok(c) => c,
                Err(error) => {
                    error!("Could not get socket from accepted connection: {error}");
                    continue;
                }
            };

            tracker.spawn(handle_connection(
                socket,
                peer,
                inbound_tx.clone(),
                broker_tx.clone(),
                cancel.clone(),
                ConnectionSettings {
                    outbound_capacity: config.outbound_capacity,
                    max_line_length: config.max_line_length,
                },
            ));
        }

        info!("Shutting down, waiting for {} tasks", tracker.len());
        drop(listener);
        tracker.close();
        tracker.wait().await;
        info!("Chat server stopped");
    }
}

async fn bind(address: String) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(&address).await;
    listener.map_err(|source| ServerError::Bind { address, source })
}
