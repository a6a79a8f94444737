//! Live channel subscriber
//!
//! A named server-push channel is purely a cache-invalidation signal:
//! messages carry no structured payload, consumers react by re-fetching
//! page 0 of whatever list they show. One subscription holds at most one
//! open connection for its (token, channel) pair; the token is captured
//! at subscribe time, so a token change means dropping the subscription
//! and opening a new one.
//!
//! Unlike the thin hook it replaces, the subscriber reconnects after a
//! transport blip: bounded exponential backoff between attempts, and a
//! `Refresh` event on every successful (re)connect so consumers recover
//! anything missed while the connection was down.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// Connection (re)established. Consumers re-fetch page 0 here, which
    /// also covers any message missed while disconnected.
    Refresh,
    /// Raw channel message. Observed traffic is a bare trigger signal;
    /// consumers should re-fetch rather than parse.
    Message(String),
}

pub struct ChannelSubscriber {
    config: ClientConfig,
    session: SessionStore,
}

impl ChannelSubscriber {
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self { config, session }
    }

    /// Open a subscription for `channel` using the stored token. Fails
    /// with `Unauthenticated` when no usable token is present.
    pub async fn subscribe(&self, channel: &str) -> ApiResult<ChannelSubscription> {
        let token = self.session.token().await.ok_or(ApiError::Unauthenticated)?;
        let url = self
            .config
            .ws_url(&token, channel)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let (state_tx, state_rx) = watch::channel(ChannelState::Disconnected);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let channel_name = channel.to_string();
        let task = tokio::spawn(run_connection(
            url.to_string(),
            channel_name,
            state_tx,
            event_tx,
            shutdown_rx,
        ));

        Ok(ChannelSubscription {
            state: state_rx,
            events: event_rx,
            shutdown: shutdown_tx,
            task,
        })
    }
}

pub struct ChannelSubscription {
    state: watch::Receiver<ChannelState>,
    events: mpsc::UnboundedReceiver<ChannelEvent>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ChannelSubscription {
    pub fn state(&self) -> ChannelState {
        *self.state.borrow()
    }

    /// Next event, or `None` once the subscription has shut down.
    pub async fn next_event(&mut self) -> Option<ChannelEvent> {
        self.events.recv().await
    }
}

impl Drop for ChannelSubscription {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        self.task.abort();
    }
}

async fn run_connection(
    url: String,
    channel: String,
    state: watch::Sender<ChannelState>,
    events: mpsc::UnboundedSender<ChannelEvent>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut backoff = INITIAL_BACKOFF;

    loop {
        let _ = state.send(ChannelState::Connecting);

        match connect_async(url.as_str()).await {
            Ok((stream, _response)) => {
                tracing::info!(%channel, "channel connected");
                let _ = state.send(ChannelState::Connected);
                backoff = INITIAL_BACKOFF;

                if events.send(ChannelEvent::Refresh).is_err() {
                    // Consumer is gone; nothing left to invalidate.
                    let _ = state.send(ChannelState::Disconnected);
                    return;
                }

                let (mut write, mut read) = stream.split();
                loop {
                    tokio::select! {
                        _ = shutdown.changed() => {
                            let _ = write.send(Message::Close(None)).await;
                            let _ = state.send(ChannelState::Disconnected);
                            return;
                        }
                        message = read.next() => match message {
                            Some(Ok(Message::Text(text))) => {
                                if events.send(ChannelEvent::Message(text.to_string())).is_err() {
                                    let _ = state.send(ChannelState::Disconnected);
                                    return;
                                }
                            }
                            Some(Ok(Message::Close(_))) | None => {
                                tracing::debug!(%channel, "channel closed by server");
                                break;
                            }
                            Some(Ok(_)) => {} // ping/pong/binary: not part of the protocol
                            Some(Err(e)) => {
                                tracing::warn!(%channel, error = %e, "channel transport error");
                                break;
                            }
                        }
                    }
                }
                let _ = state.send(ChannelState::Disconnected);
            }
            Err(e) => {
                tracing::warn!(%channel, error = %e, "channel connect failed");
                let _ = state.send(ChannelState::Disconnected);
            }
        }

        // Bounded exponential backoff before the next attempt.
        tokio::select! {
            _ = shutdown.changed() => return,
            _ = tokio::time::sleep(backoff) => {}
        }
        backoff = next_backoff(backoff);
    }
}

fn next_backoff(current: Duration) -> Duration {
    (current * 2).min(MAX_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tokio::net::TcpListener;
    use tokio_tungstenite::accept_async;

    #[test]
    fn backoff_doubles_up_to_the_cap() {
        let mut backoff = INITIAL_BACKOFF;
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(backoff.as_secs());
            backoff = next_backoff(backoff);
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16, 30, 30]);
    }

    async fn test_subscriber(port: u16) -> ChannelSubscriber {
        let config = ClientConfig::new(&format!("http://127.0.0.1:{}", port)).unwrap();
        let session = SessionStore::new(
            std::env::temp_dir().join(format!("bookrider-test-{}.json", Utc::now().timestamp_nanos_opt().unwrap())),
        );
        session.set_token("test-token".to_string()).await.unwrap();
        ChannelSubscriber::new(config, session)
    }

    #[tokio::test]
    async fn delivers_refresh_then_messages() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = accept_async(stream).await.unwrap();
            ws.send(Message::Text("orders-changed".into())).await.unwrap();
            // Keep the connection open until the client goes away.
            while ws.next().await.is_some() {}
        });

        let subscriber = test_subscriber(port).await;
        let mut subscription = subscriber.subscribe("orders").await.unwrap();

        let first = tokio::time::timeout(Duration::from_secs(5), subscription.next_event())
            .await
            .unwrap();
        assert_eq!(first, Some(ChannelEvent::Refresh));

        let second = tokio::time::timeout(Duration::from_secs(5), subscription.next_event())
            .await
            .unwrap();
        assert_eq!(second, Some(ChannelEvent::Message("orders-changed".into())));

        drop(subscription);
        server.abort();
    }

    #[tokio::test]
    async fn reconnects_after_server_drop() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            // First connection: accept and immediately drop.
            let (stream, _) = listener.accept().await.unwrap();
            let ws = accept_async(stream).await.unwrap();
            drop(ws);

            // Second connection after the client's backoff.
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = accept_async(stream).await.unwrap();
            while ws.next().await.is_some() {}
        });

        let subscriber = test_subscriber(port).await;
        let mut subscription = subscriber.subscribe("orders").await.unwrap();

        let first = tokio::time::timeout(Duration::from_secs(5), subscription.next_event())
            .await
            .unwrap();
        assert_eq!(first, Some(ChannelEvent::Refresh));

        // A second Refresh proves the reconnect happened.
        let second = tokio::time::timeout(Duration::from_secs(10), subscription.next_event())
            .await
            .unwrap();
        assert_eq!(second, Some(ChannelEvent::Refresh));

        drop(subscription);
        server.abort();
    }

    #[tokio::test]
    async fn subscribe_without_token_is_unauthenticated() {
        let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
        let session = SessionStore::new(std::env::temp_dir().join("bookrider-test-no-token.json"));
        let subscriber = ChannelSubscriber::new(config, session);

        let err = subscriber.subscribe("orders").await.err().unwrap();
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}
