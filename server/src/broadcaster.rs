use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

use common::{ClientId, log};
use crate::protocol::ServerMessage;

pub type ClientSender = mpsc::Sender<ServerMessage>;

#[derive(Clone, Default)]
pub struct Broadcaster {
    clients: Arc<Mutex<HashMap<ClientId, ClientSender>>>,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster").finish()
    }
}

impl Broadcaster {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn register(&self, client_id: ClientId, sender: ClientSender) {
        self.clients.lock().await.insert(client_id, sender);
    }

    pub async fn unregister(&self, client_id: &ClientId) {
        self.clients.lock().await.remove(client_id);
    }

    pub async fn send_to_client(&self, client_id: &ClientId, message: ServerMessage) {
        let clients = self.clients.lock().await;
        if let Some(sender) = clients.get(client_id)
            && let Err(e) = sender.send(message).await
        {
            log!("Failed to send to client {}: {}", client_id, e);
        }
    }

    pub async fn broadcast_to_clients(&self, client_ids: &[ClientId], message: ServerMessage) {
        let clients = self.clients.lock().await;
        for client_id in client_ids {
            if let Some(sender) = clients.get(client_id)
                && let Err(e) = sender.send(message.clone()).await
            {
                log!("Failed to send to client {}: {}", client_id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ErrorCode;

    fn error_message() -> ServerMessage {
        ServerMessage::Error {
            code: ErrorCode::Malformed,
            message: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_registered_client_receives_messages() {
        let broadcaster = Broadcaster::new();
        let client_id = ClientId::new("a".to_string());
        let (tx, mut rx) = mpsc::channel(4);

        broadcaster.register(client_id.clone(), tx).await;
        broadcaster.send_to_client(&client_id, error_message()).await;

        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_unregistered_client_is_skipped() {
        let broadcaster = Broadcaster::new();
        let client_id = ClientId::new("a".to_string());
        let (tx, mut rx) = mpsc::channel(4);

        broadcaster.register(client_id.clone(), tx).await;
        broadcaster.unregister(&client_id).await;
        broadcaster.send_to_client(&client_id, error_message()).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_listed_client() {
        let broadcaster = Broadcaster::new();
        let first = ClientId::new("a".to_string());
        let second = ClientId::new("b".to_string());
        let (tx_a, mut rx_a) = mpsc::channel(4);
        let (tx_b, mut rx_b) = mpsc::channel(4);

        broadcaster.register(first.clone(), tx_a).await;
        broadcaster.register(second.clone(), tx_b).await;
        broadcaster
            .broadcast_to_clients(&[first, second], error_message())
            .await;

        assert!(rx_a.recv().await.is_some());
        assert!(rx_b.recv().await.is_some());
    }
}
