use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use common::game::Mark;
use common::id_generator::generate_client_id;
use common::{ClientId, RoomId, log};

use crate::protocol::{ClientMessage, ErrorCode, RoomSnapshot, ServerMessage, make_error_message};
use crate::room_manager::ClosedRoom;
use crate::web_server::WebServerState;

pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let (tx, mut rx) = mpsc::channel::<ServerMessage>(64);

    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            match serde_json::to_string(&message) {
                Ok(text) => {
                    if ws_sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => log!("Failed to encode server message: {}", e),
            }
        }
    });

    let client_id = ClientId::new(generate_client_id());
    state.broadcaster.register(client_id.clone(), tx.clone()).await;
    log!("WebSocket client connected: {}", client_id);

    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                let message: ClientMessage = match serde_json::from_str(text.as_str()) {
                    Ok(m) => m,
                    Err(e) => {
                        log!("[{}] Malformed client message: {}", client_id, e);
                        let error = ServerMessage::Error {
                            code: ErrorCode::Malformed,
                            message: format!("Malformed message: {}", e),
                        };
                        state.broadcaster.send_to_client(&client_id, error).await;
                        continue;
                    }
                };
                handle_client_message(&state, &client_id, message).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                log!("WebSocket error for {}: {}", client_id, e);
                break;
            }
        }
    }

    log!("WebSocket connection ended for client: {}", client_id);
    handle_client_disconnected(&state, &client_id).await;

    send_task.abort();
}

async fn handle_client_message(
    state: &WebServerState,
    client_id: &ClientId,
    message: ClientMessage,
) {
    match message {
        ClientMessage::CreateRoom { room_id } => {
            handle_create_room(state, client_id, RoomId::new(room_id)).await;
        }
        ClientMessage::JoinRoom { room_id } => {
            handle_join_room(state, client_id, RoomId::new(room_id)).await;
        }
        ClientMessage::PlaceMark {
            room_id,
            index,
            mark,
        } => {
            handle_place_mark(state, client_id, RoomId::new(room_id), index, mark).await;
        }
        ClientMessage::LeaveRoom => {
            handle_leave_room(state, client_id).await;
        }
    }
}

async fn handle_create_room(state: &WebServerState, client_id: &ClientId, room_id: RoomId) {
    match state
        .room_manager
        .create_room(room_id.clone(), client_id.clone())
        .await
    {
        Ok(mark) => {
            log!("[room:{}] Created by {}", room_id, client_id);
            let response = ServerMessage::RoomCreated {
                room_id: room_id.to_string(),
                mark,
            };
            state.broadcaster.send_to_client(client_id, response).await;
        }
        Err(e) => {
            state
                .broadcaster
                .send_to_client(client_id, make_error_message(&e))
                .await;
        }
    }
}

async fn handle_join_room(state: &WebServerState, client_id: &ClientId, room_id: RoomId) {
    match state
        .room_manager
        .join_room(&room_id, client_id.clone())
        .await
    {
        Ok((mark, view)) => {
            log!("[room:{}] Joined by {}", room_id, client_id);
            let response = ServerMessage::RoomJoined {
                room_id: room_id.to_string(),
                mark,
            };
            state.broadcaster.send_to_client(client_id, response).await;

            let update = ServerMessage::RoomState {
                snapshot: RoomSnapshot::from(&view),
            };
            state
                .broadcaster
                .broadcast_to_clients(&view.participants, update)
                .await;
        }
        Err(e) => {
            state
                .broadcaster
                .send_to_client(client_id, make_error_message(&e))
                .await;
        }
    }
}

async fn handle_place_mark(
    state: &WebServerState,
    client_id: &ClientId,
    room_id: RoomId,
    index: usize,
    mark: Mark,
) {
    match state
        .room_manager
        .place_mark(client_id, &room_id, index, mark)
        .await
    {
        Ok(view) => {
            let update = ServerMessage::RoomState {
                snapshot: RoomSnapshot::from(&view),
            };
            state
                .broadcaster
                .broadcast_to_clients(&view.participants, update)
                .await;
        }
        Err(e) => {
            log!(
                "[room:{}] {} failed to place {} at {}: {}",
                room_id,
                client_id,
                mark,
                index,
                e
            );
            state
                .broadcaster
                .send_to_client(client_id, make_error_message(&e))
                .await;
        }
    }
}

async fn handle_leave_room(state: &WebServerState, client_id: &ClientId) {
    if let Some(closed) = state.room_manager.remove_client(client_id).await {
        log!("[room:{}] {} left, closing room", closed.room_id, client_id);
        notify_room_closed(state, &closed).await;
    }
}

async fn handle_client_disconnected(state: &WebServerState, client_id: &ClientId) {
    state.broadcaster.unregister(client_id).await;

    if let Some(closed) = state.room_manager.remove_client(client_id).await {
        log!(
            "[room:{}] {} disconnected, closing room",
            closed.room_id,
            client_id
        );
        notify_room_closed(state, &closed).await;
    }
}

async fn notify_room_closed(state: &WebServerState, closed: &ClosedRoom) {
    if let Some(remaining) = &closed.remaining {
        let notification = ServerMessage::OpponentLeft {
            message: "Opponent left the game".to_string(),
        };
        state
            .broadcaster
            .send_to_client(remaining, notification)
            .await;
    }
}
