use serde::{Deserialize, Serialize};

use common::game::{Board, GameStatus, Mark, WinningLine};
use crate::room_manager::{RoomError, RoomView};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    CreateRoom { room_id: String },
    JoinRoom { room_id: String },
    PlaceMark { room_id: String, index: usize, mark: Mark },
    LeaveRoom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoomCreated { room_id: String, mark: Mark },
    RoomJoined { room_id: String, mark: Mark },
    RoomState { snapshot: RoomSnapshot },
    OpponentLeft { message: String },
    Error { code: ErrorCode, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: String,
    pub board: Board,
    pub turn: Mark,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

impl From<&RoomView> for RoomSnapshot {
    fn from(view: &RoomView) -> Self {
        Self {
            room_id: view.room_id.to_string(),
            board: view.board,
            turn: view.turn,
            status: view.status,
            winning_line: view.winning_line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    RoomNotFound,
    RoomFull,
    RoomAlreadyExists,
    AlreadyInRoom,
    NotInRoom,
    InvalidMove,
    Malformed,
}

impl From<&RoomError> for ErrorCode {
    fn from(error: &RoomError) -> Self {
        match error {
            RoomError::NotFound => ErrorCode::RoomNotFound,
            RoomError::Full => ErrorCode::RoomFull,
            RoomError::AlreadyExists => ErrorCode::RoomAlreadyExists,
            RoomError::AlreadyInRoom => ErrorCode::AlreadyInRoom,
            RoomError::NotInRoom => ErrorCode::NotInRoom,
            RoomError::Move(_) => ErrorCode::InvalidMove,
        }
    }
}

pub fn make_error_message(error: &RoomError) -> ServerMessage {
    ServerMessage::Error {
        code: ErrorCode::from(error),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_wire_shape() {
        let message = ClientMessage::PlaceMark {
            room_id: "tigers".to_string(),
            index: 4,
            mark: Mark::X,
        };

        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(
            json,
            r#"{"type":"place_mark","room_id":"tigers","index":4,"mark":"X"}"#
        );
    }

    #[test]
    fn test_unknown_client_message_fails_to_parse() {
        let result: Result<ClientMessage, _> =
            serde_json::from_str(r#"{"type":"spectate","room_id":"tigers"}"#);

        assert!(result.is_err());
    }
}
