use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

use common::game::{Board, GameState, GameStatus, Mark, MoveError, WinningLine};
use common::{ClientId, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomError {
    NotFound,
    Full,
    AlreadyExists,
    AlreadyInRoom,
    NotInRoom,
    Move(MoveError),
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomError::NotFound => write!(f, "Room does not exist"),
            RoomError::Full => write!(f, "Room is full"),
            RoomError::AlreadyExists => write!(f, "Room already exists"),
            RoomError::AlreadyInRoom => write!(f, "Already in a room"),
            RoomError::NotInRoom => write!(f, "Not a participant of this room"),
            RoomError::Move(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RoomError {}

#[derive(Debug)]
struct Room {
    id: RoomId,
    host: ClientId,
    guest: Option<ClientId>,
    game: GameState,
}

impl Room {
    fn new(id: RoomId, host: ClientId) -> Self {
        Self {
            id,
            host,
            guest: None,
            game: GameState::new(),
        }
    }

    fn mark_of(&self, client_id: &ClientId) -> Option<Mark> {
        if self.host == *client_id {
            return Some(Mark::X);
        }
        if self.guest.as_ref() == Some(client_id) {
            return Some(Mark::O);
        }
        None
    }

    fn opponent_of(&self, client_id: &ClientId) -> Option<ClientId> {
        if self.host == *client_id {
            return self.guest.clone();
        }
        if self.guest.as_ref() == Some(client_id) {
            return Some(self.host.clone());
        }
        None
    }

    fn participants(&self) -> Vec<ClientId> {
        let mut participants = vec![self.host.clone()];
        if let Some(guest) = &self.guest {
            participants.push(guest.clone());
        }
        participants
    }

    fn to_view(&self) -> RoomView {
        RoomView {
            room_id: self.id.clone(),
            board: *self.game.board(),
            turn: self.game.current_mark(),
            status: self.game.status(),
            winning_line: self.game.winning_line(),
            participants: self.participants(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomView {
    pub room_id: RoomId,
    pub board: Board,
    pub turn: Mark,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub participants: Vec<ClientId>,
}

pub struct ClosedRoom {
    pub room_id: RoomId,
    pub remaining: Option<ClientId>,
}

#[derive(Clone, Default)]
pub struct RoomManager {
    rooms: Arc<Mutex<HashMap<RoomId, Room>>>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn create_room(
        &self,
        room_id: RoomId,
        host: ClientId,
    ) -> Result<Mark, RoomError> {
        let mut rooms = self.rooms.lock().await;

        if rooms.values().any(|room| room.mark_of(&host).is_some()) {
            return Err(RoomError::AlreadyInRoom);
        }
        if rooms.contains_key(&room_id) {
            return Err(RoomError::AlreadyExists);
        }

        rooms.insert(room_id.clone(), Room::new(room_id, host));
        Ok(Mark::X)
    }

    pub async fn join_room(
        &self,
        room_id: &RoomId,
        guest: ClientId,
    ) -> Result<(Mark, RoomView), RoomError> {
        let mut rooms = self.rooms.lock().await;

        if rooms.values().any(|room| room.mark_of(&guest).is_some()) {
            return Err(RoomError::AlreadyInRoom);
        }

        let room = rooms.get_mut(room_id).ok_or(RoomError::NotFound)?;
        if room.guest.is_some() {
            return Err(RoomError::Full);
        }

        room.guest = Some(guest);
        Ok((Mark::O, room.to_view()))
    }

    // Moves are serialized through the manager lock: one move is fully
    // validated and applied before the next one is looked at.
    pub async fn place_mark(
        &self,
        client_id: &ClientId,
        room_id: &RoomId,
        index: usize,
        mark: Mark,
    ) -> Result<RoomView, RoomError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms.get_mut(room_id).ok_or(RoomError::NotFound)?;

        let assigned = room.mark_of(client_id).ok_or(RoomError::NotInRoom)?;
        if assigned != mark {
            return Err(RoomError::Move(MoveError::NotYourTurn));
        }

        room.game
            .place_mark(index, mark)
            .map_err(RoomError::Move)?;

        Ok(room.to_view())
    }

    pub async fn room_view(&self, room_id: &RoomId) -> Option<RoomView> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).map(|room| room.to_view())
    }

    // Either participant leaving tears the whole room down; the returned
    // value names whoever is left to notify.
    pub async fn remove_client(&self, client_id: &ClientId) -> Option<ClosedRoom> {
        let mut rooms = self.rooms.lock().await;

        let room_id = rooms
            .values()
            .find(|room| room.mark_of(client_id).is_some())
            .map(|room| room.id.clone())?;

        let room = rooms.remove(&room_id)?;
        Some(ClosedRoom {
            room_id,
            remaining: room.opponent_of(client_id),
        })
    }
}
