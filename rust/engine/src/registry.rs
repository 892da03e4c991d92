use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::GameError;
use crate::game::Game;

/// Owns every room's table and the per-room exclusion the engine requires.
///
/// One game per room at a time. Each table sits behind its own `Mutex`, so
/// operations against different rooms never contend; all calls against one
/// table serialize through its lock. The registry is meant to be built once
/// and handed to whatever routes room traffic.
#[derive(Default)]
pub struct GameRegistry {
    rooms: Mutex<HashMap<i64, Arc<Mutex<Game>>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh table for the room. A finished game is replaced in
    /// place; an unfinished one keeps the room occupied until the caller
    /// removes it.
    pub fn create(&self, room_id: i64) -> Result<Arc<Mutex<Game>>, GameError> {
        self.insert_game(room_id, Game::new())
    }

    /// Like [`GameRegistry::create`] with a fixed shuffle.
    pub fn create_with_seed(&self, room_id: i64, seed: u64) -> Result<Arc<Mutex<Game>>, GameError> {
        self.insert_game(room_id, Game::with_seed(seed))
    }

    pub fn get(&self, room_id: i64) -> Result<Arc<Mutex<Game>>, GameError> {
        self.lock_rooms()
            .get(&room_id)
            .cloned()
            .ok_or(GameError::RoomNotFound { room_id })
    }

    /// Discards the room's table. This is how a game is cancelled: drop it
    /// here and the room is free again.
    pub fn remove(&self, room_id: i64) -> Result<(), GameError> {
        self.lock_rooms()
            .remove(&room_id)
            .map(|_| ())
            .ok_or(GameError::RoomNotFound { room_id })
    }

    /// Locates the room and table a user is seated at, if any.
    pub fn find_by_player(&self, user_id: i64) -> Option<(i64, Arc<Mutex<Game>>)> {
        let rooms = self.lock_rooms();
        for (room_id, table) in rooms.iter() {
            let game = lock_table(table);
            if game.players().iter().any(|p| p.user_id() == user_id) {
                return Some((*room_id, Arc::clone(table)));
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.lock_rooms().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_rooms().is_empty()
    }

    fn insert_game(&self, room_id: i64, game: Game) -> Result<Arc<Mutex<Game>>, GameError> {
        let mut rooms = self.lock_rooms();
        if let Some(existing) = rooms.get(&room_id) {
            if !lock_table(existing).is_finished() {
                return Err(GameError::RoomOccupied { room_id });
            }
        }
        let table = Arc::new(Mutex::new(game));
        rooms.insert(room_id, Arc::clone(&table));
        Ok(table)
    }

    fn lock_rooms(&self) -> MutexGuard<'_, HashMap<i64, Arc<Mutex<Game>>>> {
        // a poisoned map is still structurally sound; keep serving it
        self.rooms.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Locks one table, recovering from a poisoned lock the same way.
pub fn lock_table(table: &Mutex<Game>) -> MutexGuard<'_, Game> {
    table.lock().unwrap_or_else(|e| e.into_inner())
}
