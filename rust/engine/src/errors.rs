use thiserror::Error;

/// Failures surfaced by the engine. All variants are recoverable return
/// values; none leaves a game partially mutated.
///
/// Callers can rely on three families: rule violations (wrong phase, wrong
/// turn, seat already resolved, table full), deck exhaustion, and lookups
/// that reference an unknown player or room.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game has not started yet")]
    NotStarted,
    #[error("the game is already finished")]
    GameFinished,
    #[error("the table already has two players")]
    TableFull,
    #[error("the game needs two players to start")]
    NotEnoughPlayers,
    #[error("player {user_id} has already joined")]
    AlreadyJoined { user_id: i64 },
    #[error("it is not player {user_id}'s turn")]
    NotYourTurn { user_id: i64 },
    #[error("player {user_id} has already stood or busted")]
    PlayerDone { user_id: i64 },
    #[error("the deck is out of cards")]
    EmptyDeck,
    #[error("player {user_id} is not seated in this game")]
    UnknownPlayer { user_id: i64 },
    #[error("room {room_id} has no active game")]
    RoomNotFound { room_id: i64 },
    #[error("room {room_id} already has a game in progress")]
    RoomOccupied { room_id: i64 },
}
