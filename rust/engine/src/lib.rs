//! # ventuno-engine: Two-Player 21 Game Engine
//!
//! The game engine for a two-player, single-deck game of 21 (a blackjack
//! variant with no dealer) played room-by-room inside a chat surface.
//! The engine holds all real game logic: deck and card model, per-player
//! hand state, turn sequencing, bust and scoring rules, and the win/draw
//! state machine. Message delivery, command routing and timers are the
//! caller's concern; the engine performs no I/O and keeps all state in
//! memory.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Single-use shuffled deck with deterministic ChaCha20 seeding
//! - [`hand`] - Soft-ace hand scoring
//! - [`player`] - Seat state: identity, dealt cards, stood/busted flags
//! - [`game`] - The table state machine: join, deal, turns, outcome
//! - [`registry`] - Room-to-table map owning per-room mutual exclusion
//! - [`logger`] - Finished-game records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use ventuno_engine::game::{Game, JoinOutcome};
//!
//! let mut game = Game::with_seed(42);
//! assert_eq!(game.add_player(1, "Alice").unwrap(), JoinOutcome::Waiting);
//! assert_eq!(game.add_player(2, "Bob").unwrap(), JoinOutcome::ReadyToStart);
//! game.start_game().unwrap();
//!
//! // Alice joined first, so she acts first.
//! assert_eq!(game.current_player_id(), Some(1));
//! ```
//!
//! ## Deterministic Shuffles
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use ventuno_engine::deck::Deck;
//!
//! // Same seed produces same card order
//! let mut d1 = Deck::new_with_seed(7);
//! let mut d2 = Deck::new_with_seed(7);
//! assert_eq!(d1.draw(), d2.draw());
//! ```
//!
//! ## Scoring
//!
//! Aces count eleven until the hand would bust, then soften to one:
//!
//! ```rust
//! use ventuno_engine::cards::{Card, Rank, Suit};
//! use ventuno_engine::hand::score;
//!
//! let hand = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Clubs, rank: Rank::Nine },
//! ];
//! assert_eq!(score(&hand), 21);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod registry;
