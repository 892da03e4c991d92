use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::Player;

/// Seats at a table. The rules are hard-coded to exactly two players.
const MAX_PLAYERS: usize = 2;

/// Lifecycle phase of a table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Zero or one player seated, cards not yet dealt.
    Waiting,
    /// Both players dealt in, turns alternating.
    Active,
    /// Terminal: outcome fixed, no further mutation.
    Finished,
}

/// Result of an accepted join.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum JoinOutcome {
    /// Seated; a second player is still needed.
    Waiting,
    /// Both seats taken; the caller may start the game.
    ReadyToStart,
}

/// Final result of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The named player won.
    Winner(i64),
    /// Nobody won: both busted, or scores tied.
    Draw,
}

/// Determines the outcome between the two seats of a finished game.
///
/// Both busted is a shared loss (draw); one busted hands the win to the
/// other; otherwise the strictly higher score wins and a tie is a draw.
pub fn decide_outcome(first: &Player, second: &Player) -> Outcome {
    match (first.is_busted(), second.is_busted()) {
        (true, true) => Outcome::Draw,
        (true, false) => Outcome::Winner(second.user_id()),
        (false, true) => Outcome::Winner(first.user_id()),
        (false, false) => match first.score().cmp(&second.score()) {
            Ordering::Greater => Outcome::Winner(first.user_id()),
            Ordering::Less => Outcome::Winner(second.user_id()),
            Ordering::Equal => Outcome::Draw,
        },
    }
}

/// One table of two-player 21: a shuffled deck, up to two seated players,
/// and the turn/outcome state machine.
///
/// Lifecycle: created empty, players join one at a time, [`start_game`]
/// deals two cards to each seat, turns alternate through [`hit`]/[`stand`]
/// with the caller advancing via [`next_turn`], and the game finishes once
/// no player can act. A finished game is terminal; the owner discards it.
///
/// Every operation is a short in-memory transition; the caller serializes
/// access per table (see the registry).
///
/// [`start_game`]: Game::start_game
/// [`hit`]: Game::hit
/// [`stand`]: Game::stand
/// [`next_turn`]: Game::next_turn
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    seed: u64,
    /// Players in join order, at most two.
    players: Vec<Player>,
    /// Index of the turn holder, meaningful only while started and not finished.
    current: usize,
    started: bool,
    finished: bool,
    winner_id: Option<i64>,
    is_draw: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic table: the seed fixes the shuffle and is retained for
    /// game records.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            deck: Deck::new_with_seed(seed),
            seed,
            players: Vec::with_capacity(MAX_PLAYERS),
            current: 0,
            started: false,
            finished: false,
            winner_id: None,
            is_draw: false,
        }
    }

    /// Seats a player. Succeeds only before the deal, while a seat is free
    /// and the id is not already seated; rejected joins change nothing.
    /// The second distinct player makes the table [`JoinOutcome::ReadyToStart`];
    /// actually starting is the caller's decision.
    pub fn add_player(&mut self, user_id: i64, display_name: &str) -> Result<JoinOutcome, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TableFull);
        }
        if self.players.iter().any(|p| p.user_id() == user_id) {
            return Err(GameError::AlreadyJoined { user_id });
        }
        self.players.push(Player::new(user_id, display_name));
        if self.players.len() == MAX_PLAYERS {
            Ok(JoinOutcome::ReadyToStart)
        } else {
            Ok(JoinOutcome::Waiting)
        }
    }

    /// Deals the opening hands and opens play.
    ///
    /// Requires exactly two seated players and an undealt table. Cards go
    /// out one per seat per round (first joiner, second joiner, first,
    /// second) and the first joiner holds the opening turn.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() != MAX_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if self.deck.remaining() < 2 * MAX_PLAYERS {
            return Err(GameError::EmptyDeck);
        }
        self.started = true;
        for _ in 0..2 {
            for p in &mut self.players {
                // the remaining() guard above keeps these draws from failing
                if let Some(card) = self.deck.draw() {
                    p.add_card(card);
                }
            }
        }
        self.current = 0;
        Ok(())
    }

    /// Draws one card for the acting player and returns it.
    ///
    /// Valid only while the game is active, for the turn holder, and while
    /// that player can still act. An empty deck fails without touching the
    /// hand. A bust triggers end-of-game evaluation but never advances the
    /// turn; the caller must call [`Game::next_turn`] explicitly.
    pub fn hit(&mut self, user_id: i64) -> Result<Card, GameError> {
        let idx = self.acting_index(user_id)?;
        let card = self.deck.draw().ok_or(GameError::EmptyDeck)?;
        let player = &mut self.players[idx];
        player.add_card(card);
        if player.is_busted() {
            self.check_game_end();
        }
        Ok(card)
    }

    /// Marks the acting player as stood. Same preconditions as [`Game::hit`].
    pub fn stand(&mut self, user_id: i64) -> Result<(), GameError> {
        let idx = self.acting_index(user_id)?;
        self.players[idx].mark_stopped();
        self.check_game_end();
        Ok(())
    }

    /// Advances the turn and returns the new holder's id, or `None` once
    /// the game is over (or was never started).
    ///
    /// With no player able to act the game finishes; calling again on a
    /// finished game stays a no-op. With one player able to act the turn
    /// sticks to that player, who may keep hitting until they stand or
    /// bust. With both able to act the turn flips between the two
    /// join-order seats.
    pub fn next_turn(&mut self) -> Option<i64> {
        if !self.started || self.finished {
            return None;
        }
        let active: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| i)
            .collect();
        if active.is_empty() {
            self.finish_game();
            return None;
        }
        if active.len() == 1 {
            self.current = active[0];
        } else {
            let next = 1 - self.current;
            self.current = next;
            if !self.players[self.current].is_active() {
                // unreachable once the single-active case is handled above;
                // kept as a safeguard so the turn never lands on a resolved seat
                self.current = 1 - next;
            }
        }
        Some(self.players[self.current].user_id())
    }

    /// Pure renderable snapshot of the table for the caller's messages.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            phase: self.phase(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    user_id: p.user_id(),
                    display_name: p.display_name().to_string(),
                    cards: p.cards_display(),
                    score: p.score(),
                    stopped: p.is_stopped(),
                    busted: p.is_busted(),
                })
                .collect(),
            current_player: self
                .current_player_id()
                .and_then(|id| self.player(id))
                .map(|p| p.display_name().to_string()),
            winner: self
                .winner_id
                .and_then(|id| self.player(id))
                .map(|p| p.display_name().to_string()),
            is_draw: self.is_draw,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.finished {
            GamePhase::Finished
        } else if self.started {
            GamePhase::Active
        } else {
            GamePhase::Waiting
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Turn holder's id while the game is active, `None` otherwise.
    pub fn current_player_id(&self) -> Option<i64> {
        if self.started && !self.finished {
            self.players.get(self.current).map(|p| p.user_id())
        } else {
            None
        }
    }

    /// Winner's id once finished without a draw, `None` otherwise.
    pub fn winner_id(&self) -> Option<i64> {
        self.winner_id
    }

    /// Meaningful only once finished.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, user_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.user_id() == user_id)
    }

    fn acting_index(&self, user_id: i64) -> Result<usize, GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.finished {
            return Err(GameError::GameFinished);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.user_id() == user_id)
            .ok_or(GameError::UnknownPlayer { user_id })?;
        if self.players[self.current].user_id() != user_id {
            return Err(GameError::NotYourTurn { user_id });
        }
        if !self.players[idx].is_active() {
            return Err(GameError::PlayerDone { user_id });
        }
        Ok(idx)
    }

    /// Finishes the game once no player can act. Evaluation runs only after
    /// the acting player's move has fully completed, so two busts resolve
    /// as a shared loss rather than "first to bust loses".
    fn check_game_end(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if self.players.iter().any(|p| p.is_active()) {
            return false;
        }
        self.finish_game();
        true
    }

    /// Fixes the outcome exactly once; later calls change nothing.
    fn finish_game(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if self.players.len() != MAX_PLAYERS {
            return;
        }
        match decide_outcome(&self.players[0], &self.players[1]) {
            Outcome::Winner(id) => self.winner_id = Some(id),
            Outcome::Draw => self.is_draw = true,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// One seat as rendered in a [`GameSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub user_id: i64,
    pub display_name: String,
    /// Hand in dealt order, e.g. `[A♠] [10♥]`.
    pub cards: String,
    pub score: u32,
    pub stopped: bool,
    pub busted: bool,
}

/// Snapshot of a table: phase, hands and, once finished, the outcome.
/// The engine performs no I/O; `Display` gives the caller a plain-text
/// rendering to forward wherever messages go.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub phase: GamePhase,
    pub players: Vec<PlayerSummary>,
    pub current_player: Option<String>,
    pub winner: Option<String>,
    pub is_draw: bool,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            GamePhase::Waiting => write!(f, "The game has not started yet."),
            GamePhase::Active => match &self.current_player {
                Some(name) => write!(f, "It is {}'s turn.", name),
                None => write!(f, "Game in progress."),
            },
            GamePhase::Finished => {
                writeln!(f, "Game over!")?;
                for p in &self.players {
                    write!(f, "{}: {} = {}", p.display_name, p.cards, p.score)?;
                    if p.busted {
                        write!(f, " (busted)")?;
                    }
                    writeln!(f)?;
                }
                if self.is_draw {
                    write!(f, "Draw - nobody wins.")
                } else if let Some(name) = &self.winner {
                    write!(f, "Winner: {}!", name)
                } else {
                    write!(f, "No winner.")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exhausting the deck needs access to the private field; normal play
    // cannot empty a 52-card deck between two players.
    #[test]
    fn hit_on_exhausted_deck_fails_without_dealing() {
        let mut game = Game::with_seed(3);
        game.add_player(1, "a").unwrap();
        game.add_player(2, "b").unwrap();
        game.start_game().unwrap();
        while game.deck.draw().is_some() {}
        let before = game.players()[0].cards().len();
        let err = game.hit(1).unwrap_err();
        assert_eq!(err, GameError::EmptyDeck);
        assert_eq!(game.players()[0].cards().len(), before);
        assert!(!game.is_finished(), "a failed draw must not end the game");
    }

    #[test]
    fn start_on_depleted_deck_deals_nothing() {
        let mut game = Game::with_seed(3);
        game.add_player(1, "a").unwrap();
        game.add_player(2, "b").unwrap();
        for _ in 0..49 {
            game.deck.draw();
        }
        let err = game.start_game().unwrap_err();
        assert_eq!(err, GameError::EmptyDeck);
        assert!(!game.is_started());
        assert!(game.players().iter().all(|p| p.cards().is_empty()));
    }
}
