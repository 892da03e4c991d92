use crate::cards::Card;
use crate::hand;

/// A seated player: chat identity plus the cards dealt so far.
///
/// `stopped` and `busted` are the two resolution flags: `stopped` is set
/// when the player stands, `busted` is derived from the hand score every
/// time a card is added and is never set directly.
#[derive(Debug, Clone)]
pub struct Player {
    user_id: i64,
    display_name: String,
    cards: Vec<Card>,
    stopped: bool,
    busted: bool,
}

impl Player {
    pub fn new(user_id: i64, display_name: &str) -> Self {
        Self {
            user_id,
            display_name: display_name.to_string(),
            cards: Vec::new(),
            stopped: false,
            busted: false,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Cards in dealt order. The order matters for display, not scoring.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Appends a card and recomputes `busted` from the new score.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.busted = hand::is_bust(&self.cards);
    }

    /// Current score, computed on demand from the hand.
    pub fn score(&self) -> u32 {
        hand::score(&self.cards)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_busted(&self) -> bool {
        self.busted
    }

    /// Still eligible to act: has neither stood nor busted.
    pub fn is_active(&self) -> bool {
        !self.stopped && !self.busted
    }

    pub(crate) fn mark_stopped(&mut self) {
        self.stopped = true;
    }

    /// Human-readable hand in dealt order, e.g. `[A♠] [10♥]`.
    pub fn cards_display(&self) -> String {
        if self.cards.is_empty() {
            return "no cards".to_string();
        }
        self.cards
            .iter()
            .map(|c| format!("[{}]", c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
