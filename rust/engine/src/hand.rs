use crate::cards::Card;

/// The score a hand may not exceed without busting.
pub const TARGET_SCORE: u32 = 21;

/// Scores a hand under the soft-ace rule.
///
/// Every card contributes its nominal value (aces count 11). While the
/// total exceeds [`TARGET_SCORE`] and an unsoftened ace remains, one ace is
/// recounted as 1 (subtract 10). A hand holds at most four aces, so the
/// adjustment is a bounded loop. Pure function of the cards; the result is
/// never cached.
pub fn score(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|c| c.rank.value()).sum();
    let mut soft_aces = cards.iter().filter(|c| c.rank.is_ace()).count();
    while total > TARGET_SCORE && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    total
}

/// True when the hand scores over [`TARGET_SCORE`] even with every ace
/// softened.
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > TARGET_SCORE
}
