use ventuno_engine::cards::{Card, Rank as R, Suit as S};
use ventuno_engine::game::{decide_outcome, Outcome};
use ventuno_engine::player::Player;

fn player_with(user_id: i64, name: &str, ranks: &[R]) -> Player {
    let suits = [S::Clubs, S::Diamonds, S::Hearts, S::Spades];
    let mut p = Player::new(user_id, name);
    for (i, &rank) in ranks.iter().enumerate() {
        p.add_card(Card {
            suit: suits[i % 4],
            rank,
        });
    }
    p
}

#[test]
fn bust_at_25_loses_to_standing_19() {
    let p1 = player_with(1, "alice", &[R::Ten, R::Seven, R::Eight]);
    let p2 = player_with(2, "bob", &[R::Ten, R::Nine]);
    assert!(p1.is_busted());
    assert_eq!(p2.score(), 19);
    assert_eq!(decide_outcome(&p1, &p2), Outcome::Winner(2));
}

#[test]
fn bust_in_the_second_seat_hands_the_first_the_win() {
    let p1 = player_with(1, "alice", &[R::Ten, R::Nine]);
    let p2 = player_with(2, "bob", &[R::King, R::Queen, R::Five]);
    assert!(p2.is_busted());
    assert_eq!(decide_outcome(&p1, &p2), Outcome::Winner(1));
}

#[test]
fn double_bust_is_a_draw() {
    let p1 = player_with(1, "alice", &[R::Ten, R::Seven, R::Eight]);
    let p2 = player_with(2, "bob", &[R::King, R::Queen, R::Five]);
    assert!(p1.is_busted() && p2.is_busted());
    assert_eq!(decide_outcome(&p1, &p2), Outcome::Draw);
}

#[test]
fn equal_twenty_ones_are_a_draw() {
    let p1 = player_with(1, "alice", &[R::Ace, R::King]);
    let p2 = player_with(2, "bob", &[R::Ace, R::Queen]);
    assert_eq!(p1.score(), 21);
    assert_eq!(p2.score(), 21);
    assert_eq!(decide_outcome(&p1, &p2), Outcome::Draw);
}

#[test]
fn higher_score_wins_when_nobody_busts() {
    let p1 = player_with(1, "alice", &[R::King, R::Queen]);
    let p2 = player_with(2, "bob", &[R::Ten, R::Eight]);
    assert_eq!(decide_outcome(&p1, &p2), Outcome::Winner(1));
    assert_eq!(decide_outcome(&p2, &p1), Outcome::Winner(1));
}
