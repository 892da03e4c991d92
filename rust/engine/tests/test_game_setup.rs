use ventuno_engine::deck::Deck;
use ventuno_engine::errors::GameError;
use ventuno_engine::game::{Game, GamePhase, JoinOutcome};

#[test]
fn second_join_reports_ready_to_start() {
    let mut game = Game::with_seed(1);
    assert_eq!(game.add_player(10, "alice").unwrap(), JoinOutcome::Waiting);
    assert_eq!(
        game.add_player(20, "bob").unwrap(),
        JoinOutcome::ReadyToStart
    );
    assert_eq!(game.player_count(), 2);
    // joining alone never starts anything
    assert_eq!(game.phase(), GamePhase::Waiting);
    assert!(!game.is_started());
}

#[test]
fn duplicate_join_adds_nothing_and_never_reports_ready() {
    let mut game = Game::with_seed(1);
    game.add_player(10, "alice").unwrap();
    let err = game.add_player(10, "alice again").unwrap_err();
    assert_eq!(err, GameError::AlreadyJoined { user_id: 10 });
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.players()[0].display_name(), "alice");
    // a later distinct join still reports ready exactly once
    assert_eq!(
        game.add_player(20, "bob").unwrap(),
        JoinOutcome::ReadyToStart
    );
}

#[test]
fn third_player_is_rejected() {
    let mut game = Game::with_seed(1);
    game.add_player(10, "alice").unwrap();
    game.add_player(20, "bob").unwrap();
    let err = game.add_player(30, "carol").unwrap_err();
    assert_eq!(err, GameError::TableFull);
    assert_eq!(game.player_count(), 2);
}

#[test]
fn join_after_start_is_rejected() {
    let mut game = Game::with_seed(1);
    game.add_player(10, "alice").unwrap();
    game.add_player(20, "bob").unwrap();
    game.start_game().unwrap();
    let err = game.add_player(30, "carol").unwrap_err();
    assert_eq!(err, GameError::AlreadyStarted);
    assert_eq!(game.player_count(), 2);
}

#[test]
fn start_requires_two_players() {
    let mut game = Game::with_seed(1);
    assert_eq!(game.start_game().unwrap_err(), GameError::NotEnoughPlayers);
    game.add_player(10, "alice").unwrap();
    assert_eq!(game.start_game().unwrap_err(), GameError::NotEnoughPlayers);
    assert!(!game.is_started());
}

#[test]
fn start_deals_two_cards_each_in_join_order() {
    let mut game = Game::with_seed(99);
    game.add_player(1, "alice").unwrap();
    game.add_player(2, "bob").unwrap();
    game.start_game().unwrap();

    // same seed, dealt one card per seat per round: the first joiner gets
    // draws 0 and 2, the second joiner draws 1 and 3
    let mut reference = Deck::new_with_seed(99);
    let draws: Vec<_> = (0..4).map(|_| reference.draw().unwrap()).collect();
    assert_eq!(game.players()[0].cards(), &[draws[0], draws[2]]);
    assert_eq!(game.players()[1].cards(), &[draws[1], draws[3]]);

    assert_eq!(game.current_player_id(), Some(1));
    assert_eq!(game.deck_remaining(), 48);
    assert_eq!(game.phase(), GamePhase::Active);
}

#[test]
fn starting_twice_is_rejected() {
    let mut game = Game::with_seed(5);
    game.add_player(1, "alice").unwrap();
    game.add_player(2, "bob").unwrap();
    game.start_game().unwrap();
    assert_eq!(game.start_game().unwrap_err(), GameError::AlreadyStarted);
    // hands untouched by the failed restart
    assert!(game.players().iter().all(|p| p.cards().len() == 2));
    assert_eq!(game.deck_remaining(), 48);
}
