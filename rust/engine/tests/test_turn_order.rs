use ventuno_engine::game::Game;

fn started_game(seed: u64) -> Game {
    let mut game = Game::with_seed(seed);
    game.add_player(1, "alice").unwrap();
    game.add_player(2, "bob").unwrap();
    game.start_game().unwrap();
    game
}

#[test]
fn turn_alternates_while_both_players_are_active() {
    let mut game = started_game(23);
    assert_eq!(game.current_player_id(), Some(1));
    assert_eq!(game.next_turn(), Some(2));
    assert_eq!(game.next_turn(), Some(1));
    assert_eq!(game.next_turn(), Some(2));
}

#[test]
fn sole_active_player_keeps_the_turn() {
    let mut game = started_game(29);
    game.stand(1).unwrap();
    assert_eq!(game.next_turn(), Some(2));
    assert_eq!(game.next_turn(), Some(2));
    assert_eq!(game.next_turn(), Some(2));
}

#[test]
fn sole_active_player_may_keep_hitting_until_they_bust() {
    let mut game = started_game(31);
    game.stand(1).unwrap();
    game.next_turn();
    // no forced stand at any score: the seat cycles until it resolves
    let mut hits = 0;
    while game.player(2).is_some_and(|p| p.is_active()) {
        game.hit(2).expect("sole active player may hit");
        game.next_turn();
        hits += 1;
        assert!(hits < 30, "busting is inevitable");
    }
    assert!(game.is_finished());
    assert!(game.players()[1].is_busted());
}

#[test]
fn next_turn_before_start_is_a_noop() {
    let mut game = Game::with_seed(1);
    game.add_player(1, "alice").unwrap();
    assert_eq!(game.next_turn(), None);
    assert_eq!(game.current_player_id(), None);
}

#[test]
fn next_turn_with_no_active_players_finishes_exactly_once() {
    let mut game = started_game(37);
    game.stand(1).unwrap();
    game.next_turn();
    game.stand(2).unwrap();
    assert!(game.is_finished());

    let winner = game.winner_id();
    let draw = game.is_draw();
    assert_eq!(game.next_turn(), None);
    assert_eq!(game.next_turn(), None);
    assert_eq!(game.winner_id(), winner);
    assert_eq!(game.is_draw(), draw);
}
