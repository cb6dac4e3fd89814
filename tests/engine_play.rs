//! Whole-game behavior of the engine: the classic tic-tac-toe results.

use oxo::{
    Board, EngineOpponent, Move, Outcome, Player, RandomOpponent, Search, play_match,
};

#[test]
fn optimal_versus_optimal_is_always_a_draw() {
    let game = play_match(&mut EngineOpponent, &mut EngineOpponent).unwrap();
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.moves().len(), 9, "a drawn game fills the board");
}

#[test]
fn engine_as_x_never_loses_to_random() {
    for seed in 0..100 {
        let game = play_match(&mut EngineOpponent, &mut RandomOpponent::seeded(seed)).unwrap();
        assert_ne!(
            game.outcome(),
            Outcome::Win(Player::O),
            "engine lost as X with seed {seed}"
        );
    }
}

#[test]
fn engine_as_o_never_loses_to_random() {
    for seed in 0..100 {
        let game = play_match(&mut RandomOpponent::seeded(seed), &mut EngineOpponent).unwrap();
        assert_ne!(
            game.outcome(),
            Outcome::Win(Player::X),
            "engine lost as O with seed {seed}"
        );
    }
}

#[test]
fn engine_as_x_usually_beats_random() {
    let mut wins = 0;
    for seed in 0..100 {
        let game = play_match(&mut EngineOpponent, &mut RandomOpponent::seeded(seed)).unwrap();
        if game.outcome() == Outcome::Win(Player::X) {
            wins += 1;
        }
    }
    assert!(wins >= 50, "only {wins} wins in 100 games against random");
}

#[test]
fn immediate_win_is_taken_over_anything_else() {
    // X to move with two in the top row and the third cell open
    let mut board = Board::from_string("XX..O..O._X").unwrap();
    let mv = Search::new(Player::X).best_move(&mut board);
    assert_eq!(mv, Move::new(0, 2));
}

#[test]
fn imminent_opponent_win_is_blocked() {
    // O threatens the left column at (2, 0); X has no win of its own
    let mut board = Board::from_string("O.XO...X._X").unwrap();
    let mv = Search::new(Player::X).best_move(&mut board);
    assert_eq!(mv, Move::new(2, 0));
}

#[test]
fn engine_punishes_a_blunder() {
    // X opens in a corner; O replies with the losing edge move instead of
    // the center. Perfect play by X now forces a win.
    let mut game = oxo::Game::new();
    game.play(Move::new(0, 0)).unwrap(); // X corner
    game.play(Move::new(0, 1)).unwrap(); // O blunder

    let mut engine = EngineOpponent;
    let mut punished = *game.board();
    let mut search = Search::new(Player::X);
    let (_, score) = search.best_move_scored(&mut punished);
    assert!(score > 0, "corner opening punishes the edge reply");

    // Play it out: the engine must actually convert the win.
    use oxo::Opponent;
    while !game.outcome().is_terminal() {
        let mv = match game.board().to_move() {
            Player::X => engine.choose(game.board()),
            Player::O => {
                // O keeps playing its best defense and still loses
                let mut scratch = *game.board();
                Search::new(Player::O).best_move(&mut scratch)
            }
        };
        game.play(mv).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Win(Player::X));
}
