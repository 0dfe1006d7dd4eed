//! Computer opponent behavior on the classic board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictac::{
    Coord, Difficulty, GameMode, GameState, GameStatus, Opponent, OpponentError, Player, Variant,
    compute_opponent_move, create_game_state, hard_move, medium_move,
};

fn started() -> GameState {
    create_game_state(Variant::Classic, GameMode::Offline).start()
}

/// Walks every line of play for the human against the hard computer and
/// returns how many finished games were reached.
fn explore(state: &GameState, computer: Player, losses: &mut Vec<Vec<Coord>>) -> usize {
    if state.status() != GameStatus::Playing {
        if state.winner() == Some(computer.opponent()) {
            losses.push(state.moves().iter().map(|m| m.position).collect());
        }
        return 1;
    }

    if state.active_player() == computer {
        let idx = hard_move(state.board(), computer).unwrap();
        let next = state
            .apply_move(Coord::from_classic_index(idx).unwrap(), computer)
            .unwrap();
        return explore(&next, computer, losses);
    }

    state
        .legal_moves()
        .into_iter()
        .map(|position| {
            let next = state.apply_move(position, state.active_player()).unwrap();
            explore(&next, computer, losses)
        })
        .sum()
}

#[test]
fn test_hard_never_loses_moving_second() {
    let mut losses = Vec::new();
    let games = explore(&started(), Player::O, &mut losses);
    assert!(games > 0);
    assert!(losses.is_empty(), "computer lost: {:?}", losses);
}

#[test]
fn test_hard_never_loses_moving_first() {
    let mut losses = Vec::new();
    let games = explore(&started(), Player::X, &mut losses);
    assert!(games > 0);
    assert!(losses.is_empty(), "computer lost: {:?}", losses);
}

#[test]
fn test_medium_blocks_top_row() {
    let state = started()
        .apply_move(Coord::new(0, 0), Player::X)
        .unwrap()
        .apply_move(Coord::new(2, 2), Player::O)
        .unwrap()
        .apply_move(Coord::new(0, 1), Player::X)
        .unwrap();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(medium_move(state.board(), Player::O, &mut rng), Ok(2));
    }
    assert_eq!(compute_opponent_move(state.board(), Difficulty::Medium), Ok(2));
}

#[test]
fn test_seeded_opponents_repeat_themselves() {
    let board = started().board().clone();
    let picks = |seed| {
        let mut opponent = Opponent::seeded(Difficulty::Easy, seed);
        (0..10)
            .map(|_| opponent.choose(&board).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(17), picks(17));
}

#[test]
fn test_opponent_rejects_other_variants() {
    let state = create_game_state(Variant::ConnectFour, GameMode::Offline);
    let mut opponent = Opponent::new(Difficulty::Medium);
    assert!(matches!(
        opponent.choose(state.board()),
        Err(OpponentError::UnsupportedBoard(_))
    ));
}

#[test]
fn test_opponent_coordinate_is_playable() {
    let state = started().apply_move(Coord::new(1, 1), Player::X).unwrap();
    let mut opponent = Opponent::seeded(Difficulty::Hard, 0);
    let coord = opponent.choose_coord(state.board()).unwrap();
    assert!(state.apply_move(coord, Player::O).is_ok());
    // Against a center opening the first corner is optimal.
    assert_eq!(coord, Coord::new(0, 0));
}
