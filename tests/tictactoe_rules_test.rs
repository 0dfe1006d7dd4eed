//! Board, validator, applicator and win detector behavior across variants.

use strictly_tictac::{
    Board, Coord, Dimensions, GameMode, GameState, GameStatus, LineType, MoveError, Player,
    Variant, create_game_state, is_draw, is_terminal, validate_move,
};
use strum::IntoEnumIterator;

fn started(variant: Variant) -> GameState {
    create_game_state(variant, GameMode::Offline).start()
}

/// Plays the given positions, alternating from X.
fn play(variant: Variant, positions: &[Coord]) -> GameState {
    positions.iter().fold(started(variant), |state, &position| {
        let mover = state.active_player();
        state
            .apply_move(position, mover)
            .unwrap_or_else(|e| panic!("{} rejected: {}", position, e))
    })
}

fn flat(cells: &[(i32, i32)]) -> Vec<Coord> {
    cells.iter().map(|&(r, c)| Coord::new(r, c)).collect()
}

#[test]
fn test_new_boards_have_variant_dimensions() {
    for variant in Variant::iter() {
        let config = variant.config();
        let state = create_game_state(variant, GameMode::Offline);
        assert_eq!(state.status(), GameStatus::Waiting);
        assert_eq!(state.active_player(), Player::X);
        assert_eq!(
            state.board().cells().len(),
            config.rows * config.cols * config.layers,
            "{}",
            variant
        );
        assert!(state.board().cells().iter().all(|cell| cell.is_empty()));
    }
}

#[test]
fn test_history_tracks_accepted_moves() {
    let mut state = started(Variant::Extended4);
    let attempts = [
        (Coord::new(0, 0), Player::X, true),
        (Coord::new(0, 0), Player::O, false),
        (Coord::new(1, 1), Player::X, false),
        (Coord::new(4, 0), Player::O, false),
        (Coord::new(1, 1), Player::O, true),
        (Coord::new(3, 3), Player::X, true),
    ];

    let mut accepted = 0;
    for (position, mover, ok) in attempts {
        let before = state.active_player();
        match state.apply_move(position, mover) {
            Ok(next) => {
                assert!(ok, "{} by {} should be rejected", position, mover);
                accepted += 1;
                assert_eq!(next.active_player(), before.opponent());
                state = next;
            }
            Err(_) => {
                assert!(!ok, "{} by {} should be accepted", position, mover);
                assert_eq!(state.active_player(), before);
            }
        }
        assert_eq!(state.moves().len(), accepted);
        assert_eq!(state.board().occupied_count(), accepted);
    }

    for (idx, mov) in state.moves().iter().enumerate() {
        assert_eq!(mov.sequence, idx);
    }
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let state = play(Variant::Classic, &flat(&[(0, 1)]));
    let board_before = state.board().clone();

    let err = state.apply_move(Coord::new(0, 1), Player::O).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(Coord::new(0, 1)));
    assert_eq!(state.board(), &board_before);
    assert_eq!(state.moves().len(), 1);
}

#[test]
fn test_validation_order() {
    let waiting = create_game_state(Variant::Classic, GameMode::Offline);
    // Wrong turn is reported before the game-not-active check.
    assert_eq!(
        validate_move(&waiting, Coord::new(0, 0), Player::O),
        Err(MoveError::WrongTurn(Player::O))
    );
    assert_eq!(
        validate_move(&waiting, Coord::new(0, 0), Player::X),
        Err(MoveError::GameNotActive(GameStatus::Waiting))
    );

    let state = started(Variant::Classic);
    assert_eq!(
        validate_move(&state, Coord::new(-1, 0), Player::X),
        Err(MoveError::OutOfBounds(Coord::new(-1, 0)))
    );
    assert_eq!(
        validate_move(&state, Coord::layered(1, 0, 0), Player::X),
        Err(MoveError::OutOfBounds(Coord::layered(1, 0, 0)))
    );
    assert_eq!(validate_move(&state, Coord::new(2, 2), Player::X), Ok(()));
}

#[test]
fn test_classic_win_reports_three_cells() {
    let state = play(
        Variant::Classic,
        &flat(&[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]),
    );
    assert_eq!(state.status(), GameStatus::Finished);
    assert_eq!(state.winner(), Some(Player::X));
    assert!(is_terminal(&state));
    // The last mover keeps the turn once the game is over.
    assert_eq!(state.active_player(), Player::X);

    let pattern = state.winning_pattern().unwrap();
    assert_eq!(pattern.line, LineType::Diagonal);
    assert_eq!(pattern.positions, flat(&[(0, 0), (1, 1), (2, 2)]));

    assert_eq!(
        state.apply_move(Coord::new(0, 2), Player::O),
        Err(MoveError::WrongTurn(Player::O))
    );
    assert_eq!(
        state.apply_move(Coord::new(0, 2), Player::X),
        Err(MoveError::GameNotActive(GameStatus::Finished))
    );
}

#[test]
fn test_five_by_five_needs_four() {
    let three = play(
        Variant::Extended5,
        &flat(&[(0, 0), (4, 0), (0, 1), (4, 1), (0, 2), (3, 3)]),
    );
    assert_eq!(three.status(), GameStatus::Playing);

    let four = three.apply_move(Coord::new(0, 3), Player::X).unwrap();
    assert_eq!(four.winner(), Some(Player::X));
    let pattern = four.winning_pattern().unwrap();
    assert_eq!(pattern.line, LineType::Row);
    assert_eq!(pattern.positions, flat(&[(0, 0), (0, 1), (0, 2), (0, 3)]));
}

#[test]
fn test_connect_four_accepts_only_the_landing_cell() {
    let mut state = started(Variant::ConnectFour);
    let rows = state.board().dims().rows as i32;

    for k in 0..4 {
        let landing = rows - 1 - k;
        let mover = state.active_player();
        for row in 0..rows {
            let result = validate_move(&state, Coord::new(row, 0), mover);
            if row < landing {
                assert_eq!(result, Err(MoveError::MustDropToLowestEmpty(Coord::new(row, 0))));
            } else if row > landing {
                assert_eq!(result, Err(MoveError::CellOccupied(Coord::new(row, 0))));
            } else {
                assert_eq!(result, Ok(()));
            }
        }
        assert_eq!(state.drop_position(0), Some(Coord::new(landing, 0)));
        state = state.apply_move(Coord::new(landing, 0), mover).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Playing);
    assert!(state.legal_moves().contains(&Coord::new(1, 0)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let state = play(
        Variant::Classic,
        &flat(&[
            (0, 0),
            (1, 1),
            (0, 1),
            (2, 2),
            (2, 0),
            (0, 2),
            (1, 2),
            (1, 0),
            (2, 1),
        ]),
    );
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winner(), None);
    assert!(is_draw(&state));
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_three_d_vertical_win() {
    let state = play(
        Variant::ThreeD,
        &[
            Coord::layered(0, 1, 1),
            Coord::layered(0, 0, 0),
            Coord::layered(1, 1, 1),
            Coord::layered(0, 0, 1),
            Coord::layered(2, 1, 1),
        ],
    );
    assert_eq!(state.winner(), Some(Player::X));
    let pattern = state.winning_pattern().unwrap();
    assert_eq!(pattern.line, LineType::Vertical);
    assert_eq!(
        pattern.positions,
        vec![
            Coord::layered(0, 1, 1),
            Coord::layered(1, 1, 1),
            Coord::layered(2, 1, 1)
        ]
    );
}

#[test]
fn test_three_d_space_diagonal_win() {
    let state = play(
        Variant::ThreeD,
        &[
            Coord::layered(2, 2, 2),
            Coord::layered(0, 2, 0),
            Coord::layered(1, 1, 1),
            Coord::layered(0, 2, 1),
            Coord::layered(0, 0, 0),
        ],
    );
    let pattern = state.winning_pattern().unwrap();
    assert_eq!(pattern.line, LineType::ThreeDDiagonal);
    assert_eq!(pattern.positions[0], Coord::layered(0, 0, 0));
    assert_eq!(pattern.positions[2], Coord::layered(2, 2, 2));
}

#[test]
fn test_json_round_trip() {
    let state = play(
        Variant::ThreeD,
        &[Coord::layered(1, 1, 1), Coord::layered(0, 0, 2), Coord::new(2, 2)],
    )
    .with_players("ann", "bo");

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"activePlayer\":\"O\""));
    assert!(json.contains("\"variant\":\"3d\""));
    assert!(json.contains("\"status\":\"playing\""));

    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
    assert_eq!(back.board(), state.board());
    assert_eq!(back.moves(), state.moves());
    assert_eq!(back.status(), state.status());
}

#[test]
fn test_board_with_wrong_cell_count_is_rejected() {
    let state = started(Variant::Classic);
    let mut value = serde_json::to_value(&state).unwrap();
    value["board"]["cells"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_board_not_matching_variant_is_rejected() {
    let state = started(Variant::Classic);
    let mut value = serde_json::to_value(&state).unwrap();
    value["board"] = serde_json::to_value(Board::new(Dimensions::flat(4, 4))).unwrap();

    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("expected 1x3x3"), "{}", err);
    assert_eq!(
        validate_move(&state, Coord::new(3, 3), Player::X),
        Err(MoveError::OutOfBounds(Coord::new(3, 3)))
    );
}

#[test]
fn test_board_with_overflowing_dims_is_rejected() {
    let state = started(Variant::Classic);
    let mut value = serde_json::to_value(&state).unwrap();
    value["board"] = serde_json::json!({
        "dims": { "layers": 4294967296u64, "rows": 4294967296u64, "cols": 1 },
        "cells": [],
    });
    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_replay_matches_live_game() {
    let live = play(Variant::Extended4, &flat(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
    let replayed = started(Variant::Extended4).replay(live.moves()).unwrap();
    assert_eq!(replayed.board(), live.board());
    assert_eq!(replayed.moves(), live.moves());
    assert_eq!(replayed.active_player(), live.active_player());
}
