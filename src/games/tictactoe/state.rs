//! Game state and its transitions.
//!
//! A [`GameState`] is never modified by a move: [`GameState::apply_move`]
//! returns a new state and leaves the original available for inspection,
//! undo or replay.

use super::action::{Move, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract, Placement};
use super::rules::{WinPattern, detect_win};
use super::{Board, Cell, Coord, Dimensions, GameMode, GameStatus, Player, Variant};
use chrono::{DateTime, Utc};
use derive_more::Display;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete state of one game.
///
/// Deserialization rejects a board whose dimensions differ from the
/// variant's configured board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameStateRepr")]
pub struct GameState {
    pub(super) id: String,
    pub(super) variant: Variant,
    pub(super) mode: GameMode,
    pub(super) status: GameStatus,
    pub(super) board: Board,
    pub(super) active_player: Player,
    pub(super) winner: Option<Player>,
    pub(super) moves: Vec<Move>,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) player_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) player_o: Option<String>,
}

/// The shape a game state arrives in over the wire, checked before use.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRepr {
    id: String,
    variant: Variant,
    mode: GameMode,
    status: GameStatus,
    board: Board,
    active_player: Player,
    winner: Option<Player>,
    moves: Vec<Move>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    player_x: Option<String>,
    #[serde(default)]
    player_o: Option<String>,
}

/// A game state whose board does not match its variant.
#[derive(Debug, Clone, Display)]
#[display("{} board has dimensions {}, expected {}", variant, actual, variant.config().dims())]
pub struct StateShapeError {
    variant: Variant,
    actual: Dimensions,
}

impl std::error::Error for StateShapeError {}

impl TryFrom<GameStateRepr> for GameState {
    type Error = StateShapeError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let actual = repr.board.dims();
        if actual != repr.variant.config().dims() {
            warn!(variant = %repr.variant, dims = %actual, "Rejected mismatched board");
            return Err(StateShapeError {
                variant: repr.variant,
                actual,
            });
        }
        Ok(Self {
            id: repr.id,
            variant: repr.variant,
            mode: repr.mode,
            status: repr.status,
            board: repr.board,
            active_player: repr.active_player,
            winner: repr.winner,
            moves: repr.moves,
            created_at: repr.created_at,
            updated_at: repr.updated_at,
            player_x: repr.player_x,
            player_o: repr.player_o,
        })
    }
}

/// Generates a unique game id of the form `game_<unix millis>_<suffix>`.
pub fn generate_game_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("game_{}_{}", Utc::now().timestamp_millis(), suffix)
}

impl GameState {
    /// Creates a waiting game with a generated id.
    #[instrument]
    pub fn new(variant: Variant, mode: GameMode) -> Self {
        Self::with_id(generate_game_id(), variant, mode, Utc::now())
    }

    /// Creates a waiting game with a caller-chosen id and creation time.
    pub fn with_id(
        id: impl Into<String>,
        variant: Variant,
        mode: GameMode,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            variant,
            mode,
            status: GameStatus::Waiting,
            board: Board::for_config(variant.config()),
            active_player: Player::X,
            winner: None,
            moves: Vec::new(),
            created_at,
            updated_at: created_at,
            player_x: None,
            player_o: None,
        }
    }

    /// Attaches opaque player identifiers to the two seats.
    pub fn with_players(
        mut self,
        player_x: impl Into<String>,
        player_o: impl Into<String>,
    ) -> Self {
        self.player_x = Some(player_x.into());
        self.player_o = Some(player_o.into());
        self
    }

    /// Moves a waiting game to playing. Other statuses are left as they are.
    #[instrument(skip(self), fields(game_id = %self.id, status = %self.status))]
    pub fn start(mut self) -> Self {
        if self.status == GameStatus::Waiting {
            debug!("Starting game");
            self.status = GameStatus::Playing;
            self.updated_at = Utc::now();
        }
        self
    }

    /// Fresh waiting game with the same id, variant, mode and players.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn reset(&self) -> Self {
        let mut fresh = Self::with_id(self.id.clone(), self.variant, self.mode, Utc::now());
        fresh.player_x = self.player_x.clone();
        fresh.player_o = self.player_o.clone();
        fresh
    }

    /// Returns the game id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the last mover once the game is over).
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the winner, if the game is finished.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the move history, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns when the game was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the game last changed.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the identifier attached to a seat, if any.
    pub fn player_id(&self, player: Player) -> Option<&str> {
        match player {
            Player::X => self.player_x.as_deref(),
            Player::O => self.player_o.as_deref(),
        }
    }

    /// Checks whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Checks whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Checks whether `mover` may place a mark at `position`.
    ///
    /// Has no side effects, so it is safe to call speculatively.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: [`MoveError::WrongTurn`],
    /// [`MoveError::GameNotActive`], [`MoveError::OutOfBounds`],
    /// [`MoveError::CellOccupied`] or [`MoveError::MustDropToLowestEmpty`].
    pub fn validate_move(&self, position: Coord, mover: Player) -> Result<(), MoveError> {
        LegalMove::check(&Placement::new(mover, position), self)
    }

    /// Applies a move stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; `self` is never modified.
    pub fn apply_move(&self, position: Coord, mover: Player) -> Result<Self, MoveError> {
        self.apply_move_at(position, mover, Utc::now())
    }

    /// Applies a move stamped with the given time, returning the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns the validation failure; `self` is never modified.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn apply_move_at(
        &self,
        position: Coord,
        mover: Player,
        at: DateTime<Utc>,
    ) -> Result<Self, MoveError> {
        let placement = Placement::new(mover, position);

        // Precondition: Check contract
        MoveContract::pre(self, &placement).inspect_err(|e| {
            warn!(%position, player = %mover, error = %e, "Move rejected");
        })?;

        // Apply move to a copy
        let mut next = self.clone();
        next.board.set(position, Cell::Occupied(mover))?;
        next.moves.push(Move::new(mover, position, self.moves.len(), at));

        let config = self.variant.config();
        if detect_win(
            &next.board,
            position,
            mover,
            config.win_length,
            config.allow_diagonals,
            config.allow_3d,
        )
        .is_some()
        {
            info!(winner = %mover, moves = next.moves.len(), "Game won");
            next.status = GameStatus::Finished;
            next.winner = Some(mover);
        } else if next.board.is_full() {
            info!(moves = next.moves.len(), "Game drawn");
            next.status = GameStatus::Draw;
        } else {
            next.active_player = mover.opponent();
        }
        next.updated_at = at;

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%position, player = %mover, status = %next.status, "Move applied");
        Ok(next)
    }

    /// Applies a recorded move list in order, starting from this state.
    ///
    /// Each move keeps its original timestamp; sequence numbers are
    /// reassigned from this state's history.
    ///
    /// # Errors
    ///
    /// Stops at the first move that fails validation.
    #[instrument(skip(self, moves), fields(game_id = %self.id, count = moves.len()))]
    pub fn replay(&self, moves: &[Move]) -> Result<Self, MoveError> {
        moves.iter().try_fold(self.clone(), |state, mov| {
            state.apply_move_at(mov.position, mov.player, mov.timestamp)
        })
    }

    /// Positions the active player could legally take right now.
    ///
    /// Every empty cell, or for gravity variants the landing cell of each
    /// column that still has room. Empty unless the game is playing.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        if self.variant.config().gravity {
            let dims = self.board.dims();
            return (0..dims.layers as i32)
                .flat_map(|layer| (0..dims.cols as i32).map(move |col| (layer, col)))
                .filter_map(|(layer, col)| {
                    self.board
                        .lowest_empty_row(layer, col)
                        .map(|row| Coord::layered(layer, row, col))
                })
                .collect();
        }
        self.board
            .empty_indices()
            .into_iter()
            .filter_map(|idx| self.board.coord_of(idx))
            .collect()
    }

    /// Landing cell for a piece dropped into `col` on a gravity variant.
    pub fn drop_position(&self, col: i32) -> Option<Coord> {
        if !self.variant.config().gravity {
            return None;
        }
        self.board
            .lowest_empty_row(0, col)
            .map(|row| Coord::new(row, col))
    }

    /// The winning run of a finished game, recomputed from the last move.
    pub fn winning_pattern(&self) -> Option<WinPattern> {
        let winner = self.winner?;
        let last = self.moves.last()?;
        let config = self.variant.config();
        detect_win(
            &self.board,
            last.position,
            winner,
            config.win_length,
            config.allow_diagonals,
            config.allow_3d,
        )
    }
}

/// Creates a fresh waiting game for a variant.
pub fn create_game_state(variant: Variant, mode: GameMode) -> GameState {
    GameState::new(variant, mode)
}

/// Checks a move without applying it. See [`GameState::validate_move`].
pub fn validate_move(state: &GameState, position: Coord, mover: Player) -> Result<(), MoveError> {
    state.validate_move(position, mover)
}

/// Applies a move. See [`GameState::apply_move`].
pub fn apply_move(
    state: &GameState,
    position: Coord,
    mover: Player,
) -> Result<GameState, MoveError> {
    state.apply_move(position, mover)
}

/// Checks whether a game has ended.
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

/// Checks whether a game ended in a draw.
pub fn is_draw(state: &GameState) -> bool {
    state.is_draw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::LineType;

    fn playing(variant: Variant) -> GameState {
        create_game_state(variant, GameMode::Offline).start()
    }

    #[test]
    fn test_new_game_is_waiting_with_x_to_move() {
        let game = create_game_state(Variant::Classic, GameMode::Offline);
        assert_eq!(game.status(), GameStatus::Waiting);
        assert_eq!(game.active_player(), Player::X);
        assert!(game.id().starts_with("game_"));
        assert_eq!(game.start().status(), GameStatus::Playing);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_game_id(), generate_game_id());
    }

    #[test]
    fn test_apply_move_leaves_prior_state_untouched() {
        let game = playing(Variant::Classic);
        let next = game.apply_move(Coord::new(1, 1), Player::X).unwrap();
        assert!(game.board().is_empty_at(Coord::new(1, 1)));
        assert!(game.moves().is_empty());
        assert_eq!(next.moves().len(), 1);
        assert_eq!(next.moves()[0].sequence, 0);
        assert_eq!(next.active_player(), Player::O);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let game = playing(Variant::Classic)
            .apply_move(Coord::new(0, 0), Player::X)
            .unwrap();
        assert_eq!(
            game.apply_move(Coord::new(0, 0), Player::O),
            Err(MoveError::CellOccupied(Coord::new(0, 0)))
        );
        assert_eq!(game.active_player(), Player::O);
    }

    #[test]
    fn test_winning_move_finishes_game() {
        let mut game = playing(Variant::Classic);
        for (coord, player) in [
            (Coord::new(0, 0), Player::X),
            (Coord::new(1, 0), Player::O),
            (Coord::new(1, 1), Player::X),
            (Coord::new(2, 0), Player::O),
            (Coord::new(2, 2), Player::X),
        ] {
            game = game.apply_move(coord, player).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner(), Some(Player::X));
        let pattern = game.winning_pattern().unwrap();
        assert_eq!(pattern.line, LineType::Diagonal);
        assert_eq!(
            game.apply_move(Coord::new(0, 1), Player::X),
            Err(MoveError::GameNotActive(GameStatus::Finished))
        );
    }

    #[test]
    fn test_reset_keeps_identity() {
        let game = playing(Variant::ThreeD).with_players("alice", "bob");
        let game = game.apply_move(Coord::layered(1, 1, 1), Player::X).unwrap();
        let fresh = game.reset();
        assert_eq!(fresh.id(), game.id());
        assert_eq!(fresh.variant(), Variant::ThreeD);
        assert_eq!(fresh.player_id(Player::O), Some("bob"));
        assert_eq!(fresh.status(), GameStatus::Waiting);
        assert!(fresh.moves().is_empty());
    }

    #[test]
    fn test_legal_moves_for_gravity_variant() {
        let game = playing(Variant::ConnectFour);
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|c| c.row == 5));

        let game = game.apply_move(Coord::new(5, 0), Player::X).unwrap();
        assert_eq!(game.drop_position(0), Some(Coord::new(4, 0)));
        assert!(game.legal_moves().contains(&Coord::new(4, 0)));
    }

    #[test]
    fn test_legal_moves_empty_when_waiting() {
        let game = create_game_state(Variant::Classic, GameMode::Offline);
        assert!(game.legal_moves().is_empty());
        assert_eq!(playing(Variant::Classic).legal_moves().len(), 9);
    }

    #[test]
    fn test_replay_rebuilds_state() {
        let game = playing(Variant::Extended4);
        let played = game
            .apply_move(Coord::new(0, 0), Player::X)
            .and_then(|g| g.apply_move(Coord::new(3, 3), Player::O))
            .and_then(|g| g.apply_move(Coord::new(1, 1), Player::X))
            .unwrap();
        let rebuilt = game.replay(played.moves()).unwrap();
        assert_eq!(rebuilt.board(), played.board());
        assert_eq!(rebuilt.moves(), played.moves());
        assert_eq!(rebuilt.active_player(), played.active_player());
    }
}
