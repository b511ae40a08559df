//! Hashed game state with reversible history and repetition detection.

use crate::board::{Board, Color, parse_sfen, to_sfen};
use crate::hash::zobrist::compute_hash;
use crate::moves::execute::{apply_move, undo_move};
use crate::moves::movegen::{generate_legal_moves, is_in_check};
use crate::moves::notation::parse_move;
use crate::moves::types::Move;
use crate::moves::validate::validate_move;
use crate::status::{GameResult, get_game_result};

/// Positions repeating this often (current occurrence included) draw.
const REPETITION_LIMIT: usize = 4;

/// Everything needed to take one move back.
#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    pub mv: Move,
    /// Captured piece as it stood on the board, if any.
    pub captured: Option<crate::board::Piece>,
    /// Zobrist hash of the position before the move, for undo.
    pub hash_before: u64,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Half-moves played since this state was constructed.
    pub ply: u32,
    /// Full-move counter in SFEN terms; bumps when Black comes back on move.
    pub move_number: u32,
    pub history: Vec<MoveRecord>,
    /// One hash per visited position, the constructed position included.
    pub position_hashes: Vec<u64>,
    pub hash: u64,
    pub result: GameResult,
}

impl GameState {
    /// A fresh game from the canonical starting position.
    pub fn new() -> Self {
        GameState::from_parts(Board::initial_position(), Color::Black, 1)
    }

    /// Load a position from SFEN, rebuilding the hash from scratch.
    pub fn from_sfen(sfen: &str) -> Result<Self, String> {
        let (board, side, movenum) = parse_sfen(sfen)?;
        Ok(GameState::from_parts(board, side, movenum))
    }

    fn from_parts(board: Board, side: Color, movenum: u32) -> Self {
        let hash = compute_hash(&board, side);
        let mut game = GameState {
            board,
            side_to_move: side,
            ply: 0,
            move_number: movenum,
            history: Vec::new(),
            position_hashes: vec![hash],
            hash,
            result: GameResult::Ongoing,
        };
        game.result = game.check_game_over();
        game
    }

    pub fn to_sfen(&self) -> String {
        to_sfen(&self.board, self.side_to_move, self.move_number)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(&self.board, self.side_to_move)
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Validate and play a move. An invalid move leaves the state untouched
    /// and returns false.
    pub fn make_move(&mut self, mv: Move) -> bool {
        if validate_move(&self.board, mv, self.side_to_move).is_err() {
            return false;
        }
        self.apply_validated(mv);
        true
    }

    /// Parse, validate and play a USI move, surfacing the failure reason.
    pub fn make_move_usi(&mut self, notation: &str) -> Result<(), String> {
        let mv = parse_move(notation, &self.board, self.side_to_move)
            .ok_or_else(|| "Invalid move notation".to_string())?;
        validate_move(&self.board, mv, self.side_to_move)?;
        self.apply_validated(mv);
        Ok(())
    }

    fn apply_validated(&mut self, mv: Move) {
        // Re-derive the capture from the board so hand-built moves with a
        // stale captured field cannot corrupt apply/undo symmetry.
        let mv = if mv.is_drop() {
            mv
        } else {
            let captured = self.board.piece_at(mv.to_sq()).map(|(pt, _)| pt);
            Move::board_move(mv.from_sq(), mv.to_sq(), mv.piece(), mv.is_promotion(), captured)
        };

        self.history.push(MoveRecord {
            mv,
            captured: mv.captured(),
            hash_before: self.hash,
        });

        apply_move(&mut self.board, mv, self.side_to_move);
        self.side_to_move = self.side_to_move.opposite();
        self.ply += 1;
        if self.side_to_move == Color::Black {
            self.move_number += 1;
        }
        self.hash = compute_hash(&self.board, self.side_to_move);
        self.position_hashes.push(self.hash);
        self.result = self.check_game_over();
    }

    /// Take back the last move. Returns false when there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };

        if self.side_to_move == Color::Black {
            self.move_number -= 1;
        }
        self.side_to_move = self.side_to_move.opposite();
        self.ply -= 1;

        undo_move(&mut self.board, record.mv, self.side_to_move);
        self.position_hashes.pop();
        self.hash = record.hash_before;
        self.result = GameResult::Ongoing;
        true
    }

    /// Move-based terminal classification, with fourfold repetition layered
    /// on top.
    pub fn check_game_over(&self) -> GameResult {
        let result = get_game_result(&self.board, self.side_to_move);
        let occurrences = self
            .position_hashes
            .iter()
            .filter(|&&h| h == self.hash)
            .count();
        if occurrences >= REPETITION_LIMIT {
            return GameResult::DrawRepetition;
        }
        result
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
