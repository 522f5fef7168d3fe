//! search モジュールのテスト


use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::UltimateBoard;
use crate::eval::evaluate;
use crate::types::{Move, Player, Square, Value};

/// 固定シードのランダム対局で `plies` 手進めた局面と次の手番
pub(super) fn random_position(seed: u64, plies: usize) -> (UltimateBoard, Player) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut board = UltimateBoard::new();
    let mut mover = Player::Cross;
    for _ in 0..plies {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        board.apply(mv, mover).unwrap();
        mover = mover.opponent();
    }
    (board, mover)
}

/// 枝刈りなしの minimax（参照実装）
pub(super) fn minimax(board: &mut UltimateBoard, mover: Player, perspective: Player, depth: u32) -> Value {
    if depth == 0 || board.is_finished() {
        return evaluate(board, perspective);
    }
    let moves = board.legal_moves();
    let values = moves.iter().map(|&mv| {
        let previous = board.forced();
        board.apply(mv, mover).unwrap();
        let value = minimax(board, mover.opponent(), perspective, depth - 1);
        board.undo(mv, previous);
        value
    });
    let best = if mover == perspective {
        values.max()
    } else {
        values.min()
    };
    best.unwrap_or_else(|| evaluate(board, perspective))
}

pub(super) fn mv(row: u8, col: u8) -> Move {
    Move::new(row, col).unwrap()
}

pub(super) fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

/// X が対角の 2 小盤を取り、小盤 (2,2) で上段 2 マス。O の手番で誘導先は (0,1)
pub(super) fn global_threat() -> UltimateBoard {
    let mut board = UltimateBoard::new();
    for board_sq in [sq(0, 0), sq(1, 1)] {
        for col in 0..3 {
            board.apply(Move::from_parts(board_sq, sq(0, col)), Player::Cross).unwrap();
        }
    }
    board.apply(mv(6, 6), Player::Cross).unwrap();
    board.apply(mv(6, 7), Player::Cross).unwrap();
    board
}

/// `global_threat` から O が小盤 (0,1) のマス (2,2) に打ち、X を (2,2) へ誘導した局面
pub(super) fn one_move_from_global_win() -> UltimateBoard {
    let mut board = global_threat();
    board.apply(mv(2, 5), Player::Nought).unwrap();
    board
}
