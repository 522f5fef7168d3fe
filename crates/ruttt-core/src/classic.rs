//! 通常の三目並べ（3×3）
//!
//! 盤が小さいので深さ制限も締切も無しに終局まで読み切る。
//! 終局の値は勝ち 1 点、負け -1 点、引き分け 0 点。

use log::debug;

use crate::board::SubBoard;
use crate::types::{Player, Square, Value};

/// 勝ちの値（1 点）
pub const CLASSIC_WIN: Value = Value::new(Value::SCALE);
/// 引き分けの値
pub const CLASSIC_DRAW: Value = Value::ZERO;

/// 終局までの Alpha-Beta 探索
///
/// 戻り値は `(評価値, 最善手)`。終局なら最善手は `None`。
pub fn solve(
    board: &mut SubBoard,
    mover: Player,
    perspective: Player,
    mut alpha: Value,
    mut beta: Value,
) -> (Value, Option<Square>) {
    if board.has_line(perspective) {
        return (CLASSIC_WIN, None);
    }
    if board.has_line(perspective.opponent()) {
        return (-CLASSIC_WIN, None);
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return (CLASSIC_DRAW, None);
    }

    let maximizing = mover == perspective;
    let mut best_value = if maximizing {
        -Value::INFINITE
    } else {
        Value::INFINITE
    };
    let mut best_move = None;

    for sq in moves {
        // legal_moves は空きマスだけを返す
        let placed = board.place(sq, mover);
        debug_assert!(placed.is_ok(), "classic move {sq} on occupied square");
        if placed.is_err() {
            continue;
        }
        let (value, _) = solve(board, mover.opponent(), perspective, alpha, beta);
        board.clear(sq);

        if maximizing {
            if value > best_value {
                best_value = value;
                best_move = Some(sq);
            }
            alpha = alpha.max(value);
        } else {
            if value < best_value {
                best_value = value;
                best_move = Some(sq);
            }
            beta = beta.min(value);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_value, best_move)
}

/// 最善手を選ぶ。合法手が無ければ (0,0)
pub fn select_move(board: &mut SubBoard, player: Player) -> Square {
    let (value, best) = solve(board, player, player, -Value::INFINITE, Value::INFINITE);
    debug!("classic value={} move={:?}", value, best);
    best.unwrap_or(Square::ALL[0])
}
