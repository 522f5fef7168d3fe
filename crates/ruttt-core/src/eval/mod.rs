//! 静的評価
//!
//! 視点側 `perspective` から見た局面の望ましさを返す。盤面は変更しない。
//!
//! - 全体盤の勝ち/負け: `±Value::WIN`（他の項より常に大きい）
//! - 小盤ごとの項に、小盤の位置による重みを掛けて合計する
//!   - 中央 2.0、角 1.2、辺 1.0（中央の小盤は勝ちライン 4 本に属する）
//!   - 勝った小盤: `±100`
//!   - 未終了の小盤:
//!     - 2 マス自分・相手 0 マスのライン 1 本につき `±5`
//!     - 石数の差
//!     - 中央のマス `±2`
//!   - 引き分けで終わった小盤: 0

use crate::board::{LINES, SubBoard, UltimateBoard};
use crate::types::{Player, Square, Value};

/// 小盤の位置による重み（0.1 単位）
pub const BOARD_WEIGHTS: [[i32; 3]; 3] = [[12, 10, 12], [10, 20, 10], [12, 10, 12]];

/// 勝った小盤の点
pub const SUB_BOARD_WIN: i32 = 100;
/// あと 1 マスで揃うラインの点
pub const NEAR_WIN: i32 = 5;
/// 小盤の中央マスの点
pub const CENTER_CELL: i32 = 2;

/// 小盤の位置の重み
#[inline]
pub fn board_weight(sq: Square) -> Value {
    Value::new(BOARD_WEIGHTS[sq.row() as usize][sq.col() as usize])
}

/// 局面評価
pub fn evaluate(board: &UltimateBoard, perspective: Player) -> Value {
    match board.winner() {
        Some(p) if p == perspective => return Value::WIN,
        Some(_) => return -Value::WIN,
        None => {}
    }

    Square::ALL
        .iter()
        .map(|&sq| board_weight(sq) * sub_board_points(board.sub_board(sq), perspective))
        .fold(Value::ZERO, |acc, v| acc + v)
}

/// 小盤 1 枚の点（重みを掛ける前）
pub fn sub_board_points(sub: &SubBoard, perspective: Player) -> i32 {
    let opponent = perspective.opponent();
    if sub.has_line(perspective) {
        return SUB_BOARD_WIN;
    }
    if sub.has_line(opponent) {
        return -SUB_BOARD_WIN;
    }
    if sub.is_finished() {
        return 0;
    }

    let mut points = 0;
    for line in &LINES {
        let mine = line.iter().filter(|&&sq| sub.get(sq) == Some(perspective)).count();
        let theirs = line.iter().filter(|&&sq| sub.get(sq) == Some(opponent)).count();
        match (mine, theirs) {
            (2, 0) => points += NEAR_WIN,
            (0, 2) => points -= NEAR_WIN,
            _ => {}
        }
    }

    points += sub.count(perspective) - sub.count(opponent);

    match sub.get(Square::CENTER) {
        Some(p) if p == perspective => points += CENTER_CELL,
        Some(_) => points -= CENTER_CELL,
        None => {}
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board_is_zero() {
        let board = UltimateBoard::new();
        assert_eq!(evaluate(&board, Player::Cross), Value::ZERO);
        assert_eq!(evaluate(&board, Player::Nought), Value::ZERO);
    }

    #[test]
    fn test_weights() {
        assert_eq!(board_weight(Square::CENTER).to_points(), 2.0);
        assert_eq!(board_weight(sq(0, 0)).to_points(), 1.2);
        assert_eq!(board_weight(sq(2, 2)).to_points(), 1.2);
        assert_eq!(board_weight(sq(0, 1)).to_points(), 1.0);
        assert_eq!(board_weight(sq(1, 2)).to_points(), 1.0);
    }

    #[test]
    fn test_top_row_near_win() {
        // 小盤 (0,1) の上段に X が 2 つ
        let mut board = UltimateBoard::new();
        board.apply(mv(0, 3), Player::Cross).unwrap();
        board.apply(mv(0, 4), Player::Cross).unwrap();

        let sub = board.sub_board(sq(0, 1));
        // ニアウィン 5 + 石数 2
        assert_eq!(sub_board_points(sub, Player::Cross), NEAR_WIN + 2);
        assert_eq!(sub_board_points(sub, Player::Nought), -(NEAR_WIN + 2));
        assert_eq!(evaluate(&board, Player::Cross), Value::new(70));
        assert!(evaluate(&board, Player::Cross) > Value::ZERO);
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let mut board = UltimateBoard::new();
        board.apply(mv(0, 0), Player::Cross).unwrap();
        board.apply(mv(0, 1), Player::Cross).unwrap();
        board.apply(mv(0, 2), Player::Nought).unwrap();
        let sub = board.sub_board(sq(0, 0));
        // ラインの脅威なし、石数差 +1
        assert_eq!(sub_board_points(sub, Player::Cross), 1);
    }

    #[test]
    fn test_center_cell_bonus() {
        let mut board = UltimateBoard::new();
        board.apply(mv(4, 4), Player::Nought).unwrap();
        let sub = board.sub_board(Square::CENTER);
        assert_eq!(sub_board_points(sub, Player::Nought), 1 + CENTER_CELL);
        // 中央の小盤は重み 2.0
        assert_eq!(evaluate(&board, Player::Nought), Value::new(60));
        assert_eq!(evaluate(&board, Player::Cross), Value::new(-60));
    }

    #[test]
    fn test_won_sub_board_is_flat() {
        let mut board = UltimateBoard::new();
        for col in 0..3 {
            board.apply(Move::from_parts(sq(2, 0), sq(1, col)), Player::Cross).unwrap();
        }
        // 相手の石が残っていても勝った小盤は ±100 のみ
        board.apply(Move::from_parts(sq(2, 0), sq(0, 0)), Player::Nought).unwrap();
        let sub = board.sub_board(sq(2, 0));
        assert_eq!(sub_board_points(sub, Player::Cross), SUB_BOARD_WIN);
        assert_eq!(evaluate(&board, Player::Cross), Value::new(1200));
    }

    #[test]
    fn test_global_win_dominates() {
        let mut board = UltimateBoard::new();
        for row in 0..3 {
            for col in 0..3 {
                board.apply(Move::from_parts(sq(row, row), sq(0, col)), Player::Cross).unwrap();
            }
        }
        assert!(evaluate(&board, Player::Cross) >= Value::WIN);
        assert!(evaluate(&board, Player::Cross).to_points() >= 10_000.0);
        assert_eq!(evaluate(&board, Player::Nought), -Value::WIN);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let mut board = UltimateBoard::new();
        for (r, c, p) in [(0, 0, Player::Cross), (1, 1, Player::Nought), (4, 4, Player::Cross), (3, 5, Player::Nought)] {
            board.apply(mv(r, c), p).unwrap();
        }
        assert_eq!(evaluate(&board, Player::Cross), -evaluate(&board, Player::Nought));
    }
}
