//! 小盤（3×3）

use std::fmt;

use smallvec::SmallVec;

use super::lines::any_line;
use crate::error::BoardError;
use crate::types::{Player, Square};

/// 小盤内の合法手
pub type SquareList = SmallVec<[Square; 9]>;

/// 3×3 の小盤
///
/// 状態の変更は `place` / `clear` のみ。履歴は持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubBoard {
    cells: [[Option<Player>; 3]; 3],
}

impl SubBoard {
    pub const fn new() -> Self {
        Self {
            cells: [[None; 3]; 3],
        }
    }

    /// マスの状態
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Player> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// 合法手。どちらかがラインを揃えていれば空
    pub fn legal_moves(&self) -> SquareList {
        if self.winner().is_some() {
            return SquareList::new();
        }
        Square::ALL
            .iter()
            .copied()
            .filter(|&sq| self.is_empty_at(sq))
            .collect()
    }

    /// `player` が 1 ライン揃えているか
    #[inline]
    pub fn has_line(&self, player: Player) -> bool {
        any_line(|sq| self.get(sq) == Some(player))
    }

    /// ラインを揃えた側
    pub fn winner(&self) -> Option<Player> {
        [Player::Cross, Player::Nought]
            .into_iter()
            .find(|&p| self.has_line(p))
    }

    /// 勝敗が付いたか、空きマスが無い
    pub fn is_finished(&self) -> bool {
        self.winner().is_some() || Square::ALL.iter().all(|&sq| !self.is_empty_at(sq))
    }

    /// `player` の石の数
    pub fn count(&self, player: Player) -> i32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(player))
            .count() as i32
    }

    /// 着手。埋まっているマスなら `InvalidMove`
    pub fn place(&mut self, sq: Square, player: Player) -> Result<(), BoardError> {
        let cell = &mut self.cells[sq.row() as usize][sq.col() as usize];
        if cell.is_some() {
            return Err(BoardError::InvalidMove {
                row: sq.row(),
                col: sq.col(),
            });
        }
        *cell = Some(player);
        Ok(())
    }

    /// マスを空に戻す
    ///
    /// 直前の `place` と対になる呼び出しであることは呼び出し側が保証する。
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        debug_assert!(!self.is_empty_at(sq), "clear on empty square {sq}");
        self.cells[sq.row() as usize][sq.col() as usize] = None;
    }

    /// 1 行分の表示（`X.O` 形式）
    pub(crate) fn row_string(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .map(|c| c.map_or('.', Player::symbol))
            .collect()
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "{}", self.row_string(row))?;
        }
        Ok(())
    }
}
