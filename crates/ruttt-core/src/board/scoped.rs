//! スコープ付き着手
//!
//! `apply_scoped` が返すガードは Drop 時に必ず `undo` する。
//! 探索中に `?` で抜けても盤面は着手前に戻る。

use std::ops::{Deref, DerefMut};

use super::ultimate::UltimateBoard;
use crate::error::BoardError;
use crate::types::{Move, Player, Square};

/// 適用中の着手
pub struct AppliedMove<'a> {
    board: &'a mut UltimateBoard,
    mv: Move,
    previous_forced: Option<Square>,
}

impl UltimateBoard {
    /// `forced` を退避してから着手し、巻き戻しガードを返す
    pub fn apply_scoped(&mut self, mv: Move, player: Player) -> Result<AppliedMove<'_>, BoardError> {
        let previous_forced = self.forced();
        self.apply(mv, player)?;
        Ok(AppliedMove {
            board: self,
            mv,
            previous_forced,
        })
    }
}

impl AppliedMove<'_> {
    /// 適用中の手
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for AppliedMove<'_> {
    type Target = UltimateBoard;

    #[inline]
    fn deref(&self) -> &UltimateBoard {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut UltimateBoard {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.mv, self.previous_forced);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut board = UltimateBoard::new();
        board.apply(mv(1, 1), Player::Cross).unwrap();
        let before = board.clone();
        {
            let applied = board.apply_scoped(mv(4, 4), Player::Nought).unwrap();
            assert_eq!(applied.cell(mv(4, 4)), Some(Player::Nought));
            assert_eq!(applied.mv(), mv(4, 4));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut board = UltimateBoard::new();
        let before = board.clone();
        {
            let mut first = board.apply_scoped(mv(0, 0), Player::Cross).unwrap();
            let second = first.apply_scoped(mv(1, 1), Player::Nought).unwrap();
            assert_eq!(second.forced(), Some(Square::new(1, 1).unwrap()));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_undoes_on_error_path() {
        fn fails_inside(board: &mut UltimateBoard) -> Result<(), SearchError> {
            let _applied = board.apply_scoped(mv(8, 8), Player::Cross)?;
            Err(SearchError::Timeout)
        }

        let mut board = UltimateBoard::new();
        let before = board.clone();
        assert_eq!(fails_inside(&mut board), Err(SearchError::Timeout));
        assert_eq!(board, before);
    }

    #[test]
    fn test_failed_apply_leaves_board_untouched() {
        let mut board = UltimateBoard::new();
        board.apply(mv(5, 5), Player::Cross).unwrap();
        let before = board.clone();
        assert!(board.apply_scoped(mv(5, 5), Player::Nought).is_err());
        assert_eq!(board, before);
    }
}
