//! 全体盤（小盤 3×3）

use std::fmt;

use super::lines::any_line;
use super::sub_board::SubBoard;
use crate::error::BoardError;
use crate::types::{Move, MoveList, Player, Square};

/// 全体盤
///
/// `forced` は直前の着手の小盤内座標（= 次に指すべき小盤）。
/// その小盤が終了していれば未終了の任意の小盤に指せる。
/// 対局開始時は `None`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UltimateBoard {
    boards: [[SubBoard; 3]; 3],
    forced: Option<Square>,
}

impl UltimateBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 小盤を参照
    #[inline]
    pub fn sub_board(&self, sq: Square) -> &SubBoard {
        &self.boards[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    fn sub_board_mut(&mut self, sq: Square) -> &mut SubBoard {
        &mut self.boards[sq.row() as usize][sq.col() as usize]
    }

    /// 次に指すべき小盤（制約なしなら `None`）
    #[inline]
    pub fn forced(&self) -> Option<Square> {
        self.forced
    }

    /// マスの状態
    #[inline]
    pub fn cell(&self, mv: Move) -> Option<Player> {
        self.sub_board(mv.board()).get(mv.cell())
    }

    /// 合法手（小盤は行優先、小盤内も行優先の順）
    ///
    /// 全体盤の勝敗が付いていれば空。
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.winner().is_some() {
            return moves;
        }

        if let Some(forced) = self.forced {
            let sub = self.sub_board(forced);
            if !sub.is_finished() {
                moves.extend(sub.legal_moves().into_iter().map(|cell| Move::from_parts(forced, cell)));
                return moves;
            }
        }

        for board_sq in Square::ALL {
            let sub = self.sub_board(board_sq);
            if sub.is_finished() {
                continue;
            }
            moves.extend(sub.legal_moves().into_iter().map(|cell| Move::from_parts(board_sq, cell)));
        }
        moves
    }

    /// 小盤の勝ちを 1 マスとみなしたライン判定
    ///
    /// 引き分けで終わった小盤はどちらの所有にもならない。
    #[inline]
    pub fn has_line(&self, player: Player) -> bool {
        any_line(|sq| self.sub_board(sq).has_line(player))
    }

    /// 全体盤の勝者
    pub fn winner(&self) -> Option<Player> {
        [Player::Cross, Player::Nought]
            .into_iter()
            .find(|&p| self.has_line(p))
    }

    /// 勝敗が付いたか、合法手が無い
    pub fn is_finished(&self) -> bool {
        self.winner().is_some() || Square::ALL.iter().all(|&sq| self.sub_board(sq).is_finished())
    }

    /// 着手
    ///
    /// 着手先の小盤が終了しているかに関わらず `forced` を小盤内座標に更新する。
    /// 終了した小盤への誘導は `legal_moves` 側で制約なしとして扱う。
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<(), BoardError> {
        self.sub_board_mut(mv.board())
            .place(mv.cell(), player)
            .map_err(|_| BoardError::InvalidMove {
                row: mv.row(),
                col: mv.col(),
            })?;
        self.forced = Some(mv.cell());
        Ok(())
    }

    /// 着手の巻き戻し
    ///
    /// `previous_forced` は `apply` 直前の `forced()` をそのまま渡すこと。
    pub fn undo(&mut self, mv: Move, previous_forced: Option<Square>) {
        self.sub_board_mut(mv.board()).clear(mv.cell());
        self.forced = previous_forced;
    }
}

impl fmt::Display for UltimateBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (band, boards) in self.boards.iter().enumerate() {
            if band > 0 {
                writeln!(f, "---+---+---")?;
            }
            for row in 0..3 {
                let line: Vec<String> = boards.iter().map(|b| b.row_string(row)).collect();
                writeln!(f, "{}", line.join("|"))?;
            }
        }
        match self.forced {
            Some(sq) => write!(f, "forced: {sq}"),
            None => write!(f, "forced: -"),
        }
    }
}
