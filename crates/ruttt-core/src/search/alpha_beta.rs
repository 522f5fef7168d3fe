//! Alpha-Beta探索の実装
//!
//! - 深さ制限付き minimax + alpha-beta 枝刈り（fail-soft）
//! - 手の並べ替えはしない（`legal_moves()` の順）
//! - 各ノードの先頭で締切を確認し、過ぎていれば `Timeout` で中断する
//!
//! 評価は常に `perspective` 側から行う。`perspective` の手番が max 側、
//! 相手の手番が min 側になるので、再帰のどの深さでも値を比較できる。

use std::time::Instant;

use super::stats::SearchStats;
use crate::board::UltimateBoard;
use crate::error::{SearchError, SearchResult};
use crate::eval::evaluate;
use crate::types::{Move, Player, Value};

/// 1 回の探索の作業領域
pub struct Searcher {
    perspective: Player,
    deadline: Instant,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(perspective: Player, deadline: Instant) -> Self {
        Self {
            perspective,
            deadline,
            stats: SearchStats::default(),
        }
    }

    /// 評価の視点
    #[inline]
    pub fn perspective(&self) -> Player {
        self.perspective
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[inline]
    fn check_abort(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Alpha-Beta探索
    ///
    /// 戻り値は `(評価値, 最善手)`。葉・終局では最善手は `None`。
    /// `Err(Timeout)` のときも盤面は呼び出し前の状態に戻っている。
    pub fn search(
        &mut self,
        board: &mut UltimateBoard,
        mover: Player,
        mut alpha: Value,
        mut beta: Value,
        depth: u32,
    ) -> SearchResult<(Value, Option<Move>)> {
        if self.check_abort() {
            return Err(SearchError::Timeout);
        }
        self.stats.nodes += 1;

        if depth == 0 || board.is_finished() {
            return Ok((evaluate(board, self.perspective), None));
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok((evaluate(board, self.perspective), None));
        }

        let maximizing = mover == self.perspective;
        let mut best_value = if maximizing {
            -Value::INFINITE
        } else {
            Value::INFINITE
        };
        let mut best_move = None;

        for mv in moves {
            let value = {
                let mut child = board.apply_scoped(mv, mover)?;
                self.search(&mut child, mover.opponent(), alpha, beta, depth - 1)?.0
            };

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        Ok((best_value, best_move))
    }
}
