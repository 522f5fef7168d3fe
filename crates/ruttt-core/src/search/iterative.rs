//! 反復深化による指し手選択
//!
//! 深さ 1 から順に探索し、完了した最深の反復の手を採用する。
//! 締切を過ぎた反復は途中結果ごと捨てるので、いつ打ち切っても合法手が返る。

use std::time::Instant;

use log::debug;

use super::alpha_beta::Searcher;
use super::limits::SearchLimits;
use super::stats::SearchOutcome;
use crate::board::UltimateBoard;
use crate::error::{BoardError, SearchError};
use crate::types::{Move, Player, Value};

/// 既定の制限で指し手を選ぶ
///
/// 合法手が無ければ `Move::FALLBACK`。
pub fn select_move(board: &mut UltimateBoard, player: Player) -> Result<Move, BoardError> {
    select_move_with(board, player, &SearchLimits::default()).map(|outcome| outcome.best_move)
}

/// 制限を指定して指し手を選ぶ
pub fn select_move_with(
    board: &mut UltimateBoard,
    player: Player,
    limits: &SearchLimits,
) -> Result<SearchOutcome, BoardError> {
    let start = Instant::now();
    select_move_until(board, player, limits.deadline_from(start), limits.max_depth)
}

/// 締切を指定して指し手を選ぶ
///
/// `Timeout` はここで捕捉し、外には出さない。
/// `BoardError` は盤面の不整合なのでそのまま返す。
pub fn select_move_until(
    board: &mut UltimateBoard,
    player: Player,
    deadline: Instant,
    max_depth: u32,
) -> Result<SearchOutcome, BoardError> {
    let start = Instant::now();
    let moves = board.legal_moves();
    let Some(&first) = moves.first() else {
        return Ok(SearchOutcome::fallback());
    };

    let mut outcome = SearchOutcome::provisional(first);
    let mut searcher = Searcher::new(player, deadline);

    for depth in 1..=max_depth {
        match searcher.search(board, player, -Value::INFINITE, Value::INFINITE, depth) {
            Ok((score, best)) => {
                if let Some(mv) = best {
                    outcome.best_move = mv;
                }
                outcome.score = Some(score);
                outcome.depth = depth;
                debug!(
                    "depth={} score={} move={} nodes={}",
                    depth,
                    score,
                    outcome.best_move,
                    searcher.stats().nodes
                );
                // 勝敗が読み切れたらそれ以上深くしても結果は変わらない
                if score.is_decisive() {
                    break;
                }
            }
            Err(SearchError::Timeout) => {
                debug!("timeout during depth={} keep depth={}", depth, outcome.depth);
                outcome.timed_out = true;
                break;
            }
            Err(SearchError::Board(err)) => return Err(err),
        }
    }

    outcome.nodes = searcher.stats().nodes;
    outcome.elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(outcome)
}
