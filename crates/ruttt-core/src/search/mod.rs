//! 探索モジュール
//!
//! - `Searcher`: 締切付き Alpha-Beta 探索
//! - `select_move*`: 反復深化による指し手選択（`Timeout` はここで吸収する）
//! - `SearchLimits`: 思考時間と深さの上限

mod alpha_beta;
mod iterative;
mod limits;
mod stats;

#[cfg(test)]
mod tests;

pub use alpha_beta::Searcher;
pub use iterative::{select_move, select_move_until, select_move_with};
pub use limits::{DEFAULT_BUDGET_MS, DEFAULT_MAX_DEPTH, SearchLimits};
pub use stats::{SearchOutcome, SearchStats};
