//! 探索統計と探索結果

use serde::{Deserialize, Serialize};

use crate::types::{Move, Value};

/// 探索統計カウンタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 総ノード数（探索関数の呼び出し回数）
    pub nodes: u64,
}

/// 指し手選択の結果
///
/// `score` / `depth` は最後に完了した反復のもの。1 回も完了しなければ `None` / 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: Option<Value>,
    pub depth: u32,
    pub nodes: u64,
    pub timed_out: bool,
    pub elapsed_ms: u64,
}

impl SearchOutcome {
    /// 探索前の初期値
    pub fn provisional(best_move: Move) -> Self {
        Self {
            best_move,
            score: None,
            depth: 0,
            nodes: 0,
            timed_out: false,
            elapsed_ms: 0,
        }
    }

    /// 合法手が無いときの結果
    pub fn fallback() -> Self {
        Self::provisional(Move::FALLBACK)
    }

    /// 1 回以上の反復が完了したか
    #[inline]
    pub fn completed(&self) -> bool {
        self.depth > 0
    }
}
