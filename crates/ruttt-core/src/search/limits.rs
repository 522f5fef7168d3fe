//! 探索の制限
use std::time::{Duration, Instant};

/// 1 手あたりの既定の思考時間（ms）
///
/// 対局サーバの持ち時間より十分短くし、入出力の余裕を残す。
pub const DEFAULT_BUDGET_MS: u64 = 40;
/// 反復深化の最大深さ
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// 探索の制限（思考時間と深さの上限）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub budget: Duration,
    pub max_depth: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            budget: Duration::from_millis(DEFAULT_BUDGET_MS),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchLimits {
    pub fn new(budget: Duration, max_depth: u32) -> Self {
        Self { budget, max_depth }
    }

    /// 深さだけで打ち切る制限（テスト・解析用）
    pub fn depth_only(max_depth: u32) -> Self {
        Self {
            budget: Duration::from_secs(3600),
            max_depth,
        }
    }

    /// `start` からの締切
    #[inline]
    pub fn deadline_from(&self, start: Instant) -> Instant {
        start + self.budget
    }
}
