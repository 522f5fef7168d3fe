//! エラー型

/// 盤面操作のエラー
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// 既に埋まっているマスへの着手（盤面の同期ずれ）
    #[error("invalid move {row} {col}: cell is already taken")]
    InvalidMove { row: u8, col: u8 },

    /// 盤外の座標
    #[error("coordinates {row} {col} are out of range")]
    OutOfRange { row: i32, col: i32 },
}

/// 探索の中断理由
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// 持ち時間切れ。指し手選択の境界でのみ捕捉する
    #[error("search deadline exceeded")]
    Timeout,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// 探索結果の Result 型
pub type SearchResult<T> = Result<T, SearchError>;
