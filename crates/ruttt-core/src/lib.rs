//! ruttt-core: ultimate tic-tac-toe（9×9 の二段三目並べ）の思考エンジン
//!
//! - `board`: 小盤・全体盤と、巻き戻し付きの着手
//! - `eval`: 静的評価
//! - `search`: 締切付き Alpha-Beta と反復深化による指し手選択
//! - `classic`: 通常の 3×3 三目並べの完全読み
//!
//! 探索は単一スレッドで、盤面はその場で書き換えて `undo` で戻す。

pub mod board;
pub mod classic;
pub mod error;
pub mod eval;
pub mod search;
pub mod types;

pub use board::{SubBoard, UltimateBoard};
pub use error::{BoardError, SearchError};
pub use search::{SearchLimits, SearchOutcome, select_move, select_move_with};
pub use types::{Move, Player, Square, Value};
