//! 盤面表現モジュール
//!
//! - `SubBoard`: 3×3 の小盤。`place` / `clear` で更新する
//! - `UltimateBoard`: 小盤 3×3 と「次に指すべき小盤」のポインタ
//! - `AppliedMove`: `apply_scoped` が返す巻き戻しガード
//!
//! 探索は盤面をその場で書き換え、`undo` で厳密に元へ戻す。
//! 直前の `forced` を退避して `undo` に渡すことが巻き戻しの唯一の手段。

mod lines;
mod scoped;
mod sub_board;
mod ultimate;

pub use lines::LINES;
pub use scoped::AppliedMove;
pub use sub_board::{SquareList, SubBoard};
pub use ultimate::UltimateBoard;
