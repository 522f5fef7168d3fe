//! 基本型

mod player;
mod square;
mod value;

pub use player::Player;
pub use square::{Move, Square};
pub use value::Value;

/// 1 局面あたりの合法手リスト
///
/// 全体盤で指せる手は最大 81 手。
pub type MoveList = smallvec::SmallVec<[Move; 81]>;
