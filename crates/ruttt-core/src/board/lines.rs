//! 3×3 盤の勝ちライン
//!
//! 小盤のマスにも、全体盤の小盤の並びにも同じ 8 本を使う。

use crate::types::Square;

const S: [Square; 9] = Square::ALL;

/// 勝ちライン（行 3 本、列 3 本、対角線 2 本）
pub const LINES: [[Square; 3]; 8] = [
    [S[0], S[1], S[2]],
    [S[3], S[4], S[5]],
    [S[6], S[7], S[8]], // rows
    [S[0], S[3], S[6]],
    [S[1], S[4], S[7]],
    [S[2], S[5], S[8]], // columns
    [S[0], S[4], S[8]],
    [S[2], S[4], S[6]], // diagonals
];

/// `owned` が真になるマスだけで埋まったラインがあるか
#[inline]
pub fn any_line(owned: impl Fn(Square) -> bool) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&sq| owned(sq)))
}
