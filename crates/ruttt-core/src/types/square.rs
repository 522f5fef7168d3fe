//! 座標（Square / Move）
//!
//! - `Square`: 3×3 の座標。小盤内のマスと、全体盤上の小盤の位置の両方に使う
//! - `Move`: 9×9 の全体座標。`board()` / `cell()` で小盤とマスに分解できる

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// 3×3 座標（row, col ともに [0, 3)）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 一辺のマス数
    pub const SIDE: u8 = 3;
    /// 中央
    pub const CENTER: Square = Square { row: 1, col: 1 };

    /// 全 9 マス（行優先）
    pub const ALL: [Square; 9] = [
        Square { row: 0, col: 0 },
        Square { row: 0, col: 1 },
        Square { row: 0, col: 2 },
        Square { row: 1, col: 0 },
        Square { row: 1, col: 1 },
        Square { row: 1, col: 2 },
        Square { row: 2, col: 0 },
        Square { row: 2, col: 1 },
        Square { row: 2, col: 2 },
    ];

    /// 範囲チェック付きで生成
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < Self::SIDE && col < Self::SIDE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 行優先のインデックス（0..9）
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * Self::SIDE + self.col) as usize
    }

    /// 角（(0,0), (0,2), (2,0), (2,2)）かどうか
    #[inline]
    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// 指し手（全体盤の 9×9 座標）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// 全体盤の一辺
    pub const SIDE: u8 = 9;
    /// 合法手が無いときに返す手（プロトコル上の `0 0`）
    pub const FALLBACK: Move = Move { row: 0, col: 0 };

    /// 範囲チェック付きで生成
    pub fn new(row: u8, col: u8) -> Result<Move, BoardError> {
        if row < Self::SIDE && col < Self::SIDE {
            Ok(Move { row, col })
        } else {
            Err(BoardError::OutOfRange {
                row: row as i32,
                col: col as i32,
            })
        }
    }

    /// 小盤の位置と小盤内のマスから合成
    #[inline]
    pub const fn from_parts(board: Square, cell: Square) -> Move {
        Move {
            row: board.row * Square::SIDE + cell.row,
            col: board.col * Square::SIDE + cell.col,
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 着手先の小盤
    #[inline]
    pub const fn board(self) -> Square {
        Square {
            row: self.row / Square::SIDE,
            col: self.col / Square::SIDE,
        }
    }

    /// 小盤内のマス（= 次の手番が指すべき小盤）
    #[inline]
    pub const fn cell(self) -> Square {
        Square {
            row: self.row % Square::SIDE,
            col: self.col % Square::SIDE,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}
