//! 評価値（Value）
//!
//! 内部表現は 0.1 点単位の整数。角の小盤の重み 1.2 を誤差なく扱い、
//! 全順序で比較できるようにするため浮動小数点は使わない。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 評価値（0.1 点単位）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// 1 点あたりの内部値
    pub const SCALE: i32 = 10;

    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 全体盤の勝ち（10000 点）
    ///
    /// 勝敗の付いていない局面の評価値はこの絶対値を超えない。
    pub const WIN: Value = Value(10_000 * Self::SCALE);
    /// 無限大（探索窓の初期値）
    pub const INFINITE: Value = Value(Self::WIN.0 * 10);

    /// 内部値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 点数に変換
    #[inline]
    pub fn to_points(self) -> f64 {
        f64::from(self.0) / f64::from(Self::SCALE)
    }

    /// 勝敗が確定したスコアかどうか
    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= -Self::WIN.0
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Value {
    #[inline]
    fn add_assign(&mut self, rhs: Value) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Value {
    type Output = Value;

    #[inline]
    fn mul(self, rhs: i32) -> Value {
        Value(self.0 * rhs)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.to_points())
    }
}
