// 汎用の算術ヘルパー
//
// 関数呼び出しなので各引数はちょうど1回だけ評価される。
// オーバーフローの扱いは数値型に従う（呼び出し側の責任）。

use std::ops::{Add, Mul, Neg};

/// `a > b` なら `a`、それ以外は `b`
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// `a < b` なら `a`、それ以外は `b`
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// 絶対値。`T::default()` をゼロとして扱う
pub fn abs<T>(a: T) -> T
where
    T: PartialOrd + Default + Neg<Output = T>,
{
    if a > T::default() {
        a
    } else {
        -a
    }
}

pub fn square<T>(a: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    a * a
}

/// `a² + b²`
pub fn sum_of_squares<T>(a: T, b: T) -> T
where
    T: Mul<Output = T> + Add<Output = T> + Copy,
{
    square(a) + square(b)
}
