//! 登録されるツールの本体。すべて純粋関数で、状態を持たない。

use crate::error::{Result, ToolError};
use num_bigint::{BigInt, BigUint, Sign};

/// `greet` の `greeting` 省略時の値
pub const DEFAULT_GREETING: &str = "Hello";

// 整数は多倍長なのでオーバーフローしない
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

pub fn subtract(a: &BigInt, b: &BigInt) -> BigInt {
    a - b
}

pub fn multiply(a: &BigInt, b: &BigInt) -> BigInt {
    a * b
}

/// ゼロ除算は無限大や NaN を返さずエラーにする
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(ToolError::invalid_argument("Cannot divide by zero"));
    }
    Ok(a / b)
}

pub fn greet(name: &str, greeting: Option<&str>) -> String {
    format!("{}, {}!", greeting.unwrap_or(DEFAULT_GREETING), name)
}

/// 2..=n を順に掛ける。上限はない。
pub fn calculate_factorial(n: &BigInt) -> Result<BigUint> {
    if n.sign() == Sign::Minus {
        return Err(ToolError::invalid_argument(
            "Factorial is not defined for negative numbers",
        ));
    }
    let n = u64::try_from(n)
        .map_err(|_| ToolError::invalid_argument("Factorial input is too large"))?;

    let mut result = BigUint::from(1u32);
    for i in 2..=n {
        result *= i;
    }
    Ok(result)
}
