#[cfg(test)]
mod tests {
    use crate::error::ToolError;
    use crate::operations::*;
    use num_bigint::{BigInt, BigUint};

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(add(&big(2), &big(3)), big(5));
        assert_eq!(add(&big(-7), &big(4)), big(-3));
        assert_eq!(subtract(&big(10), &big(4)), big(6));
        assert_eq!(subtract(&big(4), &big(10)), big(-6));
        assert_eq!(multiply(&big(6), &big(7)), big(42));
        assert_eq!(multiply(&big(-3), &big(5)), big(-15));
    }

    #[test]
    fn test_integer_arithmetic_does_not_overflow() {
        let max = big(i64::MAX);
        assert_eq!(add(&max, &big(1)).to_string(), "9223372036854775808");
        assert_eq!(
            subtract(&big(i64::MIN), &big(1)).to_string(),
            "-9223372036854775809"
        );
        assert_eq!(
            multiply(&max, &max).to_string(),
            "85070591730234615847396907784232501249"
        );

        let beyond = BigInt::from(u64::MAX);
        assert_eq!(add(&beyond, &beyond).to_string(), "36893488147419103230");
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
        assert_eq!(divide(-9.0, 3.0).unwrap(), -3.0);
        assert_eq!(divide(0.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_divide_by_zero() {
        let expected = ToolError::InvalidArgument("Cannot divide by zero".to_string());
        assert_eq!(divide(1.0, 0.0), Err(expected.clone()));
        // 負のゼロも同様
        assert_eq!(divide(1.0, -0.0), Err(expected));
    }

    #[test]
    fn test_greet() {
        assert_eq!(greet("World", None), "Hello, World!");
        assert_eq!(greet("World", Some("Hi")), "Hi, World!");
        assert_eq!(greet("", Some("Hey")), "Hey, !");
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(calculate_factorial(&big(0)).unwrap(), BigUint::from(1u32));
        assert_eq!(calculate_factorial(&big(1)).unwrap(), BigUint::from(1u32));
        assert_eq!(calculate_factorial(&big(5)).unwrap(), BigUint::from(120u32));
        assert_eq!(
            calculate_factorial(&big(20)).unwrap(),
            BigUint::from(2_432_902_008_176_640_000u64)
        );
    }

    #[test]
    fn test_factorial_exceeds_native_integers() {
        let result = calculate_factorial(&big(30)).unwrap();
        assert_eq!(result.to_string(), "265252859812191058636308480000000");
    }

    #[test]
    fn test_factorial_negative() {
        let result = calculate_factorial(&big(-1));
        assert!(matches!(result, Err(ToolError::InvalidArgument(msg)) if msg.contains("negative")));
    }
}
