//! Property-based tests for the arithmetic helpers

#[cfg(test)]
mod tests {
    use crate::arithmetic::*;
    use proptest::prelude::*;

    // Keep operands small enough that i64 addition cannot overflow
    fn operand() -> impl Strategy<Value = i64> {
        -1_000_000_000_000i64..1_000_000_000_000
    }

    proptest! {
        #[test]
        fn test_sum_is_commutative(a in operand(), b in operand()) {
            prop_assert_eq!(sum(a, b), sum(b, a));
        }

        #[test]
        fn test_sum_has_zero_identity(a in operand()) {
            prop_assert_eq!(sum(a, 0), a);
        }

        #[test]
        fn test_subtract_equals_sum(a in operand(), b in operand()) {
            prop_assert_eq!(subtract(a, b), sum(a, b));
        }

        #[test]
        fn test_sum_concatenation_length(a in ".*", b in ".*") {
            let joined = sum(a.clone(), b.as_str());
            prop_assert_eq!(joined.len(), a.len() + b.len());
            prop_assert!(joined.starts_with(&a));
        }
    }
}
