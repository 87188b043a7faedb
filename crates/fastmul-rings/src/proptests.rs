//! Property-based tests for the coefficient fields.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::finite_field::GF998244353;
    use crate::rationals::Q;
    use crate::traits::{Field, Ring};

    fn small_q() -> impl Strategy<Value = Q> {
        (-1000i64..1000i64, 1i64..100i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn small_gf() -> impl Strategy<Value = GF998244353> {
        any::<u64>().prop_map(GF998244353::new)
    }

    proptest! {
        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(a.clone() * (b.clone() + c.clone()), a.clone() * b + a * c);
        }

        #[test]
        fn q_division_inverts_multiplication(a in small_q(), b in small_q()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((a.clone() * b.clone()).field_div(&b), a);
        }

        #[test]
        fn q_pow_adds_exponents(a in small_q(), m in 0u32..6, n in 0u32..6) {
            prop_assert_eq!(a.pow(m) * a.pow(n), a.pow(m + n));
        }

        #[test]
        fn gf_additive_inverse(a in small_gf()) {
            prop_assert!((a + (-a)).is_zero());
        }

        #[test]
        fn gf_inverse(a in small_gf()) {
            prop_assume!(!a.is_zero());
            prop_assert!((a * a.inv().unwrap()).is_one());
        }

        #[test]
        fn gf_pow_matches_repeated_mul(a in small_gf(), n in 0u32..20) {
            let naive = (0..n).fold(GF998244353::one(), |acc, _| acc * a);
            prop_assert_eq!(a.pow(n), naive);
        }
    }
}
