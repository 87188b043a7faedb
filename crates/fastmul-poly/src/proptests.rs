//! Property-based tests: every fast path must agree with schoolbook
//! multiplication.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::algorithms::fast_mult::{FastMultiplier, Recursion};
    use crate::algorithms::multinomial::multinomial_power;
    use crate::algorithms::split::{shift_down, shift_up, split};
    use crate::config::MultConfig;
    use crate::ordering::MonomialOrder;
    use crate::poly::Poly;
    use crate::ring::PolyRing;
    use fastmul_rings::finite_field::GF998244353;
    use fastmul_rings::Q;

    fn arb_ring() -> impl Strategy<Value = PolyRing> {
        (
            1usize..=3,
            prop_oneof![
                Just(MonomialOrder::Lex),
                Just(MonomialOrder::Grlex),
                Just(MonomialOrder::Grevlex),
            ],
        )
            .prop_map(|(n, order)| PolyRing::new(n, order))
    }

    // Random polynomial with small integer coefficients
    fn arb_poly(ring: PolyRing, max_terms: usize, max_deg: u32) -> impl Strategy<Value = Poly<Q>> {
        vec((vec(0..=max_deg, ring.num_vars()), -10i64..10), 0..=max_terms).prop_map(move |pairs| {
            Poly::from_pairs(pairs.into_iter().map(|(e, c)| (e, Q::from_integer(c))), ring)
        })
    }

    fn arb_pair(
        max_terms: usize,
        max_deg: u32,
    ) -> impl Strategy<Value = (PolyRing, Poly<Q>, Poly<Q>)> {
        arb_ring().prop_flat_map(move |ring| {
            (
                Just(ring),
                arb_poly(ring, max_terms, max_deg),
                arb_poly(ring, max_terms, max_deg),
            )
        })
    }

    fn eager() -> MultConfig {
        MultConfig::default()
            .with_term_product_threshold(0)
            .with_degree_product_threshold(0)
    }

    fn naive_power(f: &Poly<Q>, n: u32) -> Poly<Q> {
        (0..n).fold(Poly::one(f.ring()), |acc, _| acc.mul_naive(f))
    }

    proptest! {
        #[test]
        fn dispatcher_matches_naive((ring, f, g) in arb_pair(20, 20)) {
            let mut m = FastMultiplier::new(ring);
            prop_assert_eq!(m.multiply(&f, &g), f.mul_naive(&g));
        }

        #[test]
        fn eager_dispatcher_matches_naive((ring, f, g) in arb_pair(12, 20)) {
            let mut m = FastMultiplier::with_config(ring, eager());
            prop_assert_eq!(m.multiply(&f, &g), f.mul_naive(&g));
        }

        #[test]
        fn every_split_variable_matches_naive((ring, f, g) in arb_pair(12, 20)) {
            let expected = f.mul_naive(&g);
            let mut m = FastMultiplier::with_config(ring, eager());
            for var in 0..ring.num_vars() {
                let (df, dg) = (f.degree_in(var), g.degree_in(var));
                for recursion in [Recursion::Univariate, Recursion::Dispatch] {
                    let product = m.mul_with_bounds(&f, df, &g, dg, var, recursion);
                    prop_assert_eq!(&product, &expected, "var {} {:?}", var, recursion);
                }
            }
        }

        #[test]
        fn loose_bounds_match_naive((ring, f, g) in arb_pair(8, 10), slack in 0u32..20) {
            let mut m = FastMultiplier::new(ring);
            let product = m.mul_with_bounds(
                &f,
                f.degree_in(0) + slack,
                &g,
                g.degree_in(0),
                0,
                Recursion::Dispatch,
            );
            prop_assert_eq!(product, f.mul_naive(&g));
        }

        #[test]
        fn unifast_matches_naive((ring, f, g) in arb_pair(20, 20)) {
            let mut m = FastMultiplier::new(ring);
            prop_assert_eq!(m.unifast_mult(&f, &g), f.mul_naive(&g));
        }

        #[test]
        fn multiply_by_zero((ring, f, _g) in arb_pair(20, 20)) {
            let zero = Poly::zero(ring);
            let mut m = FastMultiplier::with_config(ring, eager());
            prop_assert!(m.multiply(&f, &zero).is_zero());
            prop_assert!(m.multiply(&zero, &f).is_zero());
            prop_assert!(m.unifast_mult(&f, &zero).is_zero());
        }

        #[test]
        fn multiply_commutes((ring, f, g) in arb_pair(15, 12)) {
            let mut m = FastMultiplier::new(ring);
            prop_assert_eq!(m.multiply(&f, &g), m.multiply(&g, &f));
        }

        #[test]
        fn split_shift_round_trip(
            (ring, p, _q) in arb_pair(20, 20),
            threshold in 0u32..=21,
            var_seed in 0usize..3,
        ) {
            let var = var_seed % ring.num_vars();
            let (mut high, low) = split(p.clone(), threshold, var);
            prop_assert_eq!(high.len() + low.len(), p.len());
            shift_down(&mut high, threshold, var);
            prop_assert_eq!(low + shift_up(high, threshold, var), p);
        }

        #[test]
        fn finite_field_dispatcher_matches_naive(
            a in vec(any::<u64>(), 0..30),
            b in vec(any::<u64>(), 0..30),
        ) {
            let ring = PolyRing::univariate();
            let to_poly = |cs: &[u64]| {
                Poly::from_pairs(
                    cs.iter()
                        .enumerate()
                        .map(|(i, &c)| (vec![i as u32], GF998244353::new(c))),
                    ring,
                )
            };
            let (f, g) = (to_poly(&a), to_poly(&b));
            let mut m = FastMultiplier::new(ring);
            prop_assert_eq!(m.multiply(&f, &g), f.mul_naive(&g));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn power_algorithms_agree((_ring, f, _g) in arb_pair(4, 3), n in 0u32..=12) {
            let expected = naive_power(&f, n);
            let mut m = FastMultiplier::new(f.ring());
            prop_assert_eq!(&m.repeated_squaring(&f, n), &expected);
            prop_assert_eq!(&multinomial_power(&f, n).unwrap(), &expected);
        }
    }
}
