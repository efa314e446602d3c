//! Property-based tests using `proptest` for exact decimal arithmetic and
//! scale conversion.
//!
//! 1. **Scale round-trip**: values with at most `s` decimals survive
//!    to-wire then from-wire at scale `s`.
//! 2. **Truncation symmetry**: scaling `-x` gives the negation of scaling `x`.
//! 3. **Ring laws**: addition and multiplication commute and associate.
//! 4. **Division identity**: `a == trunc(a / b) × b + a % b`.
//! 5. **Canonical text**: rendering is a fixed point of parse-then-render.

use proptest::prelude::*;

use super::{BigInt, Precise};
use crate::scale::{from_scaled_integer, to_scaled_integer};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn decimal_strategy() -> impl Strategy<Value = Precise> {
    (any::<i64>(), 0u32..=20).prop_map(|(m, s)| Precise::new(BigInt::from(m), s))
}

fn nonzero_decimal_strategy() -> impl Strategy<Value = Precise> {
    decimal_strategy().prop_filter("divisor must be non-zero", |p| !p.is_zero())
}

fn parse(text: &str) -> Precise {
    let Ok(value) = text.parse::<Precise>() else {
        panic!("canonical output must parse: {text}");
    };
    value
}

// ---------------------------------------------------------------------------
// Scale conversion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_scale_round_trip(
        mantissa in any::<i64>(),
        decimals in 0u32..=18,
        headroom in 0u32..=18,
    ) {
        let scale = decimals + headroom;
        let value = Precise::new(BigInt::from(mantissa), decimals).to_string();

        let Ok(wire) = to_scaled_integer(value.as_str(), scale) else {
            panic!("valid decimal must scale");
        };
        let Ok(back) = from_scaled_integer(Some(wire.as_str()), scale) else {
            panic!("wire integer must unscale");
        };
        prop_assert_eq!(back, Some(value));
    }

    #[test]
    fn prop_truncation_is_sign_symmetric(value in decimal_strategy(), scale in 0u32..=12) {
        let positive = value.abs();
        let negative = -positive.clone();

        let Ok(up) = to_scaled_integer(&positive, scale) else {
            panic!("valid decimal must scale");
        };
        let Ok(down) = to_scaled_integer(&negative, scale) else {
            panic!("valid decimal must scale");
        };
        prop_assert_eq!(parse(&down), -parse(&up));
    }

    #[test]
    fn prop_wire_value_is_integer(value in decimal_strategy(), scale in 0u32..=12) {
        let Ok(wire) = to_scaled_integer(&value, scale) else {
            panic!("valid decimal must scale");
        };
        prop_assert!(!wire.contains('.'), "wire value {} has a fraction", wire);
        // |wire| never exceeds |value × 10^scale|
        let Ok(exact) = value.shift_scale(-(scale as i32)) else {
            panic!("shift within range");
        };
        prop_assert!(parse(&wire).abs() <= exact.abs());
    }
}

// ---------------------------------------------------------------------------
// Arithmetic laws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_add_commutes_and_associates(
        a in decimal_strategy(),
        b in decimal_strategy(),
        c in decimal_strategy(),
    ) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn prop_mul_commutes_and_associates(
        a in decimal_strategy(),
        b in decimal_strategy(),
        c in decimal_strategy(),
    ) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn prop_division_identity(a in decimal_strategy(), b in nonzero_decimal_strategy()) {
        let Ok(quotient) = a.checked_div(&b, 0) else {
            panic!("non-zero divisor");
        };
        let Ok(remainder) = a.checked_rem(&b) else {
            panic!("non-zero divisor");
        };
        prop_assert!(quotient.is_integer());
        prop_assert_eq!(&(&quotient * &b) + &remainder, a.clone());
        prop_assert!(remainder.abs() < b.abs());
        prop_assert!(remainder.is_zero() || remainder.signum() == a.signum());
    }

    #[test]
    fn prop_canonical_text_is_fixed_point(a in decimal_strategy()) {
        let text = a.to_string();
        let reparsed = parse(&text);
        prop_assert_eq!(reparsed.to_string(), text.clone());
        prop_assert!(reparsed.is_reduced());
        prop_assert!(!text.starts_with("-0") || text.starts_with("-0."));
    }
}
