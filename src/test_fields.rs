//! Toy fields shared by the unit tests.

use std::sync::LazyLock;

use num_bigint::BigUint;

use crate::field::{Field, ScalarField};

macro_rules! toy_field {
    ($name:ident, $p:expr, $a:expr, $b:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Field for $name {
            fn prime() -> &'static BigUint {
                static P: LazyLock<BigUint> = LazyLock::new(|| BigUint::from($p as u64));
                &P
            }
            fn a() -> &'static BigUint {
                static A: LazyLock<BigUint> = LazyLock::new(|| BigUint::from($a as u64));
                &A
            }
            fn b() -> &'static BigUint {
                static B: LazyLock<BigUint> = LazyLock::new(|| BigUint::from($b as u64));
                &B
            }
        }

        impl ScalarField for $name {
            fn order() -> &'static BigUint {
                <$name as Field>::prime()
            }
        }
    };
}

// GF(7), GF(31): small enough to hit every rejection branch
toy_field!(F7, 7, 0, 3);
toy_field!(F31, 31, 0, 7);

// y² = x³ + 7 over F₂₂₃
toy_field!(Field223, 223, 0, 7);
