use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    field::{Curve, Field, ScalarField},
    point::Point,
    scalar::Scalar,
};

// p = 2^256 - 2^32 - 977
const SECP256K1_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];
const SECP256K1_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];
const SECP256K1_G_X: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];
const SECP256K1_G_Y: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
];

static PRIME: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&SECP256K1_P));
static A: LazyLock<BigUint> = LazyLock::new(BigUint::zero);
static B: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(7u8));
static ORDER: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&SECP256K1_N));

/// secp256k1: `y² = x³ + 7` over `p = 2^256 − 2^32 − 977`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1;

pub type Secp256k1Point = Point<Secp256k1>;
pub type Secp256k1Scalar = Scalar<Secp256k1>;

impl Field for Secp256k1 {
    fn prime() -> &'static BigUint {
        &PRIME
    }

    fn a() -> &'static BigUint {
        &A
    }

    fn b() -> &'static BigUint {
        &B
    }
}

impl ScalarField for Secp256k1 {
    fn order() -> &'static BigUint {
        &ORDER
    }
}

impl Curve for Secp256k1 {
    fn generator() -> Point<Self> {
        Point::from_coordinates_unchecked(
            BigUint::from_bytes_be(&SECP256K1_G_X),
            BigUint::from_bytes_be(&SECP256K1_G_Y),
        )
    }
}
