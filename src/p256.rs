//! NIST P-256 (secp256r1): `y² = x³ - 3x + b` over `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.

use std::sync::LazyLock;

use num_bigint::BigUint;

use crate::{
    field::{Curve, Field, ScalarField},
    point::Point,
    scalar::Scalar,
};

const P256_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];
const P256_B: [u8; 32] = [
    0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86, 0xBC,
    0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6, 0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2, 0x60, 0x4B,
];
const P256_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63, 0x25, 0x51,
];
const P256_G_X: [u8; 32] = [
    0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40, 0xF2,
    0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98, 0xC2, 0x96,
];
const P256_G_Y: [u8; 32] = [
    0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E, 0x16,
    0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF, 0x51, 0xF5,
];

static PRIME: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&P256_P));
// A = -3 mod p
static A: LazyLock<BigUint> = LazyLock::new(|| &*PRIME - 3u8);
static B: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&P256_B));
static ORDER: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&P256_N));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P256;

pub type P256Point = Point<P256>;
pub type P256Scalar = Scalar<P256>;

impl Field for P256 {
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

impl ScalarField for P256 {
    fn order() -> &'static BigUint {
        &ORDER
    }
}

impl Curve for P256 {
    fn generator() -> Point<Self> {
        Point::from_coordinates_unchecked(
            BigUint::from_bytes_be(&P256_G_X),
            BigUint::from_bytes_be(&P256_G_Y),
        )
    }
}
