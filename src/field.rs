use std::fmt::Debug;

use num_bigint::BigUint;

use crate::point::Point;

/// Trait representing an elliptic curve base field (used for `x`, `y` coordinates)
pub trait Field: Clone + Debug + PartialEq + Eq {
    /// The modulus `p` of the field (F_p)
    fn prime() -> &'static BigUint;
    /// Curve coefficient A in the Weierstrass equation: `y² = x³ + A·x + B`
    fn a() -> &'static BigUint;
    /// Curve coefficient B in the Weierstrass equation: `y² = x³ + A·x + B`
    fn b() -> &'static BigUint;
}

/// Trait representing a scalar field (F_n), usually the order of the curve group
pub trait ScalarField: Clone + Debug + PartialEq + Eq {
    /// The order `n` of the group
    fn order() -> &'static BigUint;
}

/// A short Weierstrass curve together with a base point of prime order `n`.
///
/// Secrets, share coordinates and polynomial coefficients are all reduced
/// modulo [`ScalarField::order`], since commitments are multiples of the base point.
pub trait Curve: Field + ScalarField {
    /// The base point `G`.
    fn generator() -> Point<Self>;
}
