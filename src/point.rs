use std::{
    fmt::{self, Debug},
    ops::{Add, Mul, Neg, Sub},
};

use crate::{
    error::VssError,
    field::{Curve, Field, ScalarField},
    field_element::FieldElement,
    scalar::Scalar,
};
use num_bigint::BigUint;
use num_integer::Integer;

/// An affine point on `y² = x³ + A·x + B` over `F`, or the point at infinity.
///
/// Points are value types: every operation returns a fresh point, so a
/// commitment handed out by a dealer can never be altered by a verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct Point<F: Field> {
    x: FieldElement<F>,
    y: FieldElement<F>,
    infinite: bool,
}

impl<F: Field> Point<F> {
    /// Build a point from affine coordinates, rejecting anything off the curve.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, VssError> {
        if &x >= F::prime() || &y >= F::prime() {
            return Err(VssError::NotOnCurve);
        }
        let point = Self {
            x: FieldElement::new(x),
            y: FieldElement::new(y),
            infinite: false,
        };
        if !point.is_on_curve() {
            return Err(VssError::NotOnCurve);
        }
        Ok(point)
    }

    pub(crate) fn from_coordinates_unchecked(x: BigUint, y: BigUint) -> Self {
        Self {
            x: FieldElement::new(x),
            y: FieldElement::new(y),
            infinite: false,
        }
    }

    pub fn from_hex_xy(x: &str, y: &str) -> Result<Self, VssError> {
        let parse = |s: &str| {
            hex::decode(s)
                .map(|b| BigUint::from_bytes_be(&b))
                .map_err(|e| VssError::InvalidEncoding(e.to_string()))
        };
        Self::new(parse(x)?, parse(y)?)
    }

    pub fn identity() -> Self {
        Self::infinity()
    }

    /// Returns the point at infinity (identity element).
    pub fn infinity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            infinite: true,
        }
    }

    /// Check if the point is at infinity.
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn x(&self) -> &BigUint {
        self.x.value()
    }

    pub fn y(&self) -> &BigUint {
        self.y.value()
    }

    /// `y² == x³ + A·x + B (mod p)`; the identity is on every curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinite {
            return true;
        }
        self.y.square() == Self::curve_rhs(&self.x)
    }

    fn curve_rhs(x: &FieldElement<F>) -> FieldElement<F> {
        let a = FieldElement::<F>::new(F::a().clone());
        let b = FieldElement::<F>::new(F::b().clone());
        x.square() * x + &(a * x) + &b
    }

    /// Point doubling: P + P
    pub fn double(&self) -> Self {
        if self.is_infinite() {
            return self.clone();
        }
        // Vertical tangent when y = 0
        let Some(inv_two_y) = (self.y.clone() + &self.y).inverse() else {
            return Self::infinity();
        };

        let x_sq = self.x.square();
        let a = FieldElement::<F>::new(F::a().clone());
        let three_x_sq_a = x_sq.clone() + &x_sq + &x_sq + &a;
        let two_x = self.x.clone() + &self.x;

        let s = three_x_sq_a * &inv_two_y;
        let x = s.square() - &two_x;
        let y = s * &(self.x.clone() - &x) - &self.y;

        Self {
            x,
            y,
            infinite: false,
        }
    }

    /// Double-and-add multiplication by a non-negative integer.
    pub fn mul_biguint(&self, k: &BigUint) -> Self {
        let mut result = Self::infinity();
        for i in (0..k.bits()).rev() {
            result = result.double();
            if k.bit(i) {
                result = result + self;
            }
        }
        result
    }

    /// Byte length of one encoded coordinate.
    fn coordinate_len() -> usize {
        F::prime().bits().div_ceil(8) as usize
    }

    /// SEC1 encoding: `0x02/0x03 || x` compressed, `0x04 || x || y` otherwise.
    /// The identity is encoded as the single byte `0x00`.
    pub fn to_sec1(&self, compressed: bool) -> Vec<u8> {
        if self.infinite {
            return vec![0x00];
        }
        let len = Self::coordinate_len();
        let mut out = Vec::with_capacity(1 + 2 * len);
        if compressed {
            out.push(if self.y.value().is_odd() { 0x03 } else { 0x02 });
            out.extend(pad_be(self.x.value(), len));
        } else {
            out.push(0x04);
            out.extend(pad_be(self.x.value(), len));
            out.extend(pad_be(self.y.value(), len));
        }
        out
    }

    /// Parse a SEC1 encoded point, checking that it lies on the curve.
    pub fn from_sec1(bytes: &[u8]) -> Result<Self, VssError> {
        let len = Self::coordinate_len();
        match bytes {
            [0x00] => Ok(Self::infinity()),
            [0x04, rest @ ..] if rest.len() == 2 * len => Self::new(
                BigUint::from_bytes_be(&rest[..len]),
                BigUint::from_bytes_be(&rest[len..]),
            ),
            [tag @ (0x02 | 0x03), rest @ ..] if rest.len() == len => {
                let x_int = BigUint::from_bytes_be(rest);
                if &x_int >= F::prime() {
                    return Err(VssError::NotOnCurve);
                }
                let x = FieldElement::<F>::new(x_int);
                let y = Self::curve_rhs(&x).sqrt().ok_or(VssError::NotOnCurve)?;
                let y = if y.value().is_odd() == (*tag == 0x03) { y } else { -y };
                Ok(Self {
                    x,
                    y,
                    infinite: false,
                })
            }
            _ => Err(VssError::InvalidEncoding(format!(
                "unexpected length {} or tag",
                bytes.len()
            ))),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_sec1(true))
    }
}

impl<C: Curve> Point<C> {
    pub fn generator() -> Self {
        C::generator()
    }

    /// `k·G`
    pub fn base_mul(k: &Scalar<C>) -> Self {
        C::generator().mul_biguint(k.value())
    }
}

fn pad_be(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut buf = vec![0u8; len.saturating_sub(bytes.len())];
    buf.extend(bytes);
    buf
}

impl<F: Field> Debug for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinite {
            write!(f, "Point(infinity)")
        } else {
            write!(f, "Point({}, {})", self.x.to_hex(), self.y.to_hex())
        }
    }
}

impl<F: Field> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<F: Field> Add<&Point<F>> for Point<F> {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        if self.is_infinite() {
            return other.clone();
        }
        if other.is_infinite() {
            return self;
        }

        if self.x == other.x {
            // P + (-P) = O, otherwise it's point doubling
            if self.y != other.y {
                return Self::infinity();
            }
            return self.double();
        }

        // slope `s = (y2 - y1) / (x2 - x1)`, the denominator is nonzero here
        let Some(inv_dx) = (other.x.clone() - &self.x).inverse() else {
            return Self::infinity();
        };
        let s = (other.y.clone() - &self.y) * &inv_dx;
        let x = s.square() - &self.x - &other.x;
        let y = s * &(self.x - &x) - &self.y;
        Self {
            x,
            y,
            infinite: false,
        }
    }
}

impl<F: Field> Add<&Point<F>> for &Point<F> {
    type Output = Point<F>;

    fn add(self, other: &Point<F>) -> Point<F> {
        self.clone() + other
    }
}

impl<F: Field> Sub<&Point<F>> for Point<F> {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        self + &(-other)
    }
}

impl<F: Field> Neg for Point<F> {
    type Output = Self;
    fn neg(self) -> Self {
        if self.infinite {
            self
        } else {
            Self {
                x: self.x,
                y: -self.y,
                infinite: false,
            }
        }
    }
}

impl<F: Field> Neg for &Point<F> {
    type Output = Point<F>;
    fn neg(self) -> Point<F> {
        -self.clone()
    }
}

impl<F: Field, S: ScalarField> Mul<&Point<F>> for &Scalar<S> {
    type Output = Point<F>;

    fn mul(self, rhs: &Point<F>) -> Self::Output {
        rhs.mul_biguint(self.value())
    }
}

impl<F: Field, S: ScalarField> Mul<&Scalar<S>> for &Point<F> {
    type Output = Point<F>;

    fn mul(self, rhs: &Scalar<S>) -> Self::Output {
        self.mul_biguint(rhs.value())
    }
}
