use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::VssError;
use crate::field::{Curve, ScalarField};
use crate::point::Point;
use crate::scalar::Scalar;
use crate::scheme::Scheme;

/// One point `(x, f(x))` on the dealer's polynomial, handed to one participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: BigUint,
    pub y: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Share { x, y }
    }

    /// Verify this share against a dealer's public commitments.
    ///
    /// Checks `y·G == Σ_k C_k · x^k`. Under [`Scheme::Pedersen`] the same sum
    /// is also taken over the second half of `commitments` and added in,
    /// since `y` is then the sum of both polynomials evaluated at `x`.
    ///
    /// Returns `Ok(false)` for a share that does not match, and an error only
    /// for malformed input.
    pub fn verify<C: Curve>(
        &self,
        threshold: usize,
        commitments: &[Point<C>],
        scheme: Scheme,
    ) -> Result<bool, VssError> {
        let got = commitments.len();
        let expected = scheme.commitment_len(threshold);
        // An empty set commits to nothing; every y = 0 would match it.
        if threshold == 0 || got == 0 || expected != Some(got) {
            return Err(VssError::CommitmentLengthMismatch {
                expected: expected.unwrap_or(usize::MAX),
                got,
            });
        }
        let (x, y) = self.scalars::<C>()?;

        let (secret_part, blinding_part) = commitments.split_at(threshold);
        let mut rhs = accumulate(secret_part, &x);
        if scheme.is_blinded() {
            rhs = rhs + &accumulate(blinding_part, &x);
        }

        let lhs = Point::base_mul(&y);
        Ok(lhs == rhs)
    }

    /// Interpret the coordinates as canonical scalars of `C`'s group:
    /// `x ∈ [1, n)` and `y ∈ [0, n)`.
    fn scalars<C: Curve>(&self) -> Result<(Scalar<C>, Scalar<C>), VssError> {
        if self.x.is_zero() {
            return Err(VssError::NotOnCurve);
        }
        let x = Scalar::<C>::from_canonical(&self.x).ok_or(VssError::NotOnCurve)?;
        let y = Scalar::<C>::from_canonical(&self.y).ok_or(VssError::NotOnCurve)?;
        Ok((x, y))
    }
}

/// `Σ_k C_k · x^k`, summed into a fresh identity point.
#[allow(non_snake_case)]
fn accumulate<C: Curve>(commitments: &[Point<C>], x: &Scalar<C>) -> Point<C> {
    let mut acc = Point::identity();
    let mut tk = Scalar::<C>::one();
    for Ck in commitments {
        acc = acc + &(Ck * &tk);
        tk = tk * x;
    }
    acc
}

impl<F: ScalarField> From<(Scalar<F>, Scalar<F>)> for Share {
    fn from((x, y): (Scalar<F>, Scalar<F>)) -> Self {
        Share::new(x.into_value(), y.into_value())
    }
}
