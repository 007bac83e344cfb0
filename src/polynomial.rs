use crate::error::VssError;
use crate::field::{Curve, ScalarField};
use crate::point::Point;
use crate::sampling::nonzero_scalar;
use crate::scalar::Scalar;
use rand::TryRngCore;

/// A polynomial f(x) = a0 + a1*x + ... + a_{t-1}*x^{t-1} over the scalar field F_n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly<F: ScalarField> {
    /// Coefficients a0, a1, ..., a_{t-1}
    pub coeffs: Vec<Scalar<F>>,
}

impl<F: ScalarField> Poly<F> {
    /// Construct a polynomial from explicit coefficients.
    pub fn from_coeffs(coeffs: Vec<Scalar<F>>) -> Self {
        Poly { coeffs }
    }

    /// Degree of the polynomial (t-1 if threshold is t).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Threshold (number of coefficients).
    pub fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    /// A polynomial of the given degree with `constant` as a0 and every
    /// higher coefficient drawn uniformly from `[1, n)`.
    pub fn random<R: TryRngCore + ?Sized>(
        rng: &mut R,
        constant: Scalar<F>,
        degree: usize,
    ) -> Result<Self, VssError> {
        let mut coeffs = Vec::with_capacity(degree + 1);
        coeffs.push(constant);
        for _ in 0..degree {
            coeffs.push(nonzero_scalar::<F, R>(rng)?);
        }
        Ok(Poly { coeffs })
    }

    /// Evaluate the polynomial at x using Horner's method.
    pub fn eval(&self, x: &Scalar<F>) -> Scalar<F> {
        let mut result = Scalar::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }
}

impl<C: Curve> Poly<C> {
    /// Commit to each coefficient by computing G * a_j, yielding EC point commitments.
    pub fn commit(&self) -> Vec<Point<C>> {
        self.coeffs.iter().map(Point::base_mul).collect()
    }
}
