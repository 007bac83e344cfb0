//! Lagrange interpolation at zero, used to recombine shares.
//!
//! Arithmetic is done directly on `BigUint` modulo a caller supplied order so
//! shares dealt over any prime field can be combined.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::VssError;
use crate::field::{Curve, ScalarField};
use crate::share::Share;

/// Lagrange basis coefficient for `xs[i]`, evaluated at zero:
/// ```text
/// L_i = ∏_{j ≠ i} x_j / (x_j - x_i)  (mod m)
/// ```
fn lagrange_coefficient(order: &BigUint, xs: &[BigUint], i: usize) -> Result<BigUint, VssError> {
    if order.is_zero() {
        return Err(VssError::NoModularInverse);
    }
    let xi = &xs[i] % order;
    let mut basis = BigUint::one();
    for (j, xj) in xs.iter().enumerate() {
        if i == j {
            continue;
        }
        let xj = xj % order;
        // (xj - xi) mod m
        let denom = (&xj + order - &xi) % order;
        let denom_inv = denom.modinv(order).ok_or(VssError::NoModularInverse)?;
        basis = basis * xj % order * denom_inv % order;
    }
    Ok(basis)
}

/// Reconstruct the secret `f(0)` from shares by Lagrange interpolation.
///
/// The caller must supply at least `threshold` shares with pairwise-distinct
/// x-coordinates. Fewer shares are not detected: the result is simply some
/// other field element.
pub fn combine(order: &BigUint, shares: &[Share]) -> Result<BigUint, VssError> {
    let xs: Vec<BigUint> = shares.iter().map(|s| s.x.clone()).collect();
    let mut secret = BigUint::zero();
    for (i, share) in shares.iter().enumerate() {
        let basis = lagrange_coefficient(order, &xs, i)?;
        secret = (secret + (&share.y % order) * basis) % order;
    }
    Ok(secret)
}

/// [`combine`] over the group order of `C`.
pub fn combine_on<C: Curve>(shares: &[Share]) -> Result<BigUint, VssError> {
    combine(<C as ScalarField>::order(), shares)
}
