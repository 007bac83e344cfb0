//! Drawing field elements from an injected entropy source.
//!
//! Every rejection loop here is bounded by [`MAX_DRAW_ATTEMPTS`] per accepted
//! value, so a broken source that keeps producing the same bytes ends in a
//! [`VssError::RandomSource`] instead of spinning forever.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryRngCore;

use crate::{error::VssError, field::ScalarField, scalar::Scalar};

/// Upper bound on candidate draws for a single accepted value.
pub const MAX_DRAW_ATTEMPTS: usize = 1024;

fn fill<R: TryRngCore + ?Sized>(rng: &mut R, buf: &mut [u8]) -> Result<(), VssError> {
    rng.try_fill_bytes(buf)
        .map_err(|e| VssError::RandomSource(e.to_string()))
}

/// One candidate in `[0, 2^bits(bound))`: big-endian bytes with the excess top bits masked off.
fn candidate<R: TryRngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> Result<BigUint, VssError> {
    let bits = bound.bits();
    let mut buf = vec![0u8; bits.div_ceil(8) as usize];
    fill(rng, &mut buf)?;
    let excess = buf.len() as u64 * 8 - bits;
    if let Some(first) = buf.first_mut() {
        *first &= 0xFF >> excess;
    }
    Ok(BigUint::from_bytes_be(&buf))
}

/// Draw uniformly from `[1, n)` where `n` is the order of `F`, discarding zero.
pub fn nonzero_scalar<F, R>(rng: &mut R) -> Result<Scalar<F>, VssError>
where
    F: ScalarField,
    R: TryRngCore + ?Sized,
{
    let order = F::order();
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let v = candidate(rng, order)?;
        // Discard coefficients == 0
        if v.is_zero() || &v >= order {
            continue;
        }
        return Ok(Scalar::new(v));
    }
    Err(VssError::RandomSource(format!(
        "no nonzero value below the field order after {MAX_DRAW_ATTEMPTS} draws"
    )))
}

/// `n` pairwise-distinct nonzero field elements, used as share x-coordinates.
pub fn unique_coords<F, R>(rng: &mut R, n: usize) -> Result<Vec<Scalar<F>>, VssError>
where
    F: ScalarField,
    R: TryRngCore + ?Sized,
{
    let mut result: Vec<Scalar<F>> = Vec::with_capacity(n);
    while result.len() < n {
        let mut accepted = false;
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let x = nonzero_scalar::<F, R>(rng)?;
            if !result.contains(&x) {
                result.push(x);
                accepted = true;
                break;
            }
        }
        if !accepted {
            return Err(VssError::RandomSource(format!(
                "no fresh x-coordinate after {MAX_DRAW_ATTEMPTS} draws"
            )));
        }
    }
    Ok(result)
}
