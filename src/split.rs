use std::marker::PhantomData;

use num_bigint::BigUint;
use rand::TryRngCore;

use crate::error::{ConfigError, InputError, VssError};
use crate::field::Curve;
use crate::point::Point;
use crate::polynomial::Poly;
use crate::sampling::unique_coords;
use crate::scalar::Scalar;
use crate::scheme::Scheme;
use crate::share::Share;

/// Maximum number of shares a single dealing may produce.
pub const MAX_PARTS: usize = 255;
/// Maximum reconstruction threshold.
pub const MAX_THRESHOLD: usize = 255;

/// Shares and public commitments produced by one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealing<C: Curve> {
    pub shares: Vec<Share>,
    /// `threshold` points, or `2 * threshold` under [`Scheme::Pedersen`]
    /// (secret-polynomial commitments first).
    pub commitments: Vec<Point<C>>,
    pub threshold: usize,
    pub scheme: Scheme,
}

impl<C: Curve> Dealing<C> {
    /// Check every share against this dealing's own commitments.
    pub fn verify_all(&self) -> Result<bool, VssError> {
        for share in &self.shares {
            if !share.verify(self.threshold, &self.commitments, self.scheme)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Split parameters, validated when [`Dealer::split`] runs.
///
/// ```ignore
/// let dealing = Dealer::<P256>::new(5, 3)
///     .scheme(Scheme::Pedersen)
///     .secret(BigUint::from(42u8))
///     .split(&mut rand::rng())?;
/// ```
#[derive(Debug, Clone)]
pub struct Dealer<C: Curve> {
    parts: usize,
    threshold: usize,
    scheme: Scheme,
    secret: Option<BigUint>,
    _curve: PhantomData<C>,
}

impl<C: Curve> Dealer<C> {
    pub fn new(parts: usize, threshold: usize) -> Self {
        Dealer {
            parts,
            threshold,
            scheme: Scheme::default(),
            secret: None,
            _curve: PhantomData,
        }
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn secret(mut self, secret: BigUint) -> Self {
        self.secret = Some(secret);
        self
    }

    fn validate(&self) -> Result<Scalar<C>, VssError> {
        let (parts, threshold) = (self.parts, self.threshold);
        if threshold < 1 {
            return Err(VssError::from(ConfigError::ThresholdTooSmall));
        }
        if parts < threshold {
            return Err(VssError::from(ConfigError::PartsBelowThreshold { parts, threshold }));
        }
        if parts > MAX_PARTS {
            return Err(VssError::from(ConfigError::TooManyParts {
                parts,
                max: MAX_PARTS,
            }));
        }
        if threshold > MAX_THRESHOLD {
            return Err(VssError::from(ConfigError::ThresholdTooLarge {
                threshold,
                max: MAX_THRESHOLD,
            }));
        }
        let secret = self.secret.as_ref().ok_or(InputError::MissingSecret)?;
        let secret = Scalar::from_canonical(secret).ok_or(InputError::SecretOutOfRange)?;
        Ok(secret)
    }

    /// Deal the secret: build the polynomial(s), commit, and evaluate at
    /// `parts` distinct nonzero x-coordinates.
    ///
    /// Any `threshold` of the returned shares recombine to the secret.
    /// Entropy errors abort the whole split; no partial dealing is returned.
    pub fn split<R: TryRngCore + ?Sized>(&self, rng: &mut R) -> Result<Dealing<C>, VssError> {
        let secret = self.validate()?;
        let degree = self.threshold - 1;

        let poly = Poly::<C>::random(rng, secret, degree)?;
        let mut commitments = poly.commit();

        // The blinding polynomial lives in the same field as the secret one.
        let blinding = match self.scheme {
            Scheme::Feldman => None,
            Scheme::Pedersen => {
                let blinding = Poly::<C>::random(rng, Scalar::zero(), degree)?;
                commitments.extend(blinding.commit());
                Some(blinding)
            }
        };

        let xs = unique_coords::<C, R>(rng, self.parts)?;
        let shares = xs
            .into_iter()
            .map(|x| {
                let mut y = poly.eval(&x);
                if let Some(blinding) = &blinding {
                    y = y + &blinding.eval(&x);
                }
                Share::from((x, y))
            })
            .collect();

        Ok(Dealing {
            shares,
            commitments,
            threshold: self.threshold,
            scheme: self.scheme,
        })
    }
}

/// Split `secret` into `parts` shares, any `threshold` of which recover it.
///
/// This function is typically executed by the dealer.
pub fn split<C, R>(
    rng: &mut R,
    secret: &BigUint,
    parts: usize,
    threshold: usize,
    scheme: Scheme,
) -> Result<Dealing<C>, VssError>
where
    C: Curve,
    R: TryRngCore + ?Sized,
{
    Dealer::<C>::new(parts, threshold)
        .scheme(scheme)
        .secret(secret.clone())
        .split(rng)
}
