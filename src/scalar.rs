use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ops::{Add, Mul};

use crate::field::ScalarField;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Used for everything that's 'scalar' in the crypto sense:
/// secrets, polynomial coefficients, share coordinates and commitment exponents.
/// Modulus = n, the order of the group (for P-256: n = 0xFFFFFFFF00000000…2551)
#[derive(Clone, PartialEq, Eq)]
pub struct Scalar<F: ScalarField> {
    pub(crate) value: BigUint,
    _marker: PhantomData<F>,
}

impl<F: ScalarField> Debug for Scalar<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({:#x})", self.value)
    }
}

impl<F: ScalarField> Scalar<F> {
    /// Construct a scalar reduced modulo the field order
    pub fn new(value: BigUint) -> Self {
        Self {
            value: value % F::order(),
            _marker: PhantomData,
        }
    }

    /// Construct a scalar only if `value` already lies in `[0, n)`.
    pub fn from_canonical(value: &BigUint) -> Option<Self> {
        if value < F::order() {
            Some(Self {
                value: value.clone(),
                _marker: PhantomData,
            })
        } else {
            None
        }
    }

    pub fn zero() -> Self {
        Self::new(BigUint::zero())
    }

    pub fn one() -> Self {
        Self::new(BigUint::one())
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Return the raw BigUint value
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }
}

impl<F: ScalarField> Add<&Scalar<F>> for Scalar<F> {
    type Output = Self;
    fn add(self, rhs: &Self) -> Self {
        Scalar::new(self.value + &rhs.value)
    }
}

impl<F: ScalarField> Mul<&Scalar<F>> for Scalar<F> {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        Scalar::new(self.value * &rhs.value)
    }
}

impl<F: ScalarField> Mul<&Scalar<F>> for &Scalar<F> {
    type Output = Scalar<F>;
    fn mul(self, rhs: &Scalar<F>) -> Scalar<F> {
        Scalar::new(&self.value * &rhs.value)
    }
}

impl<F: ScalarField> fmt::Display for Scalar<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.value)
    }
}
