use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use crate::field::Field;
use num_bigint::BigUint;
use num_traits::{One, Zero};

// Using phantom data to avoid the need to store the prime number for every field element.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldElement<F: Field> {
    value: BigUint,
    _marker: PhantomData<F>,
}

impl<F: Field> FieldElement<F> {
    pub fn new(value: BigUint) -> Self {
        Self {
            value: value % F::prime(),
            _marker: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(BigUint::zero())
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        self.value.modinv(F::prime()).map(Self::new)
    }

    pub fn square(&self) -> Self {
        Self::new(&self.value * &self.value)
    }

    /// Square root for `p ≡ 3 (mod 4)`, `None` if `self` is not a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        let p = F::prime();
        if (p % 4u8) != BigUint::from(3u8) {
            return None;
        }
        let exp = (p + BigUint::one()) >> 2;
        let root = Self::new(self.value.modpow(&exp, p));
        if &root.square() == self {
            Some(root)
        } else {
            None
        }
    }

    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.value)
    }
}

impl<F: Field> Debug for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:#x})", self.value)
    }
}

impl<F: Field> Add<&FieldElement<F>> for FieldElement<F> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        Self::new(self.value + &rhs.value)
    }
}

impl<F: Field> Sub<&FieldElement<F>> for FieldElement<F> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        Self::new(self.value + (F::prime() - &rhs.value))
    }
}

impl<F: Field> Mul<&FieldElement<F>> for FieldElement<F> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        Self::new(self.value * &rhs.value)
    }
}

impl<F: Field> Neg for FieldElement<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(F::prime() - self.value)
    }
}
