//! Verifiable secret sharing over elliptic curves.
//!
//! A dealer splits a secret into shares with [`split`] (or [`Dealer`]); each
//! participant checks its share against the public commitments with
//! [`Share::verify`]; any `threshold` shares recover the secret with [`combine`].

pub mod error;
pub mod field;
mod field_element;
pub mod lagrange;
pub mod p256;
pub mod point;
pub mod polynomial;
pub mod sampling;
pub mod scalar;
pub mod scheme;
pub mod secp256k1;
pub mod share;
pub mod split;

#[cfg(test)]
mod test_fields;

pub use error::{ConfigError, InputError, VssError};
pub use field::Curve;
pub use lagrange::{combine, combine_on};
pub use point::Point;
pub use scheme::Scheme;
pub use share::Share;
pub use split::{split, Dealer, Dealing, MAX_PARTS, MAX_THRESHOLD};
