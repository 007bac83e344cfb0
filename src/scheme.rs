/// Which commitment layout a dealing uses.
///
/// The same value must be passed to [`Dealer`](crate::split::Dealer) and to
/// [`Share::verify`](crate::share::Share::verify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// One commitment per coefficient of the secret polynomial.
    #[default]
    Feldman,
    /// Secret-polynomial commitments followed by commitments to a second,
    /// independently random blinding polynomial whose constant term is zero.
    Pedersen,
}

impl Scheme {
    /// Number of commitments a dealing with this scheme publishes, or `None`
    /// if that count does not fit in a `usize`.
    pub fn commitment_len(self, threshold: usize) -> Option<usize> {
        match self {
            Scheme::Feldman => Some(threshold),
            Scheme::Pedersen => threshold.checked_mul(2),
        }
    }

    pub fn is_blinded(self) -> bool {
        self == Scheme::Pedersen
    }
}
