// tests/vss.rs
// End-to-end split / verify / combine scenarios
use ec_vss::field::ScalarField;
use ec_vss::p256::{P256Point, P256};
use ec_vss::secp256k1::Secp256k1;
use ec_vss::{combine, combine_on, split, Dealer, Scheme, Share, VssError};
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Every k-element subset of `items`.
fn subsets<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![vec![]];
    }
    if items.len() < k {
        return vec![];
    }
    let mut with_first: Vec<Vec<T>> = subsets(&items[1..], k - 1)
        .into_iter()
        .map(|mut rest| {
            rest.insert(0, items[0].clone());
            rest
        })
        .collect();
    with_first.extend(subsets(&items[1..], k));
    with_first
}

#[test]
fn split_verify_combine_p256() {
    let secret = BigUint::from(42u8);
    let dealing = split::<P256, _>(&mut rand::rng(), &secret, 5, 3, Scheme::Feldman).unwrap();

    for subset in subsets(&dealing.shares, 3) {
        assert_eq!(combine_on::<P256>(&subset).unwrap(), secret);
    }

    for share in &dealing.shares {
        assert_eq!(share.verify(3, &dealing.commitments, Scheme::Feldman), Ok(true));
    }
}

#[test]
fn split_verify_combine_pedersen() {
    let secret = BigUint::from(42u8);
    let dealing = Dealer::<P256>::new(5, 3)
        .scheme(Scheme::Pedersen)
        .secret(secret.clone())
        .split(&mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(dealing.commitments.len(), 6);

    for share in &dealing.shares {
        assert_eq!(share.verify(3, &dealing.commitments, Scheme::Pedersen), Ok(true));
    }
    // the blinding polynomial has a zero constant term
    for subset in subsets(&dealing.shares, 3) {
        assert_eq!(combine_on::<P256>(&subset).unwrap(), secret);
    }
}

#[test]
fn split_verify_combine_secp256k1() {
    let secret = BigUint::parse_bytes(b"1f2e3d4c5b6a79881f2e3d4c5b6a7988", 16).unwrap();
    let dealing =
        split::<Secp256k1, _>(&mut StdRng::seed_from_u64(9), &secret, 4, 2, Scheme::Feldman)
            .unwrap();
    assert_eq!(dealing.verify_all(), Ok(true));
    assert_eq!(
        combine(Secp256k1::order(), &dealing.shares[1..3]).unwrap(),
        secret
    );
}

#[test]
fn shares_have_distinct_nonzero_x() {
    let dealing =
        split::<P256, _>(&mut rand::rng(), &BigUint::from(1u8), 40, 2, Scheme::Feldman).unwrap();
    for (i, a) in dealing.shares.iter().enumerate() {
        assert!(a.x > BigUint::ZERO);
        for b in &dealing.shares[i + 1..] {
            assert_ne!(a.x, b.x);
        }
    }
}

#[test]
fn tampered_share_is_detected() {
    let dealing =
        split::<P256, _>(&mut StdRng::seed_from_u64(11), &BigUint::from(42u8), 5, 3, Scheme::Feldman)
            .unwrap();
    let mut bad = dealing.shares[0].clone();
    bad.y = (&bad.y + 1u8) % P256::order();
    assert_eq!(bad.verify(3, &dealing.commitments, Scheme::Feldman), Ok(false));

    // a share from another dealing fails as well
    let other =
        split::<P256, _>(&mut StdRng::seed_from_u64(12), &BigUint::from(42u8), 5, 3, Scheme::Feldman)
            .unwrap();
    assert_eq!(
        other.shares[0].verify(3, &dealing.commitments, Scheme::Feldman),
        Ok(false)
    );
}

#[test]
fn tampered_pedersen_share_is_detected() {
    let dealing = Dealer::<P256>::new(5, 3)
        .scheme(Scheme::Pedersen)
        .secret(BigUint::from(42u8))
        .split(&mut StdRng::seed_from_u64(13))
        .unwrap();
    assert_eq!(dealing.verify_all(), Ok(true));

    let mut bad = dealing.shares[1].clone();
    bad.y = (&bad.y + 1u8) % P256::order();
    assert_eq!(bad.verify(3, &dealing.commitments, Scheme::Pedersen), Ok(false));

    let mut tampered = dealing.clone();
    tampered.shares[4] = bad;
    assert_eq!(tampered.verify_all(), Ok(false));

    // a share dealt under a different blinding polynomial fails too
    let other = Dealer::<P256>::new(5, 3)
        .scheme(Scheme::Pedersen)
        .secret(BigUint::from(42u8))
        .split(&mut StdRng::seed_from_u64(14))
        .unwrap();
    assert_eq!(
        other.shares[0].verify(3, &dealing.commitments, Scheme::Pedersen),
        Ok(false)
    );
}

#[test]
fn scheme_mismatch_is_caller_error() {
    let dealing = Dealer::<P256>::new(3, 2)
        .scheme(Scheme::Pedersen)
        .secret(BigUint::from(5u8))
        .split(&mut StdRng::seed_from_u64(5))
        .unwrap();
    let share = &dealing.shares[0];
    // four commitments read as a Feldman threshold-4 set is simply wrong
    assert_eq!(share.verify(4, &dealing.commitments, Scheme::Feldman), Ok(false));
    assert_eq!(
        share.verify(2, &dealing.commitments, Scheme::Feldman),
        Err(VssError::CommitmentLengthMismatch {
            expected: 2,
            got: 4
        })
    );
}

#[test]
fn insufficient_shares_give_wrong_secret() {
    let secret = BigUint::from(42u8);
    let dealing =
        split::<P256, _>(&mut StdRng::seed_from_u64(21), &secret, 5, 3, Scheme::Feldman).unwrap();
    let partial = combine_on::<P256>(&dealing.shares[..2]).unwrap();
    assert_ne!(partial, secret);
}

#[test]
fn bounds() {
    let secret = BigUint::from(42u8);
    let err = split::<P256, _>(&mut rand::rng(), &secret, 256, 3, Scheme::Feldman).unwrap_err();
    assert!(err.is_configuration());
    let err = split::<P256, _>(&mut rand::rng(), &secret, 5, 6, Scheme::Feldman).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn commitments_survive_sec1_transport() {
    let dealing =
        split::<P256, _>(&mut StdRng::seed_from_u64(8), &BigUint::from(42u8), 3, 2, Scheme::Feldman)
            .unwrap();
    let decoded: Vec<P256Point> = dealing
        .commitments
        .iter()
        .map(|c| P256Point::from_sec1(&c.to_sec1(true)).unwrap())
        .collect();
    assert_eq!(decoded, dealing.commitments);
    let share = Share::new(dealing.shares[1].x.clone(), dealing.shares[1].y.clone());
    assert_eq!(share.verify(2, &decoded, Scheme::Feldman), Ok(true));
}

fn any_scheme() -> impl Strategy<Value = Scheme> {
    prop_oneof![Just(Scheme::Feldman), Just(Scheme::Pedersen)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn any_threshold_subset_recovers_secret(
        secret_bytes in prop::array::uniform32(any::<u8>()),
        threshold in 1usize..5,
        extra in 0usize..4,
        offset in 0usize..8,
        seed in any::<u64>(),
        scheme in any_scheme(),
    ) {
        let secret = BigUint::from_bytes_be(&secret_bytes) % P256::order();
        let parts = threshold + extra;
        let dealing = split::<P256, _>(
            &mut StdRng::seed_from_u64(seed),
            &secret,
            parts,
            threshold,
            scheme,
        )
        .unwrap();
        prop_assert_eq!(dealing.shares.len(), parts);
        prop_assert_eq!(dealing.commitments.len(), scheme.commitment_len(threshold).unwrap());
        prop_assert_eq!(dealing.verify_all(), Ok(true));

        let start = offset % (extra + 1);
        let subset = &dealing.shares[start..start + threshold];
        prop_assert_eq!(combine_on::<P256>(subset).unwrap(), secret);
    }
}
