use gf256_sharing::entropy::SeededEntropy;
use gf256_sharing::{ArithmeticMode, ErrorKind, SecretSharing, SharingError, SharingSession};
use proptest::prelude::*;

fn session(mode: ArithmeticMode, seed: u8) -> SharingSession<SeededEntropy> {
    SharingSession::with_source(SeededEntropy::from_seed([seed; 32]), mode)
}

fn split_all<S: SecretSharing>(sss: &S, secret: &[u8], count: usize) -> Vec<Vec<u8>> {
    let len = sss.output_size(secret.len());
    let mut shares = vec![vec![0u8; len]; count];
    let mut views: Vec<&mut [u8]> = shares.iter_mut().map(Vec::as_mut_slice).collect();
    let written = sss.split(secret, &mut views).unwrap();
    assert_eq!(written, secret.len());
    shares
}

fn join_all<S: SecretSharing>(sss: &S, shares: &[Vec<u8>]) -> Vec<u8> {
    let views: Vec<&[u8]> = shares.iter().map(Vec::as_slice).collect();
    let mut secret = vec![0u8; views[0].len()];
    let written = sss.join(&views, &mut secret).unwrap();
    assert_eq!(written, secret.len());
    secret
}

#[test]
fn every_threshold_and_byte_value_round_trips() {
    let secret: Vec<u8> = (0..=255u8).collect();
    let mut sss = session(ArithmeticMode::Table, 1);
    for t in 1..=255u32 {
        let ids: Vec<u32> = (1..=t).collect();
        sss.configure(t as usize, &ids).unwrap();
        let shares = split_all(&sss, &secret, ids.len());
        assert_eq!(join_all(&sss, &shares), secret, "threshold {}", t);
    }
}

#[test]
fn bit_serial_engine_round_trips() {
    let secret: Vec<u8> = (0..=255u8).collect();
    let mut sss = session(ArithmeticMode::BitSerial, 2);
    for t in 1..=32u32 {
        let ids: Vec<u32> = (256 - t..=255).collect();
        sss.configure(t as usize, &ids).unwrap();
        let shares = split_all(&sss, &secret, ids.len());
        assert_eq!(join_all(&sss, &shares), secret, "threshold {}", t);
    }
}

#[test]
fn single_byte_two_of_two() {
    let mut sss = session(ArithmeticMode::Table, 3);
    sss.configure(2, &[1, 2]).unwrap();
    let shares = split_all(&sss, &[0x41], 2);
    assert_eq!(join_all(&sss, &shares), vec![0x41]);
}

#[test]
fn three_of_five_after_reconfiguring() {
    let secret = [0xDE, 0xAD, 0xBE, 0xEF, 0x00];
    let mut sss = session(ArithmeticMode::Table, 4);
    sss.configure(3, &[1, 2, 3, 4, 5]).unwrap();
    let shares = split_all(&sss, &secret, 5);

    sss.configure(3, &[1, 3, 5]).unwrap();
    let picked = [shares[0].clone(), shares[2].clone(), shares[4].clone()];
    assert_eq!(join_all(&sss, &picked), secret.to_vec());
}

#[test]
fn zero_length_secret() {
    let mut sss = session(ArithmeticMode::Table, 5);
    sss.configure(2, &[1, 2]).unwrap();
    let shares = split_all(&sss, &[], 2);
    assert!(shares.iter().all(Vec::is_empty));
    assert!(join_all(&sss, &shares).is_empty());
}

#[test]
fn validation_errors() {
    let mut sss = session(ArithmeticMode::Table, 6);
    assert_eq!(sss.configure(0, &[1]).unwrap_err().kind(), ErrorKind::InvalidConfiguration);
    assert_eq!(sss.configure(1, &[]).unwrap_err().kind(), ErrorKind::InvalidConfiguration);
    assert_eq!(sss.configure(1, &[256]), Err(SharingError::IdentifierOutOfRange(256)));
    assert_eq!(sss.rekey().unwrap_err().kind(), ErrorKind::NotInitialized);

    sss.configure(2, &[1, 2]).unwrap();
    let mut a = [0u8; 1];
    let err = sss.split(&[7], &mut [&mut a[..]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedBuffers);

    let mut out = [0u8; 2];
    let err = sss.join(&[&[1u8, 2][..], &[3u8][..]], &mut out).unwrap_err();
    assert_eq!(err, SharingError::LengthMismatch { expected: 2, actual: 1 });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn length_is_preserved(
        secret in prop::collection::vec(any::<u8>(), 0..2048),
        threshold in 1usize..8,
        extra in 0usize..4,
        seed in any::<u8>(),
    ) {
        let ids: Vec<u32> = (1..=(threshold + extra) as u32).collect();
        let mut sss = session(ArithmeticMode::Table, seed);
        sss.configure(threshold, &ids).unwrap();
        prop_assert_eq!(sss.output_size(secret.len()), secret.len());

        let shares = split_all(&sss, &secret, ids.len());
        prop_assert!(shares.iter().all(|s| s.len() == secret.len()));
        prop_assert_eq!(join_all(&sss, &shares), secret);
    }

    #[test]
    fn any_threshold_subset_reconstructs(
        secret in prop::collection::vec(any::<u8>(), 1..64),
        ids in prop::sample::subsequence((0u32..=255).collect::<Vec<_>>(), 2..12),
        seed in any::<u8>(),
    ) {
        let threshold = ids.len() / 2 + 1;
        let mut sss = session(ArithmeticMode::Table, seed);
        sss.configure(threshold, &ids).unwrap();
        let shares = split_all(&sss, &secret, ids.len());

        let picked_ids: Vec<u32> = ids.iter().rev().take(threshold).copied().collect();
        let picked: Vec<Vec<u8>> = shares.iter().rev().take(threshold).cloned().collect();
        sss.configure(threshold, &picked_ids).unwrap();
        prop_assert_eq!(join_all(&sss, &picked), secret);
    }

    #[test]
    fn engines_agree(a in any::<u8>(), b in any::<u8>()) {
        use gf256_sharing::core::gf256::{mul_bitwise, product_table};
        prop_assert_eq!(product_table().get(a, b), mul_bitwise(a, b));
    }
}
