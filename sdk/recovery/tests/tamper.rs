use num_bigint::BigInt;
use unseal_recovery::{Finding, recover, split_secret};

#[test]
fn tampered_share_is_flagged_with_exact_deviation() {
    let secret = BigInt::from(5_550_123);
    let mut shares = split_secret(&secret, 3, 6).unwrap();

    // Bump a share outside the basis (basis is the three smallest x).
    shares[4].y += 17;

    let report = recover(&shares, 3).unwrap();
    assert_eq!(report.secret.to_integer().unwrap(), secret);
    assert_eq!(report.findings.len(), 1);

    match &report.findings[0] {
        Finding::Deviation {
            x,
            declared,
            predicted,
            deviation,
        } => {
            assert_eq!(x, &shares[4].x);
            assert_eq!(declared, &shares[4].y);
            assert_eq!(deviation, &BigInt::from(17));
            assert_eq!(predicted + deviation, shares[4].y);
        }
        other => panic!("expected deviation, got {other:?}"),
    }
}

#[test]
fn tampered_basis_share_corrupts_the_secret() {
    let secret = BigInt::from(777);
    let mut shares = split_secret(&secret, 2, 4).unwrap();

    // Corrupting a basis share changes the polynomial itself; honest shares
    // now read as deviating instead.
    shares[0].y += 1;

    let report = recover(&shares, 2).unwrap();
    assert_ne!(
        report.secret.to_integer().ok(),
        Some(secret),
        "corrupted basis should not reproduce the original secret"
    );
    assert!(!report.is_consistent());
}

#[test]
fn lowered_share_reports_negative_deviation() {
    let secret = BigInt::from(31_337);
    let mut shares = split_secret(&secret, 2, 5).unwrap();

    shares[3].y -= 9;

    let report = recover(&shares, 2).unwrap();
    let deviations: Vec<&BigInt> = report
        .findings
        .iter()
        .filter_map(|finding| match finding {
            Finding::Deviation { deviation, .. } => Some(deviation),
            _ => None,
        })
        .collect();
    assert_eq!(deviations, vec![&BigInt::from(-9)]);
}

#[test]
fn multiple_tampered_shares_all_reported() {
    let secret = BigInt::from(2024);
    let mut shares = split_secret(&secret, 2, 6).unwrap();

    shares[2].y += 3;
    shares[5].y -= 100;

    let report = recover(&shares, 2).unwrap();
    assert_eq!(report.secret.to_integer().unwrap(), secret);
    assert_eq!(report.findings.len(), 2);
}
