//! Rendering of recovery reports, for humans and for machines.

use num_bigint::BigInt;
use num_traits::Signed;
use serde_json::{Value, json};
use unseal_recovery::{Finding, RecoveryReport};

/// Print the human-readable report to stdout.
///
/// One line for the secret, one line per finding, and a closing summary
/// when every share checked out.
pub fn print_text(report: &RecoveryReport) {
    if report.secret.is_integer() {
        println!("Recovered secret: {}", report.secret);
    } else {
        println!("Recovered secret: {}  ⚠️ non-integer", report.secret);
    }

    for finding in &report.findings {
        match finding {
            Finding::Deviation {
                x,
                declared,
                predicted,
                deviation,
            } => {
                println!(
                    "⚠️  share x={x} deviates: declared {declared}, predicted {predicted} (deviation {})",
                    signed(deviation)
                );
            }
            Finding::NonIntegerPrediction { x, predicted } => {
                println!("⚠️  share x={x}: predicted value {predicted} is not an integer");
            }
        }
    }

    if report.is_consistent() {
        println!(
            "✅ all {} shares are consistent with the reconstructed polynomial",
            report.share_count
        );
    }
}

/// Render the report as a JSON value.
///
/// Big integers are stringified so consumers never lose precision to
/// double parsing.
pub fn to_json(report: &RecoveryReport) -> Value {
    let findings: Vec<Value> = report
        .findings
        .iter()
        .map(|finding| match finding {
            Finding::Deviation {
                x,
                declared,
                predicted,
                deviation,
            } => json!({
                "kind": "deviation",
                "x": x.to_string(),
                "declared": declared.to_string(),
                "predicted": predicted.to_string(),
                "deviation": deviation.to_string(),
            }),
            Finding::NonIntegerPrediction { x, predicted } => json!({
                "kind": "non_integer_prediction",
                "x": x.to_string(),
                "predicted": predicted.to_string(),
            }),
        })
        .collect();

    json!({
        "secret": report.secret.to_string(),
        "secret_is_integer": report.secret.is_integer(),
        "threshold": report.threshold,
        "share_count": report.share_count,
        "basis_x": report.basis_x.iter().map(BigInt::to_string).collect::<Vec<_>>(),
        "findings": findings,
    })
}

/// Format with an explicit sign, so a deviation always reads `+d` or `-d`.
fn signed(value: &BigInt) -> String {
    if value.is_negative() {
        value.to_string()
    } else {
        format!("+{value}")
    }
}
