//! Share document loading, decoding, and emission.
//!
//! The document is a JSON object with a `keys` header and one entry per
//! share, keyed by the share's x-coordinate in decimal:
//!
//! ```json
//! {
//!   "keys": { "n": 3, "k": 2 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "16", "value": "7" },
//!   "3": { "base": "2",  "value": "1010" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use unseal_recovery::Share;

/// Document header: total share count and reconstruction threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentKeys {
    pub n: usize,
    pub k: usize,
}

/// One share as written in the document.
///
/// Both fields are strings in the wire format, `base` included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedShare {
    pub base: String,
    pub value: String,
}

/// The full share document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareDocument {
    pub keys: DocumentKeys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

/// Read and parse a share document from disk.
pub fn load_document(path: &Path) -> anyhow::Result<ShareDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read shares file {}", path.display()))?;
    let document: ShareDocument = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse shares file {}", path.display()))?;
    Ok(document)
}

/// Decode every entry of a document into exact integer shares.
///
/// JSON object keys are unique, so two shares can never collide on x here.
/// A `keys.n` that disagrees with the actual entry count is logged and
/// ignored; the shares themselves are what counts.
///
/// # Returns
/// The document's threshold and the shares sorted ascending by x
pub fn decode_document(document: &ShareDocument) -> anyhow::Result<(usize, Vec<Share>)> {
    let mut shares = Vec::with_capacity(document.shares.len());

    for (label, entry) in &document.shares {
        let x: BigInt = label
            .parse()
            .with_context(|| format!("share key '{label}' is not a decimal integer"))?;
        let base: u32 = entry
            .base
            .parse()
            .with_context(|| format!("share '{label}' has a malformed base '{}'", entry.base))?;
        let y = unseal_codec::decode(&entry.value, base)
            .with_context(|| format!("share '{label}' has an undecodable value"))?;
        shares.push(Share { x, y });
    }

    if document.keys.n != shares.len() {
        log::warn!(
            "document declares n={} but contains {} shares",
            document.keys.n,
            shares.len()
        );
    }

    shares.sort_by(|a, b| a.x.cmp(&b.x));
    Ok((document.keys.k, shares))
}

/// Build a document from freshly split shares, every value encoded in `base`.
pub fn encode_document(
    shares: &[Share],
    threshold: usize,
    base: u32,
) -> anyhow::Result<ShareDocument> {
    let mut encoded = BTreeMap::new();
    for share in shares {
        let entry = EncodedShare {
            base: base.to_string(),
            value: unseal_codec::encode(&share.y, base)?,
        };
        encoded.insert(share.x.to_string(), entry);
    }

    Ok(ShareDocument {
        keys: DocumentKeys {
            n: shares.len(),
            k: threshold,
        },
        shares: encoded,
    })
}
