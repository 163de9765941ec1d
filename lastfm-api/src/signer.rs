//! Request signing
//!
//! The signature is the lowercase hex MD5 of every `name` + `value` pair in
//! name order, followed by the shared secret. The web service recomputes it
//! from what it received, so signing must see exactly the parameters that
//! are sent.

use md5::{Digest, Md5};

use crate::params::ParameterSet;

/// Parameter carrying the signature itself
pub const SIGNATURE_PARAMETER: &str = "api_sig";

/// Parameters the web service leaves out when it verifies a signature
const UNSIGNED_PARAMETERS: [&str; 3] = ["format", "callback", SIGNATURE_PARAMETER];

/// Compute the request signature for `params` with the shared `secret`
pub fn sign(params: &ParameterSet, secret: &str) -> String {
    let mut hasher = Md5::new();

    for (name, value) in params
        .sorted_pairs()
        .filter(|(name, _)| !UNSIGNED_PARAMETERS.contains(name))
    {
        hasher.update(name.as_bytes());
        hasher.update(value.as_bytes());
    }
    hasher.update(secret.as_bytes());

    format!("{:x}", hasher.finalize())
}
