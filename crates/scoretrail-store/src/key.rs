//! Subject key derivation

/// Prefix shared by every history key
pub const SUBJECT_KEY_PREFIX: &str = "history-";

// 32 hex chars = 128 bits of the blake3 digest
const DIGEST_HEX_LEN: usize = 32;

/// Derive the storage key for a subject URL
///
/// The URL is treated as an opaque string: no trimming or normalization, so
/// `https://a.test` and `https://a.test/` are different subjects.
pub fn subject_key(url: &str) -> String {
    let digest = blake3::hash(url.as_bytes()).to_hex();
    format!("{}{}", SUBJECT_KEY_PREFIX, &digest.as_str()[..DIGEST_HEX_LEN])
}
