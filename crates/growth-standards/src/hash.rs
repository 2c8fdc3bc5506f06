use sha2::{Digest, Sha256};

/// SHA-256 over the given sources, in order, as lowercase hex.
///
/// Each source is length-prefixed so that moving bytes between sources
/// changes the digest.
pub fn fingerprint<'a>(sources: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut hasher = Sha256::new();
    for source in sources {
        hasher.update((source.len() as u64).to_le_bytes());
        hasher.update(source);
    }
    hex::encode(hasher.finalize())
}
