use sha2::{Digest, Sha256};
use std::path::Path;

/// Compute the SHA-256 hash of a file, returning a lowercase hex string.
///
/// `Sha256` implements `Write`, so the file streams straight into the
/// hasher without an intermediate buffer of our own.
pub fn sha256_file(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
