//! Rule-set fingerprinting for schema staleness detection

use sha2::{Digest, Sha256};

/// Compute a deterministic fingerprint over a set of rule names.
///
/// Names are sorted before hashing, so the fingerprint depends only on
/// the name *set*, not on the host's enumeration order. Each name is
/// terminated with a NUL byte before digesting (rule names are UTF-8
/// and never contain NUL), so name boundaries participate in the hash
/// and `{"ab", "c"}` cannot collide with `{"a", "bc"}`. The result is
/// the lowercase hex SHA-256.
///
/// Values and metadata do not participate: the fingerprint changes iff
/// a rule is added, removed, or renamed.
pub fn compute_fingerprint<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<S> = names.into_iter().collect();
    sorted.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

    let mut hasher = Sha256::new();
    for name in &sorted {
        hasher.update(name.as_ref().as_bytes());
        hasher.update([0u8]);
    }
    format!("{:x}", hasher.finalize())
}
