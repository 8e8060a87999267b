use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use subtle::ConstantTimeEq;

/// Checks `candidate` against the stored admin password.
///
/// Stored values in argon2 PHC form (`$argon2id$...`) are verified as hashes.
/// Anything else is a plaintext password and must match byte for byte.
pub fn matches(stored: &str, candidate: &str) -> bool {
    if stored.starts_with("$argon2") {
        return match PasswordHash::new(stored) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        };
    }

    stored.as_bytes().ct_eq(candidate.as_bytes()).into()
}
