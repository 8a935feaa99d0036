//! Opaque token key generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of generated token keys, in characters.
pub const TOKEN_KEY_LENGTH: usize = 40;

/// Generate a random opaque token key.
pub fn generate_token_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_KEY_LENGTH)
        .map(char::from)
        .collect()
}
