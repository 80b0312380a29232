//! Retrieval Code Generation
//!
//! Produces fixed-length codes from an unambiguous alphabet. Codes double as
//! capability tokens, so they are drawn from the OS CSPRNG rather than a
//! seeded generator.

use rand::rngs::OsRng;
use rand::Rng;

use crate::store::CODE_LENGTH;

// == Alphabet ==
/// Code alphabet: uppercase letters and digits, excluding the visually
/// confusable I, L, O, 0 and 1. 31 symbols gives a keyspace of 31^6
/// (~887 million) for 6-character codes.
pub const ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

// == Generate ==
/// Generates a random retrieval code of `CODE_LENGTH` characters.
///
/// Uniqueness against live codes is NOT checked here; the store performs the
/// collision check under its own lock so generate-and-insert stays atomic.
pub fn generate() -> String {
    let mut rng = OsRng;
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

// == Normalize ==
/// Normalizes a user-supplied code to the alphabet's case.
///
/// Codes are matched case-insensitively on input; the store only ever holds
/// uppercase codes.
pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
