//! Candidate key allocation.
//!
//! A caller-supplied key is passed through untouched. Otherwise a key is drawn
//! from the 46-symbol hiragana alphabet, one uniform draw per position.

use rand::Rng;

/// Key length used when the caller asks for neither a key nor a length.
pub const DEFAULT_KEY_LENGTH: usize = 4;

/// Inclusive bounds for caller-supplied keys and requested key lengths.
pub const MIN_KEY_LENGTH: usize = 2;
pub const MAX_KEY_LENGTH: usize = 30;

/// The closed, ordered symbol alphabet random keys are drawn from.
pub const HIRAGANA: [char; 46] = [
    'あ', 'い', 'う', 'え', 'お', 'か', 'き', 'く', 'け', 'こ', 'さ', 'し', 'す', 'せ', 'そ', 'た',
    'ち', 'つ', 'て', 'と', 'な', 'に', 'ぬ', 'ね', 'の', 'は', 'ひ', 'ふ', 'へ', 'ほ', 'ま', 'み',
    'む', 'め', 'も', 'や', 'ゆ', 'よ', 'ら', 'り', 'る', 'れ', 'ろ', 'わ', 'を', 'ん',
];

/// Returns the candidate key for a create request.
///
/// A non-empty `requested_key` is returned verbatim. Otherwise a random key of
/// `requested_length` symbols is generated; a missing or zero length falls back
/// to [`DEFAULT_KEY_LENGTH`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(allocate(Some("custom".into()), None), "custom");
/// assert_eq!(allocate(None, None).chars().count(), 4);
/// ```
pub fn allocate(requested_key: Option<String>, requested_length: Option<usize>) -> String {
    match requested_key {
        Some(key) if !key.is_empty() => key,
        _ => {
            let length = requested_length
                .filter(|&len| len > 0)
                .unwrap_or(DEFAULT_KEY_LENGTH);
            generate_key(length)
        }
    }
}

/// Generates a random key of `length` symbols using the thread-local RNG.
pub fn generate_key(length: usize) -> String {
    generate_key_with(&mut rand::rng(), length)
}

/// Generates a random key of `length` symbols from the given RNG.
///
/// `random_range` samples without modulo bias, so every symbol has probability
/// exactly 1/46 at every position.
pub fn generate_key_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| HIRAGANA[rng.random_range(0..HIRAGANA.len())])
        .collect()
}
